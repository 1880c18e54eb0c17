use crate::app_config::{AppConfig, DashboardCredentials, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if env var values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if env var values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual environment
/// so it can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let env = parse_environment(&or_default("LEADBOARD_ENV", "development"));
    let bind_addr = parse_addr("LEADBOARD_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("LEADBOARD_LOG_LEVEL", "info");

    // Absence of the sheet endpoint is recoverable by contract (the
    // dashboard renders an empty collection), so this is not `require`d.
    let sheet_url = lookup("LEADBOARD_SHEET_URL").ok().filter(|s| !s.is_empty());

    let username = lookup("LEADBOARD_DASHBOARD_USER").ok();
    let password = lookup("LEADBOARD_DASHBOARD_PASSWORD").ok();
    let credentials = match (username, password) {
        (Some(user), Some(pass)) => Some(DashboardCredentials::new(&user, &pass)),
        (None, None) => None,
        (Some(_), None) => {
            return Err(ConfigError::InvalidEnvVar {
                var: "LEADBOARD_DASHBOARD_PASSWORD".to_string(),
                reason: "LEADBOARD_DASHBOARD_USER is set without a password".to_string(),
            })
        }
        (None, Some(_)) => {
            return Err(ConfigError::InvalidEnvVar {
                var: "LEADBOARD_DASHBOARD_USER".to_string(),
                reason: "LEADBOARD_DASHBOARD_PASSWORD is set without a username".to_string(),
            })
        }
    };

    let session_ttl_secs = parse_u64("LEADBOARD_SESSION_TTL_SECS", "28800")?;
    let fetch_timeout_secs = parse_u64("LEADBOARD_FETCH_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("LEADBOARD_USER_AGENT", "leadboard/0.1 (lead-dashboard)");
    let rate_limit_max = parse_usize("LEADBOARD_RATE_LIMIT_MAX", "120")?;
    let rate_limit_window_secs = parse_u64("LEADBOARD_RATE_LIMIT_WINDOW_SECS", "60")?;

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        sheet_url,
        credentials,
        session_ttl_secs,
        fetch_timeout_secs,
        user_agent,
        rate_limit_max,
        rate_limit_window_secs,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}
