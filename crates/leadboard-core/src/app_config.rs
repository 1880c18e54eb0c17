use std::net::SocketAddr;

use sha2::{Digest, Sha256};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Dashboard login credentials, digested at config-load time so the
/// running process never holds the plaintext password.
#[derive(Clone, PartialEq, Eq)]
pub struct DashboardCredentials {
    pub username_digest: [u8; 32],
    pub password_digest: [u8; 32],
}

impl DashboardCredentials {
    #[must_use]
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            username_digest: digest(username),
            password_digest: digest(password),
        }
    }
}

impl std::fmt::Debug for DashboardCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DashboardCredentials")
            .field("username_digest", &"[redacted]")
            .field("password_digest", &"[redacted]")
            .finish()
    }
}

/// Sha-256 digest of a credential string.
#[must_use]
pub fn digest(value: &str) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    hasher.finalize().into()
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Apps Script endpoint serving the lead rows. Optional: a missing
    /// URL is a recoverable condition that yields an empty collection.
    pub sheet_url: Option<String>,
    /// Session-gate credentials. Presence is enforced by the server
    /// outside development, not here.
    pub credentials: Option<DashboardCredentials>,
    pub session_ttl_secs: u64,
    pub fetch_timeout_secs: u64,
    pub user_agent: String,
    pub rate_limit_max: usize,
    pub rate_limit_window_secs: u64,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("sheet_url", &self.sheet_url.as_ref().map(|_| "[redacted]"))
            .field(
                "credentials",
                &self.credentials.as_ref().map(|_| "[redacted]"),
            )
            .field("session_ttl_secs", &self.session_ttl_secs)
            .field("fetch_timeout_secs", &self.fetch_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("rate_limit_max", &self.rate_limit_max)
            .field("rate_limit_window_secs", &self.rate_limit_window_secs)
            .finish()
    }
}
