use std::{
    collections::HashMap,
    sync::Arc,
    time::{Duration, Instant},
};

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderValue, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use leadboard_core::{app_config, AppConfig, DashboardCredentials, Environment};
use serde::Serialize;
use subtle::ConstantTimeEq;
use tokio::sync::Mutex;
use uuid::Uuid;

/// Newtype wrapping a request ID string, stored as a request extension.
#[derive(Debug, Clone)]
pub struct RequestId(pub String);

/// A session token handed to the dashboard after a successful login.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
struct Session {
    expires_at: DateTime<Utc>,
}

/// Server-side session registry gating the dashboard API.
///
/// Replaces the legacy deployment's persisted browser flag: a login issues
/// a random bearer token with an expiry, held only in this process's
/// memory; expired entries are pruned lazily on validation.
#[derive(Clone)]
pub struct SessionState {
    credentials: Option<DashboardCredentials>,
    ttl: chrono::Duration,
    sessions: Arc<Mutex<HashMap<String, Session>>>,
    pub enabled: bool,
}

impl SessionState {
    /// Builds the session gate from config.
    ///
    /// In development, missing credentials disable the gate for local
    /// iteration. In any other environment they fail startup.
    ///
    /// # Errors
    ///
    /// Returns an error when credentials are absent outside development.
    pub fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        let enabled = config.credentials.is_some();
        if !enabled {
            if config.env == Environment::Development {
                tracing::warn!(
                    "LEADBOARD_DASHBOARD_USER/PASSWORD not set; session gate disabled in development environment"
                );
            } else {
                anyhow::bail!(
                    "LEADBOARD_DASHBOARD_USER and LEADBOARD_DASHBOARD_PASSWORD are required outside development"
                );
            }
        }

        Ok(Self {
            credentials: config.credentials.clone(),
            ttl: chrono::Duration::seconds(
                i64::try_from(config.session_ttl_secs).unwrap_or(i64::MAX),
            ),
            sessions: Arc::new(Mutex::new(HashMap::new())),
            enabled,
        })
    }

    /// Verifies a login attempt and issues a token on success.
    ///
    /// Both digests are compared in constant time and both comparisons
    /// always run, so the response time does not reveal which credential
    /// was wrong.
    pub async fn login(&self, username: &str, password: &str) -> Option<SessionToken> {
        let creds = self.credentials.as_ref()?;
        let user_ok = app_config::digest(username)
            .as_slice()
            .ct_eq(creds.username_digest.as_slice());
        let pass_ok = app_config::digest(password)
            .as_slice()
            .ct_eq(creds.password_digest.as_slice());
        if !bool::from(user_ok & pass_ok) {
            return None;
        }

        let token = new_token();
        let expires_at = Utc::now() + self.ttl;
        self.sessions
            .lock()
            .await
            .insert(token.clone(), Session { expires_at });
        Some(SessionToken { token, expires_at })
    }

    /// Revokes a token. Unknown tokens are a no-op.
    pub async fn logout(&self, token: &str) {
        self.sessions.lock().await.remove(token);
    }

    /// Whether `token` names a live session. Expired entries are pruned
    /// on the way.
    pub async fn is_valid(&self, token: &str) -> bool {
        let mut sessions = self.sessions.lock().await;
        let now = Utc::now();
        sessions.retain(|_, session| session.expires_at > now);
        sessions.contains_key(token)
    }
}

/// 32 random bytes, hex-encoded.
fn new_token() -> String {
    use rand::RngCore;
    let mut bytes = [0_u8; 32];
    rand::rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

#[derive(Debug, Clone)]
struct RateLimitWindow {
    started_at: Instant,
    count: usize,
}

/// Sliding fixed-window limiter for simple API protection.
#[derive(Debug, Clone)]
pub struct RateLimitState {
    max_requests: usize,
    window: Duration,
    state: Arc<Mutex<RateLimitWindow>>,
}

impl RateLimitState {
    #[must_use]
    pub fn new(max_requests: usize, window: Duration) -> Self {
        Self {
            max_requests,
            window,
            state: Arc::new(Mutex::new(RateLimitWindow {
                started_at: Instant::now(),
                count: 0,
            })),
        }
    }
}

/// Error body per the dashboard contract: `{"error": "..."}`.
#[derive(Debug, Serialize)]
struct MiddlewareErrorBody {
    error: &'static str,
}

/// Axum middleware that extracts or generates a request ID.
///
/// If the incoming request has an `x-request-id` header, that value is used.
/// Otherwise a new `UUIDv4` is generated. The ID is:
/// - Inserted into request extensions as [`RequestId`]
/// - Set on the response as the `x-request-id` header
pub async fn request_id(mut req: Request, next: Next) -> Response {
    let id = req
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .map_or_else(|| Uuid::new_v4().to_string(), String::from);

    req.extensions_mut().insert(RequestId(id.clone()));

    let mut res = next.run(req).await;

    if let Ok(val) = HeaderValue::from_str(&id) {
        res.headers_mut().insert("x-request-id", val);
    }

    res
}

/// Middleware enforcing a live session token when the gate is enabled.
pub async fn require_session(
    State(sessions): State<SessionState>,
    req: Request,
    next: Next,
) -> Response {
    if !sessions.enabled {
        return next.run(req).await;
    }

    let token = extract_bearer_token(req.headers().get(AUTHORIZATION));

    match token {
        Some(token) if sessions.is_valid(token).await => next.run(req).await,
        _ => (
            StatusCode::UNAUTHORIZED,
            Json(MiddlewareErrorBody {
                error: "missing or expired session token",
            }),
        )
            .into_response(),
    }
}

/// Middleware enforcing a fixed request-per-window limit.
pub async fn enforce_rate_limit(
    State(rate_limit): State<RateLimitState>,
    req: Request,
    next: Next,
) -> Response {
    let mut window = rate_limit.state.lock().await;
    let elapsed = window.started_at.elapsed();

    if elapsed >= rate_limit.window {
        window.started_at = Instant::now();
        window.count = 0;
    }

    if window.count >= rate_limit.max_requests {
        return (
            StatusCode::TOO_MANY_REQUESTS,
            Json(MiddlewareErrorBody {
                error: "rate limit exceeded",
            }),
        )
            .into_response();
    }

    window.count += 1;
    drop(window);

    next.run(req).await
}

pub fn extract_bearer_token(value: Option<&HeaderValue>) -> Option<&str> {
    value
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with(
        credentials: Option<DashboardCredentials>,
        env: Environment,
        ttl_secs: u64,
    ) -> AppConfig {
        AppConfig {
            env,
            bind_addr: "127.0.0.1:0".parse().expect("valid addr"),
            log_level: "info".to_string(),
            sheet_url: None,
            credentials,
            session_ttl_secs: ttl_secs,
            fetch_timeout_secs: 5,
            user_agent: "leadboard-test/0.1".to_string(),
            rate_limit_max: 100,
            rate_limit_window_secs: 60,
        }
    }

    fn gated_config(ttl_secs: u64) -> AppConfig {
        config_with(
            Some(DashboardCredentials::new("ventas", "secreta")),
            Environment::Test,
            ttl_secs,
        )
    }

    #[test]
    fn extract_bearer_token_accepts_valid_header() {
        let header = HeaderValue::from_static("Bearer test-token");
        assert_eq!(extract_bearer_token(Some(&header)), Some("test-token"));
    }

    #[test]
    fn extract_bearer_token_rejects_non_bearer_header() {
        let header = HeaderValue::from_static("Basic abc123");
        assert_eq!(extract_bearer_token(Some(&header)), None);
    }

    #[test]
    fn extract_bearer_token_rejects_blank_token() {
        let header = HeaderValue::from_static("Bearer   ");
        assert_eq!(extract_bearer_token(Some(&header)), None);
    }

    #[test]
    fn session_state_disabled_without_credentials_in_development() {
        let config = config_with(None, Environment::Development, 60);
        let state = SessionState::from_config(&config).expect("dev allows missing credentials");
        assert!(!state.enabled);
    }

    #[test]
    fn session_state_requires_credentials_outside_development() {
        let config = config_with(None, Environment::Production, 60);
        assert!(SessionState::from_config(&config).is_err());
    }

    #[tokio::test]
    async fn login_issues_a_token_for_valid_credentials() {
        let state = SessionState::from_config(&gated_config(60)).expect("valid config");
        let session = state
            .login("ventas", "secreta")
            .await
            .expect("expected a session token");
        assert_eq!(session.token.len(), 64);
        assert!(state.is_valid(&session.token).await);
    }

    #[tokio::test]
    async fn login_rejects_wrong_credentials() {
        let state = SessionState::from_config(&gated_config(60)).expect("valid config");
        assert!(state.login("ventas", "wrong").await.is_none());
        assert!(state.login("wrong", "secreta").await.is_none());
    }

    #[tokio::test]
    async fn logins_issue_distinct_tokens() {
        let state = SessionState::from_config(&gated_config(60)).expect("valid config");
        let first = state.login("ventas", "secreta").await.expect("token");
        let second = state.login("ventas", "secreta").await.expect("token");
        assert_ne!(first.token, second.token);
        assert!(state.is_valid(&first.token).await);
        assert!(state.is_valid(&second.token).await);
    }

    #[tokio::test]
    async fn logout_revokes_the_token() {
        let state = SessionState::from_config(&gated_config(60)).expect("valid config");
        let session = state.login("ventas", "secreta").await.expect("token");
        state.logout(&session.token).await;
        assert!(!state.is_valid(&session.token).await);
    }

    #[tokio::test]
    async fn zero_ttl_sessions_expire_immediately() {
        let state = SessionState::from_config(&gated_config(0)).expect("valid config");
        let session = state.login("ventas", "secreta").await.expect("token");
        assert!(!state.is_valid(&session.token).await);
    }

    #[tokio::test]
    async fn unknown_tokens_are_invalid() {
        let state = SessionState::from_config(&gated_config(60)).expect("valid config");
        assert!(!state.is_valid("deadbeef").await);
    }
}
