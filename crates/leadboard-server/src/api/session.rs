use axum::{
    extract::State,
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    Json,
};
use serde::Deserialize;

use super::{ApiError, AppState};
use crate::middleware::{extract_bearer_token, SessionToken};

#[derive(Debug, Deserialize)]
pub(super) struct LoginBody {
    username: String,
    password: String,
}

/// `POST /api/v1/session`: verifies credentials and issues an expiring
/// session token. Failed attempts get a deliberately unspecific message.
pub(super) async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginBody>,
) -> Result<Json<SessionToken>, ApiError> {
    match state.sessions.login(&body.username, &body.password).await {
        Some(session) => Ok(Json(session)),
        None => Err(ApiError::unauthorized("invalid username or password")),
    }
}

/// `DELETE /api/v1/session`: revokes the presented token. Idempotent;
/// revoking an unknown token still answers 204.
pub(super) async fn logout(State(state): State<AppState>, headers: HeaderMap) -> StatusCode {
    if let Some(token) = extract_bearer_token(headers.get(AUTHORIZATION)) {
        state.sessions.logout(token).await;
    }
    StatusCode::NO_CONTENT
}
