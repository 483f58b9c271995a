use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};
use tracing::{debug, info};

use crate::error::AuthError;
use crate::models::{AuthResponse, LoginRequest, LogoutRequest};
use crate::session::SessionRegistryState;

/// Authenticate a user and return their session token
pub async fn login(
    State(state): State<SessionRegistryState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, (StatusCode, Json<Value>)> {
    // Validate input
    if payload.username.is_empty() {
        let err = AuthError::InvalidRequest("username must not be empty".to_string());
        return Err((err.status_code(), Json(json!({ "error": err.to_string() }))));
    }

    info!("Login request for username '{}'", payload.username);

    let grant = state
        .registry
        .login(&payload.username, &payload.password)
        .await
        .map_err(|e| (e.status_code(), Json(json!({ "error": e.to_string() }))))?;

    Ok(Json(AuthResponse {
        token: grant.token,
        timeout_seconds: grant.timeout_seconds,
    }))
}

/// Revoke a session token. Always answers with an empty token and zero
/// timeout, whether or not the token was known.
pub async fn logout(
    State(state): State<SessionRegistryState>,
    Json(payload): Json<LogoutRequest>,
) -> Json<AuthResponse> {
    info!("Logout request for token '{}'", payload.token);

    let removed = state.registry.logout(&payload.token).await;
    debug!("Logout removed session: {}", removed);

    Json(AuthResponse::cleared())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{SessionConfig, SessionRegistry};
    use std::sync::Arc;

    fn state() -> SessionRegistryState {
        SessionRegistryState::new(Arc::new(SessionRegistry::new(SessionConfig::default())))
    }

    #[tokio::test]
    async fn test_login_handler_issues_token() {
        let state = state();

        let Json(response) = login(
            State(state),
            Json(LoginRequest {
                username: "alice".to_string(),
                password: "x".to_string(),
            }),
        )
        .await
        .unwrap();

        assert_eq!(response.token.len(), 32);
        assert!(response.timeout_seconds > 0);
    }

    #[tokio::test]
    async fn test_login_handler_rejects_empty_username() {
        let state = state();

        let result = login(
            State(state),
            Json(LoginRequest {
                username: String::new(),
                password: "x".to_string(),
            }),
        )
        .await;

        let (status, _) = result.err().unwrap();
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_logout_handler_clears_payload() {
        let state = state();

        let grant = state.registry.login("alice", "x").await.unwrap();
        let Json(response) = logout(
            State(state.clone()),
            Json(LogoutRequest { token: grant.token }),
        )
        .await;

        assert_eq!(response.token, "");
        assert_eq!(response.timeout_seconds, 0);
        assert_eq!(state.registry.session_count().await, 0);
    }

    #[tokio::test]
    async fn test_logout_handler_unknown_token() {
        let state = state();

        let Json(response) = logout(
            State(state),
            Json(LogoutRequest {
                token: "unknown".to_string(),
            }),
        )
        .await;

        assert_eq!(response.token, "");
        assert_eq!(response.timeout_seconds, 0);
    }
}
