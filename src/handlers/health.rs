use axum::extract::State;
use axum::{http::StatusCode, Json};
use serde_json::{json, Value};

use crate::session::SessionRegistryState;

pub async fn health_check(State(state): State<SessionRegistryState>) -> (StatusCode, Json<Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "service": "chat-auth-api",
            "version": env!("CARGO_PKG_VERSION"),
            "active_sessions": state.registry.session_count().await
        })),
    )
}
