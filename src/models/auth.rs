use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LogoutRequest {
    pub token: String,
}

/// Response payload shared by login and logout. The field names match
/// the original wire schema, so `timeout_seconds` serializes as
/// `timeoutSeconds`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    pub timeout_seconds: u32,
}

impl AuthResponse {
    /// The fixed logout payload: empty token, zero timeout
    pub fn cleared() -> Self {
        Self {
            token: String::new(),
            timeout_seconds: 0,
        }
    }
}
