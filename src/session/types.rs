// Session types and data structures

use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;
use uuid::Uuid;

/// Session configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// How long a session stays valid after login or refresh
    pub duration_secs: i64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            duration_secs: 86400, // 24 hours
        }
    }
}

/// One authenticated user: the binding between a username, its bearer
/// token, and the current expiration.
#[derive(Debug, Clone)]
pub struct Session {
    /// Username this session belongs to
    pub username: String,
    /// Opaque bearer token, unique while the session is registered
    pub token: String,
    /// Absolute expiration; the session is valid while `now < expires_at`
    pub expires_at: DateTime<Utc>,
}

impl Session {
    /// Create a new session with a freshly minted token
    pub fn new(username: String, config: &SessionConfig) -> Self {
        Self {
            username,
            token: generate_token(),
            expires_at: Utc::now() + Duration::seconds(config.duration_secs),
        }
    }

    /// Extend the expiration without touching the token
    pub fn refresh(&mut self, config: &SessionConfig) {
        self.expires_at = Utc::now() + Duration::seconds(config.duration_secs);
    }

    /// Check whether the session has passed its expiration
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }

    /// Whole seconds left until expiration, clamped at zero
    pub fn remaining_secs(&self) -> u32 {
        let remaining = (self.expires_at - Utc::now()).num_seconds();
        remaining.max(0) as u32
    }
}

/// Result of a successful login: the token plus the whole-second
/// timeout reported to the client.
#[derive(Debug, Clone)]
pub struct AuthGrant {
    pub token: String,
    pub timeout_seconds: u32,
}

/// Mint an opaque token: a v4 UUID rendered as 32 lowercase hex characters
fn generate_token() -> String {
    Uuid::new_v4().simple().to_string()
}
