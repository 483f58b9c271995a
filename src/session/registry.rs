// Session registry: the authoritative in-memory session store

use super::types::{AuthGrant, Session, SessionConfig};
use super::verifier::CredentialVerifier;
use crate::error::AuthError;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info};

/// Both indexes live behind one lock so that every login/logout applies
/// its two-map update as a single atomic unit.
#[derive(Default)]
struct Indexes {
    /// token -> session
    by_token: HashMap<String, Session>,
    /// username -> token
    by_username: HashMap<String, String>,
}

/// Authoritative in-memory store of active sessions; sole authority
/// over token issuance and revocation.
///
/// At most one session exists per username: a repeated login refreshes
/// the existing session's expiration and returns the same token. An
/// expired entry that has not been purged yet is refreshed in place the
/// same way rather than being reissued.
pub struct SessionRegistry {
    indexes: Mutex<Indexes>,
    config: SessionConfig,
    verifier: Option<Arc<dyn CredentialVerifier>>,
}

impl SessionRegistry {
    /// Create a registry that accepts any username/password pair
    pub fn new(config: SessionConfig) -> Self {
        Self {
            indexes: Mutex::new(Indexes::default()),
            config,
            verifier: None,
        }
    }

    /// Create a registry that checks credentials through the given verifier
    pub fn with_verifier(config: SessionConfig, verifier: Arc<dyn CredentialVerifier>) -> Self {
        Self {
            indexes: Mutex::new(Indexes::default()),
            config,
            verifier: Some(verifier),
        }
    }

    /// Authenticate a user and issue (or refresh) their session.
    ///
    /// Without a verifier installed any password is accepted. The
    /// returned timeout is the whole-second count until expiration.
    pub async fn login(&self, username: &str, password: &str) -> Result<AuthGrant, AuthError> {
        if let Some(verifier) = &self.verifier {
            verifier.verify(username, password)?;
        }

        let mut indexes = self.indexes.lock().await;

        if let Some(token) = indexes.by_username.get(username).cloned() {
            if let Some(session) = indexes.by_token.get_mut(&token) {
                session.refresh(&self.config);
                let grant = AuthGrant {
                    token,
                    timeout_seconds: session.remaining_secs(),
                };
                debug!("Refreshed session for user '{}'", username);
                return Ok(grant);
            }
        }

        let session = Session::new(username.to_string(), &self.config);
        let grant = AuthGrant {
            token: session.token.clone(),
            timeout_seconds: session.remaining_secs(),
        };

        indexes
            .by_username
            .insert(session.username.clone(), session.token.clone());
        indexes.by_token.insert(session.token.clone(), session);

        info!("Created session for user '{}'", username);
        Ok(grant)
    }

    /// Revoke the session behind `token`.
    ///
    /// Removes both index entries when the token is known, including
    /// tokens that have already expired but were never purged. Unknown
    /// tokens are ignored. Returns whether a session was removed.
    pub async fn logout(&self, token: &str) -> bool {
        let mut indexes = self.indexes.lock().await;

        if let Some(session) = indexes.by_token.remove(token) {
            indexes.by_username.remove(&session.username);
            info!("Removed session for user '{}'", session.username);
            true
        } else {
            debug!("Logout for unknown token ignored");
            false
        }
    }

    /// Look up a session by its token
    pub async fn find_session(&self, token: &str) -> Option<Session> {
        let indexes = self.indexes.lock().await;
        indexes.by_token.get(token).cloned()
    }

    /// Number of sessions currently registered
    pub async fn session_count(&self) -> usize {
        let indexes = self.indexes.lock().await;
        indexes.by_token.len()
    }
}

/// Registry state for use in Axum handlers
#[derive(Clone)]
pub struct SessionRegistryState {
    pub registry: Arc<SessionRegistry>,
}

impl SessionRegistryState {
    pub fn new(registry: Arc<SessionRegistry>) -> Self {
        Self { registry }
    }
}
