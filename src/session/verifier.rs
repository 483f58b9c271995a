// Credential verification backends

use crate::error::AuthError;
use std::collections::HashMap;

/// Trait for pluggable credential verification.
///
/// The registry treats verification as an injected capability: with no
/// verifier installed, any username/password pair is accepted.
pub trait CredentialVerifier: Send + Sync {
    /// Check a username/password pair
    fn verify(&self, username: &str, password: &str) -> Result<(), AuthError>;
}

/// Verifier backed by a static username -> password table, typically
/// loaded from the `credentials` section of the configuration file.
pub struct StaticCredentialVerifier {
    users: HashMap<String, String>,
}

impl StaticCredentialVerifier {
    pub fn new(users: HashMap<String, String>) -> Self {
        Self { users }
    }
}

impl CredentialVerifier for StaticCredentialVerifier {
    fn verify(&self, username: &str, password: &str) -> Result<(), AuthError> {
        match self.users.get(username) {
            Some(expected) if expected == password => Ok(()),
            _ => Err(AuthError::InvalidCredentials),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> StaticCredentialVerifier {
        let mut users = HashMap::new();
        users.insert("alice".to_string(), "secret".to_string());
        StaticCredentialVerifier::new(users)
    }

    #[test]
    fn test_accepts_matching_pair() {
        assert!(table().verify("alice", "secret").is_ok());
    }

    #[test]
    fn test_rejects_wrong_password() {
        assert!(matches!(
            table().verify("alice", "nope"),
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_rejects_unknown_user() {
        assert!(matches!(
            table().verify("mallory", "secret"),
            Err(AuthError::InvalidCredentials)
        ));
    }
}
