// Session management module
// Provides token issuance, sliding-expiration refresh, and revocation

pub mod registry;
pub mod types;
pub mod verifier;

pub use registry::{SessionRegistry, SessionRegistryState};
pub use types::{AuthGrant, Session, SessionConfig};
pub use verifier::{CredentialVerifier, StaticCredentialVerifier};
