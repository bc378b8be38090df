//! Port for password hashing.

use crate::domain::PasswordHash;

use super::define_port_error;

define_port_error! {
    /// Errors raised by credential hasher adapters.
    pub enum CredentialHasherError {
        /// Hashing failed, e.g. on invalid parameters.
        Hash { message: String } => "password hashing failed: {message}",
        /// The stored hash could not be parsed.
        MalformedHash { message: String } => "stored password hash is malformed: {message}",
    }
}

/// Hashes and verifies passwords. Implementations are CPU bound and
/// synchronous; callers run them on a blocking-friendly path.
#[cfg_attr(test, mockall::automock)]
pub trait CredentialHasher: Send + Sync {
    fn hash(&self, password: &str) -> Result<PasswordHash, CredentialHasherError>;

    /// `Ok(false)` means the password does not match.
    fn verify(&self, password: &str, hash: &PasswordHash) -> Result<bool, CredentialHasherError>;
}
