//! Argon2id implementation of the `CredentialHasher` port.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{self, PasswordHasher, PasswordVerifier, SaltString};
use argon2::{Argon2, PasswordHash as PhcHash};

use crate::domain::PasswordHash;
use crate::domain::ports::{CredentialHasher, CredentialHasherError};

/// Hashes with Argon2id default parameters and a fresh random salt, producing
/// PHC strings that carry their own parameters.
#[derive(Clone, Default)]
pub struct Argon2Hasher {
    argon2: Argon2<'static>,
}

impl CredentialHasher for Argon2Hasher {
    fn hash(&self, password: &str) -> Result<PasswordHash, CredentialHasherError> {
        let salt = SaltString::generate(&mut OsRng);
        let phc = self
            .argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|err| CredentialHasherError::hash(err.to_string()))?;
        Ok(PasswordHash::new(phc.to_string()))
    }

    fn verify(&self, password: &str, hash: &PasswordHash) -> Result<bool, CredentialHasherError> {
        let parsed = PhcHash::new(hash.as_str())
            .map_err(|err| CredentialHasherError::malformed_hash(err.to_string()))?;
        match self.argon2.verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(password_hash::Error::Password) => Ok(false),
            Err(err) => Err(CredentialHasherError::hash(err.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn hasher() -> Argon2Hasher {
        Argon2Hasher::default()
    }

    #[rstest]
    fn hashes_are_argon2id_phc_strings(hasher: Argon2Hasher) {
        let hash = hasher.hash("correct horse").expect("hashes");
        assert!(hash.as_str().starts_with("$argon2id$"));
        assert!(!hash.as_str().contains("correct horse"));
    }

    #[rstest]
    fn salts_differ_between_calls(hasher: Argon2Hasher) {
        let first = hasher.hash("same password").expect("hashes");
        let second = hasher.hash("same password").expect("hashes");
        assert_ne!(first, second);
    }

    #[rstest]
    #[case("correct horse", true)]
    #[case("wrong horse", false)]
    #[case("", false)]
    fn verification_matches_only_the_hashed_password(
        hasher: Argon2Hasher,
        #[case] candidate: &str,
        #[case] expected: bool,
    ) {
        let hash = hasher.hash("correct horse").expect("hashes");
        assert_eq!(hasher.verify(candidate, &hash).expect("verifies"), expected);
    }

    #[rstest]
    fn malformed_hashes_are_reported(hasher: Argon2Hasher) {
        let error = hasher
            .verify("anything", &PasswordHash::new("plaintext"))
            .expect_err("not a PHC string");
        assert!(matches!(error, CredentialHasherError::MalformedHash { .. }));
    }
}
