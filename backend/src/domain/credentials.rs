//! Async wrappers that move password hashing off the request thread.

use std::sync::Arc;

use zeroize::Zeroizing;

use super::ports::CredentialHasher;
use super::{Error, PasswordHash};

pub(crate) async fn hash_password<H>(hasher: &Arc<H>, password: &str) -> Result<PasswordHash, Error>
where
    H: CredentialHasher + ?Sized + 'static,
{
    let hasher = Arc::clone(hasher);
    let password = Zeroizing::new(password.to_owned());
    tokio::task::spawn_blocking(move || hasher.hash(&password))
        .await
        .map_err(|err| Error::internal(format!("password hashing task failed: {err}")))?
        .map_err(Error::from)
}

pub(crate) async fn verify_password<H>(
    hasher: &Arc<H>,
    password: &str,
    hash: PasswordHash,
) -> Result<bool, Error>
where
    H: CredentialHasher + ?Sized + 'static,
{
    let hasher = Arc::clone(hasher);
    let password = Zeroizing::new(password.to_owned());
    tokio::task::spawn_blocking(move || hasher.verify(&password, &hash))
        .await
        .map_err(|err| Error::internal(format!("password verification task failed: {err}")))?
        .map_err(Error::from)
}
