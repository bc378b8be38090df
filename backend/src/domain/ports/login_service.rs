//! Driving port for login/authentication use-cases.
//!
//! Inbound adapters call it to authenticate credentials without knowing the
//! backing infrastructure, so HTTP handler tests can substitute a double.

use async_trait::async_trait;

use crate::domain::{Employee, Error, LoginCredentials};

/// Domain use-case port for authentication.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoginService: Send + Sync {
    /// Validate credentials and return the authenticated employee.
    ///
    /// Unknown ids and wrong passwords both yield the same
    /// `unauthorized` error so callers cannot probe for valid ids.
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<Employee, Error>;
}
