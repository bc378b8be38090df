//! Driving port for self-service account creation.

use async_trait::async_trait;

use crate::domain::{Employee, Error, SignupRequest};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SignupService: Send + Sync {
    /// Create the employee (and admin membership when requested).
    ///
    /// A taken id yields `conflict` with `details.code =
    /// "duplicate_employee_id"`.
    async fn signup(&self, request: &SignupRequest) -> Result<Employee, Error>;
}
