//! Port for the admin membership store.

use async_trait::async_trait;

use crate::domain::{AdminRole, AdminSet, EmployeeId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by admin repository adapters.
    pub enum AdminRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "admin repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "admin repository query failed: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AdminRepository: Send + Sync {
    /// Every employee holding admin membership.
    async fn list_admins(&self) -> Result<AdminSet, AdminRepositoryError>;

    async fn is_admin(&self, employee_id: &EmployeeId) -> Result<bool, AdminRepositoryError>;

    /// Grant membership; granting twice is a no-op.
    async fn grant(
        &self,
        employee_id: &EmployeeId,
        role: &AdminRole,
    ) -> Result<(), AdminRepositoryError>;

    /// Revoke membership. Returns `false` if the employee was not an admin.
    async fn revoke(&self, employee_id: &EmployeeId) -> Result<bool, AdminRepositoryError>;
}

/// Fixture implementation with an empty admin set.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureAdminRepository;

#[async_trait]
impl AdminRepository for FixtureAdminRepository {
    async fn list_admins(&self) -> Result<AdminSet, AdminRepositoryError> {
        Ok(AdminSet::default())
    }

    async fn is_admin(&self, _employee_id: &EmployeeId) -> Result<bool, AdminRepositoryError> {
        Ok(false)
    }

    async fn grant(
        &self,
        _employee_id: &EmployeeId,
        _role: &AdminRole,
    ) -> Result<(), AdminRepositoryError> {
        Ok(())
    }

    async fn revoke(&self, _employee_id: &EmployeeId) -> Result<bool, AdminRepositoryError> {
        Ok(false)
    }
}
