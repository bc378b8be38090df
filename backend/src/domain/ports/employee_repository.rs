//! Port for the employee record store.
//!
//! Creation and deletion span the profile and admin stores as well; adapters
//! must apply each as a single atomic unit so a failure never leaves an
//! employee half-created or half-deleted.

use async_trait::async_trait;

use crate::domain::{AdminRole, Employee, EmployeeId, PasswordHash, TeacherProfile};

use super::define_port_error;

define_port_error! {
    /// Errors raised by employee repository adapters.
    pub enum EmployeeRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "employee repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "employee repository query failed: {message}",
        /// An employee with the same identifier already exists.
        DuplicateEmployeeId { employee_id: String } =>
            "employee {employee_id} already exists",
    }
}

/// Everything written when an employee is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEmployeeRecord {
    pub employee: Employee,
    pub password_hash: PasswordHash,
    /// Profile row written alongside the employee, if any.
    pub profile: Option<TeacherProfile>,
    /// Admin membership written alongside the employee, if any.
    pub admin_role: Option<AdminRole>,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Fetch an employee by identifier.
    async fn find_by_id(
        &self,
        employee_id: &EmployeeId,
    ) -> Result<Option<Employee>, EmployeeRepositoryError>;

    /// Fetch the stored password hash for credential checks.
    async fn find_password_hash(
        &self,
        employee_id: &EmployeeId,
    ) -> Result<Option<PasswordHash>, EmployeeRepositoryError>;

    /// All employees ordered by identifier.
    async fn list(&self) -> Result<Vec<Employee>, EmployeeRepositoryError>;

    /// Insert the employee plus optional profile and admin rows atomically.
    ///
    /// Returns [`EmployeeRepositoryError::DuplicateEmployeeId`] when the key
    /// is taken; nothing is written in that case.
    async fn create(&self, record: &NewEmployeeRecord) -> Result<(), EmployeeRepositoryError>;

    /// Delete the profile, admin membership and employee rows, in that
    /// order, atomically.
    ///
    /// Returns `false` when no employee row existed.
    async fn delete(&self, employee_id: &EmployeeId) -> Result<bool, EmployeeRepositoryError>;
}

/// Fixture implementation used when no database is configured.
///
/// Lookups find nothing and writes are discarded.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureEmployeeRepository;

#[async_trait]
impl EmployeeRepository for FixtureEmployeeRepository {
    async fn find_by_id(
        &self,
        _employee_id: &EmployeeId,
    ) -> Result<Option<Employee>, EmployeeRepositoryError> {
        Ok(None)
    }

    async fn find_password_hash(
        &self,
        _employee_id: &EmployeeId,
    ) -> Result<Option<PasswordHash>, EmployeeRepositoryError> {
        Ok(None)
    }

    async fn list(&self) -> Result<Vec<Employee>, EmployeeRepositoryError> {
        Ok(Vec::new())
    }

    async fn create(&self, _record: &NewEmployeeRecord) -> Result<(), EmployeeRepositoryError> {
        Ok(())
    }

    async fn delete(&self, _employee_id: &EmployeeId) -> Result<bool, EmployeeRepositoryError> {
        Ok(false)
    }
}
