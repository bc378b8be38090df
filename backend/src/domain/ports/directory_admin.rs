//! Driving port for the administrator dashboard.
//!
//! Every operation takes the acting employee and fails with `forbidden`
//! unless they hold admin membership.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    CredentialValidationError, EmployeeId, Error, FullName, NewPassword, UserProfile,
};

/// One row of the employee directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryEntry {
    #[schema(value_type = String, example = "EMP001")]
    pub employee_id: EmployeeId,
    pub full_name: String,
    pub is_admin: bool,
    pub profile_complete: bool,
    /// Merged profile when complete.
    pub profile: Option<UserProfile>,
}

/// Admin request to create an employee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEmployee {
    pub employee_id: EmployeeId,
    pub full_name: FullName,
    pub password: NewPassword,
    pub program: Option<String>,
    pub make_admin: bool,
}

impl NewEmployee {
    pub fn try_from_parts(
        employee_id: &str,
        full_name: &str,
        password: &str,
        program: Option<&str>,
        make_admin: bool,
    ) -> Result<Self, CredentialValidationError> {
        Ok(Self {
            employee_id: EmployeeId::new(employee_id)?,
            full_name: FullName::new(full_name)?,
            password: NewPassword::new(password)?,
            program: program
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .map(str::to_owned),
            make_admin,
        })
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DirectoryAdmin: Send + Sync {
    /// One entry per employee, ordered by id.
    async fn list_directory(&self, actor: &EmployeeId) -> Result<Vec<DirectoryEntry>, Error>;

    /// Create employee, profile stub and optional admin membership atomically.
    async fn create_employee(
        &self,
        actor: &EmployeeId,
        request: NewEmployee,
    ) -> Result<DirectoryEntry, Error>;

    /// Remove the employee with its profile and admin rows.
    async fn delete_employee(&self, actor: &EmployeeId, target: &EmployeeId)
    -> Result<(), Error>;

    /// Grant (`true`) or revoke (`false`) admin membership.
    async fn set_admin(
        &self,
        actor: &EmployeeId,
        target: &EmployeeId,
        grant: bool,
    ) -> Result<(), Error>;
}
