//! Account use-cases: signup, login and session resolution.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::domain::credentials::{hash_password, verify_password};
use crate::domain::ports::{
    AdminRepository, CredentialHasher, EmployeeRepository, LoginService, NewEmployeeRecord,
    SessionQuery, SessionSummary, SignupService, TeacherProfileRepository,
};
use crate::domain::{
    AdminRole, AdminSet, Employee, EmployeeId, Error, LoginCredentials, SignupRequest,
    merge_profile,
};

fn invalid_credentials() -> Error {
    Error::unauthorized("invalid credentials")
}

/// Implements [`LoginService`], [`SignupService`] and [`SessionQuery`] over
/// the employee, admin and profile stores.
#[derive(Clone)]
pub struct AccountService<E, A, P, H> {
    employees: Arc<E>,
    admins: Arc<A>,
    profiles: Arc<P>,
    hasher: Arc<H>,
}

impl<E, A, P, H> AccountService<E, A, P, H> {
    pub fn new(employees: Arc<E>, admins: Arc<A>, profiles: Arc<P>, hasher: Arc<H>) -> Self {
        Self {
            employees,
            admins,
            profiles,
            hasher,
        }
    }
}

#[async_trait]
impl<E, A, P, H> LoginService for AccountService<E, A, P, H>
where
    E: EmployeeRepository,
    A: AdminRepository,
    P: TeacherProfileRepository,
    H: CredentialHasher + 'static,
{
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<Employee, Error> {
        let employee_id = credentials.employee_id();
        let Some(hash) = self.employees.find_password_hash(employee_id).await? else {
            info!(%employee_id, "login rejected: unknown employee");
            return Err(invalid_credentials());
        };

        if !verify_password(&self.hasher, credentials.password(), hash).await? {
            info!(%employee_id, "login rejected: password mismatch");
            return Err(invalid_credentials());
        }

        // The row can vanish between the two reads if an admin deletes it.
        self.employees
            .find_by_id(employee_id)
            .await?
            .ok_or_else(invalid_credentials)
    }
}

#[async_trait]
impl<E, A, P, H> SignupService for AccountService<E, A, P, H>
where
    E: EmployeeRepository,
    A: AdminRepository,
    P: TeacherProfileRepository,
    H: CredentialHasher + 'static,
{
    async fn signup(&self, request: &SignupRequest) -> Result<Employee, Error> {
        let password_hash = hash_password(&self.hasher, request.password.expose()).await?;
        let employee = Employee::new(request.employee_id.clone(), request.full_name.clone());
        let record = NewEmployeeRecord {
            employee: employee.clone(),
            password_hash,
            profile: None,
            admin_role: request.request_admin.then(AdminRole::default),
        };

        self.employees.create(&record).await?;
        info!(
            employee_id = %employee.employee_id(),
            admin = request.request_admin,
            "employee signed up"
        );
        Ok(employee)
    }
}

#[async_trait]
impl<E, A, P, H> SessionQuery for AccountService<E, A, P, H>
where
    E: EmployeeRepository,
    A: AdminRepository,
    P: TeacherProfileRepository,
    H: CredentialHasher + 'static,
{
    async fn describe(&self, employee_id: &EmployeeId) -> Result<SessionSummary, Error> {
        let employee = self
            .employees
            .find_by_id(employee_id)
            .await?
            .ok_or_else(|| Error::unauthorized("session is no longer valid"))?;
        let is_admin = self.admins.is_admin(employee_id).await?;
        let profile = self.profiles.find(employee_id).await?;

        let admins: AdminSet = is_admin.then(|| employee_id.clone()).into_iter().collect();
        let (full_name, onboarding_required) =
            match merge_profile(&employee, profile.as_ref(), &admins) {
                Ok(merged) => (merged.full_name, false),
                Err(_) => (employee.full_name().to_string(), true),
            };

        Ok(SessionSummary {
            employee_id: employee_id.clone(),
            full_name,
            is_admin,
            onboarding_required,
        })
    }
}
