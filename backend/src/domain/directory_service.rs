//! Administrator dashboard use-cases.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::domain::credentials::hash_password;
use crate::domain::ports::{
    AdminRepository, CredentialHasher, DirectoryAdmin, DirectoryEntry, EmployeeRepository,
    NewEmployee, NewEmployeeRecord, TeacherProfileRepository,
};
use crate::domain::{
    AdminRole, AdminSet, Employee, EmployeeId, Error, TeacherProfile, merge_profile,
};

fn directory_entry(
    employee: &Employee,
    profile: Option<&TeacherProfile>,
    admins: &AdminSet,
) -> DirectoryEntry {
    let merged = merge_profile(employee, profile, admins).ok();
    DirectoryEntry {
        employee_id: employee.employee_id().clone(),
        full_name: merged
            .as_ref()
            .map_or_else(|| employee.full_name().to_string(), |p| p.full_name.clone()),
        is_admin: admins.contains(employee.employee_id()),
        profile_complete: merged.is_some(),
        profile: merged,
    }
}

/// Implements [`DirectoryAdmin`].
#[derive(Clone)]
pub struct DirectoryService<E, P, A, H> {
    employees: Arc<E>,
    profiles: Arc<P>,
    admins: Arc<A>,
    hasher: Arc<H>,
}

impl<E, P, A, H> DirectoryService<E, P, A, H> {
    pub fn new(employees: Arc<E>, profiles: Arc<P>, admins: Arc<A>, hasher: Arc<H>) -> Self {
        Self {
            employees,
            profiles,
            admins,
            hasher,
        }
    }
}

impl<E, P, A, H> DirectoryService<E, P, A, H>
where
    A: AdminRepository,
{
    async fn ensure_admin(&self, actor: &EmployeeId) -> Result<(), Error> {
        if self.admins.is_admin(actor).await? {
            Ok(())
        } else {
            Err(Error::forbidden("administrator access required"))
        }
    }
}

#[async_trait]
impl<E, P, A, H> DirectoryAdmin for DirectoryService<E, P, A, H>
where
    E: EmployeeRepository,
    P: TeacherProfileRepository,
    A: AdminRepository,
    H: CredentialHasher + 'static,
{
    async fn list_directory(&self, actor: &EmployeeId) -> Result<Vec<DirectoryEntry>, Error> {
        self.ensure_admin(actor).await?;

        let mut employees = self.employees.list().await?;
        employees.sort_by(|a, b| a.employee_id().cmp(b.employee_id()));
        let profiles: HashMap<EmployeeId, TeacherProfile> =
            self.profiles.list().await?.into_iter().collect();
        let admins = self.admins.list_admins().await?;

        Ok(employees
            .iter()
            .map(|employee| {
                directory_entry(employee, profiles.get(employee.employee_id()), &admins)
            })
            .collect())
    }

    async fn create_employee(
        &self,
        actor: &EmployeeId,
        request: NewEmployee,
    ) -> Result<DirectoryEntry, Error> {
        self.ensure_admin(actor).await?;

        let password_hash = hash_password(&self.hasher, request.password.expose()).await?;
        let employee = Employee::new(request.employee_id.clone(), request.full_name.clone());
        let profile = TeacherProfile::stub(request.full_name.as_ref(), request.program.as_deref());
        let record = NewEmployeeRecord {
            employee: employee.clone(),
            password_hash,
            profile: Some(profile.clone()),
            admin_role: request.make_admin.then(AdminRole::default),
        };
        self.employees.create(&record).await?;

        info!(
            %actor,
            employee_id = %employee.employee_id(),
            admin = request.make_admin,
            "employee created by administrator"
        );
        let admins: AdminSet = request
            .make_admin
            .then(|| employee.employee_id().clone())
            .into_iter()
            .collect();
        Ok(directory_entry(&employee, Some(&profile), &admins))
    }

    async fn delete_employee(&self, actor: &EmployeeId, target: &EmployeeId) -> Result<(), Error> {
        self.ensure_admin(actor).await?;
        if actor == target {
            return Err(Error::invalid_request(
                "administrators cannot delete their own account",
            ));
        }

        if !self.employees.delete(target).await? {
            return Err(Error::not_found(format!("employee {target} not found")));
        }
        info!(%actor, employee_id = %target, "employee deleted by administrator");
        Ok(())
    }

    async fn set_admin(
        &self,
        actor: &EmployeeId,
        target: &EmployeeId,
        grant: bool,
    ) -> Result<(), Error> {
        self.ensure_admin(actor).await?;
        if actor == target && !grant {
            return Err(Error::invalid_request(
                "administrators cannot revoke their own membership",
            ));
        }
        if self.employees.find_by_id(target).await?.is_none() {
            return Err(Error::not_found(format!("employee {target} not found")));
        }

        if grant {
            self.admins.grant(target, &AdminRole::default()).await?;
        } else {
            self.admins.revoke(target).await?;
        }
        info!(%actor, employee_id = %target, grant, "admin membership changed");
        Ok(())
    }
}
