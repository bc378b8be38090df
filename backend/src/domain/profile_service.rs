//! Profile view, onboarding and profile editor use-cases.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::info;

use crate::domain::ports::{
    AdminRepository, EmployeeRepository, ProfileCommand, ProfileQuery, ProfileView,
    TeacherProfileRepository,
};
use crate::domain::{
    AdminSet, Employee, EmployeeId, Error, OnboardingSubmission, ProfileUpdate, TeacherProfile,
    UserProfile, merge_profile,
};

/// Path the UI should navigate to when onboarding is pending.
pub const ONBOARDING_PATH: &str = "/onboarding";

/// Conflict returned whenever a request needs a complete profile.
///
/// # Examples
/// ```
/// use backend::domain::{onboarding_required_error, ErrorCode};
///
/// let err = onboarding_required_error();
/// assert_eq!(err.code(), ErrorCode::Conflict);
/// assert_eq!(err.details().unwrap()["redirect"], "/onboarding");
/// ```
pub fn onboarding_required_error() -> Error {
    Error::conflict("profile onboarding is required").with_details(json!({
        "code": "onboarding_required",
        "redirect": ONBOARDING_PATH,
    }))
}

/// Implements [`ProfileQuery`] and [`ProfileCommand`].
#[derive(Clone)]
pub struct ProfileService<E, P, A> {
    employees: Arc<E>,
    profiles: Arc<P>,
    admins: Arc<A>,
}

impl<E, P, A> ProfileService<E, P, A> {
    pub fn new(employees: Arc<E>, profiles: Arc<P>, admins: Arc<A>) -> Self {
        Self {
            employees,
            profiles,
            admins,
        }
    }
}

impl<E, P, A> ProfileService<E, P, A>
where
    E: EmployeeRepository,
    P: TeacherProfileRepository,
    A: AdminRepository,
{
    async fn load_employee(&self, employee_id: &EmployeeId) -> Result<Employee, Error> {
        self.employees
            .find_by_id(employee_id)
            .await?
            .ok_or_else(|| Error::unauthorized("session is no longer valid"))
    }

    async fn admin_set_for(&self, employee_id: &EmployeeId) -> Result<AdminSet, Error> {
        let is_admin = self.admins.is_admin(employee_id).await?;
        Ok(is_admin.then(|| employee_id.clone()).into_iter().collect())
    }

    async fn store_and_merge(
        &self,
        employee: &Employee,
        profile: &TeacherProfile,
    ) -> Result<UserProfile, Error> {
        self.profiles.upsert(employee.employee_id(), profile).await?;
        let admins = self.admin_set_for(employee.employee_id()).await?;
        merge_profile(employee, Some(profile), &admins)
            .map_err(|reason| Error::internal(format!("stored profile does not merge: {reason}")))
    }
}

#[async_trait]
impl<E, P, A> ProfileQuery for ProfileService<E, P, A>
where
    E: EmployeeRepository,
    P: TeacherProfileRepository,
    A: AdminRepository,
{
    async fn fetch_profile(&self, employee_id: &EmployeeId) -> Result<ProfileView, Error> {
        let employee = self.load_employee(employee_id).await?;
        let profile = self.profiles.find(employee_id).await?;
        let admins = self.admin_set_for(employee_id).await?;

        Ok(match merge_profile(&employee, profile.as_ref(), &admins) {
            Ok(merged) => ProfileView::Complete(Box::new(merged)),
            Err(_) => ProfileView::OnboardingRequired,
        })
    }
}

#[async_trait]
impl<E, P, A> ProfileCommand for ProfileService<E, P, A>
where
    E: EmployeeRepository,
    P: TeacherProfileRepository,
    A: AdminRepository,
{
    async fn complete_onboarding(
        &self,
        employee_id: &EmployeeId,
        submission: OnboardingSubmission,
    ) -> Result<UserProfile, Error> {
        let employee = self.load_employee(employee_id).await?;
        // Keep whatever an admin pre-filled (name, program) unless overridden.
        let mut profile = self.profiles.find(employee_id).await?.unwrap_or_default();
        profile.apply_patch(submission.into_profile());

        let merged = self.store_and_merge(&employee, &profile).await?;
        info!(%employee_id, "onboarding completed");
        Ok(merged)
    }

    async fn update_profile(
        &self,
        employee_id: &EmployeeId,
        update: ProfileUpdate,
    ) -> Result<UserProfile, Error> {
        let employee = self.load_employee(employee_id).await?;
        let mut profile = match self.profiles.find(employee_id).await? {
            Some(profile) if profile.is_complete() => profile,
            _ => return Err(onboarding_required_error()),
        };
        profile.apply_patch(update.into_patch());

        let merged = self.store_and_merge(&employee, &profile).await?;
        info!(%employee_id, "profile updated");
        Ok(merged)
    }
}
