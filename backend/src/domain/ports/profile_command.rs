//! Driving port for onboarding and profile edits.

use async_trait::async_trait;

use crate::domain::{EmployeeId, Error, OnboardingSubmission, ProfileUpdate, UserProfile};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProfileCommand: Send + Sync {
    /// Store the wizard submission and return the merged view.
    async fn complete_onboarding(
        &self,
        employee_id: &EmployeeId,
        submission: OnboardingSubmission,
    ) -> Result<UserProfile, Error>;

    /// Apply a partial edit to a complete profile.
    ///
    /// Incomplete profiles yield the `onboarding_required` conflict.
    async fn update_profile(
        &self,
        employee_id: &EmployeeId,
        update: ProfileUpdate,
    ) -> Result<UserProfile, Error>;
}
