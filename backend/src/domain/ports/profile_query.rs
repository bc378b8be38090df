//! Driving port for reading the signed-in employee's profile.

use async_trait::async_trait;

use crate::domain::{EmployeeId, Error, UserProfile};

/// Outcome of a profile fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileView {
    Complete(Box<UserProfile>),
    /// The profile is missing or has no program; route to onboarding.
    OnboardingRequired,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProfileQuery: Send + Sync {
    async fn fetch_profile(&self, employee_id: &EmployeeId) -> Result<ProfileView, Error>;
}
