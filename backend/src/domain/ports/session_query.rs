//! Driving port resolving a session's employee into a routing decision.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{EmployeeId, Error};

/// Who is signed in and where the UI should send them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    #[schema(value_type = String, example = "EMP001")]
    pub employee_id: EmployeeId,
    pub full_name: String,
    pub is_admin: bool,
    /// `true` while the teacher profile is missing or has no program.
    pub onboarding_required: bool,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionQuery: Send + Sync {
    /// Revalidate the session's employee id against the stores.
    ///
    /// An id that no longer resolves to an employee yields `unauthorized`.
    async fn describe(&self, employee_id: &EmployeeId) -> Result<SessionSummary, Error>;
}
