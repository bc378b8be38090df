//! Port for archiving contact form submissions.

use async_trait::async_trait;

use crate::domain::ContactSubmission;

use super::define_port_error;

define_port_error! {
    /// Errors raised by contact submission adapters.
    pub enum ContactSubmissionRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "contact archive connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "contact archive query failed: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactSubmissionRepository: Send + Sync {
    async fn insert(
        &self,
        submission: &ContactSubmission,
    ) -> Result<(), ContactSubmissionRepositoryError>;
}

/// Fixture implementation that discards submissions.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureContactSubmissionRepository;

#[async_trait]
impl ContactSubmissionRepository for FixtureContactSubmissionRepository {
    async fn insert(
        &self,
        _submission: &ContactSubmission,
    ) -> Result<(), ContactSubmissionRepositoryError> {
        Ok(())
    }
}
