//! Port for the teacher profile store.

use async_trait::async_trait;

use crate::domain::{EmployeeId, TeacherProfile};

use super::define_port_error;

define_port_error! {
    /// Errors raised by teacher profile repository adapters.
    pub enum TeacherProfileRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "profile repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "profile repository query failed: {message}",
        /// A stored sub-document could not be decoded or encoded.
        Document { field: String, message: String } =>
            "profile document `{field}` is malformed: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TeacherProfileRepository: Send + Sync {
    async fn find(
        &self,
        employee_id: &EmployeeId,
    ) -> Result<Option<TeacherProfile>, TeacherProfileRepositoryError>;

    /// Every stored profile with its owner.
    async fn list(&self) -> Result<Vec<(EmployeeId, TeacherProfile)>, TeacherProfileRepositoryError>;

    /// Insert or fully replace the profile for `employee_id`.
    async fn upsert(
        &self,
        employee_id: &EmployeeId,
        profile: &TeacherProfile,
    ) -> Result<(), TeacherProfileRepositoryError>;
}

/// Fixture implementation that stores nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureTeacherProfileRepository;

#[async_trait]
impl TeacherProfileRepository for FixtureTeacherProfileRepository {
    async fn find(
        &self,
        _employee_id: &EmployeeId,
    ) -> Result<Option<TeacherProfile>, TeacherProfileRepositoryError> {
        Ok(None)
    }

    async fn list(
        &self,
    ) -> Result<Vec<(EmployeeId, TeacherProfile)>, TeacherProfileRepositoryError> {
        Ok(Vec::new())
    }

    async fn upsert(
        &self,
        _employee_id: &EmployeeId,
        _profile: &TeacherProfile,
    ) -> Result<(), TeacherProfileRepositoryError> {
        Ok(())
    }
}
