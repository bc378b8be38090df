//! PostgreSQL-backed archive of contact form messages.

use async_trait::async_trait;
use diesel_async::RunQueryDsl;

use crate::domain::ContactSubmission;
use crate::domain::ports::{ContactSubmissionRepository, ContactSubmissionRepositoryError};

use super::models::NewContactSubmissionRow;
use super::pool::DbPool;
use super::schema::contact_submissions;

#[derive(Clone)]
pub struct DieselContactSubmissionRepository {
    pool: DbPool,
}

impl DieselContactSubmissionRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContactSubmissionRepository for DieselContactSubmissionRepository {
    async fn insert(
        &self,
        submission: &ContactSubmission,
    ) -> Result<(), ContactSubmissionRepositoryError> {
        let row = NewContactSubmissionRow {
            id: submission.id,
            full_name: &submission.full_name,
            email: &submission.email,
            message: &submission.message,
            status: submission.status.as_str(),
            created_at: submission.created_at,
            updated_at: submission.updated_at,
        };
        let mut conn = self.pool.get().await?;
        diesel::insert_into(contact_submissions::table)
            .values(&row)
            .execute(&mut conn)
            .await?;
        Ok(())
    }
}
