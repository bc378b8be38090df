//! PostgreSQL-backed `TeacherProfileRepository`.
//!
//! `upsert` replaces the whole row: columns the profile leaves empty are
//! written as `NULL`.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{TeacherProfileRepository, TeacherProfileRepositoryError};
use crate::domain::{EmployeeId, TeacherProfile};

use super::models::TeacherProfileRow;
use super::pool::DbPool;
use super::profile_rows::{profile_to_row, row_to_profile};
use super::schema::teacher_profiles;

#[derive(Clone)]
pub struct DieselTeacherProfileRepository {
    pool: DbPool,
}

impl DieselTeacherProfileRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TeacherProfileRepository for DieselTeacherProfileRepository {
    async fn find(
        &self,
        employee_id: &EmployeeId,
    ) -> Result<Option<TeacherProfile>, TeacherProfileRepositoryError> {
        let mut conn = self.pool.get().await?;
        let row: Option<TeacherProfileRow> = teacher_profiles::table
            .filter(teacher_profiles::employee_id.eq(employee_id.as_ref()))
            .select(TeacherProfileRow::as_select())
            .first(&mut conn)
            .await
            .optional()?;
        row.map(|row| row_to_profile(row).map(|(_, profile)| profile))
            .transpose()
    }

    async fn list(
        &self,
    ) -> Result<Vec<(EmployeeId, TeacherProfile)>, TeacherProfileRepositoryError> {
        let mut conn = self.pool.get().await?;
        let rows: Vec<TeacherProfileRow> = teacher_profiles::table
            .order(teacher_profiles::employee_id.asc())
            .select(TeacherProfileRow::as_select())
            .load(&mut conn)
            .await?;
        rows.into_iter().map(row_to_profile).collect()
    }

    async fn upsert(
        &self,
        employee_id: &EmployeeId,
        profile: &TeacherProfile,
    ) -> Result<(), TeacherProfileRepositoryError> {
        let row = profile_to_row(employee_id, profile)?;
        let mut conn = self.pool.get().await?;
        diesel::insert_into(teacher_profiles::table)
            .values(&row)
            .on_conflict(teacher_profiles::employee_id)
            .do_update()
            .set((&row, teacher_profiles::updated_at.eq(diesel::dsl::now)))
            .execute(&mut conn)
            .await?;
        Ok(())
    }
}
