//! PostgreSQL-backed `AdminRepository`.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{AdminRepository, AdminRepositoryError};
use crate::domain::{AdminRole, AdminSet, EmployeeId};

use super::models::NewAdminRow;
use super::pool::DbPool;
use super::schema::admins;

#[derive(Clone)]
pub struct DieselAdminRepository {
    pool: DbPool,
}

impl DieselAdminRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AdminRepository for DieselAdminRepository {
    async fn list_admins(&self) -> Result<AdminSet, AdminRepositoryError> {
        let mut conn = self.pool.get().await?;
        let ids: Vec<String> = admins::table
            .select(admins::employee_id)
            .load(&mut conn)
            .await?;
        ids.iter()
            .map(|raw| {
                EmployeeId::new(raw).map_err(|err| {
                    AdminRepositoryError::query(format!("stored admin id {raw} is invalid: {err}"))
                })
            })
            .collect()
    }

    async fn is_admin(&self, employee_id: &EmployeeId) -> Result<bool, AdminRepositoryError> {
        let mut conn = self.pool.get().await?;
        let found: Option<String> = admins::table
            .filter(admins::employee_id.eq(employee_id.as_ref()))
            .select(admins::employee_id)
            .first(&mut conn)
            .await
            .optional()?;
        Ok(found.is_some())
    }

    async fn grant(
        &self,
        employee_id: &EmployeeId,
        role: &AdminRole,
    ) -> Result<(), AdminRepositoryError> {
        let mut conn = self.pool.get().await?;
        diesel::insert_into(admins::table)
            .values(&NewAdminRow {
                employee_id: employee_id.as_ref(),
                role: role.as_ref(),
            })
            .on_conflict(admins::employee_id)
            .do_nothing()
            .execute(&mut conn)
            .await?;
        Ok(())
    }

    async fn revoke(&self, employee_id: &EmployeeId) -> Result<bool, AdminRepositoryError> {
        let mut conn = self.pool.get().await?;
        let removed = diesel::delete(admins::table.filter(admins::employee_id.eq(employee_id.as_ref())))
            .execute(&mut conn)
            .await?;
        Ok(removed > 0)
    }
}
