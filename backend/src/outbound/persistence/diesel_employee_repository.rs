//! PostgreSQL-backed `EmployeeRepository`.
//!
//! Creation writes the employee plus optional profile and admin rows in one
//! transaction; deletion removes profile, admin and employee rows in one
//! transaction, in that order.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};
use tracing::debug;

use crate::domain::ports::{EmployeeRepository, EmployeeRepositoryError, NewEmployeeRecord};
use crate::domain::{Employee, EmployeeId, PasswordHash};

use super::diesel_error_mapping::{DieselFailure, classify};
use super::models::{EmployeeRow, NewAdminRow, NewEmployeeRow};
use super::pool::DbPool;
use super::profile_rows::profile_to_row;
use super::schema::{admins, employees, teacher_profiles};

/// Diesel implementation of [`EmployeeRepository`].
#[derive(Clone)]
pub struct DieselEmployeeRepository {
    pool: DbPool,
}

impl DieselEmployeeRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn row_to_employee(row: EmployeeRow) -> Result<Employee, EmployeeRepositoryError> {
    Employee::try_from_strings(&row.employee_id, &row.full_name).map_err(|err| {
        EmployeeRepositoryError::query(format!(
            "stored employee {} is invalid: {err}",
            row.employee_id
        ))
    })
}

/// Unique violations on create mean the key is taken.
fn map_create_error(
    error: diesel::result::Error,
    employee_id: &EmployeeId,
) -> EmployeeRepositoryError {
    match classify(&error) {
        DieselFailure::UniqueViolation => {
            EmployeeRepositoryError::duplicate_employee_id(employee_id.as_ref())
        }
        _ => error.into(),
    }
}

#[async_trait]
impl EmployeeRepository for DieselEmployeeRepository {
    async fn find_by_id(
        &self,
        employee_id: &EmployeeId,
    ) -> Result<Option<Employee>, EmployeeRepositoryError> {
        let mut conn = self.pool.get().await?;
        let row: Option<EmployeeRow> = employees::table
            .filter(employees::employee_id.eq(employee_id.as_ref()))
            .select(EmployeeRow::as_select())
            .first(&mut conn)
            .await
            .optional()?;
        row.map(row_to_employee).transpose()
    }

    async fn find_password_hash(
        &self,
        employee_id: &EmployeeId,
    ) -> Result<Option<PasswordHash>, EmployeeRepositoryError> {
        let mut conn = self.pool.get().await?;
        let hash: Option<String> = employees::table
            .filter(employees::employee_id.eq(employee_id.as_ref()))
            .select(employees::password_hash)
            .first(&mut conn)
            .await
            .optional()?;
        Ok(hash.map(PasswordHash::new))
    }

    async fn list(&self) -> Result<Vec<Employee>, EmployeeRepositoryError> {
        let mut conn = self.pool.get().await?;
        let rows: Vec<EmployeeRow> = employees::table
            .order(employees::employee_id.asc())
            .select(EmployeeRow::as_select())
            .load(&mut conn)
            .await?;
        rows.into_iter().map(row_to_employee).collect()
    }

    async fn create(&self, record: &NewEmployeeRecord) -> Result<(), EmployeeRepositoryError> {
        let employee_id = record.employee.employee_id();
        let profile_row = record
            .profile
            .as_ref()
            .map(|profile| profile_to_row(employee_id, profile))
            .transpose()
            .map_err(|err| EmployeeRepositoryError::query(err.to_string()))?;
        let new_employee = NewEmployeeRow {
            employee_id: employee_id.as_ref(),
            full_name: record.employee.full_name().as_ref(),
            password_hash: record.password_hash.as_str(),
        };
        let admin_row = record.admin_role.as_ref().map(|role| NewAdminRow {
            employee_id: employee_id.as_ref(),
            role: role.as_ref(),
        });

        let mut conn = self.pool.get().await?;
        conn.transaction::<_, diesel::result::Error, _>(|conn| {
            async move {
                diesel::insert_into(employees::table)
                    .values(&new_employee)
                    .execute(conn)
                    .await?;
                if let Some(row) = &profile_row {
                    diesel::insert_into(teacher_profiles::table)
                        .values(row)
                        .execute(conn)
                        .await?;
                }
                if let Some(row) = &admin_row {
                    diesel::insert_into(admins::table)
                        .values(row)
                        .execute(conn)
                        .await?;
                }
                Ok(())
            }
            .scope_boxed()
        })
        .await
        .map_err(|err| map_create_error(err, employee_id))?;

        debug!(employee_id = %employee_id, "employee created");
        Ok(())
    }

    async fn delete(&self, employee_id: &EmployeeId) -> Result<bool, EmployeeRepositoryError> {
        let id = employee_id.as_ref();
        let mut conn = self.pool.get().await?;
        let removed = conn
            .transaction::<_, diesel::result::Error, _>(|conn| {
                async move {
                    diesel::delete(teacher_profiles::table.filter(teacher_profiles::employee_id.eq(id)))
                        .execute(conn)
                        .await?;
                    diesel::delete(admins::table.filter(admins::employee_id.eq(id)))
                        .execute(conn)
                        .await?;
                    diesel::delete(employees::table.filter(employees::employee_id.eq(id)))
                        .execute(conn)
                        .await
                }
                .scope_boxed()
            })
            .await?;
        Ok(removed > 0)
    }
}
