//! PostgreSQL adapters built on Diesel, `diesel-async` and a `bb8` pool.
//!
//! Row structs (`models`) and table definitions (`schema`) stay private;
//! repositories only hand domain types across the port boundary.
//!
//! ```no_run
//! use backend::outbound::persistence::{DbPool, DieselEmployeeRepository, PoolConfig};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/faculty")).await?;
//! let employees = DieselEmployeeRepository::new(pool);
//! # let _ = employees;
//! # Ok(())
//! # }
//! ```

mod diesel_admin_repository;
mod diesel_contact_submission_repository;
mod diesel_employee_repository;
pub(crate) mod diesel_error_mapping;
mod diesel_notification_repository;
mod diesel_teacher_profile_repository;
mod migrations;
mod models;
pub(crate) mod pool;
mod profile_rows;
mod schema;

pub use diesel_admin_repository::DieselAdminRepository;
pub use diesel_contact_submission_repository::DieselContactSubmissionRepository;
pub use diesel_employee_repository::DieselEmployeeRepository;
pub use diesel_notification_repository::DieselNotificationRepository;
pub use diesel_teacher_profile_repository::DieselTeacherProfileRepository;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
