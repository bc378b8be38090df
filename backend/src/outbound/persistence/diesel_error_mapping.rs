//! Translation of pool and Diesel failures into port errors.
//!
//! Every port error generated by `define_port_error!` has `Connection` and
//! `Query` variants; `store_error_conversions!` wires `From` impls for both
//! failure sources so repositories can use `?` directly.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use super::pool::PoolError;

/// Coarse classification of a Diesel failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DieselFailure {
    Connection(&'static str),
    Query(&'static str),
    UniqueViolation,
}

/// Classify `error`, logging the driver detail at debug level.
pub(crate) fn classify(error: &DieselError) -> DieselFailure {
    match error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        other => debug!(
            error_type = %std::any::type_name_of_val(other),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::NotFound => DieselFailure::Query("record not found"),
        DieselError::QueryBuilderError(_) => DieselFailure::Query("database query error"),
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            DieselFailure::UniqueViolation
        }
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            DieselFailure::Connection("database connection error")
        }
        DieselError::DeserializationError(_) => DieselFailure::Query("row decoding failed"),
        _ => DieselFailure::Query("database error"),
    }
}

pub(crate) fn pool_message(error: PoolError) -> String {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => message,
    }
}

/// Implement `From<PoolError>` and `From<diesel::result::Error>` for port
/// errors with `connection` and `query` constructors.
///
/// Unique violations become query errors; adapters that give them meaning
/// must intercept them first.
macro_rules! store_error_conversions {
    ($($error:ty),+ $(,)?) => {
        $(
            impl From<$crate::outbound::persistence::pool::PoolError> for $error {
                fn from(error: $crate::outbound::persistence::pool::PoolError) -> Self {
                    Self::connection(
                        $crate::outbound::persistence::diesel_error_mapping::pool_message(error),
                    )
                }
            }

            impl From<diesel::result::Error> for $error {
                fn from(error: diesel::result::Error) -> Self {
                    use $crate::outbound::persistence::diesel_error_mapping::{
                        DieselFailure, classify,
                    };
                    match classify(&error) {
                        DieselFailure::Connection(message) => Self::connection(message),
                        DieselFailure::Query(message) => Self::query(message),
                        DieselFailure::UniqueViolation => Self::query("unique constraint violated"),
                    }
                }
            }
        )+
    };
}

store_error_conversions!(
    crate::domain::ports::EmployeeRepositoryError,
    crate::domain::ports::AdminRepositoryError,
    crate::domain::ports::TeacherProfileRepositoryError,
    crate::domain::ports::NotificationRepositoryError,
    crate::domain::ports::ContactSubmissionRepositoryError,
);
