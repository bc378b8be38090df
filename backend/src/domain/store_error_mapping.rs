//! Conversions from driven-port errors into domain [`Error`]s.
//!
//! Connection failures surface as `service_unavailable`; everything else the
//! stores report is an `internal_error`, except duplicate employee ids which
//! are a client-visible `conflict`.

use serde_json::json;

use super::Error;
use super::ports::{
    AdminRepositoryError, ContactSubmissionRepositoryError, CredentialHasherError,
    EmployeeRepositoryError, NotificationRepositoryError, TeacherProfileRepositoryError,
};

impl From<EmployeeRepositoryError> for Error {
    fn from(value: EmployeeRepositoryError) -> Self {
        match value {
            EmployeeRepositoryError::Connection { message } => {
                Error::service_unavailable(format!("employee store unavailable: {message}"))
            }
            EmployeeRepositoryError::Query { message } => {
                Error::internal(format!("employee store error: {message}"))
            }
            EmployeeRepositoryError::DuplicateEmployeeId { employee_id } => {
                Error::conflict(format!("employee id {employee_id} is already registered"))
                    .with_details(json!({
                        "field": "employeeId",
                        "code": "duplicate_employee_id",
                    }))
            }
        }
    }
}

impl From<AdminRepositoryError> for Error {
    fn from(value: AdminRepositoryError) -> Self {
        match value {
            AdminRepositoryError::Connection { message } => {
                Error::service_unavailable(format!("admin store unavailable: {message}"))
            }
            AdminRepositoryError::Query { message } => {
                Error::internal(format!("admin store error: {message}"))
            }
        }
    }
}

impl From<TeacherProfileRepositoryError> for Error {
    fn from(value: TeacherProfileRepositoryError) -> Self {
        match value {
            TeacherProfileRepositoryError::Connection { message } => {
                Error::service_unavailable(format!("profile store unavailable: {message}"))
            }
            TeacherProfileRepositoryError::Query { message } => {
                Error::internal(format!("profile store error: {message}"))
            }
            TeacherProfileRepositoryError::Document { field, message } => {
                Error::internal(format!("profile document {field} is malformed: {message}"))
            }
        }
    }
}

impl From<NotificationRepositoryError> for Error {
    fn from(value: NotificationRepositoryError) -> Self {
        match value {
            NotificationRepositoryError::Connection { message } => {
                Error::service_unavailable(format!("notification store unavailable: {message}"))
            }
            NotificationRepositoryError::Query { message } => {
                Error::internal(format!("notification store error: {message}"))
            }
        }
    }
}

impl From<ContactSubmissionRepositoryError> for Error {
    fn from(value: ContactSubmissionRepositoryError) -> Self {
        match value {
            ContactSubmissionRepositoryError::Connection { message } => {
                Error::service_unavailable(format!("contact archive unavailable: {message}"))
            }
            ContactSubmissionRepositoryError::Query { message } => {
                Error::internal(format!("contact archive error: {message}"))
            }
        }
    }
}

impl From<CredentialHasherError> for Error {
    fn from(value: CredentialHasherError) -> Self {
        Error::internal(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use rstest::rstest;

    #[rstest]
    #[case(EmployeeRepositoryError::connection("refused").into(), ErrorCode::ServiceUnavailable)]
    #[case(EmployeeRepositoryError::query("syntax").into(), ErrorCode::InternalError)]
    #[case(AdminRepositoryError::connection("refused").into(), ErrorCode::ServiceUnavailable)]
    #[case(
        TeacherProfileRepositoryError::document("education", "bad json").into(),
        ErrorCode::InternalError
    )]
    #[case(NotificationRepositoryError::query("boom").into(), ErrorCode::InternalError)]
    #[case(CredentialHasherError::hash("params").into(), ErrorCode::InternalError)]
    fn store_errors_map_to_codes(#[case] error: Error, #[case] expected: ErrorCode) {
        assert_eq!(error.code(), expected);
    }

    #[rstest]
    fn duplicate_ids_are_conflicts_with_a_stable_code() {
        let error: Error = EmployeeRepositoryError::duplicate_employee_id("EMP001").into();
        assert_eq!(error.code(), ErrorCode::Conflict);
        let details = error.details().expect("details present");
        assert_eq!(details["code"], "duplicate_employee_id");
    }
}
