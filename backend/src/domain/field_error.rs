//! Per-field validation failure shared by the form-shaped payloads.

use std::fmt;

use serde_json::json;

use super::{CredentialValidationError, EmployeeValidationError, Error};

/// A rejected request field, rendered inline by the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Wire name of the field (camelCase).
    pub field: &'static str,
    /// Stable code such as `required`, `too_long` or `invalid_email`.
    pub code: &'static str,
}

impl FieldError {
    pub const fn new(field: &'static str, code: &'static str) -> Self {
        Self { field, code }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            "required" | "empty" => write!(f, "{} is required", self.field),
            "invalid_email" => write!(f, "{} must be an email address", self.field),
            "too_long" => write!(f, "{} is too long", self.field),
            "too_short" => write!(f, "{} is too short", self.field),
            other => write!(f, "{} is invalid ({other})", self.field),
        }
    }
}

impl std::error::Error for FieldError {}

impl From<EmployeeValidationError> for FieldError {
    fn from(value: EmployeeValidationError) -> Self {
        Self::new(value.field(), value.code())
    }
}

impl From<CredentialValidationError> for FieldError {
    fn from(value: CredentialValidationError) -> Self {
        Self::new(value.field(), value.code())
    }
}

impl From<FieldError> for Error {
    fn from(value: FieldError) -> Self {
        Error::invalid_request(value.to_string()).with_details(json!({
            "field": value.field,
            "code": value.code,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;

    #[test]
    fn converts_into_invalid_request_with_details() {
        let error: Error = FieldError::new("officialEmail", "invalid_email").into();
        assert_eq!(error.code(), ErrorCode::InvalidRequest);
        assert_eq!(error.message(), "officialEmail must be an email address");
        assert_eq!(
            error.details(),
            Some(&json!({ "field": "officialEmail", "code": "invalid_email" }))
        );
    }

    #[test]
    fn credential_errors_keep_their_field() {
        let field: FieldError = CredentialValidationError::PasswordTooShort { min: 8 }.into();
        assert_eq!(field, FieldError::new("password", "too_short"));
    }
}
