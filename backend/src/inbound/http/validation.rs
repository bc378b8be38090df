//! Shared parsing helpers for path and body values in HTTP adapters.

use serde_json::json;
use uuid::Uuid;

use crate::domain::{EmployeeId, Error, FieldError};

/// Parse an employee id taken from the URL path.
pub(crate) fn parse_employee_id(raw: &str, field: &'static str) -> Result<EmployeeId, Error> {
    EmployeeId::new(raw).map_err(|err| {
        Error::invalid_request(format!("{field}: {err}"))
            .with_details(json!({ "field": field, "code": err.code() }))
    })
}

/// Parse a UUID taken from the URL path.
pub(crate) fn parse_uuid(raw: &str, field: &'static str) -> Result<Uuid, Error> {
    Uuid::parse_str(raw).map_err(|_| {
        Error::invalid_request(format!("{field} must be a valid UUID")).with_details(json!({
            "field": field,
            "value": raw,
            "code": "invalid_uuid",
        }))
    })
}

/// Turn a validation failure into a 400 with `details { field, code }`.
pub(crate) fn invalid_field(err: impl Into<FieldError>) -> Error {
    Error::from(err.into())
}
