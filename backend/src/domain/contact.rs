//! Public contact form submissions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::FieldError;

/// Maximum message length in characters.
pub const CONTACT_MESSAGE_MAX: usize = 5000;
const CONTACT_LINE_MAX: usize = 200;

/// Validated contact form input.
///
/// ## Invariants
/// - every field is trimmed and non-empty;
/// - `email` contains `@`;
/// - `message` is at most [`CONTACT_MESSAGE_MAX`] characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRequest {
    full_name: String,
    email: String,
    message: String,
}

fn field(name: &'static str, value: &str, max: usize) -> Result<String, FieldError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FieldError::new(name, "required"));
    }
    if trimmed.chars().count() > max {
        return Err(FieldError::new(name, "too_long"));
    }
    Ok(trimmed.to_owned())
}

impl ContactRequest {
    pub fn try_from_parts(
        full_name: &str,
        email: &str,
        message: &str,
    ) -> Result<Self, FieldError> {
        let full_name = field("fullName", full_name, CONTACT_LINE_MAX)?;
        let email = field("email", email, CONTACT_LINE_MAX)?;
        if !email.contains('@') {
            return Err(FieldError::new("email", "invalid_email"));
        }
        let message = field("message", message, CONTACT_MESSAGE_MAX)?;
        Ok(Self {
            full_name,
            email,
            message,
        })
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Lifecycle state of an archived submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ContactStatus {
    Received,
}

impl ContactStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Received => "received",
        }
    }
}

/// Archived copy of a contact form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub message: String,
    pub status: ContactStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ContactSubmission {
    /// Fresh `received` submission stamped at `now`.
    pub fn received(request: &ContactRequest, id: Uuid, now: DateTime<Utc>) -> Self {
        Self {
            id,
            full_name: request.full_name.clone(),
            email: request.email.clone(),
            message: request.message.clone(),
            status: ContactStatus::Received,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Result of a contact form submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactOutcome {
    /// Whether the archival write succeeded; the email was sent either way.
    pub archived: bool,
}
