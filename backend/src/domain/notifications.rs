//! Notification records sent by administrators.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::{EmployeeId, FieldError};

/// Maximum title length in characters.
pub const NOTIFICATION_TITLE_MAX: usize = 200;
/// Maximum message length in characters.
pub const NOTIFICATION_MESSAGE_MAX: usize = 5000;

/// How a notification was addressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Individual,
    Broadcast,
}

impl NotificationKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Individual => "individual",
            Self::Broadcast => "broadcast",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when a stored kind string is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown notification type: {0}")]
pub struct UnknownNotificationKind(pub String);

impl FromStr for NotificationKind {
    type Err = UnknownNotificationKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "individual" => Ok(Self::Individual),
            "broadcast" => Ok(Self::Broadcast),
            other => Err(UnknownNotificationKind(other.to_owned())),
        }
    }
}

/// Stored notification addressed to one recipient.
///
/// Broadcasts are fanned out into one row per recipient, so `recipient_id`
/// is always concrete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: Uuid,
    #[schema(value_type = String, example = "EMP002")]
    pub recipient_id: EmployeeId,
    #[schema(value_type = String, example = "EMP001")]
    pub sender_id: EmployeeId,
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

/// Who should receive a notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationTarget {
    Individual(EmployeeId),
    /// Every employee except the sender.
    Broadcast,
}

impl NotificationTarget {
    pub const fn kind(&self) -> NotificationKind {
        match self {
            Self::Individual(_) => NotificationKind::Individual,
            Self::Broadcast => NotificationKind::Broadcast,
        }
    }
}

/// Validated request to send a notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendNotification {
    title: String,
    message: String,
    target: NotificationTarget,
}

fn text_field(
    field: &'static str,
    value: &str,
    max: usize,
) -> Result<String, FieldError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FieldError::new(field, "required"));
    }
    if trimmed.chars().count() > max {
        return Err(FieldError::new(field, "too_long"));
    }
    Ok(trimmed.to_owned())
}

impl SendNotification {
    /// Validate raw inputs. `recipient_id` of `None` means broadcast.
    ///
    /// # Examples
    /// ```
    /// use backend::domain::{NotificationTarget, SendNotification};
    ///
    /// let request = SendNotification::try_from_parts(" Exam duty ", "Report at 9", None).unwrap();
    /// assert_eq!(request.title(), "Exam duty");
    /// assert_eq!(request.target(), &NotificationTarget::Broadcast);
    /// ```
    pub fn try_from_parts(
        title: &str,
        message: &str,
        recipient_id: Option<&str>,
    ) -> Result<Self, FieldError> {
        let title = text_field("title", title, NOTIFICATION_TITLE_MAX)?;
        let message = text_field("message", message, NOTIFICATION_MESSAGE_MAX)?;
        let target = match recipient_id {
            Some(raw) => NotificationTarget::Individual(
                EmployeeId::new(raw).map_err(|err| FieldError::new("recipientId", err.code()))?,
            ),
            None => NotificationTarget::Broadcast,
        };
        Ok(Self {
            title,
            message,
            target,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn target(&self) -> &NotificationTarget {
        &self.target
    }
}

/// Summary returned after a send.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SendNotificationOutcome {
    /// Rows written.
    pub created: usize,
    /// Emails accepted by the mail API.
    pub emailed: usize,
    /// Emails the mail API refused or never received; never fatal.
    pub email_failures: usize,
}
