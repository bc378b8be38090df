//! Driving port for sending and acknowledging notifications.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{EmployeeId, Error, SendNotification, SendNotificationOutcome};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationCommand: Send + Sync {
    /// Admin only. Rows are authoritative; emails are best-effort.
    async fn send(
        &self,
        sender: &EmployeeId,
        request: SendNotification,
    ) -> Result<SendNotificationOutcome, Error>;

    /// Flag a notification as read. Unknown or foreign ids yield `not_found`.
    async fn mark_read(&self, recipient: &EmployeeId, notification_id: Uuid) -> Result<(), Error>;
}
