//! Driving port for reading an employee's notifications.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{EmployeeId, Error, Notification};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NotificationInbox {
    /// Newest first.
    pub notifications: Vec<Notification>,
    pub unread_count: u64,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationQuery: Send + Sync {
    async fn inbox(&self, recipient: &EmployeeId) -> Result<NotificationInbox, Error>;
}
