//! Port for notification persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{EmployeeId, Notification};

use super::define_port_error;

define_port_error! {
    /// Errors raised by notification repository adapters.
    pub enum NotificationRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "notification repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "notification repository query failed: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationRepository: Send + Sync {
    /// Insert all rows in one statement; either every row lands or none.
    async fn insert_many(
        &self,
        notifications: &[Notification],
    ) -> Result<(), NotificationRepositoryError>;

    /// Notifications for `recipient_id`, newest first.
    async fn list_for_recipient(
        &self,
        recipient_id: &EmployeeId,
    ) -> Result<Vec<Notification>, NotificationRepositoryError>;

    async fn unread_count(&self, recipient_id: &EmployeeId)
    -> Result<u64, NotificationRepositoryError>;

    /// Flag a notification as read. Only matches rows addressed to
    /// `recipient_id`; returns `false` when nothing matched.
    async fn mark_read(
        &self,
        recipient_id: &EmployeeId,
        notification_id: Uuid,
    ) -> Result<bool, NotificationRepositoryError>;
}

/// Fixture implementation with an always-empty inbox.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureNotificationRepository;

#[async_trait]
impl NotificationRepository for FixtureNotificationRepository {
    async fn insert_many(
        &self,
        _notifications: &[Notification],
    ) -> Result<(), NotificationRepositoryError> {
        Ok(())
    }

    async fn list_for_recipient(
        &self,
        _recipient_id: &EmployeeId,
    ) -> Result<Vec<Notification>, NotificationRepositoryError> {
        Ok(Vec::new())
    }

    async fn unread_count(
        &self,
        _recipient_id: &EmployeeId,
    ) -> Result<u64, NotificationRepositoryError> {
        Ok(0)
    }

    async fn mark_read(
        &self,
        _recipient_id: &EmployeeId,
        _notification_id: Uuid,
    ) -> Result<bool, NotificationRepositoryError> {
        Ok(false)
    }
}
