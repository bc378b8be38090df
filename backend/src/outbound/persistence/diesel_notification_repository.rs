//! PostgreSQL-backed `NotificationRepository`.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::domain::ports::{NotificationRepository, NotificationRepositoryError};
use crate::domain::{EmployeeId, Notification, NotificationKind};

use super::models::NotificationRow;
use super::pool::DbPool;
use super::schema::notifications;

#[derive(Clone)]
pub struct DieselNotificationRepository {
    pool: DbPool,
}

impl DieselNotificationRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn notification_to_row(notification: &Notification) -> NotificationRow {
    NotificationRow {
        id: notification.id,
        recipient_id: notification.recipient_id.as_ref().to_owned(),
        sender_id: notification.sender_id.as_ref().to_owned(),
        title: notification.title.clone(),
        message: notification.message.clone(),
        kind: notification.kind.as_str().to_owned(),
        is_read: notification.is_read,
        created_at: notification.created_at,
    }
}

fn row_to_notification(row: NotificationRow) -> Result<Notification, NotificationRepositoryError> {
    let corrupt = |what: &str, err: &dyn std::fmt::Display| {
        NotificationRepositoryError::query(format!(
            "notification {} has an invalid {what}: {err}",
            row.id
        ))
    };
    let recipient_id =
        EmployeeId::new(&row.recipient_id).map_err(|err| corrupt("recipient", &err))?;
    let sender_id = EmployeeId::new(&row.sender_id).map_err(|err| corrupt("sender", &err))?;
    let kind: NotificationKind = row.kind.parse().map_err(|err| corrupt("type", &err))?;
    Ok(Notification {
        id: row.id,
        recipient_id,
        sender_id,
        title: row.title,
        message: row.message,
        kind,
        is_read: row.is_read,
        created_at: row.created_at,
    })
}

#[async_trait]
impl NotificationRepository for DieselNotificationRepository {
    async fn insert_many(
        &self,
        notifications: &[Notification],
    ) -> Result<(), NotificationRepositoryError> {
        if notifications.is_empty() {
            return Ok(());
        }
        let rows: Vec<NotificationRow> = notifications.iter().map(notification_to_row).collect();
        let mut conn = self.pool.get().await?;
        diesel::insert_into(notifications::table)
            .values(&rows)
            .execute(&mut conn)
            .await?;
        Ok(())
    }

    async fn list_for_recipient(
        &self,
        recipient_id: &EmployeeId,
    ) -> Result<Vec<Notification>, NotificationRepositoryError> {
        let mut conn = self.pool.get().await?;
        let rows: Vec<NotificationRow> = notifications::table
            .filter(notifications::recipient_id.eq(recipient_id.as_ref()))
            .order((notifications::created_at.desc(), notifications::id.asc()))
            .select(NotificationRow::as_select())
            .load(&mut conn)
            .await?;
        rows.into_iter().map(row_to_notification).collect()
    }

    async fn unread_count(
        &self,
        recipient_id: &EmployeeId,
    ) -> Result<u64, NotificationRepositoryError> {
        let mut conn = self.pool.get().await?;
        let count: i64 = notifications::table
            .filter(notifications::recipient_id.eq(recipient_id.as_ref()))
            .filter(notifications::is_read.eq(false))
            .count()
            .get_result(&mut conn)
            .await?;
        Ok(u64::try_from(count).unwrap_or_default())
    }

    async fn mark_read(
        &self,
        recipient_id: &EmployeeId,
        notification_id: Uuid,
    ) -> Result<bool, NotificationRepositoryError> {
        let mut conn = self.pool.get().await?;
        let updated = diesel::update(
            notifications::table
                .filter(notifications::id.eq(notification_id))
                .filter(notifications::recipient_id.eq(recipient_id.as_ref())),
        )
        .set(notifications::is_read.eq(true))
        .execute(&mut conn)
        .await?;
        Ok(updated > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use rstest::rstest;

    fn stored(kind: &str) -> NotificationRow {
        NotificationRow {
            id: Uuid::nil(),
            recipient_id: "EMP002".into(),
            sender_id: "EMP001".into(),
            title: "Staff meeting".into(),
            message: "Room 101 at 3pm".into(),
            kind: kind.into(),
            is_read: false,
            created_at: Utc.timestamp_opt(1_700_000_000, 0).single().expect("timestamp"),
        }
    }

    #[rstest]
    fn rows_convert_both_ways() {
        let notification = row_to_notification(stored("broadcast")).expect("valid row");
        assert_eq!(notification.kind, NotificationKind::Broadcast);
        let row = notification_to_row(&notification);
        assert_eq!(row.kind, "broadcast");
        assert_eq!(row.recipient_id, "EMP002");
    }

    #[rstest]
    fn unknown_types_are_reported() {
        let error = row_to_notification(stored("memo")).expect_err("memo is not a kind");
        assert!(error.to_string().contains("memo"));
    }
}
