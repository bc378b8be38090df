//! Notification fan-out, inbox and read-receipt use-cases.
//!
//! Rows are written first and in one batch; email copies follow one by one
//! and a failed email never undoes a stored notification.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::email_templates::notification_email;
use crate::domain::ports::{
    AdminRepository, EmployeeRepository, Mailer, NotificationCommand, NotificationInbox,
    NotificationQuery, NotificationRepository, TeacherProfileRepository,
};
use crate::domain::{
    EmployeeId, Error, Notification, NotificationTarget, SendNotification,
    SendNotificationOutcome, TeacherProfile, contact_email,
};

/// Implements [`NotificationCommand`] and [`NotificationQuery`].
#[derive(Clone)]
pub struct NotificationService<E, P, A, N, M: ?Sized> {
    employees: Arc<E>,
    profiles: Arc<P>,
    admins: Arc<A>,
    notifications: Arc<N>,
    mailer: Arc<M>,
    clock: Arc<dyn Clock>,
}

impl<E, P, A, N, M: ?Sized> NotificationService<E, P, A, N, M> {
    pub fn new(
        employees: Arc<E>,
        profiles: Arc<P>,
        admins: Arc<A>,
        notifications: Arc<N>,
        mailer: Arc<M>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            employees,
            profiles,
            admins,
            notifications,
            mailer,
            clock,
        }
    }
}

impl<E, P, A, N, M: ?Sized> NotificationService<E, P, A, N, M>
where
    E: EmployeeRepository,
    P: TeacherProfileRepository,
{
    async fn recipients(
        &self,
        sender: &EmployeeId,
        target: &NotificationTarget,
    ) -> Result<Vec<EmployeeId>, Error> {
        match target {
            NotificationTarget::Individual(recipient) => {
                if self.employees.find_by_id(recipient).await?.is_none() {
                    return Err(Error::not_found(format!("employee {recipient} not found")));
                }
                Ok(vec![recipient.clone()])
            }
            NotificationTarget::Broadcast => {
                let mut ids: Vec<EmployeeId> = self
                    .employees
                    .list()
                    .await?
                    .into_iter()
                    .map(|employee| employee.employee_id().clone())
                    .filter(|id| id != sender)
                    .collect();
                ids.sort();
                Ok(ids)
            }
        }
    }

    async fn sender_name(&self, sender: &EmployeeId) -> Result<String, Error> {
        let profile_name = self
            .profiles
            .find(sender)
            .await?
            .and_then(|profile| profile.full_name)
            .filter(|name| !name.trim().is_empty());
        if let Some(name) = profile_name {
            return Ok(name.trim().to_owned());
        }
        Ok(self
            .employees
            .find_by_id(sender)
            .await?
            .map_or_else(|| sender.to_string(), |e| e.full_name().to_string()))
    }

    async fn addresses(&self) -> Result<HashMap<EmployeeId, String>, Error> {
        Ok(self
            .profiles
            .list()
            .await?
            .into_iter()
            .filter_map(|(id, profile): (EmployeeId, TeacherProfile)| {
                contact_email(&profile).map(|email| (id, email.to_owned()))
            })
            .collect())
    }
}

#[async_trait]
impl<E, P, A, N, M: ?Sized> NotificationCommand for NotificationService<E, P, A, N, M>
where
    E: EmployeeRepository,
    P: TeacherProfileRepository,
    A: AdminRepository,
    N: NotificationRepository,
    M: Mailer,
{
    async fn send(
        &self,
        sender: &EmployeeId,
        request: SendNotification,
    ) -> Result<SendNotificationOutcome, Error> {
        if !self.admins.is_admin(sender).await? {
            return Err(Error::forbidden("administrator access required"));
        }

        let recipients = self.recipients(sender, request.target()).await?;
        if recipients.is_empty() {
            return Ok(SendNotificationOutcome::default());
        }

        let now = self.clock.utc();
        let kind = request.target().kind();
        let rows: Vec<Notification> = recipients
            .iter()
            .map(|recipient| Notification {
                id: Uuid::new_v4(),
                recipient_id: recipient.clone(),
                sender_id: sender.clone(),
                title: request.title().to_owned(),
                message: request.message().to_owned(),
                kind,
                is_read: false,
                created_at: now,
            })
            .collect();
        self.notifications.insert_many(&rows).await?;
        info!(%sender, %kind, created = rows.len(), "notifications stored");

        // Rows are committed; lookups for the email copies must not fail the call.
        let sender_name = self.sender_name(sender).await.unwrap_or_else(|err| {
            warn!(%sender, error = %err, "sender name lookup failed");
            sender.to_string()
        });
        let addresses = self.addresses().await.unwrap_or_else(|err| {
            warn!(%sender, error = %err, "recipient address lookup failed; skipping emails");
            HashMap::new()
        });
        let mut outcome = SendNotificationOutcome {
            created: rows.len(),
            ..SendNotificationOutcome::default()
        };
        for recipient in &recipients {
            let Some(address) = addresses.get(recipient) else {
                continue;
            };
            let email =
                notification_email(address, &sender_name, request.title(), request.message());
            match self.mailer.send(&email).await {
                Ok(()) => outcome.emailed += 1,
                Err(err) => {
                    warn!(%recipient, error = %err, "notification email failed");
                    outcome.email_failures += 1;
                }
            }
        }
        Ok(outcome)
    }

    async fn mark_read(&self, recipient: &EmployeeId, notification_id: Uuid) -> Result<(), Error> {
        if self
            .notifications
            .mark_read(recipient, notification_id)
            .await?
        {
            Ok(())
        } else {
            Err(Error::not_found(format!(
                "notification {notification_id} not found"
            )))
        }
    }
}

#[async_trait]
impl<E, P, A, N, M: ?Sized> NotificationQuery for NotificationService<E, P, A, N, M>
where
    E: EmployeeRepository,
    P: TeacherProfileRepository,
    A: AdminRepository,
    N: NotificationRepository,
    M: Mailer,
{
    async fn inbox(&self, recipient: &EmployeeId) -> Result<NotificationInbox, Error> {
        let notifications = self.notifications.list_for_recipient(recipient).await?;
        let unread_count = self.notifications.unread_count(recipient).await?;
        Ok(NotificationInbox {
            notifications,
            unread_count,
        })
    }
}
