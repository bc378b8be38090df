//! Public contact form use-case.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::email_templates::contact_email;
use crate::domain::ports::{ContactCommand, ContactSubmissionRepository, Mailer};
use crate::domain::{ContactOutcome, ContactRequest, ContactSubmission, Error};

/// Implements [`ContactCommand`]: the email is the delivery, the archive row
/// is a best-effort audit copy.
#[derive(Clone)]
pub struct ContactService<M: ?Sized, R> {
    mailer: Arc<M>,
    archive: Arc<R>,
    clock: Arc<dyn Clock>,
    inbox: String,
}

impl<M: ?Sized, R> ContactService<M, R> {
    pub fn new(
        mailer: Arc<M>,
        archive: Arc<R>,
        clock: Arc<dyn Clock>,
        inbox: impl Into<String>,
    ) -> Self {
        Self {
            mailer,
            archive,
            clock,
            inbox: inbox.into(),
        }
    }
}

#[async_trait]
impl<M: ?Sized, R> ContactCommand for ContactService<M, R>
where
    M: Mailer,
    R: ContactSubmissionRepository,
{
    async fn submit(&self, request: &ContactRequest) -> Result<ContactOutcome, Error> {
        let email = contact_email(&self.inbox, request);
        if let Err(err) = self.mailer.send(&email).await {
            warn!(error = %err, "contact email failed");
            return Err(Error::service_unavailable(
                "the message could not be delivered, please try again later",
            ));
        }

        let submission = ContactSubmission::received(request, Uuid::new_v4(), self.clock.utc());
        let archived = match self.archive.insert(&submission).await {
            Ok(()) => true,
            Err(err) => {
                warn!(error = %err, submission_id = %submission.id, "contact archive failed");
                false
            }
        };
        info!(archived, "contact message delivered");
        Ok(ContactOutcome { archived })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use crate::domain::ports::{
        ContactSubmissionRepositoryError, FixtureContactSubmissionRepository, FixtureMailer,
        MailerError, MockContactSubmissionRepository, MockMailer,
    };
    use chrono::{DateTime, Local, Utc};
    use rstest::{fixture, rstest};

    struct EpochClock;

    impl Clock for EpochClock {
        fn local(&self) -> DateTime<Local> {
            DateTime::<Utc>::UNIX_EPOCH.with_timezone(&Local)
        }

        fn utc(&self) -> DateTime<Utc> {
            DateTime::<Utc>::UNIX_EPOCH
        }
    }

    #[fixture]
    fn request() -> ContactRequest {
        ContactRequest::try_from_parts("Jane", "jane@x.com", "When is admission?")
            .expect("valid request")
    }

    #[rstest]
    #[tokio::test]
    async fn delivers_to_the_inbox_then_archives(request: ContactRequest) {
        let mut mailer = MockMailer::new();
        mailer
            .expect_send()
            .withf(|email| {
                email.to == "office@college.edu" && email.reply_to.as_deref() == Some("jane@x.com")
            })
            .times(1)
            .return_once(|_| Ok(()));
        let mut archive = MockContactSubmissionRepository::new();
        archive
            .expect_insert()
            .withf(|submission| {
                submission.email == "jane@x.com"
                    && submission.created_at == DateTime::<Utc>::UNIX_EPOCH
            })
            .times(1)
            .return_once(|_| Ok(()));

        let service = ContactService::new(
            Arc::new(mailer),
            Arc::new(archive),
            Arc::new(EpochClock),
            "office@college.edu",
        );
        let outcome = service.submit(&request).await.expect("delivered");
        assert!(outcome.archived);
    }

    #[rstest]
    #[tokio::test]
    async fn mail_failure_is_unavailable_and_skips_the_archive(request: ContactRequest) {
        let mut mailer = MockMailer::new();
        mailer
            .expect_send()
            .return_once(|_| Err(MailerError::transport("timed out")));
        let mut archive = MockContactSubmissionRepository::new();
        archive.expect_insert().never();

        let service = ContactService::new(
            Arc::new(mailer),
            Arc::new(archive),
            Arc::new(EpochClock),
            "office@college.edu",
        );
        let error = service.submit(&request).await.expect_err("unavailable");
        assert_eq!(error.code(), ErrorCode::ServiceUnavailable);
    }

    #[rstest]
    #[tokio::test]
    async fn archive_failure_still_reports_delivery(request: ContactRequest) {
        let mut archive = MockContactSubmissionRepository::new();
        archive
            .expect_insert()
            .return_once(|_| Err(ContactSubmissionRepositoryError::query("disk full")));

        let service = ContactService::new(
            Arc::new(FixtureMailer),
            Arc::new(archive),
            Arc::new(EpochClock),
            "office@college.edu",
        );
        let outcome = service.submit(&request).await.expect("delivered");
        assert!(!outcome.archived);
    }

    #[rstest]
    #[tokio::test]
    async fn fixture_archive_accepts_everything(request: ContactRequest) {
        let service = ContactService::new(
            Arc::new(FixtureMailer),
            Arc::new(FixtureContactSubmissionRepository),
            Arc::new(EpochClock),
            "office@college.edu",
        );
        assert_eq!(
            service.submit(&request).await.expect("delivered"),
            ContactOutcome { archived: true }
        );
    }
}
