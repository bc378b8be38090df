//! Development mailer that logs instead of sending.

use async_trait::async_trait;
use tracing::info;

use crate::domain::ports::{Mailer, MailerError, OutboundEmail};

/// Accepts every message and records it in the log. Used when no mail API
/// is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingMailer;

#[async_trait]
impl Mailer for LoggingMailer {
    async fn send(&self, email: &OutboundEmail) -> Result<(), MailerError> {
        info!(
            to = %email.to,
            subject = %email.subject,
            reply_to = email.reply_to.as_deref().unwrap_or_default(),
            "mail API not configured; message logged only"
        );
        Ok(())
    }
}
