//! Port for outbound transactional email.

use async_trait::async_trait;

use super::define_port_error;

define_port_error! {
    /// Errors raised by mail adapters.
    pub enum MailerError {
        /// The mail API could not be reached or timed out.
        Transport { message: String } => "mail transport failed: {message}",
        /// The mail API answered with a non-success status.
        Rejected { status: u16, message: String } =>
            "mail API rejected the message with status {status}: {message}",
    }
}

/// A single email to deliver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundEmail {
    pub to: String,
    pub subject: String,
    pub html_body: String,
    pub text_body: String,
    /// Address replies should go to, when different from the sender.
    pub reply_to: Option<String>,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: &OutboundEmail) -> Result<(), MailerError>;
}

/// Fixture implementation that accepts every message.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureMailer;

#[async_trait]
impl Mailer for FixtureMailer {
    async fn send(&self, _email: &OutboundEmail) -> Result<(), MailerError> {
        Ok(())
    }
}
