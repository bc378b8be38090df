//! Reqwest-backed transactional email adapter.
//!
//! Posts one JSON message per call to the configured API endpoint using a
//! bearer token. The adapter owns transport concerns only: serialisation,
//! timeout and status mapping.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::Serialize;
use tracing::debug;

use crate::domain::ports::{Mailer, MailerError, OutboundEmail};

const USER_AGENT: &str = "faculty-backend-mailer/0.1";
const BODY_PREVIEW_LIMIT: usize = 160;

/// Connection settings for [`HttpMailer`].
#[derive(Debug, Clone)]
pub struct HttpMailerConfig {
    pub endpoint: Url,
    pub api_key: String,
    /// Sender address, e.g. `Faculty Directory <noreply@college.edu>`.
    pub from: String,
    pub timeout: Duration,
}

/// Mailer that speaks a JSON email API over HTTPS.
pub struct HttpMailer {
    client: Client,
    endpoint: Url,
    api_key: String,
    from: String,
}

#[derive(Debug, Serialize, PartialEq)]
struct EmailPayload<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    html: &'a str,
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_to: Option<&'a str>,
}

impl<'a> EmailPayload<'a> {
    fn new(from: &'a str, email: &'a OutboundEmail) -> Self {
        Self {
            from,
            to: [email.to.as_str()],
            subject: &email.subject,
            html: &email.html_body,
            text: &email.text_body,
            reply_to: email.reply_to.as_deref(),
        }
    }
}

impl HttpMailer {
    /// Build the adapter with a client bounded by `config.timeout`.
    ///
    /// # Errors
    /// Returns the reqwest error when the TLS client cannot be constructed.
    pub fn new(config: HttpMailerConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self {
            client,
            endpoint: config.endpoint,
            api_key: config.api_key,
            from: config.from,
        })
    }
}

#[async_trait]
impl Mailer for HttpMailer {
    async fn send(&self, email: &OutboundEmail) -> Result<(), MailerError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .bearer_auth(&self.api_key)
            .json(&EmailPayload::new(&self.from, email))
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if status.is_success() {
            debug!(status = status.as_u16(), "mail API accepted message");
            return Ok(());
        }
        let body = response.bytes().await.unwrap_or_default();
        Err(map_status_error(status, &body))
    }
}

fn map_transport_error(error: reqwest::Error) -> MailerError {
    if error.is_timeout() {
        MailerError::transport(format!("mail API timed out: {error}"))
    } else {
        MailerError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> MailerError {
    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let mut preview: String = compact.chars().take(BODY_PREVIEW_LIMIT).collect();
    if compact.chars().count() > BODY_PREVIEW_LIMIT {
        preview.push_str("...");
    }
    if preview.is_empty() {
        preview = status
            .canonical_reason()
            .unwrap_or("no response body")
            .to_owned();
    }
    MailerError::rejected(status.as_u16(), preview)
}
