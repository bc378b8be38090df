//! Driving port for the public contact form.

use async_trait::async_trait;

use crate::domain::{ContactOutcome, ContactRequest, Error};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactCommand: Send + Sync {
    /// Email the contact inbox, then archive the submission.
    ///
    /// Email failure yields `service_unavailable` and nothing is archived.
    async fn submit(&self, request: &ContactRequest) -> Result<ContactOutcome, Error>;
}
