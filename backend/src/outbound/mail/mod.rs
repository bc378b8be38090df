//! Outbound email adapters implementing the `Mailer` port.

mod http_mailer;
mod logging_mailer;

pub use http_mailer::{HttpMailer, HttpMailerConfig};
pub use logging_mailer::LoggingMailer;
