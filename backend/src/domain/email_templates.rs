//! Bodies for the emails the service sends.
//!
//! User-supplied text is HTML-escaped before it lands in the HTML part.

use super::ContactRequest;
use super::ports::OutboundEmail;

fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

fn paragraphs(text: &str) -> String {
    escape_html(text).replace('\n', "<br>")
}

/// Message forwarded to the contact inbox; replies go to the submitter.
pub fn contact_email(inbox: &str, request: &ContactRequest) -> OutboundEmail {
    OutboundEmail {
        to: inbox.to_owned(),
        subject: format!("Website enquiry from {}", request.full_name()),
        html_body: format!(
            "<p><strong>Name:</strong> {}</p><p><strong>Email:</strong> {}</p><p>{}</p>",
            escape_html(request.full_name()),
            escape_html(request.email()),
            paragraphs(request.message()),
        ),
        text_body: format!(
            "Name: {}\nEmail: {}\n\n{}",
            request.full_name(),
            request.email(),
            request.message(),
        ),
        reply_to: Some(request.email().to_owned()),
    }
}

/// Copy of an in-app notification delivered by email.
pub fn notification_email(to: &str, sender_name: &str, title: &str, message: &str) -> OutboundEmail {
    OutboundEmail {
        to: to.to_owned(),
        subject: title.to_owned(),
        html_body: format!(
            "<h2>{}</h2><p>{}</p><p>Sent by {}</p>",
            escape_html(title),
            paragraphs(message),
            escape_html(sender_name),
        ),
        text_body: format!("{title}\n\n{message}\n\nSent by {sender_name}"),
        reply_to: None,
    }
}
