//! TwiML replies to messaging webhooks.

use axum::{
    http::{StatusCode, header::CONTENT_TYPE},
    response::{IntoResponse, Response},
};

/// A reply to an incoming message, rendered as a TwiML `<Response>` with a
/// single `<Message>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TwimlMessage(String);

impl TwimlMessage {
    /// Create a reply with `text` as the message body.
    pub fn new(text: &str) -> Self {
        Self(text.to_owned())
    }

    /// Render the reply as a TwiML document.
    pub fn to_xml(&self) -> String {
        format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?><Response><Message>{}</Message></Response>",
            escape_xml(&self.0)
        )
    }
}

impl IntoResponse for TwimlMessage {
    fn into_response(self) -> Response {
        (
            StatusCode::OK,
            [(CONTENT_TYPE, "application/xml")],
            self.to_xml(),
        )
            .into_response()
    }
}

fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            c => escaped.push(c),
        }
    }

    escaped
}
