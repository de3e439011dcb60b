//! Shared chat wire model and reply markup for the AIR Bot widget.
//!
//! This crate owns the JSON representation exchanged between the `widget`
//! and the `airbot` backend on `POST /chat`, plus the markdown-lite
//! [`markup::format`] transform both sides use to turn model text into HTML.
//!
//! Replies are decoded leniently: the widget must render *something* for any
//! JSON body, so unknown discriminators and missing fields are carried through
//! as data and classified by [`ChatReply::outcome`] rather than rejected.

pub mod markup;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Fallback text for an `error` reply that carries no usable `message`.
pub const DEFAULT_ERROR_MESSAGE: &str = "Sorry, something went wrong.";

/// Error returned by [`decode_reply`] and [`encode_request`].
#[derive(Debug, thiserror::Error)]
pub enum WireError {
    /// A reply body is not JSON at all, or a request failed to serialize.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Body of `POST /chat`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Raw user text. Missing on the wire decodes as empty.
    #[serde(default)]
    pub message: String,
}

impl ChatRequest {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// Discriminator selecting how a reply payload is interpreted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ReplyType {
    /// Answer sourced directly from the document corpus.
    Pdf,
    /// Answer produced by the language model.
    Gemini,
    /// Server-declared failure; see [`ChatReply::message`].
    Error,
    /// Any other tag, kept verbatim.
    Unknown(String),
}

impl ReplyType {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pdf => "pdf",
            Self::Gemini => "gemini",
            Self::Error => "error",
            Self::Unknown(other) => other,
        }
    }
}

impl Default for ReplyType {
    fn default() -> Self {
        Self::Unknown(String::new())
    }
}

impl From<String> for ReplyType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "pdf" => Self::Pdf,
            "gemini" => Self::Gemini,
            "error" => Self::Error,
            _ => Self::Unknown(value),
        }
    }
}

impl From<ReplyType> for String {
    fn from(value: ReplyType) -> Self {
        match value {
            ReplyType::Unknown(other) => other,
            known => known.as_str().to_owned(),
        }
    }
}

/// Response body of `POST /chat`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    #[serde(default)]
    pub reply_type: ReplyType,
    /// Already-formatted HTML for `pdf` / `gemini` replies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply: Option<String>,
    /// Human-readable failure text for `error` replies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// What the widget should show for a decoded reply.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReplyOutcome {
    /// Display this HTML as-is.
    Answer(String),
    /// Server-declared error with its optional message.
    ServerError(Option<String>),
    /// Unrecognized discriminator or malformed payload.
    Unexpected,
}

impl ChatReply {
    /// A model answer carrying pre-rendered HTML.
    #[must_use]
    pub fn gemini(html: impl Into<String>) -> Self {
        Self { reply_type: ReplyType::Gemini, reply: Some(html.into()), message: None }
    }

    /// A server-declared failure.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self { reply_type: ReplyType::Error, reply: None, message: Some(message.into()) }
    }

    /// Build a reply from any JSON value without rejecting odd shapes.
    ///
    /// Non-object values and non-string fields are treated as absent; a
    /// non-string `reply_type` becomes [`ReplyType::Unknown`] holding its JSON
    /// text.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        let reply_type = match value.get("reply_type") {
            Some(Value::String(tag)) => ReplyType::from(tag.clone()),
            Some(other) => ReplyType::Unknown(other.to_string()),
            None => ReplyType::default(),
        };
        let text_field = |key: &str| value.get(key).and_then(Value::as_str).map(str::to_owned);
        Self { reply_type, reply: text_field("reply"), message: text_field("message") }
    }

    /// Classify the reply for display.
    #[must_use]
    pub fn outcome(&self) -> ReplyOutcome {
        match self.reply_type {
            ReplyType::Pdf | ReplyType::Gemini => match &self.reply {
                Some(html) => ReplyOutcome::Answer(html.clone()),
                None => ReplyOutcome::Unexpected,
            },
            ReplyType::Error => ReplyOutcome::ServerError(self.message.clone().filter(|m| !m.is_empty())),
            ReplyType::Unknown(_) => ReplyOutcome::Unexpected,
        }
    }
}

/// Decode a reply body.
///
/// # Errors
///
/// Returns [`WireError::Json`] only when the body is not JSON. Any JSON value
/// decodes; see [`ChatReply::from_value`].
pub fn decode_reply(body: &str) -> Result<ChatReply, WireError> {
    let value: Value = serde_json::from_str(body)?;
    Ok(ChatReply::from_value(&value))
}

/// Encode a request body.
///
/// # Errors
///
/// Returns [`WireError::Json`] if serialization fails.
pub fn encode_request(request: &ChatRequest) -> Result<String, WireError> {
    Ok(serde_json::to_string(request)?)
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
