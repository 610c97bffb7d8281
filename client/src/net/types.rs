//! Wire DTOs for the `/chat` endpoint and the widget's send error.
//!
//! DESIGN
//! ======
//! The backend owns the schema. Only the fields the widget reads are modeled;
//! unknown response fields are ignored so backend additions never break a
//! send.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Body of `POST /chat`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChatRequest {
    /// Trimmed user input.
    pub message: String,
}

/// Successful `/chat` response body.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ChatReply {
    /// Answer text shown as the bot message.
    pub response: String,
    /// Source URLs in display order. Absent means no link section.
    #[serde(default)]
    pub sources: Option<Vec<String>>,
}

/// Failure of a chat send.
///
/// Network errors, non-success statuses, and undecodable bodies all collapse
/// into the one variant. The detail is for the console log only; the user
/// sees a generic notification.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SendError {
    #[error("send failed: {0}")]
    SendFailed(String),
}
