//! HTTP helper for the chat backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): a stub returning an error, since sends only happen in
//! response to browser events.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is mapped to [`SendError::SendFailed`]. Callers never see a
//! panic and never need to distinguish transport from status failures.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ChatReply, SendError};
#[cfg(feature = "hydrate")]
use super::types::ChatRequest;

fn chat_endpoint(base: &str) -> String {
    format!("{}/chat", base.trim_end_matches('/'))
}

#[cfg(any(test, feature = "hydrate"))]
fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

#[cfg(any(test, feature = "hydrate"))]
fn status_failed_message(status: u16) -> String {
    format!("chat request failed: {status}")
}

/// Post `message` to `{base}/chat` and decode the reply.
///
/// # Errors
///
/// Returns [`SendError::SendFailed`] on network failure, a non-OK status, or
/// a body that does not decode as [`ChatReply`].
pub async fn send_chat_message(base: &str, message: &str) -> Result<ChatReply, SendError> {
    let url = chat_endpoint(base);
    #[cfg(feature = "hydrate")]
    {
        let payload = ChatRequest { message: message.to_owned() };
        let resp = gloo_net::http::Request::post(&url)
            .json(&payload)
            .map_err(|e| SendError::SendFailed(e.to_string()))?
            .send()
            .await
            .map_err(|e| SendError::SendFailed(e.to_string()))?;
        let status = resp.status();
        if !is_success(status) {
            return Err(SendError::SendFailed(status_failed_message(status)));
        }
        resp.json::<ChatReply>()
            .await
            .map_err(|e| SendError::SendFailed(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(SendError::SendFailed(format!(
            "{url}: cannot send {} bytes outside the browser",
            message.len()
        )))
    }
}
