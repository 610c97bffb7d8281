//! Chat panel state: message history, draft input, and the pending flag.
//!
//! DESIGN
//! ======
//! A send is split into [`ChatState::begin_send`], which runs synchronously in
//! the event handler, and [`ChatState::finish_send`], which runs once the HTTP
//! call resolves. Keeping both halves on plain data lets the whole send cycle
//! be exercised without a browser.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::net::types::{ChatReply, SendError};

/// State owned by one `ChatPanel` instance.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    history: Vec<Message>,
    draft: String,
    pending: bool,
}

impl ChatState {
    /// Messages in display order.
    pub fn history(&self) -> &[Message] {
        &self.history
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// True while a request is in flight.
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn update_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Whether `begin_send` would start a request right now.
    pub fn can_send(&self) -> bool {
        !self.pending && !self.draft.trim().is_empty()
    }

    /// Start a send.
    ///
    /// Appends the draft as a user message, marks the state pending, and
    /// returns the trimmed payload to post. Returns `None` without touching
    /// anything when the draft is blank or a request is already in flight.
    pub fn begin_send(&mut self) -> Option<String> {
        if !self.can_send() {
            return None;
        }
        let payload = self.draft.trim().to_owned();
        self.history.push(Message::user(self.draft.clone()));
        self.pending = true;
        Some(payload)
    }

    /// Apply the outcome of the request started by `begin_send`.
    ///
    /// On success the reply is appended as a bot message and the draft is
    /// cleared. On failure only the pending flag is reset; the user message
    /// stays in history and the draft is kept for a resend.
    ///
    /// # Errors
    ///
    /// Hands the send error back so the caller can notify the user.
    pub fn finish_send(&mut self, result: Result<ChatReply, SendError>) -> Result<(), SendError> {
        self.pending = false;
        let reply = result?;
        self.history.push(Message::bot(reply.response, reply.sources));
        self.draft.clear();
        Ok(())
    }
}

/// A single chat message. Immutable once created.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    text: String,
    is_user: bool,
    sources: Option<Vec<String>>,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self { text: text.into(), is_user: true, sources: None }
    }

    pub fn bot(text: impl Into<String>, sources: Option<Vec<String>>) -> Self {
        Self { text: text.into(), is_user: false, sources }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_user(&self) -> bool {
        self.is_user
    }

    /// Source URLs in the order the backend returned them; empty when absent.
    pub fn sources(&self) -> &[String] {
        self.sources.as_deref().unwrap_or_default()
    }

    /// Whether the message renders a source link section.
    pub fn has_sources(&self) -> bool {
        !self.sources().is_empty()
    }
}
