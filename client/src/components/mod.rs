//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the chat surface and the toast overlay. Shared state is
//! read from Leptos context; per-panel state stays inside the panel.

pub mod chat_panel;
pub mod toaster;
