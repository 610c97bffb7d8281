//! Client-side state modules.
//!
//! DESIGN
//! ======
//! `chat` is owned by each chat panel instance; `toast` is shared through
//! Leptos context so any component can raise a notification.

pub mod chat;
pub mod toast;
