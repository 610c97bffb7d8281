//! Networking for the chat backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the single `POST /chat` call and `types` defines its wire
//! schema and error.

pub mod api;
pub mod types;
