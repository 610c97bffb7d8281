//! Build-time widget configuration.
//!
//! The chat backend address is baked in at compile time so the SSR render
//! and the hydrated WASM bundle always agree on it. Set `MOONCHAT_API_BASE`
//! when building to point the widget at a different backend.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Backend address used when `MOONCHAT_API_BASE` is unset at build time.
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Document title and page heading.
pub const PAGE_TITLE: &str = "Jupiter Moons Chatbot";

/// Placeholder shown in the empty chat input.
pub const INPUT_PLACEHOLDER: &str = "Ask about Jupiter's moons...";

/// Base address of the chat backend, without a trailing slash.
pub fn api_base() -> &'static str {
    normalize_base(option_env!("MOONCHAT_API_BASE").unwrap_or(DEFAULT_API_BASE))
}

fn normalize_base(raw: &str) -> &str {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() { DEFAULT_API_BASE } else { trimmed }
}
