//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the Leptos SSR page, the compiled WASM/CSS bundle under `/pkg`, and
//! a health probe under a single Axum router. The `/chat` endpoint the widget
//! calls belongs to the separate chat backend and is not served here.

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

#[derive(Debug, thiserror::Error)]
pub enum RouteError {
    /// `[package.metadata.leptos]` is missing or malformed.
    #[error("leptos configuration: {0}")]
    LeptosConfig(String),
}

/// Full application router: Leptos SSR at `/`, static bundle at `/pkg`.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded.
pub fn app() -> Result<Router, RouteError> {
    let conf = get_configuration(None).map_err(|e| RouteError::LeptosConfig(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);
    let pkg_path = pkg_dir(&leptos_options.site_root, &leptos_options.site_pkg_dir);
    tracing::debug!(pkg = %pkg_path.display(), "serving widget bundle");

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    Ok(Router::new()
        .route("/healthz", get(healthz))
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(pkg_path))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

/// Directory holding the compiled WASM, JS glue, and stylesheet.
fn pkg_dir(site_root: &str, site_pkg_dir: &str) -> PathBuf {
    PathBuf::from(site_root).join(site_pkg_dir)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;
