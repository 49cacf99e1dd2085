//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! `/api` traffic is forwarded to the backend, the Leptos shell is rendered
//! for page routes, and the compiled bundle is served under `/pkg`. Anything
//! else falls through to the static site root.

pub mod proxy;

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{any, get};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Backend passthrough and health check.
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/api", any(proxy::forward))
        .route("/api/{*path}", any(proxy::forward))
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Full host: API passthrough + Leptos SSR + compiled assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[[workspace.metadata.leptos]]` section).
pub fn leptos_app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());
    let pkg_service = ServeDir::new(site_root_path.join("pkg")).precompressed_gzip();

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", pkg_service)
        .layer(CompressionLayer::new())
        .fallback_service(ServeDir::new(site_root_path).append_index_html_on_directories(true)))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
