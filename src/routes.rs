//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One axum router serves the Leptos SSR shell, the WASM/CSS bundle under
//! `/pkg`, a liveness probe, and the static media directory for everything
//! else. The server keeps no state between requests.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::{Path, PathBuf};

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::{ServerConfig, ServerConfigError};

/// Probe and static media routes. Unknown paths resolve against `assets_dir`
/// and 404 when no file matches.
fn static_routes(assets_dir: &Path) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .fallback_service(ServeDir::new(assets_dir))
}

/// Full application router: SSR at `/`, bundle at `/pkg`, static media.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[package.metadata.leptos]` section).
pub fn app(config: &ServerConfig) -> Result<Router, ServerConfigError> {
    let conf = get_configuration(None).map_err(|e| ServerConfigError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(static_routes(&config.assets_dir)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
