//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Stitches Leptos SSR rendering, the compiled WASM/CSS bundle under `/pkg`,
//! static images, and a health probe under a single Axum router. There are no
//! API routes here: the consultation request goes straight from the browser to
//! the external endpoint.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

use std::path::PathBuf;

use axum::Json;
use axum::Router;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use serde_json::{Value, json};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use site_client::net::config::resolve_base_url;

use crate::config::ServerConfig;

/// Routes that do not depend on Leptos configuration.
fn base_routes(config: &ServerConfig) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .nest_service("/images", ServeDir::new(config.assets_dir.join("images")))
}

/// Full site router: base routes + Leptos SSR + `/pkg` bundle.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[workspace.metadata.leptos]` section).
pub fn app(config: &ServerConfig) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(site_client::app::App);
    let api_base = shell_api_base(config);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || site_client::app::shell(opts.clone(), api_base.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(base_routes(config)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

/// Consultation API base written into the SSR shell.
fn shell_api_base(config: &ServerConfig) -> String {
    resolve_base_url(config.consultation_api_base.as_deref())
}

async fn healthz() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
