//! SSR host for the club portal.
//!
//! Renders the Leptos app on the server, serves the hydration bundle from
//! `/pkg`, and answers `/healthz` for load balancers. The club backend and the
//! upload service run elsewhere; the browser talks to them directly.

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use club_portal::app::{App, shell};
use club_portal::config::HostConfig;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

#[tokio::main]
async fn main() {
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("no .env loaded: {e}");
    }
    tracing_subscriber::fmt::init();

    let host = HostConfig::from_env().expect("invalid host configuration");
    let app = leptos_app().expect("leptos app init failed");

    let listener = tokio::net::TcpListener::bind(host.addr).await.expect("failed to bind");

    tracing::info!(addr = %host.addr, "club portal listening");
    axum::serve(listener, app).await.expect("server failed");
}

/// Leptos SSR routes + static bundle + health check.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
fn leptos_app() -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(Router::new()
        .route("/healthz", get(healthz))
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
