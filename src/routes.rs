//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `/api/*`     - Endpoint CRUD and the public content route
//! - `/static/*`  - Front-end assets (production only)
//! - `/`          - Front-end index.html (production only)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Development only, scoped to the configured front-end origin
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::config::{Config, Environment};
use crate::state::AppState;
use axum::Router;
use axum::http::{HeaderValue, Method, header};
use tower::Layer;
use tower_http::cors::CorsLayer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

/// Constructs the application router with all routes and middleware.
///
/// In development the separately-running front-end talks to the API cross
/// origin, so a CORS layer for `config.client_url` is attached. In
/// production the front-end build is served from `config.static_dir` by
/// this process and no CORS is needed.
pub fn app_router(state: AppState, config: &Config) -> NormalizePath<Router> {
    let mut router = Router::new().nest("/api", api::routes::api_routes());

    match config.environment {
        Environment::Development => {
            router = router.layer(development_cors(&config.client_url));
        }
        Environment::Production => {
            if let Some(static_dir) = &config.static_dir {
                router = router
                    .nest_service("/static", ServeDir::new(static_dir.join("static")))
                    .route_service("/", ServeFile::new(static_dir.join("index.html")));
            }
        }
    }

    let router = router.with_state(state).layer(TraceLayer::new_for_http());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

/// CORS policy for the front-end dev server.
fn development_cors(client_url: &str) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([header::ORIGIN, header::CONTENT_TYPE]);

    match client_url.parse::<HeaderValue>() {
        Ok(origin) => layer.allow_origin(origin),
        Err(_) => {
            tracing::warn!(client_url, "Invalid CLIENT_URL, CORS origin not set");
            layer
        }
    }
}
