//! Top-level HTTP application.
//!
//! Mounts the tool API under `/api/tools` and serves the public directory
//! for everything else, falling back to `index.html` for client-side routes.

use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderValue, Method};
use axum::Router;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

use super::tools::{tool_routes, ToolHandlers};

/// Path prefix of the tool API.
pub const TOOLS_API_PREFIX: &str = "/api/tools";

/// Build the full application router.
pub fn app_router(handlers: ToolHandlers, server: &ServerConfig) -> Router {
    let public = &server.public_dir;
    let spa = ServeDir::new(public).fallback(ServeFile::new(public.join("index.html")));

    Router::new()
        .nest(TOOLS_API_PREFIX, tool_routes(handlers))
        .fallback_service(spa)
        .layer(DefaultBodyLimit::max(server.max_upload_bytes))
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(cors_layer(server))
        .layer(TraceLayer::new_for_http())
}

/// CORS policy: any origin unless an explicit list is configured.
fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect();

    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any)
}
