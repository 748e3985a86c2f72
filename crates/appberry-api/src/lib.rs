//! Appberry API
//!
//! HTTP backend for the Appberry desktop:
//!
//! - `GET /api`: plain-text greeting
//! - `POST /api/echo`: validates and echoes `{field1, field2}`
//! - `GET /api/d1-demo`: SQLite round-trip on the `dummy` table
//!
//! Every other path is served from the static frontend directory.

pub mod assets;
pub mod config;
pub mod db;
pub mod error;
pub mod routes;

use axum::http::{header, Method};
use axum::Router;
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};

pub use config::ServerConfig;
pub use db::{DemoRow, DemoStore};
pub use error::ApiError;
pub use routes::EchoBody;

/// Shared state handed to every route.
#[derive(Clone, Debug)]
pub struct AppState {
    pub store: DemoStore,
}

/// Build the full application: API routes, static fallback, CORS and MIME
/// header fixes.
pub fn app(config: &ServerConfig, store: DemoStore) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list([config.cors_origin.clone()]))
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::HEAD,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers(AllowHeaders::mirror_request())
        .expose_headers([header::CONTENT_TYPE]);

    routes::api_routes()
        .fallback_service(assets::serve_dir(&config.static_dir))
        .layer(axum::middleware::from_fn(assets::add_headers))
        .layer(cors)
        .with_state(AppState { store })
}
