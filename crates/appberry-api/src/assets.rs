//! Static frontend assets served for every non-API path.

use std::path::Path;

use axum::body::Body;
use axum::http::{header, HeaderValue, Request};
use axum::middleware::Next;
use axum::response::Response;
use tower_http::services::ServeDir;

/// Serve files under `dir`; `/` maps to `index.html`
pub fn serve_dir(dir: &Path) -> ServeDir {
    ServeDir::new(dir).precompressed_gzip().precompressed_br()
}

/// Fix MIME types for module scripts and wasm
pub async fn add_headers(request: Request<Body>, next: Next) -> Response {
    let path = request.uri().path().to_string();

    let mut response = next.run(request).await;
    if !response.status().is_success() {
        return response;
    }
    if let Some(content_type) = content_type_for(&path) {
        response
            .headers_mut()
            .insert(header::CONTENT_TYPE, HeaderValue::from_static(content_type));
    }

    response
}

/// Content type to force for a request path, if any
fn content_type_for(path: &str) -> Option<&'static str> {
    let ext = path.rsplit_once('.').map(|(_, ext)| ext)?;
    match ext {
        "js" | "mjs" => Some("application/javascript; charset=utf-8"),
        "wasm" => Some("application/wasm"),
        "css" => Some("text/css; charset=utf-8"),
        "html" => Some("text/html; charset=utf-8"),
        "svg" => Some("image/svg+xml"),
        _ => None,
    }
}
