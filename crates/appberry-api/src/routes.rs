//! Demonstration API routes.
//!
//! All routes live under `/api` so they never collide with frontend assets.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::db::DemoRow;
use crate::error::ApiError;
use crate::AppState;

/// Body accepted and returned by `POST /api/echo`.
///
/// `field2` keeps the number as written, so `5` is echoed as `5` and `2.5`
/// as `2.5`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EchoBody {
    pub field1: String,
    pub field2: serde_json::Number,
}

/// Router for the `/api` routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/api", get(hello))
        .route("/api/echo", post(echo))
        .route("/api/d1-demo", get(d1_demo))
}

async fn hello() -> &'static str {
    "Hello World!"
}

async fn echo(payload: Result<Json<EchoBody>, JsonRejection>) -> Result<Json<EchoBody>, ApiError> {
    let Json(body) = payload?;
    Ok(Json(body))
}

/// Reset the demo row and list the table. Writes on GET for demonstration only.
async fn d1_demo(State(state): State<AppState>) -> Result<Json<Vec<DemoRow>>, ApiError> {
    let rows = state.store.reset_demo_row().await?;
    debug!(rows = rows.len(), "demo table reset");
    Ok(Json(rows))
}
