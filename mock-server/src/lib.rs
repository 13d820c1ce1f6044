//! Stand-in for the local AI development server the client talks to.
//!
//! Serves the two demo endpoints (`/api/ai/test`, `/api/ai/ping`) plus two
//! fixture routes that let tests exercise the client's empty-body and
//! bad-encoding failure paths over real HTTP. Unknown routes 404 via axum's
//! default fallback.

use axum::{
    http::header,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use tokio::net::TcpListener;

/// Payload accepted by `POST /api/ai/ping`.
#[derive(Deserialize)]
pub struct Ping {
    pub content: String,
}

pub fn app() -> Router {
    Router::new()
        .route("/api/ai/test", get(test_endpoint))
        .route("/api/ai/ping", post(ping))
        .route("/api/ai/empty", get(empty))
        .route("/api/ai/binary", get(binary))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn test_endpoint() -> Json<serde_json::Value> {
    Json(json!({ "message": "ai service reachable", "status": "ok" }))
}

async fn ping(Json(input): Json<Ping>) -> Json<serde_json::Value> {
    Json(json!({ "reply": input.content }))
}

/// 200 with a zero-length body.
async fn empty() {}

/// 200 with bytes that are not valid UTF-8.
async fn binary() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/octet-stream")],
        vec![0xffu8, 0xfe, 0xfd],
    )
}
