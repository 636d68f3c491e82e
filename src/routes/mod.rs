pub mod catalog;
pub mod manifest;
pub mod meta;
pub mod stream;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use tower_http::cors::CorsLayer;
use tracing::warn;

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(manifest::router())
        .merge(catalog::router())
        .merge(meta::router())
        .merge(stream::router())
        .route("/", get(|| async { Redirect::to("/manifest.json") }))
        // 兜底
        .fallback(fallback)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// 去掉路径段末尾的 `.json`
pub(crate) fn strip_json(segment: &str) -> &str {
    segment.strip_suffix(".json").unwrap_or(segment)
}

async fn fallback(req: axum::extract::Request) -> Response {
    warn!("[STUB] 未实现的端点: {} {}", req.method(), req.uri().path());
    (StatusCode::NOT_FOUND, Json(json!({"error": "Not found"}))).into_response()
}
