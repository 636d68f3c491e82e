/// 频道详情路由

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};

use super::strip_json;
use crate::state::AppState;
use crate::types::addon::{MetaDetail, MetaResponse};

pub fn router() -> Router<AppState> {
    Router::new().route("/meta/tv/{file}", get(meta_detail))
}

async fn meta_detail(State(state): State<AppState>, Path(file): Path<String>) -> Response {
    match state.catalog.lookup(strip_json(&file)) {
        Some(streamer) => Json(MetaResponse {
            meta: Some(MetaDetail::from(streamer)),
            error: None,
        })
        .into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(MetaResponse {
                meta: None,
                error: Some("Streamer not found".into()),
            }),
        )
            .into_response(),
    }
}
