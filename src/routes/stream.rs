/// 直播地址路由
/// 只有这里会触发上游请求（经由解析缓存）

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use tracing::{debug, error};

use super::strip_json;
use crate::cache::StreamError;
use crate::state::AppState;
use crate::types::addon::StreamResponse;

pub fn router() -> Router<AppState> {
    Router::new().route("/stream/tv/{file}", get(stream_list))
}

fn empty_with_error(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(StreamResponse {
            streams: vec![],
            error: Some(message.into()),
        }),
    )
        .into_response()
}

async fn stream_list(State(state): State<AppState>, Path(file): Path<String>) -> Response {
    let id = strip_json(&file);
    let Some(streamer) = state.catalog.lookup(id) else {
        return empty_with_error(StatusCode::NOT_FOUND, "Streamer not found");
    };

    match state.streams.get_or_resolve(&streamer.id, &streamer.username).await {
        Ok(streams) => Json(StreamResponse {
            streams,
            error: None,
        })
        .into_response(),
        Err(StreamError::Unavailable) => {
            debug!("[STREAM] {} 未开播", streamer.id);
            empty_with_error(StatusCode::NOT_FOUND, "Stream not available")
        }
        Err(StreamError::Upstream(e)) => {
            error!("[STREAM] {} 获取失败: {}", streamer.id, e);
            empty_with_error(StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch stream")
        }
    }
}
