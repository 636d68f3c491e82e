/// 目录路由：完整列表 + 搜索

use axum::{
    extract::{Path, State},
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tracing::debug;

use super::strip_json;
use crate::catalog::CATALOG_ID;
use crate::state::AppState;
use crate::types::addon::{CatalogResponse, MetaPreview};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/catalog/tv/{file}", get(catalog_list))
        .route("/catalog/tv/{catalog_id}/{extra}", get(catalog_extra))
}

/// 目录的附加参数，路径形如 `search=foo&skip=0.json`
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CatalogExtra {
    pub search: Option<String>,
    pub skip: usize,
}

#[derive(Debug, Default, Deserialize)]
struct RawExtra {
    search: Option<String>,
    skip: Option<String>,
}

impl CatalogExtra {
    /// 解析未解码的路径段：先按 `&` 拆分再逐个解码，搜索词里的 `%26` 保持为 `&`
    pub fn parse(raw: &str) -> Self {
        let raw: RawExtra = serde_urlencoded::from_str(strip_json(raw)).unwrap_or_default();
        Self {
            search: raw.search,
            skip: raw.skip.and_then(|v| v.parse().ok()).unwrap_or(0),
        }
    }
}

async fn catalog_list(State(state): State<AppState>, Path(file): Path<String>) -> Response {
    render(&state, strip_json(&file), CatalogExtra::default())
}

/// `Path` 提取的值已经解码，附加参数要从原始 URI 的最后一段读取
async fn catalog_extra(
    State(state): State<AppState>,
    Path((catalog_id, _)): Path<(String, String)>,
    uri: Uri,
) -> Response {
    let raw = uri.path().rsplit('/').next().unwrap_or_default();
    let extra = CatalogExtra::parse(raw);
    debug!("[CATALOG] {} extra={:?}", catalog_id, extra);
    render(&state, &catalog_id, extra)
}

fn render(state: &AppState, catalog_id: &str, extra: CatalogExtra) -> Response {
    if catalog_id != CATALOG_ID {
        return (
            StatusCode::NOT_FOUND,
            Json(CatalogResponse {
                metas: vec![],
                error: Some("Catalog not found".into()),
            }),
        )
            .into_response();
    }

    let matched = match extra.search.as_deref() {
        Some(term) => state.catalog.search(term),
        None => state.catalog.all().iter().collect(),
    };

    let metas = matched
        .into_iter()
        .skip(extra.skip)
        .map(MetaPreview::from)
        .collect();

    Json(CatalogResponse { metas, error: None }).into_response()
}
