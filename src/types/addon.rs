/// 插件协议类型定义

use serde::Serialize;

use crate::catalog::Streamer;

/// 本插件只提供这一种内容类型
pub const CONTENT_TYPE_TV: &str = "tv";

#[derive(Debug, Clone, Serialize)]
pub struct Manifest {
    pub id: String,
    pub version: String,
    pub name: String,
    pub description: String,
    pub resources: Vec<String>,
    pub types: Vec<String>,
    pub catalogs: Vec<CatalogDef>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogDef {
    #[serde(rename = "type")]
    pub content_type: String,
    pub id: String,
    pub name: String,
    pub extra: Vec<ExtraDef>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExtraDef {
    pub id: String,
    pub name: String,
}

/// 目录列表中的条目
#[derive(Debug, Clone, Serialize)]
pub struct MetaPreview {
    pub id: String,
    #[serde(rename = "type")]
    pub content_type: String,
    pub name: String,
    pub poster: String,
    pub description: String,
}

impl From<&Streamer> for MetaPreview {
    fn from(s: &Streamer) -> Self {
        Self {
            id: s.id.clone(),
            content_type: CONTENT_TYPE_TV.into(),
            name: s.name.clone(),
            poster: s.poster.clone(),
            description: s.description.clone(),
        }
    }
}

/// 详情页
#[derive(Debug, Clone, Serialize)]
pub struct MetaDetail {
    #[serde(flatten)]
    pub preview: MetaPreview,
    pub background: String,
}

impl From<&Streamer> for MetaDetail {
    fn from(s: &Streamer) -> Self {
        Self {
            preview: MetaPreview::from(s),
            background: s.background.clone(),
        }
    }
}

/// 可播放的直播地址
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stream {
    pub title: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogResponse {
    pub metas: Vec<MetaPreview>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MetaResponse {
    pub meta: Option<MetaDetail>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StreamResponse {
    pub streams: Vec<Stream>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
