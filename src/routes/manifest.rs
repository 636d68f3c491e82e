/// 插件描述路由

use axum::{routing::get, Json, Router};

use crate::catalog::{CATALOG_ID, CATALOG_NAME};
use crate::state::AppState;
use crate::types::addon::{CatalogDef, ExtraDef, Manifest, CONTENT_TYPE_TV};

pub const ADDON_ID: &str = "kick.manual.addon";
pub const ADDON_VERSION: &str = "1.0.0";
pub const ADDON_NAME: &str = "Kick Addon Manual";
pub const ADDON_DESCRIPTION: &str = "Streamerzy z Kick.com: Overpow i RandomBruceTV";

pub fn router() -> Router<AppState> {
    Router::new().route("/manifest.json", get(manifest_handler))
}

pub fn manifest() -> Manifest {
    Manifest {
        id: ADDON_ID.into(),
        version: ADDON_VERSION.into(),
        name: ADDON_NAME.into(),
        description: ADDON_DESCRIPTION.into(),
        resources: vec!["catalog".into(), "meta".into(), "stream".into()],
        types: vec![CONTENT_TYPE_TV.into()],
        catalogs: vec![CatalogDef {
            content_type: CONTENT_TYPE_TV.into(),
            id: CATALOG_ID.into(),
            name: CATALOG_NAME.into(),
            extra: vec![ExtraDef {
                id: "search".into(),
                name: "Search".into(),
            }],
        }],
    }
}

async fn manifest_handler() -> Json<Manifest> {
    Json(manifest())
}
