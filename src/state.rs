/// 路由共享状态

use std::sync::Arc;

use crate::cache::{EntryStore, StreamCache};
use crate::catalog::Catalog;
use crate::config::AddonConfig;
use crate::kick_client::{KickClient, StreamResolver};

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub streams: Arc<StreamCache>,
}

impl AppState {
    pub fn new(config: AddonConfig, catalog: Catalog, resolver: Arc<dyn StreamResolver>) -> Self {
        let streams = StreamCache::new(
            Arc::new(EntryStore::new()),
            resolver,
            config.stream_cache_ttl(),
        );
        Self {
            catalog: Arc::new(catalog),
            streams: Arc::new(streams),
        }
    }

    /// 使用内置目录和 Kick 客户端构建
    pub fn from_config(config: AddonConfig) -> Result<Self, reqwest::Error> {
        let client = KickClient::from_config(&config)?;
        Ok(Self::new(config, Catalog::builtin(), Arc::new(client)))
    }
}
