/// 直播地址缓存的条目存储
/// 每个 key 最多一条，整条替换；过期只在读取时判断

use std::time::Duration;

use dashmap::DashMap;
use tokio::time::Instant;

use crate::types::addon::Stream;

#[derive(Debug, Clone)]
pub struct CachedEntry {
    pub streams: Vec<Stream>,
    pub created_at: Instant,
}

impl CachedEntry {
    pub fn is_fresh(&self, ttl: Duration) -> bool {
        self.created_at.elapsed() <= ttl
    }
}

#[derive(Debug, Default)]
pub struct EntryStore {
    entries: DashMap<String, CachedEntry>,
}

impl EntryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 未过期时返回缓存内容，过期条目视为不存在
    pub fn get_fresh(&self, key: &str, ttl: Duration) -> Option<Vec<Stream>> {
        self.entries
            .get(key)
            .filter(|entry| entry.is_fresh(ttl))
            .map(|entry| entry.streams.clone())
    }

    pub fn insert(&self, key: &str, streams: Vec<Stream>) {
        self.entries.insert(
            key.to_string(),
            CachedEntry {
                streams,
                created_at: Instant::now(),
            },
        );
    }

    /// 清理存在时间超过 max_age 的条目
    pub fn purge_older_than(&self, max_age: Duration) {
        self.entries.retain(|_, v| v.created_at.elapsed() <= max_age);
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
