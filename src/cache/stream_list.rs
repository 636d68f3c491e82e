/// 直播地址解析缓存
/// 命中且未过期直接返回；未命中时请求上游一次，成功结果缓存 TTL
/// 未开播和请求失败都不缓存，下次请求会重新查询上游

use dashmap::DashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{debug, info};

use super::store::EntryStore;
use crate::kick_client::{StreamResolver, UpstreamError};
use crate::types::addon::Stream;

#[derive(Debug, thiserror::Error)]
pub enum StreamError {
    #[error("stream not available")]
    Unavailable,
    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

pub struct StreamCache {
    store: Arc<EntryStore>,
    resolver: Arc<dyn StreamResolver>,
    ttl: Duration,
    locks: DashMap<String, Arc<Mutex<()>>>,
}

impl StreamCache {
    pub fn new(store: Arc<EntryStore>, resolver: Arc<dyn StreamResolver>, ttl: Duration) -> Self {
        Self {
            store,
            resolver,
            ttl,
            locks: DashMap::new(),
        }
    }

    pub fn store(&self) -> &EntryStore {
        &self.store
    }

    pub async fn get_or_resolve(&self, id: &str, handle: &str) -> Result<Vec<Stream>, StreamError> {
        // 缓存命中
        if let Some(streams) = self.store.get_fresh(id, self.ttl) {
            debug!("[CACHE] stream 命中: {}", id);
            return Ok(streams);
        }

        // 并发去重：同一 id 同时只有一个上游请求
        let lock = self
            .locks
            .entry(id.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();

        let _guard = lock.lock().await;

        // double check：拿到锁后再查一次缓存
        if let Some(streams) = self.store.get_fresh(id, self.ttl) {
            debug!("[CACHE] stream 命中(double check): {}", id);
            return Ok(streams);
        }

        let stream = self.resolver.resolve(handle).await?.ok_or(StreamError::Unavailable)?;
        let streams = vec![stream];

        info!("[CACHE] stream 已缓存: {} → {}", id, streams[0].url);
        self.store.insert(id, streams.clone());

        // 清理过期条目
        self.store.purge_older_than(self.ttl.saturating_mul(2));

        Ok(streams)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use reqwest::StatusCode;
    use std::sync::atomic::{AtomicUsize, Ordering};

    const TTL: Duration = Duration::from_secs(300);

    #[derive(Clone, Copy)]
    enum Outcome {
        Live(&'static str),
        Offline,
        Fail,
    }

    struct FakeResolver {
        calls: AtomicUsize,
        outcome: std::sync::Mutex<Outcome>,
        delay: Duration,
    }

    impl FakeResolver {
        fn new(outcome: Outcome) -> Arc<Self> {
            Self::with_delay(outcome, Duration::ZERO)
        }

        fn with_delay(outcome: Outcome, delay: Duration) -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                outcome: std::sync::Mutex::new(outcome),
                delay,
            })
        }

        fn set(&self, outcome: Outcome) {
            *self.outcome.lock().unwrap() = outcome;
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl StreamResolver for FakeResolver {
        async fn resolve(&self, _handle: &str) -> Result<Option<Stream>, UpstreamError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
            let outcome = *self.outcome.lock().unwrap();
            match outcome {
                Outcome::Live(url) => Ok(Some(Stream {
                    title: "Kick.tv Live".into(),
                    url: url.into(),
                })),
                Outcome::Offline => Ok(None),
                Outcome::Fail => Err(UpstreamError::Status(StatusCode::BAD_GATEWAY)),
            }
        }
    }

    fn cache_with(resolver: Arc<FakeResolver>) -> StreamCache {
        StreamCache::new(Arc::new(EntryStore::new()), resolver, TTL)
    }

    #[tokio::test(start_paused = true)]
    async fn resolves_live_channel_into_single_stream() {
        let resolver = FakeResolver::new(Outcome::Live("https://stream.example/overpow.m3u8"));
        let cache = cache_with(resolver.clone());

        let streams = cache.get_or_resolve("kick-overpow", "overpow").await.unwrap();
        assert_eq!(
            streams,
            vec![Stream {
                title: "Kick.tv Live".into(),
                url: "https://stream.example/overpow.m3u8".into(),
            }]
        );
        assert_eq!(resolver.calls(), 1);
        assert_eq!(cache.store().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn hit_within_ttl_skips_upstream() {
        let resolver = FakeResolver::new(Outcome::Live("https://stream.example/a.m3u8"));
        let cache = cache_with(resolver.clone());

        let first = cache.get_or_resolve("kick-overpow", "overpow").await.unwrap();
        tokio::time::advance(Duration::from_secs(299)).await;
        // 上游变化在 TTL 内不可见
        resolver.set(Outcome::Live("https://stream.example/b.m3u8"));
        let second = cache.get_or_resolve("kick-overpow", "overpow").await.unwrap();

        assert_eq!(first, second);
        assert_eq!(resolver.calls(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn expired_entry_triggers_exactly_one_refresh() {
        let resolver = FakeResolver::new(Outcome::Live("https://stream.example/a.m3u8"));
        let cache = cache_with(resolver.clone());

        cache.get_or_resolve("kick-overpow", "overpow").await.unwrap();
        tokio::time::advance(TTL + Duration::from_secs(1)).await;
        resolver.set(Outcome::Live("https://stream.example/b.m3u8"));

        let refreshed = cache.get_or_resolve("kick-overpow", "overpow").await.unwrap();
        assert_eq!(refreshed[0].url, "https://stream.example/b.m3u8");
        assert_eq!(resolver.calls(), 2);

        cache.get_or_resolve("kick-overpow", "overpow").await.unwrap();
        assert_eq!(resolver.calls(), 2);
        assert_eq!(cache.store().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn offline_is_never_cached() {
        let resolver = FakeResolver::new(Outcome::Offline);
        let cache = cache_with(resolver.clone());

        for _ in 0..2 {
            let err = cache.get_or_resolve("kick-overpow", "overpow").await.unwrap_err();
            assert!(matches!(err, StreamError::Unavailable));
        }
        assert_eq!(resolver.calls(), 2);
        assert!(cache.store().is_empty());

        // 开播后立即可见
        resolver.set(Outcome::Live("https://stream.example/a.m3u8"));
        assert!(cache.get_or_resolve("kick-overpow", "overpow").await.is_ok());
        assert_eq!(resolver.calls(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn failure_is_never_cached() {
        let resolver = FakeResolver::new(Outcome::Fail);
        let cache = cache_with(resolver.clone());

        for _ in 0..2 {
            let err = cache.get_or_resolve("kick-overpow", "overpow").await.unwrap_err();
            assert!(matches!(err, StreamError::Upstream(UpstreamError::Status(_))));
        }
        assert_eq!(resolver.calls(), 2);
        assert!(cache.store().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn failed_refresh_does_not_serve_expired_entry() {
        let resolver = FakeResolver::new(Outcome::Live("https://stream.example/a.m3u8"));
        let cache = cache_with(resolver.clone());

        cache.get_or_resolve("kick-overpow", "overpow").await.unwrap();
        tokio::time::advance(TTL + Duration::from_secs(1)).await;
        resolver.set(Outcome::Fail);

        assert!(cache.get_or_resolve("kick-overpow", "overpow").await.is_err());
        assert_eq!(resolver.calls(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn concurrent_misses_share_one_upstream_call() {
        let resolver = FakeResolver::with_delay(
            Outcome::Live("https://stream.example/a.m3u8"),
            Duration::from_millis(200),
        );
        let cache = cache_with(resolver.clone());

        let (a, b) = tokio::join!(
            cache.get_or_resolve("kick-overpow", "overpow"),
            cache.get_or_resolve("kick-overpow", "overpow"),
        );
        assert_eq!(a.unwrap(), b.unwrap());
        assert_eq!(resolver.calls(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn different_ids_are_cached_independently() {
        let resolver = FakeResolver::new(Outcome::Live("https://stream.example/a.m3u8"));
        let cache = cache_with(resolver.clone());

        cache.get_or_resolve("kick-overpow", "overpow").await.unwrap();
        cache.get_or_resolve("kick-randombrucetv", "randombrucetv").await.unwrap();
        cache.get_or_resolve("kick-overpow", "overpow").await.unwrap();

        assert_eq!(resolver.calls(), 2);
        assert_eq!(cache.store().len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn huge_ttl_does_not_overflow() {
        let resolver = FakeResolver::new(Outcome::Live("https://stream.example/a.m3u8"));
        let cache = StreamCache::new(Arc::new(EntryStore::new()), resolver.clone(), Duration::MAX);

        cache.get_or_resolve("kick-overpow", "overpow").await.unwrap();
        cache.get_or_resolve("kick-randombrucetv", "randombrucetv").await.unwrap();
        tokio::time::advance(Duration::from_secs(86_400)).await;
        cache.get_or_resolve("kick-overpow", "overpow").await.unwrap();

        assert_eq!(resolver.calls(), 2);
        assert_eq!(cache.store().len(), 2);
    }
}
