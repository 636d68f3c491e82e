/// Kick.com HTTP 客户端
/// 每次解析只发一次请求，不重试；超时由 reqwest 客户端统一控制

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, ORIGIN, REFERER};
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};

use super::error::UpstreamError;
use super::extract::{default_playback_paths, first_match, FieldPath};
use crate::config::AddonConfig;
use crate::types::addon::Stream;

/// 解析成功后的直播条目标题
pub const LIVE_STREAM_TITLE: &str = "Kick.tv Live";

/// Kick 会拒绝缺少浏览器特征头的请求
const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
    (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";
const KICK_ORIGIN: &str = "https://kick.com";
const KICK_REFERER: &str = "https://kick.com/";

/// 把频道名解析为直播地址
/// `Ok(None)` 表示请求成功但频道当前未开播
#[async_trait]
pub trait StreamResolver: Send + Sync {
    async fn resolve(&self, handle: &str) -> Result<Option<Stream>, UpstreamError>;
}

#[derive(Clone)]
pub struct KickClient {
    api_base: String,
    timeout: Duration,
    field_paths: Vec<FieldPath>,
    http: Client,
}

impl KickClient {
    pub fn new(api_base: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(BROWSER_USER_AGENT)
            .default_headers(browser_headers())
            .build()?;

        Ok(Self {
            api_base: api_base.trim_end_matches('/').to_string(),
            timeout,
            field_paths: default_playback_paths(),
            http,
        })
    }

    pub fn from_config(config: &AddonConfig) -> Result<Self, reqwest::Error> {
        Self::new(&config.kick_api_base, config.upstream_timeout())
    }

    /// 替换直播地址的探测路径（按顺序尝试）
    pub fn with_field_paths(mut self, paths: Vec<FieldPath>) -> Self {
        self.field_paths = paths;
        self
    }

    pub fn channel_url(&self, handle: &str) -> String {
        format!("{}/channels/{}", self.api_base, handle)
    }

    /// 获取频道原始 JSON
    pub async fn fetch_channel(&self, handle: &str) -> Result<Value, UpstreamError> {
        let url = self.channel_url(handle);
        debug!("[KICK] GET {}", url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| UpstreamError::from_reqwest(e, self.timeout))?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status(status));
        }

        let body = response
            .text()
            .await
            .map_err(|e| UpstreamError::from_reqwest(e, self.timeout))?;

        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl StreamResolver for KickClient {
    async fn resolve(&self, handle: &str) -> Result<Option<Stream>, UpstreamError> {
        let body = match self.fetch_channel(handle).await {
            Ok(body) => body,
            Err(e) => {
                warn!("[KICK] 频道 {} 请求失败: {}", handle, e);
                return Err(e);
            }
        };

        match first_match(&self.field_paths, &body) {
            Some(url) => Ok(Some(Stream {
                title: LIVE_STREAM_TITLE.into(),
                url: url.to_string(),
            })),
            None => {
                debug!("[KICK] 频道 {} 未开播", handle);
                Ok(None)
            }
        }
    }
}

fn browser_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json, text/plain, */*"));
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));
    headers.insert(ORIGIN, HeaderValue::from_static(KICK_ORIGIN));
    headers.insert(REFERER, HeaderValue::from_static(KICK_REFERER));
    headers
}
