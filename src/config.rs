/// kick-addon 配置模块
/// 支持环境变量和默认值

use std::time::Duration;

#[derive(Debug, Clone)]
pub struct AddonConfig {
    /// 监听端口
    pub port: u16,
    /// 监听地址
    pub host: String,
    /// Kick API 根地址，频道接口为 {base}/channels/{handle}
    pub kick_api_base: String,
    /// 上游请求超时（毫秒）
    pub upstream_timeout_ms: u64,
    /// 直播地址缓存 TTL（秒）
    pub stream_cache_ttl_secs: u64,
}

impl Default for AddonConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "0.0.0.0".into(),
            kick_api_base: "https://kick.com/api/v2".into(),
            upstream_timeout_ms: 5000,
            stream_cache_ttl_secs: 300,
        }
    }
}

impl AddonConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 按给定的查找函数读取配置，无法解析的值回退到默认值
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            port: lookup("PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.port),
            host: lookup("HOST").unwrap_or(defaults.host),
            kick_api_base: lookup("KICK_API_BASE")
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or(defaults.kick_api_base),
            upstream_timeout_ms: lookup("KICK_TIMEOUT_MS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.upstream_timeout_ms),
            stream_cache_ttl_secs: lookup("STREAM_CACHE_TTL_SECS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.stream_cache_ttl_secs),
        }
    }

    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_millis(self.upstream_timeout_ms)
    }

    pub fn stream_cache_ttl(&self) -> Duration {
        Duration::from_secs(self.stream_cache_ttl_secs)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
