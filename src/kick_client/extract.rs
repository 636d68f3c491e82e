/// 从上游 JSON 中提取直播地址
/// 上游字段不固定，按优先级依次尝试多个路径，取第一个非空字符串

use serde_json::Value;

/// 点分隔的 JSON 字段路径，例如 `livestream.source`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath(Vec<String>);

impl FieldPath {
    pub fn parse(dotted: &str) -> Self {
        Self(
            dotted
                .split('.')
                .filter(|seg| !seg.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }

    pub fn lookup<'a>(&self, root: &'a Value) -> Option<&'a Value> {
        self.0.iter().try_fold(root, |node, key| node.get(key))
    }

    /// 路径存在且为非空字符串时原样返回，纯空白视为空
    pub fn non_empty_str<'a>(&self, root: &'a Value) -> Option<&'a str> {
        self.lookup(root)
            .and_then(Value::as_str)
            .filter(|s| !s.trim().is_empty())
    }
}

impl std::fmt::Display for FieldPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0.join("."))
    }
}

/// 默认探测顺序：直播会话对象优先，顶层字段兜底
pub fn default_playback_paths() -> Vec<FieldPath> {
    ["livestream.source", "livestream.playback_url", "playback_url"]
        .iter()
        .map(|p| FieldPath::parse(p))
        .collect()
}

pub fn first_match<'a>(paths: &[FieldPath], body: &'a Value) -> Option<&'a str> {
    paths.iter().find_map(|p| p.non_empty_str(body))
}
