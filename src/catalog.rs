/// 频道目录
/// 启动时固定加载，运行期间只读

/// 目录 ID
pub const CATALOG_ID: &str = "kick-catalog";
/// 目录显示名称
pub const CATALOG_NAME: &str = "Kick Streamerzy";

/// 单个频道的静态描述
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Streamer {
    pub id: String,
    /// Kick 频道名，用于查询上游
    pub username: String,
    pub name: String,
    pub poster: String,
    pub background: String,
    pub description: String,
}

impl Streamer {
    pub fn new(
        id: &str,
        username: &str,
        name: &str,
        poster: &str,
        background: &str,
        description: &str,
    ) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
            name: name.into(),
            poster: poster.into(),
            background: background.into(),
            description: description.into(),
        }
    }

    fn matches(&self, needle_lower: &str) -> bool {
        self.name.to_lowercase().contains(needle_lower)
            || self.description.to_lowercase().contains(needle_lower)
    }
}

#[derive(Debug, Clone)]
pub struct Catalog {
    streamers: Vec<Streamer>,
}

impl Catalog {
    pub fn new(streamers: Vec<Streamer>) -> Self {
        Self { streamers }
    }

    /// 内置频道列表
    pub fn builtin() -> Self {
        Self::new(vec![
            Streamer::new(
                "kick-randombrucetv",
                "randombrucetv",
                "RandomBruceTV",
                "https://static-cdn.jtvnw.net/jtv_user_pictures/86d30ba4-4ff3-487b-9aa4-b60e3e498e5c-profile_image-300x300.png",
                "https://kick.com/randombrucetv/cover-image.jpg",
                "Streamer z Kick.com",
            ),
            Streamer::new(
                "kick-overpow",
                "overpow",
                "Overpow",
                "https://static-cdn.jtvnw.net/jtv_user_pictures/fc3e038e-fac7-47ed-9e3d-4cb2e6a623a2-profile_image-300x300.png",
                "https://kick.com/overpow/cover-image.jpg",
                "Polski streamer – gameplaye, rozmowy i więcej",
            ),
        ])
    }

    pub fn lookup(&self, id: &str) -> Option<&Streamer> {
        self.streamers.iter().find(|s| s.id == id)
    }

    pub fn all(&self) -> &[Streamer] {
        &self.streamers
    }

    /// 按名称或简介模糊搜索（不区分大小写），保持目录原有顺序
    /// 空字符串匹配全部
    pub fn search(&self, term: &str) -> Vec<&Streamer> {
        let needle = term.to_lowercase();
        self.streamers.iter().filter(|s| s.matches(&needle)).collect()
    }
}
