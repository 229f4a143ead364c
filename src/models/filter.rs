// ============================================================================
// TransDesk - 筛选状态
// ============================================================================
//
// 文件: src/models/filter.rs
// 职责: 当前数据库、标签、语言、搜索词和显示页签的状态
// 边界:
//   - ✅ 筛选状态数据结构和默认值
//   - ✅ 切换数据库时的重置规则
//   - ✅ 判断哪些变化会让列表失效
//   - ❌ 不应包含网络请求逻辑
//
// ============================================================================

use std::fmt;

/// 标签筛选
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum TagFilter {
    /// 不按标签筛选
    #[default]
    All,
    Named(String),
}

impl TagFilter {
    /// `"all"` 和空串都表示不筛选
    pub fn parse(s: &str) -> Self {
        let s = s.trim();
        if s.is_empty() || s == "all" {
            TagFilter::All
        } else {
            TagFilter::Named(s.to_string())
        }
    }

    /// 作为查询参数的值；不筛选时不带该参数
    pub fn as_query(&self) -> Option<&str> {
        match self {
            TagFilter::All => None,
            TagFilter::Named(name) => Some(name),
        }
    }

    pub fn is(&self, name: &str) -> bool {
        matches!(self, TagFilter::Named(current) if current == name)
    }
}

impl fmt::Display for TagFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagFilter::All => write!(f, "all"),
            TagFilter::Named(name) => write!(f, "{}", name),
        }
    }
}

/// 显示页签：全部激活语言，或单个语言
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ActiveTab {
    #[default]
    All,
    Language(String),
}

/// 列表筛选状态
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    /// 当前数据库；未知时不拉取列表
    pub database: Option<String>,
    pub tag: TagFilter,
    /// 只返回该语言的译文
    pub language: Option<String>,
    pub search_query: String,
    pub page: u32,
    pub active_tab: ActiveTab,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            database: None,
            tag: TagFilter::All,
            language: None,
            search_query: String::new(),
            page: 1,
            active_tab: ActiveTab::All,
        }
    }
}

impl FilterState {
    /// 切换数据库：所有筛选回到默认值，不跨数据库保留
    pub fn reset_for_database(&mut self, database: impl Into<String>) {
        *self = Self {
            database: Some(database.into()),
            ..Self::default()
        };
    }

    /// 与另一个状态相比，是否需要重新拉取第一页
    pub fn invalidates_list(&self, previous: &FilterState) -> bool {
        self.database != previous.database
            || self.tag != previous.tag
            || self.language != previous.language
    }

    /// 当前是否处于搜索视图
    pub fn has_search(&self) -> bool {
        !self.search_query.trim().is_empty()
    }
}
