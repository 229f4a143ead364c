// ============================================================================
// TransDesk - 目录数据模型
// ============================================================================
//
// 文件: src/models/catalog.rs
// 职责: 语言目录、标签、数据库、操作日志和导出结果的数据结构
// 边界:
//   - ✅ 固定语言目录和双语名称
//   - ✅ 服务端响应载荷定义
//   - ❌ 不应包含网络请求逻辑
//   - ❌ 不应包含校验逻辑
//
// ============================================================================

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::locale::Locale;
use crate::utils::constants::DATABASE_SUFFIX;

/// 源语言，总是激活且不可移除
pub const SOURCE_LANGUAGE: &str = "english";

/// 固定语言目录：(代码, 英文名, 中文名)
const LANGUAGE_CATALOG: &[(&str, &str, &str)] = &[
    ("english", "English", "英文"),
    ("chinese", "Chinese", "中文"),
    ("thai", "Thai", "泰语"),
    ("czech", "Czech", "捷克语"),
    ("slovak", "Slovak", "斯洛伐克语"),
    ("italian", "Italian", "意大利语"),
    ("polish", "Polish", "波兰语"),
    ("latin", "Latin", "拉丁语"),
    ("dutch", "Dutch", "荷兰语"),
    ("portuguese", "Portuguese", "葡萄牙语"),
    ("greek", "Greek", "希腊语"),
    ("balkan", "Balkan", "巴尔干语"),
    ("bulgarian", "Bulgarian", "保加利亚语"),
    ("turkish", "Turkish", "土耳其语"),
    ("french", "French", "法语"),
    ("german", "German", "德语"),
    ("ukrainian", "Ukrainian", "乌克兰语"),
    ("russian", "Russian", "俄语"),
    ("south_african", "South African", "南非语"),
    ("arabic", "Arabic", "阿拉伯语"),
    ("norwegian", "Norwegian", "挪威语"),
    ("finnish", "Finnish", "芬兰语"),
    ("macedonian", "Macedonian", "马其顿语"),
    ("estonian", "Estonian", "爱沙尼亚语"),
    ("slovenian", "Slovenian", "斯洛文尼亚语"),
    ("indonesian", "Indonesian", "印尼语"),
    ("swedish", "Swedish", "瑞典语"),
    ("japanese", "Japanese", "日语"),
    ("korean", "Korean", "韩语"),
];

/// 目录中的全部语言代码，按目录顺序
pub fn language_codes() -> impl Iterator<Item = &'static str> {
    LANGUAGE_CATALOG.iter().map(|(code, _, _)| *code)
}

/// 是否为目录中的语言
pub fn is_known_language(code: &str) -> bool {
    LANGUAGE_CATALOG.iter().any(|(known, _, _)| *known == code)
}

/// 语言的显示名称；目录外的代码原样返回
pub fn language_display_name(code: &str, locale: Locale) -> String {
    LANGUAGE_CATALOG
        .iter()
        .find(|(known, _, _)| *known == code)
        .map(|(_, en, zh)| match locale {
            Locale::En => (*en).to_string(),
            Locale::Zh => (*zh).to_string(),
        })
        .unwrap_or_else(|| code.to_string())
}

/// 去掉数据库文件名的 `.db` 后缀
pub fn database_stem(name: &str) -> &str {
    name.strip_suffix(DATABASE_SUFFIX).unwrap_or(name)
}

/// `GET /api/languages` 载荷
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LanguageList {
    /// 当前激活的语言
    pub languages: Vec<String>,
    /// 服务端的名称映射，客户端以本地目录为准
    #[serde(default)]
    pub language_names: serde_json::Value,
}

/// `GET /api/tags` 载荷
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagList {
    pub tags: Vec<String>,
}

/// `GET /api/tags/:name/info` 载荷
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagInfo {
    /// 使用该标签的条目数
    pub translation_count: u64,
}

/// 操作日志，只读且只追加
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub operation_type: String,
    #[serde(default)]
    pub entry_count: i64,
    #[serde(default)]
    pub operation_date: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// `GET /api/logs` 载荷
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogList {
    pub logs: Vec<LogEntry>,
}

/// `GET /api/databases` 载荷
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseList {
    pub databases: Vec<String>,
    #[serde(default)]
    pub current_database: Option<String>,
}

impl DatabaseList {
    /// 当前数据库：服务端报告的优先，否则取列表第一个
    pub fn effective_current(&self) -> Option<&str> {
        self.current_database
            .as_deref()
            .filter(|name| !name.is_empty())
            .or_else(|| self.databases.first().map(String::as_str))
    }
}

/// 导出统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportStats {
    /// 实际导出的条目数
    pub exported: u64,
    /// 条目总数
    pub total: u64,
    /// 带键的条目数
    pub with_key: u64,
}

impl std::ops::AddAssign for ExportStats {
    fn add_assign(&mut self, other: Self) {
        self.exported += other.exported;
        self.total += other.total;
        self.with_key += other.with_key;
    }
}

/// `GET /api/export/:language` 载荷
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportPayload {
    /// 键 -> 译文
    pub data: BTreeMap<String, String>,
    pub stats: ExportStats,
}

/// 变更类请求的确认，`message` 是服务端提示
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_is_closed() {
        assert_eq!(language_codes().count(), 29);
        assert!(is_known_language("south_african"));
        assert!(!is_known_language("klingon"));
    }

    #[test]
    fn test_display_name_per_locale() {
        assert_eq!(language_display_name("chinese", Locale::En), "Chinese");
        assert_eq!(language_display_name("chinese", Locale::Zh), "中文");
        assert_eq!(language_display_name("klingon", Locale::Zh), "klingon");
    }

    #[test]
    fn test_database_stem() {
        assert_eq!(database_stem("default.db"), "default");
        assert_eq!(database_stem("project"), "project");
    }

    #[test]
    fn test_effective_current_database() {
        let list = DatabaseList {
            databases: vec!["a.db".into(), "b.db".into()],
            current_database: Some("b.db".into()),
        };
        assert_eq!(list.effective_current(), Some("b.db"));

        let list = DatabaseList {
            databases: vec!["a.db".into()],
            current_database: None,
        };
        assert_eq!(list.effective_current(), Some("a.db"));

        assert_eq!(DatabaseList::default().effective_current(), None);
    }

    #[test]
    fn test_export_stats_accumulate() {
        let mut total = ExportStats::default();
        total += ExportStats { exported: 2, total: 5, with_key: 2 };
        total += ExportStats { exported: 1, total: 5, with_key: 1 };
        assert_eq!(total, ExportStats { exported: 3, total: 10, with_key: 3 });
    }
}
