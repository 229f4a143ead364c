// ============================================================================
// TransDesk - 翻译条目数据模型
// ============================================================================
//
// 文件: src/models/translation.rs
// 职责: 翻译条目、提交草稿和分页结果的数据结构
// 边界:
//   - ✅ 翻译条目数据结构定义
//   - ✅ 创建/更新请求体定义
//   - ✅ 分页信息定义
//   - ❌ 不应包含网络请求逻辑
//   - ❌ 不应包含列表同步逻辑
//
// ============================================================================

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 服务端分配的条目 ID
pub type EnglishId = i64;

/// 翻译条目
///
/// 由后端拥有，客户端只持有一份临时副本。`translations` 是稀疏的：
/// 缺失或为 `null` 的语言表示尚未翻译。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationRecord {
    /// 稳定的条目 ID
    pub english_id: EnglishId,
    /// 英文原文
    pub english: String,
    /// 可选的查找键
    #[serde(default)]
    pub key: Option<String>,
    /// 单个标签
    #[serde(default)]
    pub tag: Option<String>,
    /// 标签列表，界面只展示第一个
    #[serde(default)]
    pub tags: Vec<String>,
    /// 语言代码 -> 译文
    #[serde(default)]
    pub translations: BTreeMap<String, Option<String>>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl TranslationRecord {
    /// 主标签：优先取 `tags` 的第一个，其次是 `tag`
    pub fn primary_tag(&self) -> Option<&str> {
        self.tags
            .first()
            .map(String::as_str)
            .or(self.tag.as_deref())
            .filter(|tag| !tag.is_empty())
    }

    /// 非空的查找键
    pub fn lookup_key(&self) -> Option<&str> {
        self.key.as_deref().filter(|key| !key.trim().is_empty())
    }

    /// 指定语言的译文，空白视为未翻译
    pub fn translation(&self, language: &str) -> Option<&str> {
        self.translations
            .get(language)
            .and_then(|text| text.as_deref())
            .filter(|text| !text.trim().is_empty())
    }

    /// 以当前内容生成编辑草稿
    pub fn to_draft(&self) -> TranslationDraft {
        let translations = self
            .translations
            .iter()
            .filter(|(language, _)| language.as_str() != "english")
            .filter_map(|(language, text)| {
                text.as_ref()
                    .map(|text| (language.clone(), text.clone()))
            })
            .collect();

        TranslationDraft {
            english: self.english.clone(),
            key: self.key.clone().unwrap_or_default(),
            tag: self.primary_tag().unwrap_or_default().to_string(),
            translations,
        }
    }
}

/// 创建/更新翻译条目的请求体
///
/// 更新是整体替换：`tag` 和 `translations` 以草稿为准。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationDraft {
    pub english: String,
    #[serde(default)]
    pub key: String,
    /// 没有标签时发送空字符串
    #[serde(default)]
    pub tag: String,
    #[serde(default)]
    pub translations: BTreeMap<String, String>,
}

impl TranslationDraft {
    pub fn new(english: impl Into<String>) -> Self {
        Self {
            english: english.into(),
            ..Self::default()
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_translation(mut self, language: impl Into<String>, text: impl Into<String>) -> Self {
        self.translations.insert(language.into(), text.into());
        self
    }
}

/// 服务端返回的分页信息
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u32,
    #[serde(default)]
    pub limit: u32,
    pub total: u64,
    pub has_more: bool,
}

/// 一页翻译条目
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageResult {
    pub items: Vec<TranslationRecord>,
    pub page: u32,
    pub total: u64,
    pub has_more: bool,
}
