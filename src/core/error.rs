// ============================================================================
// TransDesk - 错误类型
// ============================================================================
//
// 文件: src/core/error.rs
// 职责: 客户端错误分类
// 边界:
//   - ✅ 网络、服务端拒绝、解码、本地校验错误定义
//   - ✅ 错误到提示文本键的映射
//   - ❌ 不应包含错误展示逻辑
//
// ============================================================================

use thiserror::Error;

use crate::ui::notify::Notice;
use crate::{t, tf};

/// 本地校验失败，请求不会发出
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("english text is required")]
    EmptyEnglish,

    #[error("invalid key `{0}`: must match ^[a-zA-Z_][a-zA-Z0-9_]*$")]
    InvalidKey(String),

    #[error("tag name is required")]
    EmptyTag,

    #[error("invalid tag `{0}`: letters, digits, underscore or CJK only")]
    InvalidTag(String),

    #[error("tag `{0}` already exists")]
    TagExists(String),

    #[error("tag `{0}` does not exist")]
    UnknownTag(String),

    #[error("database name is required")]
    EmptyDatabaseName,

    #[error("invalid database name `{0}`: must match ^[a-zA-Z_][a-zA-Z0-9_]*$")]
    InvalidDatabaseName(String),

    #[error("database `{0}` does not exist")]
    UnknownDatabase(String),

    #[error("unknown language `{0}`")]
    UnknownLanguage(String),

    #[error("the english source language cannot be changed")]
    SourceLanguageLocked,

    #[error("invalid translation id {0}")]
    InvalidId(i64),
}

impl ValidationError {
    /// 对应的提示文本键
    pub fn message_key(&self) -> &'static str {
        match self {
            ValidationError::EmptyEnglish => "validation.english_required",
            ValidationError::InvalidKey(_) => "validation.key_rule",
            ValidationError::EmptyTag => "validation.tag_required",
            ValidationError::InvalidTag(_) => "validation.tag_rule",
            ValidationError::TagExists(_) => "validation.tag_exists",
            ValidationError::UnknownTag(_) => "validation.unknown_tag",
            ValidationError::EmptyDatabaseName => "validation.database_required",
            ValidationError::InvalidDatabaseName(_) => "validation.database_rule",
            ValidationError::UnknownDatabase(_) => "validation.unknown_database",
            ValidationError::UnknownLanguage(_) => "validation.unknown_language",
            ValidationError::SourceLanguageLocked => "validation.source_locked",
            ValidationError::InvalidId(_) => "validation.invalid_id",
        }
    }

    /// 本地化的提示文本
    pub fn localized(&self) -> String {
        match self {
            ValidationError::InvalidKey(value)
            | ValidationError::InvalidTag(value)
            | ValidationError::TagExists(value)
            | ValidationError::UnknownTag(value)
            | ValidationError::InvalidDatabaseName(value)
            | ValidationError::UnknownDatabase(value)
            | ValidationError::UnknownLanguage(value) => tf!(self.message_key(), value),
            ValidationError::InvalidId(id) => tf!(self.message_key(), id),
            _ => t!(self.message_key()),
        }
    }
}

/// 客户端错误
#[derive(Debug, Error)]
pub enum ApiError {
    /// 网络/传输失败
    #[error("network request failed: {0}")]
    Transport(String),

    /// 非 2xx 状态且没有错误信息
    #[error("server responded with HTTP {status}")]
    Status { status: u16 },

    /// 服务端报告的失败，原样展示
    #[error("{0}")]
    Rejected(String),

    #[error("failed to decode server response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid server url: {0}")]
    InvalidUrl(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl ApiError {
    /// 服务端给出的错误文本
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Rejected(message) => Some(message),
            _ => None,
        }
    }

    /// 转成用户提示
    ///
    /// 服务端拒绝原样展示，本地校验为警告，其余使用 `fallback_key` 的通用文本。
    pub fn to_notice(&self, fallback_key: &str) -> Notice {
        match self {
            ApiError::Validation(error) => Notice::warning(error.localized()),
            ApiError::Rejected(message) => Notice::error(message.clone()),
            _ => Notice::error(t!(fallback_key)),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::Transport(e.to_string())
    }
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;
