// ============================================================================
// TransDesk - 本地校验
// ============================================================================
//
// 文件: src/core/validation.rs
// 职责: 提交前的快速校验
// 边界:
//   - ✅ 英文原文、键、标签、数据库名、语言代码校验
//   - ❌ 不应发出网络请求
//   - ❌ 服务端仍可独立拒绝
//
// ============================================================================

use regex::Regex;
use std::sync::OnceLock;

use crate::core::error::ValidationError;
use crate::models::catalog::{is_known_language, SOURCE_LANGUAGE};
use crate::models::translation::TranslationDraft;

fn identifier_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[a-zA-Z_][a-zA-Z0-9_]*$").unwrap_or_else(|e| unreachable!("{e}"))
    })
}

fn tag_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9_\x{4e00}-\x{9fa5}]+$").unwrap_or_else(|e| unreachable!("{e}"))
    })
}

/// 键可以为空；非空时必须是标识符
pub fn validate_key(key: &str) -> Result<(), ValidationError> {
    if key.is_empty() || identifier_pattern().is_match(key) {
        Ok(())
    } else {
        Err(ValidationError::InvalidKey(key.to_string()))
    }
}

/// 标签名：字母、数字、下划线或常用汉字
pub fn validate_tag_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::EmptyTag);
    }
    if tag_pattern().is_match(name) {
        Ok(())
    } else {
        Err(ValidationError::InvalidTag(name.to_string()))
    }
}

pub fn validate_database_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::EmptyDatabaseName);
    }
    if identifier_pattern().is_match(name) {
        Ok(())
    } else {
        Err(ValidationError::InvalidDatabaseName(name.to_string()))
    }
}

pub fn validate_language(code: &str) -> Result<(), ValidationError> {
    if is_known_language(code) {
        Ok(())
    } else {
        Err(ValidationError::UnknownLanguage(code.to_string()))
    }
}

/// 可切换/移除的语言：目录内且不是英文
pub fn validate_mutable_language(code: &str) -> Result<(), ValidationError> {
    validate_language(code)?;
    if code == SOURCE_LANGUAGE {
        return Err(ValidationError::SourceLanguageLocked);
    }
    Ok(())
}

/// 创建/更新条目前的校验；标签可以为空
pub fn validate_draft(draft: &TranslationDraft) -> Result<(), ValidationError> {
    if draft.english.trim().is_empty() {
        return Err(ValidationError::EmptyEnglish);
    }
    validate_key(&draft.key)?;
    if !draft.tag.is_empty() {
        validate_tag_name(&draft.tag)?;
    }
    for language in draft.translations.keys() {
        validate_language(language)?;
    }
    Ok(())
}
