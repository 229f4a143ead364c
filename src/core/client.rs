// ============================================================================
// TransDesk - 后端接口抽象
// ============================================================================
//
// 文件: src/core/client.rs
// 职责: 翻译后端 REST 契约的类型化抽象
// 边界:
//   - ✅ 后端操作的 trait 定义
//   - ✅ 查询参数结构定义
//   - ❌ 不应包含 HTTP 细节
//   - ❌ 不应包含状态管理
//
// ============================================================================

use std::future::Future;

use crate::core::error::ApiResult;
use crate::models::catalog::{
    Ack, DatabaseList, ExportPayload, LanguageList, LogEntry, TagInfo,
};
use crate::models::translation::{EnglishId, PageResult, TranslationDraft, TranslationRecord};

/// 分页列表查询
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    /// None 表示全部标签
    pub tag: Option<String>,
    /// None 表示返回全部激活语言
    pub language: Option<String>,
    pub page: u32,
    pub limit: u32,
}

impl ListQuery {
    /// 查询参数，未设置的筛选不出现
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::with_capacity(4);
        if let Some(tag) = &self.tag {
            params.push(("tag", tag.clone()));
        }
        if let Some(language) = &self.language {
            params.push(("language", language.clone()));
        }
        params.push(("page", self.page.to_string()));
        params.push(("limit", self.limit.to_string()));
        params
    }
}

/// 全文搜索查询，不分页
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub q: String,
    pub tag: Option<String>,
    pub language: Option<String>,
}

impl SearchQuery {
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("q", self.q.clone())];
        if let Some(tag) = &self.tag {
            params.push(("tag", tag.clone()));
        }
        if let Some(language) = &self.language {
            params.push(("language", language.clone()));
        }
        params
    }
}

/// 翻译后端
///
/// 每个方法对应一个 REST 端点，成功时返回载荷，`success:false`
/// 或 HTTP 错误映射为 [`ApiError`](crate::core::error::ApiError)。
pub trait TranslationApi: Send + Sync {
    /// `GET /api/languages`
    fn languages(&self) -> impl Future<Output = ApiResult<LanguageList>> + Send;

    /// `GET /api/translations`
    fn list_translations(
        &self,
        query: &ListQuery,
    ) -> impl Future<Output = ApiResult<PageResult>> + Send;

    /// `GET /api/search`
    fn search_translations(
        &self,
        query: &SearchQuery,
    ) -> impl Future<Output = ApiResult<Vec<TranslationRecord>>> + Send;

    /// `POST /api/translations`
    fn create_translation(
        &self,
        draft: &TranslationDraft,
    ) -> impl Future<Output = ApiResult<Ack>> + Send;

    /// `PUT /api/translations/:id`
    fn update_translation(
        &self,
        id: EnglishId,
        draft: &TranslationDraft,
    ) -> impl Future<Output = ApiResult<Ack>> + Send;

    /// `DELETE /api/translations/:id`
    fn delete_translation(&self, id: EnglishId) -> impl Future<Output = ApiResult<Ack>> + Send;

    /// `GET /api/tags`
    fn tags(&self) -> impl Future<Output = ApiResult<Vec<String>>> + Send;

    /// `POST /api/tags`
    fn create_tag(&self, name: &str) -> impl Future<Output = ApiResult<Ack>> + Send;

    /// `GET /api/tags/:name/info`
    fn tag_info(&self, name: &str) -> impl Future<Output = ApiResult<TagInfo>> + Send;

    /// `DELETE /api/tags/:name`
    fn delete_tag(&self, name: &str) -> impl Future<Output = ApiResult<Ack>> + Send;

    /// `GET /api/logs`
    fn logs(&self, limit: u32) -> impl Future<Output = ApiResult<Vec<LogEntry>>> + Send;

    /// `GET /api/databases`
    fn databases(&self) -> impl Future<Output = ApiResult<DatabaseList>> + Send;

    /// `POST /api/databases`
    fn create_database(&self, name: &str) -> impl Future<Output = ApiResult<Ack>> + Send;

    /// `POST /api/databases/switch`
    fn switch_database(&self, name: &str) -> impl Future<Output = ApiResult<Ack>> + Send;

    /// `POST /api/languages/toggle`
    fn toggle_language(
        &self,
        language: &str,
        active: bool,
    ) -> impl Future<Output = ApiResult<Ack>> + Send;

    /// `POST /api/languages/remove`
    fn remove_language(&self, language: &str) -> impl Future<Output = ApiResult<Ack>> + Send;

    /// `GET /api/export/:language`
    fn export_language(
        &self,
        language: &str,
    ) -> impl Future<Output = ApiResult<ExportPayload>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_params_omit_unset_filters() {
        let query = ListQuery {
            tag: None,
            language: None,
            page: 2,
            limit: 10,
        };
        assert_eq!(
            query.params(),
            vec![("page", "2".to_string()), ("limit", "10".to_string())]
        );
    }

    #[test]
    fn test_search_params_include_filters() {
        let query = SearchQuery {
            q: "hello".into(),
            tag: Some("greeting".into()),
            language: Some("chinese".into()),
        };
        let params = query.params();
        assert_eq!(params[0], ("q", "hello".to_string()));
        assert!(params.contains(&("tag", "greeting".to_string())));
        assert!(params.contains(&("language", "chinese".to_string())));
    }
}
