// ============================================================================
// TransDesk - HTTP 客户端
// ============================================================================
//
// 文件: src/core/http.rs
// 职责: 基于 reqwest 的后端实现
// 边界:
//   - ✅ URL 构造和查询参数编码
//   - ✅ `{success, ...}` 响应信封解析
//   - ✅ HTTP 状态到错误的映射
//   - ❌ 不应包含重试逻辑
//   - ❌ 不应包含列表状态管理
//
// ============================================================================

use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};
use std::time::Duration;

use crate::core::client::{ListQuery, SearchQuery, TranslationApi};
use crate::core::error::{ApiError, ApiResult};
use crate::models::catalog::{
    Ack, DatabaseList, ExportPayload, LanguageList, LogEntry, LogList, TagInfo, TagList,
};
use crate::models::translation::{
    EnglishId, PageResult, Pagination, TranslationDraft, TranslationRecord,
};

/// `GET /api/translations` 载荷
#[derive(Debug, Deserialize)]
struct TranslationPage {
    translations: Vec<TranslationRecord>,
    pagination: Pagination,
}

/// `GET /api/search` 载荷
#[derive(Debug, Deserialize)]
struct SearchResults {
    translations: Vec<TranslationRecord>,
}

/// 基于 HTTP 的翻译后端
#[derive(Debug, Clone)]
pub struct HttpApi {
    client: Client,
    base: Url,
}

impl HttpApi {
    /// 创建客户端；`timeout` 为 None 时请求不超时
    pub fn new(base_url: &str, timeout: Option<Duration>) -> ApiResult<Self> {
        let base = Url::parse(base_url).map_err(|e| ApiError::InvalidUrl(e.to_string()))?;
        if base.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl(base_url.to_string()));
        }

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self { client, base })
    }

    /// 拼接路径段，每段单独做百分号编码
    fn endpoint(&self, segments: &[&str]) -> ApiResult<Url> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(self.base.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> ApiResult<T> {
        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;
        tracing::debug!(status, bytes = body.len(), "response received");
        decode_envelope(status, &body)
    }

    async fn get<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        params: &[(&'static str, String)],
    ) -> ApiResult<T> {
        let url = self.endpoint(segments)?;
        tracing::debug!(%url, ?params, "GET");
        self.send(self.client.get(url).query(params)).await
    }

    async fn post<T: DeserializeOwned>(&self, segments: &[&str], body: &Value) -> ApiResult<T> {
        let url = self.endpoint(segments)?;
        tracing::debug!(%url, "POST");
        self.send(self.client.post(url).json(body)).await
    }
}

/// 解析 `{success: bool, ...payload}` 响应信封
///
/// - 非 2xx：有 `error`/`message` 时为 [`ApiError::Rejected`]，否则为 [`ApiError::Status`]
/// - 2xx 且 `success:false`：[`ApiError::Rejected`]
/// - 其他：按 `T` 解析整个对象
pub fn decode_envelope<T: DeserializeOwned>(status: u16, body: &[u8]) -> ApiResult<T> {
    let ok_status = (200..300).contains(&status);
    let value: Value = match serde_json::from_slice(body) {
        Ok(value) => value,
        Err(_) if !ok_status => return Err(ApiError::Status { status }),
        Err(e) => return Err(ApiError::Decode(e)),
    };

    let reported = reported_error(&value);
    if !ok_status {
        return Err(reported.map(ApiError::Rejected).unwrap_or(ApiError::Status { status }));
    }

    if value.get("success").and_then(Value::as_bool) == Some(false) {
        let message = reported.unwrap_or_else(|| format!("request rejected (HTTP {})", status));
        return Err(ApiError::Rejected(message));
    }

    Ok(serde_json::from_value(value)?)
}

fn reported_error(value: &Value) -> Option<String> {
    ["error", "message"]
        .iter()
        .find_map(|field| value.get(*field).and_then(Value::as_str))
        .filter(|message| !message.is_empty())
        .map(str::to_string)
}

impl TranslationApi for HttpApi {
    async fn languages(&self) -> ApiResult<LanguageList> {
        self.get(&["api", "languages"], &[]).await
    }

    async fn list_translations(&self, query: &ListQuery) -> ApiResult<PageResult> {
        let page: TranslationPage = self.get(&["api", "translations"], &query.params()).await?;
        Ok(PageResult {
            items: page.translations,
            page: page.pagination.page,
            total: page.pagination.total,
            has_more: page.pagination.has_more,
        })
    }

    async fn search_translations(&self, query: &SearchQuery) -> ApiResult<Vec<TranslationRecord>> {
        let results: SearchResults = self.get(&["api", "search"], &query.params()).await?;
        Ok(results.translations)
    }

    async fn create_translation(&self, draft: &TranslationDraft) -> ApiResult<Ack> {
        let url = self.endpoint(&["api", "translations"])?;
        self.send(self.client.post(url).json(draft)).await
    }

    async fn update_translation(&self, id: EnglishId, draft: &TranslationDraft) -> ApiResult<Ack> {
        let id = id.to_string();
        let url = self.endpoint(&["api", "translations", &id])?;
        self.send(self.client.put(url).json(draft)).await
    }

    async fn delete_translation(&self, id: EnglishId) -> ApiResult<Ack> {
        let id = id.to_string();
        let url = self.endpoint(&["api", "translations", &id])?;
        self.send(self.client.delete(url)).await
    }

    async fn tags(&self) -> ApiResult<Vec<String>> {
        let list: TagList = self.get(&["api", "tags"], &[]).await?;
        Ok(list.tags)
    }

    async fn create_tag(&self, name: &str) -> ApiResult<Ack> {
        self.post(&["api", "tags"], &json!({ "name": name })).await
    }

    async fn tag_info(&self, name: &str) -> ApiResult<TagInfo> {
        self.get(&["api", "tags", name, "info"], &[]).await
    }

    async fn delete_tag(&self, name: &str) -> ApiResult<Ack> {
        let url = self.endpoint(&["api", "tags", name])?;
        self.send(self.client.delete(url)).await
    }

    async fn logs(&self, limit: u32) -> ApiResult<Vec<LogEntry>> {
        let list: LogList = self
            .get(&["api", "logs"], &[("limit", limit.to_string())])
            .await?;
        Ok(list.logs)
    }

    async fn databases(&self) -> ApiResult<DatabaseList> {
        self.get(&["api", "databases"], &[]).await
    }

    async fn create_database(&self, name: &str) -> ApiResult<Ack> {
        self.post(&["api", "databases"], &json!({ "name": name })).await
    }

    async fn switch_database(&self, name: &str) -> ApiResult<Ack> {
        self.post(&["api", "databases", "switch"], &json!({ "name": name }))
            .await
    }

    async fn toggle_language(&self, language: &str, active: bool) -> ApiResult<Ack> {
        self.post(
            &["api", "languages", "toggle"],
            &json!({ "language": language, "active": active }),
        )
        .await
    }

    async fn remove_language(&self, language: &str) -> ApiResult<Ack> {
        self.post(&["api", "languages", "remove"], &json!({ "language": language }))
            .await
    }

    async fn export_language(&self, language: &str) -> ApiResult<ExportPayload> {
        self.get(&["api", "export", language], &[]).await
    }
}
