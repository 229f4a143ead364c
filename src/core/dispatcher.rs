// ============================================================================
// TransDesk - 变更分发
// ============================================================================
//
// 文件: src/core/dispatcher.rs
// 职责: 执行变更命令并刷新受影响的列表
// 边界:
//   - ✅ 命令定义和提交前校验
//   - ✅ 命令到失效资源集合的映射
//   - ✅ 成功后并发刷新失效资源
//   - ✅ 会话初始化（数据库、语言、标签、日志、第一页）
//   - ❌ 不应包含乐观更新
//   - ❌ 不应包含重试逻辑
//   - ❌ 不应包含展示逻辑
//
// ============================================================================

use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::core::client::TranslationApi;
use crate::core::error::{ApiError, ApiResult, ValidationError};
use crate::core::export::{ExportReport, ExportSelection, Exporter};
use crate::core::sync::ListController;
use crate::core::validation::{
    validate_database_name, validate_draft, validate_mutable_language, validate_tag_name,
};
use crate::models::catalog::{database_stem, Ack, DatabaseList, LogEntry, TagInfo};
use crate::models::translation::{EnglishId, TranslationDraft};
use crate::ui::notify::{Notice, Notifier};
use crate::utils::constants::{DEFAULT_LOG_LIMIT, DEFAULT_PAGE_SIZE};
use crate::t;

/// 客户端缓存的资源
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Translations,
    Tags,
    Logs,
    Languages,
    Databases,
}

/// 变更命令
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    CreateTranslation(TranslationDraft),
    /// 整体替换 `translations` 和 `tag`
    UpdateTranslation {
        english_id: EnglishId,
        draft: TranslationDraft,
    },
    DeleteTranslation(EnglishId),
    CreateTag(String),
    DeleteTag(String),
    ToggleLanguage {
        language: String,
        active: bool,
    },
    RemoveLanguage(String),
    CreateDatabase(String),
    SwitchDatabase(String),
}

impl Command {
    /// 成功后需要重新拉取的资源
    pub fn invalidates(&self) -> &'static [Resource] {
        use Resource::*;
        match self {
            Command::CreateTranslation(_) | Command::UpdateTranslation { .. } => {
                &[Translations, Tags, Logs]
            }
            Command::DeleteTranslation(_) => &[Translations, Logs],
            Command::CreateTag(_) => &[Tags, Logs],
            Command::DeleteTag(_) => &[Tags, Translations, Logs],
            Command::ToggleLanguage { .. } | Command::RemoveLanguage(_) => &[Languages],
            Command::CreateDatabase(_) => &[Databases],
            Command::SwitchDatabase(_) => &[Translations, Tags, Logs, Languages, Databases],
        }
    }

    /// 提交前的本地校验
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self {
            Command::CreateTranslation(draft) => validate_draft(draft),
            Command::UpdateTranslation { english_id, draft } => {
                if *english_id <= 0 {
                    return Err(ValidationError::InvalidId(*english_id));
                }
                validate_draft(draft)
            }
            Command::DeleteTranslation(english_id) => {
                if *english_id <= 0 {
                    Err(ValidationError::InvalidId(*english_id))
                } else {
                    Ok(())
                }
            }
            Command::CreateTag(name) => validate_tag_name(name),
            // 已有标签可能来自其他客户端，删除时只要求非空
            Command::DeleteTag(name) => {
                if name.trim().is_empty() {
                    Err(ValidationError::EmptyTag)
                } else {
                    Ok(())
                }
            }
            Command::ToggleLanguage { language, .. } | Command::RemoveLanguage(language) => {
                validate_mutable_language(language)
            }
            Command::CreateDatabase(name) => validate_database_name(name),
            Command::SwitchDatabase(name) => {
                if name.trim().is_empty() {
                    Err(ValidationError::EmptyDatabaseName)
                } else {
                    Ok(())
                }
            }
        }
    }

    /// 命令名，用于日志
    pub fn name(&self) -> &'static str {
        match self {
            Command::CreateTranslation(_) => "create_translation",
            Command::UpdateTranslation { .. } => "update_translation",
            Command::DeleteTranslation(_) => "delete_translation",
            Command::CreateTag(_) => "create_tag",
            Command::DeleteTag(_) => "delete_tag",
            Command::ToggleLanguage { .. } => "toggle_language",
            Command::RemoveLanguage(_) => "remove_language",
            Command::CreateDatabase(_) => "create_database",
            Command::SwitchDatabase(_) => "switch_database",
        }
    }

    fn success_key(&self) -> &'static str {
        match self {
            Command::CreateTranslation(_) => "notice.add_success",
            Command::UpdateTranslation { .. } => "notice.update_success",
            Command::DeleteTranslation(_) => "notice.delete_success",
            Command::CreateTag(_) => "notice.tag_created",
            Command::DeleteTag(_) => "notice.tag_deleted",
            Command::ToggleLanguage { .. } => "notice.language_toggled",
            Command::RemoveLanguage(_) => "notice.language_removed",
            Command::CreateDatabase(_) => "notice.database_created",
            Command::SwitchDatabase(_) => "notice.database_switched",
        }
    }

    fn failure_key(&self) -> &'static str {
        match self {
            Command::DeleteTranslation(_) => "notice.delete_failed",
            Command::ToggleLanguage { .. } => "notice.toggle_language_failed",
            Command::RemoveLanguage(_) => "notice.remove_language_failed",
            Command::CreateDatabase(_) => "notice.create_database_failed",
            Command::SwitchDatabase(_) => "notice.switch_database_failed",
            _ => "notice.operation_failed",
        }
    }

    /// 成功提示优先使用服务端文本
    fn prefers_server_message(&self) -> bool {
        matches!(
            self,
            Command::ToggleLanguage { .. } | Command::CreateDatabase(_) | Command::SwitchDatabase(_)
        )
    }
}

/// 会话参数
#[derive(Debug, Clone, Copy)]
pub struct SessionOptions {
    pub page_size: u32,
    pub log_limit: u32,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            log_limit: DEFAULT_LOG_LIMIT,
        }
    }
}

#[derive(Debug, Default)]
struct CatalogState {
    languages: Vec<String>,
    tags: Vec<String>,
    logs: Vec<LogEntry>,
    databases: Vec<String>,
    current_database: Option<String>,
}

/// 一个客户端会话：列表控制器加上语言、标签、日志和数据库缓存
pub struct Session<A> {
    api: Arc<A>,
    notifier: Arc<dyn Notifier>,
    list: ListController<A>,
    catalog: Mutex<CatalogState>,
    log_limit: u32,
}

impl<A: TranslationApi + 'static> Session<A> {
    pub fn new(api: Arc<A>, notifier: Arc<dyn Notifier>, options: SessionOptions) -> Self {
        let list = ListController::new(Arc::clone(&api), Arc::clone(&notifier), options.page_size);
        Self {
            api,
            notifier,
            list,
            catalog: Mutex::new(CatalogState::default()),
            log_limit: options.log_limit,
        }
    }

    pub fn list(&self) -> &ListController<A> {
        &self.list
    }

    pub fn api(&self) -> &Arc<A> {
        &self.api
    }

    /// 并发拉取数据库、语言、标签和日志，再拉取一次列表
    ///
    /// 当前数据库取服务端报告值，否则取第一个。已预置的筛选保留；
    /// 预置了搜索词时执行搜索而不是分页拉取。
    pub async fn initialize(&self) -> ApiResult<()> {
        let (databases, _, _, _) = tokio::join!(
            self.refresh_databases(),
            self.refresh_languages(),
            self.refresh_tags(),
            self.refresh_logs(),
        );
        let databases = databases?;

        let mut filters = self.list.filters().await;
        if filters.database.is_none() {
            filters.database = databases.effective_current().map(str::to_string);
        }
        let search = filters.has_search().then(|| filters.search_query.clone());
        self.list.preset_filters(filters).await;

        match search {
            Some(query) => self.list.search(&query).await,
            None => self.list.reload().await,
        }
    }

    pub async fn refresh_languages(&self) -> ApiResult<Vec<String>> {
        let languages = self
            .api
            .languages()
            .await
            .map_err(|e| self.report(e, "notice.get_languages_failed"))?
            .languages;
        self.catalog.lock().await.languages = languages.clone();
        Ok(languages)
    }

    pub async fn refresh_tags(&self) -> ApiResult<Vec<String>> {
        let tags = self
            .api
            .tags()
            .await
            .map_err(|e| self.report(e, "notice.get_tags_failed"))?;
        self.catalog.lock().await.tags = tags.clone();
        Ok(tags)
    }

    pub async fn refresh_logs(&self) -> ApiResult<Vec<LogEntry>> {
        let logs = self
            .api
            .logs(self.log_limit)
            .await
            .map_err(|e| self.report(e, "notice.get_logs_failed"))?;
        self.catalog.lock().await.logs = logs.clone();
        Ok(logs)
    }

    pub async fn refresh_databases(&self) -> ApiResult<DatabaseList> {
        let list = self
            .api
            .databases()
            .await
            .map_err(|e| self.report(e, "notice.get_databases_failed"))?;

        let mut catalog = self.catalog.lock().await;
        catalog.databases = list.databases.clone();
        catalog.current_database = list.effective_current().map(str::to_string);
        Ok(list)
    }

    /// 执行一条变更命令
    ///
    /// 校验失败时不发请求；成功后刷新 [`Command::invalidates`] 中的资源。
    /// 刷新失败只提示，不影响返回值。
    pub async fn execute(&self, command: Command) -> ApiResult<Ack> {
        let failure_key = command.failure_key();
        let command = self
            .prepare(command)
            .await
            .map_err(|e| self.reject_locally(e, failure_key))?;

        tracing::debug!(command = command.name(), "dispatching");
        let ack = match self.send(&command).await {
            Ok(ack) => ack,
            Err(e) => {
                tracing::warn!(command = command.name(), error = %e, "command failed");
                self.notifier.notify(e.to_notice(command.failure_key()));
                return Err(e);
            }
        };

        let message = ack
            .message
            .clone()
            .filter(|message| command.prefers_server_message() && !message.is_empty())
            .unwrap_or_else(|| t!(command.success_key()));
        self.notifier.notify(Notice::success(message));

        let mut pending = command.invalidates().to_vec();
        match &command {
            Command::DeleteTag(name) => {
                self.list.clear_tag_filter_if(name).await;
            }
            Command::SwitchDatabase(name) => {
                self.catalog.lock().await.current_database = Some(name.clone());
                // 切换本身完成唯一一次列表拉取
                if let Err(e) = self.list.switch_database(name).await {
                    tracing::debug!(error = %e, "list reload after switch failed");
                }
                pending.retain(|resource| *resource != Resource::Translations);
            }
            _ => {}
        }

        self.refetch(&pending).await;
        Ok(ack)
    }

    /// 删除标签前查询受影响的条目数
    pub async fn preview_tag_deletion(&self, name: &str) -> ApiResult<TagInfo> {
        let checked = match Command::DeleteTag(name.to_string()).validate() {
            Ok(()) => self.ensure_known_tag(name).await,
            Err(e) => Err(e.into()),
        };
        checked.map_err(|e| self.reject_locally(e, "notice.operation_failed"))?;
        self.api
            .tag_info(name)
            .await
            .map_err(|e| self.report(e, "notice.operation_failed"))
    }

    /// 使用当前数据库和激活语言的导出器
    pub fn exporter(&self, output_dir: impl Into<PathBuf>) -> Exporter<A> {
        Exporter::new(Arc::clone(&self.api), Arc::clone(&self.notifier), output_dir)
    }

    pub async fn export(&self, exporter: &Exporter<A>, selection: &ExportSelection) -> ExportReport {
        let (languages, database) = {
            let catalog = self.catalog.lock().await;
            (catalog.languages.clone(), catalog.current_database.clone())
        };
        let database = match database {
            Some(database) => database,
            None => self.list.filters().await.database.unwrap_or_default(),
        };
        exporter.export(selection, &languages, &database).await
    }

    pub async fn languages(&self) -> Vec<String> {
        self.catalog.lock().await.languages.clone()
    }

    pub async fn tags(&self) -> Vec<String> {
        self.catalog.lock().await.tags.clone()
    }

    pub async fn logs(&self) -> Vec<LogEntry> {
        self.catalog.lock().await.logs.clone()
    }

    pub async fn databases(&self) -> Vec<String> {
        self.catalog.lock().await.databases.clone()
    }

    pub async fn current_database(&self) -> Option<String> {
        self.catalog.lock().await.current_database.clone()
    }

    /// 提交前的本地检查，返回实际发送的命令
    ///
    /// 删除标签和切换数据库要求名称出现在服务端列表中，缓存里没有时先刷新一次。
    /// 切换数据库也接受去掉 `.db` 后缀的名称，发送的是列表中的文件名。
    async fn prepare(&self, command: Command) -> ApiResult<Command> {
        command.validate()?;
        match command {
            Command::CreateTag(name) => {
                if self.catalog.lock().await.tags.iter().any(|tag| *tag == name) {
                    return Err(ValidationError::TagExists(name).into());
                }
                Ok(Command::CreateTag(name))
            }
            Command::DeleteTag(name) => {
                self.ensure_known_tag(&name).await?;
                Ok(Command::DeleteTag(name))
            }
            Command::SwitchDatabase(name) => {
                let listed = self.resolve_database(&name).await?;
                Ok(Command::SwitchDatabase(listed))
            }
            command => Ok(command),
        }
    }

    async fn ensure_known_tag(&self, name: &str) -> ApiResult<()> {
        if self.catalog.lock().await.tags.iter().any(|tag| tag == name) {
            return Ok(());
        }
        let tags = self.refresh_tags().await?;
        if tags.iter().any(|tag| tag == name) {
            Ok(())
        } else {
            Err(ValidationError::UnknownTag(name.to_string()).into())
        }
    }

    async fn resolve_database(&self, name: &str) -> ApiResult<String> {
        let cached = find_database(&self.catalog.lock().await.databases, name);
        if let Some(listed) = cached {
            return Ok(listed);
        }
        let list = self.refresh_databases().await?;
        find_database(&list.databases, name)
            .ok_or_else(|| ValidationError::UnknownDatabase(name.to_string()).into())
    }

    /// 本地拒绝时提示；刷新失败已在刷新时提示过
    fn reject_locally(&self, error: ApiError, failure_key: &str) -> ApiError {
        if let ApiError::Validation(_) = &error {
            tracing::debug!(error = %error, "command rejected locally");
            self.notifier.notify(error.to_notice(failure_key));
        }
        error
    }

    async fn send(&self, command: &Command) -> ApiResult<Ack> {
        match command {
            Command::CreateTranslation(draft) => self.api.create_translation(draft).await,
            Command::UpdateTranslation { english_id, draft } => {
                self.api.update_translation(*english_id, draft).await
            }
            Command::DeleteTranslation(english_id) => self.api.delete_translation(*english_id).await,
            Command::CreateTag(name) => self.api.create_tag(name).await,
            Command::DeleteTag(name) => self.api.delete_tag(name).await,
            Command::ToggleLanguage { language, active } => {
                self.api.toggle_language(language, *active).await
            }
            Command::RemoveLanguage(language) => self.api.remove_language(language).await,
            Command::CreateDatabase(name) => self.api.create_database(name).await,
            Command::SwitchDatabase(name) => self.api.switch_database(name).await,
        }
    }

    /// 并发刷新指定资源
    async fn refetch(&self, resources: &[Resource]) {
        let wants = |resource: Resource| resources.contains(&resource);
        tracing::debug!(?resources, "refetching");

        let translations = async {
            if wants(Resource::Translations) {
                let filters = self.list.filters().await;
                let result = if filters.has_search() {
                    self.list.search(&filters.search_query).await
                } else {
                    self.list.reload().await
                };
                if let Err(e) = result {
                    tracing::debug!(error = %e, "translations refetch failed");
                }
            }
        };
        let tags = async {
            if wants(Resource::Tags) {
                let _ = self.refresh_tags().await;
            }
        };
        let logs = async {
            if wants(Resource::Logs) {
                let _ = self.refresh_logs().await;
            }
        };
        let languages = async {
            if wants(Resource::Languages) {
                let _ = self.refresh_languages().await;
            }
        };
        let databases = async {
            if wants(Resource::Databases) {
                let _ = self.refresh_databases().await;
            }
        };

        tokio::join!(translations, tags, logs, languages, databases);
    }

    fn report(&self, error: ApiError, fallback_key: &str) -> ApiError {
        tracing::warn!(%error, fallback_key, "fetch failed");
        self.notifier.notify(error.to_notice(fallback_key));
        error
    }
}

/// 列表中与 `name` 对应的数据库文件名：完全相同，或去掉 `.db` 后相同
fn find_database(databases: &[String], name: &str) -> Option<String> {
    let name = name.trim();
    databases
        .iter()
        .find(|database| database.as_str() == name)
        .or_else(|| databases.iter().find(|database| database_stem(database) == name))
        .cloned()
}
