//! In-memory translation server used by the integration tests.

#![allow(dead_code)]

use std::collections::{BTreeMap, HashMap, HashSet, VecDeque};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use transdesk::core::client::{ListQuery, SearchQuery, TranslationApi};
use transdesk::core::dispatcher::{Session, SessionOptions};
use transdesk::core::error::{ApiError, ApiResult};
use transdesk::models::catalog::{
    Ack, DatabaseList, ExportPayload, ExportStats, LanguageList, LogEntry, TagInfo,
};
use transdesk::models::translation::{EnglishId, PageResult, TranslationDraft, TranslationRecord};
use transdesk::ui::notify::MemoryNotifier;

#[derive(Debug)]
struct FakeState {
    records: HashMap<String, Vec<TranslationRecord>>,
    tags: HashMap<String, Vec<String>>,
    logs: HashMap<String, Vec<LogEntry>>,
    languages: Vec<String>,
    databases: Vec<String>,
    current: String,
    next_id: EnglishId,
}

impl FakeState {
    fn records(&self) -> &[TranslationRecord] {
        self.records.get(&self.current).map(Vec::as_slice).unwrap_or(&[])
    }

    fn records_mut(&mut self) -> &mut Vec<TranslationRecord> {
        self.records.entry(self.current.clone()).or_default()
    }

    fn tags_mut(&mut self) -> &mut Vec<String> {
        self.tags.entry(self.current.clone()).or_default()
    }

    fn log(&mut self, operation_type: &str, description: String) {
        let entry = LogEntry {
            operation_type: operation_type.to_string(),
            entry_count: 1,
            operation_date: Some("2026-10-16 12:00:00".to_string()),
            description: Some(description),
        };
        self.logs.entry(self.current.clone()).or_default().insert(0, entry);
    }

    /// 按 id 倒序，带标签和语言筛选
    fn filtered(&self, tag: Option<&str>, language: Option<&str>) -> Vec<TranslationRecord> {
        let mut records: Vec<TranslationRecord> = self
            .records()
            .iter()
            .filter(|record| tag.map_or(true, |tag| record.tags.iter().any(|t| t == tag)))
            .cloned()
            .collect();
        records.sort_by(|a, b| b.english_id.cmp(&a.english_id));

        if let Some(language) = language {
            for record in &mut records {
                record
                    .translations
                    .retain(|code, _| code == "english" || code == language);
            }
        }
        records
    }
}

/// 模拟翻译服务
pub struct FakeApi {
    state: Mutex<FakeState>,
    calls: Mutex<HashMap<&'static str, usize>>,
    list_delays: Mutex<VecDeque<Duration>>,
    fail_lists: AtomicBool,
    failing_exports: Mutex<HashSet<String>>,
    export_delay: Mutex<Option<Duration>>,
    exports_in_flight: AtomicUsize,
    peak_exports: AtomicUsize,
}

impl FakeApi {
    pub fn new() -> Self {
        let mut records = HashMap::new();
        records.insert("default.db".to_string(), Vec::new());
        Self {
            state: Mutex::new(FakeState {
                records,
                tags: HashMap::new(),
                logs: HashMap::new(),
                languages: vec!["english".into(), "chinese".into(), "thai".into()],
                databases: vec!["default.db".into(), "shop.db".into()],
                current: "default.db".into(),
                next_id: 1,
            }),
            calls: Mutex::new(HashMap::new()),
            list_delays: Mutex::new(VecDeque::new()),
            fail_lists: AtomicBool::new(false),
            failing_exports: Mutex::new(HashSet::new()),
            export_delay: Mutex::new(None),
            exports_in_flight: AtomicUsize::new(0),
            peak_exports: AtomicUsize::new(0),
        }
    }

    /// 在当前数据库插入 `count` 条记录
    pub fn seed(&self, count: usize, tag: Option<&str>) -> Vec<EnglishId> {
        let mut state = self.state.lock().unwrap();
        let mut ids = Vec::new();
        for n in 0..count {
            let id = state.next_id;
            state.next_id += 1;
            let mut translations = BTreeMap::new();
            translations.insert("english".to_string(), Some(format!("Entry {}", n)));
            translations.insert("chinese".to_string(), Some(format!("条目 {}", n)));
            let record = TranslationRecord {
                english_id: id,
                english: format!("Entry {}", n),
                key: Some(format!("entry_{}", id)),
                tag: tag.map(str::to_string),
                tags: tag.map(|t| vec![t.to_string()]).unwrap_or_default(),
                translations,
                created_at: None,
                updated_at: None,
            };
            if let Some(tag) = tag {
                if !state.tags_mut().iter().any(|t| t == tag) {
                    state.tags_mut().push(tag.to_string());
                }
            }
            state.records_mut().push(record);
            ids.push(id);
        }
        ids
    }

    pub fn set_current_database(&self, name: &str) {
        self.state.lock().unwrap().current = name.to_string();
    }

    pub fn server_current_database(&self) -> String {
        self.state.lock().unwrap().current.clone()
    }

    pub fn server_tags(&self) -> Vec<String> {
        let state = self.state.lock().unwrap();
        state.tags.get(&state.current).cloned().unwrap_or_default()
    }

    /// 下一次及之后的列表请求依次等待这些时长
    pub fn delay_lists(&self, delays: &[Duration]) {
        self.list_delays.lock().unwrap().extend(delays.iter().copied());
    }

    pub fn fail_lists(&self, fail: bool) {
        self.fail_lists.store(fail, Ordering::SeqCst);
    }

    pub fn set_languages(&self, languages: &[&str]) {
        self.state.lock().unwrap().languages = languages.iter().map(|code| code.to_string()).collect();
    }

    /// 每个导出请求等待的时长
    pub fn delay_exports(&self, delay: Duration) {
        *self.export_delay.lock().unwrap() = Some(delay);
    }

    /// 同时进行的导出请求的最大数量
    pub fn peak_exports(&self) -> usize {
        self.peak_exports.load(Ordering::SeqCst)
    }

    pub fn fail_export(&self, language: &str) {
        self.failing_exports.lock().unwrap().insert(language.to_string());
    }

    /// 某个端点被调用的次数
    pub fn calls(&self, endpoint: &str) -> usize {
        self.calls.lock().unwrap().get(endpoint).copied().unwrap_or(0)
    }

    pub fn total_calls(&self) -> usize {
        self.calls.lock().unwrap().values().sum()
    }

    pub fn reset_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    fn record_call(&self, endpoint: &'static str) {
        *self.calls.lock().unwrap().entry(endpoint).or_default() += 1;
    }

    fn next_list_delay(&self) -> Option<Duration> {
        self.list_delays.lock().unwrap().pop_front()
    }

    fn ack(message: impl Into<String>) -> ApiResult<Ack> {
        Ok(Ack { message: Some(message.into()) })
    }
}

impl TranslationApi for FakeApi {
    async fn languages(&self) -> ApiResult<LanguageList> {
        self.record_call("languages");
        let languages = self.state.lock().unwrap().languages.clone();
        Ok(LanguageList { languages, language_names: serde_json::Value::Null })
    }

    async fn list_translations(&self, query: &ListQuery) -> ApiResult<PageResult> {
        self.record_call("translations");
        let delay = self.next_list_delay();
        let page = {
            let state = self.state.lock().unwrap();
            let all = state.filtered(query.tag.as_deref(), query.language.as_deref());
            let total = all.len() as u64;
            let start = ((query.page.max(1) - 1) * query.limit) as usize;
            let items: Vec<_> = all.into_iter().skip(start).take(query.limit as usize).collect();
            PageResult {
                items,
                page: query.page,
                total,
                has_more: (query.page as u64) * (query.limit as u64) < total,
            }
        };

        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail_lists.load(Ordering::SeqCst) {
            return Err(ApiError::Transport("connection refused".into()));
        }
        Ok(page)
    }

    async fn search_translations(&self, query: &SearchQuery) -> ApiResult<Vec<TranslationRecord>> {
        self.record_call("search");
        let needle = query.q.to_lowercase();
        let state = self.state.lock().unwrap();
        Ok(state
            .filtered(query.tag.as_deref(), query.language.as_deref())
            .into_iter()
            .filter(|record| {
                record.english.to_lowercase().contains(&needle)
                    || record.key.as_deref().unwrap_or_default().to_lowercase().contains(&needle)
                    || record
                        .translations
                        .values()
                        .flatten()
                        .any(|text| text.to_lowercase().contains(&needle))
            })
            .collect())
    }

    async fn create_translation(&self, draft: &TranslationDraft) -> ApiResult<Ack> {
        self.record_call("create_translation");
        let mut state = self.state.lock().unwrap();
        if !draft.key.is_empty()
            && state.records().iter().any(|r| r.key.as_deref() == Some(draft.key.as_str()))
        {
            return Err(ApiError::Rejected(format!("键 {} 已存在", draft.key)));
        }

        let id = state.next_id;
        state.next_id += 1;
        let mut translations: BTreeMap<String, Option<String>> = draft
            .translations
            .iter()
            .map(|(code, text)| (code.clone(), Some(text.clone())))
            .collect();
        translations.insert("english".into(), Some(draft.english.clone()));
        let tags = if draft.tag.is_empty() { Vec::new() } else { vec![draft.tag.clone()] };
        if !draft.tag.is_empty() && !state.tags_mut().contains(&draft.tag) {
            state.tags_mut().push(draft.tag.clone());
        }
        state.records_mut().push(TranslationRecord {
            english_id: id,
            english: draft.english.clone(),
            key: Some(draft.key.clone()).filter(|k| !k.is_empty()),
            tag: tags.first().cloned(),
            tags,
            translations,
            created_at: None,
            updated_at: None,
        });
        state.log("新增", draft.english.clone());
        Self::ack("添加成功")
    }

    async fn update_translation(&self, id: EnglishId, draft: &TranslationDraft) -> ApiResult<Ack> {
        self.record_call("update_translation");
        let mut state = self.state.lock().unwrap();
        let record = state
            .records_mut()
            .iter_mut()
            .find(|r| r.english_id == id)
            .ok_or_else(|| ApiError::Rejected("翻译不存在".into()))?;
        record.english = draft.english.clone();
        record.key = Some(draft.key.clone()).filter(|k| !k.is_empty());
        record.tags = if draft.tag.is_empty() { Vec::new() } else { vec![draft.tag.clone()] };
        record.tag = record.tags.first().cloned();
        record.translations = draft
            .translations
            .iter()
            .map(|(code, text)| (code.clone(), Some(text.clone())))
            .collect();
        record.translations.insert("english".into(), Some(draft.english.clone()));
        state.log("更新", draft.english.clone());
        Self::ack("更新成功")
    }

    async fn delete_translation(&self, id: EnglishId) -> ApiResult<Ack> {
        self.record_call("delete_translation");
        let mut state = self.state.lock().unwrap();
        let before = state.records().len();
        state.records_mut().retain(|r| r.english_id != id);
        if state.records().len() == before {
            return Err(ApiError::Rejected("翻译不存在".into()));
        }
        state.log("删除", id.to_string());
        Self::ack("删除成功")
    }

    async fn tags(&self) -> ApiResult<Vec<String>> {
        self.record_call("tags");
        Ok(self.server_tags())
    }

    async fn create_tag(&self, name: &str) -> ApiResult<Ack> {
        self.record_call("create_tag");
        let mut state = self.state.lock().unwrap();
        if state.tags_mut().iter().any(|t| t == name) {
            return Err(ApiError::Rejected("标签已存在".into()));
        }
        state.tags_mut().push(name.to_string());
        state.log("新增标签", name.to_string());
        Self::ack("标签创建成功")
    }

    async fn tag_info(&self, name: &str) -> ApiResult<TagInfo> {
        self.record_call("tag_info");
        let state = self.state.lock().unwrap();
        let translation_count = state
            .records()
            .iter()
            .filter(|r| r.tags.iter().any(|t| t == name))
            .count() as u64;
        Ok(TagInfo { translation_count })
    }

    async fn delete_tag(&self, name: &str) -> ApiResult<Ack> {
        self.record_call("delete_tag");
        let mut state = self.state.lock().unwrap();
        state.tags_mut().retain(|t| t != name);
        for record in state.records_mut().iter_mut() {
            record.tags.retain(|t| t != name);
            if record.tag.as_deref() == Some(name) {
                record.tag = None;
            }
        }
        state.log("删除标签", name.to_string());
        Self::ack("标签删除成功")
    }

    async fn logs(&self, limit: u32) -> ApiResult<Vec<LogEntry>> {
        self.record_call("logs");
        let state = self.state.lock().unwrap();
        Ok(state
            .logs
            .get(&state.current)
            .map(|logs| logs.iter().take(limit as usize).cloned().collect())
            .unwrap_or_default())
    }

    async fn databases(&self) -> ApiResult<DatabaseList> {
        self.record_call("databases");
        let state = self.state.lock().unwrap();
        Ok(DatabaseList {
            databases: state.databases.clone(),
            current_database: Some(state.current.clone()),
        })
    }

    async fn create_database(&self, name: &str) -> ApiResult<Ack> {
        self.record_call("create_database");
        let mut state = self.state.lock().unwrap();
        let file = format!("{}.db", name);
        if state.databases.contains(&file) {
            return Err(ApiError::Rejected(format!("数据库 {} 已存在", name)));
        }
        state.databases.push(file);
        Self::ack(format!("数据库 {} 创建成功", name))
    }

    async fn switch_database(&self, name: &str) -> ApiResult<Ack> {
        self.record_call("switch_database");
        let mut state = self.state.lock().unwrap();
        if !state.databases.iter().any(|database| database == name) {
            return Err(ApiError::Rejected(format!("数据库 {} 不存在", name)));
        }
        state.current = name.to_string();
        Self::ack(format!("已切换到数据库 {}", name))
    }

    async fn toggle_language(&self, language: &str, active: bool) -> ApiResult<Ack> {
        self.record_call("toggle_language");
        let mut state = self.state.lock().unwrap();
        state.languages.retain(|code| code != language);
        if active {
            state.languages.push(language.to_string());
        }
        Self::ack(if active { "语言已激活" } else { "语言已停用" })
    }

    async fn remove_language(&self, language: &str) -> ApiResult<Ack> {
        self.record_call("remove_language");
        self.state.lock().unwrap().languages.retain(|code| code != language);
        Self::ack("语言已移除")
    }

    async fn export_language(&self, language: &str) -> ApiResult<ExportPayload> {
        self.record_call("export");
        let delay = *self.export_delay.lock().unwrap();
        if let Some(delay) = delay {
            let in_flight = self.exports_in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.peak_exports.fetch_max(in_flight, Ordering::SeqCst);
            tokio::time::sleep(delay).await;
            self.exports_in_flight.fetch_sub(1, Ordering::SeqCst);
        }
        if self.failing_exports.lock().unwrap().contains(language) {
            return Err(ApiError::Status { status: 500 });
        }

        let state = self.state.lock().unwrap();
        let records = state.records();
        let mut data = BTreeMap::new();
        for record in records {
            if let (Some(key), Some(text)) = (record.lookup_key(), record.translation(language)) {
                data.insert(key.to_string(), text.to_string());
            }
        }
        let stats = ExportStats {
            exported: data.len() as u64,
            total: records.len() as u64,
            with_key: records.iter().filter(|r| r.lookup_key().is_some()).count() as u64,
        };
        Ok(ExportPayload { data, stats })
    }
}

/// 会话、模拟服务和提示记录
pub struct Harness {
    pub api: Arc<FakeApi>,
    pub notifier: Arc<MemoryNotifier>,
    pub session: Session<FakeApi>,
}

pub fn harness(page_size: u32) -> Harness {
    harness_with(Arc::new(FakeApi::new()), page_size)
}

pub fn harness_with(api: Arc<FakeApi>, page_size: u32) -> Harness {
    let notifier = Arc::new(MemoryNotifier::new());
    let session = Session::new(
        Arc::clone(&api),
        notifier.clone(),
        SessionOptions { page_size, log_limit: 10 },
    );
    Harness { api, notifier, session }
}
