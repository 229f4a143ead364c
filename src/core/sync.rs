// ============================================================================
// TransDesk - 列表同步控制器
// ============================================================================
//
// 文件: src/core/sync.rs
// 职责: 让分页、可筛选、可追加的翻译列表与筛选状态保持一致
// 边界:
//   - ✅ 筛选变化时重新拉取第一页并替换列表
//   - ✅ "加载更多" 追加下一页
//   - ✅ 搜索视图（不分页）
//   - ✅ 丢弃过期响应
//   - ❌ 不应包含变更操作
//   - ❌ 不应包含展示逻辑
//
// ============================================================================

use std::sync::Arc;
use tokio::sync::Mutex;

use crate::core::client::{ListQuery, SearchQuery, TranslationApi};
use crate::core::error::{ApiError, ApiResult};
use crate::models::filter::{ActiveTab, FilterState, TagFilter};
use crate::models::translation::TranslationRecord;
use crate::ui::notify::Notifier;

/// 列表状态快照
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListSnapshot {
    /// 按服务端顺序排列的条目
    pub translations: Vec<TranslationRecord>,
    pub current_page: u32,
    /// 当前视图已加载的页数
    pub pages_loaded: u32,
    pub total_count: u64,
    pub has_more: bool,
    /// 正在替换整个列表
    pub loading: bool,
    /// 正在追加下一页
    pub loading_more: bool,
    /// 当前显示的是搜索结果
    pub searching: bool,
    pub filters: FilterState,
}

impl Default for ListSnapshot {
    fn default() -> Self {
        Self {
            translations: Vec::new(),
            current_page: 1,
            pages_loaded: 0,
            total_count: 0,
            has_more: false,
            loading: false,
            loading_more: false,
            searching: false,
            filters: FilterState::default(),
        }
    }
}

#[derive(Debug, Default)]
struct ListState {
    snapshot: ListSnapshot,
    /// 每次替换列表递增；响应返回时不等于当前值即已过期
    generation: u64,
}

/// 列表同步控制器
///
/// 状态在异步锁内，网络等待期间从不持锁，所以多个调用可以重叠：
/// 追加由 `loading_more` 守护，替换由 generation 守护。
pub struct ListController<A> {
    api: Arc<A>,
    notifier: Arc<dyn Notifier>,
    page_size: u32,
    state: Mutex<ListState>,
}

impl<A: TranslationApi> ListController<A> {
    pub fn new(api: Arc<A>, notifier: Arc<dyn Notifier>, page_size: u32) -> Self {
        Self {
            api,
            notifier,
            page_size: page_size.max(1),
            state: Mutex::new(ListState::default()),
        }
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub async fn snapshot(&self) -> ListSnapshot {
        self.state.lock().await.snapshot.clone()
    }

    pub async fn filters(&self) -> FilterState {
        self.state.lock().await.snapshot.filters.clone()
    }

    /// 直接设置筛选状态，不触发拉取
    pub async fn preset_filters(&self, filters: FilterState) {
        self.state.lock().await.snapshot.filters = filters;
    }

    /// 修改筛选状态；数据库、标签或语言变化时重新拉取第一页
    ///
    /// 返回是否发生了拉取。尚未确定数据库时不拉取。
    pub async fn change_filters<F>(&self, change: F) -> ApiResult<bool>
    where
        F: FnOnce(&mut FilterState),
    {
        let should_reload = {
            let mut state = self.state.lock().await;
            let before = state.snapshot.filters.clone();
            change(&mut state.snapshot.filters);
            let filters = &state.snapshot.filters;
            filters.invalidates_list(&before) && filters.database.is_some()
        };

        if should_reload {
            self.reload().await?;
        }
        Ok(should_reload)
    }

    pub async fn set_tag(&self, tag: TagFilter) -> ApiResult<bool> {
        self.change_filters(|filters| filters.tag = tag).await
    }

    /// 切换单语言显示，None 表示全部语言
    pub async fn set_language(&self, language: Option<String>) -> ApiResult<bool> {
        self.change_filters(|filters| {
            filters.active_tab = match &language {
                Some(code) => ActiveTab::Language(code.clone()),
                None => ActiveTab::All,
            };
            filters.language = language;
        })
        .await
    }

    /// 切换数据库：重置全部筛选，恰好一次替换拉取
    pub async fn switch_database(&self, database: &str) -> ApiResult<()> {
        self.state
            .lock()
            .await
            .snapshot
            .filters
            .reset_for_database(database);
        self.reload().await
    }

    /// 当前标签筛选为 `name` 时回到全部，不触发拉取
    pub async fn clear_tag_filter_if(&self, name: &str) -> bool {
        let mut state = self.state.lock().await;
        if state.snapshot.filters.tag.is(name) {
            state.snapshot.filters.tag = TagFilter::All;
            true
        } else {
            false
        }
    }

    /// 拉取第一页并替换列表
    ///
    /// 失败时保留原列表，清除加载标记并提示。
    pub async fn reload(&self) -> ApiResult<()> {
        let (generation, query) = {
            let mut state = self.state.lock().await;
            state.generation += 1;
            state.snapshot.loading = true;
            // 进行中的追加随 generation 一起作废
            state.snapshot.loading_more = false;
            (state.generation, self.page_query(&state.snapshot.filters, 1))
        };

        tracing::debug!(generation, ?query, "reloading translations");
        let result = self.api.list_translations(&query).await;

        let mut state = self.state.lock().await;
        if state.generation != generation {
            tracing::debug!(generation, current = state.generation, "discarding superseded page");
            return Ok(());
        }
        state.snapshot.loading = false;

        match result {
            Ok(page) => {
                self.check_page_len(page.items.len());
                let snapshot = &mut state.snapshot;
                snapshot.translations = page.items;
                snapshot.current_page = page.page;
                snapshot.pages_loaded = 1;
                snapshot.total_count = page.total;
                snapshot.has_more = page.has_more;
                snapshot.searching = false;
                snapshot.filters.page = page.page;
                Ok(())
            }
            Err(e) => {
                drop(state);
                Err(self.report(e, "notice.get_translations_failed"))
            }
        }
    }

    /// 追加下一页
    ///
    /// 没有更多、正在追加或正在替换时什么也不做，返回 `Ok(false)`。
    pub async fn load_more(&self) -> ApiResult<bool> {
        let (generation, query) = {
            let mut state = self.state.lock().await;
            let snapshot = &state.snapshot;
            if !snapshot.has_more || snapshot.loading_more || snapshot.loading {
                return Ok(false);
            }
            let next_page = snapshot.current_page + 1;
            let query = self.page_query(&snapshot.filters, next_page);
            state.snapshot.loading_more = true;
            (state.generation, query)
        };

        tracing::debug!(generation, page = query.page, "loading more translations");
        let result = self.api.list_translations(&query).await;

        let mut state = self.state.lock().await;
        if state.generation != generation {
            tracing::debug!(generation, current = state.generation, "discarding stale append");
            return Ok(false);
        }
        state.snapshot.loading_more = false;

        match result {
            Ok(page) => {
                self.check_page_len(page.items.len());
                let snapshot = &mut state.snapshot;
                snapshot.translations.extend(page.items);
                snapshot.current_page = page.page;
                snapshot.pages_loaded += 1;
                snapshot.total_count = page.total;
                snapshot.has_more = page.has_more;
                snapshot.filters.page = page.page;
                Ok(true)
            }
            Err(e) => {
                drop(state);
                Err(self.report(e, "notice.get_translations_failed"))
            }
        }
    }

    /// 搜索；空白查询恢复第一页的分页视图
    pub async fn search(&self, query: &str) -> ApiResult<()> {
        if query.trim().is_empty() {
            self.state.lock().await.snapshot.filters.search_query.clear();
            return self.reload().await;
        }

        let (generation, search) = {
            let mut state = self.state.lock().await;
            state.generation += 1;
            state.snapshot.loading = true;
            state.snapshot.loading_more = false;
            let filters = &mut state.snapshot.filters;
            filters.search_query = query.to_string();
            let search = SearchQuery {
                q: query.to_string(),
                tag: filters.tag.as_query().map(str::to_string),
                language: filters.language.clone(),
            };
            (state.generation, search)
        };

        tracing::debug!(generation, ?search, "searching translations");
        let result = self.api.search_translations(&search).await;

        let mut state = self.state.lock().await;
        if state.generation != generation {
            tracing::debug!(generation, current = state.generation, "discarding superseded search");
            return Ok(());
        }
        state.snapshot.loading = false;

        match result {
            Ok(items) => {
                let snapshot = &mut state.snapshot;
                snapshot.total_count = items.len() as u64;
                snapshot.translations = items;
                snapshot.current_page = 1;
                snapshot.pages_loaded = 1;
                // 搜索不分页
                snapshot.has_more = false;
                snapshot.searching = true;
                Ok(())
            }
            Err(e) => {
                drop(state);
                Err(self.report(e, "notice.search_failed"))
            }
        }
    }

    fn page_query(&self, filters: &FilterState, page: u32) -> ListQuery {
        ListQuery {
            tag: filters.tag.as_query().map(str::to_string),
            language: filters.language.clone(),
            page,
            limit: self.page_size,
        }
    }

    fn check_page_len(&self, len: usize) {
        if len > self.page_size as usize {
            tracing::warn!(len, page_size = self.page_size, "server returned an oversized page");
        }
    }

    fn report(&self, error: ApiError, fallback_key: &str) -> ApiError {
        tracing::warn!(%error, "list fetch failed");
        self.notifier.notify(error.to_notice(fallback_key));
        error
    }
}
