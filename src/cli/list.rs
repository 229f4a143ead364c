// ============================================================================
// TransDesk - CLI List 命令
// ============================================================================
//
// 文件: src/cli/list.rs
// 职责: 分页列出翻译条目
// 边界:
//   - ✅ 标签/语言筛选参数
//   - ✅ 按页数或全部加载
//   - ❌ 不应包含分页状态管理
//
// ============================================================================

use anyhow::Result;
use clap::Args;

use crate::cli::{build_session, reported};
use crate::core::validation::validate_language;
use crate::models::config::Config;
use crate::models::filter::{ActiveTab, FilterState, TagFilter};
use crate::ui::spinner::with_spinner;
use crate::ui::table::render_translations;
use crate::t;

/// 列出翻译条目
#[derive(Debug, Args)]
pub struct ListArgs {
    /// 按标签筛选（all 表示全部）
    #[arg(short, long)]
    pub tag: Option<String>,

    /// 只显示该语言的译文
    #[arg(long)]
    pub language: Option<String>,

    /// 加载的页数
    #[arg(short, long, default_value_t = 1)]
    pub pages: u32,

    /// 加载全部页
    #[arg(short, long)]
    pub all: bool,
}

impl ListArgs {
    /// 命令行参数对应的初始筛选
    pub(crate) fn filters(&self) -> Result<FilterState> {
        let mut filters = FilterState::default();
        if let Some(tag) = &self.tag {
            filters.tag = TagFilter::parse(tag);
        }
        if let Some(language) = &self.language {
            validate_language(language).map_err(|e| anyhow::anyhow!(e.localized()))?;
            filters.language = Some(language.clone());
            filters.active_tab = ActiveTab::Language(language.clone());
        }
        Ok(filters)
    }
}

pub async fn handle_list(args: ListArgs) -> Result<()> {
    let session = build_session()?;
    session.list().preset_filters(args.filters()?).await;

    reported(with_spinner(t!("list.loading"), session.initialize()).await)?;

    let target_pages = if args.all { u32::MAX } else { args.pages.max(1) };
    loop {
        let snapshot = session.list().snapshot().await;
        if snapshot.pages_loaded >= target_pages || !snapshot.has_more {
            break;
        }
        let loaded = reported(with_spinner(t!("list.loading_more"), session.list().load_more()).await)?;
        if !loaded {
            break;
        }
    }

    let snapshot = session.list().snapshot().await;
    render_translations(&snapshot, &session.languages().await, Config::get_locale());
    Ok(())
}
