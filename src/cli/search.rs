// ============================================================================
// TransDesk - CLI Search 命令
// ============================================================================
//
// 文件: src/cli/search.rs
// 职责: 全文搜索翻译条目
// 边界:
//   - ✅ 搜索词和筛选参数
//   - ❌ 不应包含搜索逻辑
//
// ============================================================================

use anyhow::Result;
use clap::Args;

use crate::cli::list::ListArgs;
use crate::cli::{build_session, reported};
use crate::models::config::Config;
use crate::ui::spinner::with_spinner;
use crate::ui::table::render_translations;
use crate::t;

/// 搜索翻译条目（不分页）
#[derive(Debug, Args)]
pub struct SearchArgs {
    /// 搜索词，匹配英文、键和译文
    pub query: String,

    /// 按标签筛选
    #[arg(short, long)]
    pub tag: Option<String>,

    /// 只在该语言中搜索
    #[arg(long)]
    pub language: Option<String>,
}

pub async fn handle_search(args: SearchArgs) -> Result<()> {
    let mut filters = ListArgs {
        tag: args.tag,
        language: args.language,
        pages: 1,
        all: false,
    }
    .filters()?;
    // 空白搜索词回到第一页
    filters.search_query = args.query.trim().to_string();

    let session = build_session()?;
    session.list().preset_filters(filters).await;
    reported(with_spinner(t!("search.loading"), session.initialize()).await)?;

    let snapshot = session.list().snapshot().await;
    render_translations(&snapshot, &session.languages().await, Config::get_locale());
    Ok(())
}
