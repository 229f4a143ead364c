// ============================================================================
// TransDesk - CLI Logs 命令
// ============================================================================
//
// 文件: src/cli/logs.rs
// 职责: 显示最近的操作日志
//
// ============================================================================

use anyhow::Result;
use clap::Args;

use crate::cli::{build_session_with, reported, session_options};
use crate::ui::spinner::with_spinner;
use crate::ui::summary::render_logs;
use crate::t;

/// 显示操作日志
#[derive(Debug, Args)]
pub struct LogsArgs {
    /// 显示条数（默认取配置）
    #[arg(short = 'n', long)]
    pub limit: Option<u32>,
}

pub async fn handle_logs(args: LogsArgs) -> Result<()> {
    let mut options = session_options();
    if let Some(limit) = args.limit.filter(|limit| *limit > 0) {
        options.log_limit = limit;
    }

    let session = build_session_with(options)?;
    let logs = reported(with_spinner(t!("logs.loading"), session.refresh_logs()).await)?;
    render_logs(&logs);
    Ok(())
}
