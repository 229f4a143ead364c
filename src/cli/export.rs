// ============================================================================
// TransDesk - CLI Export 命令
// ============================================================================
//
// 文件: src/cli/export.rs
// 职责: 导出单个语言或全部激活语言
// 边界:
//   - ✅ 导出进度显示
//   - ✅ 导出结果明细显示
//   - ❌ 不应包含导出文件写入逻辑
//
// ============================================================================

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;

use crate::cli::{build_session, reported, AlreadyReported};
use crate::core::export::ExportSelection;
use crate::core::fanout::FanoutConfig;
use crate::core::validation::validate_language;
use crate::models::config::Config;
use crate::ui::spinner::{with_spinner, Spinner};
use crate::ui::summary::render_export_report;
use crate::{t, tf};

/// 导出翻译
#[derive(Debug, Args)]
pub struct ExportArgs {
    /// 语言代码，all 表示全部激活语言
    #[arg(default_value = "all")]
    pub language: String,

    /// 输出目录（默认取配置）
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub async fn handle_export(args: ExportArgs) -> Result<()> {
    let selection = ExportSelection::parse(&args.language);
    if let ExportSelection::Language(language) = &selection {
        validate_language(language).map_err(|e| anyhow::anyhow!(e.localized()))?;
    }

    let session = build_session()?;
    let (databases, languages) = with_spinner(t!("export.preparing"), async {
        tokio::join!(session.refresh_databases(), session.refresh_languages())
    })
    .await;
    reported(databases)?;
    reported(languages)?;

    let spinner = Arc::new(Spinner::new(t!("export.running")));
    let progress = Arc::clone(&spinner);
    let fanout = FanoutConfig::default().with_progress_callback(Arc::new(move |done, total| {
        progress.update_message(tf!("export.progress", done, total));
    }));

    let output_dir = args.output.unwrap_or_else(Config::get_output_dir);
    let exporter = session.exporter(output_dir).with_fanout(fanout);
    let report = session.export(&exporter, &selection).await;
    spinner.finish();

    if report.succeeded.is_empty() && report.failed.is_empty() {
        return Ok(());
    }
    render_export_report(&report, Config::get_locale());

    if report.succeeded.is_empty() {
        return Err(AlreadyReported.into());
    }
    Ok(())
}
