// ============================================================================
// TransDesk - 导出
// ============================================================================
//
// 文件: src/core/export.rs
// 职责: 按语言导出翻译数据到 JSON 文件
// 边界:
//   - ✅ 单语言导出
//   - ✅ 全部激活语言的并发导出和结果汇总
//   - ✅ 导出文件命名和写入
//   - ❌ 不应包含重试逻辑
//   - ❌ 不应包含列表状态管理
//
// ============================================================================

use anyhow::Context;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::core::client::TranslationApi;
use crate::core::fanout::{run_all, FanoutConfig, TaskResult};
use crate::i18n::current_locale;
use crate::models::catalog::{database_stem, language_display_name, ExportStats};
use crate::models::locale::Locale;
use crate::ui::notify::{Notice, Notifier};
use crate::tf;

/// 导出范围
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportSelection {
    /// 全部激活语言
    All,
    Language(String),
}

impl ExportSelection {
    /// `"all"` 表示全部
    pub fn parse(s: &str) -> Self {
        match s.trim() {
            "all" => ExportSelection::All,
            language => ExportSelection::Language(language.to_string()),
        }
    }
}

/// 成功写出的文件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFile {
    pub language: String,
    pub path: PathBuf,
    pub stats: ExportStats,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFailure {
    pub language: String,
    pub reason: String,
}

/// 一次导出的结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportReport {
    pub succeeded: Vec<ExportedFile>,
    pub failed: Vec<ExportFailure>,
}

impl ExportReport {
    /// 成功部分的统计合计
    pub fn totals(&self) -> ExportStats {
        let mut totals = ExportStats::default();
        for file in &self.succeeded {
            totals += file.stats;
        }
        totals
    }

    /// 没有失败的语言
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn failed_languages(&self) -> Vec<&str> {
        self.failed.iter().map(|f| f.language.as_str()).collect()
    }
}

/// 导出文件名：`<数据库名去掉 .db>_<语言>.json`
pub fn export_file_name(database: &str, language: &str) -> String {
    format!("{}_{}.json", database_stem(database), language)
}

/// 导出器
pub struct Exporter<A> {
    api: Arc<A>,
    notifier: Arc<dyn Notifier>,
    output_dir: PathBuf,
    fanout: FanoutConfig,
}

impl<A: TranslationApi + 'static> Exporter<A> {
    pub fn new(api: Arc<A>, notifier: Arc<dyn Notifier>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            api,
            notifier,
            output_dir: output_dir.into(),
            fanout: FanoutConfig::default(),
        }
    }

    /// 替换进度回调；并发数总是等于导出的语言数
    pub fn with_fanout(mut self, fanout: FanoutConfig) -> Self {
        self.fanout = fanout;
        self
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// 导出并发送结果提示
    ///
    /// `All` 时每个激活语言一个请求，全部完成后汇总；
    /// 部分失败时除成功提示外另发一条列出失败语言的警告。
    pub async fn export(
        &self,
        selection: &ExportSelection,
        active_languages: &[String],
        database: &str,
    ) -> ExportReport {
        let languages: Vec<String> = match selection {
            ExportSelection::All => active_languages.to_vec(),
            ExportSelection::Language(language) => vec![language.clone()],
        };

        if languages.is_empty() {
            self.notifier.notify(Notice::info(crate::t!("export.nothing")));
            return ExportReport::default();
        }

        let tasks: Vec<(String, _)> = languages
            .into_iter()
            .map(|language| {
                let api = Arc::clone(&self.api);
                let path = self.output_dir.join(export_file_name(database, &language));
                let id = language.clone();
                (id, async move { write_export(api, language, path).await })
            })
            .collect();

        // 每个语言一个请求，全部同时发出
        let fanout = FanoutConfig {
            max_concurrency: tasks.len(),
            ..self.fanout.clone()
        };

        let mut report = ExportReport::default();
        for (language, result) in run_all(&fanout, tasks).await {
            match result {
                TaskResult::Success(file) => report.succeeded.push(file),
                TaskResult::Failed(reason) => {
                    tracing::warn!(%language, %reason, "export failed");
                    report.failed.push(ExportFailure { language, reason });
                }
            }
        }

        self.announce(selection, &report);
        report
    }

    fn announce(&self, selection: &ExportSelection, report: &ExportReport) {
        let locale = current_locale();

        if let ExportSelection::Language(_) = selection {
            match report.succeeded.first() {
                Some(file) => self.notifier.notify(Notice::success(tf!(
                    "export.single_success",
                    language_display_name(&file.language, locale),
                    file.path.display()
                ))),
                None => self.notifier.notify(Notice::error(crate::t!("export.failed"))),
            }
            return;
        }

        if !report.succeeded.is_empty() {
            let totals = report.totals();
            self.notifier.notify(Notice::success(tf!(
                "export.all_success",
                report.succeeded.len(),
                totals.exported,
                totals.total,
                totals.with_key
            )));
        }

        if !report.failed.is_empty() {
            let names: Vec<String> = report
                .failed
                .iter()
                .map(|failure| language_display_name(&failure.language, locale))
                .collect();
            let separator = match locale {
                Locale::Zh => "、",
                Locale::En => ", ",
            };
            self.notifier.notify(Notice::warning(tf!(
                "export.partial_failed",
                names.join(separator)
            )));
        }
    }
}

async fn write_export<A: TranslationApi>(
    api: Arc<A>,
    language: String,
    path: PathBuf,
) -> anyhow::Result<ExportedFile> {
    let payload = api.export_language(&language).await?;

    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    let content = serde_json::to_string_pretty(&payload.data)?;
    tokio::fs::write(&path, content)
        .await
        .with_context(|| format!("failed to write {}", path.display()))?;

    tracing::debug!(%language, path = %path.display(), exported = payload.stats.exported, "export written");
    Ok(ExportedFile {
        language,
        path,
        stats: payload.stats,
    })
}
