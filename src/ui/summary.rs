// ============================================================================
// TransDesk - 目录与结果汇总显示
// ============================================================================
//
// 文件: src/ui/summary.rs
// 职责: 标签、语言、数据库、操作日志和导出结果的终端显示
// 边界:
//   - ✅ 目录列表格式化输出
//   - ✅ 导出汇总显示
//   - ✅ 国际化文本支持
//   - ❌ 不应包含网络请求
//   - ❌ 不应包含业务逻辑
//
// ============================================================================

use crate::core::export::ExportReport;
use crate::models::catalog::{language_codes, language_display_name, LogEntry, SOURCE_LANGUAGE};
use crate::models::filter::TagFilter;
use crate::models::locale::Locale;
use crate::utils::colors::Colors;
use crate::utils::constants::icons;
use crate::utils::logger::Logger;
use crate::{t, tf};

const RULE: &str = "───────────────────────────────────────";

fn heading(title: String) {
    Logger::plain("");
    Logger::plain(Colors::bold(&title));
    Logger::plain(RULE);
}

/// 标签列表，当前筛选的标签高亮
pub fn render_tags(tags: &[String], active: &TagFilter) {
    heading(tf!("summary.tags_title", tags.len()));
    if tags.is_empty() {
        Logger::plain(Colors::dim(&t!("summary.no_tags")));
        return;
    }
    for tag in tags {
        if active.is(tag) {
            Logger::plain(format!("{} {}", icons::CURRENT, Colors::info(tag)));
        } else {
            Logger::plain(format!("{} {}", icons::TAG, tag));
        }
    }
}

/// 语言目录，标出激活状态
pub fn render_languages(active: &[String], locale: Locale) {
    heading(tf!("summary.languages_title", active.len()));
    for code in language_codes() {
        let name = language_display_name(code, locale);
        let is_active = active.iter().any(|language| language == code);
        let marker = if is_active { icons::SUCCESS } else { icons::OTHER };
        let mut line = format!("{} {:<16} {}", marker, code, name);
        if code == SOURCE_LANGUAGE {
            line.push_str(&format!("  {}", Colors::dim(&t!("summary.source_language"))));
        }
        if is_active {
            Logger::plain(Colors::success(&line));
        } else {
            Logger::plain(Colors::dim(&line));
        }
    }
}

pub fn render_databases(databases: &[String], current: Option<&str>) {
    heading(tf!("summary.databases_title", databases.len()));
    for database in databases {
        if Some(database.as_str()) == current {
            Logger::plain(format!(
                "{} {}  {}",
                icons::CURRENT,
                Colors::info(database),
                Colors::dim(&t!("summary.current"))
            ));
        } else {
            Logger::plain(format!("{} {}", icons::DATABASE, database));
        }
    }
}

/// 日志操作类型的显示名；服务端记录的是中文操作名
pub fn log_operation_label(operation_type: &str) -> String {
    let key = match operation_type {
        "新增" => "log.add",
        "更新" => "log.update",
        "删除" => "log.delete",
        "新增标签" => "log.add_tag",
        "删除标签" => "log.delete_tag",
        other => return other.to_string(),
    };
    t!(key)
}

pub fn render_logs(logs: &[LogEntry]) {
    heading(t!("summary.logs_title"));
    if logs.is_empty() {
        Logger::plain(Colors::dim(&t!("summary.no_logs")));
        return;
    }
    for log in logs {
        let label = log_operation_label(&log.operation_type);
        let label = match log.operation_type.as_str() {
            "删除" | "删除标签" => Colors::error(&label),
            "更新" => Colors::warn(&label),
            _ => Colors::success(&label),
        };
        let mut line = format!(
            "{} {}  {}",
            icons::LOG,
            label,
            tf!("summary.log_count", log.entry_count)
        );
        if let Some(description) = log.description.as_deref().filter(|d| !d.is_empty()) {
            line.push_str(&format!("  {}", description));
        }
        if let Some(date) = &log.operation_date {
            line.push_str(&format!("  {}", Colors::dim(date)));
        }
        Logger::plain(line);
    }
}

/// 导出结果明细
pub fn render_export_report(report: &ExportReport, locale: Locale) {
    heading(t!("summary.export_title"));
    for file in &report.succeeded {
        Logger::plain(format!(
            "{} {:<20} {}  {}",
            icons::SUCCESS,
            language_display_name(&file.language, locale),
            file.path.display(),
            Colors::dim(&tf!(
                "summary.export_stats",
                file.stats.exported,
                file.stats.total,
                file.stats.with_key
            ))
        ));
    }
    for failure in &report.failed {
        Logger::plain(format!(
            "{} {:<20} {}",
            Colors::error(icons::ERROR),
            language_display_name(&failure.language, locale),
            Colors::dim(&failure.reason)
        ));
    }

    let totals = report.totals();
    Logger::plain(RULE);
    Logger::plain(format!(
        "{} {}",
        icons::SUMMARY,
        tf!(
            "summary.export_totals",
            report.succeeded.len(),
            report.succeeded.len() + report.failed.len(),
            totals.exported,
            totals.with_key
        )
    ));
}
