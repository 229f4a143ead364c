// ============================================================================
// TransDesk - 翻译列表显示
// ============================================================================
//
// 文件: src/ui/table.rs
// 职责: 翻译条目列表的终端渲染
// 边界:
//   - ✅ 单条目格式化（英文、键、标签、各语言译文）
//   - ✅ 列表页脚（总数、是否还有更多）
//   - ❌ 不应包含网络请求
//   - ❌ 不应修改列表状态
//
// ============================================================================

use crate::core::sync::ListSnapshot;
use crate::models::catalog::{language_display_name, SOURCE_LANGUAGE};
use crate::models::locale::Locale;
use crate::models::translation::TranslationRecord;
use crate::utils::colors::Colors;
use crate::utils::constants::icons;
use crate::utils::logger::Logger;
use crate::{t, tf};

/// 格式化一条记录
///
/// `languages` 为要显示的译文语言，英文源文本在标题行，不重复显示。
pub fn format_record(record: &TranslationRecord, languages: &[String], locale: Locale) -> Vec<String> {
    let mut header = format!(
        "{} {} {}",
        icons::ENTRY,
        Colors::dim(&format!("#{}", record.english_id)),
        Colors::bold(&record.english)
    );
    if let Some(key) = record.lookup_key() {
        header.push_str(&format!("  {}", Colors::info(key)));
    }
    if let Some(tag) = record.primary_tag() {
        header.push_str(&format!("  {} {}", icons::TAG, tag));
    }

    let mut lines = vec![header];
    for language in languages.iter().filter(|code| code.as_str() != SOURCE_LANGUAGE) {
        let name = language_display_name(language, locale);
        let text = match record.translation(language) {
            Some(text) => text.to_string(),
            None => Colors::dim(icons::MISSING),
        };
        lines.push(format!("    {}: {}", Colors::dim(&name), text));
    }
    lines
}

/// 渲染当前列表
pub fn render_translations(snapshot: &ListSnapshot, active_languages: &[String], locale: Locale) {
    if snapshot.translations.is_empty() {
        Logger::info(t!("list.empty"));
        return;
    }

    // 选了单一语言时只显示该语言
    let languages: Vec<String> = match &snapshot.filters.language {
        Some(language) => vec![language.clone()],
        None => active_languages.to_vec(),
    };

    for record in &snapshot.translations {
        for line in format_record(record, &languages, locale) {
            Logger::plain(line);
        }
    }

    Logger::plain("");
    if snapshot.searching {
        Logger::info(tf!(
            "list.search_footer",
            snapshot.total_count,
            snapshot.filters.search_query
        ));
    } else {
        Logger::info(tf!(
            "list.footer",
            snapshot.translations.len(),
            snapshot.total_count
        ));
        if snapshot.has_more {
            Logger::info(Colors::dim(&t!("list.has_more")));
        }
    }
}
