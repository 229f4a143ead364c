// ============================================================================
// TransDesk - 国际化模块
// ============================================================================
//
// 文件: src/i18n/mod.rs
// 职责: 提示文本的翻译查找
// 边界:
//   - ✅ 翻译表选择和查找
//   - ✅ 翻译宏定义和实现
//   - ✅ 参数化翻译支持
//   - ❌ 不应包含具体翻译内容
//   - ❌ 不应包含业务逻辑
//   - ❌ 不应包含文件操作逻辑
//
// ============================================================================

pub mod en;
pub mod zh;

use crate::models::config::Config;
use crate::models::locale::Locale;

/// 当前界面语言，配置未初始化时为英文
pub fn current_locale() -> Locale {
    Config::get_locale()
}

fn table(locale: Locale) -> &'static [(&'static str, &'static str)] {
    match locale {
        Locale::En => en::TRANSLATIONS,
        Locale::Zh => zh::TRANSLATIONS,
    }
}

/// 在指定语言的表中查找；缺失时退回英文表
pub fn translate(locale: Locale, key: &str) -> String {
    let lookup = |translations: &[(&str, &str)]| {
        translations
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.to_string())
    };

    lookup(table(locale))
        .or_else(|| lookup(en::TRANSLATIONS))
        .unwrap_or_else(|| format!("Unknown translation key: {}", key))
}

/// 获取翻译文本
pub fn get_translation(key: &str) -> String {
    translate(current_locale(), key)
}

/// 简单翻译宏
#[macro_export]
macro_rules! t {
    ($key:expr) => {
        $crate::i18n::get_translation($key)
    };
}

/// 带参数翻译的辅助函数
pub fn format_with_args(template: String, args: Vec<String>) -> String {
    let mut result = template;
    let mut cursor = 0;
    for arg in args.iter() {
        // 依次替换 {} 占位符，不扫描已替换的参数
        match result[cursor..].find("{}") {
            Some(offset) => {
                let pos = cursor + offset;
                result.replace_range(pos..pos + 2, arg);
                cursor = pos + arg.len();
            }
            None => break,
        }
    }
    result
}

/// 带参数的翻译宏
#[macro_export]
macro_rules! tf {
    ($key:expr, $($arg:expr),*) => {{
        let template = $crate::i18n::get_translation($key);
        let args = vec![$(format!("{}", $arg)),*];
        $crate::i18n::format_with_args(template, args)
    }};
}
