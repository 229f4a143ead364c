// ============================================================================
// TransDesk - 界面语言
// ============================================================================
//
// 文件: src/models/locale.rs
// 职责: 界面显示语言及其持久化
// 边界:
//   - ✅ 界面语言枚举和解析
//   - ✅ 界面语言状态文件读写
//   - ❌ 不应包含翻译表
//   - ❌ 不应包含其他客户端状态
//
// ============================================================================

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// 界面显示语言
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Zh,
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Zh => "zh",
        }
    }

    /// 从字符串解析，兼容 `zh_cn`、`en_us` 这类写法
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "en" | "en_us" | "en-us" => Some(Locale::En),
            "zh" | "zh_cn" | "zh-cn" => Some(Locale::Zh),
            _ => None,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 状态文件内容，只有一个固定键 `app_locale` (见 `LOCALE_KEY`)
#[derive(Debug, Default, Serialize, Deserialize)]
struct LocaleState {
    #[serde(default)]
    app_locale: Option<String>,
}

/// 界面语言的持久化存储
#[derive(Debug, Clone)]
pub struct LocaleStore {
    path: PathBuf,
}

impl LocaleStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 读取已保存的界面语言
    ///
    /// 文件缺失或值不是受支持的语言时为 `Ok(None)`；文件无法读取或解析时返回错误，
    /// 由调用方决定如何提示。
    pub fn load(&self) -> anyhow::Result<Option<Locale>> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let state: LocaleState = toml::from_str(&content)?;
        Ok(state.app_locale.as_deref().and_then(Locale::parse))
    }

    /// 保存界面语言
    pub fn save(&self, locale: Locale) -> anyhow::Result<()> {
        let state = LocaleState {
            app_locale: Some(locale.as_str().to_string()),
        };
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, toml::to_string(&state)?)?;
        Ok(())
    }
}
