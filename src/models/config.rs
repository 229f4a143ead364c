// ============================================================================
// TransDesk - 配置数据模型
// ============================================================================
//
// 文件: src/models/config.rs
// 职责: 配置文件数据结构定义和操作
// 边界:
//   - ✅ 配置文件数据结构定义
//   - ✅ 配置序列化/反序列化
//   - ✅ 配置默认值
//   - ✅ 配置文件读写操作
//   - ✅ 运行时参数合并
//   - ❌ 不应包含业务规则验证
//   - ❌ 不应包含 CLI 参数解析
//
// ============================================================================

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};
use std::time::Duration;

use crate::models::locale::Locale;
use crate::utils::constants::{
    CONFIG_FILE_NAME, DEFAULT_BASE_URL, DEFAULT_LOG_LIMIT, DEFAULT_PAGE_SIZE, DEFAULT_STATE_FILE,
};

/// 全局配置管理器
static GLOBAL_CONFIG: std::sync::OnceLock<Arc<RwLock<Config>>> = std::sync::OnceLock::new();

/// TransDesk 配置文件结构
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// 后端服务配置
    #[serde(default)]
    pub server: ServerConfig,
    /// 列表配置
    #[serde(default)]
    pub list: ListConfig,
    /// 导出配置
    #[serde(default)]
    pub export: ExportConfig,
    /// 输出配置
    #[serde(default)]
    pub output: OutputConfig,
    /// 国际化配置
    #[serde(default)]
    pub i18n: I18nConfig,
}

/// 后端服务配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// 后端根地址
    #[serde(default = "Config::default_base_url")]
    pub base_url: String,
    /// 请求超时（秒），不设置表示不限制
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

/// 列表配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListConfig {
    /// 每页条目数
    #[serde(default = "Config::default_page_size")]
    pub page_size: u32,
    /// 拉取的操作日志条数
    #[serde(default = "Config::default_log_limit")]
    pub log_limit: u32,
}

/// 导出配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// 导出文件目录
    #[serde(default = "Config::default_output_dir")]
    pub output_dir: String,
}

/// 输出配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// 是否显示进度动画
    #[serde(default = "Config::default_show_progress")]
    pub show_progress: bool,
    /// 是否详细输出
    #[serde(default)]
    pub verbose: bool,
    /// 是否彩色输出
    #[serde(default = "Config::default_colored")]
    pub colored: bool,
}

/// 国际化配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct I18nConfig {
    /// 界面语言 (en, zh)
    #[serde(default = "Config::default_language")]
    pub language: String,
    /// 界面语言状态文件
    #[serde(default = "Config::default_state_file")]
    pub state_file: String,
}

/// CLI 运行时参数（用于覆盖配置文件）
#[derive(Debug, Clone, Default)]
pub struct RuntimeArgs {
    pub verbose: Option<bool>,
    pub colored: Option<bool>,
    pub show_progress: Option<bool>,
    pub base_url: Option<String>,
    pub page_size: Option<u32>,
    pub output_dir: Option<String>,
    pub language: Option<String>,
}

/// 配置默认值 trait - 不依赖全局配置初始化
pub trait ConfigDefaults {
    fn default_base_url() -> String {
        DEFAULT_BASE_URL.to_string()
    }

    fn default_page_size() -> u32 {
        DEFAULT_PAGE_SIZE
    }

    fn default_log_limit() -> u32 {
        DEFAULT_LOG_LIMIT
    }

    fn default_output_dir() -> String {
        ".".to_string()
    }

    fn default_show_progress() -> bool {
        true
    }

    fn default_verbose() -> bool {
        false
    }

    fn default_colored() -> bool {
        true
    }

    fn default_language() -> String {
        Locale::default().as_str().to_string()
    }

    fn default_state_file() -> String {
        DEFAULT_STATE_FILE.to_string()
    }
}

impl ConfigDefaults for Config {}

impl Config {
    /// 初始化全局配置（程序启动时调用）
    pub fn initialize() -> anyhow::Result<()> {
        let config = Self::load_from_path(Path::new(CONFIG_FILE_NAME))?;
        GLOBAL_CONFIG
            .set(Arc::new(RwLock::new(config)))
            .map_err(|_| anyhow::anyhow!("Global config already initialized"))?;
        Ok(())
    }

    /// 加载配置文件，不存在时使用默认配置
    pub fn load_from_path(config_path: &Path) -> anyhow::Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config = toml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// 合并运行时参数
    pub fn merge_runtime_args(args: RuntimeArgs) -> anyhow::Result<()> {
        let global_config = GLOBAL_CONFIG
            .get()
            .ok_or_else(|| anyhow::anyhow!("Global config not initialized"))?;

        let mut config = global_config
            .write()
            .map_err(|_| anyhow::anyhow!("Failed to acquire config write lock"))?;

        config.apply(args);
        Ok(())
    }

    /// 将运行时参数应用到本配置
    pub fn apply(&mut self, args: RuntimeArgs) {
        if let Some(verbose) = args.verbose {
            self.output.verbose = verbose;
        }
        if let Some(colored) = args.colored {
            self.output.colored = colored;
        }
        if let Some(show_progress) = args.show_progress {
            self.output.show_progress = show_progress;
        }
        if let Some(base_url) = args.base_url {
            self.server.base_url = base_url;
        }
        if let Some(page_size) = args.page_size {
            self.list.page_size = page_size;
        }
        if let Some(output_dir) = args.output_dir {
            self.export.output_dir = output_dir;
        }
        if let Some(language) = args.language {
            self.i18n.language = language;
        }
    }

    /// 保存配置到文件
    pub fn save_to_file(&self, config_path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    /// 生成默认配置模板并保存到文件
    pub fn create_default_config_file(config_path: &Path) -> anyhow::Result<()> {
        Self::default().save_to_file(config_path)
    }

    /// 在读锁下读取全局配置
    fn read<T>(f: impl FnOnce(&Config) -> T) -> anyhow::Result<T> {
        let global_config = GLOBAL_CONFIG
            .get()
            .ok_or_else(|| anyhow::anyhow!("Global config not initialized"))?;

        let config = global_config
            .read()
            .map_err(|_| anyhow::anyhow!("Failed to acquire config read lock"))?;

        Ok(f(&config))
    }

    /// 获取后端地址（带默认值）
    pub fn get_base_url() -> String {
        Self::read(|c| c.server.base_url.clone())
            .ok()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(Self::default_base_url)
    }

    /// 获取请求超时
    pub fn get_timeout() -> Option<Duration> {
        Self::read(|c| c.server.timeout_secs)
            .ok()
            .flatten()
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }

    /// 获取分页大小（带默认值）
    pub fn get_page_size() -> u32 {
        Self::read(|c| c.list.page_size)
            .ok()
            .filter(|size| *size > 0)
            .unwrap_or_else(Self::default_page_size)
    }

    /// 获取操作日志条数（带默认值）
    pub fn get_log_limit() -> u32 {
        Self::read(|c| c.list.log_limit)
            .ok()
            .filter(|limit| *limit > 0)
            .unwrap_or_else(Self::default_log_limit)
    }

    /// 获取导出目录
    pub fn get_output_dir() -> PathBuf {
        Self::read(|c| c.export.output_dir.clone())
            .ok()
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(Self::default_output_dir()))
    }

    /// 获取界面语言字符串
    pub fn get_language() -> anyhow::Result<String> {
        Self::read(|c| c.i18n.language.clone())
    }

    /// 获取界面语言（带默认值）
    pub fn get_locale() -> Locale {
        Self::get_language()
            .ok()
            .and_then(|language| Locale::parse(&language))
            .unwrap_or_default()
    }

    /// 获取界面语言状态文件路径
    pub fn get_state_file() -> PathBuf {
        Self::read(|c| c.i18n.state_file.clone())
            .ok()
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(Self::default_state_file()))
    }

    /// 获取详细输出设置（带默认值）
    pub fn get_verbose() -> bool {
        Self::read(|c| c.output.verbose).unwrap_or_else(|_| Self::default_verbose())
    }

    /// 获取是否彩色输出（带默认值）
    pub fn get_colored() -> bool {
        Self::read(|c| c.output.colored).unwrap_or_else(|_| Self::default_colored())
    }

    /// 获取是否显示进度动画（带默认值）
    pub fn get_show_progress() -> bool {
        Self::read(|c| c.output.show_progress).unwrap_or_else(|_| Self::default_show_progress())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            list: ListConfig::default(),
            export: ExportConfig::default(),
            output: OutputConfig::default(),
            i18n: I18nConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: Config::default_base_url(),
            timeout_secs: None,
        }
    }
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            page_size: Config::default_page_size(),
            log_limit: Config::default_log_limit(),
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: Config::default_output_dir(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            show_progress: Config::default_show_progress(),
            verbose: Config::default_verbose(),
            colored: Config::default_colored(),
        }
    }
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            language: Config::default_language(),
            state_file: Config::default_state_file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from_path(&dir.path().join("transdesk.toml")).unwrap();

        assert_eq!(config.server.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.list.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(config.i18n.language, "en");
        assert!(config.server.timeout_secs.is_none());
    }

    #[test]
    fn test_partial_file_keeps_section_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("transdesk.toml");
        std::fs::write(&path, "[server]\nbase_url = \"http://example.test\"\n").unwrap();

        let config = Config::load_from_path(&path).unwrap();

        assert_eq!(config.server.base_url, "http://example.test");
        assert_eq!(config.list.log_limit, DEFAULT_LOG_LIMIT);
        assert!(config.output.colored);

        std::fs::write(&path, "[output]\nverbose = true\n").unwrap();
        let config = Config::load_from_path(&path).unwrap();
        assert!(config.output.verbose);
        assert!(config.output.show_progress);
    }

    #[test]
    fn test_default_template_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("transdesk.toml");
        Config::create_default_config_file(&path).unwrap();

        let config = Config::load_from_path(&path).unwrap();
        assert_eq!(config.list.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(config.i18n.state_file, DEFAULT_STATE_FILE);
    }

    #[test]
    fn test_runtime_args_override() {
        let mut config = Config::default();
        config.apply(RuntimeArgs {
            page_size: Some(25),
            language: Some("zh".into()),
            colored: Some(false),
            ..RuntimeArgs::default()
        });

        assert_eq!(config.list.page_size, 25);
        assert_eq!(config.i18n.language, "zh");
        assert!(!config.output.colored);
        assert_eq!(config.server.base_url, DEFAULT_BASE_URL);
    }
}
