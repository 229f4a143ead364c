// ============================================================================
// TransDesk - 常量定义
// ============================================================================
//
// 文件: src/utils/constants.rs
// 职责: 应用程序常量定义
// 边界:
//   - ✅ 应用程序常量定义
//   - ✅ 图标字符定义
//   - ✅ 默认值常量
//   - ❌ 不应包含动态配置
//   - ❌ 不应包含业务逻辑
//
// ============================================================================

/// 应用名称常量
pub const APP_NAME: &str = "TRANSDESK";

/// 日志前缀
pub const LOG_PREFIX: &str = "[TRANSDESK]";

/// 配置文件名
pub const CONFIG_FILE_NAME: &str = "transdesk.toml";

/// 界面语言状态文件的默认路径
pub const DEFAULT_STATE_FILE: &str = ".transdesk-state.toml";

/// 界面语言持久化使用的固定键
pub const LOCALE_KEY: &str = "app_locale";

/// 默认后端地址
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// 默认分页大小
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// 默认操作日志条数
pub const DEFAULT_LOG_LIMIT: u32 = 10;

/// 数据库文件后缀
pub const DATABASE_SUFFIX: &str = ".db";

/// 终端图标
pub mod icons {
    /// 成功图标
    pub const SUCCESS: &str = "✓";
    /// 错误图标
    pub const ERROR: &str = "✗";
    /// 警告图标
    pub const WARNING: &str = "!";
    /// 条目图标
    pub const ENTRY: &str = "●";
    /// 标签图标
    pub const TAG: &str = "◆";
    /// 语言图标
    pub const LANGUAGE: &str = "◇";
    /// 数据库图标
    pub const DATABASE: &str = "▪";
    /// 当前项图标
    pub const CURRENT: &str = "◉";
    /// 非当前项图标
    pub const OTHER: &str = "○";
    /// 日志图标
    pub const LOG: &str = "▸";
    /// 缺失翻译占位
    pub const MISSING: &str = "—";
    /// 汇总图标
    pub const SUMMARY: &str = "◈";
}

/// 加载 spinner 字符
pub mod spinner_chars {
    pub const BASE: &str = "⠋⠙⠹⠸⠼⠴⠦⠧ ";
}
