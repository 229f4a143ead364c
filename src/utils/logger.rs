// ============================================================================
// TransDesk - 日志工具
// ============================================================================
//
// 文件: src/utils/logger.rs
// 职责: 面向用户的控制台输出
// 边界:
//   - ✅ 日志级别前缀和格式化输出
//   - ✅ 日志初始化配置 (tracing)
//   - ❌ 不应包含业务逻辑
//   - ❌ 不应包含文件日志写入
//
// ============================================================================

use tracing_subscriber::EnvFilter;

use super::colors::Colors;
use super::constants::LOG_PREFIX;

/// 简单的日志工具
pub struct Logger;

impl Logger {
    pub fn info<S: AsRef<str>>(msg: S) {
        println!("{} {}", Colors::info(LOG_PREFIX), msg.as_ref());
    }

    pub fn warn<S: AsRef<str>>(msg: S) {
        println!("{} {}", Colors::warn("[WARN]"), msg.as_ref());
    }

    pub fn error<S: AsRef<str>>(msg: S) {
        eprintln!("{} {}", Colors::error("[ERROR]"), msg.as_ref());
    }

    pub fn success<S: AsRef<str>>(msg: S) {
        println!("{} {}", Colors::success(LOG_PREFIX), msg.as_ref());
    }

    /// 不带前缀的原样输出，用于表格等结构化内容
    pub fn plain<S: AsRef<str>>(msg: S) {
        println!("{}", msg.as_ref());
    }

    /// 初始化开发者追踪日志
    ///
    /// `RUST_LOG` 优先；否则 verbose 时为 debug，默认 warn。
    pub fn init_tracing(verbose: bool) {
        let fallback = if verbose { "transdesk=debug" } else { "warn" };
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

        // 重复初始化时忽略错误
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    }
}
