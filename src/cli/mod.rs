// ============================================================================
// TransDesk - CLI 模块
// ============================================================================
//
// 文件: src/cli/mod.rs
// 职责: CLI 命令行接口模块入口和路由
// 边界:
//   - ✅ CLI 结构定义和命令枚举
//   - ✅ 命令行参数解析配置
//   - ✅ 命令路由分发
//   - ✅ 会话构建
//   - ❌ 不应包含具体命令实现逻辑
//   - ❌ 不应包含业务逻辑处理
//
// ============================================================================

pub mod db;
pub mod entry;
pub mod export;
pub mod init;
pub mod lang;
pub mod list;
pub mod locale;
pub mod logs;
pub mod search;
pub mod tag;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::sync::Arc;

use crate::core::dispatcher::{Session, SessionOptions};
use crate::core::error::ApiResult;
use crate::core::http::HttpApi;
use crate::models::config::{Config, RuntimeArgs};
use crate::models::locale::{Locale, LocaleStore};
use crate::tf;
use crate::ui::notify::ConsoleNotifier;
use crate::utils::colors::Colors;
use crate::utils::logger::Logger;
use db::{handle_db, DbArgs};
use entry::{handle_add, handle_delete, handle_update, AddArgs, DeleteArgs, UpdateArgs};
use export::{handle_export, ExportArgs};
use init::{handle_init, InitArgs};
use lang::{handle_lang, LangArgs};
use list::{handle_list, ListArgs};
use locale::{handle_locale, LocaleArgs};
use logs::{handle_logs, LogsArgs};
use search::{handle_search, SearchArgs};
use tag::{handle_tag, TagArgs};

/// TransDesk - Multilingual translation entry manager
#[derive(Debug, Parser)]
#[command(name = "transdesk")]
#[command(about = "Client for a multilingual translation entry server")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Global verbose mode
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Interface language for this run (en, zh)
    #[arg(short, long, global = true)]
    pub locale: Option<String>,

    /// Translation server base URL
    #[arg(short, long, global = true)]
    pub server: Option<String>,

    /// Entries per page
    #[arg(long, global = true)]
    pub page_size: Option<u32>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Disable progress spinner
    #[arg(long, global = true)]
    pub no_progress: bool,

    /// Commands
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List translation entries
    List(ListArgs),
    /// Full-text search over entries
    Search(SearchArgs),
    /// Create a translation entry
    Add(AddArgs),
    /// Replace an existing translation entry
    Update(UpdateArgs),
    /// Delete a translation entry
    Delete(DeleteArgs),
    /// Manage tags
    Tag(TagArgs),
    /// Manage active languages
    Lang(LangArgs),
    /// Manage databases
    Db(DbArgs),
    /// Show recent operation logs
    Logs(LogsArgs),
    /// Export translations to JSON files
    Export(ExportArgs),
    /// Show or persist the interface language
    Locale(LocaleArgs),
    /// Initialize configuration file
    Init(InitArgs),
}

/// 失败已经通过提示告知用户，入口只需设置退出码
#[derive(Debug, thiserror::Error)]
#[error("operation failed")]
pub struct AlreadyReported;

/// 会话操作的结果转为 CLI 结果；错误在会话内已提示
pub(crate) fn reported<T>(result: ApiResult<T>) -> Result<T> {
    result.map_err(|_| AlreadyReported.into())
}

pub async fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    // Build runtime args to override config
    let runtime_args = build_runtime_args(&cli)?;
    // Merge runtime args to global config
    Config::merge_runtime_args(runtime_args)?;

    Logger::init_tracing(Config::get_verbose());
    Colors::configure(Config::get_colored());
    tracing::debug!(server = %Config::get_base_url(), locale = %Config::get_locale(), "configuration loaded");

    match cli.command {
        Commands::List(args) => handle_list(args).await,
        Commands::Search(args) => handle_search(args).await,
        Commands::Add(args) => handle_add(args).await,
        Commands::Update(args) => handle_update(args).await,
        Commands::Delete(args) => handle_delete(args).await,
        Commands::Tag(args) => handle_tag(args).await,
        Commands::Lang(args) => handle_lang(args).await,
        Commands::Db(args) => handle_db(args).await,
        Commands::Logs(args) => handle_logs(args).await,
        Commands::Export(args) => handle_export(args).await,
        Commands::Locale(args) => handle_locale(args),
        Commands::Init(args) => handle_init(args),
    }
}

/// Build runtime args from CLI arguments
///
/// 界面语言：`--locale` 优先，其次是状态文件中保存的值。
fn build_runtime_args(cli: &Cli) -> Result<RuntimeArgs> {
    let language = match &cli.locale {
        Some(raw) => match Locale::parse(raw) {
            Some(locale) => Some(locale.as_str().to_string()),
            None => anyhow::bail!("unsupported locale `{}` (expected en or zh)", raw),
        },
        None => saved_locale(&LocaleStore::new(Config::get_state_file()))
            .map(|locale| locale.as_str().to_string()),
    };

    Ok(RuntimeArgs {
        verbose: if cli.verbose { Some(true) } else { None },
        colored: if cli.no_color { Some(false) } else { None },
        show_progress: if cli.no_progress { Some(false) } else { None },
        base_url: cli.server.clone(),
        page_size: cli.page_size.filter(|size| *size > 0),
        output_dir: None,
        language,
    })
}

/// 状态文件中保存的界面语言
///
/// 此时 tracing 尚未初始化，读取失败直接通过 Logger 提示。
fn saved_locale(store: &LocaleStore) -> Option<Locale> {
    match store.load() {
        Ok(locale) => locale,
        Err(e) => {
            Logger::warn(tf!("locale.state_unreadable", store.path().display(), e));
            None
        }
    }
}

/// 配置中的会话参数
pub(crate) fn session_options() -> SessionOptions {
    SessionOptions {
        page_size: Config::get_page_size(),
        log_limit: Config::get_log_limit(),
    }
}

/// 按当前配置创建会话
pub(crate) fn build_session() -> Result<Session<HttpApi>> {
    build_session_with(session_options())
}

pub(crate) fn build_session_with(options: SessionOptions) -> Result<Session<HttpApi>> {
    let api = HttpApi::new(&Config::get_base_url(), Config::get_timeout())?;
    Ok(Session::new(Arc::new(api), Arc::new(ConsoleNotifier), options))
}

/// 读取一行确认输入
pub(crate) fn confirm(prompt: &str) -> Result<bool> {
    use std::io::{self, Write};

    print!("{} ", prompt);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    let input = input.trim().to_lowercase();
    Ok(input == "y" || input == "yes" || input == "是" || input == "确认")
}
