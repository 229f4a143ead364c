// ============================================================================
// TransDesk - CLI Locale 命令
// ============================================================================
//
// 文件: src/cli/locale.rs
// 职责: 查看和保存界面语言
//
// ============================================================================

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::i18n::translate;
use crate::models::config::Config;
use crate::models::locale::{Locale, LocaleStore};
use crate::utils::logger::Logger;
use crate::tf;

/// 界面语言
#[derive(Debug, Args)]
pub struct LocaleArgs {
    #[command(subcommand)]
    pub action: LocaleAction,
}

#[derive(Debug, Subcommand)]
pub enum LocaleAction {
    /// 显示当前界面语言
    Show,
    /// 保存界面语言
    Set {
        /// en 或 zh
        locale: String,
    },
}

pub fn handle_locale(args: LocaleArgs) -> Result<()> {
    match args.action {
        LocaleAction::Show => {
            Logger::info(tf!("locale.current", Config::get_locale()));
        }
        LocaleAction::Set { locale } => {
            let Some(locale) = Locale::parse(&locale) else {
                anyhow::bail!(tf!("locale.unsupported", locale));
            };
            let store = LocaleStore::new(Config::get_state_file());
            store.save(locale)?;
            // 用新语言确认
            Logger::success(translate(locale, "locale.saved").replacen("{}", locale.as_str(), 1));
        }
    }
    Ok(())
}
