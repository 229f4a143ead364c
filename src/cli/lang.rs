// ============================================================================
// TransDesk - CLI Lang 命令
// ============================================================================
//
// 文件: src/cli/lang.rs
// 职责: 激活语言的查看、切换和移除
// 边界:
//   - ✅ 切换时根据当前状态决定开关
//   - ❌ 不应包含校验逻辑
//
// ============================================================================

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::cli::{build_session, confirm, reported};
use crate::core::dispatcher::Command;
use crate::models::catalog::language_display_name;
use crate::models::config::Config;
use crate::ui::spinner::with_spinner;
use crate::ui::summary::render_languages;
use crate::utils::logger::Logger;
use crate::{t, tf};

/// 管理激活语言
#[derive(Debug, Args)]
pub struct LangArgs {
    #[command(subcommand)]
    pub action: LangAction,
}

#[derive(Debug, Subcommand)]
pub enum LangAction {
    /// 列出语言目录和激活状态
    List,
    /// 切换语言的激活状态
    Toggle {
        /// 语言代码
        language: String,

        /// 强制激活
        #[arg(long, conflicts_with = "off")]
        on: bool,

        /// 强制停用
        #[arg(long)]
        off: bool,
    },
    /// 移除语言
    Remove {
        /// 语言代码
        language: String,

        /// 跳过确认
        #[arg(short, long)]
        yes: bool,
    },
}

/// 目标激活状态：显式开关优先，否则取反
fn target_state(currently_active: bool, on: bool, off: bool) -> bool {
    if on {
        true
    } else if off {
        false
    } else {
        !currently_active
    }
}

pub async fn handle_lang(args: LangArgs) -> Result<()> {
    let session = build_session()?;
    let locale = Config::get_locale();

    match args.action {
        LangAction::List => {
            let active = reported(with_spinner(t!("lang.loading"), session.refresh_languages()).await)?;
            render_languages(&active, locale);
        }
        LangAction::Toggle { language, on, off } => {
            let active = reported(session.refresh_languages().await)?;
            let currently_active = active.iter().any(|code| code == &language);
            let command = Command::ToggleLanguage {
                active: target_state(currently_active, on, off),
                language,
            };
            reported(with_spinner(t!("lang.saving"), session.execute(command)).await)?;
        }
        LangAction::Remove { language, yes } => {
            let prompt = tf!("lang.confirm_remove", language_display_name(&language, locale));
            if !yes && !confirm(&prompt)? {
                Logger::info(t!("common.cancelled"));
                return Ok(());
            }
            reported(
                with_spinner(t!("lang.saving"), session.execute(Command::RemoveLanguage(language)))
                    .await,
            )?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_state() {
        assert!(!target_state(true, false, false));
        assert!(target_state(false, false, false));
        assert!(target_state(true, true, false));
        assert!(!target_state(false, false, true));
    }
}
