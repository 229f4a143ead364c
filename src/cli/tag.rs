// ============================================================================
// TransDesk - CLI Tag 命令
// ============================================================================
//
// 文件: src/cli/tag.rs
// 职责: 标签列表、创建和删除
// 边界:
//   - ✅ 删除前显示受影响条目数并确认
//   - ❌ 不应包含校验逻辑
//
// ============================================================================

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::cli::{build_session, confirm, reported};
use crate::core::dispatcher::Command;
use crate::models::filter::TagFilter;
use crate::ui::spinner::with_spinner;
use crate::ui::summary::render_tags;
use crate::utils::logger::Logger;
use crate::{t, tf};

/// 管理标签
#[derive(Debug, Args)]
pub struct TagArgs {
    #[command(subcommand)]
    pub action: TagAction,
}

#[derive(Debug, Subcommand)]
pub enum TagAction {
    /// 列出全部标签
    List,
    /// 创建标签
    Add {
        /// 标签名
        name: String,
    },
    /// 删除标签
    Delete {
        /// 标签名
        name: String,

        /// 跳过确认
        #[arg(short, long)]
        yes: bool,
    },
}

pub async fn handle_tag(args: TagArgs) -> Result<()> {
    let session = build_session()?;

    match args.action {
        TagAction::List => {
            let tags = reported(with_spinner(t!("tag.loading"), session.refresh_tags()).await)?;
            render_tags(&tags, &TagFilter::All);
        }
        TagAction::Add { name } => {
            // 已有标签在本地拦截
            reported(session.refresh_tags().await)?;
            reported(with_spinner(t!("tag.saving"), session.execute(Command::CreateTag(name))).await)?;
        }
        TagAction::Delete { name, yes } => {
            let info = reported(session.preview_tag_deletion(&name).await)?;
            let prompt = tf!("tag.confirm_delete", name, info.translation_count);
            if !yes && !confirm(&prompt)? {
                Logger::info(t!("common.cancelled"));
                return Ok(());
            }
            reported(with_spinner(t!("tag.deleting"), session.execute(Command::DeleteTag(name))).await)?;
        }
    }

    Ok(())
}
