// ============================================================================
// TransDesk - CLI Db 命令
// ============================================================================
//
// 文件: src/cli/db.rs
// 职责: 数据库列表、创建和切换
//
// ============================================================================

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::cli::{build_session, reported};
use crate::core::dispatcher::Command;
use crate::ui::spinner::with_spinner;
use crate::ui::summary::render_databases;
use crate::t;

/// 管理数据库
#[derive(Debug, Args)]
pub struct DbArgs {
    #[command(subcommand)]
    pub action: DbAction,
}

#[derive(Debug, Subcommand)]
pub enum DbAction {
    /// 列出数据库
    List,
    /// 创建数据库
    Create {
        /// 数据库名（标识符格式）
        name: String,
    },
    /// 切换当前数据库
    Switch {
        /// 数据库名
        name: String,
    },
}

pub async fn handle_db(args: DbArgs) -> Result<()> {
    let session = build_session()?;

    match args.action {
        DbAction::List => {
            let list = reported(with_spinner(t!("db.loading"), session.refresh_databases()).await)?;
            render_databases(&list.databases, list.effective_current());
        }
        DbAction::Create { name } => {
            reported(with_spinner(t!("db.saving"), session.execute(Command::CreateDatabase(name))).await)?;
        }
        DbAction::Switch { name } => {
            reported(with_spinner(t!("db.switching"), session.execute(Command::SwitchDatabase(name))).await)?;
            let databases = session.databases().await;
            render_databases(&databases, session.current_database().await.as_deref());
        }
    }

    Ok(())
}
