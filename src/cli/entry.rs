// ============================================================================
// TransDesk - CLI 条目命令
// ============================================================================
//
// 文件: src/cli/entry.rs
// 职责: 新增、更新、删除翻译条目
// 边界:
//   - ✅ 条目参数解析（`语言=译文`）
//   - ✅ 删除确认
//   - ❌ 不应包含校验逻辑
//   - ❌ 不应包含刷新逻辑
//
// ============================================================================

use anyhow::Result;
use clap::Args;

use crate::cli::{build_session, confirm, reported};
use crate::core::dispatcher::Command;
use crate::models::translation::{EnglishId, TranslationDraft};
use crate::ui::spinner::with_spinner;
use crate::utils::logger::Logger;
use crate::{t, tf};

/// 解析 `语言=译文`
pub fn parse_translation(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((language, text)) if !language.trim().is_empty() => {
            Ok((language.trim().to_string(), text.to_string()))
        }
        _ => Err(format!("expected LANGUAGE=TEXT, got `{}`", s)),
    }
}

/// 条目内容参数，新增和更新共用
#[derive(Debug, Args)]
pub struct EntryFields {
    /// 英文原文
    pub english: String,

    /// 查找键（标识符格式，可省略）
    #[arg(short, long)]
    pub key: Option<String>,

    /// 标签
    #[arg(long)]
    pub tag: Option<String>,

    /// 译文，格式 LANGUAGE=TEXT，可重复
    #[arg(short = 't', long = "translation", value_parser = parse_translation)]
    pub translations: Vec<(String, String)>,
}

impl EntryFields {
    pub fn to_draft(&self) -> TranslationDraft {
        let mut draft = TranslationDraft::new(self.english.trim())
            .with_key(self.key.clone().unwrap_or_default())
            .with_tag(self.tag.clone().unwrap_or_default());
        for (language, text) in &self.translations {
            draft = draft.with_translation(language.clone(), text.clone());
        }
        draft
    }
}

/// 新增条目
#[derive(Debug, Args)]
pub struct AddArgs {
    #[command(flatten)]
    pub fields: EntryFields,
}

/// 更新条目：标签和译文整体替换，未给出的译文会被清空
#[derive(Debug, Args)]
pub struct UpdateArgs {
    /// 条目 ID
    pub id: EnglishId,

    #[command(flatten)]
    pub fields: EntryFields,
}

/// 删除条目
#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// 条目 ID
    pub id: EnglishId,

    /// 跳过确认
    #[arg(short, long)]
    pub yes: bool,
}

pub async fn handle_add(args: AddArgs) -> Result<()> {
    let session = build_session()?;
    let command = Command::CreateTranslation(args.fields.to_draft());
    reported(with_spinner(t!("entry.saving"), session.execute(command)).await)?;
    Ok(())
}

pub async fn handle_update(args: UpdateArgs) -> Result<()> {
    let session = build_session()?;
    let command = Command::UpdateTranslation {
        english_id: args.id,
        draft: args.fields.to_draft(),
    };
    reported(with_spinner(t!("entry.saving"), session.execute(command)).await)?;
    Ok(())
}

pub async fn handle_delete(args: DeleteArgs) -> Result<()> {
    if !args.yes && !confirm(&tf!("entry.confirm_delete", args.id))? {
        Logger::info(t!("common.cancelled"));
        return Ok(());
    }

    let session = build_session()?;
    reported(
        with_spinner(
            t!("entry.deleting"),
            session.execute(Command::DeleteTranslation(args.id)),
        )
        .await,
    )?;
    Ok(())
}
