#![allow(clippy::unwrap_used)]

mod common;

use std::sync::Arc;

use common::{harness, harness_with, FakeApi};
use transdesk::core::dispatcher::Command;
use transdesk::core::error::{ApiError, ValidationError};
use transdesk::models::filter::TagFilter;
use transdesk::models::translation::TranslationDraft;
use transdesk::t;
use transdesk::ui::notify::NoticeLevel;

fn hello_draft() -> TranslationDraft {
    TranslationDraft::new("Hello")
        .with_key("greet_hello")
        .with_tag("greeting")
        .with_translation("chinese", "你好")
}

#[tokio::test]
async fn test_initialize_defaults_to_server_database() {
    let api = Arc::new(FakeApi::new());
    api.set_current_database("shop.db");
    api.seed(2, None);
    let h = harness_with(api, 10);

    h.session.initialize().await.unwrap();

    assert_eq!(h.session.current_database().await.as_deref(), Some("shop.db"));
    let snapshot = h.session.list().snapshot().await;
    assert_eq!(snapshot.filters.database.as_deref(), Some("shop.db"));
    assert_eq!(snapshot.translations.len(), 2);
    assert_eq!(h.session.languages().await, vec!["english", "chinese", "thai"]);
    assert_eq!(h.session.databases().await.len(), 2);
}

#[tokio::test]
async fn test_created_entry_appears_after_refetch() {
    let h = harness(10);
    h.session.initialize().await.unwrap();

    h.session
        .execute(Command::CreateTranslation(hello_draft()))
        .await
        .unwrap();

    let snapshot = h.session.list().snapshot().await;
    let record = snapshot
        .translations
        .iter()
        .find(|r| r.english == "Hello")
        .unwrap();
    assert!(record.english_id > 0);
    assert_eq!(record.lookup_key(), Some("greet_hello"));
    assert_eq!(record.primary_tag(), Some("greeting"));
    assert_eq!(record.translation("chinese"), Some("你好"));

    assert!(h.session.tags().await.contains(&"greeting".to_string()));
    assert_eq!(h.session.logs().await[0].operation_type, "新增");
    assert_eq!(
        h.notifier.messages(NoticeLevel::Success),
        vec![t!("notice.add_success")]
    );
}

#[tokio::test]
async fn test_update_replaces_entry() {
    let api = Arc::new(FakeApi::new());
    let ids = api.seed(1, Some("menu"));
    let h = harness_with(api, 10);
    h.session.initialize().await.unwrap();

    let draft = TranslationDraft::new("Goodbye").with_translation("thai", "ลาก่อน");
    h.session
        .execute(Command::UpdateTranslation { english_id: ids[0], draft })
        .await
        .unwrap();

    let snapshot = h.session.list().snapshot().await;
    let record = &snapshot.translations[0];
    assert_eq!(record.english, "Goodbye");
    assert_eq!(record.primary_tag(), None);
    assert_eq!(record.translation("thai"), Some("ลาก่อน"));
    assert_eq!(record.translation("chinese"), None);
}

#[tokio::test]
async fn test_refetch_follows_invalidation_table() {
    let api = Arc::new(FakeApi::new());
    let ids = api.seed(3, None);
    let h = harness_with(Arc::clone(&api), 10);
    h.session.initialize().await.unwrap();

    api.reset_calls();
    h.session
        .execute(Command::CreateTranslation(hello_draft()))
        .await
        .unwrap();
    assert_eq!(api.calls("create_translation"), 1);
    assert_eq!(api.calls("translations"), 1);
    assert_eq!(api.calls("tags"), 1);
    assert_eq!(api.calls("logs"), 1);
    assert_eq!(api.calls("languages"), 0);
    assert_eq!(api.calls("databases"), 0);

    api.reset_calls();
    h.session
        .execute(Command::DeleteTranslation(ids[0]))
        .await
        .unwrap();
    assert_eq!(api.calls("translations"), 1);
    assert_eq!(api.calls("logs"), 1);
    assert_eq!(api.calls("tags"), 0);

    api.reset_calls();
    h.session
        .execute(Command::CreateTag("menu".into()))
        .await
        .unwrap();
    assert_eq!(api.calls("tags"), 1);
    assert_eq!(api.calls("logs"), 1);
    assert_eq!(api.calls("translations"), 0);

    api.reset_calls();
    h.session
        .execute(Command::ToggleLanguage { language: "thai".into(), active: false })
        .await
        .unwrap();
    assert_eq!(api.calls("languages"), 1);
    assert_eq!(api.total_calls(), 2);
    assert_eq!(h.session.languages().await, vec!["english", "chinese"]);

    api.reset_calls();
    h.session
        .execute(Command::CreateDatabase("archive".into()))
        .await
        .unwrap();
    assert_eq!(api.calls("databases"), 1);
    assert_eq!(api.total_calls(), 2);
}

#[tokio::test]
async fn test_switch_database_refetches_everything_once() {
    let api = Arc::new(FakeApi::new());
    api.seed(2, Some("menu"));
    let h = harness_with(Arc::clone(&api), 10);
    h.session.initialize().await.unwrap();
    h.session
        .list()
        .set_tag(TagFilter::Named("menu".into()))
        .await
        .unwrap();

    api.reset_calls();
    h.session
        .execute(Command::SwitchDatabase("shop".into()))
        .await
        .unwrap();

    assert_eq!(api.server_current_database(), "shop.db");
    assert_eq!(api.calls("switch_database"), 1);
    assert_eq!(api.calls("translations"), 1);
    assert_eq!(api.calls("tags"), 1);
    assert_eq!(api.calls("logs"), 1);
    assert_eq!(api.calls("languages"), 1);
    assert_eq!(api.calls("databases"), 1);

    let snapshot = h.session.list().snapshot().await;
    assert_eq!(snapshot.filters.tag, TagFilter::All);
    assert!(snapshot.translations.is_empty());
    assert!(h.session.tags().await.is_empty());
    // 去掉后缀的名称映射到列表中的文件名
    assert_eq!(snapshot.filters.database.as_deref(), Some("shop.db"));
    assert_eq!(h.session.current_database().await.as_deref(), Some("shop.db"));
    // 服务端文本优先
    assert_eq!(
        h.notifier.messages(NoticeLevel::Success),
        vec!["已切换到数据库 shop.db".to_string()]
    );
}

#[tokio::test]
async fn test_switch_to_listed_database_name() {
    let api = Arc::new(FakeApi::new());
    let h = harness_with(Arc::clone(&api), 10);
    h.session.initialize().await.unwrap();

    let target = h
        .session
        .databases()
        .await
        .into_iter()
        .find(|name| name != "default.db")
        .unwrap();
    h.session
        .execute(Command::SwitchDatabase(target.clone()))
        .await
        .unwrap();

    assert_eq!(api.server_current_database(), target);
    assert_eq!(h.session.current_database().await, Some(target.clone()));
    assert_eq!(
        h.session.list().snapshot().await.filters.database,
        Some(target)
    );
}

#[tokio::test]
async fn test_unknown_database_is_rejected_before_switch() {
    let api = Arc::new(FakeApi::new());
    let h = harness_with(Arc::clone(&api), 10);
    h.session.initialize().await.unwrap();
    api.reset_calls();

    let err = h
        .session
        .execute(Command::SwitchDatabase("missing".into()))
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Validation(ValidationError::UnknownDatabase(_))));
    // 缓存中没有时只刷新一次列表
    assert_eq!(api.calls("databases"), 1);
    assert_eq!(api.calls("switch_database"), 0);
    assert_eq!(h.notifier.messages(NoticeLevel::Warning).len(), 1);
    assert_eq!(h.session.current_database().await.as_deref(), Some("default.db"));
}

#[tokio::test]
async fn test_delete_tag_created_by_another_client() {
    let api = Arc::new(FakeApi::new());
    api.seed(2, Some("New-Year"));
    let h = harness_with(Arc::clone(&api), 10);
    h.session.initialize().await.unwrap();

    let info = h.session.preview_tag_deletion("New-Year").await.unwrap();
    assert_eq!(info.translation_count, 2);

    h.session
        .execute(Command::DeleteTag("New-Year".into()))
        .await
        .unwrap();

    assert_eq!(api.calls("delete_tag"), 1);
    assert!(api.server_tags().is_empty());
    assert!(h.session.tags().await.is_empty());
}

#[tokio::test]
async fn test_delete_unknown_tag_sends_nothing() {
    let api = Arc::new(FakeApi::new());
    let h = harness_with(Arc::clone(&api), 10);
    h.session.initialize().await.unwrap();
    api.reset_calls();

    let err = h
        .session
        .execute(Command::DeleteTag("ghost".into()))
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Validation(ValidationError::UnknownTag(_))));
    assert_eq!(api.calls("tags"), 1);
    assert_eq!(api.calls("delete_tag"), 0);
}

#[tokio::test]
async fn test_delete_tag_with_cold_cache_refreshes_tags() {
    let api = Arc::new(FakeApi::new());
    api.seed(1, Some("menu"));
    let h = harness_with(Arc::clone(&api), 10);

    let info = h.session.preview_tag_deletion("menu").await.unwrap();

    assert_eq!(info.translation_count, 1);
    assert_eq!(api.calls("tags"), 1);
}

#[tokio::test]
async fn test_deleting_active_tag_resets_filter() {
    let api = Arc::new(FakeApi::new());
    api.seed(3, Some("menu"));
    api.seed(2, None);
    let h = harness_with(Arc::clone(&api), 10);
    h.session.initialize().await.unwrap();
    h.session
        .list()
        .set_tag(TagFilter::Named("menu".into()))
        .await
        .unwrap();
    assert_eq!(h.session.list().snapshot().await.translations.len(), 3);

    let info = h.session.preview_tag_deletion("menu").await.unwrap();
    assert_eq!(info.translation_count, 3);

    h.session
        .execute(Command::DeleteTag("menu".into()))
        .await
        .unwrap();

    let snapshot = h.session.list().snapshot().await;
    assert_eq!(snapshot.filters.tag, TagFilter::All);
    assert_eq!(snapshot.translations.len(), 5);
    assert!(snapshot.translations.iter().all(|r| r.primary_tag().is_none()));
    assert!(!h.session.tags().await.contains(&"menu".to_string()));
    assert_eq!(h.session.logs().await[0].operation_type, "删除标签");
}

#[tokio::test]
async fn test_deleting_other_tag_keeps_filter() {
    let api = Arc::new(FakeApi::new());
    api.seed(2, Some("menu"));
    api.seed(1, Some("footer"));
    let h = harness_with(Arc::clone(&api), 10);
    h.session.initialize().await.unwrap();
    h.session
        .list()
        .set_tag(TagFilter::Named("menu".into()))
        .await
        .unwrap();

    h.session
        .execute(Command::DeleteTag("footer".into()))
        .await
        .unwrap();

    let snapshot = h.session.list().snapshot().await;
    assert_eq!(snapshot.filters.tag, TagFilter::Named("menu".into()));
    assert_eq!(snapshot.translations.len(), 2);
}

#[tokio::test]
async fn test_invalid_input_sends_nothing() {
    let api = Arc::new(FakeApi::new());
    let h = harness_with(Arc::clone(&api), 10);
    h.session.initialize().await.unwrap();
    api.reset_calls();

    let err = h
        .session
        .execute(Command::CreateTranslation(TranslationDraft::new("   ")))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Validation(ValidationError::EmptyEnglish)));

    let err = h
        .session
        .execute(Command::CreateTranslation(TranslationDraft::new("Hi").with_key("1abc")))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Validation(ValidationError::InvalidKey(_))));

    let err = h
        .session
        .execute(Command::DeleteTranslation(0))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Validation(ValidationError::InvalidId(0))));

    let err = h
        .session
        .execute(Command::RemoveLanguage("english".into()))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Validation(ValidationError::SourceLanguageLocked)));

    assert_eq!(api.total_calls(), 0);
    let warnings = h.notifier.messages(NoticeLevel::Warning);
    assert_eq!(warnings.len(), 4);
    assert_eq!(warnings[0], t!("validation.english_required"));
    assert!(h.notifier.messages(NoticeLevel::Success).is_empty());
}

#[tokio::test]
async fn test_known_duplicate_tag_is_rejected_locally() {
    let api = Arc::new(FakeApi::new());
    api.seed(1, Some("menu"));
    let h = harness_with(Arc::clone(&api), 10);
    h.session.initialize().await.unwrap();
    api.reset_calls();

    let err = h
        .session
        .execute(Command::CreateTag("menu".into()))
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Validation(ValidationError::TagExists(_))));
    assert_eq!(api.total_calls(), 0);
    assert_eq!(h.notifier.messages(NoticeLevel::Warning).len(), 1);
}

#[tokio::test]
async fn test_server_rejection_is_shown_verbatim() {
    let api = Arc::new(FakeApi::new());
    let h = harness_with(Arc::clone(&api), 10);
    h.session.initialize().await.unwrap();
    api.reset_calls();

    let err = h
        .session
        .execute(Command::CreateDatabase("shop".into()))
        .await
        .unwrap_err();

    assert_eq!(err.server_message(), Some("数据库 shop 已存在"));
    assert_eq!(
        h.notifier.messages(NoticeLevel::Error),
        vec!["数据库 shop 已存在".to_string()]
    );
    // 失败不触发刷新
    assert_eq!(api.total_calls(), 1);
    assert_eq!(h.session.databases().await.len(), 2);
}

#[tokio::test]
async fn test_refetch_failure_does_not_fail_command() {
    let api = Arc::new(FakeApi::new());
    let h = harness_with(Arc::clone(&api), 10);
    h.session.initialize().await.unwrap();

    api.fail_lists(true);
    let ack = h
        .session
        .execute(Command::CreateTranslation(TranslationDraft::new("Menu")))
        .await;

    assert!(ack.is_ok());
    assert_eq!(
        h.notifier.messages(NoticeLevel::Error),
        vec![t!("notice.get_translations_failed")]
    );
    assert!(h.session.tags().await.is_empty());
    assert_eq!(h.session.logs().await.len(), 1);
}
