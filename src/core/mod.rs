// ============================================================================
// TransDesk - Core 核心模块
// ============================================================================
//
// 文件: src/core/mod.rs
// 职责: 核心业务逻辑模块入口和导出
// 边界:
//   - ✅ 核心子模块导出
//   - ✅ 常用类型重新导出
//   - ❌ 不应包含具体业务实现
//   - ❌ 不应包含 CLI 相关逻辑
//   - ❌ 不应包含 UI 相关逻辑
//
// ============================================================================

pub mod client;
pub mod dispatcher;
pub mod error;
pub mod export;
pub mod fanout;
pub mod http;
pub mod sync;
pub mod validation;

// 重新导出常用类型
pub use client::{ListQuery, SearchQuery, TranslationApi};
pub use dispatcher::{Command, Resource, Session, SessionOptions};
pub use error::{ApiError, ApiResult, ValidationError};
pub use export::{ExportReport, ExportSelection, Exporter};
pub use http::HttpApi;
pub use sync::{ListController, ListSnapshot};
