// ============================================================================
// TransDesk - 数据模型模块
// ============================================================================
//
// 文件: src/models/mod.rs
// 职责: 数据模型模块入口
//
// ============================================================================

pub mod catalog;
pub mod config;
pub mod filter;
pub mod locale;
pub mod translation;
