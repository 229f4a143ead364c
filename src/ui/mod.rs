// ============================================================================
// TransDesk - UI 模块
// ============================================================================
//
// 文件: src/ui/mod.rs
// 职责: 终端显示组件入口
//
// ============================================================================

pub mod notify;
pub mod spinner;
pub mod summary;
pub mod table;
