// ============================================================================
// TransDesk - 用户提示
// ============================================================================
//
// 文件: src/ui/notify.rs
// 职责: 面向用户的短暂提示
// 边界:
//   - ✅ 提示级别和提示内容定义
//   - ✅ 控制台提示实现
//   - ✅ 内存记录实现（供嵌入方和测试读取）
//   - ❌ 不应包含提示文本的生成
//
// ============================================================================

use std::sync::Mutex;

use crate::ui::spinner::suspend_active;
use crate::utils::logger::Logger;

/// 提示级别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Info,
    Warning,
    Error,
}

/// 一条用户提示
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Success, message: message.into() }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Info, message: message.into() }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Warning, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Error, message: message.into() }
    }
}

/// 提示的接收方
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}

/// 输出到控制台，输出期间暂停正在显示的 spinner
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notice: Notice) {
        suspend_active(|| match notice.level {
            NoticeLevel::Success => Logger::success(notice.message),
            NoticeLevel::Info => Logger::info(notice.message),
            NoticeLevel::Warning => Logger::warn(notice.message),
            NoticeLevel::Error => Logger::error(notice.message),
        })
    }
}

/// 记录到内存
#[derive(Debug, Default)]
pub struct MemoryNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// 已记录的提示快照
    pub fn notices(&self) -> Vec<Notice> {
        self.notices
            .lock()
            .map(|notices| notices.clone())
            .unwrap_or_default()
    }

    /// 指定级别的提示文本
    pub fn messages(&self, level: NoticeLevel) -> Vec<String> {
        self.notices()
            .into_iter()
            .filter(|notice| notice.level == level)
            .map(|notice| notice.message)
            .collect()
    }

    pub fn clear(&self) {
        if let Ok(mut notices) = self.notices.lock() {
            notices.clear();
        }
    }
}

impl Notifier for MemoryNotifier {
    fn notify(&self, notice: Notice) {
        if let Ok(mut notices) = self.notices.lock() {
            notices.push(notice);
        }
    }
}
