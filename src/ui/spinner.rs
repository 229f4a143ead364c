// ============================================================================
// TransDesk - Spinner 加载动画组件
// ============================================================================
//
// 文件: src/ui/spinner.rs
// 职责: 网络等待期间的终端加载动画
// 边界:
//   - ✅ 加载动画显示和控制
//   - ✅ 非终端或关闭进度时静默
//   - ✅ 其他输出期间暂停动画
//   - ❌ 不应包含业务逻辑
//   - ❌ 不应包含网络请求
//
// ============================================================================

use indicatif::{ProgressBar, ProgressStyle};
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use crate::models::config::Config;
use crate::utils::constants::spinner_chars;

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

/// 正在显示的 spinner，最后创建的在末尾
static ACTIVE: Mutex<Vec<(u64, ProgressBar)>> = Mutex::new(Vec::new());

/// Spinner 加载动画组件
pub struct Spinner {
    id: u64,
    bar: ProgressBar,
}

impl Spinner {
    /// 按配置创建；关闭进度或 stderr 不是终端时返回隐藏的 spinner
    pub fn new(message: impl Into<String>) -> Self {
        let enabled = Config::get_show_progress() && atty::is(atty::Stream::Stderr);
        Self::with_visibility(message, enabled)
    }

    pub fn with_visibility(message: impl Into<String>, visible: bool) -> Self {
        let bar = if visible {
            ProgressBar::new_spinner()
        } else {
            ProgressBar::hidden()
        };

        if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
            bar.set_style(style.tick_chars(spinner_chars::BASE));
        }
        bar.set_message(message.into());
        bar.enable_steady_tick(Duration::from_millis(100));

        let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
        if let Ok(mut active) = ACTIVE.lock() {
            active.push((id, bar.clone()));
        }

        Self { id, bar }
    }

    /// 更新提示文本
    pub fn update_message(&self, message: impl Into<String>) {
        self.bar.set_message(message.into());
    }

    /// 停止并清除动画行
    pub fn finish(&self) {
        self.unregister();
        self.bar.finish_and_clear();
    }

    pub fn is_hidden(&self) -> bool {
        self.bar.is_hidden()
    }

    /// 是否仍在活动列表中
    pub fn is_active(&self) -> bool {
        ACTIVE
            .lock()
            .map(|active| active.iter().any(|(id, _)| *id == self.id))
            .unwrap_or(false)
    }

    fn unregister(&self) {
        if let Ok(mut active) = ACTIVE.lock() {
            active.retain(|(id, _)| *id != self.id);
        }
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.unregister();
        if !self.bar.is_finished() {
            self.bar.finish_and_clear();
        }
    }
}

/// 暂停当前 spinner 执行输出，结束后重绘动画行
///
/// 没有活动 spinner 时直接执行。
pub fn suspend_active<F, R>(f: F) -> R
where
    F: FnOnce() -> R,
{
    let bar = ACTIVE
        .lock()
        .ok()
        .and_then(|active| active.last().map(|(_, bar)| bar.clone()));

    // 锁已释放，f 内部可以再创建或结束 spinner
    match bar {
        Some(bar) => bar.suspend(f),
        None => f(),
    }
}

/// 在 spinner 下等待一个 future
pub async fn with_spinner<F, T>(message: impl Into<String>, future: F) -> T
where
    F: Future<Output = T>,
{
    let spinner = Spinner::new(message);
    let output = future.await;
    spinner.finish();
    output
}
