// ============================================================================
// TransDesk - 并发任务扇出
// ============================================================================
//
// 文件: src/core/fanout.rs
// 职责: 并发执行一组独立的异步任务并按提交顺序收集结果
// 边界:
//   - ✅ 并发数量控制
//   - ✅ 单个任务失败不影响其他任务
//   - ✅ 完成进度回调
//   - ❌ 不包含具体业务逻辑
//   - ❌ 不包含 UI 显示逻辑
//
// ============================================================================

use anyhow::Result;
use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinHandle;

/// 默认并发数
const DEFAULT_CONCURRENCY: usize = 4;

/// 任务执行结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskResult<T> {
    Success(T),
    Failed(String),
}

impl<T> TaskResult<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, TaskResult::Success(_))
    }
}

/// 进度回调 (completed, total)
pub type ProgressCallback = Arc<dyn Fn(usize, usize) + Send + Sync>;

/// 扇出配置
#[derive(Clone)]
pub struct FanoutConfig {
    pub max_concurrency: usize,
    pub progress_callback: Option<ProgressCallback>,
}

impl std::fmt::Debug for FanoutConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FanoutConfig")
            .field("max_concurrency", &self.max_concurrency)
            .field("has_progress_callback", &self.progress_callback.is_some())
            .finish()
    }
}

impl Default for FanoutConfig {
    fn default() -> Self {
        Self {
            max_concurrency: DEFAULT_CONCURRENCY,
            progress_callback: None,
        }
    }
}

impl FanoutConfig {
    pub fn with_progress_callback(mut self, callback: ProgressCallback) -> Self {
        self.progress_callback = Some(callback);
        self
    }
}

/// 并发执行全部任务，结果顺序与提交顺序一致
///
/// 任务 panic 时记为失败，不会中断其余任务。
pub async fn run_all<T, F>(config: &FanoutConfig, tasks: Vec<(String, F)>) -> Vec<(String, TaskResult<T>)>
where
    T: Send + 'static,
    F: Future<Output = Result<T>> + Send + 'static,
{
    if tasks.is_empty() {
        return Vec::new();
    }

    let total = tasks.len();
    let semaphore = Arc::new(Semaphore::new(config.max_concurrency.max(1)));
    let completed = Arc::new(AtomicUsize::new(0));
    tracing::debug!(total, concurrency = config.max_concurrency, "fan-out started");

    let mut handles: Vec<(String, JoinHandle<TaskResult<T>>)> = Vec::with_capacity(total);
    for (task_id, task) in tasks {
        let semaphore = Arc::clone(&semaphore);
        let completed = Arc::clone(&completed);
        let progress = config.progress_callback.clone();
        let id = task_id.clone();

        let handle = tokio::spawn(async move {
            let _permit = match semaphore.acquire_owned().await {
                Ok(permit) => permit,
                Err(_) => return TaskResult::Failed("task cancelled".to_string()),
            };

            let result = match task.await {
                Ok(value) => TaskResult::Success(value),
                Err(e) => TaskResult::Failed(e.to_string()),
            };
            tracing::debug!(task = %id, success = result.is_success(), "task finished");

            let done = completed.fetch_add(1, Ordering::SeqCst) + 1;
            if let Some(callback) = progress {
                callback(done, total);
            }
            result
        });

        handles.push((task_id, handle));
    }

    let mut results = Vec::with_capacity(total);
    for (task_id, handle) in handles {
        let result = match handle.await {
            Ok(result) => result,
            Err(e) => {
                tracing::error!(task = %task_id, error = %e, "task join failed");
                TaskResult::Failed(e.to_string())
            }
        };
        results.push((task_id, result));
    }

    tracing::debug!(
        succeeded = results.iter().filter(|(_, r)| r.is_success()).count(),
        total,
        "fan-out complete"
    );
    results
}
