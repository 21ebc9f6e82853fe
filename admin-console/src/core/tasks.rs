//! 控制台后台任务
//!
//! 时钟、订单轮询、存储变更监听和顾客模拟器都在这里登记，
//! 共用一个取消令牌，退出时一起停止。

use futures::FutureExt;
use std::any::Any;
use std::fmt;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    /// 顾客模拟器
    Worker,
    /// 存储变更监听
    Listener,
    /// 时钟 / 订单轮询
    Periodic,
}

impl TaskKind {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Worker => "worker",
            Self::Listener => "listener",
            Self::Periodic => "periodic",
        }
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

struct ConsoleTask {
    name: &'static str,
    kind: TaskKind,
    handle: JoinHandle<()>,
}

/// Tasks feeding the console event channel
///
/// A task must stop on its own once [`shutdown_token`](Self::shutdown_token)
/// is cancelled; a panic inside it is logged and does not take the console down.
pub struct BackgroundTasks {
    tasks: Vec<ConsoleTask>,
    cancel: CancellationToken,
}

impl BackgroundTasks {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            cancel: CancellationToken::new(),
        }
    }

    pub fn shutdown_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    pub fn spawn<F>(&mut self, name: &'static str, kind: TaskKind, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let cancel = self.cancel.clone();
        let handle = tokio::spawn(async move {
            match AssertUnwindSafe(task).catch_unwind().await {
                Ok(()) if cancel.is_cancelled() => {}
                Ok(()) => tracing::warn!(task = name, %kind, "Console task stopped before shutdown"),
                Err(panic) => {
                    tracing::error!(task = name, %kind, panic = %panic_message(&*panic), "Console task panicked")
                }
            }
        });
        tracing::debug!(task = name, %kind, "Console task started");
        self.tasks.push(ConsoleTask { name, kind, handle });
    }

    fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn log_summary(&self) {
        let count = |kind: TaskKind| self.tasks.iter().filter(|t| t.kind == kind).count();
        tracing::info!(
            total = self.len(),
            simulator = count(TaskKind::Worker),
            listeners = count(TaskKind::Listener),
            periodic = count(TaskKind::Periodic),
            "Console tasks running"
        );
    }

    /// Number of tasks that already ended, each one logged
    pub fn check_health(&self) -> usize {
        let mut ended = 0;
        for task in self.tasks.iter().filter(|t| t.handle.is_finished()) {
            tracing::error!(task = task.name, kind = %task.kind, "Console task ended early");
            ended += 1;
        }
        ended
    }

    /// 取消所有任务并等待它们结束
    pub async fn shutdown(self) {
        tracing::info!(count = self.tasks.len(), "Stopping console tasks");
        self.cancel.cancel();
        for task in self.tasks {
            if let Err(e) = task.handle.await
                && !e.is_cancelled()
            {
                tracing::error!(task = task.name, error = ?e, "Console task failed to join");
            }
        }
    }
}

impl Default for BackgroundTasks {
    fn default() -> Self {
        Self::new()
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_shutdown_stops_cancellable_tasks() {
        let mut tasks = BackgroundTasks::new();
        let token = tasks.shutdown_token();
        tasks.spawn("sync_listener", TaskKind::Listener, async move {
            token.cancelled().await;
        });
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks.check_health(), 0);

        tokio::time::timeout(Duration::from_secs(1), tasks.shutdown())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_panicking_simulator_is_contained() {
        let mut tasks = BackgroundTasks::new();
        tasks.spawn("customer_simulator", TaskKind::Worker, async {
            panic!("no menu");
        });
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(tasks.check_health(), 1);
        tasks.shutdown().await;
    }

    #[test]
    fn test_panic_message_from_payload() {
        let owned: Box<dyn Any + Send> = Box::new(String::from("bad order"));
        assert_eq!(panic_message(&*owned), "bad order");
        let other: Box<dyn Any + Send> = Box::new(7u8);
        assert_eq!(panic_message(&*other), "unknown panic");
    }
}
