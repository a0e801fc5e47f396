//! Graceful Shutdown

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use tokio::sync::Notify;
use tracing::info;

/// Shutdown 控制器
#[derive(Clone)]
pub struct ShutdownController {
    notify: Arc<Notify>,
}

impl ShutdownController {
    pub fn new() -> Self {
        Self {
            notify: Arc::new(Notify::new()),
        }
    }

    /// 触发关闭
    pub fn shutdown(&self) {
        info!("Triggering shutdown");
        self.notify.notify_waiters();
    }

    /// 等待关闭信号
    ///
    /// 只有在 `shutdown` 调用之前创建的 future 会被唤醒。
    pub fn wait(&self) -> Pin<Box<dyn Future<Output = ()> + Send + '_>> {
        Box::pin(self.notify.notified())
    }
}

impl Default for ShutdownController {
    fn default() -> Self {
        Self::new()
    }
}
