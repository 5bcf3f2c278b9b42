//! 关闭信号处理
//!
//! 监听 Ctrl+C 和 SIGTERM，并通过 `watch` 通道把关闭请求传递给工作循环。

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::info;

use crate::error::{InfraError, Result};

/// 创建关闭通知通道，初始值为 `false`
pub fn shutdown_channel() -> (watch::Sender<bool>, watch::Receiver<bool>) {
    watch::channel(false)
}

/// 已注册的关闭信号
///
/// `register` 返回后信号处理器即已生效，之后到达的 SIGINT/SIGTERM
/// 不会再按默认行为终止进程。
pub struct ShutdownSignal {
    #[cfg(unix)]
    interrupt: tokio::signal::unix::Signal,
    #[cfg(unix)]
    terminate: tokio::signal::unix::Signal,
}

impl ShutdownSignal {
    /// 立即注册 SIGINT 和 SIGTERM 处理器，需在 tokio 运行时内调用
    #[cfg(unix)]
    pub fn register() -> Result<Self> {
        use tokio::signal::unix::{SignalKind, signal};

        Ok(Self {
            interrupt: signal(SignalKind::interrupt()).map_err(InfraError::Signal)?,
            terminate: signal(SignalKind::terminate()).map_err(InfraError::Signal)?,
        })
    }

    #[cfg(not(unix))]
    pub fn register() -> Result<Self> {
        Ok(Self {})
    }

    /// 等待任一关闭信号
    #[cfg(unix)]
    pub async fn recv(mut self) {
        tokio::select! {
            _ = self.interrupt.recv() => {
                info!("Received Ctrl+C, starting graceful shutdown...");
            }
            _ = self.terminate.recv() => {
                info!("Received SIGTERM, starting graceful shutdown...");
            }
        }
    }

    #[cfg(not(unix))]
    pub async fn recv(self) {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, starting graceful shutdown...");
    }
}

/// 注册信号处理器，并在后台等待关闭信号，收到后向通道发布 `true`
///
/// 处理器在返回前注册完成，因此调用之后的信号不会丢失。
pub fn spawn_signal_listener(tx: watch::Sender<bool>) -> Result<JoinHandle<()>> {
    let signal = ShutdownSignal::register()?;

    Ok(tokio::spawn(async move {
        signal.recv().await;
        // 接收端已全部退出时无需通知
        let _ = tx.send(true);
    }))
}
