//! 라이프사이클 관리.
//!
//! 종료 신호 전파와 OS 시그널 대기.

use tokio::sync::watch;
use tracing::{info, warn};

/// 라이프사이클 관리자
pub struct LifecycleManager {
    shutdown_tx: watch::Sender<bool>,
}

impl LifecycleManager {
    /// 새 라이프사이클 관리자 생성
    pub fn new() -> Self {
        let (tx, _) = watch::channel(false);
        Self { shutdown_tx: tx }
    }

    /// 종료 수신기
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.shutdown_tx.subscribe()
    }

    /// 종료 신호 발송 (여러 번 호출해도 한 번만 전파)
    pub fn shutdown(&self) {
        let sent = self.shutdown_tx.send_if_modified(|stopped| {
            if *stopped {
                return false;
            }
            *stopped = true;
            true
        });
        if sent {
            info!("종료 신호 발송");
        }
    }

    /// 종료 신호 발송 여부
    pub fn is_shutdown(&self) -> bool {
        *self.shutdown_tx.borrow()
    }

    /// OS 시그널 대기 (SIGINT, SIGTERM)
    pub async fn wait_for_signal(&self) {
        #[cfg(unix)]
        {
            use tokio::signal::unix::{signal, SignalKind};
            match (
                signal(SignalKind::interrupt()),
                signal(SignalKind::terminate()),
            ) {
                (Ok(mut sigint), Ok(mut sigterm)) => {
                    tokio::select! {
                        _ = sigint.recv() => {
                            info!("SIGINT 수신");
                        }
                        _ = sigterm.recv() => {
                            info!("SIGTERM 수신");
                        }
                    }
                }
                _ => {
                    warn!("시그널 핸들러 등록 실패, Ctrl+C만 대기");
                    if tokio::signal::ctrl_c().await.is_err() {
                        return;
                    }
                }
            }
        }

        #[cfg(not(unix))]
        {
            if let Err(e) = tokio::signal::ctrl_c().await {
                warn!("Ctrl+C 핸들러 등록 실패: {e}");
                return;
            }
            info!("Ctrl+C 수신");
        }

        self.shutdown();
    }
}

impl Default for LifecycleManager {
    fn default() -> Self {
        Self::new()
    }
}
