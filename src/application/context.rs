//! 프로세스 수명 동안 공유되는 실행 컨텍스트.
//! 전역 static 대신 명시적으로 전달되며, 모든 로그 호출과 REPL 루프가 같은 핸들을 참조한다.

use std::sync::Arc;
use std::sync::atomic::{AtomicU8, Ordering};

use tokio::sync::watch;

use crate::domain::logging::LogVerbosity;

/// 설정된 출력 상세도. 읽기 위주이며 `configure`는 마지막 쓰기가 이긴다.
#[derive(Debug, Clone)]
pub struct VerbosityHandle(Arc<AtomicU8>);

impl VerbosityHandle {
    pub fn new(initial: LogVerbosity) -> Self {
        Self(Arc::new(AtomicU8::new(initial.ordinal())))
    }

    pub fn get(&self) -> LogVerbosity {
        LogVerbosity::from_ordinal(self.0.load(Ordering::Relaxed))
    }

    pub fn set(&self, verbosity: LogVerbosity) {
        self.0.store(verbosity.ordinal(), Ordering::Relaxed);
    }
}

impl Default for VerbosityHandle {
    fn default() -> Self {
        Self::new(LogVerbosity::Minimal)
    }
}

/// 협조적 취소 신호. 한 번 설정되면 되돌릴 수 없다.
#[derive(Debug, Clone)]
pub struct CancellationSignal {
    tx: Arc<watch::Sender<bool>>,
}

impl Default for CancellationSignal {
    fn default() -> Self {
        Self::new()
    }
}

impl CancellationSignal {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(false);
        Self { tx: Arc::new(tx) }
    }

    pub fn cancel(&self) {
        self.tx.send_replace(true);
    }

    pub fn is_cancelled(&self) -> bool {
        *self.tx.borrow()
    }

    /// 취소될 때까지 대기한다. 이미 취소됐으면 즉시 반환한다.
    pub async fn cancelled(&self) {
        let mut rx = self.tx.subscribe();
        // sender가 self에 살아 있으므로 wait_for는 닫힘 오류를 내지 않는다.
        let _ = rx.wait_for(|cancelled| *cancelled).await;
    }
}

/// 디스패처/REPL/로거가 공유하는 컨텍스트 묶음.
#[derive(Debug, Clone, Default)]
pub struct AppContext {
    pub verbosity: VerbosityHandle,
    pub cancellation: CancellationSignal,
}

impl AppContext {
    pub fn new(verbosity: LogVerbosity) -> Self {
        Self {
            verbosity: VerbosityHandle::new(verbosity),
            cancellation: CancellationSignal::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn verbosity_is_shared_between_clones() {
        let handle = VerbosityHandle::new(LogVerbosity::Normal);
        let other = handle.clone();
        other.set(LogVerbosity::Verbose);
        assert_eq!(handle.get(), LogVerbosity::Verbose);
    }

    #[tokio::test]
    async fn cancelled_resolves_after_cancel() {
        let signal = CancellationSignal::new();
        let waiter = {
            let signal = signal.clone();
            tokio::spawn(async move { signal.cancelled().await })
        };

        assert!(!signal.is_cancelled());
        signal.cancel();

        tokio::time::timeout(Duration::from_secs(1), waiter)
            .await
            .expect("waiter finishes")
            .expect("task joins");
        assert!(signal.is_cancelled());
    }

    #[tokio::test]
    async fn cancelled_returns_immediately_when_already_set() {
        let signal = CancellationSignal::new();
        signal.cancel();
        tokio::time::timeout(Duration::from_millis(100), signal.cancelled())
            .await
            .expect("already cancelled");
    }
}
