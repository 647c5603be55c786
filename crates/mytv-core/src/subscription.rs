//! 구독 해제 핸들.
//!
//! 원격 설정/내비게이션 구독은 모두 이 핸들로 반환된다.
//! `unsubscribe`는 멱등이며, 명시적으로 해제하지 않은 핸들은 drop 시 해제된다.

use parking_lot::Mutex;
use std::fmt;

type ReleaseFn = Box<dyn FnOnce() + Send>;

/// 구독 핸들
pub struct Subscription {
    label: &'static str,
    release: Mutex<Option<ReleaseFn>>,
}

impl Subscription {
    /// 해제 동작을 가진 핸들 생성
    pub fn new<F>(label: &'static str, release: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        Self {
            label,
            release: Mutex::new(Some(Box::new(release))),
        }
    }

    /// 해제할 것이 없는 핸들 (구독 실패 경로 등)
    pub fn noop(label: &'static str) -> Self {
        Self {
            label,
            release: Mutex::new(None),
        }
    }

    /// 구독 해제. 두 번째 호출부터는 아무 일도 하지 않는다.
    pub fn unsubscribe(&self) {
        let release = self.release.lock().take();
        if let Some(release) = release {
            tracing::debug!("구독 해제: {}", self.label);
            release();
        }
    }

    /// 아직 해제되지 않았는지 여부
    pub fn is_active(&self) -> bool {
        self.release.lock().is_some()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("label", &self.label)
            .field("active", &self.is_active())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn unsubscribe_is_idempotent() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let sub = Subscription::new("test", move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        assert!(sub.is_active());
        sub.unsubscribe();
        sub.unsubscribe();
        assert!(!sub.is_active());
        drop(sub);

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn drop_releases() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        {
            let _sub = Subscription::new("test", move || {
                counter.fetch_add(1, Ordering::SeqCst);
            });
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn noop_is_inactive() {
        let sub = Subscription::noop("none");
        assert!(!sub.is_active());
        sub.unsubscribe();
    }
}
