//! 인프로세스 push 소스.
//!
//! `RemoteConfigSource`, `NavigationSource` 포트의 메모리 구현.
//! 헤드리스 실행(`mytv` 바이너리)과 통합 테스트에서 외부 협력자 대신 쓰인다.

use mytv_core::error::CoreError;
use mytv_core::ports::navigation::{FragmentCallback, NavigationSource};
use mytv_core::ports::remote_config::{RemoteConfigSource, ValueCallback};
use mytv_core::subscription::Subscription;
use parking_lot::Mutex;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};
use tracing::debug;

// ============================================================
// 원격 설정
// ============================================================

#[derive(Default)]
struct ConfigInner {
    /// 경로별 마지막 발행 값 (`Some(None)`: 값 없음이 발행됨)
    values: Mutex<HashMap<String, Option<Value>>>,
    listeners: Mutex<Vec<(u64, String, Arc<ValueCallback>)>>,
    next_id: AtomicU64,
    /// 설정되면 모든 구독 시도가 실패한다
    unavailable: Mutex<Option<String>>,
}

/// 메모리 원격 설정 소스
///
/// 구독 시점에 이미 발행된 값이 있으면 즉시 한 번 전달한다.
#[derive(Clone, Default)]
pub struct MemoryConfigSource {
    inner: Arc<ConfigInner>,
}

impl MemoryConfigSource {
    /// 새 소스 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 경로에 값 발행. 등록 순서대로 리스너를 동기 호출한다.
    pub fn publish(&self, path: &str, value: Option<Value>) {
        self.inner
            .values
            .lock()
            .insert(path.to_string(), value.clone());

        let targets: Vec<Arc<ValueCallback>> = self
            .inner
            .listeners
            .lock()
            .iter()
            .filter(|(_, p, _)| p == path)
            .map(|(_, _, cb)| cb.clone())
            .collect();

        debug!("원격 값 발행: {path} → 리스너 {}개", targets.len());
        for callback in targets {
            callback(value.clone());
        }
    }

    /// 이후 구독 시도를 영구 실패시킨다
    pub fn set_unavailable(&self, reason: impl Into<String>) {
        *self.inner.unavailable.lock() = Some(reason.into());
    }

    /// 경로의 활성 리스너 수
    pub fn listener_count(&self, path: &str) -> usize {
        self.inner
            .listeners
            .lock()
            .iter()
            .filter(|(_, p, _)| p == path)
            .count()
    }
}

impl RemoteConfigSource for MemoryConfigSource {
    fn subscribe(&self, path: &str, on_change: ValueCallback) -> Result<Subscription, CoreError> {
        if let Some(reason) = self.inner.unavailable.lock().clone() {
            return Err(CoreError::Subscription {
                path: path.to_string(),
                message: reason,
            });
        }

        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        let callback = Arc::new(on_change);
        self.inner
            .listeners
            .lock()
            .push((id, path.to_string(), callback.clone()));

        let current = self.inner.values.lock().get(path).cloned();
        if let Some(value) = current {
            callback(value);
        }

        let weak: Weak<ConfigInner> = Arc::downgrade(&self.inner);
        Ok(Subscription::new("remote-config", move || {
            if let Some(inner) = weak.upgrade() {
                inner.listeners.lock().retain(|(lid, _, _)| *lid != id);
            }
        }))
    }
}

// ============================================================
// 내비게이션
// ============================================================

#[derive(Default)]
struct NavInner {
    fragment: Mutex<String>,
    listeners: Mutex<Vec<(u64, Arc<FragmentCallback>)>>,
    next_id: AtomicU64,
}

/// 메모리 내비게이션 소스
///
/// 프래그먼트가 실제로 바뀔 때만 변경 이벤트를 낸다.
#[derive(Clone, Default)]
pub struct MemoryNavigation {
    inner: Arc<NavInner>,
}

impl MemoryNavigation {
    /// 초기 프래그먼트로 생성
    pub fn new(initial: &str) -> Self {
        let nav = Self::default();
        *nav.inner.fragment.lock() = initial.to_string();
        nav
    }

    /// 활성 리스너 수
    pub fn listener_count(&self) -> usize {
        self.inner.listeners.lock().len()
    }
}

impl NavigationSource for MemoryNavigation {
    fn current_fragment(&self) -> String {
        self.inner.fragment.lock().clone()
    }

    fn on_fragment_change(&self, listener: FragmentCallback) -> Subscription {
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        self.inner.listeners.lock().push((id, Arc::new(listener)));

        let weak: Weak<NavInner> = Arc::downgrade(&self.inner);
        Subscription::new("fragment-change", move || {
            if let Some(inner) = weak.upgrade() {
                inner.listeners.lock().retain(|(lid, _)| *lid != id);
            }
        })
    }

    fn set_fragment(&self, fragment: &str) {
        {
            let mut current = self.inner.fragment.lock();
            if *current == fragment {
                return;
            }
            *current = fragment.to_string();
        }

        let targets: Vec<Arc<FragmentCallback>> = self
            .inner
            .listeners
            .lock()
            .iter()
            .map(|(_, cb)| cb.clone())
            .collect();
        for callback in targets {
            callback(fragment);
        }
    }
}
