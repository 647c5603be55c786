//! 원격 설정 저장소.
//!
//! 원격 `settings` 경로에 단 하나의 구독을 열고 마지막 스냅샷을 보관한다.
//! 값이 있는 알림은 스냅샷을 통째로 교체하고, 값이 없는 알림은 이전 스냅샷을 유지한다.
//! 첫 알림이 오면 내용과 무관하게 초기화 완료로 표시한다.

use chrono::{DateTime, Utc};
use mytv_core::models::settings::AppSettings;
use mytv_core::ports::remote_config::RemoteConfigSource;
use mytv_core::subscription::Subscription;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, error, info, warn};

/// 저장소 상태
#[derive(Debug, Clone, Default)]
pub struct SettingsState {
    /// 마지막으로 관측된 스냅샷
    pub settings: Arc<AppSettings>,
    /// 첫 알림 수신 여부
    pub initialized: bool,
    /// 적용된 스냅샷 수
    pub revision: u64,
    /// 마지막 스냅샷 적용 시각
    pub updated_at: Option<DateTime<Utc>>,
}

/// 원격 설정 저장소
pub struct SettingsStore {
    path: String,
    state_tx: Arc<watch::Sender<SettingsState>>,
    subscription: Subscription,
}

impl SettingsStore {
    /// 구독을 열고 저장소 시작.
    ///
    /// 구독 수립에 실패하면 재시도하지 않으며 저장소는 미초기화 상태로 남는다.
    pub fn start(source: &dyn RemoteConfigSource, path: &str) -> Self {
        let (state_tx, _) = watch::channel(SettingsState::default());
        let state_tx = Arc::new(state_tx);

        let callback_tx = state_tx.clone();
        let callback_path = path.to_string();
        let subscription = match source.subscribe(
            path,
            Box::new(move |payload: Option<Value>| {
                apply_notification(&callback_tx, &callback_path, payload);
            }),
        ) {
            Ok(subscription) => {
                info!("원격 설정 구독 시작: {path}");
                subscription
            }
            Err(e) => {
                error!("원격 설정 구독 실패: {e}");
                warn!("첫 설정을 받을 수 없어 로딩 상태가 계속됩니다 (외부 감시 필요)");
                Subscription::noop("remote-config")
            }
        };

        Self {
            path: path.to_string(),
            state_tx,
            subscription,
        }
    }

    /// 구독 경로
    pub fn path(&self) -> &str {
        &self.path
    }

    /// 현재 상태 (복제본)
    pub fn state(&self) -> SettingsState {
        self.state_tx.borrow().clone()
    }

    /// 현재 스냅샷
    pub fn snapshot(&self) -> Arc<AppSettings> {
        self.state_tx.borrow().settings.clone()
    }

    /// 첫 알림 수신 여부
    pub fn is_initialized(&self) -> bool {
        self.state_tx.borrow().initialized
    }

    /// 상태 변경 수신기
    pub fn subscribe(&self) -> watch::Receiver<SettingsState> {
        self.state_tx.subscribe()
    }

    /// 원격 구독 해제 (멱등)
    pub fn shutdown(&self) {
        self.subscription.unsubscribe();
    }
}

/// 객체이면서 키가 하나 이상 있어야 값이 있는 알림으로 본다
fn present_payload(payload: Option<&Value>) -> Option<&Value> {
    payload.filter(|v| v.as_object().is_some_and(|m| !m.is_empty()))
}

fn apply_notification(tx: &watch::Sender<SettingsState>, path: &str, payload: Option<Value>) {
    let incoming = match present_payload(payload.as_ref()) {
        Some(value) => {
            let parsed = AppSettings::from_value(value);
            if parsed.is_none() {
                warn!("원격 설정 파싱 실패, 이전 스냅샷 유지: {path}");
            }
            parsed
        }
        None => {
            if matches!(payload, Some(ref v) if !v.is_null() && !v.is_object()) {
                warn!("객체가 아닌 원격 설정 무시: {path}");
            } else {
                debug!("빈 원격 설정 수신, 이전 스냅샷 유지: {path}");
            }
            None
        }
    };

    tx.send_if_modified(|state| {
        let mut modified = false;

        if let Some(settings) = incoming {
            state.settings = Arc::new(settings);
            state.revision += 1;
            state.updated_at = Some(Utc::now());
            debug!("원격 설정 적용: revision {}", state.revision);
            modified = true;
        }

        if !state.initialized {
            state.initialized = true;
            info!("원격 설정 초기화 완료");
            modified = true;
        }

        modified
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::MemoryConfigSource;
    use serde_json::json;

    fn settings_a(n: u64) -> AppSettings {
        AppSettings {
            sync_interval: Some(n),
            ..Default::default()
        }
    }

    #[test]
    fn null_never_overwrites() {
        let source = MemoryConfigSource::new();
        let store = SettingsStore::start(&source, "settings");
        assert!(!store.is_initialized());

        let mut observed = Vec::new();
        for payload in [
            Some(json!({ "sync_interval": 1 })),
            None,
            Some(json!({ "sync_interval": 2 })),
        ] {
            source.publish("settings", payload);
            observed.push((*store.snapshot()).clone());
        }

        assert_eq!(observed, vec![settings_a(1), settings_a(1), settings_a(2)]);
        assert_eq!(store.state().revision, 2);
    }

    #[test]
    fn first_notification_initializes_even_when_empty() {
        let source = MemoryConfigSource::new();
        let store = SettingsStore::start(&source, "settings");

        source.publish("settings", None);

        assert!(store.is_initialized());
        assert_eq!(*store.snapshot(), AppSettings::default());
        assert_eq!(store.state().revision, 0);
    }

    #[test]
    fn present_payload_replaces_whole_snapshot() {
        let source = MemoryConfigSource::new();
        let store = SettingsStore::start(&source, "settings");

        source.publish(
            "settings",
            Some(json!({ "app_version": "1.0", "force_update": true })),
        );
        source.publish("settings", Some(json!({ "announcement_text": "hi" })));

        let snapshot = store.snapshot();
        assert_eq!(snapshot.announcement_text.as_deref(), Some("hi"));
        assert_eq!(snapshot.app_version, None);
        assert_eq!(snapshot.force_update, None);
    }

    #[test]
    fn empty_object_and_non_object_are_absent() {
        let source = MemoryConfigSource::new();
        let store = SettingsStore::start(&source, "settings");

        source.publish("settings", Some(json!({ "app_version": "1.0" })));
        source.publish("settings", Some(json!({})));
        source.publish("settings", Some(json!(null)));
        source.publish("settings", Some(json!([1, 2, 3])));

        assert_eq!(store.snapshot().app_version(), Some("1.0"));
        assert_eq!(store.state().revision, 1);
    }

    #[test]
    fn failed_subscription_stays_uninitialized() {
        let source = MemoryConfigSource::new();
        source.set_unavailable("permission denied");
        let store = SettingsStore::start(&source, "settings");

        source.publish("settings", Some(json!({ "app_version": "1.0" })));

        assert!(!store.is_initialized());
        store.shutdown();
    }

    #[test]
    fn shutdown_releases_listener_once() {
        let source = MemoryConfigSource::new();
        let store = SettingsStore::start(&source, "settings");
        assert_eq!(source.listener_count("settings"), 1);

        store.shutdown();
        store.shutdown();
        assert_eq!(source.listener_count("settings"), 0);

        source.publish("settings", Some(json!({ "app_version": "1.0" })));
        assert!(!store.is_initialized());
    }

    #[test]
    fn receivers_see_changes_in_order() {
        let source = MemoryConfigSource::new();
        let store = SettingsStore::start(&source, "settings");
        let mut rx = store.subscribe();

        source.publish("settings", Some(json!({ "sync_interval": 5 })));
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().settings.sync_interval, Some(5));

        // 이미 초기화된 뒤의 빈 알림은 변경이 아니다
        source.publish("settings", None);
        assert!(!rx.has_changed().unwrap());
    }
}
