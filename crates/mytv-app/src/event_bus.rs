//! 내부 이벤트 버스.
//!
//! `tokio::broadcast` 기반 내부 이벤트 라우팅.

use crate::controller::AppState;
use mytv_core::models::route::Route;
use mytv_core::models::settings::Darkness;
use tokio::sync::broadcast;
use tracing::debug;

/// 내부 앱 이벤트
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// 최상위 상태 전이
    StateChanged { from: AppState, to: AppState },
    /// 라우트 변경
    RouteChanged(Route),
    /// 테마 토큰 재계산 (어둡기 변경)
    ThemeChanged(Darkness),
    /// 새 원격 스냅샷 적용
    SettingsApplied { revision: u64 },
}

/// 내부 이벤트 버스
pub struct EventBus {
    tx: broadcast::Sender<AppEvent>,
}

impl EventBus {
    /// 새 이벤트 버스 생성
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity.max(1));
        Self { tx }
    }

    /// 이벤트 발행
    pub fn publish(&self, event: AppEvent) {
        debug!("이벤트 발행: {:?}", event);
        let _ = self.tx.send(event);
    }

    /// 구독자 생성
    pub fn subscribe(&self) -> broadcast::Receiver<AppEvent> {
        self.tx.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn publish_and_receive() {
        let bus = EventBus::new(16);
        let mut rx = bus.subscribe();

        bus.publish(AppEvent::StateChanged {
            from: AppState::Loading,
            to: AppState::User,
        });

        let event = rx.recv().await.unwrap();
        assert!(matches!(
            event,
            AppEvent::StateChanged {
                to: AppState::User,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn multiple_subscribers() {
        let bus = EventBus::new(16);
        let mut rx1 = bus.subscribe();
        let mut rx2 = bus.subscribe();

        bus.publish(AppEvent::ThemeChanged(Darkness::Darker));

        assert_eq!(rx1.recv().await.unwrap(), AppEvent::ThemeChanged(Darkness::Darker));
        assert_eq!(rx2.recv().await.unwrap(), AppEvent::ThemeChanged(Darkness::Darker));
    }

    #[test]
    fn publish_without_subscribers_is_silent() {
        let bus = EventBus::default();
        bus.publish(AppEvent::SettingsApplied { revision: 1 });
    }
}
