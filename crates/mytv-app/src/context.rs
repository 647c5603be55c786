//! 프로세스 범위 컨텍스트.
//!
//! 시작 시 한 번 명시적으로 만들어 필요한 구성 요소에 공유한다 (전역 싱글턴 없음).

use crate::controller::AppController;
use crate::event_bus::EventBus;
use crate::lifecycle::LifecycleManager;
use crate::route_resolver::RouteResolver;
use crate::settings_store::SettingsStore;
use crate::update_gate::UpdateGate;
use mytv_core::config::ClientConfig;
use mytv_core::ports::document::DocumentSurface;
use mytv_core::ports::navigation::NavigationSource;
use mytv_core::ports::remote_config::RemoteConfigSource;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::info;

/// DI 컨텍스트
pub struct AppContext {
    pub config: ClientConfig,
    pub event_bus: Arc<EventBus>,
    pub lifecycle: LifecycleManager,
    pub controller: Arc<AppController>,
}

impl AppContext {
    /// 구성 요소 와이어링. 설정 구독을 먼저 열고 라우트를 즉시 결정한다.
    pub fn bootstrap(
        config: ClientConfig,
        remote: &dyn RemoteConfigSource,
        navigation: Arc<dyn NavigationSource>,
        document: Arc<dyn DocumentSurface>,
    ) -> Self {
        info!(
            "부트스트랩: settings_path={}, build_version={}",
            config.settings_path, config.build_version
        );

        let event_bus = Arc::new(EventBus::new(config.event_bus_capacity));
        let settings = SettingsStore::start(remote, &config.settings_path);
        let router = RouteResolver::start(navigation, document);
        let gate = UpdateGate::new(config.build_version.clone());
        let controller = Arc::new(AppController::new(
            settings,
            router,
            gate,
            event_bus.clone(),
        ));

        Self {
            config,
            event_bus,
            lifecycle: LifecycleManager::new(),
            controller,
        }
    }

    /// 컨트롤러 이벤트 루프 시작
    pub fn spawn(&self) -> JoinHandle<()> {
        let controller = self.controller.clone();
        let shutdown_rx = self.lifecycle.subscribe();
        tokio::spawn(async move {
            controller.run(shutdown_rx).await;
        })
    }

    /// 종료 신호 발송 및 구독 해제 (멱등)
    pub fn shutdown(&self) {
        self.lifecycle.shutdown();
        self.controller.shutdown();
    }
}
