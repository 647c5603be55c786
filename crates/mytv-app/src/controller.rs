//! 최상위 상태 머신.
//!
//! 설정 스냅샷, 현재 라우트, 업데이트 게이트를 합쳐 표시할 최상위 화면을 고른다.
//!
//! ```text
//! Loading ──(초기화 완료)──┬─ route=admin ──────────────→ Admin
//!                          ├─ route=user, 게이트 차단 ──→ Blocked
//!                          └─ route=user ───────────────→ User
//! ```
//!
//! 게이트는 라우트 범위에서만 적용되며 누적되지 않는다. 매 평가가 현재 입력에서 다시 시작한다.

use crate::event_bus::{AppEvent, EventBus};
use crate::route_resolver::RouteResolver;
use crate::settings_store::{SettingsState, SettingsStore};
use crate::update_gate::{UpdateGate, UpdatePrompt};
use mytv_core::models::route::Route;
use mytv_core::models::settings::{AppSettings, Darkness};
use mytv_ui::i18n::{Locale, Strings};
use mytv_ui::theme::{ThemeResolver, ThemeTokens};
use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info};

/// 최상위 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AppState {
    /// 첫 원격 설정 대기
    Loading,
    /// 강제 업데이트로 차단됨
    Blocked,
    /// 관리자 포털
    Admin,
    /// 사용자 화면
    User,
}

/// 프레젠테이션 계층에 노출되는 값
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppView {
    pub state: AppState,
    pub route: Route,
    pub darkness: Darkness,
    /// `Loading`에서는 원격 테마를 쓰지 않는다
    pub tokens: Option<&'static ThemeTokens>,
    pub locale: Locale,
    pub strings: &'static Strings,
    pub settings: Arc<AppSettings>,
    pub settings_revision: u64,
    /// `Blocked`일 때만 존재
    pub update_prompt: Option<UpdatePrompt>,
}

/// 최상위 컨트롤러
pub struct AppController {
    settings: SettingsStore,
    router: RouteResolver,
    gate: UpdateGate,
    event_bus: Arc<EventBus>,
    view_tx: watch::Sender<AppView>,
    stopped: AtomicBool,
}

impl AppController {
    /// 구성 요소를 묶어 컨트롤러 생성
    pub fn new(
        settings: SettingsStore,
        router: RouteResolver,
        gate: UpdateGate,
        event_bus: Arc<EventBus>,
    ) -> Self {
        let initial = compose(&settings.state(), router.current(), &gate);
        info!("초기 상태: {:?}", initial.state);
        let (view_tx, _) = watch::channel(initial);

        Self {
            settings,
            router,
            gate,
            event_bus,
            view_tx,
            stopped: AtomicBool::new(false),
        }
    }

    /// 전이 함수 (순수)
    pub fn evaluate(initialized: bool, blocked: bool, route: Route) -> AppState {
        if !initialized {
            return AppState::Loading;
        }
        match route {
            Route::Admin => AppState::Admin,
            Route::User if blocked => AppState::Blocked,
            Route::User => AppState::User,
        }
    }

    /// 현재 입력으로 계산한 상태
    pub fn state(&self) -> AppState {
        self.view().state
    }

    /// 현재 입력으로 계산한 뷰
    pub fn view(&self) -> AppView {
        compose(&self.settings.state(), self.router.current(), &self.gate)
    }

    /// 마지막으로 발행된 뷰
    pub fn latest(&self) -> AppView {
        self.view_tx.borrow().clone()
    }

    /// 뷰 변경 수신기
    pub fn subscribe(&self) -> watch::Receiver<AppView> {
        self.view_tx.subscribe()
    }

    /// 라우트 이동 명령
    pub fn navigate(&self, route: Route) {
        self.router.navigate(route);
    }

    pub fn settings(&self) -> &SettingsStore {
        &self.settings
    }

    pub fn router(&self) -> &RouteResolver {
        &self.router
    }

    pub fn gate(&self) -> &UpdateGate {
        &self.gate
    }

    /// 다시 평가하고, 이전 뷰와 달라진 부분을 이벤트로 발행한다
    pub fn refresh(&self) -> AppView {
        let next = self.view();
        let prev = self.view_tx.borrow().clone();

        if next.settings_revision != prev.settings_revision {
            self.event_bus.publish(AppEvent::SettingsApplied {
                revision: next.settings_revision,
            });
        }
        if next.route != prev.route {
            self.event_bus.publish(AppEvent::RouteChanged(next.route));
        }
        if next.state != prev.state {
            info!("상태 전이: {:?} → {:?}", prev.state, next.state);
            self.event_bus.publish(AppEvent::StateChanged {
                from: prev.state,
                to: next.state,
            });
        }
        if next.state != AppState::Loading
            && (prev.state == AppState::Loading || next.darkness != prev.darkness)
        {
            debug!("테마 재계산: {}", next.darkness.as_str());
            self.event_bus.publish(AppEvent::ThemeChanged(next.darkness));
        }

        let published = next.clone();
        self.view_tx.send_if_modified(move |view| {
            if *view == published {
                return false;
            }
            *view = published;
            true
        });
        next
    }

    /// 이벤트 루프. 설정/라우트 변경마다 다시 평가하고, 종료 신호가 오면 구독을 해제한다.
    pub async fn run(&self, mut shutdown: watch::Receiver<bool>) {
        let mut settings_rx = self.settings.subscribe();
        let mut route_rx = self.router.subscribe();
        self.refresh();

        while !*shutdown.borrow_and_update() {
            tokio::select! {
                changed = settings_rx.changed() => {
                    if changed.is_err() {
                        break;
                    }
                    self.refresh();
                }
                changed = route_rx.changed() => {
                    if changed.is_err() {
                        break;
                    }
                    self.refresh();
                }
                changed = shutdown.changed() => {
                    if changed.is_err() {
                        break;
                    }
                }
            }
        }

        self.shutdown();
    }

    /// 두 구독 해제. 최초 호출에서만 동작한다.
    pub fn shutdown(&self) {
        if self.stopped.swap(true, Ordering::SeqCst) {
            return;
        }
        info!("컨트롤러 종료: 구독 해제");
        self.settings.shutdown();
        self.router.shutdown();
    }
}

fn compose(state: &SettingsState, route: Route, gate: &UpdateGate) -> AppView {
    let settings = state.settings.clone();
    let blocked = gate.is_blocked(&settings);
    let app_state = AppController::evaluate(state.initialized, blocked, route);

    let locale = Locale::from(settings.language());
    let strings = locale.strings();
    let tokens = (app_state != AppState::Loading)
        .then(|| ThemeResolver::resolve(settings.app_background_darkness));
    let update_prompt = (app_state == AppState::Blocked).then(|| gate.prompt(&settings, strings));

    AppView {
        state: app_state,
        route,
        darkness: settings.darkness(),
        tokens,
        locale,
        strings,
        settings_revision: state.revision,
        settings,
        update_prompt,
    }
}
