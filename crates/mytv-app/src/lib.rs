//! # mytv-app
//!
//! MyTV 클라이언트 부트스트랩 코어.
//! 원격 설정 하나와 URL 프래그먼트에서 런타임 상태(테마, 라우트, 강제 업데이트 차단,
//! 로딩)를 파생하고, 실행 중 설정 변경에 반응하는 상태 머신을 제공한다.
//!
//! ## 구조
//!
//! - [`settings_store`] — 원격 설정 구독과 스냅샷 보관
//! - [`route_resolver`] — 프래그먼트 → 라우트, 문서 제목/스크롤 동기화
//! - [`update_gate`] — 강제 업데이트 판정 (fail-open)
//! - [`controller`] — 최상위 상태 머신 `Loading → (Blocked | Admin | User)`
//! - [`context`] — 프로세스 범위 DI 컨텍스트
//! - [`event_bus`], [`lifecycle`] — 내부 이벤트, 종료 신호
//! - [`sources`] — 인프로세스 원격 설정/내비게이션 소스

pub mod context;
pub mod controller;
pub mod event_bus;
pub mod lifecycle;
pub mod route_resolver;
pub mod settings_store;
pub mod sources;
pub mod update_gate;

pub use context::AppContext;
pub use controller::{AppController, AppState, AppView};
