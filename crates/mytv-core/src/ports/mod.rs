//! 포트 인터페이스 (trait).
//!
//! Hexagonal Architecture의 포트 레이어.
//! 외부 협력자(원격 설정 저장소, 내비게이션 신호, 문서 표면)를 추상화하며,
//! `mytv-app`에서 `Arc<dyn T>`로 와이어링한다.
//!
//! 모든 구독은 push 방식 콜백이며 [`Subscription`](crate::subscription::Subscription)
//! 핸들로 해제한다.

pub mod document;
pub mod navigation;
pub mod remote_config;
