//! 도메인 모델.
//!
//! 원격 설정 스냅샷과 URL 프래그먼트에서 파생되는 라우트.

pub mod route;
pub mod settings;
