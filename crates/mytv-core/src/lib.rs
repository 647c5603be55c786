//! # mytv-core
//!
//! MyTV 도메인 모델, 포트(trait) 정의, 에러 타입.
//! 모든 크레이트가 공유하는 핵심 타입과 인터페이스를 제공한다.
//!
//! ## 구조
//!
//! - [`models`] — 원격 설정 스냅샷, 라우트 등 도메인 데이터 구조체
//! - [`ports`] — 원격 설정/내비게이션/문서 표면 포트 인터페이스
//! - [`subscription`] — 구독 해제 핸들 (멱등)
//! - [`error`] — 핵심 에러 타입 (thiserror)
//! - [`config`] — 클라이언트 런타임 설정 구조체
//! - [`config_manager`] — 설정 로드/저장 (`config` crate 계층)

pub mod config;
pub mod config_manager;
pub mod error;
pub mod models;
pub mod ports;
pub mod subscription;

/// 빌드에 고정된 앱 버전 (원격 `app_version`과 비교 대상)
pub const BUILD_VERSION: &str = env!("CARGO_PKG_VERSION");
