//! 클라이언트 런타임 설정 구조체.
//!
//! 원격 설정(`AppSettings`)과 달리 로컬에서 주어지는 부트스트랩 설정이다.
//! `config` crate를 통해 기본값 → JSON 파일 → 환경변수(`MYTV_*`) 순으로 로드.

use serde::{Deserialize, Serialize};

/// 최상위 클라이언트 설정
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// 구독할 원격 설정 경로
    #[serde(default = "default_settings_path")]
    pub settings_path: String,
    /// 원격 `app_version`과 비교할 빌드 버전
    #[serde(default = "default_build_version")]
    pub build_version: String,
    /// 내부 이벤트 버스 용량
    #[serde(default = "default_event_bus_capacity")]
    pub event_bus_capacity: usize,
    /// 로그 레벨 (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_settings_path() -> String {
    "settings".to_string()
}

fn default_build_version() -> String {
    crate::BUILD_VERSION.to_string()
}

fn default_event_bus_capacity() -> usize {
    64
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            settings_path: default_settings_path(),
            build_version: default_build_version(),
            event_bus_capacity: default_event_bus_capacity(),
            log_level: default_log_level(),
        }
    }
}
