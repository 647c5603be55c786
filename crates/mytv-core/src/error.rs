//! MyTV 핵심 에러 타입.
//!
//! 외부 협력자(원격 설정, 내비게이션)에서 들어오는 데이터 결함은 에러가 아니라
//! 기본값으로 흡수된다. 여기에는 실제로 호출자에게 전달해야 하는 실패만 정의한다.

use thiserror::Error;

/// 코어 레이어 에러.
#[derive(Debug, Error)]
pub enum CoreError {
    /// JSON 직렬화/역직렬화 실패
    #[error("직렬화 에러: {0}")]
    Serialization(#[from] serde_json::Error),

    /// 설정값 오류
    #[error("설정 에러: {0}")]
    Config(String),

    /// 원격 구독 수립 실패
    #[error("구독 실패 — {path}: {message}")]
    Subscription {
        /// 구독 대상 경로 (예: "settings")
        path: String,
        /// 실패 사유
        message: String,
    },
}

impl From<::config::ConfigError> for CoreError {
    fn from(e: ::config::ConfigError) -> Self {
        CoreError::Config(e.to_string())
    }
}
