//! 원격 설정 구독 포트.
//!
//! 구현: `mytv-app::sources::MemoryConfigSource` (인프로세스),
//! 실제 원격 저장소 어댑터는 이 크레이트 범위 밖이다.

use crate::error::CoreError;
use crate::subscription::Subscription;

/// 원격 값 변경 콜백. `None`은 해당 경로에 값이 없음을 뜻한다.
pub type ValueCallback = Box<dyn Fn(Option<serde_json::Value>) + Send + Sync>;

/// push 방식 원격 설정 소스
///
/// 재연결은 구현체 책임이다. 호출자는 재시도하지 않는다.
pub trait RemoteConfigSource: Send + Sync {
    /// `path`의 값을 구독한다. 현재 값이 있으면 구현체가 이어서 콜백을 호출한다.
    fn subscribe(&self, path: &str, on_change: ValueCallback) -> Result<Subscription, CoreError>;
}
