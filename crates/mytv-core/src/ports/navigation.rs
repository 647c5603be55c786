//! 내비게이션 신호 포트.
//!
//! 프로세스 전역의 현재 위치 프래그먼트 (`#...`).

use crate::subscription::Subscription;

/// 프래그먼트 변경 콜백. 인자는 변경 후 프래그먼트.
pub type FragmentCallback = Box<dyn Fn(&str) + Send + Sync>;

/// 프래그먼트 기반 내비게이션 소스
pub trait NavigationSource: Send + Sync {
    /// 현재 프래그먼트 (동기 조회)
    fn current_fragment(&self) -> String;

    /// 프래그먼트 변경 이벤트 구독
    fn on_fragment_change(&self, listener: FragmentCallback) -> Subscription;

    /// 프래그먼트 변경 (변경 이벤트로 다시 관측된다)
    fn set_fragment(&self, fragment: &str);
}
