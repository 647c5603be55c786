//! 논리 라우트.
//!
//! URL 프래그먼트만으로 결정되는 최상위 화면 구분.

use serde::{Deserialize, Serialize};

/// 관리자 라우트 프래그먼트 (정확히 일치)
pub const ADMIN_FRAGMENT: &str = "#admin";

/// 관리자 하위 경로 접두사
pub const ADMIN_PATH_PREFIX: &str = "#/admin";

/// 최상위 라우트
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    /// 일반 사용자 화면 (기본값)
    #[default]
    User,
    /// 관리자 포털
    Admin,
}

impl Route {
    /// 프래그먼트에서 라우트 파생 (순수 함수)
    pub fn from_fragment(fragment: &str) -> Self {
        if fragment == ADMIN_FRAGMENT || fragment.starts_with(ADMIN_PATH_PREFIX) {
            Route::Admin
        } else {
            Route::User
        }
    }

    /// 이 라우트로 이동할 때 기록할 프래그먼트
    pub fn fragment(&self) -> &'static str {
        match self {
            Route::User => "",
            Route::Admin => ADMIN_FRAGMENT,
        }
    }

    /// 문서 제목
    pub fn document_title(&self) -> &'static str {
        match self {
            Route::User => "MyTV Live Football",
            Route::Admin => "Admin Portal | MyTV",
        }
    }
}
