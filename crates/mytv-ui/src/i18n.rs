//! 국제화 (i18n) 모듈.
//!
//! 미얀마어(my), 영어(en) 셸 문자열. 원격 `app_language`로 선택된다.

use mytv_core::models::settings::{Language, DEFAULT_UPDATE_MESSAGE};
use serde::Serialize;

/// 지원 언어
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Locale {
    /// 미얀마어 (기본값)
    #[default]
    My,
    /// 영어
    En,
}

impl Locale {
    /// 언어 코드 반환
    pub fn code(&self) -> &'static str {
        match self {
            Locale::My => "my",
            Locale::En => "en",
        }
    }

    /// 언어 이름 (해당 언어로)
    pub fn name(&self) -> &'static str {
        match self {
            Locale::My => "မြန်မာ",
            Locale::En => "English",
        }
    }

    /// 로케일별 문자열 테이블
    pub fn strings(&self) -> &'static Strings {
        match self {
            Locale::My => &Strings::MY,
            Locale::En => &Strings::EN,
        }
    }
}

impl From<Language> for Locale {
    fn from(language: Language) -> Self {
        match language {
            Language::My => Locale::My,
            Language::En => Locale::En,
        }
    }
}

/// 셸 화면 문자열 (로컬라이즈)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Strings {
    // 로딩
    pub initializing: &'static str,

    // 강제 업데이트
    pub update_required: &'static str,
    pub update_default_message: &'static str,
    pub download_now: &'static str,

    // 관리자
    pub admin_exit: &'static str,
}

impl Strings {
    /// 미얀마어 문자열
    pub const MY: Strings = Strings {
        initializing: "Initializing System...",
        update_required: "Update Required",
        update_default_message: DEFAULT_UPDATE_MESSAGE,
        download_now: "Download Now",
        admin_exit: "ထွက်မည်",
    };

    /// 영어 문자열
    pub const EN: Strings = Strings {
        initializing: "Initializing System...",
        update_required: "Update Required",
        update_default_message: "A new version is available. Please update the app to continue.",
        download_now: "Download Now",
        admin_exit: "Exit",
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_locale_is_burmese() {
        assert_eq!(Locale::default(), Locale::My);
        assert_eq!(Locale::from(Language::default()), Locale::My);
    }

    #[test]
    fn language_maps_to_locale() {
        assert_eq!(Locale::from(Language::En).code(), "en");
        assert_eq!(Locale::from(Language::My).code(), "my");
    }

    #[test]
    fn burmese_default_message_matches_model() {
        assert_eq!(
            Locale::My.strings().update_default_message,
            DEFAULT_UPDATE_MESSAGE
        );
        assert_ne!(
            Locale::En.strings().update_default_message,
            Locale::My.strings().update_default_message
        );
    }
}
