//! 강제 업데이트 게이트.
//!
//! 원격 `app_version`/`force_update`와 빌드 버전을 비교해 정상 동작 차단 여부를 정한다.
//! 원격 설정이 불완전하면 차단하지 않는다 (fail-open).

use mytv_core::models::settings::AppSettings;
use mytv_ui::i18n::Strings;
use serde::Serialize;

/// 차단 화면 내용
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdatePrompt {
    pub title: &'static str,
    pub message: String,
    pub download_label: &'static str,
    pub download_url: String,
}

/// 강제 업데이트 게이트
#[derive(Debug, Clone)]
pub struct UpdateGate {
    build_version: String,
}

impl UpdateGate {
    /// 빌드 버전으로 생성
    pub fn new(build_version: impl Into<String>) -> Self {
        Self {
            build_version: build_version.into(),
        }
    }

    /// 비교 대상 빌드 버전
    pub fn build_version(&self) -> &str {
        &self.build_version
    }

    /// 차단 여부
    pub fn is_blocked(&self, settings: &AppSettings) -> bool {
        is_blocked(settings, &self.build_version)
    }

    /// 차단 화면 내용 생성
    pub fn prompt(&self, settings: &AppSettings, strings: &Strings) -> UpdatePrompt {
        UpdatePrompt {
            title: strings.update_required,
            message: settings
                .update_message()
                .unwrap_or(strings.update_default_message)
                .to_string(),
            download_label: strings.download_now,
            download_url: settings.update_url().to_string(),
        }
    }
}

/// `force_update`가 참이고 원격 버전 문자열이 빌드 버전과 다를 때만 차단.
///
/// 버전은 문자열 그대로 비교한다 (semver 해석 없음).
pub fn is_blocked(settings: &AppSettings, build_version: &str) -> bool {
    let Some(remote_version) = settings.app_version() else {
        return false;
    };
    if !settings.force_update() {
        return false;
    }
    remote_version != build_version
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(force_update: Option<bool>, app_version: Option<&str>) -> AppSettings {
        AppSettings {
            force_update,
            app_version: app_version.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn empty_snapshot_is_open() {
        assert!(!is_blocked(&AppSettings::default(), "1.0"));
    }

    #[test]
    fn missing_version_is_open() {
        assert!(!is_blocked(&settings(Some(true), None), "1.0"));
    }

    #[test]
    fn missing_flag_is_open() {
        assert!(!is_blocked(&settings(None, Some("9.9")), "1.0"));
    }

    #[test]
    fn equal_versions_are_open() {
        assert!(!is_blocked(&settings(Some(true), Some("1.0")), "1.0"));
    }

    #[test]
    fn differing_versions_block() {
        assert!(is_blocked(&settings(Some(true), Some("1.0")), "2.0"));
    }

    #[test]
    fn flag_false_is_open() {
        assert!(!is_blocked(&settings(Some(false), Some("9.9")), "1.0"));
    }

    #[test]
    fn comparison_is_plain_string() {
        // 의미상 같은 버전이어도 문자열이 다르면 차단
        assert!(is_blocked(&settings(Some(true), Some("1.0.0")), "1.0"));
        assert!(is_blocked(&settings(Some(true), Some("v1.0")), "1.0"));
    }

    #[test]
    fn prompt_defaults() {
        let gate = UpdateGate::new("1.0");
        let prompt = gate.prompt(&settings(Some(true), Some("2.0")), &Strings::EN);
        assert_eq!(prompt.message, Strings::EN.update_default_message);
        assert_eq!(prompt.download_url, "#");
        assert_eq!(prompt.title, "Update Required");
    }

    #[test]
    fn prompt_uses_remote_text() {
        let gate = UpdateGate::new("1.0");
        let remote = AppSettings {
            update_message: Some("Please update".to_string()),
            update_url: Some("https://example.com/app.apk".to_string()),
            ..settings(Some(true), Some("2.0"))
        };
        let prompt = gate.prompt(&remote, &Strings::MY);
        assert_eq!(prompt.message, "Please update");
        assert_eq!(prompt.download_url, "https://example.com/app.apk");
    }
}
