//! 원격 설정 스냅샷 모델.
//!
//! 원격 `settings` 문서는 부분 레코드다. 모든 필드는 선택적이며,
//! 타입이 맞지 않는 필드는 레코드 전체를 거부하지 않고 "없음"으로 취급한다.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// 업데이트 안내 메시지 기본값 (원격 `update_message` 미설정 시)
pub const DEFAULT_UPDATE_MESSAGE: &str =
    "ဗားရှင်းအသစ်ထွက်ရှိထားပါသဖြင့် အက်ပ်ကို အဆင့်မြှင့်တင်ပေးရန် လိုအပ်ပါသည်။";

/// 업데이트 다운로드 링크 기본값
pub const DEFAULT_UPDATE_URL: &str = "#";

/// 배경 어둡기 단계
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Darkness {
    /// 기본 (가장 밝음)
    #[default]
    Default,
    /// 더 어둡게
    Darker,
    /// 완전 검정
    DeepDark,
}

impl Darkness {
    /// 원격 표기 문자열
    pub fn as_str(&self) -> &'static str {
        match self {
            Darkness::Default => "default",
            Darkness::Darker => "darker",
            Darkness::DeepDark => "deep-dark",
        }
    }
}

/// 앱 표시 언어
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// 미얀마어 (기본값)
    #[default]
    My,
    /// 영어
    En,
}

/// 브랜딩 로고 위치
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogoPosition {
    Left,
    Right,
}

/// 광고 배너
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdBanner {
    /// 배너 이미지 URL
    pub image: String,
    /// 클릭 시 이동 링크
    pub link: String,
}

/// 원격 설정 스냅샷.
///
/// 원격 소스에서 마지막으로 관측된 레코드 그대로이며, 필드 단위 병합은 하지 않는다.
/// 기본값은 접근자 메서드가 제공한다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub auto_sync_enabled: Option<bool>,
    /// 동기화 주기 (분)
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub sync_interval: Option<u64>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub free_mode: Option<bool>,
    /// 마지막 동기화 시각 (epoch ms)
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub last_sync_time: Option<i64>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub admin_password: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub custom_ads: Option<Vec<AdBanner>>,
    /// 배너 너비 (%)
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub ads_banner_width: Option<f64>,
    /// 배너 하단 오프셋 (%)
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub ads_banner_offset_y: Option<f64>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub branding_logo_text: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub branding_logo_url: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub branding_logo_size: Option<f64>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub branding_logo_position: Option<LogoPosition>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub branding_logo_offset_x: Option<f64>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub branding_logo_offset_y: Option<f64>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub show_branding_logo: Option<bool>,
    /// 배경 어둡기 (알 수 없는 값은 없음으로 취급)
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub app_background_darkness: Option<Darkness>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub announcement_text: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub show_announcement: Option<bool>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub welcome_title_text: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub auto_reply_enabled: Option<bool>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub auto_reply_text: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub pricing_info: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub server_update_text: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub apk_download_url: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub apk_download_text: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub total_code_limit: Option<u32>,
    /// 원격이 요구하는 앱 버전 (문자열 그대로 비교)
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub app_version: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub update_url: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub update_message: Option<String>,
    /// 강제 업데이트 플래그
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub force_update: Option<bool>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub app_language: Option<Language>,
}

impl AppSettings {
    /// 원격 JSON 값에서 스냅샷 파싱.
    ///
    /// 객체가 아닌 값은 `None`. 객체 내부의 개별 필드 결함은 해당 필드만 버린다.
    pub fn from_value(value: &serde_json::Value) -> Option<Self> {
        if !value.is_object() {
            return None;
        }
        Self::deserialize(value).ok()
    }

    /// 배경 어둡기 (기본: `default`)
    pub fn darkness(&self) -> Darkness {
        self.app_background_darkness.unwrap_or_default()
    }

    /// 표시 언어 (기본: 미얀마어)
    pub fn language(&self) -> Language {
        self.app_language.unwrap_or_default()
    }

    /// 강제 업데이트 여부 (기본: false)
    pub fn force_update(&self) -> bool {
        self.force_update.unwrap_or(false)
    }

    /// 빈 문자열은 버전 미지정으로 취급
    pub fn app_version(&self) -> Option<&str> {
        self.app_version.as_deref().filter(|v| !v.is_empty())
    }

    /// 업데이트 안내 메시지 (빈 값이면 `None`)
    pub fn update_message(&self) -> Option<&str> {
        self.update_message.as_deref().filter(|m| !m.is_empty())
    }

    /// 업데이트 다운로드 링크 (기본: `#`)
    pub fn update_url(&self) -> &str {
        self.update_url
            .as_deref()
            .filter(|u| !u.is_empty())
            .unwrap_or(DEFAULT_UPDATE_URL)
    }
}

/// 타입 불일치 필드를 `None`으로 흡수하는 역직렬화기
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}
