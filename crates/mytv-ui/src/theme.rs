//! UI 테마 정의.
//!
//! 원격 `app_background_darkness` 단계별 스타일 토큰.
//! 토큰 값은 프레젠테이션 계층이 해석하는 불투명 문자열이다.

use mytv_core::models::settings::Darkness;
use serde::Serialize;

/// 테마 토큰 세트
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeTokens {
    /// 본문 배경
    pub body_bg: &'static str,
    /// 관리자 포털 배경
    pub admin_bg: &'static str,
    /// 내비게이션 바 배경
    pub nav_bg: &'static str,
    /// 카드 배경
    pub card_bg: &'static str,
    /// 카드 내부 배경
    pub inner_bg: &'static str,
    /// 경기 카드 배경
    pub match_card_bg: &'static str,
    /// 경기 카드 hover 배경
    pub match_card_hover_bg: &'static str,
    /// 플레이어 헤더 그라디언트 시작
    pub player_header_grad_from: &'static str,
    /// 플레이어 헤더 그라디언트 끝
    pub player_header_grad_to: &'static str,
    /// 로고 그라디언트 시작
    pub logo_grad_from: &'static str,
    /// 로고 그라디언트 끝
    pub logo_grad_to: &'static str,
    /// 에러 오버레이 배경
    pub error_overlay_bg: &'static str,
    /// 팀 로고 그라디언트 시작
    pub match_card_team_logo_grad_from: &'static str,
    /// 팀 로고 그라디언트 끝
    pub match_card_team_logo_grad_to: &'static str,
}

/// 토큰 키 개수
pub const TOKEN_COUNT: usize = 14;

impl ThemeTokens {
    /// 기본 팔레트
    pub const DEFAULT: ThemeTokens = ThemeTokens {
        body_bg: "bg-[#080808]",
        admin_bg: "bg-[#060606]",
        nav_bg: "bg-[#1a1a1a]",
        card_bg: "bg-[#101010]",
        inner_bg: "bg-[#0a0a0a]",
        match_card_bg: "bg-[#121212]",
        match_card_hover_bg: "hover:bg-[#181818]",
        player_header_grad_from: "from-[#222]",
        player_header_grad_to: "to-[#1a1a1a]",
        logo_grad_from: "from-[#101010]",
        logo_grad_to: "to-[#0c0c0c]",
        error_overlay_bg: "bg-[#0a0a0a]",
        match_card_team_logo_grad_from: "from-[#101010]",
        match_card_team_logo_grad_to: "to-[#0c0c0c]",
    };

    /// 더 어두운 팔레트
    pub const DARKER: ThemeTokens = ThemeTokens {
        body_bg: "bg-[#000000]",
        admin_bg: "bg-[#000000]",
        nav_bg: "bg-[#050505]",
        card_bg: "bg-[#020202]",
        inner_bg: "bg-[#000000]",
        match_card_bg: "bg-[#030303]",
        match_card_hover_bg: "hover:bg-[#070707]",
        player_header_grad_from: "from-[#0a0a0a]",
        player_header_grad_to: "to-[#050505]",
        logo_grad_from: "from-[#000000]",
        logo_grad_to: "to-[#000000]",
        error_overlay_bg: "bg-[#000000]",
        match_card_team_logo_grad_from: "from-[#000000]",
        match_card_team_logo_grad_to: "to-[#000000]",
    };

    /// 완전 검정 팔레트
    pub const DEEP_DARK: ThemeTokens = ThemeTokens {
        body_bg: "bg-[#000000]",
        admin_bg: "bg-[#000000]",
        nav_bg: "bg-[#000000]",
        card_bg: "bg-[#000000]",
        inner_bg: "bg-[#000000]",
        match_card_bg: "bg-[#000000]",
        match_card_hover_bg: "hover:bg-[#080808]",
        player_header_grad_from: "from-[#050505]",
        player_header_grad_to: "to-[#000000]",
        logo_grad_from: "from-[#000000]",
        logo_grad_to: "to-[#000000]",
        error_overlay_bg: "bg-[#000000]",
        match_card_team_logo_grad_from: "from-[#000000]",
        match_card_team_logo_grad_to: "to-[#000000]",
    };

    /// (키, 값) 목록
    pub fn iter(&self) -> [(&'static str, &'static str); TOKEN_COUNT] {
        [
            ("body_bg", self.body_bg),
            ("admin_bg", self.admin_bg),
            ("nav_bg", self.nav_bg),
            ("card_bg", self.card_bg),
            ("inner_bg", self.inner_bg),
            ("match_card_bg", self.match_card_bg),
            ("match_card_hover_bg", self.match_card_hover_bg),
            ("player_header_grad_from", self.player_header_grad_from),
            ("player_header_grad_to", self.player_header_grad_to),
            ("logo_grad_from", self.logo_grad_from),
            ("logo_grad_to", self.logo_grad_to),
            ("error_overlay_bg", self.error_overlay_bg),
            (
                "match_card_team_logo_grad_from",
                self.match_card_team_logo_grad_from,
            ),
            (
                "match_card_team_logo_grad_to",
                self.match_card_team_logo_grad_to,
            ),
        ]
    }
}

/// 로딩 화면 고정 스타일 (원격 설정과 무관)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadingStyle {
    pub background: &'static str,
    pub spinner_track: &'static str,
    pub spinner_head: &'static str,
    pub caption: &'static str,
}

const LOADING_STYLE: LoadingStyle = LoadingStyle {
    background: "bg-[#080808]",
    spinner_track: "border-[#00ff88]/10",
    spinner_head: "border-t-[#00ff88]",
    caption: "text-gray-500",
};

static DEFAULT_TOKENS: ThemeTokens = ThemeTokens::DEFAULT;
static DARKER_TOKENS: ThemeTokens = ThemeTokens::DARKER;
static DEEP_DARK_TOKENS: ThemeTokens = ThemeTokens::DEEP_DARK;

/// 어둡기 → 토큰 세트 매핑
///
/// 정적 테이블 참조를 돌려주므로 같은 입력에는 항상 같은 주소가 나온다.
pub struct ThemeResolver;

impl ThemeResolver {
    /// 어둡기 단계의 토큰 세트. 미지정이면 `default`.
    pub fn resolve(darkness: Option<Darkness>) -> &'static ThemeTokens {
        match darkness.unwrap_or_default() {
            Darkness::Default => &DEFAULT_TOKENS,
            Darkness::Darker => &DARKER_TOKENS,
            Darkness::DeepDark => &DEEP_DARK_TOKENS,
        }
    }

    /// 로딩 상태 스타일
    pub fn loading() -> &'static LoadingStyle {
        &LOADING_STYLE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mytv_core::models::settings::AppSettings;

    const ALL: [Darkness; 3] = [Darkness::Default, Darkness::Darker, Darkness::DeepDark];

    #[test]
    fn every_token_populated() {
        for darkness in ALL {
            let tokens = ThemeResolver::resolve(Some(darkness));
            for (key, value) in tokens.iter() {
                assert!(!value.is_empty(), "{darkness:?}.{key} 비어 있음");
            }
        }
    }

    #[test]
    fn resolve_is_stable() {
        for darkness in ALL {
            let first = ThemeResolver::resolve(Some(darkness));
            let second = ThemeResolver::resolve(Some(darkness));
            assert!(std::ptr::eq(first, second));
            assert_eq!(
                serde_json::to_vec(first).unwrap(),
                serde_json::to_vec(second).unwrap()
            );
        }
    }

    #[test]
    fn absent_falls_back_to_default() {
        assert_eq!(ThemeResolver::resolve(None), &ThemeTokens::DEFAULT);
    }

    #[test]
    fn unrecognized_value_falls_back_to_default() {
        let settings: AppSettings =
            serde_json::from_str(r#"{"app_background_darkness":"ultra"}"#).unwrap();
        let tokens = ThemeResolver::resolve(settings.app_background_darkness);
        assert_eq!(tokens, &ThemeTokens::DEFAULT);
    }

    #[test]
    fn variants_are_distinct() {
        assert_ne!(ThemeTokens::DEFAULT, ThemeTokens::DARKER);
        assert_ne!(ThemeTokens::DARKER, ThemeTokens::DEEP_DARK);
    }

    #[test]
    fn loading_style_is_neutral() {
        assert_eq!(ThemeResolver::loading().background, ThemeTokens::DEFAULT.body_bg);
    }
}
