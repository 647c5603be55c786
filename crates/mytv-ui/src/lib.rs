//! # mytv-ui
//!
//! 프레젠테이션 계층이 소비하는 값들.
//! 어둡기 단계별 테마 토큰, 셸 화면(로딩/업데이트 안내) 문자열,
//! 문서 제목/스크롤 표면 어댑터를 제공한다.

pub mod document;
pub mod i18n;
pub mod theme;

pub use document::MemoryDocument;
pub use i18n::{Locale, Strings};
pub use theme::{ThemeResolver, ThemeTokens};
