//! 문서 표면 포트.
//!
//! 구현: `mytv-ui::document::MemoryDocument`

/// 프로세스 전역 문서 메타데이터와 스크롤 위치
pub trait DocumentSurface: Send + Sync {
    /// 문서 제목 설정
    fn set_title(&self, title: &str);

    /// 현재 문서 제목
    fn title(&self) -> String;

    /// 스크롤 위치를 원점으로 초기화
    fn scroll_to_origin(&self);
}
