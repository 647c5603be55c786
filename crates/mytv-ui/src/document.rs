//! 문서 표면 어댑터.
//!
//! `DocumentSurface` 포트의 인프로세스 구현. 헤드리스 실행과 테스트에서 사용한다.

use mytv_core::ports::document::DocumentSurface;
use parking_lot::Mutex;
use tracing::debug;

#[derive(Debug, Default)]
struct DocumentState {
    title: String,
    scroll_y: u32,
    scroll_resets: usize,
}

/// 메모리 문서 — `DocumentSurface` 포트 구현
#[derive(Debug, Default)]
pub struct MemoryDocument {
    state: Mutex<DocumentState>,
}

impl MemoryDocument {
    /// 새 문서 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 사용자 스크롤 흉내 (테스트용)
    pub fn scroll_by(&self, dy: u32) {
        let mut state = self.state.lock();
        state.scroll_y = state.scroll_y.saturating_add(dy);
    }

    /// 현재 세로 스크롤 위치
    pub fn scroll_y(&self) -> u32 {
        self.state.lock().scroll_y
    }

    /// 원점 초기화 횟수
    pub fn scroll_resets(&self) -> usize {
        self.state.lock().scroll_resets
    }
}

impl DocumentSurface for MemoryDocument {
    fn set_title(&self, title: &str) {
        debug!("문서 제목: {title}");
        self.state.lock().title = title.to_string();
    }

    fn title(&self) -> String {
        self.state.lock().title.clone()
    }

    fn scroll_to_origin(&self) {
        let mut state = self.state.lock();
        state.scroll_y = 0;
        state.scroll_resets += 1;
    }
}
