//! Line-based viewport state for the menu display.

/// Top-of-view line index.
///
/// Conceptually owned by the presentation boundary, but the clamping
/// rules depend on the menu length, so the state lives with the
/// core: the top line never exceeds the last entry, and it is 0 for
/// an empty menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewState {
    top: usize,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// First visible line index.
    pub fn top(&self) -> usize {
        self.top
    }

    /// Scroll by a signed number of lines.
    pub fn scroll_by(&mut self, delta: i32, menu_len: usize) {
        self.set(self.top as i64 + i64::from(delta), menu_len);
    }

    /// Jump to an absolute line.
    pub fn scroll_to(&mut self, line: usize, menu_len: usize) {
        self.set(line as i64, menu_len);
    }

    /// Scroll by whole pages of `page_lines` lines.
    pub fn page(&mut self, pages: i32, page_lines: usize, menu_len: usize) {
        let lines = i64::from(pages) * page_lines as i64;
        self.set(self.top as i64 + lines, menu_len);
    }

    /// Back to the top, for a freshly loaded document.
    pub fn reset(&mut self) {
        self.top = 0;
    }

    fn set(&mut self, target: i64, menu_len: usize) {
        let max = menu_len.saturating_sub(1) as i64;
        self.top = target.clamp(0, max) as usize;
    }
}
