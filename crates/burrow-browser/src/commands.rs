//! Discrete navigation commands emitted by a rendering surface.

/// Inputs the presentation layer feeds into the browser core.
///
/// The surface decodes raw pointer/keyboard events into these; the
/// core never sees events, coordinates, or key codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Open a literal locator string.
    Open(String),
    /// Open the menu entry at this index. Informational entries are
    /// not selectable; selecting one does nothing.
    Select(usize),
    /// Step through history: positive is back, negative is forward.
    Step(i32),
    /// Scroll the viewport by a signed number of lines.
    ScrollBy(i32),
    /// Jump the viewport to an absolute line.
    ScrollTo(usize),
    /// Scroll by whole pages: positive is down, negative is up.
    Page(i32),
}
