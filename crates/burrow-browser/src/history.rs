//! Visited-locator history with branch-on-navigate semantics.

use burrow_types::Locator;

/// Ordered record of visited locators plus the index of the one
/// currently displayed.
///
/// Invariant: `pos < len` whenever the history is non-empty, and
/// `pos == 0` when it is empty.
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<Locator>,
    pos: usize,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a user-initiated navigation.
    ///
    /// Forward entries beyond the current position are discarded
    /// first (browser-style branch on navigate), then the locator is
    /// appended and the position advances to it. Back/forward
    /// re-visits must not go through here.
    pub fn record(&mut self, locator: Locator) {
        if !self.entries.is_empty() {
            self.entries.truncate(self.pos + 1);
        }
        self.entries.push(locator);
        self.pos = self.entries.len() - 1;
    }

    /// Move through history without mutating it.
    ///
    /// A non-negative `delta` goes back that many steps; a negative
    /// one goes forward, via the same subtraction. When the target
    /// would leave `[0, len)` nothing happens and `None` is
    /// returned; otherwise the locator to re-fetch is handed back.
    pub fn step(&mut self, delta: i32) -> Option<&Locator> {
        let target = self.target(delta)?;
        self.pos = target;
        self.entries.get(self.pos)
    }

    /// Whether `step(delta)` would succeed.
    pub fn can_step(&self, delta: i32) -> bool {
        self.target(delta).is_some()
    }

    fn target(&self, delta: i32) -> Option<usize> {
        let target = self.pos as i64 - i64::from(delta);
        if target < 0 || target >= self.entries.len() as i64 {
            return None;
        }
        Some(target as usize)
    }

    /// Drop entries at index `from` and beyond, clamping the
    /// position back into range (0 when emptied).
    pub fn truncate(&mut self, from: usize) {
        self.entries.truncate(from);
        if self.entries.is_empty() {
            self.pos = 0;
        } else if self.pos >= self.entries.len() {
            self.pos = self.entries.len() - 1;
        }
    }

    /// The currently displayed locator, if any.
    pub fn current(&self) -> Option<&Locator> {
        self.entries.get(self.pos)
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
