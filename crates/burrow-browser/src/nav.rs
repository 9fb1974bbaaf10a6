//! Navigation controller: drives transport and parsing, owns the
//! menu model and history.

use burrow_net::Fetch;
use burrow_types::{Locator, Result};

use crate::history::History;
use crate::menu::{DocumentKind, Menu};

/// Orchestrates one navigation at a time: parse/validate the target,
/// clear and repopulate the menu through the transport, then record
/// history and the new title.
///
/// Strictly synchronous; the caller blocks for the whole fetch and
/// must not re-enter while one is outstanding.
pub struct Navigator {
    transport: Box<dyn Fetch>,
    menu: Menu,
    history: History,
    title: String,
}

impl Navigator {
    pub fn new(transport: Box<dyn Fetch>) -> Self {
        Self {
            transport,
            menu: Menu::new(),
            history: History::new(),
            title: String::new(),
        }
    }

    /// Fetch `locator` into the menu model.
    ///
    /// The menu is cleared up front. On failure it stays cleared (or
    /// partially filled, for a receive error mid-response) and
    /// neither the title nor the history change; the error surfaces
    /// once. History re-visits pass `add_to_history = false` so that
    /// visiting history never mutates it.
    pub fn navigate(&mut self, locator: &Locator, add_to_history: bool) -> Result<()> {
        self.menu.clear();
        let kind = DocumentKind::for_item_type(locator.kind);

        let menu = &mut self.menu;
        self.transport
            .fetch(locator, &mut |line| menu.push_wire_line(kind, line))?;

        self.title = locator.to_string();
        log::info!("loaded {} ({} entries)", self.title, self.menu.len());
        if add_to_history {
            self.history.record(locator.clone());
        }
        Ok(())
    }

    /// Parse and open a user-supplied locator string.
    pub fn open(&mut self, raw: &str) -> Result<()> {
        let locator = Locator::parse(raw)?;
        self.navigate(&locator, true)
    }

    /// Open the menu entry at `index`, recording it in history.
    ///
    /// Informational entries and out-of-range indices are a no-op;
    /// `Ok(false)` reports that nothing was fetched.
    pub fn select(&mut self, index: usize) -> Result<bool> {
        let Some(entry) = self.menu.get(index) else {
            return Ok(false);
        };
        if !entry.is_selectable() {
            return Ok(false);
        }
        let locator = entry.locator();
        self.navigate(&locator, true)?;
        Ok(true)
    }

    /// Step through history and re-fetch the target without
    /// recording the visit. `Ok(false)` when the step was out of
    /// range and nothing happened.
    pub fn step(&mut self, delta: i32) -> Result<bool> {
        let Some(locator) = self.history.step(delta) else {
            return Ok(false);
        };
        let locator = locator.clone();
        self.navigate(&locator, false)?;
        Ok(true)
    }

    /// Current document title: the canonical form of the last
    /// successfully loaded locator.
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    pub fn history(&self) -> &History {
        &self.history
    }
}
