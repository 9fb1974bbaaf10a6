//! Top-level browser component a rendering surface drives.

use burrow_net::{Fetch, TcpTransport};
use burrow_types::Result;

use crate::commands::Command;
use crate::config::BrowserConfig;
use crate::menu::Entry;
use crate::nav::Navigator;
use crate::view::ViewState;

/// Owns the navigation pipeline and viewport state, accepts
/// [`Command`]s from the presentation layer, and exposes the menu,
/// scroll top, and title for painting.
pub struct GopherBrowser {
    config: BrowserConfig,
    nav: Navigator,
    view: ViewState,
}

impl GopherBrowser {
    /// Build with the production TCP transport.
    pub fn new(config: BrowserConfig) -> Self {
        Self::with_transport(config, Box::new(TcpTransport::new()))
    }

    /// Build with a caller-supplied transport (tests, proxies).
    pub fn with_transport(config: BrowserConfig, transport: Box<dyn Fetch>) -> Self {
        Self {
            config,
            nav: Navigator::new(transport),
            view: ViewState::new(),
        }
    }

    /// Apply one navigation command. Scroll state resets whenever a
    /// command actually loaded a new document.
    pub fn handle(&mut self, command: Command) -> Result<()> {
        match command {
            Command::Open(raw) => {
                self.nav.open(&raw)?;
                self.view.reset();
            },
            Command::Select(index) => {
                if self.nav.select(index)? {
                    self.view.reset();
                }
            },
            Command::Step(delta) => {
                if self.nav.step(delta)? {
                    self.view.reset();
                }
            },
            Command::ScrollBy(delta) => self.view.scroll_by(delta, self.nav.menu().len()),
            Command::ScrollTo(line) => self.view.scroll_to(line, self.nav.menu().len()),
            Command::Page(pages) => {
                self.view
                    .page(pages, self.config.page_lines, self.nav.menu().len());
            },
        }
        Ok(())
    }

    /// Entries of the current document, in display order.
    pub fn entries(&self) -> &[Entry] {
        self.nav.menu().entries()
    }

    /// First visible line index for the rendering surface.
    pub fn top(&self) -> usize {
        self.view.top()
    }

    /// Title of the current document (canonical locator form).
    pub fn title(&self) -> &str {
        self.nav.title()
    }

    /// Whether a `Step(delta)` command would navigate (for enabling
    /// back/forward chrome).
    pub fn can_step(&self, delta: i32) -> bool {
        self.nav.history().can_step(delta)
    }

    pub fn config(&self) -> &BrowserConfig {
        &self.config
    }
}
