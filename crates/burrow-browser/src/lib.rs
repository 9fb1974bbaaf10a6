//! Gopher browser core: menu model, history, and navigation.
//!
//! Everything on-screen is an external collaborator. A rendering
//! surface paints [`GopherBrowser::entries`] starting at
//! [`GopherBrowser::top`] under [`GopherBrowser::title`], and feeds
//! decoded input back in as [`Command`]s. The core does the protocol
//! work and owns all document state; it never touches windows,
//! fonts, or events.

pub mod browser;
pub mod commands;
pub mod config;
pub mod history;
pub mod menu;
pub mod nav;
pub mod view;

pub use browser::GopherBrowser;
pub use commands::Command;
pub use config::BrowserConfig;
pub use history::History;
pub use menu::{DocumentKind, Entry, Menu};
pub use nav::Navigator;
pub use view::ViewState;
