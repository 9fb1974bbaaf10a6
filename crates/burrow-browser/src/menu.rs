//! Menu model: the ordered entries parsed from a Gopher response.

use burrow_types::locator::{TYPE_INFO, TYPE_MENU, parse_port};
use burrow_types::{LineError, Locator};

/// Placeholder selector/host carried by informational entries,
/// preserved for output-format fidelity.
const INFO_FILLER: &str = "null";

/// One line of a parsed document: a navigable item or inert text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub kind: char,
    pub name: String,
    pub selector: String,
    pub host: String,
    pub port: u16,
}

impl Entry {
    /// Informational entries are display-only and cannot be opened.
    pub fn is_selectable(&self) -> bool {
        self.kind != TYPE_INFO
    }

    /// The locator this entry points at.
    pub fn locator(&self) -> Locator {
        Locator::new(self.kind, self.selector.clone(), self.host.clone(), self.port)
    }
}

/// Which per-line handler populates the menu. Picked once per fetch
/// from the requested document type, not per line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// Tab-separated menu lines (requested type `'1'`).
    Menu,
    /// Verbatim lines shown as informational entries (any other type).
    Text,
}

impl DocumentKind {
    pub fn for_item_type(kind: char) -> Self {
        if kind == TYPE_MENU { Self::Menu } else { Self::Text }
    }
}

/// Growable, append-only ordered collection of entries.
#[derive(Debug, Clone, Default)]
pub struct Menu {
    entries: Vec<Entry>,
}

impl Menu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Drop every entry at index `from` and beyond.
    pub fn truncate(&mut self, from: usize) {
        self.entries.truncate(from);
    }

    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Feed one wire line through the handler for `kind`.
    ///
    /// Malformed menu lines are logged and skipped; a single bad
    /// line never aborts the rest of the document.
    pub fn push_wire_line(&mut self, kind: DocumentKind, line: &str) {
        match kind {
            DocumentKind::Menu => {
                if let Err(e) = self.push_menu_line(line) {
                    log::warn!("skipping malformed menu line: {e}");
                }
            },
            DocumentKind::Text => self.push_text_line(line),
        }
    }

    /// Parse a menu line: the first character is the entry type, the
    /// remainder is exactly four tab-separated fields
    /// `name`, `selector`, `host`, `port`.
    fn push_menu_line(&mut self, line: &str) -> Result<(), LineError> {
        let mut chars = line.chars();
        let kind = chars
            .next()
            .ok_or_else(|| LineError::MissingField(line.to_string()))?;

        let mut fields = chars.as_str().split('\t');
        let (Some(name), Some(selector), Some(host), Some(port)) =
            (fields.next(), fields.next(), fields.next(), fields.next())
        else {
            return Err(LineError::MissingField(line.to_string()));
        };
        let port = parse_port(port).ok_or_else(|| LineError::InvalidPort(line.to_string()))?;

        self.push(Entry {
            kind,
            name: name.to_string(),
            selector: selector.to_string(),
            host: host.to_string(),
            port,
        });
        Ok(())
    }

    /// Wrap a raw line, first character included, as an inert
    /// informational entry. Text documents are never interpreted.
    fn push_text_line(&mut self, line: &str) {
        self.push(Entry {
            kind: TYPE_INFO,
            name: line.to_string(),
            selector: INFO_FILLER.to_string(),
            host: INFO_FILLER.to_string(),
            port: 0,
        });
    }
}
