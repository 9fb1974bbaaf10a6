//! Gopher resource locators and the locator-string parser.
//!
//! Syntax: `[gopher://]host[:port][/[type]selector]`. The port
//! defaults to 70 and the item type to `'1'` (menu). The selector is
//! everything after the type character, verbatim: internal slashes
//! are part of it and nothing is decoded or escaped.

use std::fmt;

use crate::error::ParseError;

/// Default Gopher port when a locator omits one.
pub const DEFAULT_PORT: u16 = 70;

/// Highest accepted port. The wire format carries ports as signed
/// 16-bit, so the upper half of the port space is rejected rather
/// than silently widened.
pub const MAX_PORT: u16 = 32767;

/// Item type of a menu document.
pub const TYPE_MENU: char = '1';
/// Item type of a plain text document.
pub const TYPE_TEXT: char = '0';
/// Item type of an informational (non-navigable) line.
pub const TYPE_INFO: char = 'i';

/// A parsed Gopher resource locator.
///
/// Immutable once constructed; history keeps copies by value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locator {
    /// Item-type character (`'1'` menu, `'0'` text; anything else is
    /// passed through uninterpreted).
    pub kind: char,
    /// Server-defined opaque path, sent verbatim in the request.
    pub selector: String,
    pub host: String,
    pub port: u16,
}

impl Locator {
    pub fn new(kind: char, selector: impl Into<String>, host: impl Into<String>, port: u16) -> Self {
        Self {
            kind,
            selector: selector.into(),
            host: host.into(),
            port,
        }
    }

    /// Parse a locator string.
    ///
    /// The host is the longest prefix free of `:` and `/`. A `:`
    /// introduces a port segment running up to the next `/`, which
    /// must parse as an integer in `[0, MAX_PORT]`. A remaining `/`
    /// is consumed, the next character (if any) is the item type,
    /// and the rest is the selector. A bare host yields an empty
    /// selector and type `'1'`.
    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        let rest = raw.strip_prefix("gopher://").unwrap_or(raw);

        let host_end = rest.find([':', '/']).unwrap_or(rest.len());
        let host = &rest[..host_end];
        if host.is_empty() {
            return Err(ParseError::InvalidUrl(raw.to_string()));
        }
        let mut rest = &rest[host_end..];

        let port = match rest.strip_prefix(':') {
            Some(after) => {
                let port_end = after.find('/').unwrap_or(after.len());
                let digits = &after[..port_end];
                rest = &after[port_end..];
                parse_port(digits).ok_or_else(|| ParseError::InvalidPort(digits.to_string()))?
            },
            None => DEFAULT_PORT,
        };

        let (kind, selector) = match rest.strip_prefix('/') {
            Some(path) => {
                let mut chars = path.chars();
                match chars.next() {
                    Some(c) => (c, chars.as_str().to_string()),
                    None => (TYPE_MENU, String::new()),
                }
            },
            None => (TYPE_MENU, String::new()),
        };

        Ok(Self {
            kind,
            selector,
            host: host.to_string(),
            port,
        })
    }

    /// Whether this locator names a menu document.
    pub fn is_menu(&self) -> bool {
        self.kind == TYPE_MENU
    }
}

/// Canonical display form. Omits the port when it is 70 and the
/// whole `/{type}{selector}` segment when it would be `/1` with an
/// empty selector, so the output re-parses to an equal locator.
impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.host)?;
        if self.port != DEFAULT_PORT {
            write!(f, ":{}", self.port)?;
        }
        if self.kind != TYPE_MENU || !self.selector.is_empty() {
            write!(f, "/{}{}", self.kind, self.selector)?;
        }
        Ok(())
    }
}

/// Parse a port field into the accepted range `[0, MAX_PORT]`.
pub fn parse_port(s: &str) -> Option<u16> {
    match s.parse::<u16>() {
        Ok(p) if p <= MAX_PORT => Some(p),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_locator_with_scheme() {
        let loc = Locator::parse("gopher://host:7070/1foo").unwrap();
        assert_eq!(loc.kind, '1');
        assert_eq!(loc.selector, "foo");
        assert_eq!(loc.host, "host");
        assert_eq!(loc.port, 7070);
    }

    #[test]
    fn bare_host_defaults() {
        let loc = Locator::parse("host").unwrap();
        assert_eq!(loc.kind, '1');
        assert_eq!(loc.selector, "");
        assert_eq!(loc.host, "host");
        assert_eq!(loc.port, 70);
    }

    #[test]
    fn bad_port_rejected() {
        assert_eq!(
            Locator::parse("host:bad/1x"),
            Err(ParseError::InvalidPort("bad".into())),
        );
    }

    #[test]
    fn port_out_of_range_rejected() {
        assert!(matches!(
            Locator::parse("host:32768"),
            Err(ParseError::InvalidPort(_)),
        ));
        assert_eq!(Locator::parse("host:32767").unwrap().port, 32767);
    }

    #[test]
    fn empty_port_segment_rejected() {
        assert!(matches!(
            Locator::parse("host:/1x"),
            Err(ParseError::InvalidPort(_)),
        ));
    }

    #[test]
    fn empty_host_rejected() {
        assert!(matches!(Locator::parse(""), Err(ParseError::InvalidUrl(_))));
        assert!(matches!(
            Locator::parse("gopher://"),
            Err(ParseError::InvalidUrl(_)),
        ));
        assert!(matches!(
            Locator::parse(":70/1x"),
            Err(ParseError::InvalidUrl(_)),
        ));
    }

    #[test]
    fn selector_keeps_internal_slashes() {
        let loc = Locator::parse("host/0docs/readme.txt").unwrap();
        assert_eq!(loc.kind, '0');
        assert_eq!(loc.selector, "docs/readme.txt");
    }

    #[test]
    fn trailing_slash_only_defaults_type() {
        let loc = Locator::parse("host:7070/").unwrap();
        assert_eq!(loc.kind, '1');
        assert_eq!(loc.selector, "");
        assert_eq!(loc.port, 7070);
    }

    #[test]
    fn type_without_selector() {
        let loc = Locator::parse("host/0").unwrap();
        assert_eq!(loc.kind, '0');
        assert_eq!(loc.selector, "");
    }

    #[test]
    fn display_omits_defaults() {
        assert_eq!(Locator::new('1', "", "host", 70).to_string(), "host");
        assert_eq!(
            Locator::new('1', "", "host", 7070).to_string(),
            "host:7070"
        );
        assert_eq!(
            Locator::new('0', "sel", "host", 70).to_string(),
            "host/0sel"
        );
        assert_eq!(
            Locator::new('1', "foo", "host", 7070).to_string(),
            "host:7070/1foo"
        );
    }

    #[test]
    fn parse_port_bounds() {
        assert_eq!(parse_port("0"), Some(0));
        assert_eq!(parse_port("70"), Some(70));
        assert_eq!(parse_port("32767"), Some(32767));
        assert_eq!(parse_port("32768"), None);
        assert_eq!(parse_port("65536"), None);
        assert_eq!(parse_port(""), None);
        assert_eq!(parse_port("7x"), None);
        assert_eq!(parse_port("-1"), None);
    }

    mod prop {
        use super::*;
        use proptest::prelude::*;

        fn arb_kind() -> impl Strategy<Value = char> {
            "[0-9a-zA-Z]".prop_map(|s| s.chars().next().unwrap())
        }

        fn arb_locator() -> impl Strategy<Value = Locator> {
            (
                arb_kind(),
                "[a-zA-Z0-9/. _-]{0,24}",
                "[a-z0-9.-]{1,16}",
                0u16..=MAX_PORT,
            )
                .prop_map(|(kind, selector, host, port)| Locator::new(kind, selector, host, port))
        }

        proptest! {
            #[test]
            fn display_round_trips(loc in arb_locator()) {
                let reparsed = Locator::parse(&loc.to_string()).unwrap();
                prop_assert_eq!(reparsed, loc);
            }

            #[test]
            fn scheme_prefix_is_transparent(loc in arb_locator()) {
                let with_scheme = format!("gopher://{loc}");
                prop_assert_eq!(Locator::parse(&with_scheme).unwrap(), loc);
            }
        }
    }
}
