//! Error types for the Burrow client.
//!
//! Three recoverable families: locator text that does not parse,
//! network failures, and single malformed menu lines. The first two
//! surface to the caller; line errors are logged and the offending
//! line skipped.

use std::io;

/// A locator string that could not be parsed. No state changes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("invalid locator: {0:?}")]
    InvalidUrl(String),

    #[error("invalid port in locator: {0:?}")]
    InvalidPort(String),
}

/// A network-layer failure. The menu model is left cleared or
/// partially filled; history is untouched. Nothing is retried.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("address resolution failed: {0}")]
    ResolutionFailed(#[source] io::Error),

    #[error("connect failed: {0}")]
    ConnectFailed(#[source] io::Error),

    #[error("send failed: {0}")]
    SendFailed(#[source] io::Error),

    #[error("receive failed: {0}")]
    ReceiveFailed(#[source] io::Error),
}

/// A single malformed menu line. Non-fatal: the line is skipped and
/// parsing of the rest of the document continues.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LineError {
    #[error("menu line is missing a field: {0:?}")]
    MissingField(String),

    #[error("menu line has an invalid port: {0:?}")]
    InvalidPort(String),
}

/// Errors a navigation can surface to the caller.
#[derive(Debug, thiserror::Error)]
pub enum BurrowError {
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("transport error: {0}")]
    Transport(#[from] TransportError),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, BurrowError>;
