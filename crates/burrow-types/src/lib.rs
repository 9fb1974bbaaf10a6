//! Shared value types for the Burrow Gopher client.
//!
//! Holds the [`Locator`] type with its string parser and the error
//! taxonomy used across the workspace. No I/O happens here.

pub mod error;
pub mod locator;

pub use error::{BurrowError, LineError, ParseError, Result, TransportError};
pub use locator::{DEFAULT_PORT, Locator, MAX_PORT};
