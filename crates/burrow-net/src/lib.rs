//! Network layer for the Burrow Gopher client.
//!
//! One synchronous request/response exchange per fetch: resolve,
//! connect, send the selector, then stream the response through the
//! line classifier. The [`Fetch`] trait is the seam the navigation
//! layer mocks in tests.

pub mod lines;
pub mod transport;

pub use lines::{MAX_LINE_LEN, read_lines};
pub use transport::{Fetch, TcpTransport};
