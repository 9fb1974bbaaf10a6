//! Blocking TCP transport for a single Gopher request/response.

use std::io::{self, Write};
use std::net::{TcpStream, ToSocketAddrs};

use burrow_types::{Locator, TransportError};

use crate::lines::read_lines;

/// One request/response exchange against a Gopher server.
///
/// Object-safe so the navigation layer can run against a scripted
/// transport in tests.
pub trait Fetch {
    /// Fetch `locator`, feeding each logical response line to
    /// `on_line`. Lines delivered before a failure stay delivered.
    fn fetch(
        &mut self,
        locator: &Locator,
        on_line: &mut dyn FnMut(&str),
    ) -> Result<(), TransportError>;
}

/// Production transport over [`std::net::TcpStream`].
///
/// Fully blocking with no connect or read timeout: a stalled peer
/// blocks the caller until the connection drops. Callers wanting a
/// responsive surface run the fetch off their event loop.
#[derive(Debug, Default)]
pub struct TcpTransport;

impl TcpTransport {
    pub fn new() -> Self {
        Self
    }
}

impl Fetch for TcpTransport {
    fn fetch(
        &mut self,
        locator: &Locator,
        on_line: &mut dyn FnMut(&str),
    ) -> Result<(), TransportError> {
        let mut stream = connect(&locator.host, locator.port)?;
        log::debug!("connected to {}:{}", locator.host, locator.port);

        stream
            .write_all(format!("{}\r\n", locator.selector).as_bytes())
            .map_err(TransportError::SendFailed)?;

        // The stream drops, and the socket closes, on every path out
        // of this call, including receive errors.
        read_lines(&mut stream, on_line)
    }
}

/// Resolve `host:port` and connect, trying candidate addresses in
/// resolver-returned order. The first address that connects wins;
/// the rest are abandoned.
fn connect(host: &str, port: u16) -> Result<TcpStream, TransportError> {
    let addrs = (host, port)
        .to_socket_addrs()
        .map_err(TransportError::ResolutionFailed)?;

    let mut last_err = None;
    for addr in addrs {
        match TcpStream::connect(addr) {
            Ok(stream) => return Ok(stream),
            Err(e) => last_err = Some(e),
        }
    }

    Err(match last_err {
        Some(e) => TransportError::ConnectFailed(e),
        None => TransportError::ResolutionFailed(io::Error::new(
            io::ErrorKind::NotFound,
            format!("no addresses for {host}:{port}"),
        )),
    })
}
