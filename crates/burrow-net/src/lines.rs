//! Splits a raw Gopher response stream into logical lines.
//!
//! Responses are CRLF- or LF-terminated lines, optionally closed by
//! a line containing exactly `.` (the end-of-response sentinel).
//! Servers that omit the sentinel and servers whose last line is
//! unterminated are both tolerated.

use std::io::Read;

use burrow_types::TransportError;

/// Maximum payload bytes per logical line. A longer line is split:
/// the first 511 bytes are delivered, a diagnostic is logged, and
/// the remainder continues as a second logical line.
pub const MAX_LINE_LEN: usize = 511;

/// Stream `reader` through `on_line`, one call per logical line.
///
/// Stops successfully when the sentinel line is seen (consumed, not
/// forwarded) or when the peer closes the connection. A read error
/// is [`TransportError::ReceiveFailed`]; lines already delivered
/// stay delivered.
pub fn read_lines<R: Read>(
    mut reader: R,
    on_line: &mut dyn FnMut(&str),
) -> Result<(), TransportError> {
    let mut chunk = [0u8; 4096];
    let mut line: Vec<u8> = Vec::with_capacity(MAX_LINE_LEN);
    // Set after '\r' so a following '\n' is part of the same terminator.
    let mut skip_lf = false;

    loop {
        let n = reader.read(&mut chunk).map_err(TransportError::ReceiveFailed)?;
        if n == 0 {
            break;
        }

        for &byte in &chunk[..n] {
            if skip_lf {
                skip_lf = false;
                if byte == b'\n' {
                    continue;
                }
            }
            match byte {
                b'\r' | b'\n' => {
                    skip_lf = byte == b'\r';
                    if line == b"." {
                        return Ok(());
                    }
                    flush(&mut line, on_line);
                },
                _ => {
                    if line.len() == MAX_LINE_LEN {
                        log::warn!("response line exceeds {MAX_LINE_LEN} bytes, splitting");
                        flush(&mut line, on_line);
                    }
                    line.push(byte);
                },
            }
        }
    }

    // Peer closed without the sentinel. Flush an unterminated final
    // line; the sentinel check still applies to it.
    if !line.is_empty() && line != b"." {
        flush(&mut line, on_line);
    }
    Ok(())
}

fn flush(line: &mut Vec<u8>, on_line: &mut dyn FnMut(&str)) {
    on_line(&String::from_utf8_lossy(line));
    line.clear();
}
