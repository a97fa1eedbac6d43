use crate::config::ResponseConfig;

const STATUS_LINE: &str = "HTTP/1.1 200 OK";
const CONTENT_TYPE: &str = "text/html; charset=UTF-8";

/// Frames a response body in the server's fixed HTTP/1.1 envelope.
///
/// Every response goes out as `200 OK` with the same header block, whatever
/// the body says. A missing page is reported by substituting the 404 body,
/// not by changing the status line. That is observable client behavior the
/// server deliberately keeps, so do not "correct" it here.
///
/// The `Date` and `Server` values are demo constants taken from
/// configuration, not computed from the clock.
#[derive(Debug, Clone)]
pub struct ResponseFormatter {
    date: String,
    server: String,
}

impl ResponseFormatter {
    pub fn new(date: impl Into<String>, server: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            server: server.into(),
        }
    }

    pub fn from_config(cfg: &ResponseConfig) -> Self {
        Self::new(cfg.date.clone(), cfg.server.clone())
    }

    /// Wraps `body` in the status line and header block, ready for the wire.
    ///
    /// Content-Length is the exact byte length of `body`, not its character
    /// count. The header block and the body are separated by one blank line.
    pub fn format(&self, body: &str) -> Vec<u8> {
        let header = format!(
            "{STATUS_LINE}\r\n\
             Date: {}\r\n\
             Server: {}\r\n\
             Content-Type: {CONTENT_TYPE}\r\n\
             Content-Length: {}\r\n\
             Connection: close\r\n\
             \r\n",
            self.date,
            self.server,
            body.len(),
        );

        let mut buf = Vec::with_capacity(header.len() + body.len());
        buf.extend_from_slice(header.as_bytes());
        buf.extend_from_slice(body.as_bytes());
        buf
    }
}
