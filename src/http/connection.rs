use bytes::BytesMut;
use std::sync::Arc;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite};

use crate::http::parser::{parse_request, ParseError};
use crate::http::request::Request;
use crate::http::response::ResponseFormatter;
use crate::http::writer::ResponseWriter;
use crate::site::{resolve, Site};

/// Acknowledgment body for the control path.
pub const LOGIN_BODY: &str = "<html><body><h1>Login Successful</h1></body></html>";

/// Substitute body for a page lookup miss. Sent inside the usual
/// `200 OK` envelope, not a 404 status.
pub const NOT_FOUND_BODY: &str = "<html><body><h1>404 Not Found</h1></body></html>";

/// Path that triggers server shutdown instead of page serving.
const CONTROL_PATH: &str = "/login";

/// What the accept loop should do after this connection.
///
/// The control path does not flip a global flag; the decision to stop
/// accepting travels back to the caller as a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Keep accepting connections.
    KeepServing,
    /// Stop accepting; the control path was hit.
    Shutdown,
}

/// Handles exactly one request/response exchange on one stream.
///
/// The stream is generic so tests can drive the handler over in-memory
/// duplex pipes. Dropping the connection releases the stream on every
/// exit path, including parse failures.
pub struct Connection<S> {
    stream: S,
    buffer: BytesMut,
    state: ConnectionState,
    site: Arc<dyn Site>,
    formatter: ResponseFormatter,
}

pub enum ConnectionState {
    Reading,
    Processing(Request),
    Writing(ResponseWriter, bool), // bool = shutdown requested
    Closed,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, site: Arc<dyn Site>, formatter: ResponseFormatter) -> Self {
        Self {
            stream,
            buffer: BytesMut::with_capacity(4096),
            state: ConnectionState::Reading,
            site,
            formatter,
        }
    }

    pub async fn run(&mut self) -> anyhow::Result<Verdict> {
        let mut verdict = Verdict::KeepServing;

        loop {
            match &mut self.state {
                ConnectionState::Reading => {
                    match self.read_request().await? {
                        Some(req) => {
                            self.state = ConnectionState::Processing(req);
                        }
                        None => {
                            self.state = ConnectionState::Closed;
                        }
                    }
                }

                ConnectionState::Processing(req) => {
                    let (body, shutdown) = Self::route(self.site.as_ref(), req);

                    let writer = ResponseWriter::new(self.formatter.format(&body));
                    self.state = ConnectionState::Writing(writer, shutdown);
                }

                ConnectionState::Writing(writer, shutdown) => {
                    writer.write_to_stream(&mut self.stream).await?;

                    if *shutdown {
                        verdict = Verdict::Shutdown;
                    }
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(verdict)
    }

    pub async fn read_request(&mut self) -> anyhow::Result<Option<Request>> {
        loop {
            // Try parsing whatever we already have
            match parse_request(&self.buffer, false) {
                Ok(request) => {
                    return Ok(Some(request));
                }

                Err(ParseError::Incomplete) => {
                    // Need more data → fall through to read
                }

                Err(e) => {
                    // Malformed request → abort, nothing gets written back
                    return Err(anyhow::anyhow!("HTTP parse error: {:?}", e));
                }
            }

            let n = self.stream.read_buf(&mut self.buffer).await?;

            if n == 0 {
                if self.buffer.is_empty() {
                    // Client closed without sending anything
                    return Ok(None);
                }

                // Stream exhausted: parse what was received as final
                let request = parse_request(&self.buffer, true)
                    .map_err(|e| anyhow::anyhow!("HTTP parse error: {:?}", e))?;
                return Ok(Some(request));
            }
        }
    }

    fn route(site: &dyn Site, req: &Request) -> (String, bool) {
        if req.path == CONTROL_PATH {
            tracing::info!("Login request received, shutting down after this connection");
            return (LOGIN_BODY.to_string(), true);
        }

        let key = resolve(&req.path);
        let body = site
            .lookup(&key)
            .unwrap_or_else(|| NOT_FOUND_BODY.to_string());
        (body, false)
    }
}
