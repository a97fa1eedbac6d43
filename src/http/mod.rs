//! HTTP protocol implementation.
//!
//! This module implements the simplified HTTP/1.1 dialect the server speaks:
//! one request read, one response written, then the connection is closed.
//!
//! # Architecture
//!
//! The HTTP layer is organized into several submodules:
//!
//! - **`connection`**: The main connection handler implementing the request-response state machine
//! - **`parser`**: Parses an incoming HTTP request from the buffered bytes
//! - **`request`**: HTTP request representation and accessor utilities
//! - **`response`**: Response framing with a fixed `200 OK` envelope
//! - **`writer`**: Serializes and writes HTTP responses to the client
//!
//! # Connection State Machine
//!
//! Each client connection goes through a state machine:
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Wait for incoming request data
//!        └──────┬──────┘
//!               │ Request received
//!               ▼
//!        ┌──────────────────┐
//!        │   Processing     │ ← Route: control path or page lookup
//!        └──────┬───────────┘
//!               │ Response ready
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Send response to client
//!        └──────┬───────────┘
//!               │ Response sent
//!               └─ Closed (no keep-alive)
//! ```
//!
//! A parse failure aborts the connection from `Reading` without writing a
//! response. The handler reports back to the accept loop whether the control
//! path was hit, so the caller can stop accepting new connections.
//!
//! # Example
//!
//! ```ignore
//! use doorman::config::ResponseConfig;
//! use doorman::http::connection::{Connection, Verdict};
//! use doorman::http::response::ResponseFormatter;
//! use doorman::site::store::DirSite;
//! use std::sync::Arc;
//! use tokio::net::TcpListener;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let listener = TcpListener::bind("127.0.0.1:9090").await?;
//!     let site = Arc::new(DirSite::new("site"));
//!     let formatter = ResponseFormatter::from_config(&ResponseConfig::default());
//!
//!     loop {
//!         let (socket, _addr) = listener.accept().await?;
//!         let mut conn = Connection::new(socket, site.clone(), formatter.clone());
//!         match conn.run().await {
//!             Ok(Verdict::Shutdown) => break,
//!             Ok(Verdict::KeepServing) => {}
//!             Err(e) => eprintln!("Connection error: {}", e),
//!         }
//!     }
//!     Ok(())
//! }
//! ```

pub mod request;
pub mod response;
pub mod parser;
pub mod connection;
pub mod writer;
