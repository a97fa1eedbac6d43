use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::config::Config;
use crate::http::connection::{Connection, Verdict};
use crate::http::response::ResponseFormatter;
use crate::site::DirSite;

/// Accepts connections and hands each one to the connection handler.
///
/// Connections are handled to completion one at a time: the handler reads
/// one request, writes one response, and reports back whether the control
/// path asked the server to stop. The verdict is checked between
/// connections, so no further client is accepted after a shutdown request.
pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let listener = TcpListener::bind(&cfg.server.listen_addr).await?;
    info!("Listening on {}", cfg.server.listen_addr);

    let site = Arc::new(DirSite::new(&cfg.site.root));
    let formatter = ResponseFormatter::from_config(&cfg.response);

    loop {
        let (socket, peer) = listener.accept().await?;
        info!("Accepted connection from {}", peer);

        let mut conn = Connection::new(socket, site.clone(), formatter.clone());
        match conn.run().await {
            Ok(Verdict::Shutdown) => {
                info!("Shutdown requested via control path, no longer accepting");
                break;
            }
            Ok(Verdict::KeepServing) => {}
            Err(e) => {
                error!("Connection error from {}: {}", peer, e);
            }
        }
    }

    Ok(())
}
