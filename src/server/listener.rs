use std::net::SocketAddr;

use anyhow::Context;
use tokio::net::{TcpListener, TcpSocket};
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::http::connection::Connection;

const BACKLOG: u32 = 10;

/// Creates the listening socket: IPv4, address reuse, backlog of 10.
///
/// Socket creation, bind, and listen failures are fatal to the process; a
/// failure to enable address reuse is only logged.
pub fn bind(cfg: &Config) -> anyhow::Result<TcpListener> {
    let addr: SocketAddr = cfg
        .listen_addr
        .parse()
        .with_context(|| format!("invalid listen address {}", cfg.listen_addr))?;

    let socket = TcpSocket::new_v4().context("creating socket")?;
    if let Err(e) = socket.set_reuseaddr(true) {
        warn!("Unable to set SO_REUSEADDR: {}", e);
    }
    socket
        .bind(addr)
        .with_context(|| format!("binding {addr}"))?;

    let listener = socket.listen(BACKLOG).context("listen failed")?;
    info!("Listening on {}", addr);
    Ok(listener)
}

/// Indefinite service loop: one worker task per accepted connection.
///
/// Workers share nothing; each fully owns its socket and buffers. Finished
/// workers are collected lazily after every accept, so the set of
/// completed-but-uncollected handles is unbounded under sustained load.
/// Returns only when `accept` itself fails.
pub async fn serve(listener: TcpListener, cfg: Config) -> anyhow::Result<()> {
    let mut workers = JoinSet::new();

    loop {
        let (socket, peer) = listener.accept().await.context("accept failed")?;
        debug!("Accepted connection from {}", peer);

        let conn = Connection::new(socket, cfg.clone());
        workers.spawn(async move {
            if let Err(e) = conn.run().await {
                debug!("Connection from {} abandoned: {}", peer, e);
            }
        });

        // Collect any finished workers without blocking the accept loop.
        while let Some(res) = workers.try_join_next() {
            match res {
                Ok(()) => debug!("Worker finished"),
                Err(e) => warn!("Worker panicked: {}", e),
            }
        }
    }
}
