use std::path::Path;

use tokio::fs::File;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::debug;

use crate::http::response;

/// Writes the fixed error response. A write failure here is logged and
/// swallowed; the connection is finished either way.
pub async fn send_error(stream: &mut TcpStream) {
    if let Err(e) = stream.write_all(&response::error_response()).await {
        debug!("Error writing error response: {}", e);
    }
}

/// Streams the file at `path` back to the client, or the error response if
/// the file cannot be opened or sized.
///
/// Exactly the stat-reported number of bytes is transferred, even if the
/// file grows underneath. Mid-transfer failures are unrecoverable for this
/// connection: logged, never retried. The file handle is closed on every
/// path.
pub async fn send_file(stream: &mut TcpStream, path: &Path) {
    let mut file = match File::open(path).await {
        Ok(file) => file,
        Err(e) => {
            debug!("Error opening {}: {}", path.display(), e);
            return send_error(stream).await;
        }
    };

    let len = match file.metadata().await {
        Ok(meta) => meta.len(),
        Err(e) => {
            // Can't get the length.
            debug!("Error fetching size of {}: {}", path.display(), e);
            return send_error(stream).await;
        }
    };

    if let Err(e) = stream.write_all(&response::file_header(len)).await {
        debug!("Error writing response header: {}", e);
        return;
    }

    match tokio::io::copy(&mut (&mut file).take(len), stream).await {
        Ok(sent) if sent == len => {
            debug!("Sent {} ({} bytes)", path.display(), sent);
        }
        Ok(sent) => {
            debug!("File {} truncated mid-transfer ({}/{} bytes)", path.display(), sent, len);
        }
        Err(e) => {
            // Nothing can be done for this connection.
            debug!("Error writing file {}: {}", path.display(), e);
        }
    }
}
