use bytes::{Bytes, BytesMut};
use thiserror::Error;
use tokio::io::AsyncReadExt;
use tokio::net::TcpStream;
use tracing::debug;

use crate::config::Config;
use crate::http::parser;
use crate::http::writer;

/// Hard cap on the request header, terminator included. A header that does
/// not complete within `MAX_REQUEST_SIZE - 1` bytes abandons the connection.
pub const MAX_REQUEST_SIZE: usize = 4096;

/// Failures that abandon the connection before any response is owed.
///
/// These are distinct from parse failures: a request we could read but not
/// accept still gets the fixed error response, while these close the socket
/// with zero bytes written.
#[derive(Debug, Error)]
pub enum ConnectionError {
    #[error("request header exceeds {} bytes", MAX_REQUEST_SIZE - 1)]
    HeaderTooLarge,
    #[error("read failed: {0}")]
    Read(#[from] std::io::Error),
}

/// One client connection, owned exclusively by its worker task.
pub struct Connection {
    stream: TcpStream,
    buffer: BytesMut,
    // First buffer offset not yet checked for the header terminator.
    scanned: usize,
    config: Config,
}

impl Connection {
    pub fn new(stream: TcpStream, config: Config) -> Self {
        Self {
            stream,
            buffer: BytesMut::with_capacity(MAX_REQUEST_SIZE),
            scanned: 0,
            config,
        }
    }

    /// Services the connection start to finish: read the header, parse the
    /// request line, send the file or the error response. The socket closes
    /// when `self` drops, on every path.
    pub async fn run(mut self) -> Result<(), ConnectionError> {
        let header = self.read_header().await?;

        match parser::parse_request(&header) {
            Ok(req) => {
                let path = req.resolve_path(&self.config);
                debug!("Sending {}", path.display());
                writer::send_file(&mut self.stream, &path).await;
            }
            Err(e) => {
                debug!("Bad request: {}", e);
                writer::send_error(&mut self.stream).await;
            }
        }

        Ok(())
    }

    /// Reads until the `\r\n\r\n` terminator appears, returning the header
    /// bytes with the terminator stripped.
    ///
    /// The buffer never holds more than `MAX_REQUEST_SIZE - 1` bytes; a
    /// header still incomplete at that point fails with `HeaderTooLarge`.
    /// EOF before the terminator is a read failure.
    async fn read_header(&mut self) -> Result<Bytes, ConnectionError> {
        let mut chunk = [0u8; 1024];

        loop {
            if let Some(end) = find_terminator(&self.buffer, &mut self.scanned) {
                return Ok(self.buffer.split_to(end).freeze());
            }

            let remaining = (MAX_REQUEST_SIZE - 1) - self.buffer.len();
            if remaining == 0 {
                return Err(ConnectionError::HeaderTooLarge);
            }

            let want = remaining.min(chunk.len());
            let n = self.stream.read(&mut chunk[..want]).await?;
            if n == 0 {
                // Client closed before completing the header.
                return Err(std::io::Error::from(std::io::ErrorKind::UnexpectedEof).into());
            }

            self.buffer.extend_from_slice(&chunk[..n]);
        }
    }
}

/// Incremental terminator scan. `scanned` is the first offset not yet
/// examined and is advanced as the scan proceeds, so each position is
/// checked once across the whole read loop. Offsets within three bytes of
/// the end stay unexamined until more data arrives, covering terminators
/// that straddle a read boundary.
fn find_terminator(buf: &[u8], scanned: &mut usize) -> Option<usize> {
    let end = buf.len().saturating_sub(3);

    while *scanned < end {
        if &buf[*scanned..*scanned + 4] == b"\r\n\r\n" {
            return Some(*scanned);
        }
        *scanned += 1;
    }

    None
}
