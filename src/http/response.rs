//! The fixed response wire format.
//!
//! Every response is one of two fixed shapes, quirks included: the error
//! response carries no blank line after its headers and no body, and the
//! success status line has no reason phrase. Clients in practice tolerate
//! both, and tests pin the exact bytes, so keep any change here deliberate.

/// Status line for every failure the client is told about.
pub const STATUS_NOT_FOUND: &str = "HTTP/1.0 404 Not Found\r\n";

/// Status line for a served file. No reason phrase.
pub const STATUS_OK: &str = "HTTP/1.0 200\r\n";

/// The single content type the server ever claims.
pub const CONTENT_TYPE: &str = "Content-Type: text/html\r\n";

/// The complete error response: status line and content type, nothing else.
pub fn error_response() -> Vec<u8> {
    let mut buf = Vec::with_capacity(STATUS_NOT_FOUND.len() + CONTENT_TYPE.len());
    buf.extend_from_slice(STATUS_NOT_FOUND.as_bytes());
    buf.extend_from_slice(CONTENT_TYPE.as_bytes());
    buf
}

/// The success header block, terminated by the blank line that separates it
/// from the file body.
pub fn file_header(content_length: u64) -> Vec<u8> {
    format!("{STATUS_OK}{CONTENT_TYPE}Content-Length: {content_length}\r\n\r\n").into_bytes()
}
