use thiserror::Error;

use crate::http::request::{Method, Request, Version};

/// Reasons a buffered header fails to yield a serviceable request.
///
/// Every variant maps to the same client-visible outcome, the fixed error
/// response; the distinction exists for diagnostics.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("header is not valid UTF-8")]
    InvalidEncoding,
    #[error("request line is missing tokens")]
    InvalidRequestLine,
    #[error("method not implemented")]
    UnsupportedMethod,
    #[error("unsupported protocol version")]
    UnsupportedVersion,
}

/// Parses the request line out of a complete header (terminator already
/// stripped by the reader).
///
/// Only the first line is interpreted; everything after the first CRLF is
/// ignored. The line is split on ASCII whitespace into method, target, and
/// version tokens; tokens past the third are ignored.
pub fn parse_request(header: &[u8]) -> Result<Request, ParseError> {
    let text = std::str::from_utf8(header).map_err(|_| ParseError::InvalidEncoding)?;

    // Truncate at the first carriage return, leaving just the request line.
    let line = text.split('\r').next().unwrap_or("");

    let mut tokens = line.split_ascii_whitespace();
    let method_token = tokens.next().ok_or(ParseError::InvalidRequestLine)?;
    let target = tokens.next().ok_or(ParseError::InvalidRequestLine)?;
    let version_token = tokens.next().ok_or(ParseError::InvalidRequestLine)?;

    let method = Method::from_token(method_token).ok_or(ParseError::UnsupportedMethod)?;
    let version = Version::from_token(version_token).ok_or(ParseError::UnsupportedVersion)?;

    Ok(Request {
        method,
        target: target.to_string(),
        version,
    })
}
