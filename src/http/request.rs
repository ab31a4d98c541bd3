use std::path::PathBuf;

use crate::config::Config;

/// HTTP request methods.
///
/// The server implements GET and nothing else. Other method tokens are
/// still well-formed requests, but are rejected at validation with a fixed
/// error response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// GET - Retrieve a resource
    Get,
}

/// Protocol versions the server accepts on the request line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Version {
    /// HTTP/1.0
    Http10,
    /// HTTP/1.1
    Http11,
}

/// A validated request line.
///
/// Holds only what the pipeline needs: the method, the target path, and the
/// protocol version. Header lines after the request line are read but never
/// interpreted.
#[derive(Debug, Clone)]
pub struct Request {
    /// The HTTP method (always GET once validation has passed)
    pub method: Method,
    /// The target path as sent by the client (e.g., "/index.html")
    pub target: String,
    /// Protocol version from the request line
    pub version: Version,
}

impl Method {
    /// Parses a method token. Case-sensitive: only the exact bytes `GET`
    /// are accepted.
    ///
    /// # Example
    ///
    /// ```
    /// # use minihttpd::http::request::Method;
    /// assert_eq!(Method::from_token("GET"), Some(Method::Get));
    /// assert_eq!(Method::from_token("get"), None);
    /// assert_eq!(Method::from_token("POST"), None);
    /// ```
    pub fn from_token(s: &str) -> Option<Self> {
        match s {
            "GET" => Some(Method::Get),
            _ => None,
        }
    }
}

impl Version {
    /// Parses a protocol version token. Only `HTTP/1.0` and `HTTP/1.1`
    /// are accepted, byte-exact.
    pub fn from_token(s: &str) -> Option<Self> {
        match s {
            "HTTP/1.0" => Some(Version::Http10),
            "HTTP/1.1" => Some(Version::Http11),
            _ => None,
        }
    }
}

impl Request {
    /// Maps the target path to a filesystem path under the configured root.
    ///
    /// `/` becomes the default document; any other absolute target `/X`
    /// becomes `<root>/./X`; a relative target is joined as given. No
    /// normalization beyond that - in particular `..` components pass
    /// through untouched.
    pub fn resolve_path(&self, cfg: &Config) -> PathBuf {
        if self.target == "/" {
            cfg.root.join(&cfg.index)
        } else if self.target.starts_with('/') {
            cfg.root.join(format!(".{}", self.target))
        } else {
            cfg.root.join(&self.target)
        }
    }
}
