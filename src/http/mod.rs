//! HTTP protocol implementation.
//!
//! A deliberately minimal HTTP/1.0 service pipeline: each connection reads a
//! bounded request header, parses the request line, and either streams one
//! file back or emits a fixed error response. No keep-alive, no request
//! bodies, GET only.
//!
//! # Submodules
//!
//! - **`connection`**: per-connection state machine and bounded header reader
//! - **`parser`**: request-line parsing and validation
//! - **`request`**: parsed request representation and path resolution
//! - **`response`**: the fixed wire-format status lines and headers
//! - **`writer`**: writes error responses and streams file bodies
//!
//! # Connection lifecycle
//!
//! ```text
//!   Accepted
//!      │
//!      ▼
//!   HeaderReading ──── header too large / read error ────► close (silent)
//!      │
//!      ▼
//!   Parsed ──── bad method or version ────► error response ──► close
//!      │
//!      ▼
//!   FileLookup ──── open/stat failure ────► error response ──► close
//!      │
//!      ▼
//!   FileSent ──► close
//! ```
//!
//! Every path ends with the connection closed and the worker finished; the
//! server never reuses a connection for a second request.

pub mod connection;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
