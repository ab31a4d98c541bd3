//! minihttpd - Minimal Static File Server
//!
//! Core library for the request-service pipeline.

pub mod config;
pub mod http;
pub mod server;
