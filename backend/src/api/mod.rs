//! HTTP API for the census dashboard.

pub mod server;
pub mod types;
