//! gRPC transport utilities shared by the callbox SDK crates.
//!
//! - [`client`]: endpoint construction and connection with configurable
//!   timeouts and HTTP/2 keepalive.
//! - [`deadline`]: decoding of the caller's `grpc-timeout` request metadata
//!   for cooperative server-side deadline checks.

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

pub mod client;
pub mod deadline;

pub use deadline::deadline_from_metadata;
