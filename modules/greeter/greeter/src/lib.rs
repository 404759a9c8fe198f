//! Greeting service
//!
//! Greeting demonstration service covering all four gRPC call shapes plus
//! deadline-aware cancellation.
//!
//! ## Architecture
//!
//! - `domain/service.rs` - Greeting formatting and pacing settings
//! - `api/grpc/server.rs` - gRPC server implementation
//!
//! External consumers should use the `callbox-greeter-sdk` crate, which
//! provides the proto stubs and the typed gRPC client.

pub mod api;
pub mod domain;

pub use api::grpc::GreetServiceImpl;
