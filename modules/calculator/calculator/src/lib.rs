//! Calculator service
//!
//! Arithmetic demonstration service covering all four gRPC call shapes.
//!
//! ## Architecture
//!
//! - `domain/service.rs` - Core arithmetic logic, transport-free
//! - `api/grpc/server.rs` - gRPC server implementation
//!
//! External consumers should use the `callbox-calculator-sdk` crate, which
//! provides the proto stubs and the typed gRPC client.

pub mod api;
pub mod domain;

pub use api::grpc::CalculatorServiceImpl;
