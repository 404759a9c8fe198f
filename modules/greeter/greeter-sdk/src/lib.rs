//! Greeter SDK
//!
//! This crate provides everything needed to consume the greeting service:
//! - Error types (`GreeterError`)
//! - Typed gRPC client (`GreeterGrpcClient`)
//! - Proto stubs for server implementation

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

// === API TYPES ===
mod api;
pub use api::GreeterError;

// === CLIENT ===
mod client;
pub use client::GreeterGrpcClient;

// === GRPC PROTO STUBS (for server implementation) ===
/// Generated protobuf types for GreetService
pub mod proto {
    tonic::include_proto!("callbox.greeter.v1");
}

// Re-export proto types needed by server implementations
pub use proto::greet_service_server::{GreetService, GreetServiceServer};
pub use proto::{
    GreetEveryoneRequest, GreetEveryoneResponse, GreetManyTimesRequest, GreetManyTimesResponse,
    GreetRequest, GreetResponse, GreetWithDeadlineRequest, GreetWithDeadlineResponse, Greeting,
    LongGreetRequest, LongGreetResponse,
};

/// Fully-qualified service name of GreetService
pub const SERVICE_NAME: &str = "callbox.greeter.v1.GreetService";
