//! Calculator SDK
//!
//! This crate provides everything needed to consume the calculator service:
//! - Error types (`CalculatorError`)
//! - Typed gRPC client (`CalculatorGrpcClient`)
//! - Proto stubs for server implementation
//!
//! ## Usage
//!
//! ```ignore
//! use callbox_calculator_sdk::CalculatorGrpcClient;
//!
//! let client = CalculatorGrpcClient::connect("http://127.0.0.1:50051").await?;
//! let sum = client.sum(3, 10).await?;
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

// === API TYPES ===
mod api;
pub use api::CalculatorError;

// === CLIENT ===
mod client;
pub use client::CalculatorGrpcClient;

// === GRPC PROTO STUBS (for server implementation) ===
/// Generated protobuf types for CalculatorService
pub mod proto {
    tonic::include_proto!("callbox.calculator.v1");
}

// Re-export proto types needed by server implementations
pub use proto::calculator_service_server::{CalculatorService, CalculatorServiceServer};
pub use proto::{
    ComputeAverageRequest, ComputeAverageResponse, FindMaximumRequest, FindMaximumResponse,
    PrimeNumberDecompositionRequest, PrimeNumberDecompositionResponse, SquareRootRequest,
    SquareRootResponse, SumRequest, SumResponse,
};

/// Fully-qualified service name of CalculatorService
pub const SERVICE_NAME: &str = "callbox.calculator.v1.CalculatorService";
