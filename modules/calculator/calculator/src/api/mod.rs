//! Transport-facing API for the calculator service.

pub mod grpc;
