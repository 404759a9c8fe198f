//! Transport-facing API for the greeting service.

pub mod grpc;
