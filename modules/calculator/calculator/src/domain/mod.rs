//! Domain layer for the calculator service
//!
//! Contains arithmetic logic with no knowledge of the transport.

pub mod service;

pub use service::{
    AverageAccumulator, EmptyStream, MaximumTracker, NegativeNumber, PrimeFactors, Service,
};
