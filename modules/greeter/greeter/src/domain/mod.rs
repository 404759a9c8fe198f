//! Domain layer for the greeting service.

pub mod service;

pub use service::{GREETING_ROUNDS, GreeterSettings, Service, WORK_INCREMENTS};
