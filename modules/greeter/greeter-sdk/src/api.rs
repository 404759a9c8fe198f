//! Greeter error types
//!
//! Classification of failures surfaced by the greeter client.

/// Error type for greeter operations
#[derive(thiserror::Error, Debug)]
pub enum GreeterError {
    /// The call was abandoned because the caller's deadline passed, either
    /// observed by the server (CANCELLED) or enforced in transit
    /// (DEADLINE_EXCEEDED).
    #[error("call canceled: {0}")]
    Cancelled(String),

    #[error("gRPC transport error: {0}")]
    Transport(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<tonic::Status> for GreeterError {
    fn from(status: tonic::Status) -> Self {
        match status.code() {
            tonic::Code::Cancelled | tonic::Code::DeadlineExceeded => {
                GreeterError::Cancelled(status.message().to_string())
            }
            tonic::Code::Internal => GreeterError::Internal(status.message().to_string()),
            _ => GreeterError::Transport(status.message().to_string()),
        }
    }
}
