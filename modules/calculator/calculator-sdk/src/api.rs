//! Calculator error types
//!
//! Classification of failures surfaced by the calculator client.

/// Error type for calculator operations
#[derive(thiserror::Error, Debug)]
pub enum CalculatorError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("call rejected: {0}")]
    FailedPrecondition(String),

    #[error("gRPC transport error: {0}")]
    Transport(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<tonic::Status> for CalculatorError {
    fn from(status: tonic::Status) -> Self {
        match status.code() {
            tonic::Code::InvalidArgument => {
                CalculatorError::InvalidArgument(status.message().to_string())
            }
            tonic::Code::FailedPrecondition => {
                CalculatorError::FailedPrecondition(status.message().to_string())
            }
            tonic::Code::Internal => CalculatorError::Internal(status.message().to_string()),
            _ => CalculatorError::Transport(status.message().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_invalid_argument_status() {
        let err = CalculatorError::from(tonic::Status::invalid_argument("negative number"));
        assert!(matches!(err, CalculatorError::InvalidArgument(ref m) if m == "negative number"));
    }

    #[test]
    fn maps_failed_precondition_status() {
        let err = CalculatorError::from(tonic::Status::failed_precondition("empty stream"));
        assert!(matches!(err, CalculatorError::FailedPrecondition(_)));
    }

    #[test]
    fn maps_other_codes_to_transport() {
        let err = CalculatorError::from(tonic::Status::unavailable("connection refused"));
        assert!(matches!(err, CalculatorError::Transport(_)));
    }
}
