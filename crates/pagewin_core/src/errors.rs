//! Error types shared across the pagewin crates

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PaginationError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PaginationError {
    #[error("Active page {active} is outside 1..={total}")]
    ActiveOutOfRange { active: i64, total: i64 },

    #[error("Invalid page token: {0}")]
    InvalidToken(String),

    #[error("Invalid pagination window: {0}")]
    InvalidWindow(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for PaginationError {
    fn from(err: serde_json::Error) -> Self {
        PaginationError::SerializationError(err.to_string())
    }
}

impl From<rmp_serde::encode::Error> for PaginationError {
    fn from(err: rmp_serde::encode::Error) -> Self {
        PaginationError::SerializationError(err.to_string())
    }
}

impl From<rmp_serde::decode::Error> for PaginationError {
    fn from(err: rmp_serde::decode::Error) -> Self {
        PaginationError::SerializationError(err.to_string())
    }
}

#[cfg(feature = "python")]
impl From<PaginationError> for pyo3::PyErr {
    fn from(err: PaginationError) -> Self {
        pyo3::exceptions::PyValueError::new_err(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_out_of_range_message() {
        let err = PaginationError::ActiveOutOfRange {
            active: 12,
            total: 10,
        };
        assert_eq!(err.to_string(), "Active page 12 is outside 1..=10");
    }

    #[test]
    fn test_json_error_conversion() {
        let err: PaginationError = serde_json::from_str::<i64>("not json").unwrap_err().into();
        assert!(matches!(err, PaginationError::SerializationError(_)));
    }
}
