//! Error types for Matrixon bridge models
//!
//! This module defines the error types used by the bridge data models.
//! All errors are designed to be user-friendly and provide clear context
//! about what went wrong and how to fix it.

use thiserror::Error;

/// Bridge model error types
#[derive(Debug, Error)]
pub enum BridgeError {
    /// Invalid argument error
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type for bridge model operations
pub type Result<T> = std::result::Result<T, BridgeError>;

impl From<serde_json::Error> for BridgeError {
    fn from(err: serde_json::Error) -> Self {
        BridgeError::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn test_error_display() {
        let err = BridgeError::InvalidArgument("test".to_string());
        assert_eq!(err.to_string(), "Invalid argument: test");

        let err = BridgeError::Config("test".to_string());
        assert_eq!(err.to_string(), "Configuration error: test");

        let err = BridgeError::Serialization("test".to_string());
        assert_eq!(err.to_string(), "Serialization error: test");
    }

    #[test]
    fn test_error_conversion_from_serde() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: BridgeError = json_err.into();
        assert!(err.to_string().contains("Serialization error"));
    }
}
