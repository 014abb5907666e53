//! Error types for interval partitioning.
//!
//! Errors carry a status code and a human readable message. Building a
//! partition fails only on malformed input or on misuse of the tree API.

use std::fmt;
use thiserror::Error;

/// Error codes for partitioning operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// A node would be created from an empty or non-finite point collection.
    InvalidInput,
    /// A node that already has children was split again.
    AlreadySplit,
    /// A configuration value was rejected.
    InvalidArgument,
    /// A node index does not name a node of the tree.
    NotFound,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCode::InvalidInput => write!(f, "INVALID_INPUT"),
            ErrorCode::AlreadySplit => write!(f, "ALREADY_SPLIT"),
            ErrorCode::InvalidArgument => write!(f, "INVALID_ARGUMENT"),
            ErrorCode::NotFound => write!(f, "NOT_FOUND"),
        }
    }
}

/// Main error type for partitioning operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub struct PartitionError {
    code: ErrorCode,
    message: String,
}

impl PartitionError {
    /// Create a new error with the given code and message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Get the error code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Get the error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    // Convenience constructors

    /// Create an invalid input error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, msg)
    }

    /// Create an already split error.
    pub fn already_split(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::AlreadySplit, msg)
    }

    /// Create an invalid argument error.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidArgument, msg)
    }

    /// Create a not found error.
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, msg)
    }
}

impl fmt::Display for PartitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

/// Result type alias for partitioning operations.
pub type Result<T> = std::result::Result<T, PartitionError>;
