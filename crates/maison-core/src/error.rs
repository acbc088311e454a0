//! # Error Types — Shared Error Hierarchy
//!
//! Top-level error type for the maison workspace. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! The component crates define their own error enums for their specific
//! failure classes (`QuizError`, `StoreError`, `MediaError`); this type
//! covers the failures that originate in the foundation layer itself.

use thiserror::Error;

/// Top-level error type for the maison foundation layer.
#[derive(Error, Debug)]
pub enum MaisonError {
    /// Timestamp string was malformed or not UTC.
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),

    /// A record failed validation at a boundary.
    #[error("validation error: {0}")]
    Validation(String),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
