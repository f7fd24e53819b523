//! Error types for jailbreak detection.
//!
//! This module provides structured error types using thiserror. Probe
//! failures have their own type because detector implementations raise them
//! without knowing anything about the engine that consumes them.

use crate::core::probe::Probe;
use thiserror::Error;

/// Failure reported by a detector while evaluating a single probe.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProbeError {
    /// The detector has no reading for this probe
    #[error("Probe unavailable: {probe}")]
    Unavailable { probe: Probe },

    /// The underlying OS query failed
    #[error("Probe {probe} failed: {message}")]
    Failed { probe: Probe, message: String },
}

impl ProbeError {
    /// Probe that produced the failure.
    pub fn probe(&self) -> Probe {
        match self {
            ProbeError::Unavailable { probe } | ProbeError::Failed { probe, .. } => *probe,
        }
    }

    /// Shorthand for a failed OS query.
    pub fn failed(probe: Probe, message: impl Into<String>) -> Self {
        ProbeError::Failed {
            probe,
            message: message.into(),
        }
    }
}

/// Main error type for detection operations.
#[derive(Debug, Error)]
pub enum DetectionError {
    /// A probe failed and the failure policy propagates it
    #[error("Detector error: {0}")]
    Probe(#[from] ProbeError),

    /// Caller-supplied arguments could not be interpreted
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration is inconsistent or unreadable
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for detection operations
pub type Result<T> = std::result::Result<T, DetectionError>;
