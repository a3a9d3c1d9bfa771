//! Error types for pendular.
//!
//! The engine refuses to produce a trajectory when its inputs are invalid;
//! it never returns a partial or garbage solution. All fallible operations
//! return `Result<T, PendulumError>` instead of panicking.

use thiserror::Error;

/// Result type alias for pendular operations.
pub type PendulumResult<T> = Result<T, PendulumError>;

/// Unified error type for all pendular operations.
#[derive(Debug, Error)]
pub enum PendulumError {
    // ===== Refusals (no trajectory produced) =====
    /// Physically invalid parameter (non-positive mass/length where
    /// required, zero moment of inertia, zero natural frequency).
    #[error("invalid parameter: {message}")]
    InvalidParameter {
        /// Description of the offending parameter.
        message: String,
    },

    /// A formula was asked to leave its real domain (negative value under
    /// a square root, division by zero at exact undamped resonance).
    #[error("numeric domain error: {message}")]
    NumericDomain {
        /// Description of the domain violation.
        message: String,
    },

    // ===== Configuration Errors =====
    /// YAML parsing error.
    #[error("YAML parsing error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// Validation error.
    #[error("validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    // ===== I/O Errors =====
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PendulumError {
    /// Create an invalid-parameter error with a message.
    #[must_use]
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            message: message.into(),
        }
    }

    /// Create a numeric-domain error with a message.
    #[must_use]
    pub fn numeric_domain(message: impl Into<String>) -> Self {
        Self::NumericDomain {
            message: message.into(),
        }
    }

    /// Check if this error is a refusal to solve (as opposed to a
    /// configuration or I/O failure).
    #[must_use]
    pub const fn is_refusal(&self) -> bool {
        matches!(
            self,
            Self::InvalidParameter { .. } | Self::NumericDomain { .. }
        )
    }
}
