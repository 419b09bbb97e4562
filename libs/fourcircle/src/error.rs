//! # Error Types
//!
//! Error types for outline and arching operations. All errors are explicit
//! and carry enough context to tell which construction step failed.
//!
//! ## Error Policy
//!
//! - NO fallback geometry when a construction fails
//! - Every failure is reported to the caller immediately
//! - The computation is deterministic, so nothing is retried

use thiserror::Error;

use crate::instrument::Phase;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while deriving an instrument outline.
///
/// ## Example
///
/// ```rust
/// use fourcircle::{arching::circular_arch, OutlineError};
///
/// match circular_arch(20.0, 260.0, &[0.0], Some(25.0), None) {
///     Err(OutlineError::Configuration { message }) => assert!(message.contains("both")),
///     other => unreachable!("unexpected result: {other:?}"),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OutlineError {
    /// Invalid shape or arch parameters.
    ///
    /// Non-positive radius, violated ratio ordering, inconsistent double-arch
    /// parameters or an impossible ratio combination.
    #[error("Configuration error: {message}")]
    Configuration {
        /// What was wrong with the input.
        message: String,
    },

    /// A required intersection does not exist.
    ///
    /// Raised for separate, nested or coincident circles and degenerate
    /// lines where the construction needs a point.
    #[error("Geometry error: {message}")]
    Geometry {
        /// Which construction step failed.
        message: String,
    },

    /// An operation was requested before its prerequisite phase completed.
    #[error("State error: {operation} requires {required}, instrument is {actual}")]
    State {
        /// Name of the rejected operation.
        operation: &'static str,
        /// Phase the operation needs.
        required: Phase,
        /// Phase the instrument was in.
        actual: Phase,
    },
}

impl OutlineError {
    /// Creates a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Creates a geometry error.
    pub fn geometry(message: impl Into<String>) -> Self {
        Self::Geometry {
            message: message.into(),
        }
    }

    /// Creates a state error for `operation`.
    pub fn state(operation: &'static str, required: Phase, actual: Phase) -> Self {
        Self::State {
            operation,
            required,
            actual,
        }
    }
}

impl From<config::constants::ConfigError> for OutlineError {
    fn from(err: config::constants::ConfigError) -> Self {
        Self::configuration(err.to_string())
    }
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for outline operations.
pub type Result<T> = std::result::Result<T, OutlineError>;

// =============================================================================
// TESTS
// =============================================================================
