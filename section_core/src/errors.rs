//! # Error Types
//!
//! Structured error types for section_core. These errors are designed to be
//! informative for both humans and LLMs, providing enough context to
//! understand and fix issues programmatically.
//!
//! ## Example
//!
//! ```rust
//! use section_core::errors::{SectionError, SectionResult};
//!
//! fn validate_cover(cover_mm: f64) -> SectionResult<()> {
//!     if cover_mm <= 0.0 {
//!         return Err(SectionError::InvalidInput {
//!             field: "cover_mm".to_string(),
//!             value: cover_mm.to_string(),
//!             reason: "Cover must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for section_core operations
pub type SectionResult<T> = Result<T, SectionError>;

/// Structured error type for layout and design operations.
///
/// Each variant provides specific context about what went wrong,
/// enabling programmatic error handling by LLMs and other consumers.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum SectionError {
    /// An input value is invalid (out of range, wrong type, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// The requested reinforcement cannot physically fit inside the section
    #[error("Geometry infeasible: {reason}")]
    GeometryInfeasible { reason: String },

    /// Design calculation failed (steel ratio exceeded, section too small, etc.)
    #[error("Design failed: {calculation} - {reason}")]
    DesignFailed { calculation: String, reason: String },

    /// Generic internal error (should be rare)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl SectionError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        SectionError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a GeometryInfeasible error
    pub fn geometry_infeasible(reason: impl Into<String>) -> Self {
        SectionError::GeometryInfeasible {
            reason: reason.into(),
        }
    }

    /// Create a DesignFailed error
    pub fn design_failed(calculation: impl Into<String>, reason: impl Into<String>) -> Self {
        SectionError::DesignFailed {
            calculation: calculation.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            SectionError::InvalidInput { .. } => "INVALID_INPUT",
            SectionError::GeometryInfeasible { .. } => "GEOMETRY_INFEASIBLE",
            SectionError::DesignFailed { .. } => "DESIGN_FAILED",
            SectionError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = SectionError::invalid_input("cover_mm", "-40", "Cover must be positive");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: SectionError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            SectionError::geometry_infeasible("bars outside section").error_code(),
            "GEOMETRY_INFEASIBLE"
        );
        assert_eq!(
            SectionError::design_failed("column", "over 6% steel").error_code(),
            "DESIGN_FAILED"
        );
    }
}
