//! # Error Types
//!
//! Structured error types for lamella_core. Every variant carries enough
//! context to understand and fix the problem programmatically, and all
//! variants serialize cleanly to JSON for API consumers.
//!
//! Out-of-domain positions are deliberately NOT errors: an equation evaluated
//! outside its span returns a point with a null value so that plotting code
//! can treat it as "no data" instead of aborting (see [`crate::analysis`]).
//!
//! ## Example
//!
//! ```rust
//! use lamella_core::errors::{CalcError, CalcResult};
//!
//! fn validate_span(span_m: f64) -> CalcResult<()> {
//!     if span_m <= 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "primary_span_m",
//!             span_m.to_string(),
//!             "Span must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for lamella_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for analysis operations.
///
/// Each variant provides specific context about what went wrong.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// Requested support condition has no analyzer
    #[error("Invalid condition: '{condition}' (expected one of: {expected})")]
    InvalidCondition { condition: String, expected: String },

    /// An input value is invalid (out of range, non-finite, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A material property required by the analysis is absent or non-finite
    #[error("Material '{material}' is missing required property '{property}'")]
    MissingProperty { material: String, property: String },

    /// Material not found in the preset database
    #[error("Material not found: {material_name}")]
    MaterialNotFound { material_name: String },
}

impl CalcError {
    /// Create an InvalidCondition error
    pub fn invalid_condition(condition: impl Into<String>, expected: impl Into<String>) -> Self {
        CalcError::InvalidCondition {
            condition: condition.into(),
            expected: expected.into(),
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingProperty error
    pub fn missing_property(material: impl Into<String>, property: impl Into<String>) -> Self {
        CalcError::MissingProperty {
            material: material.into(),
            property: property.into(),
        }
    }

    /// Create a MaterialNotFound error
    pub fn material_not_found(material_name: impl Into<String>) -> Self {
        CalcError::MaterialNotFound {
            material_name: material_name.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidCondition { .. } => "INVALID_CONDITION",
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::MissingProperty { .. } => "MISSING_PROPERTY",
            CalcError::MaterialNotFound { .. } => "MATERIAL_NOT_FOUND",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_input("load_kn_m", "-5.0", "Load must be positive");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            CalcError::invalid_condition("cantilever", "simply-supported, two-span-unequal")
                .error_code(),
            "INVALID_CONDITION"
        );
        assert_eq!(
            CalcError::missing_property("CLT 100 C3s", "EI").error_code(),
            "MISSING_PROPERTY"
        );
        assert_eq!(
            CalcError::material_not_found("steel").error_code(),
            "MATERIAL_NOT_FOUND"
        );
    }

    #[test]
    fn test_display_messages() {
        let e = CalcError::missing_property("CLT 100 C3s", "EI");
        assert_eq!(
            e.to_string(),
            "Material 'CLT 100 C3s' is missing required property 'EI'"
        );
    }
}
