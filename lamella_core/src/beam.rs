//! # Beam Geometry
//!
//! A [`Beam`] is a strip of CLT with one or two spans and a material
//! reference. Pure data: the analyzers treat it as an immutable snapshot and
//! never mutate it.
//!
//! ## Example
//!
//! ```rust
//! use lamella_core::beam::Beam;
//! use lamella_core::materials::Material;
//!
//! let beam = Beam::two_span("B-1", 4.5, 3.0, Material::default());
//! assert_eq!(beam.total_span_m(), 7.5);
//! assert!(beam.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{CalcError, CalcResult};
use crate::materials::Material;

/// Spans beyond this trigger a sanity error; CLT floor strips do not get
/// anywhere near it.
const MAX_SPAN_M: f64 = 30.0;

/// Beam geometry plus material reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Beam {
    /// Unique identifier for this beam record
    pub id: Uuid,

    /// User label, e.g. "B-1", "Floor strip at grid C"
    #[serde(default)]
    pub label: String,

    /// Primary span length (m)
    pub primary_span_m: f64,

    /// Secondary span length (m); 0 for single-span beams
    pub secondary_span_m: f64,

    /// Material for the whole beam
    pub material: Material,
}

impl Beam {
    /// Create a single-span beam (secondary span = 0)
    pub fn single_span(label: impl Into<String>, span_m: f64, material: Material) -> Self {
        Beam {
            id: Uuid::new_v4(),
            label: label.into(),
            primary_span_m: span_m,
            secondary_span_m: 0.0,
            material,
        }
    }

    /// Create a two-span beam
    pub fn two_span(
        label: impl Into<String>,
        primary_span_m: f64,
        secondary_span_m: f64,
        material: Material,
    ) -> Self {
        Beam {
            id: Uuid::new_v4(),
            label: label.into(),
            primary_span_m,
            secondary_span_m,
            material,
        }
    }

    /// Create with a specific UUID
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    /// Combined length of both spans (m)
    pub fn total_span_m(&self) -> f64 {
        self.primary_span_m + self.secondary_span_m
    }

    /// Validate geometry.
    ///
    /// The primary span must be positive; the secondary span must be
    /// non-negative (whether it must be positive depends on the condition and
    /// is checked by the analyzer).
    pub fn validate(&self) -> CalcResult<()> {
        if !self.primary_span_m.is_finite() || self.primary_span_m <= 0.0 {
            return Err(CalcError::invalid_input(
                "primary_span_m",
                self.primary_span_m.to_string(),
                "Primary span must be positive",
            ));
        }
        if !self.secondary_span_m.is_finite() || self.secondary_span_m < 0.0 {
            return Err(CalcError::invalid_input(
                "secondary_span_m",
                self.secondary_span_m.to_string(),
                "Secondary span must be zero or positive",
            ));
        }
        if self.total_span_m() > MAX_SPAN_M {
            return Err(CalcError::invalid_input(
                "total_span_m",
                self.total_span_m().to_string(),
                "Total span exceeds 30 m - verify geometry",
            ));
        }
        Ok(())
    }
}

impl Default for Beam {
    fn default() -> Self {
        Beam::single_span("", 4.0, Material::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_span_constructor() {
        let beam = Beam::single_span("B-1", 4.0, Material::default());
        assert_eq!(beam.primary_span_m, 4.0);
        assert_eq!(beam.secondary_span_m, 0.0);
        assert_eq!(beam.total_span_m(), 4.0);
        assert!(beam.validate().is_ok());
    }

    #[test]
    fn test_two_span_constructor() {
        let beam = Beam::two_span("B-2", 3.0, 2.0, Material::default());
        assert_eq!(beam.total_span_m(), 5.0);
        assert!(beam.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_zero_primary() {
        let beam = Beam::single_span("bad", 0.0, Material::default());
        assert!(beam.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_negative_secondary() {
        let beam = Beam::two_span("bad", 3.0, -1.0, Material::default());
        assert!(beam.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_huge_span() {
        let beam = Beam::two_span("bad", 20.0, 15.0, Material::default());
        assert!(beam.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_nan_span() {
        let beam = Beam::single_span("bad", f64::NAN, Material::default());
        assert!(beam.validate().is_err());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let beam = Beam::two_span("B-3", 4.5, 3.5, Material::default());
        let json = serde_json::to_string(&beam).unwrap();
        let parsed: Beam = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, beam);
    }
}
