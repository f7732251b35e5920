//! # Materials
//!
//! Material definitions for cross-laminated timber (CLT) beam strips.
//!
//! A [`Material`] is a named bundle of section properties plus an optional
//! layup (the ordered stack of lamella layers, used by presentation code to
//! draw proportionally scaled layer diagrams; the drawing itself lives
//! outside this crate).
//!
//! Properties are stored as a string-keyed map so that project files can
//! carry values this engine does not interpret. Analyzers never read the map
//! directly: they resolve the keys they need into a typed [`Stiffness`]
//! up front and fail fast with a `MissingProperty` error when a required key
//! is absent or non-finite.
//!
//! ## Recognized property keys
//!
//! | Key  | Meaning                                   | Unit   |
//! |------|-------------------------------------------|--------|
//! | `EI` | Effective flexural rigidity per strip     | kN·m²  |
//! | `GA` | Effective shear rigidity per strip        | kN     |
//! | `j2` | Serviceability correction on deflection   | —      |
//!
//! `GA` is carried in the data model but not used by the current analyzers.
//! `j2` defaults to 1.0 when absent.
//!
//! ## Example
//!
//! ```rust
//! use lamella_core::materials::{keys, Material};
//!
//! let material = Material::new("CLT 140 L5s")
//!     .with_property(keys::EI, 2300.0)
//!     .with_property(keys::GA, 11000.0);
//!
//! let stiffness = material.stiffness().unwrap();
//! assert_eq!(stiffness.ei, 2300.0);
//! assert_eq!(stiffness.j2, 1.0); // defaulted
//! ```

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Property keys recognized by the analyzers.
pub mod keys {
    /// Effective flexural rigidity (kN·m²)
    pub const EI: &str = "EI";
    /// Effective shear rigidity (kN) - in the data model, unused by analyzers
    pub const GA: &str = "GA";
    /// Dimensionless serviceability correction applied to deflection
    pub const J2: &str = "j2";
}

/// Grain direction of a lamella layer relative to the beam axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayerOrientation {
    /// Grain parallel to the span (load-bearing direction)
    Longitudinal,
    /// Grain perpendicular to the span (cross layer)
    Transverse,
}

/// One lamella layer of a CLT section.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    /// Layer thickness (mm)
    pub thickness_mm: f64,
    /// Grain orientation
    pub orientation: LayerOrientation,
}

impl Layer {
    /// Longitudinal layer of the given thickness
    pub fn longitudinal(thickness_mm: f64) -> Self {
        Layer {
            thickness_mm,
            orientation: LayerOrientation::Longitudinal,
        }
    }

    /// Transverse (cross) layer of the given thickness
    pub fn transverse(thickness_mm: f64) -> Self {
        Layer {
            thickness_mm,
            orientation: LayerOrientation::Transverse,
        }
    }
}

/// Stiffness values resolved from a material for one analysis call.
///
/// Constructed once per equation via [`Material::stiffness`]; evaluators
/// receive it by value and stay stateless.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stiffness {
    /// Effective flexural rigidity (kN·m²)
    pub ei: f64,
    /// Serviceability correction on deflection (dimensionless, >= default 1.0)
    pub j2: f64,
}

/// A named bundle of physical section properties.
///
/// Immutable for the duration of an analysis; analyzers hold references and
/// never mutate it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Display name, e.g. "CLT 140 L5s"
    pub name: String,

    /// Section properties keyed by the constants in [`keys`]
    pub properties: BTreeMap<String, f64>,

    /// Lamella stack from top to bottom; empty for non-layered materials
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub layup: Vec<Layer>,
}

impl Material {
    /// Create a material with no properties set
    pub fn new(name: impl Into<String>) -> Self {
        Material {
            name: name.into(),
            properties: BTreeMap::new(),
            layup: Vec::new(),
        }
    }

    /// Set a property value
    pub fn with_property(mut self, key: impl Into<String>, value: f64) -> Self {
        self.properties.insert(key.into(), value);
        self
    }

    /// Set the lamella stack
    pub fn with_layup(mut self, layup: Vec<Layer>) -> Self {
        self.layup = layup;
        self
    }

    /// Look up a property value, if present
    pub fn property(&self, key: &str) -> Option<f64> {
        self.properties.get(key).copied()
    }

    /// Look up a required property, rejecting absent or non-finite values
    pub fn require(&self, key: &str) -> CalcResult<f64> {
        match self.property(key) {
            Some(v) if v.is_finite() => Ok(v),
            _ => Err(CalcError::missing_property(&self.name, key)),
        }
    }

    /// Resolve the stiffness values the deflection analyzers need.
    ///
    /// `EI` is required and must be positive; `j2` defaults to 1.0.
    pub fn stiffness(&self) -> CalcResult<Stiffness> {
        let ei = self.require(keys::EI)?;
        if ei <= 0.0 {
            return Err(CalcError::invalid_input(
                keys::EI,
                ei.to_string(),
                "Flexural rigidity must be positive",
            ));
        }
        let j2 = match self.property(keys::J2) {
            Some(v) if v.is_finite() && v > 0.0 => v,
            Some(v) => {
                return Err(CalcError::invalid_input(
                    keys::J2,
                    v.to_string(),
                    "Serviceability factor must be positive",
                ))
            }
            None => 1.0,
        };
        Ok(Stiffness { ei, j2 })
    }

    /// Total layup thickness (mm); 0 when no layup is defined
    pub fn total_thickness_mm(&self) -> f64 {
        self.layup.iter().map(|l| l.thickness_mm).sum()
    }

    /// Per-layer thickness fractions of the total, top to bottom.
    ///
    /// This is the proportional-scaling input the layer-diagram consumer
    /// needs. Empty when no layup is defined.
    pub fn layer_fractions(&self) -> Vec<f64> {
        let total = self.total_thickness_mm();
        if total <= 0.0 {
            return Vec::new();
        }
        self.layup
            .iter()
            .map(|l| l.thickness_mm / total)
            .collect()
    }
}

impl Default for Material {
    fn default() -> Self {
        preset("CLT 140 L5s")
            .cloned()
            .unwrap_or_else(|| Material::new("CLT 140 L5s").with_property(keys::EI, 2300.0))
    }
}

/// Representative CLT sections (1 m strip width). Stiffness values are
/// typical catalogue-level numbers for C24 lamellas, suitable as defaults;
/// project-specific sections should supply their own.
static PRESETS: Lazy<Vec<Material>> = Lazy::new(|| {
    vec![
        Material::new("CLT 100 L3s")
            .with_property(keys::EI, 860.0)
            .with_property(keys::GA, 8000.0)
            .with_layup(vec![
                Layer::longitudinal(30.0),
                Layer::transverse(40.0),
                Layer::longitudinal(30.0),
            ]),
        Material::new("CLT 140 L5s")
            .with_property(keys::EI, 2300.0)
            .with_property(keys::GA, 11000.0)
            .with_layup(vec![
                Layer::longitudinal(40.0),
                Layer::transverse(20.0),
                Layer::longitudinal(20.0),
                Layer::transverse(20.0),
                Layer::longitudinal(40.0),
            ]),
        Material::new("CLT 200 L5s")
            .with_property(keys::EI, 5800.0)
            .with_property(keys::GA, 16000.0)
            .with_layup(vec![
                Layer::longitudinal(40.0),
                Layer::transverse(40.0),
                Layer::longitudinal(40.0),
                Layer::transverse(40.0),
                Layer::longitudinal(40.0),
            ]),
    ]
});

/// All preset materials
pub fn presets() -> &'static [Material] {
    &PRESETS
}

/// Find a preset by name (case-insensitive)
pub fn preset(name: &str) -> Option<&'static Material> {
    PRESETS.iter().find(|m| m.name.eq_ignore_ascii_case(name))
}

/// Find a preset by name, with a structured error on miss
pub fn require_preset(name: &str) -> CalcResult<&'static Material> {
    preset(name).ok_or_else(|| CalcError::material_not_found(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_lookup() {
        let m = Material::new("test").with_property(keys::EI, 1.0);
        assert_eq!(m.property(keys::EI), Some(1.0));
        assert_eq!(m.property(keys::GA), None);
    }

    #[test]
    fn test_require_missing() {
        let m = Material::new("bare");
        let err = m.require(keys::EI).unwrap_err();
        assert_eq!(err.error_code(), "MISSING_PROPERTY");
    }

    #[test]
    fn test_require_rejects_nan() {
        let m = Material::new("bad").with_property(keys::EI, f64::NAN);
        assert!(m.require(keys::EI).is_err());
    }

    #[test]
    fn test_stiffness_defaults_j2() {
        let m = Material::new("test").with_property(keys::EI, 1200.0);
        let s = m.stiffness().unwrap();
        assert_eq!(s.ei, 1200.0);
        assert_eq!(s.j2, 1.0);
    }

    #[test]
    fn test_stiffness_with_j2() {
        let m = Material::new("test")
            .with_property(keys::EI, 1200.0)
            .with_property(keys::J2, 1.1);
        let s = m.stiffness().unwrap();
        assert_eq!(s.j2, 1.1);
    }

    #[test]
    fn test_stiffness_rejects_nonpositive_ei() {
        let m = Material::new("test").with_property(keys::EI, 0.0);
        assert!(m.stiffness().is_err());
    }

    #[test]
    fn test_ga_is_optional() {
        // GA may be absent without affecting stiffness resolution
        let m = Material::new("test").with_property(keys::EI, 500.0);
        assert!(m.stiffness().is_ok());
    }

    #[test]
    fn test_layup_totals_and_fractions() {
        let m = preset("CLT 100 L3s").unwrap();
        assert!((m.total_thickness_mm() - 100.0).abs() < 1e-12);

        let fractions = m.layer_fractions();
        assert_eq!(fractions.len(), 3);
        assert!((fractions[0] - 0.3).abs() < 1e-12);
        assert!((fractions[1] - 0.4).abs() < 1e-12);
        assert!((fractions.iter().sum::<f64>() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_preset_lookup() {
        assert!(preset("CLT 140 L5s").is_some());
        assert!(preset("clt 140 l5s").is_some());
        assert!(preset("nonexistent").is_none());

        let err = require_preset("nonexistent").unwrap_err();
        assert_eq!(err.error_code(), "MATERIAL_NOT_FOUND");
    }

    #[test]
    fn test_serialization_roundtrip() {
        let m = preset("CLT 140 L5s").unwrap().clone();
        let json = serde_json::to_string(&m).unwrap();
        let parsed: Material = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, m);
    }
}
