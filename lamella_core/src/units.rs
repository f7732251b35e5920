//! # Unit Types
//!
//! Type-safe wrappers for the engineering units used throughout the engine.
//! Simple newtype wrappers rather than a full units library:
//! - the engine uses one consistent SI-based set of units
//! - JSON serialization stays clean (just numbers)
//! - zero runtime overhead
//!
//! ## Unit Convention
//!
//! All analysis inputs and outputs use:
//! - Length: metres (m); deflections reported in millimetres (mm)
//! - Force: kilonewtons (kN)
//! - Moment: kilonewton-metres (kN·m)
//! - Distributed load: kilonewtons per metre (kN/m)
//! - Flexural rigidity EI: kN·m²
//!
//! ## Example
//!
//! ```rust
//! use lamella_core::units::{Meters, Millimeters};
//!
//! let span = Meters(4.5);
//! let mm: Millimeters = span.into();
//! assert_eq!(mm.0, 4500.0);
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// Length Units
// ============================================================================

/// Length in metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

/// Length in millimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

impl From<Meters> for Millimeters {
    fn from(m: Meters) -> Self {
        Millimeters(m.0 * 1000.0)
    }
}

impl From<Millimeters> for Meters {
    fn from(mm: Millimeters) -> Self {
        Meters(mm.0 / 1000.0)
    }
}

// ============================================================================
// Force and Moment Units
// ============================================================================

/// Force in kilonewtons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilonewtons(pub f64);

/// Moment in kilonewton-metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KilonewtonMeters(pub f64);

/// Distributed load in kilonewtons per metre
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KnPerMeter(pub f64);

impl KnPerMeter {
    /// Total force when applied over a length (kN)
    pub fn over(self, length: Meters) -> Kilonewtons {
        Kilonewtons(self.0 * length.0)
    }
}
