//! # Diagram Sampling
//!
//! Samples a response equation over the beam at a fixed step and builds the
//! labelled (x, y) series that charting backends consume. Rendering itself is
//! out of scope; this module only produces data.
//!
//! The primary and secondary spans get separate series so a discontinuity at
//! the interior support never draws as a vertical chart line: the `before`
//! half of a [`Eval::Discontinuous`] pair closes the primary series, the
//! `after` half opens the secondary one. Out-of-domain (null) points are
//! skipped rather than emitted.
//!
//! ## Example
//!
//! ```rust
//! use lamella_core::analysis::{BeamAnalysis, Condition};
//! use lamella_core::beam::Beam;
//! use lamella_core::diagram::{sample, DEFAULT_STEP_M};
//! use lamella_core::materials::{keys, Material};
//!
//! let material = Material::new("unit").with_property(keys::EI, 1.0);
//! let beam = Beam::single_span("B-1", 4.0, material);
//! let shear = BeamAnalysis::new(beam, 10.0, Condition::SimplySupported)
//!     .shear_force()
//!     .unwrap();
//!
//! let diagram = sample(&shear, DEFAULT_STEP_M).unwrap();
//! assert_eq!(diagram.axis_label, "Shear Force (kN)");
//! assert!(diagram.secondary.is_none());
//! ```

use serde::{Deserialize, Serialize};

use crate::analysis::{Analysis, Condition, Eval, Quantity};
use crate::errors::{CalcError, CalcResult};

/// Default sampling step (m)
pub const DEFAULT_STEP_M: f64 = 0.1;

/// One plot series: a label plus ordered (position, value) samples.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagramSeries {
    /// Series label, e.g. "Primary span"
    pub label: String,
    /// Ordered (x, y) samples; never contains null values
    pub points: Vec<(f64, f64)>,
}

impl DiagramSeries {
    fn new(label: impl Into<String>) -> Self {
        DiagramSeries {
            label: label.into(),
            points: Vec::new(),
        }
    }
}

/// The maximum-magnitude sample of a diagram and where it occurs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extreme {
    /// Position of the extreme (m)
    pub x: f64,
    /// Signed value at the extreme
    pub y: f64,
}

/// Sampled diagram for one response quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagram {
    /// The sampled quantity
    pub quantity: Quantity,
    /// Axis title for the value axis
    pub axis_label: String,
    /// Series over the primary span
    pub primary: DiagramSeries,
    /// Series over the secondary span (two-span condition only)
    pub secondary: Option<DiagramSeries>,
    /// Maximum-magnitude sample across both series
    pub extreme: Option<Extreme>,
    /// Sampling step used (m)
    pub step_m: f64,
}

/// Sample an analysis over the beam at the given step.
///
/// The step must be finite and positive. Both span endpoints are always
/// sampled exactly, so support values never fall between steps.
pub fn sample(analysis: &Analysis, step_m: f64) -> CalcResult<Diagram> {
    if !step_m.is_finite() || step_m <= 0.0 {
        return Err(CalcError::invalid_input(
            "step_m",
            step_m.to_string(),
            "Sampling step must be positive",
        ));
    }
    if analysis.beam.total_span_m() / step_m > 100_000.0 {
        return Err(CalcError::invalid_input(
            "step_m",
            step_m.to_string(),
            "Sampling step is too small for the span",
        ));
    }

    let l1 = analysis.beam.primary_span_m;
    let quantity = analysis.equation.quantity();

    let mut primary = DiagramSeries::new("Primary span");
    let mut secondary = match analysis.condition {
        Condition::SimplySupported => None,
        Condition::TwoSpanUnequal => Some(DiagramSeries::new("Secondary span")),
    };
    let mut extreme: Option<Extreme> = None;

    let mut push = |series: &mut DiagramSeries, x: f64, y: f64| {
        series.points.push((x, y));
        let bigger = match extreme {
            Some(e) => y.abs() > e.y.abs(),
            None => true,
        };
        if bigger {
            extreme = Some(Extreme { x, y });
        }
    };

    // Primary span: regular steps, then the support position exactly
    for x in step_positions(0.0, l1, step_m) {
        match analysis.at(x)? {
            Eval::Continuous(p) => {
                if let Some(y) = p.y {
                    push(&mut primary, x, y);
                }
            }
            Eval::Discontinuous { before, after } => {
                if let Some(y) = before.y {
                    push(&mut primary, x, y);
                }
                if let (Some(series), Some(y)) = (secondary.as_mut(), after.y) {
                    push(series, x, y);
                }
            }
        }
    }

    // Secondary span: from just past the support to the far end
    if let Some(series) = secondary.as_mut() {
        let total = analysis.beam.total_span_m();
        // A continuous quantity (deflection) still needs its support sample
        // opening the secondary series; a discontinuous one was seeded above.
        if series.points.is_empty() {
            if let Eval::Continuous(p) = analysis.at(l1)? {
                if let Some(y) = p.y {
                    push(series, l1, y);
                }
            }
        }
        for x in step_positions(l1, total, step_m).into_iter().skip(1) {
            if let Eval::Continuous(p) = analysis.at(x)? {
                if let Some(y) = p.y {
                    push(series, x, y);
                }
            }
        }
    }

    Ok(Diagram {
        quantity,
        axis_label: quantity.axis_label().to_string(),
        primary,
        secondary,
        extreme,
        step_m,
    })
}

/// Regular positions from `start` to `end` inclusive: `start + i·step` while
/// strictly inside, with `end` appended exactly (no float-drift overshoot).
fn step_positions(start: f64, end: f64, step: f64) -> Vec<f64> {
    let mut positions = Vec::new();
    let mut i: usize = 0;
    loop {
        let x = start + i as f64 * step;
        if x >= end - 1e-12 {
            break;
        }
        positions.push(x);
        i += 1;
    }
    positions.push(end);
    positions
}
