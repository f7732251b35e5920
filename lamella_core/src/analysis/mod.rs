//! # Beam Response Analysis
//!
//! Maps a ([`Beam`], load, [`Condition`]) triple to closed-form response
//! equations for deflection, bending moment, and shear force. The
//! [`BeamAnalysis`] facade selects the analyzer for the requested support
//! condition and returns an [`Analysis`] bundle whose [`Equation`] can be
//! evaluated at arbitrary positions.
//!
//! Support-dependent constants (the two-span reactions) are solved once when
//! the equation is built and reused for every position query; evaluation
//! itself is stateless and bit-identical across repeated calls.
//!
//! ## Domains and sentinels
//!
//! - Simply-supported: `x ∈ [0, L1]`. The secondary span is ignored.
//! - Two-span: `x ∈ [0, L1 + L2]`, split at the interior support `x = L1`.
//! - Outside the domain the equation returns a point with `y = None`,
//!   meaning "no data" rather than an error, so samplers can keep going.
//! - At exactly `x = L1` the two-span moment and shear equations return both
//!   one-sided limits as [`Eval::Discontinuous`]; the shear jump equals the
//!   interior reaction R2. Deflection has no jump and stays continuous.
//! - A non-finite position is a typed `InvalidInput` error for every
//!   condition and quantity.
//!
//! ## Units and sign convention
//!
//! Spans in metres, load in kN/m (positive downward), EI in kN·m². Shear in
//! kN, moment in kN·m (sagging positive), deflection in **millimetres**,
//! positive downward: `δ_mm = 1000 · δ_m / j2` with `j2` from the material
//! (default 1.0).
//!
//! ## Example
//!
//! ```rust
//! use lamella_core::analysis::{BeamAnalysis, Condition, Eval};
//! use lamella_core::beam::Beam;
//! use lamella_core::materials::{keys, Material};
//!
//! let material = Material::new("unit").with_property(keys::EI, 1.0);
//! let beam = Beam::single_span("B-1", 4.0, material);
//! let analysis = BeamAnalysis::new(beam, 10.0, Condition::SimplySupported);
//!
//! let moment = analysis.bending_moment().unwrap();
//! match moment.at(2.0).unwrap() {
//!     Eval::Continuous(p) => assert_eq!(p.y, Some(20.0)),
//!     Eval::Discontinuous { .. } => unreachable!(),
//! }
//! ```

pub mod simply_supported;
pub mod two_span;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::beam::Beam;
use crate::equations::two_span::Reactions;
use crate::errors::{CalcError, CalcResult};
use crate::materials::Stiffness;
use crate::units::{Meters, Millimeters};

use simply_supported::SimplySupported;
use two_span::TwoSpanUnequal;

// =============================================================================
// CONDITION
// =============================================================================

/// Support condition selecting the analyzer variant.
///
/// The set is closed: dispatch is an exhaustive match, and unknown tags are
/// rejected when parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Condition {
    /// Single span, both ends free to rotate (zero end moments)
    #[default]
    #[serde(rename = "simply-supported")]
    SimplySupported,

    /// Two unequal spans continuous over three supports
    #[serde(rename = "two-span-unequal")]
    TwoSpanUnequal,
}

impl Condition {
    /// All available conditions, for UI selection
    pub const ALL: [Condition; 2] = [Condition::SimplySupported, Condition::TwoSpanUnequal];

    /// Stable string tag used in serialized requests
    pub fn tag(&self) -> &'static str {
        match self {
            Condition::SimplySupported => "simply-supported",
            Condition::TwoSpanUnequal => "two-span-unequal",
        }
    }

    /// Get display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            Condition::SimplySupported => "Simply supported",
            Condition::TwoSpanUnequal => "Two-span continuous (unequal)",
        }
    }

    fn analyzer(&self) -> &'static dyn Analyzer {
        match self {
            Condition::SimplySupported => &SimplySupported,
            Condition::TwoSpanUnequal => &TwoSpanUnequal,
        }
    }

    fn expected_tags() -> String {
        Condition::ALL
            .iter()
            .map(|c| c.tag())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromStr for Condition {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Condition::ALL
            .iter()
            .copied()
            .find(|c| c.tag() == s)
            .ok_or_else(|| CalcError::invalid_condition(s, Condition::expected_tags()))
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

// =============================================================================
// QUANTITY
// =============================================================================

/// Response quantity an equation evaluates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quantity {
    /// Vertical displacement under load (mm, positive downward)
    Deflection,
    /// Internal rotational force at a cross-section (kN·m)
    BendingMoment,
    /// Internal transverse force at a cross-section (kN)
    ShearForce,
}

impl Quantity {
    /// Axis label for plot series
    pub fn axis_label(&self) -> &'static str {
        match self {
            Quantity::Deflection => "Deflection (mm)",
            Quantity::BendingMoment => "Bending Moment (kNm)",
            Quantity::ShearForce => "Shear Force (kN)",
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.axis_label())
    }
}

// =============================================================================
// EVALUATION RESULTS
// =============================================================================

/// A sampled equation value.
///
/// `y = None` marks an out-of-domain position ("no data"), never an error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Position from the left support (m)
    pub x: f64,
    /// Response value, or None outside the valid domain
    pub y: Option<f64>,
}

impl Point {
    /// In-domain point
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y: Some(y) }
    }

    /// Out-of-domain sentinel
    pub fn out_of_range(x: f64) -> Self {
        Point { x, y: None }
    }
}

/// Result of evaluating an equation at one position.
///
/// Plotting code branches on the tag: a `Discontinuous` pair belongs to the
/// primary-span series (`before`) and the secondary-span series (`after`)
/// respectively.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Eval {
    /// Single-valued position
    Continuous(Point),
    /// Position at a support where the quantity jumps; both one-sided limits
    Discontinuous {
        /// Left limit (end of the primary span)
        before: Point,
        /// Right limit (start of the secondary span)
        after: Point,
    },
}

impl Eval {
    /// The single value of a continuous evaluation, if in-domain
    pub fn value(&self) -> Option<f64> {
        match self {
            Eval::Continuous(p) => p.y,
            Eval::Discontinuous { .. } => None,
        }
    }
}

// =============================================================================
// EQUATION
// =============================================================================

/// Which response the equation computes, with the stiffness resolved up front
/// for deflection (the only quantity that needs material data).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub(crate) enum Kind {
    Deflection(Stiffness),
    BendingMoment,
    ShearForce,
}

impl Kind {
    fn quantity(&self) -> Quantity {
        match self {
            Kind::Deflection(_) => Quantity::Deflection,
            Kind::BendingMoment => Quantity::BendingMoment,
            Kind::ShearForce => Quantity::ShearForce,
        }
    }
}

/// Geometry and per-analysis constants the evaluator closes over.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
enum Geometry {
    /// Single span of length `span_m`
    Simple { span_m: f64 },
    /// Two spans with reactions solved once at construction
    TwoSpan {
        primary_span_m: f64,
        secondary_span_m: f64,
        reactions: Reactions,
    },
}

/// A closed-form response equation bound to one beam, load, and condition.
///
/// Cheap to construct, stateless between evaluations; all derived constants
/// are solved at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Equation {
    kind: Kind,
    geometry: Geometry,
    load_kn_m: f64,
}

impl Equation {
    /// The quantity this equation evaluates
    pub fn quantity(&self) -> Quantity {
        self.kind.quantity()
    }

    /// The reactions solved for a two-span equation; None for a single span
    pub fn reactions(&self) -> Option<Reactions> {
        match self.geometry {
            Geometry::Simple { .. } => None,
            Geometry::TwoSpan { reactions, .. } => Some(reactions),
        }
    }

    /// Evaluate at position `x` (m from the left support).
    ///
    /// Returns an out-of-domain sentinel outside the spans, both one-sided
    /// limits at the interior support for discontinuous quantities, and an
    /// `InvalidInput` error for non-finite positions.
    pub fn at(&self, x: f64) -> CalcResult<Eval> {
        if !x.is_finite() {
            return Err(CalcError::invalid_input(
                "x",
                x.to_string(),
                "Position must be a finite number",
            ));
        }
        match self.geometry {
            Geometry::Simple { span_m } => {
                simply_supported::eval(&self.kind, span_m, self.load_kn_m, x)
            }
            Geometry::TwoSpan {
                primary_span_m,
                secondary_span_m,
                reactions,
            } => two_span::eval(
                &self.kind,
                primary_span_m,
                secondary_span_m,
                &reactions,
                self.load_kn_m,
                x,
            ),
        }
    }
}

/// Convert an SI-base deflection (m) to the reported convention (mm / j2).
pub(crate) fn deflection_mm(d_m: f64, stiffness: &Stiffness) -> f64 {
    Millimeters::from(Meters(d_m)).0 / stiffness.j2
}

// =============================================================================
// ANALYSIS RESULT AND FACADE
// =============================================================================

/// Result bundle for one analysis request.
///
/// Owns a snapshot of the beam so the bundle can outlive the request and
/// serialize as a self-contained record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    /// The analyzed beam
    pub beam: Beam,
    /// Uniform load magnitude (kN/m)
    pub load_kn_m: f64,
    /// Support condition that selected the analyzer
    pub condition: Condition,
    /// The response equation, ready to evaluate at any position
    pub equation: Equation,
}

impl Analysis {
    /// Evaluate the equation at position `x`
    pub fn at(&self, x: f64) -> CalcResult<Eval> {
        self.equation.at(x)
    }
}

/// Analysis facade: dispatches deflection/moment/shear requests to the
/// analyzer registered for the condition.
///
/// Pure dispatch, no side effects. Each request builds a fresh equation
/// (reactions re-solved per call; nothing is cached between calls).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamAnalysis {
    /// Beam under analysis
    pub beam: Beam,
    /// Uniform load magnitude (kN/m)
    pub load_kn_m: f64,
    /// Support condition
    pub condition: Condition,
}

impl BeamAnalysis {
    /// Create an analysis request
    pub fn new(beam: Beam, load_kn_m: f64, condition: Condition) -> Self {
        BeamAnalysis {
            beam,
            load_kn_m,
            condition,
        }
    }

    /// Create from a string condition tag, rejecting unknown tags
    pub fn from_tag(beam: Beam, load_kn_m: f64, condition_tag: &str) -> CalcResult<Self> {
        let condition = Condition::from_str(condition_tag)?;
        Ok(BeamAnalysis::new(beam, load_kn_m, condition))
    }

    /// Deflection equation (mm, positive downward)
    pub fn deflection(&self) -> CalcResult<Analysis> {
        self.analyze(Quantity::Deflection)
    }

    /// Bending moment equation (kN·m, sagging positive)
    pub fn bending_moment(&self) -> CalcResult<Analysis> {
        self.analyze(Quantity::BendingMoment)
    }

    /// Shear force equation (kN)
    pub fn shear_force(&self) -> CalcResult<Analysis> {
        self.analyze(Quantity::ShearForce)
    }

    fn analyze(&self, quantity: Quantity) -> CalcResult<Analysis> {
        if !self.load_kn_m.is_finite() {
            return Err(CalcError::invalid_input(
                "load_kn_m",
                self.load_kn_m.to_string(),
                "Load must be a finite number",
            ));
        }
        let equation = self
            .condition
            .analyzer()
            .equation(&self.beam, self.load_kn_m, quantity)?;
        Ok(Analysis {
            beam: self.beam.clone(),
            load_kn_m: self.load_kn_m,
            condition: self.condition,
            equation,
        })
    }
}

/// One analyzer variant: builds the response equation for a beam and load.
///
/// Implementations validate their inputs and solve any derived constants
/// (reactions) exactly once per equation.
pub(crate) trait Analyzer: Sync {
    fn equation(&self, beam: &Beam, load_kn_m: f64, quantity: Quantity) -> CalcResult<Equation>;
}

/// Resolve the `Kind` for a request, pulling stiffness from the material
/// only when the quantity needs it.
pub(crate) fn resolve_kind(beam: &Beam, quantity: Quantity) -> CalcResult<Kind> {
    Ok(match quantity {
        Quantity::Deflection => Kind::Deflection(beam.material.stiffness()?),
        Quantity::BendingMoment => Kind::BendingMoment,
        Quantity::ShearForce => Kind::ShearForce,
    })
}

/// Build a single-span equation (used by the simply-supported analyzer).
pub(crate) fn simple_equation(kind: Kind, span_m: f64, load_kn_m: f64) -> Equation {
    Equation {
        kind,
        geometry: Geometry::Simple { span_m },
        load_kn_m,
    }
}

/// Build a two-span equation with its solved reactions.
pub(crate) fn two_span_equation(
    kind: Kind,
    primary_span_m: f64,
    secondary_span_m: f64,
    reactions: Reactions,
    load_kn_m: f64,
) -> Equation {
    Equation {
        kind,
        geometry: Geometry::TwoSpan {
            primary_span_m,
            secondary_span_m,
            reactions,
        },
        load_kn_m,
    }
}
