//! # Simply-Supported Analyzer
//!
//! Single uniformly loaded span, both ends free to rotate (zero moment at
//! both supports). All three response quantities are continuous and
//! single-valued on `[0, L]`; there are no discontinuities to handle.
//!
//! The secondary span of the beam is ignored here; by convention callers
//! set it to 0 before plotting a simply-supported beam, but nothing in this
//! analyzer depends on that.

use crate::beam::Beam;
use crate::equations::simple_span;
use crate::errors::CalcResult;

use super::{
    deflection_mm, resolve_kind, simple_equation, Analyzer, Equation, Eval, Kind, Point, Quantity,
};

/// Analyzer for the `simply-supported` condition.
pub(crate) struct SimplySupported;

impl Analyzer for SimplySupported {
    fn equation(&self, beam: &Beam, load_kn_m: f64, quantity: Quantity) -> CalcResult<Equation> {
        beam.validate()?;
        let kind = resolve_kind(beam, quantity)?;
        Ok(simple_equation(kind, beam.primary_span_m, load_kn_m))
    }
}

/// Evaluate a single-span equation at `x`. Position is already known finite.
pub(crate) fn eval(kind: &Kind, span_m: f64, w: f64, x: f64) -> CalcResult<Eval> {
    if x < 0.0 || x > span_m {
        return Ok(Eval::Continuous(Point::out_of_range(x)));
    }
    let y = match kind {
        Kind::ShearForce => simple_span::uniform_shear(w, span_m, x),
        Kind::BendingMoment => simple_span::uniform_moment(w, span_m, x),
        Kind::Deflection(stiffness) => deflection_mm(
            simple_span::uniform_deflection(w, span_m, x, stiffness.ei),
            stiffness,
        ),
    };
    Ok(Eval::Continuous(Point::new(x, y)))
}
