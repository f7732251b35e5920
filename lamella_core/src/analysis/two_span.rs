//! # Two-Span Continuous Analyzer
//!
//! Beam continuous over three supports with unequal spans, uniformly loaded
//! across both. The interior support moment and the three reactions are
//! solved once when the equation is built (three-moment theorem plus
//! statics, see [`crate::equations::two_span`]) and reused for every
//! position query.
//!
//! Shear and moment jump at the interior support: evaluating at exactly
//! `x = L1` returns both one-sided limits. Deflection is continuous across
//! the support (only its derivatives jump), so it always evaluates to a
//! single point.

use crate::beam::Beam;
use crate::equations::two_span::{self, Reactions};
use crate::errors::{CalcError, CalcResult};

use super::{
    deflection_mm, resolve_kind, two_span_equation, Analyzer, Equation, Eval, Kind, Point,
    Quantity,
};

/// Analyzer for the `two-span-unequal` condition.
pub(crate) struct TwoSpanUnequal;

impl Analyzer for TwoSpanUnequal {
    fn equation(&self, beam: &Beam, load_kn_m: f64, quantity: Quantity) -> CalcResult<Equation> {
        beam.validate()?;
        if beam.secondary_span_m <= 0.0 {
            return Err(CalcError::invalid_input(
                "secondary_span_m",
                beam.secondary_span_m.to_string(),
                "Two-span analysis requires a positive secondary span",
            ));
        }
        let kind = resolve_kind(beam, quantity)?;
        let reactions = two_span::solve_reactions(load_kn_m, beam.primary_span_m, beam.secondary_span_m);
        Ok(two_span_equation(
            kind,
            beam.primary_span_m,
            beam.secondary_span_m,
            reactions,
            load_kn_m,
        ))
    }
}

/// Evaluate a two-span equation at `x`. Position is already known finite.
pub(crate) fn eval(
    kind: &Kind,
    l1: f64,
    l2: f64,
    reactions: &Reactions,
    w: f64,
    x: f64,
) -> CalcResult<Eval> {
    let total = l1 + l2;
    if x < 0.0 || x > total {
        return Ok(Eval::Continuous(Point::out_of_range(x)));
    }

    match kind {
        // No jump in displacement at the support; one formula covers both spans
        Kind::Deflection(stiffness) => {
            let d = two_span::two_span_deflection(reactions, w, l1, x, stiffness.ei);
            Ok(Eval::Continuous(Point::new(x, deflection_mm(d, stiffness))))
        }
        Kind::BendingMoment => {
            if x == l1 {
                Ok(Eval::Discontinuous {
                    before: Point::new(x, two_span::span1_moment(reactions, w, x)),
                    after: Point::new(x, two_span::span2_moment(reactions, w, l1, x)),
                })
            } else if x < l1 {
                Ok(Eval::Continuous(Point::new(
                    x,
                    two_span::span1_moment(reactions, w, x),
                )))
            } else {
                Ok(Eval::Continuous(Point::new(
                    x,
                    two_span::span2_moment(reactions, w, l1, x),
                )))
            }
        }
        Kind::ShearForce => {
            if x == l1 {
                Ok(Eval::Discontinuous {
                    before: Point::new(x, two_span::span1_shear(reactions, w, x)),
                    after: Point::new(x, two_span::span2_shear(reactions, w, x)),
                })
            } else if x < l1 {
                Ok(Eval::Continuous(Point::new(
                    x,
                    two_span::span1_shear(reactions, w, x),
                )))
            } else {
                Ok(Eval::Continuous(Point::new(
                    x,
                    two_span::span2_shear(reactions, w, x),
                )))
            }
        }
    }
}
