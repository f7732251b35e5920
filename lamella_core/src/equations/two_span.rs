//! # Two-Span Continuous Beam Formulas
//!
//! A beam continuous over three pinned supports with unequal spans `L1`
//! (primary) and `L2` (secondary), uniformly loaded across both spans. The
//! structure is statically indeterminate to the first degree; the interior
//! support moment comes from the three-moment theorem with zero moment at the
//! outer supports, and the reactions follow from statics.
//!
//! ```text
//!    ↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓ w
//!    ═══════════════════════
//!    △          △          △
//!   R1 ←──L1──→ R2 ←──L2──→ R3
//! ```
//!
//! The support moment and reactions are solved once per analysis call and
//! carried in a [`Reactions`] value; position queries reuse it without
//! re-solving.
//!
//! ## Notation
//!
//! - `L1`, `L2` = span lengths (m), `L = L1 + L2`
//! - `x` = global position from the left support (m)
//! - `w` = uniform load intensity (kN/m)
//! - `M1` = moment over the interior support (kN·m, negative = hogging)

use serde::{Deserialize, Serialize};

/// Support moment and reactions for one two-span analysis, solved once and
/// reused for every position query.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reactions {
    /// Moment over the interior support (kN·m, hogging is negative)
    pub m1: f64,
    /// Left support reaction (kN)
    pub r1: f64,
    /// Interior support reaction (kN)
    pub r2: f64,
    /// Right support reaction (kN)
    pub r3: f64,
}

/// Interior support moment by the three-moment theorem.
///
/// # Formula (Clapeyron, uniform load on both spans, M0 = M2 = 0)
/// ```text
/// 2·M1·(L1 + L2) = -(w·L1³ + w·L2³) / 4
/// M1 = -w(L1³ + L2³) / (8(L1 + L2))
/// ```
///
/// For equal spans L this reduces to the textbook -wL²/8.
#[inline]
pub fn support_moment(w: f64, l1: f64, l2: f64) -> f64 {
    -w * (l1.powi(3) + l2.powi(3)) / (8.0 * (l1 + l2))
}

/// Solve the support moment and all three reactions.
///
/// # Formulas
/// Each span carries its simple-span share wL/2 corrected by the end moment:
/// ```text
/// R1 = wL1/2 + M1/L1
/// R3 = wL2/2 + M1/L2
/// R2 = w(L1 + L2) - R1 - R3     (global force balance)
/// ```
///
/// Global equilibrium `R1 + R2 + R3 = w(L1 + L2)` holds by construction.
#[inline]
pub fn solve_reactions(w: f64, l1: f64, l2: f64) -> Reactions {
    let m1 = support_moment(w, l1, l2);
    let r1 = w * l1 / 2.0 + m1 / l1;
    let r3 = w * l2 / 2.0 + m1 / l2;
    let r2 = w * (l1 + l2) - r1 - r3;
    Reactions { m1, r1, r2, r3 }
}

/// Shear on the primary span, 0 ≤ x ≤ L1
///
/// # Formula
/// V(x) = R1 - wx
#[inline]
pub fn span1_shear(r: &Reactions, w: f64, x: f64) -> f64 {
    r.r1 - w * x
}

/// Shear on the secondary span, L1 ≤ x ≤ L1 + L2
///
/// # Formula
/// V(x) = R1 + R2 - wx
#[inline]
pub fn span2_shear(r: &Reactions, w: f64, x: f64) -> f64 {
    r.r1 + r.r2 - w * x
}

/// Moment on the primary span, 0 ≤ x ≤ L1
///
/// # Formula
/// M(x) = R1·x - wx²/2
///
/// At x = L1 this evaluates to the support moment M1.
#[inline]
pub fn span1_moment(r: &Reactions, w: f64, x: f64) -> f64 {
    r.r1 * x - w * x * x / 2.0
}

/// Moment on the secondary span, L1 ≤ x ≤ L1 + L2
///
/// # Formula
/// M(x) = R1·x + R2·(x - L1) - wx²/2
///
/// Evaluates to M1 at x = L1 and to zero at x = L1 + L2.
#[inline]
pub fn span2_moment(r: &Reactions, w: f64, l1: f64, x: f64) -> f64 {
    r.r1 * x + r.r2 * (x - l1) - w * x * x / 2.0
}

/// Deflection at global position x, valid on the whole beam (metres).
///
/// Double integration of M(x)/EI with y = 0 at all three supports and slope
/// continuity at the interior support. With
/// `C1 = wL1³/24 - R1·L1²/6` (the span-1 slope constant), the downward
/// deflection is:
///
/// ```text
/// EI·δ(x) = wx⁴/24 - R1·x³/6 - C1·x                      for 0 ≤ x ≤ L1
/// EI·δ(x) = wx⁴/24 - R1·x³/6 - R2·(x-L1)³/6 - C1·x      for L1 ≤ x ≤ L1+L2
/// ```
///
/// Unlike shear and moment, deflection has no jump at the interior support;
/// only its derivatives do.
#[inline]
pub fn two_span_deflection(r: &Reactions, w: f64, l1: f64, x: f64, ei: f64) -> f64 {
    let c1 = w * l1.powi(3) / 24.0 - r.r1 * l1 * l1 / 6.0;
    let mut v = w * x.powi(4) / 24.0 - r.r1 * x.powi(3) / 6.0 - c1 * x;
    if x > l1 {
        v -= r.r2 * (x - l1).powi(3) / 6.0;
    }
    v / ei
}

// =============================================================================
// UNIT TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON || (a - b).abs() / b.abs().max(1.0) < 1e-9
    }

    #[test]
    fn test_equilibrium_concrete() {
        // L1=3, L2=2, w=5: ΣR must equal w(L1+L2) = 25 kN
        let r = solve_reactions(5.0, 3.0, 2.0);
        assert!(
            (r.r1 + r.r2 + r.r3 - 25.0).abs() < EPSILON,
            "ΣR = {}",
            r.r1 + r.r2 + r.r3
        );
    }

    #[test]
    fn test_equilibrium_sweep() {
        // Equilibrium must hold across a spread of positive geometries/loads
        let spans = [0.8, 1.5, 2.3, 3.0, 4.7, 6.2, 9.1];
        let loads = [0.5, 1.0, 5.0, 12.5, 40.0];
        for &l1 in &spans {
            for &l2 in &spans {
                for &w in &loads {
                    let r = solve_reactions(w, l1, l2);
                    let total = w * (l1 + l2);
                    assert!(
                        (r.r1 + r.r2 + r.r3 - total).abs() < 1e-9 * total.max(1.0),
                        "L1={} L2={} w={}: ΣR = {} expected {}",
                        l1,
                        l2,
                        w,
                        r.r1 + r.r2 + r.r3,
                        total
                    );
                }
            }
        }
    }

    #[test]
    fn test_equal_spans_textbook_values() {
        // Equal spans L: R1 = R3 = 3wL/8, R2 = 10wL/8, M1 = -wL²/8
        let w = 4.0;
        let l = 3.0;
        let r = solve_reactions(w, l, l);
        assert!(approx_eq(r.m1, -w * l * l / 8.0), "M1 = {}", r.m1);
        assert!(approx_eq(r.r1, 3.0 * w * l / 8.0), "R1 = {}", r.r1);
        assert!(approx_eq(r.r3, 3.0 * w * l / 8.0), "R3 = {}", r.r3);
        assert!(approx_eq(r.r2, 10.0 * w * l / 8.0), "R2 = {}", r.r2);
    }

    #[test]
    fn test_moment_matches_support_moment_from_both_sides() {
        let (w, l1, l2) = (5.0, 3.0, 2.0);
        let r = solve_reactions(w, l1, l2);
        let left = span1_moment(&r, w, l1);
        let right = span2_moment(&r, w, l1, l1);
        assert!(approx_eq(left, r.m1), "M(L1-) = {} vs M1 = {}", left, r.m1);
        assert!(approx_eq(right, r.m1), "M(L1+) = {} vs M1 = {}", right, r.m1);
    }

    #[test]
    fn test_moment_zero_at_outer_supports() {
        let (w, l1, l2) = (5.0, 3.0, 2.0);
        let r = solve_reactions(w, l1, l2);
        assert!(approx_eq(span1_moment(&r, w, 0.0), 0.0));
        assert!(approx_eq(span2_moment(&r, w, l1, l1 + l2), 0.0));
    }

    #[test]
    fn test_shear_jump_equals_interior_reaction() {
        let (w, l1, l2) = (5.0, 3.0, 2.0);
        let r = solve_reactions(w, l1, l2);
        let before = span1_shear(&r, w, l1);
        let after = span2_shear(&r, w, l1);
        assert!(
            approx_eq(after - before, r.r2),
            "jump = {} vs R2 = {}",
            after - before,
            r.r2
        );
    }

    #[test]
    fn test_deflection_zero_at_all_supports() {
        let (w, l1, l2, ei) = (5.0, 3.0, 2.0, 1000.0);
        let r = solve_reactions(w, l1, l2);
        for x in [0.0, l1, l1 + l2] {
            let d = two_span_deflection(&r, w, l1, x, ei);
            assert!(d.abs() < EPSILON, "δ({}) = {}", x, d);
        }
    }

    #[test]
    fn test_deflection_continuous_at_interior_support() {
        // Approach the support from both sides; values must converge
        let (w, l1, l2, ei) = (5.0, 3.0, 2.0, 1000.0);
        let r = solve_reactions(w, l1, l2);
        let eps = 1e-7;
        let left = two_span_deflection(&r, w, l1, l1 - eps, ei);
        let right = two_span_deflection(&r, w, l1, l1 + eps, ei);
        assert!((left - right).abs() < 1e-6, "left={} right={}", left, right);
    }

    #[test]
    fn test_deflection_sags_in_primary_span() {
        // Longer span under downward load deflects downward (positive)
        let (w, l1, l2, ei) = (5.0, 3.0, 2.0, 1000.0);
        let r = solve_reactions(w, l1, l2);
        let d = two_span_deflection(&r, w, l1, 1.5, ei);
        assert!(d > 0.0, "δ(1.5) = {}", d);
    }

    #[test]
    fn test_unequal_spans_shift_load_to_interior() {
        // The interior support always carries more than either end
        let r = solve_reactions(5.0, 3.0, 2.0);
        assert!(r.r2 > r.r1);
        assert!(r.r2 > r.r3);
    }

    #[test]
    fn test_reactions_solved_once_are_stable() {
        // Same inputs produce bit-identical results
        let a = solve_reactions(7.3, 4.1, 2.9);
        let b = solve_reactions(7.3, 4.1, 2.9);
        assert_eq!(a, b);
    }
}
