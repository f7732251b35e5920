//! # Simply-Supported Span Formulas
//!
//! Fundamental equations for a single span under full uniform load, pin
//! support at left (x = 0) and roller at right (x = L). Both ends are free to
//! rotate, so the moment is zero at both supports.
//!
//! ## Notation
//!
//! - `L` = span length (m)
//! - `x` = position along the beam from the left support (m)
//! - `w` = uniform load intensity (kN/m)
//! - `EI` = flexural rigidity (kN·m²)

// =============================================================================
// UNIFORM LOAD FORMULAS
// Simply-supported beam with uniform load w over the entire span
// =============================================================================

/// Calculate reactions for uniform load w over full span L
///
/// ```text
///    ↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓ w
///    ═════════════════
///    △                △
///   R1  ←─────L─────→ R2
/// ```
///
/// # Formula
/// R1 = R2 = wL/2
#[inline]
pub fn uniform_reactions(w: f64, l: f64) -> (f64, f64) {
    let r = w * l / 2.0;
    (r, r)
}

/// Calculate shear at position x for uniform load w
///
/// # Formula
/// V(x) = wL/2 - wx = w(L/2 - x)
///
/// - At x = 0: V = +wL/2
/// - At x = L/2: V = 0
/// - At x = L: V = -wL/2
#[inline]
pub fn uniform_shear(w: f64, l: f64, x: f64) -> f64 {
    w * (l / 2.0 - x)
}

/// Calculate moment at position x for uniform load w
///
/// # Formula (Roark's Table 8.1, Case 2a)
/// M(x) = wx(L-x)/2
///
/// Maximum at midspan: M_max = wL²/8
#[inline]
pub fn uniform_moment(w: f64, l: f64, x: f64) -> f64 {
    w * x * (l - x) / 2.0
}

/// Calculate deflection at position x for uniform load w (metres)
///
/// # Formula (Roark's Table 8.1, Case 2a)
/// δ(x) = wx(L³ - 2Lx² + x³) / (24EI)
///
/// Maximum at midspan: δ_max = 5wL⁴ / (384EI)
#[inline]
pub fn uniform_deflection(w: f64, l: f64, x: f64, ei: f64) -> f64 {
    w * x * (l.powi(3) - 2.0 * l * x * x + x.powi(3)) / (24.0 * ei)
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
    fn test_uniform_reactions() {
        // 4 m span, 10 kN/m
        let (r1, r2) = uniform_reactions(10.0, 4.0);
        assert!(approx_eq(r1, 20.0), "R1 = {}", r1);
        assert!(approx_eq(r2, 20.0), "R2 = {}", r2);
    }

    #[test]
    fn test_moment_at_midspan() {
        // 4 m span, 10 kN/m: M(2) = 10*2*(4-2)/2 = 20 kNm
        let m = uniform_moment(10.0, 4.0, 2.0);
        assert!(approx_eq(m, 20.0), "M = {}", m);
        // And wL²/8 agrees
        assert!(approx_eq(m, 10.0 * 16.0 / 8.0));
    }

    #[test]
    fn test_moment_zero_at_supports() {
        assert!(approx_eq(uniform_moment(10.0, 4.0, 0.0), 0.0));
        assert!(approx_eq(uniform_moment(10.0, 4.0, 4.0), 0.0));
    }

    #[test]
    fn test_shear_at_supports_and_midspan() {
        // V(0) = +wL/2 = 20, V(L) = -20, V(L/2) = 0
        assert!(approx_eq(uniform_shear(10.0, 4.0, 0.0), 20.0));
        assert!(approx_eq(uniform_shear(10.0, 4.0, 4.0), -20.0));
        assert!(approx_eq(uniform_shear(10.0, 4.0, 2.0), 0.0));
    }

    #[test]
    fn test_deflection_zero_at_supports() {
        assert!(approx_eq(uniform_deflection(10.0, 4.0, 0.0, 1000.0), 0.0));
        assert!(approx_eq(uniform_deflection(10.0, 4.0, 4.0, 1000.0), 0.0));
    }

    #[test]
    fn test_deflection_max_at_midspan() {
        // δ_max = 5wL⁴/(384EI)
        let w = 10.0;
        let l = 4.0;
        let ei = 1000.0;
        let d = uniform_deflection(w, l, l / 2.0, ei);
        let expected = 5.0 * w * l.powi(4) / (384.0 * ei);
        assert!(approx_eq(d, expected), "δ = {} expected {}", d, expected);
    }

    #[test]
    fn test_deflection_symmetry() {
        // δ(x) = δ(L - x) for a symmetric load
        let d1 = uniform_deflection(10.0, 4.0, 1.0, 1000.0);
        let d2 = uniform_deflection(10.0, 4.0, 3.0, 1000.0);
        assert!(approx_eq(d1, d2));
    }
}
