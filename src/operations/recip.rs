//! This module contains the Newton-Raphson solvers for the reciprocal and
//! the square root.

use crate::utils::{frexp, ldexp};

/// Default iteration depth for the Newton-Raphson solvers. Nine quadratic
/// steps saturate a double starting from the power-of-two seed.
pub const NEWTON_ITERS: u32 = 9;

/// Computes `1/x` with `n` Newton-Raphson refinement steps.
///
/// The refinement itself never divides by `x`: the seed `2^-e` comes from
/// the base-2 exponent of `x`, and each step computes `r = r * (2 - x*r)`,
/// which converges quadratically to `1/x`.
///
/// `x = 0` returns infinity with the sign of the zero, and `1/inf` is a
/// signed zero; NaN propagates.
pub fn reciprocal_iter(x: f64, n: u32) -> f64 {
    if x == 0.0 {
        return f64::INFINITY.copysign(x);
    }
    if !x.is_finite() {
        if x.is_nan() {
            return x;
        }
        return 0.0f64.copysign(x);
    }
    let (_m, e) = frexp(x);
    let mut r = ldexp(1.0, -e); // First guess.
    let s = 1.0f64.copysign(x);
    let x = x.abs();
    for _ in 0..n {
        r = r * (2.0 - x * r);
    }
    r * s
}

/// `reciprocal_iter` at the default depth.
pub fn reciprocal(x: f64) -> f64 {
    reciprocal_iter(x, NEWTON_ITERS)
}

/// Elementwise [`reciprocal_iter`].
pub fn reciprocal_vec(xs: &[f64], n: u32) -> Vec<f64> {
    xs.iter().map(|&x| reciprocal_iter(x, n)).collect()
}

/// Computes the square root of `x` with `n` Newton-Raphson (Babylonian)
/// steps: `r = 0.5 * (r + x/r)`, seeded with `2^(e/2)` from the base-2
/// exponent of `x`. Unlike the reciprocal, the inner step divides by the
/// running estimate; the square root is not constrained to avoid division.
///
/// Zero returns itself (either sign), a negative or NaN input returns NaN,
/// and +inf returns +inf.
pub fn sqrt_iter(x: f64, n: u32) -> f64 {
    if x == 0.0 {
        return x; // (+/-) zero.
    } else if x.is_nan() || x < 0.0 {
        return f64::NAN;
    } else if x.is_infinite() {
        return x; // Inf+.
    }
    let (_m, e) = frexp(x);
    let mut r = ldexp(1.0, e / 2); // First guess.
    for _ in 0..n {
        r = 0.5 * (r + x / r);
    }
    r
}

/// `sqrt_iter` at the default depth.
pub fn sqrt(x: f64) -> f64 {
    sqrt_iter(x, NEWTON_ITERS)
}

/// Elementwise [`sqrt_iter`].
pub fn sqrt_vec(xs: &[f64], n: u32) -> Vec<f64> {
    xs.iter().map(|&x| sqrt_iter(x, n)).collect()
}

#[test]
fn test_reciprocal() {
    // Exact for powers of two, where the seed is already the answer.
    for e in -60..60 {
        let x = ldexp(1.0, e);
        assert_eq!(reciprocal(x), ldexp(1.0, -e));
    }
    // Representative values across several orders of magnitude.
    for x in [3.0, 7.5, 1e-8, 1e12, 0.3333, 123456.789, 2.5e-200, 9.9e200] {
        let r = reciprocal(x);
        assert!((r * x - 1.0).abs() < 1e-14, "1/{} was {}", x, r);
        assert!((reciprocal(r) / x - 1.0).abs() < 1e-9);
        let neg = reciprocal(-x);
        assert_eq!(neg.to_bits(), (-r).to_bits());
    }
}

#[test]
fn test_reciprocal_special_values() {
    assert_eq!(reciprocal(0.0), f64::INFINITY);
    assert_eq!(reciprocal(-0.0), f64::NEG_INFINITY);
    assert_eq!(reciprocal(f64::INFINITY).to_bits(), 0.0f64.to_bits());
    assert_eq!(reciprocal(f64::NEG_INFINITY).to_bits(), (-0.0f64).to_bits());
    assert!(reciprocal(f64::NAN).is_nan());
}

#[test]
fn test_sqrt() {
    // Perfect squares.
    for i in 1u64..200 {
        let v = (i * i) as f64;
        assert!((sqrt(v) - i as f64).abs() < 1e-12 * i as f64);
    }
    // sqrt(x)^2 ~ x across orders of magnitude.
    for x in [2.0, 0.5, 1e-10, 1e10, 3.14159, 7.0e-200, 1.7e250] {
        let r = sqrt(x);
        assert!((r * r / x - 1.0).abs() < 1e-9, "sqrt({}) was {}", x, r);
    }
}

#[test]
fn test_sqrt_special_values() {
    assert_eq!(sqrt(0.0).to_bits(), 0.0f64.to_bits());
    assert_eq!(sqrt(-0.0).to_bits(), (-0.0f64).to_bits());
    assert_eq!(sqrt(f64::INFINITY), f64::INFINITY);
    assert!(sqrt(-1.0).is_nan());
    assert!(sqrt(f64::NAN).is_nan());
}

#[test]
fn test_vectorized_matches_scalar() {
    let xs = [0.1, 1.0, 2.0, 42.0, 1e8];
    let rv = reciprocal_vec(&xs, NEWTON_ITERS);
    let sv = sqrt_vec(&xs, NEWTON_ITERS);
    for (i, &x) in xs.iter().enumerate() {
        assert_eq!(rv[i].to_bits(), reciprocal(x).to_bits());
        assert_eq!(sv[i].to_bits(), sqrt(x).to_bits());
    }
}

#[test]
fn test_special_values() {
    // Undefined domains propagate IEEE specials; they never come back as a
    // quiet wrong finite value.
    for v in crate::utils::get_special_test_values() {
        let r = reciprocal(v);
        let s = sqrt(v);
        if v.is_finite() && v != 0.0 {
            assert!((r * v - 1.0).abs() < 1e-9, "1/{} was {}", v, r);
        }
        if v > 0.0 && v.is_finite() {
            assert!((s / v.sqrt() - 1.0).abs() < 1e-9, "sqrt({})", v);
        }
        if v.is_nan() {
            assert!(r.is_nan());
            assert!(s.is_nan());
        }
    }
}

#[test]
fn test_iteration_depth_is_a_tunable() {
    // Fewer iterations converge less; more iterations change nothing once
    // the estimate is saturated.
    let x = 3.7;
    let shallow = reciprocal_iter(x, 3);
    assert!((shallow * x - 1.0).abs() > 1e-15);
    assert_eq!(
        reciprocal_iter(x, 20).to_bits(),
        reciprocal_iter(x, 40).to_bits()
    );
}
