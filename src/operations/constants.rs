//! This module contains the implementation of methods that compute
//! mathematical constants.

use std::sync::LazyLock;

use crate::operations::recip::{reciprocal_iter, sqrt_iter, NEWTON_ITERS};

/// Default iteration depth for [`calc_pi`]. The AGM converges quadratically,
/// so five rounds already saturate a double.
pub const PI_ITERS: u32 = 5;

/// Estimates pi with `n` rounds of the Gauss-Legendre (AGM) iteration.
///
/// The geometric seed `1/sqrt(2)` is formed with the reciprocal solver at
/// depth 20, and the final quotient `a^2 / t` goes through the reciprocal
/// solver as well, so the whole estimate is built from the crate's own
/// primitives. The loop exits early once the arithmetic mean reaches a
/// bit-for-bit fixed point; that is an optimization, not a correctness
/// requirement.
pub fn calc_pi(n: u32) -> f64 {
    // Algorithm description:
    // https://en.wikipedia.org/wiki/Gauss-Legendre_algorithm
    let root2 = sqrt_iter(2.0, NEWTON_ITERS);
    let mut a: f64 = 1.0;
    let mut b: f64 = reciprocal_iter(root2, 20);
    let mut t: f64 = 0.25;
    let mut p: f64 = 1.0;

    // The arithmetic mean is always one step ahead of the other state.
    let mut an = 0.5 * (a + b);
    for _ in 0..n {
        let bn = sqrt_iter(a * b, NEWTON_ITERS);
        let tn = t - p * ((a - an) * (a - an));
        let pn = 2.0 * p;
        a = an;
        b = bn;
        t = tn;
        p = pn;
        an = 0.5 * (a + b);
        if an == a {
            break;
        }
    }
    (an * an) * reciprocal_iter(t, NEWTON_ITERS)
}

/// The cached value of [`calc_pi`] at the default depth. The constant is
/// computed once per process and is immutable afterwards.
pub fn pi() -> f64 {
    static PI: LazyLock<f64> = LazyLock::new(|| calc_pi(PI_ITERS));
    *PI
}

#[test]
fn test_pi() {
    // 15 significant digits of the reference value.
    assert!((calc_pi(PI_ITERS) - core::f64::consts::PI).abs() < 5e-15);
    assert!((calc_pi(PI_ITERS) - 3.14159265358979).abs() < 1e-14);
}

#[test]
fn test_pi_deterministic() {
    // Identical depth gives identical bits, and the cached constant is the
    // same bits as a fresh computation.
    assert_eq!(calc_pi(PI_ITERS).to_bits(), calc_pi(PI_ITERS).to_bits());
    assert_eq!(pi().to_bits(), calc_pi(PI_ITERS).to_bits());
}

#[test]
fn test_pi_shallow() {
    // Two rounds of AGM are already good to a few parts in a hundred million.
    assert!((calc_pi(2) - core::f64::consts::PI).abs() < 1e-7);
}
