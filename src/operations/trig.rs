//! This module contains the full-domain trigonometric functions. Arguments
//! are radians; the range-reduction constants are halves and doubles of the
//! crate's own [`pi`] estimate, so no platform constant enters the cascade.
//!
//! Each function classifies the argument into its angular range and rewrites
//! it step by step into the window where the bounded series converge
//! fastest (at most an eighth of a turn). The steps are ordered; reordering
//! them changes the result bits at the boundary angles.

use crate::operations::constants::pi;
use crate::operations::series::{cos_series, sin_series, tan_series};

/// Returns the absolute value. Thin pass-through, present so callers can
/// stay on this crate's surface for every elementwise operation they apply
/// to the outputs.
pub fn abs(x: f64) -> f64 {
    x.abs()
}

/// Elementwise [`abs`].
pub fn abs_vec(xs: &[f64]) -> Vec<f64> {
    xs.iter().map(|&x| x.abs()).collect()
}

/// Computes the sine of the number (in radians).
///
/// The reduction cascade, in order: angles below -pi/2 reflect about -pi/2;
/// angles above 2*pi wrap into one turn; the upper half-turn folds onto the
/// lower one with a sign flip; the second quadrant reflects onto the first;
/// and the upper half of the first quadrant is evaluated through the
/// complementary cosine series, so the series argument never exceeds pi/4.
pub fn sin(a: f64) -> f64 {
    let one_eighty = pi();
    let three_sixty = 2. * one_eighty;
    let ninety = 0.5 * one_eighty;

    let mut x = a;
    let mut fs = 1.0;
    // Anything < -90 reflect to > -90.
    if x < -ninety {
        x = -one_eighty - x;
    }
    // Anything > 360 shift to range 0..360.
    if x > three_sixty {
        let n = (x / three_sixty).floor();
        x -= n * three_sixty;
    }
    // Anything in range 180..360 shift to 0..180.
    if x >= one_eighty {
        x -= one_eighty;
        fs = -1.0;
    }
    // Anything in range 90..180 reflect to 90..0.
    if x > ninety {
        x = one_eighty - x;
    }
    // Use cos(90-x) for 45..90.
    let r = if x >= 0.5 * ninety {
        cos_series(ninety - x)
    } else {
        sin_series(x)
    };
    r * fs
}

/// Computes the cosine of the number (in radians).
///
/// Same cascade as [`sin`], except the first step uses the even symmetry
/// `cos(-x) = cos(x)` and the second-quadrant reflection flips the sign a
/// second time.
pub fn cos(a: f64) -> f64 {
    let one_eighty = pi();
    let three_sixty = 2. * one_eighty;
    let ninety = 0.5 * one_eighty;

    let mut x = a;
    let mut fs = 1.0;
    // Anything < 0 reflect to > 0.
    if x < 0.0 {
        x = -x;
    }
    // Anything > 360 shift to range 0..360.
    if x > three_sixty {
        let n = (x / three_sixty).floor();
        x -= n * three_sixty;
    }
    // Anything in range 180..360 shift to 0..180.
    if x >= one_eighty {
        x -= one_eighty;
        fs = -1.0;
    }
    // Anything in range 90..180 reflect to 90..0.
    if x > ninety {
        x = one_eighty - x;
        fs = -fs;
    }
    // Use sin(90-x) for 45..90.
    let r = if x >= 0.5 * ninety {
        sin_series(ninety - x)
    } else {
        cos_series(x)
    };
    r * fs
}

/// Computes the tangent of the number (in radians).
///
/// The angle is wrapped to a half-turn (the tangent has period pi), then
/// halved up to twice so the bounded series only ever sees the window below
/// pi/8, and the result is rebuilt through the double-angle identity
/// `tan(2t) = 2*tan(t) / (1 - tan(t)^2)`. Before the second doubling the
/// inner tangent is clamped to 1 and a vanishing denominator is flagged;
/// flagged positions come out as infinity instead of a division by zero.
/// Odd multiples of pi/2 therefore return a signed infinity, not an error.
pub fn tan(x: f64) -> f64 {
    let one_eighty = pi();
    let ninety = 0.5 * one_eighty;
    let quarter = 0.25 * one_eighty;
    let eighth = 0.125 * one_eighty;

    let s = if x < 0.0 { -1.0 } else { 1.0 };
    let mut a = x.abs();
    // Anything > 90 wrap to -90..90; a no-op on the window the halving
    // cascade handles by itself.
    if a > ninety {
        let n = ((a + ninety) / one_eighty).floor();
        a -= n * one_eighty;
    }
    let s = if a < 0.0 {
        a = -a;
        -s
    } else {
        s
    };
    // Reduce range 45..90 to 22.5..45.
    let j4 = a >= quarter;
    if j4 {
        a *= 0.5;
    }
    // Reduce range 22.5..45 to 11.25..22.5.
    let j2 = a >= eighth;
    if j2 {
        a *= 0.5;
    }
    let mut t = tan_series(a);
    if j2 {
        let d = 1. / (1. - t * t);
        t = 2. * t * d;
    }
    // Cap the inner tangent before the second doubling; past the cap the
    // denominator below is treated as an asymptote.
    t = t.min(1.0);
    let d = 1. - t * t;
    let jinf = d == 0.0;
    let d = 1. / d.max(1.0e-30);
    if j4 {
        t = 2. * t * d;
    }
    if jinf {
        t = f64::INFINITY;
    }
    t * s
}

/// Elementwise [`sin`]. Every element goes through exactly the reduction
/// steps its own range requires, in cascade order.
pub fn sin_vec(xs: &[f64]) -> Vec<f64> {
    xs.iter().map(|&x| sin(x)).collect()
}

/// Elementwise [`cos`].
pub fn cos_vec(xs: &[f64]) -> Vec<f64> {
    xs.iter().map(|&x| cos(x)).collect()
}

/// Elementwise [`tan`].
pub fn tan_vec(xs: &[f64]) -> Vec<f64> {
    xs.iter().map(|&x| tan(x)).collect()
}

#[cfg(test)]
fn deg(d: f64) -> f64 {
    d * pi() / 180.0
}

#[test]
fn test_sin_known_values() {
    let xs = [0.0, 30.0, 45.0, 90.0, 180.0, 270.0];
    let expected = [0.0, 0.5, 0.70710678, 1.0, 0.0, -1.0];
    let got = sin_vec(&xs.map(deg));
    for (g, e) in got.iter().zip(expected) {
        assert!((g - e).abs() < 1e-8, "sin gave {} wanted {}", g, e);
    }
}

#[test]
fn test_cos_known_values() {
    let xs = [0.0, 60.0, 90.0, 180.0, 270.0, 360.0];
    let expected = [1.0, 0.5, 0.0, -1.0, 0.0, 1.0];
    let got = cos_vec(&xs.map(deg));
    for (g, e) in got.iter().zip(expected) {
        assert!((g - e).abs() < 1e-9, "cos gave {} wanted {}", g, e);
    }
}

#[test]
fn test_against_reference() {
    // Dense sweep of several turns against the std reference.
    for i in -7200..=7200 {
        let x = deg(i as f64 / 10.0);
        assert!((sin(x) - x.sin()).abs() < 1e-9, "sin({})", x);
        assert!((cos(x) - x.cos()).abs() < 1e-9, "cos({})", x);
    }
}

#[test]
fn test_periodicity() {
    let turn = 2. * pi();
    for i in -720..=720 {
        let x = deg(i as f64);
        assert!((sin(x) - sin(x + turn)).abs() < 1e-10);
        assert!((cos(x) - cos(x + turn)).abs() < 1e-10);
    }
}

#[test]
fn test_symmetry() {
    // The cosine negates its argument first, so the even symmetry is exact
    // to the bit. The sine takes different reduction paths for x and -x once
    // the complementary-angle swap kicks in at 45 degrees, so the odd
    // symmetry is exact below the swap and tight above it.
    for i in 0..=3600 {
        let x = deg(i as f64 / 10.0);
        assert_eq!(cos(-x).to_bits(), cos(x).to_bits());
        assert!((sin(-x) + sin(x)).abs() < 1e-12);
    }
    for i in 0..450 {
        let x = deg(i as f64 / 10.0);
        assert_eq!(sin(-x).to_bits(), (-sin(x)).to_bits());
    }
}

#[test]
fn test_pythagorean_identity() {
    for i in -3600..=3600 {
        let x = deg(i as f64 / 5.0);
        let (s, c) = (sin(x), cos(x));
        assert!((s * s + c * c - 1.0).abs() < 1e-10, "at {}", x);
    }
}

#[test]
fn test_tan_known_values() {
    assert!((tan(deg(45.0)) - 1.0).abs() < 1e-9);
    assert!(tan(deg(0.0)) == 0.0);
    assert!((tan(deg(30.0)) - 1. / 3f64.sqrt()).abs() < 1e-9);
    assert!((tan(deg(-45.0)) + 1.0).abs() < 1e-9);
}

#[test]
fn test_tan_matches_sin_over_cos() {
    // Stay away from the cosine zeros.
    for i in -880..=880 {
        let x = deg(i as f64 / 10.0);
        if cos(x).abs() < 1e-3 {
            continue;
        }
        let q = sin(x) / cos(x);
        assert!((tan(x) - q).abs() < 1e-6 * (1.0 + q.abs()), "tan({})", x);
    }
}

#[test]
fn test_tan_asymptote() {
    assert_eq!(tan(deg(90.0)), f64::INFINITY);
    assert_eq!(tan(deg(-90.0)), f64::NEG_INFINITY);
    assert_eq!(tan(deg(270.0)), f64::NEG_INFINITY);
    assert_eq!(tan(deg(-270.0)), f64::INFINITY);
}

#[test]
fn test_tan_periodicity() {
    // The wrap gives the tangent its half-turn period over the full domain.
    for i in -1760..=1760 {
        let x = deg(i as f64 / 10.0);
        if cos(x).abs() < 1e-3 {
            continue;
        }
        let q = tan(x);
        assert!((tan(x + 2. * pi()) - q).abs() < 1e-6 * (1.0 + q.abs()));
    }
}

#[test]
fn test_vectorized_matches_scalar() {
    let xs: Vec<f64> = (-100..100).map(|i| deg(i as f64 * 3.7)).collect();
    let sv = sin_vec(&xs);
    let cv = cos_vec(&xs);
    let tv = tan_vec(&xs);
    for (i, &x) in xs.iter().enumerate() {
        assert_eq!(sv[i].to_bits(), sin(x).to_bits());
        assert_eq!(cv[i].to_bits(), cos(x).to_bits());
        assert_eq!(tv[i].to_bits(), tan(x).to_bits());
    }
}
