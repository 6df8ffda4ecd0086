//! This module contains the bounded power-series evaluators and their fixed
//! coefficient tables. Each evaluator is only accurate on a small window
//! around zero; the full-domain functions in `trig` reduce their arguments
//! into these windows first.

use std::sync::LazyLock;

/// Taylor term ratios for the sine: entry k is `1/((2k)(2k+1))`, written out
/// as decimal literals so the table is the same bits on every platform.
const SIN_COEFF: [f64; 20] = [
    1.,
    0.16666666666666666,
    0.05,
    0.023809523809523808,
    0.013888888888888888,
    0.00909090909090909,
    0.00641025641025641,
    0.004761904761904762,
    0.003676470588235294,
    0.0029239766081871343,
    0.002380952380952381,
    0.001976284584980237,
    0.0016666666666666668,
    0.0014245014245014246,
    0.0012315270935960591,
    0.001075268817204301,
    0.000946969696969697,
    0.0008403361344537816,
    0.0007507507507507507,
    0.0006747638326585695,
];

/// Taylor term ratios for the cosine: entry i is `1/((2i+1)(2i+2))`.
const COS_COEFF: [f64; 20] = [
    0.5,
    0.08333333333333333,
    0.03333333333333333,
    0.017857142857142856,
    0.011111111111111111,
    0.007575757575757576,
    0.005494505494505495,
    0.004166666666666667,
    0.0032679738562091504,
    0.002631578947368421,
    0.0021645021645021645,
    0.0018115942028985507,
    0.0015384615384615385,
    0.0013227513227513227,
    0.0011494252873563218,
    0.0010080645161290322,
    0.00089126559714795,
    0.0007936507936507937,
    0.0007112375533428165,
    0.000641025641025641,
];

/// Numerators of the tangent series coefficients, https://oeis.org/A002430.
/// The largest entries exceed 2^63, so the table is kept in floating point;
/// each literal rounds to the nearest double exactly once, at compile time.
const TAN_NUM: [f64; 17] = [
    1.,
    1.,
    2.,
    17.,
    62.,
    1382.,
    21844.,
    929569.,
    6404582.,
    443861162.,
    18888466084.,
    113927491862.,
    58870668456604.,
    8374643517010684.,
    689005380505609448.,
    129848163681107301953.,
    1736640792209901647222.,
];

/// Denominators of the tangent series coefficients, https://oeis.org/A036279.
const TAN_DEN: [f64; 17] = [
    1.,
    3.,
    15.,
    315.,
    2835.,
    155925.,
    6081075.,
    638512875.,
    10854718875.,
    1856156927625.,
    194896477400625.,
    2900518163668125.,
    3698160658676859375.,
    1298054391195577640625.,
    263505041412702261046875.,
    122529844256906551386796875.,
    4043484860477916195764296875.,
];

/// The tangent ratios `TAN_NUM[k] / TAN_DEN[k]`, divided out once per
/// process.
static TAN_COEFF: LazyLock<[f64; 17]> = LazyLock::new(|| {
    let mut c = [0.0; 17];
    for (k, v) in c.iter_mut().enumerate() {
        *v = TAN_NUM[k] / TAN_DEN[k];
    }
    c
});

/// Returns sin(x) for x in the range -pi/2 .. pi/2.
///
/// Terms follow the recurrence `term[k] = -term[k-1] * x^2 * C[k]`, which
/// folds the alternating sign into the table lookup. The sum runs from the
/// highest-order term down to the first: the small terms are accumulated
/// before the large ones, which keeps the cancellation error down. The order
/// is part of the contract, not a style choice.
pub fn sin_series(x: f64) -> f64 {
    let x2 = x * x;
    let mut term = [1.0f64; 20];
    for k in 1..term.len() {
        term[k] = -term[k - 1] * (x2 * SIN_COEFF[k]);
    }
    let mut r = 0.0;
    for k in (0..term.len()).rev() {
        r += term[k];
    }
    r * x
}

/// Returns cos(x) for x in the range -pi/2 .. pi/2.
///
/// The leading term 1 dominates every other term on this window, so the sum
/// runs in ascending order; there is no cancellation worth reordering for.
pub fn cos_series(x: f64) -> f64 {
    let x2 = x * x;
    let mut xp = 1.0;
    let mut f = 1.0;
    let mut s = -1.0;
    let mut r = 1.0;
    for i in 1..COS_COEFF.len() {
        xp *= x2;
        f *= COS_COEFF[i - 1];
        r += xp * f * s;
        s = -s;
    }
    r
}

/// Returns tan(x) for x in the range -pi/6 .. pi/6.
///
/// Same highest-order-first summation as [`sin_series`].
pub fn tan_series(x: f64) -> f64 {
    let c = &*TAN_COEFF;
    let x2 = x * x;
    let mut xx = 1.0;
    let mut term = [1.0f64; 17];
    for k in 1..term.len() {
        xx *= x2;
        term[k] = xx * c[k];
    }
    let mut r = 0.0;
    for k in (0..term.len()).rev() {
        r += term[k];
    }
    r * x
}

/// Elementwise [`sin_series`].
pub fn sin_series_vec(xs: &[f64]) -> Vec<f64> {
    xs.iter().map(|&x| sin_series(x)).collect()
}

/// Elementwise [`cos_series`].
pub fn cos_series_vec(xs: &[f64]) -> Vec<f64> {
    xs.iter().map(|&x| cos_series(x)).collect()
}

/// Elementwise [`tan_series`].
pub fn tan_series_vec(xs: &[f64]) -> Vec<f64> {
    xs.iter().map(|&x| tan_series(x)).collect()
}

#[test]
fn test_coeff_tables() {
    // The literals are the divided-out ratios.
    for k in 1..20 {
        let kk = (2 * k + 1) as f64;
        assert!((SIN_COEFF[k] - 1.0 / ((kk - 1.0) * kk)).abs() < 1e-18);
        let ck = (2 * k) as f64;
        assert!((COS_COEFF[k - 1] - 1.0 / ((ck - 1.0) * ck)).abs() < 1e-16);
    }
    assert_eq!(TAN_COEFF[0], 1.0);
    assert!((TAN_COEFF[1] - 1.0 / 3.0).abs() < 1e-18);
    assert!((TAN_COEFF[2] - 2.0 / 15.0).abs() < 1e-18);
}

#[test]
fn test_sin_series_against_reference() {
    // Dense sample of the valid window, std sin as the trusted reference.
    let half_pi = core::f64::consts::FRAC_PI_2;
    for i in -1000..=1000 {
        let x = (i as f64 / 1000.0) * half_pi;
        assert!(
            (sin_series(x) - x.sin()).abs() < 1e-12,
            "sin_series({}) = {}",
            x,
            sin_series(x)
        );
    }
}

#[test]
fn test_cos_series_against_reference() {
    let half_pi = core::f64::consts::FRAC_PI_2;
    for i in -1000..=1000 {
        let x = (i as f64 / 1000.0) * half_pi;
        assert!(
            (cos_series(x) - x.cos()).abs() < 1e-12,
            "cos_series({}) = {}",
            x,
            cos_series(x)
        );
    }
}

#[test]
fn test_tan_series_against_reference() {
    // Narrow window only; the full-domain tan handles everything else.
    let sixth_pi = core::f64::consts::FRAC_PI_6;
    for i in -1000..=1000 {
        let x = (i as f64 / 1000.0) * sixth_pi;
        assert!(
            (tan_series(x) - x.tan()).abs() < 1e-10,
            "tan_series({}) = {}",
            x,
            tan_series(x)
        );
    }
}

#[test]
fn test_series_odd_even() {
    for i in 0..100 {
        let x = i as f64 / 100.0;
        assert_eq!(sin_series(-x).to_bits(), (-sin_series(x)).to_bits());
        assert_eq!(cos_series(-x).to_bits(), cos_series(x).to_bits());
        assert_eq!(tan_series(-x).to_bits(), (-tan_series(x)).to_bits());
    }
}
