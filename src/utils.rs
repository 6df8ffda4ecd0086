//! This file contains float decomposition helpers and test helpers.

const MANTISSA_MASK: u64 = 0x000F_FFFF_FFFF_FFFF;
const SIGN_MASK: u64 = 0x8000_0000_0000_0000;
/// Bit pattern of the exponent field for a value in [0.5, 1).
const HALF_EXP: u64 = 0x3FE0_0000_0000_0000;

/// Splits `x` into a mantissa `m` in [0.5, 1) and an exponent `e` such that
/// `x = m * 2^e`. Zero returns `(x, 0)`; so do NaN and the infinities.
pub fn frexp(x: f64) -> (f64, i32) {
    if x == 0.0 || !x.is_finite() {
        return (x, 0);
    }
    let mut bits = x.to_bits();
    let mut e = ((bits >> 52) & 0x7FF) as i32;
    if e == 0 {
        // Subnormal. Scale into the normal range first.
        bits = (x * f64::from_bits(1086u64 << 52)).to_bits(); // * 2^63
        e = ((bits >> 52) & 0x7FF) as i32 - 63;
    }
    let m = f64::from_bits((bits & (MANTISSA_MASK | SIGN_MASK)) | HALF_EXP);
    (m, e - 1022)
}

/// Returns `x * 2^e`, exactly. The multiplication is split into steps so
/// that results in the subnormal range are reached without overflowing the
/// intermediate scale factor.
pub fn ldexp(mut x: f64, mut e: i32) -> f64 {
    while e > 1023 {
        x *= pow2(1023);
        e -= 1023;
    }
    while e < -1022 {
        x *= pow2(-1022);
        e += 1022;
    }
    x * pow2(e)
}

/// 2^e as a bit pattern, for e in the normal exponent range.
fn pow2(e: i32) -> f64 {
    f64::from_bits(((e + 1023) as u64) << 52)
}

#[test]
fn test_frexp_ldexp_roundtrip() {
    let values = [
        1.0,
        -1.0,
        0.5,
        2.0,
        355. / 113.,
        1e-300,
        1e300,
        f64::MAX,
        f64::MIN_POSITIVE,
        f64::MIN_POSITIVE / 1024., // subnormal
        -123.456,
    ];
    for v in values {
        let (m, e) = frexp(v);
        assert!(m.abs() >= 0.5 && m.abs() < 1.0, "mantissa for {}", v);
        assert_eq!(ldexp(m, e).to_bits(), v.to_bits());
    }
}

#[test]
fn test_frexp_zero_and_nonfinite() {
    assert_eq!(frexp(0.0), (0.0, 0));
    let (m, e) = frexp(-0.0);
    assert_eq!((m.to_bits(), e), ((-0.0f64).to_bits(), 0));
    assert_eq!(frexp(f64::INFINITY), (f64::INFINITY, 0));
    assert!(frexp(f64::NAN).0.is_nan());
}

#[test]
fn test_ldexp_extremes() {
    assert_eq!(ldexp(1.0, -1074), f64::from_bits(1));
    assert_eq!(ldexp(1.0, 1023), f64::from_bits(2046u64 << 52));
    assert_eq!(ldexp(1.5, 4), 24.0);
}

#[cfg(test)]
/// Returns a list of interesting values that various tests use to catch edge
/// cases.
pub fn get_special_test_values() -> [f64; 16] {
    [
        -f64::NAN,
        f64::NAN,
        f64::INFINITY,
        f64::NEG_INFINITY,
        f64::EPSILON,
        -f64::EPSILON,
        f64::MIN,
        f64::MAX,
        core::f64::consts::PI,
        core::f64::consts::SQRT_2,
        0.0,
        -0.0,
        10.,
        -10.,
        -0.00001,
        355. / 113.,
    ]
}
