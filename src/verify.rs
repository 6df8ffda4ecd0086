//! Bit-level reproducibility helpers: a deterministic input generator and a
//! digest-based comparison of result vectors.
//!
//! Reproducibility is the point of this crate, so the comparison operates on
//! the exact bit image of the values. Two runs agree only when every output
//! is the same double, bit for bit; the digest makes that cheap to record
//! and to diff across machines.

use core::fmt;

use sha2::{Digest, Sha256};

/// Default parameter of the logistic map used by [`generate_numbers`].
/// Slightly below 4 so the orbit stays chaotic without escaping (0, 1).
pub const LOGISTIC_R: f64 = 4.0 - 1.0 / (1024.0 * 1024.0 * 1024.0 * 1024.0);

/// One step of the logistic map `r * x * (1 - x)`.
pub fn logistic_map(x: f64, r: f64) -> f64 {
    r * x * (1. - x)
}

/// Generates a reproducible vector of `n` values between 0 and 1 by
/// iterating the logistic map from `x0`, after `n0` warm-up steps.
pub fn generate_numbers(n: usize, r: f64, mut x0: f64, n0: usize) -> Vec<f64> {
    for _ in 0..n0 {
        x0 = logistic_map(x0, r);
    }
    let mut x = vec![0.0; n];
    if n == 0 {
        return x;
    }
    x[0] = x0;
    for k in 1..n {
        x[k] = logistic_map(x[k - 1], r);
    }
    x
}

/// Lowercase-hex SHA-256 digest of the little-endian byte image of the
/// values. Bit-identical vectors, identical digest.
pub fn bit_digest(xs: &[f64]) -> String {
    let mut hasher = Sha256::new();
    for x in xs {
        hasher.update(x.to_le_bytes());
    }
    hex::encode(hasher.finalize())
}

/// A recorded mismatch between two vectors at one position.
#[derive(Debug, Clone, Copy)]
pub struct Mismatch {
    pub index: usize,
    pub expected: f64,
    pub actual: f64,
    pub error: f64,
    pub frac_error: f64,
}

/// The outcome of comparing two result vectors, elementwise and by digest.
#[derive(Debug, Clone)]
pub struct Comparison {
    /// Number of positions where the difference is nonzero.
    pub differences: usize,
    /// Total number of positions compared.
    pub len: usize,
    /// The first few mismatches, for reporting.
    pub first_mismatches: Vec<Mismatch>,
    /// Largest `|error / expected|` over all mismatches.
    pub largest_frac_error: f64,
    pub digest_x: String,
    pub digest_y: String,
}

impl Comparison {
    /// True when the vectors are numerically equal and carry the same bits.
    pub fn matches(&self) -> bool {
        self.differences == 0 && self.digest_x == self.digest_y
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.differences > 0 {
            writeln!(
                f,
                " X There were {} differences detected (out of {}) or {:3.4}% hits.",
                self.differences,
                self.len,
                (100. * self.differences as f64) / self.len as f64
            )?;
            for m in &self.first_mismatches {
                writeln!(
                    f,
                    "      x({i})={:23.15e} y({i})={:23.15e} error={:.5e} frac. err.={:.2e}",
                    m.expected,
                    m.actual,
                    m.error,
                    m.frac_error,
                    i = m.index,
                )?;
            }
            writeln!(
                f,
                "   Largest fractional error = {:.2e}",
                self.largest_frac_error
            )?;
        }
        writeln!(f, "   hash(x) = {}", self.digest_x)?;
        if self.digest_x != self.digest_y {
            writeln!(f, "   hash(y) = {}", self.digest_y)?;
            writeln!(f, " X Hashes do not match (i.e. bits differ).")?;
        }
        Ok(())
    }
}

/// Compares `y` against the reference `x`: counts elementwise differences,
/// records the first few, and digests both bit images.
pub fn compare(x: &[f64], y: &[f64]) -> Comparison {
    assert_eq!(x.len(), y.len(), "comparing vectors of different lengths");
    let mut differences = 0;
    let mut first_mismatches = Vec::new();
    let mut largest = 0.0f64;
    for (i, (&a, &b)) in x.iter().zip(y.iter()).enumerate() {
        let error = a - b;
        if error != 0.0 {
            differences += 1;
            let frac = error / a;
            if frac.abs() > largest {
                largest = frac.abs();
            }
            if first_mismatches.len() < 5 {
                first_mismatches.push(Mismatch {
                    index: i,
                    expected: a,
                    actual: b,
                    error,
                    frac_error: frac,
                });
            }
        }
    }
    Comparison {
        differences,
        len: x.len(),
        first_mismatches,
        largest_frac_error: largest,
        digest_x: bit_digest(x),
        digest_y: bit_digest(y),
    }
}

#[test]
fn test_generator_reproduces() {
    let a = generate_numbers(4096, LOGISTIC_R, 0.5, 0);
    let b = generate_numbers(4096, LOGISTIC_R, 0.5, 0);
    assert_eq!(bit_digest(&a), bit_digest(&b));
    // The orbit stays strictly inside (0, 1).
    assert!(a.iter().all(|&v| v > 0.0 && v < 1.0));
}

#[test]
fn test_generator_warmup() {
    // n0 warm-up steps shift the orbit: element k of the warmed sequence is
    // element k+n0 of the cold one.
    let cold = generate_numbers(128, LOGISTIC_R, 0.5, 0);
    let warm = generate_numbers(64, LOGISTIC_R, 0.5, 64);
    assert_eq!(warm[0].to_bits(), cold[64].to_bits());
    assert_eq!(warm[63].to_bits(), cold[127].to_bits());
}

#[test]
fn test_compare_matches_itself() {
    let x = generate_numbers(512, LOGISTIC_R, 0.5, 100);
    let c = compare(&x, &x);
    assert!(c.matches());
    assert_eq!(c.differences, 0);
    assert_eq!(c.digest_x, c.digest_y);
}

#[test]
fn test_compare_detects_one_flipped_bit() {
    let x = generate_numbers(512, LOGISTIC_R, 0.5, 100);
    let mut y = x.clone();
    y[200] = f64::from_bits(y[200].to_bits() ^ 1);
    let c = compare(&x, &y);
    assert!(!c.matches());
    assert_eq!(c.differences, 1);
    assert_eq!(c.first_mismatches[0].index, 200);
    assert_ne!(c.digest_x, c.digest_y);
    let text = format!("{}", c);
    assert!(text.contains("1 differences"));
}

#[test]
fn test_digest_is_stable() {
    // A fixed vector must digest to the same string on every run, and a
    // different vector must not collide with it.
    let d = bit_digest(&[0.0, 1.0, -1.0]);
    assert_eq!(d, bit_digest(&[0.0, 1.0, -1.0]));
    assert_eq!(d.len(), 64);
    assert_ne!(d, bit_digest(&[0.0, 1.0, 1.0]));
}
