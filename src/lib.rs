//! # detfloat
//!
//! Elementary mathematical functions (reciprocal, square root, pi, sine,
//! cosine, tangent) computed from first principles with iterative and
//! series-based numerical methods, never through a platform math library.
//!
//! Every function is pure and produces bit-identical output for identical
//! inputs and iteration counts, on every platform. This makes the library
//! suitable for studying the sensitivity of derived quantities to low-order
//! mantissa perturbations: a caller can truncate the outputs and compare
//! digests across runs, knowing that any difference comes from the
//! perturbation and not from the math itself.
//!
//! Each function is available in a scalar form (`f64 -> f64`) and an
//! elementwise form over slices (`_vec` suffix). The elementwise form applies
//! the scalar kernel per element in index order, so the two forms agree
//! bit-for-bit.

mod operations;
mod utils;
mod verify;

pub use self::operations::constants::{calc_pi, pi, PI_ITERS};
pub use self::operations::recip::{
    reciprocal, reciprocal_iter, reciprocal_vec, sqrt, sqrt_iter, sqrt_vec,
    NEWTON_ITERS,
};
pub use self::operations::series::{
    cos_series, cos_series_vec, sin_series, sin_series_vec, tan_series,
    tan_series_vec,
};
pub use self::operations::trig::{
    abs, abs_vec, cos, cos_vec, sin, sin_vec, tan, tan_vec,
};
pub use self::utils::{frexp, ldexp};
pub use self::verify::{
    bit_digest, compare, generate_numbers, logistic_map, Comparison,
    Mismatch, LOGISTIC_R,
};
