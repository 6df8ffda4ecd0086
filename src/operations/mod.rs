//! Contains the implementations of the numerical methods: Newton-Raphson
//! solvers, the Gauss-Legendre constant, the bounded series evaluators and
//! the full-domain trigonometric functions.

pub(crate) mod constants;
pub(crate) mod recip;
pub(crate) mod series;
pub(crate) mod trig;
