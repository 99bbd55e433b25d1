//! Entities Layer: Quadruple Precision
//!
//! `Real128` holds an IEEE 754 binary128 value. It is produced by correctly
//! rounded conversions from machine numbers, `Integer<N>`, `Rational<N>` and
//! decimal text, and compares exactly against all of them. `Complex128`
//! pairs two such values.
//!
//! ## Modules
//!
//! - [`real128`]: the bit-pattern type, classification and hex output
//! - `round`: round-to-nearest-even from exact magnitudes and quotients
//! - [`convert`]: `From` conversions and parsing
//! - [`cmp`]: IEEE and total-order comparisons
//! - [`complex128`]: the complex pair
//! - [`error`]: error type

pub mod cmp;
pub mod complex128;
pub mod convert;
pub mod error;
pub mod real128;
mod round;

pub use cmp::{real128_equal_to, real128_less_than};
pub use complex128::Complex128;
pub use error::{Error, Result};
pub use real128::{real128_inf, real128_nan, Real128};
