//! Entities Layer: Rationals
//!
//! Canonical fractions over `entities_integer::Integer<N>`. Only
//! construction, canonicalization and comparison are provided; arithmetic
//! on rationals is out of scope for this crate.
//!
//! ## Modules
//!
//! - [`rational`]: the `Rational<N>` type, construction and text conversion
//! - [`cmp`]: ordering among rationals, integers and machine integers
//! - [`error`]: error type

pub mod cmp;
pub mod error;
pub mod rational;

pub use error::{Error, Result};
pub use rational::Rational;
