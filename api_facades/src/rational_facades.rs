//! Rational Facades

pub use entities_rational::{Error as RationalError, Rational};

pub type Rational1 = Rational<1>;
pub type Rational2 = Rational<2>;
