//! Quadruple-precision complex values.
//!
//! A pair of [`Real128`] parts. Like `Real128`, the type is a carrier for
//! conversions and comparisons; it has no arithmetic.

use crate::real128::Real128;
use entities_integer::Integer;
use entities_rational::Rational;
use std::fmt;

/// A complex number with binary128 real and imaginary parts.
#[derive(Clone, Copy, Debug, Default)]
pub struct Complex128 {
    re: Real128,
    im: Real128,
}

impl Complex128 {
    pub fn new(re: impl Into<Real128>, im: impl Into<Real128>) -> Self {
        Self {
            re: re.into(),
            im: im.into(),
        }
    }

    pub const fn from_parts(re: Real128, im: Real128) -> Self {
        Self { re, im }
    }

    /// Real part.
    pub const fn creal(self) -> Real128 {
        self.re
    }

    /// Imaginary part.
    pub const fn cimag(self) -> Real128 {
        self.im
    }

    /// Whether the imaginary part is zero of either sign.
    pub const fn is_real(self) -> bool {
        self.im.is_zero()
    }
}

impl From<Real128> for Complex128 {
    fn from(re: Real128) -> Self {
        Self::from_parts(re, Real128::ZERO)
    }
}

impl<const N: usize> From<&Integer<N>> for Complex128 {
    fn from(n: &Integer<N>) -> Self {
        Self::from(Real128::from(n))
    }
}

impl<const N: usize> From<&Rational<N>> for Complex128 {
    fn from(r: &Rational<N>) -> Self {
        Self::from(Real128::from(r))
    }
}

/// Formats as `(re,im)`, each part in hexadecimal floating notation.
impl fmt::Display for Complex128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.re, self.im)
    }
}

impl PartialEq for Complex128 {
    fn eq(&self, other: &Self) -> bool {
        self.re == other.re && self.im == other.im
    }
}

impl PartialEq<Real128> for Complex128 {
    fn eq(&self, other: &Real128) -> bool {
        self.is_real() && self.re == *other
    }
}

impl PartialEq<Complex128> for Real128 {
    fn eq(&self, other: &Complex128) -> bool {
        other == self
    }
}

macro_rules! complex_machine_number {
    ($($t:ty),*) => {$(
        impl From<$t> for Complex128 {
            fn from(value: $t) -> Self {
                Self::from(Real128::from(value))
            }
        }

        impl PartialEq<$t> for Complex128 {
            fn eq(&self, other: &$t) -> bool {
                self.is_real() && self.re == *other
            }
        }

        impl PartialEq<Complex128> for $t {
            fn eq(&self, other: &Complex128) -> bool {
                other == self
            }
        }
    )*};
}

complex_machine_number!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);
