//! Rational Numbers
//!
//! `Rational<N>` is a fraction of two `Integer<N>` kept in canonical form:
//!
//! - the denominator is strictly positive;
//! - numerator and denominator are coprime;
//! - zero is `0/1`.
//!
//! Every constructor goes through the same canonicalization, so two
//! rationals are equal exactly when their numerators and denominators are.
//!
//! # Examples
//!
//! ```rust
//! use entities_rational::Rational;
//!
//! let r = Rational::<1>::from_ints(6, -4).unwrap();
//! assert_eq!(r.to_string(), "-3/2");
//! assert_eq!(r, Rational::from_ints(-3, 2).unwrap());
//! ```

use crate::error::{Error, Result};
use entities_integer::{divexact, gcd, Integer, MachineInt};
use log::trace;
use malachite::base::num::basic::traits::Zero;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Debug)]
pub struct Rational<const N: usize> {
    num: Integer<N>,
    den: Integer<N>,
}

impl<const N: usize> Rational<N> {
    /// Zero, as `0/1`.
    pub fn zero() -> Self {
        Self {
            num: Integer::new(),
            den: Integer::from(1u8),
        }
    }

    /// `num / den` in canonical form.
    ///
    /// # Errors
    ///
    /// [`Error::ZeroDenominator`] if `den` is zero.
    pub fn new(num: Integer<N>, den: Integer<N>) -> Result<Self> {
        if den.is_zero() {
            return Err(Error::ZeroDenominator);
        }
        if num.is_zero() {
            return Ok(Self::zero());
        }
        let mut g = Integer::new();
        gcd(&mut g, &num, &den);
        let (mut num, mut den) = if g == 1 {
            (num, den)
        } else {
            trace!("reducing {}/{} by {}", num, den, g);
            let mut n = Integer::new();
            let mut d = Integer::new();
            divexact(&mut n, &num, &g)?;
            divexact(&mut d, &den, &g)?;
            (n, d)
        };
        if den.is_negative() {
            num.negate();
            den.negate();
        }
        Ok(Self { num, den })
    }

    /// `num / den` from machine integers.
    pub fn from_ints<T: MachineInt, U: MachineInt>(num: T, den: U) -> Result<Self>
    where
        Integer<N>: From<T> + From<U>,
    {
        Self::new(Integer::from(num), Integer::from(den))
    }

    pub fn num(&self) -> &Integer<N> {
        &self.num
    }

    pub fn den(&self) -> &Integer<N> {
        &self.den
    }

    /// Numerator and denominator.
    pub fn into_parts(self) -> (Integer<N>, Integer<N>) {
        (self.num, self.den)
    }

    pub fn is_zero(&self) -> bool {
        self.num.is_zero()
    }

    /// Whether the denominator is one.
    pub fn is_integer(&self) -> bool {
        self.den == 1
    }

    /// -1, 0 or 1 according to the sign.
    pub fn sgn(&self) -> i32 {
        self.num.sgn()
    }

    /// Absolute value.
    pub fn abs(&self) -> Self {
        Self {
            num: self.num.abs(),
            den: self.den.clone(),
        }
    }

    /// Exact copy as a `malachite::Rational`.
    pub fn to_reference(&self) -> malachite::Rational {
        malachite::Rational::from_integers(self.num.to_reference(), self.den.to_reference())
    }
}

impl<const N: usize> Default for Rational<N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<const N: usize> From<Integer<N>> for Rational<N> {
    fn from(num: Integer<N>) -> Self {
        Self {
            num,
            den: Integer::from(1u8),
        }
    }
}

macro_rules! rational_from_machine {
    ($($t:ty),*) => {$(
        impl<const N: usize> From<$t> for Rational<N> {
            fn from(value: $t) -> Self {
                Self::from(Integer::<N>::from(value))
            }
        }
    )*};
}

rational_from_machine!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl<const N: usize> From<&malachite::Rational> for Rational<N> {
    fn from(value: &malachite::Rational) -> Self {
        // Already canonical.
        let negative = *value < malachite::Rational::ZERO;
        Self {
            num: Integer::from_limbs(negative, &value.numerator_ref().to_limbs_asc()),
            den: Integer::from_limbs(false, &value.denominator_ref().to_limbs_asc()),
        }
    }
}

impl<const N: usize> std::ops::Neg for Rational<N> {
    type Output = Rational<N>;

    fn neg(mut self) -> Rational<N> {
        self.num.negate();
        self
    }
}

impl<const N: usize> std::ops::Neg for &Rational<N> {
    type Output = Rational<N>;

    fn neg(self) -> Rational<N> {
        -self.clone()
    }
}

impl<const N: usize> fmt::Display for Rational<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}

impl<const N: usize> FromStr for Rational<N> {
    type Err = Error;

    /// Parses `num` or `num/den` in base 10.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = |_| Error::InvalidString(s.to_string());
        match s.split_once('/') {
            Some((num, den)) => Self::new(num.parse().map_err(invalid)?, den.parse().map_err(invalid)?),
            None => Ok(Self::from(s.parse::<Integer<N>>().map_err(invalid)?)),
        }
    }
}
