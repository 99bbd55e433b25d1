//! Real128 comparisons.
//!
//! The operators follow IEEE 754: NaN is unordered and unequal to itself,
//! and `-0 == +0`. Comparisons against integers and rationals are exact;
//! the other operand is never rounded to binary128 first.
//!
//! [`real128_equal_to`] and [`real128_less_than`] give a total order instead,
//! for sorting and hashing containers: every NaN is equal to every other NaN
//! and greater than any non-NaN value.

use crate::real128::{Real128, SIGN_MASK};
use entities_integer::{u128_limbs, Integer, MachineInt};
use entities_limbs::{mul, normalized_len, scratch_zeroed, shl_bits, Limb};
use entities_rational::Rational;
use std::cmp::Ordering;

/// Sign-magnitude bits mapped onto a two's complement key, so that integer
/// order matches numeric order for non-NaN values and both zeros map to 0.
const fn ordered_key(x: Real128) -> i128 {
    let magnitude = (x.to_bits() & !SIGN_MASK) as i128;
    if x.signbit() {
        -magnitude
    } else {
        magnitude
    }
}

/// Total-order equality: IEEE equality, except that NaNs are all equal.
pub const fn real128_equal_to(a: Real128, b: Real128) -> bool {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => true,
        (false, false) => ordered_key(a) == ordered_key(b),
        _ => false,
    }
}

/// Total-order less-than: IEEE order, with NaN above `+inf`.
pub const fn real128_less_than(a: Real128, b: Real128) -> bool {
    match (a.is_nan(), b.is_nan()) {
        (true, _) => false,
        (false, true) => true,
        (false, false) => ordered_key(a) < ordered_key(b),
    }
}

/// Exact comparison of `x` with `±num / den`, `den` positive. `None` when
/// `x` is NaN.
pub(crate) fn cmp_exact(x: Real128, negative: bool, num: &[Limb], den: &[Limb]) -> Option<Ordering> {
    if x.is_nan() {
        return None;
    }
    if x.is_inf() {
        return Some(if x.signbit() { Ordering::Less } else { Ordering::Greater });
    }
    let (x_negative, sig, exp) = x.decompose();
    let sign = |negative: bool, zero: bool| -> i32 {
        match (zero, negative) {
            (true, _) => 0,
            (false, true) => -1,
            (false, false) => 1,
        }
    };
    let x_sign = sign(x_negative, sig == 0);
    let y_sign = sign(negative, normalized_len(num) == 0);
    if x_sign != y_sign || x_sign == 0 {
        return Some(x_sign.cmp(&y_sign));
    }

    // |x| * den against |num|, with the power of two moved to one side.
    let (x_shift, num_shift) = if exp >= 0 { (exp as u64, 0) } else { (0, exp.unsigned_abs()) };
    let scaled = shl_bits(&u128_limbs(sig), x_shift);
    let mut lhs = scratch_zeroed(scaled.len() + den.len());
    mul(&mut lhs, &scaled, den);
    let rhs = shl_bits(num, num_shift);
    let magnitude = entities_limbs::cmp(&lhs, &rhs);
    Some(if x_sign < 0 { magnitude.reverse() } else { magnitude })
}

impl PartialEq for Real128 {
    fn eq(&self, other: &Self) -> bool {
        !self.is_nan() && !other.is_nan() && ordered_key(*self) == ordered_key(*other)
    }
}

impl PartialOrd for Real128 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.is_nan() || other.is_nan() {
            return None;
        }
        Some(ordered_key(*self).cmp(&ordered_key(*other)))
    }
}

impl<const N: usize> PartialEq<Integer<N>> for Real128 {
    fn eq(&self, other: &Integer<N>) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl<const N: usize> PartialOrd<Integer<N>> for Real128 {
    fn partial_cmp(&self, other: &Integer<N>) -> Option<Ordering> {
        cmp_exact(*self, other.is_negative(), other.limbs(), &[1])
    }
}

impl<const N: usize> PartialEq<Rational<N>> for Real128 {
    fn eq(&self, other: &Rational<N>) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl<const N: usize> PartialOrd<Rational<N>> for Real128 {
    fn partial_cmp(&self, other: &Rational<N>) -> Option<Ordering> {
        cmp_exact(*self, other.num().is_negative(), other.num().limbs(), other.den().limbs())
    }
}

impl<const N: usize> PartialEq<Real128> for Integer<N> {
    fn eq(&self, other: &Real128) -> bool {
        other == self
    }
}

impl<const N: usize> PartialOrd<Real128> for Integer<N> {
    fn partial_cmp(&self, other: &Real128) -> Option<Ordering> {
        other.partial_cmp(self).map(Ordering::reverse)
    }
}

impl<const N: usize> PartialEq<Real128> for Rational<N> {
    fn eq(&self, other: &Real128) -> bool {
        other == self
    }
}

impl<const N: usize> PartialOrd<Real128> for Rational<N> {
    fn partial_cmp(&self, other: &Real128) -> Option<Ordering> {
        other.partial_cmp(self).map(Ordering::reverse)
    }
}

macro_rules! cmp_reversed {
    ($t:ty) => {
        impl PartialEq<Real128> for $t {
            fn eq(&self, other: &Real128) -> bool {
                other == self
            }
        }

        impl PartialOrd<Real128> for $t {
            fn partial_cmp(&self, other: &Real128) -> Option<Ordering> {
                other.partial_cmp(self).map(Ordering::reverse)
            }
        }
    };
}

macro_rules! cmp_machine_int {
    ($($t:ty),*) => {$(
        impl PartialEq<$t> for Real128 {
            fn eq(&self, other: &$t) -> bool {
                self.partial_cmp(other) == Some(Ordering::Equal)
            }
        }

        impl PartialOrd<$t> for Real128 {
            fn partial_cmp(&self, other: &$t) -> Option<Ordering> {
                let (negative, magnitude) = other.sign_magnitude();
                cmp_exact(*self, negative, &u128_limbs(magnitude), &[1])
            }
        }

        cmp_reversed!($t);
    )*};
}

cmp_machine_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! cmp_float {
    ($($t:ty),*) => {$(
        // Every machine float is exactly representable.
        impl PartialEq<$t> for Real128 {
            fn eq(&self, other: &$t) -> bool {
                *self == Real128::from(*other)
            }
        }

        impl PartialOrd<$t> for Real128 {
            fn partial_cmp(&self, other: &$t) -> Option<Ordering> {
                self.partial_cmp(&Real128::from(*other))
            }
        }

        cmp_reversed!($t);
    )*};
}

cmp_float!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::real128::{real128_inf, real128_nan};

    #[test]
    fn test_ieee_semantics() {
        let nan = real128_nan();
        assert!(nan != nan);
        assert!(!(nan < nan));
        assert!(!(nan > Real128::ZERO));
        assert_eq!(nan.partial_cmp(&Real128::ZERO), None);
        assert!(Real128::ZERO == -Real128::ZERO);
        assert!(!(-Real128::ZERO < Real128::ZERO));
        assert!(-real128_inf() < Real128::from(-1));
        assert!(Real128::from(u128::MAX) < real128_inf());
        assert!(Real128::from(-2) < Real128::from(-1));
    }

    #[test]
    fn test_total_order() {
        let nan = real128_nan();
        assert!(real128_equal_to(nan, -nan));
        assert!(real128_equal_to(Real128::ZERO, -Real128::ZERO));
        assert!(!real128_less_than(-Real128::ZERO, Real128::ZERO));
        assert!(real128_less_than(real128_inf(), nan));
        assert!(real128_less_than(-real128_inf(), -nan));
        assert!(!real128_less_than(nan, real128_inf()));
        assert!(!real128_less_than(nan, -nan));
        assert!(!real128_equal_to(Real128::from(1), nan));
    }

    #[test]
    fn test_total_order_is_const() {
        const LESS: bool = real128_less_than(Real128::ZERO, Real128::INFINITY);
        const SAME: bool = real128_equal_to(Real128::NAN, Real128::NAN);
        assert!(LESS);
        assert!(SAME);
    }

    #[test]
    fn test_exact_integer_comparison() {
        // 2^113 + 1 rounds to 2^113, but compares as different.
        let big = Integer::<2>::from((1u128 << 113) + 1);
        let rounded = Real128::from(&big);
        assert!(rounded != big);
        assert!(rounded < big);
        assert!(big > rounded);
        assert!(rounded == Integer::<2>::from(1u128 << 113));
        assert!((1u128 << 113) + 1 > rounded);

        assert!(Real128::from(0.5f64) > Integer::<1>::new());
        assert!(Real128::from(-0.5f64) < 0);
        assert!(-Real128::ZERO == 0u8);
        assert!(real128_nan() != 0);
        assert_eq!(real128_nan().partial_cmp(&Integer::<1>::new()), None);
    }

    #[test]
    fn test_exact_rational_comparison() {
        let third = Rational::<1>::from_ints(1, 3).unwrap();
        let x = Real128::from(&third);
        assert!(x != third);
        assert!(x < third);
        assert!(third > x);
        assert!(Real128::from(0.5f64) == Rational::<1>::from_ints(2, 4).unwrap());
        assert!(-real128_inf() < Rational::<1>::from_ints(-7, 2).unwrap());
        assert!(Real128::from(f64::MIN_POSITIVE / 4.0) > Rational::<1>::zero());
    }

    #[test]
    fn test_float_comparison() {
        assert!(Real128::from(1.5f64) == 1.5f64);
        assert!(1.5f32 == Real128::from(1.5f64));
        assert!(0.1f32 != Real128::from(0.1f64));
        assert!(Real128::from(0.1f64) < 0.1f32);
        assert!(f64::NAN != real128_nan());
    }
}
