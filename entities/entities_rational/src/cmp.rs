//! Rational comparisons.
//!
//! Denominators are positive, so `a/b < c/d` exactly when `a*d < c*b`.

use crate::rational::Rational;
use entities_integer::Integer;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

impl<const N: usize> Rational<N> {
    /// Compare with an integer without building a rational from it.
    pub fn cmp_integer(&self, n: &Integer<N>) -> Ordering {
        if self.is_integer() {
            return self.num().cmp(n);
        }
        self.num().cmp(&(n * self.den()))
    }
}

impl<const N: usize> PartialEq for Rational<N> {
    fn eq(&self, other: &Self) -> bool {
        // Canonical form makes this structural.
        self.num() == other.num() && self.den() == other.den()
    }
}

impl<const N: usize> Eq for Rational<N> {}

impl<const N: usize> PartialOrd for Rational<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<const N: usize> Ord for Rational<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.den() == other.den() {
            return self.num().cmp(other.num());
        }
        (self.num() * other.den()).cmp(&(other.num() * self.den()))
    }
}

impl<const N: usize> Hash for Rational<N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.num().hash(state);
        self.den().hash(state);
    }
}

impl<const N: usize> PartialEq<Integer<N>> for Rational<N> {
    fn eq(&self, other: &Integer<N>) -> bool {
        self.is_integer() && self.num() == other
    }
}

impl<const N: usize> PartialEq<Rational<N>> for Integer<N> {
    fn eq(&self, other: &Rational<N>) -> bool {
        other == self
    }
}

impl<const N: usize> PartialOrd<Integer<N>> for Rational<N> {
    fn partial_cmp(&self, other: &Integer<N>) -> Option<Ordering> {
        Some(self.cmp_integer(other))
    }
}

impl<const N: usize> PartialOrd<Rational<N>> for Integer<N> {
    fn partial_cmp(&self, other: &Rational<N>) -> Option<Ordering> {
        Some(other.cmp_integer(self).reverse())
    }
}

macro_rules! cmp_machine_int {
    ($($t:ty),*) => {$(
        impl<const N: usize> PartialEq<$t> for Rational<N> {
            fn eq(&self, other: &$t) -> bool {
                self.is_integer() && *self.num() == *other
            }
        }

        impl<const N: usize> PartialEq<Rational<N>> for $t {
            fn eq(&self, other: &Rational<N>) -> bool {
                other == self
            }
        }

        impl<const N: usize> PartialOrd<$t> for Rational<N> {
            fn partial_cmp(&self, other: &$t) -> Option<Ordering> {
                Some(self.cmp_integer(&Integer::from(*other)))
            }
        }

        impl<const N: usize> PartialOrd<Rational<N>> for $t {
            fn partial_cmp(&self, other: &Rational<N>) -> Option<Ordering> {
                Some(other.cmp_integer(&Integer::from(*self)).reverse())
            }
        }
    )*};
}

cmp_machine_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
