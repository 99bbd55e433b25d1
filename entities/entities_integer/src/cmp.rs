//! Equality, ordering and hashing.
//!
//! All comparisons are exact and look only at the value, never at the
//! storage mode.

use crate::convert::{u128_limbs, MachineInt};
use crate::integer::Integer;
use entities_limbs::{cmp, Limb};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// Compare two sign/magnitude pairs. Zero must be non-negative.
pub fn cmp_signed(a_neg: bool, a: &[Limb], b_neg: bool, b: &[Limb]) -> Ordering {
    match (a_neg, b_neg) {
        (false, true) => Ordering::Greater,
        (true, false) => Ordering::Less,
        (false, false) => cmp(a, b),
        (true, true) => cmp(b, a),
    }
}

impl<const N: usize> Integer<N> {
    /// Compare with a machine integer without converting it first.
    pub fn cmp_machine<T: MachineInt>(&self, other: T) -> Ordering {
        let (negative, magnitude) = other.sign_magnitude();
        cmp_signed(self.is_negative(), self.limbs(), negative, &u128_limbs(magnitude))
    }

    /// Exact comparison with a finite or infinite `f64`; `None` for NaN.
    pub fn partial_cmp_f64(&self, x: f64) -> Option<Ordering> {
        if x.is_nan() {
            return None;
        }
        if x.is_infinite() {
            return Some(if x > 0.0 { Ordering::Less } else { Ordering::Greater });
        }
        let whole = Self::try_from(x).ok()?;
        let ord = self.cmp(&whole);
        let fract = x.fract();
        // Equal to the truncated part: the fractional part decides.
        Some(match ord {
            Ordering::Equal if fract > 0.0 => Ordering::Less,
            Ordering::Equal if fract < 0.0 => Ordering::Greater,
            ord => ord,
        })
    }
}

impl<const N: usize> PartialEq for Integer<N> {
    fn eq(&self, other: &Self) -> bool {
        self.is_negative() == other.is_negative() && self.limbs() == other.limbs()
    }
}

impl<const N: usize> Eq for Integer<N> {}

impl<const N: usize> PartialOrd for Integer<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<const N: usize> Ord for Integer<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_signed(self.is_negative(), self.limbs(), other.is_negative(), other.limbs())
    }
}

impl<const N: usize> Hash for Integer<N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.is_negative().hash(state);
        self.limbs().hash(state);
    }
}

macro_rules! cmp_machine_int {
    ($($t:ty),*) => {$(
        impl<const N: usize> PartialEq<$t> for Integer<N> {
            fn eq(&self, other: &$t) -> bool {
                self.cmp_machine(*other) == Ordering::Equal
            }
        }

        impl<const N: usize> PartialEq<Integer<N>> for $t {
            fn eq(&self, other: &Integer<N>) -> bool {
                other.cmp_machine(*self) == Ordering::Equal
            }
        }

        impl<const N: usize> PartialOrd<$t> for Integer<N> {
            fn partial_cmp(&self, other: &$t) -> Option<Ordering> {
                Some(self.cmp_machine(*other))
            }
        }

        impl<const N: usize> PartialOrd<Integer<N>> for $t {
            fn partial_cmp(&self, other: &Integer<N>) -> Option<Ordering> {
                Some(other.cmp_machine(*self).reverse())
            }
        }
    )*};
}

cmp_machine_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! cmp_float {
    ($($t:ty),*) => {$(
        impl<const N: usize> PartialEq<$t> for Integer<N> {
            fn eq(&self, other: &$t) -> bool {
                self.partial_cmp_f64(*other as f64) == Some(Ordering::Equal)
            }
        }

        impl<const N: usize> PartialEq<Integer<N>> for $t {
            fn eq(&self, other: &Integer<N>) -> bool {
                other.partial_cmp_f64(*self as f64) == Some(Ordering::Equal)
            }
        }

        impl<const N: usize> PartialOrd<$t> for Integer<N> {
            fn partial_cmp(&self, other: &$t) -> Option<Ordering> {
                self.partial_cmp_f64(*other as f64)
            }
        }

        impl<const N: usize> PartialOrd<Integer<N>> for $t {
            fn partial_cmp(&self, other: &Integer<N>) -> Option<Ordering> {
                other.partial_cmp_f64(*self as f64).map(Ordering::reverse)
            }
        }
    )*};
}

cmp_float!(f32, f64);
