//! Operator overloads.
//!
//! Integer with integer (or machine integer) yields an integer; integer with
//! float yields the float type, computed in floating point. Values returned
//! by binary operators land in static storage when they fit, compound
//! assignments keep the left operand's mode.

use crate::arith::{difference, product, shifted_left, shifted_right, sum, SignedLimbs};
use crate::convert::truncate_f64;
use crate::integer::Integer;
use crate::promotion::Placement;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Shl, ShlAssign, Shr, ShrAssign, Sub, SubAssign};

macro_rules! integer_binop {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident, $compute:ident) => {
        impl<const N: usize> $Op<&Integer<N>> for &Integer<N> {
            type Output = Integer<N>;

            fn $op(self, rhs: &Integer<N>) -> Integer<N> {
                $compute(self, rhs).into_integer()
            }
        }

        impl<const N: usize> $Op<Integer<N>> for Integer<N> {
            type Output = Integer<N>;

            fn $op(self, rhs: Integer<N>) -> Integer<N> {
                $compute(&self, &rhs).into_integer()
            }
        }

        impl<const N: usize> $Op<&Integer<N>> for Integer<N> {
            type Output = Integer<N>;

            fn $op(self, rhs: &Integer<N>) -> Integer<N> {
                $compute(&self, rhs).into_integer()
            }
        }

        impl<const N: usize> $Op<Integer<N>> for &Integer<N> {
            type Output = Integer<N>;

            fn $op(self, rhs: Integer<N>) -> Integer<N> {
                $compute(self, &rhs).into_integer()
            }
        }

        impl<const N: usize> $OpAssign<&Integer<N>> for Integer<N> {
            fn $op_assign(&mut self, rhs: &Integer<N>) {
                let r: SignedLimbs = $compute(self, rhs);
                r.commit_into(self, Placement::KeepMode);
            }
        }

        impl<const N: usize> $OpAssign<Integer<N>> for Integer<N> {
            fn $op_assign(&mut self, rhs: Integer<N>) {
                $OpAssign::$op_assign(self, &rhs);
            }
        }
    };
}

integer_binop!(Add, add, AddAssign, add_assign, sum);
integer_binop!(Sub, sub, SubAssign, sub_assign, difference);
integer_binop!(Mul, mul, MulAssign, mul_assign, product);

macro_rules! machine_int_binop {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident; $($t:ty),*) => {$(
        impl<const N: usize> $Op<$t> for Integer<N> {
            type Output = Integer<N>;

            fn $op(self, rhs: $t) -> Integer<N> {
                $Op::$op(&self, &Integer::<N>::from(rhs))
            }
        }

        impl<const N: usize> $Op<$t> for &Integer<N> {
            type Output = Integer<N>;

            fn $op(self, rhs: $t) -> Integer<N> {
                $Op::$op(self, &Integer::<N>::from(rhs))
            }
        }

        impl<const N: usize> $Op<Integer<N>> for $t {
            type Output = Integer<N>;

            fn $op(self, rhs: Integer<N>) -> Integer<N> {
                $Op::$op(&Integer::<N>::from(self), &rhs)
            }
        }

        impl<const N: usize> $Op<&Integer<N>> for $t {
            type Output = Integer<N>;

            fn $op(self, rhs: &Integer<N>) -> Integer<N> {
                $Op::$op(&Integer::<N>::from(self), rhs)
            }
        }

        impl<const N: usize> $OpAssign<$t> for Integer<N> {
            fn $op_assign(&mut self, rhs: $t) {
                $OpAssign::$op_assign(self, &Integer::<N>::from(rhs));
            }
        }
    )*};
}

macro_rules! machine_int_ops {
    ($($t:ty),*) => {
        machine_int_binop!(Add, add, AddAssign, add_assign; $($t),*);
        machine_int_binop!(Sub, sub, SubAssign, sub_assign; $($t),*);
        machine_int_binop!(Mul, mul, MulAssign, mul_assign; $($t),*);
    };
}

machine_int_ops!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl<const N: usize> Integer<N> {
    /// Replace the value with the truncation of `x`, keeping the mode.
    ///
    /// # Panics
    ///
    /// If `x` is not finite.
    fn assign_truncated(&mut self, x: f64) {
        if !x.is_finite() {
            panic!("Cannot assign the non-finite floating-point value {} to an integer", x);
        }
        let (negative, limbs) = truncate_f64(x);
        self.assign(negative, &limbs, Placement::KeepMode);
    }
}

macro_rules! float_binop {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident; $($t:ty => $to:ident),*) => {$(
        impl<const N: usize> $Op<$t> for Integer<N> {
            type Output = $t;

            fn $op(self, rhs: $t) -> $t {
                $Op::$op(self.$to(), rhs)
            }
        }

        impl<const N: usize> $Op<$t> for &Integer<N> {
            type Output = $t;

            fn $op(self, rhs: $t) -> $t {
                $Op::$op(self.$to(), rhs)
            }
        }

        impl<const N: usize> $Op<Integer<N>> for $t {
            type Output = $t;

            fn $op(self, rhs: Integer<N>) -> $t {
                $Op::$op(self, rhs.$to())
            }
        }

        impl<const N: usize> $Op<&Integer<N>> for $t {
            type Output = $t;

            fn $op(self, rhs: &Integer<N>) -> $t {
                $Op::$op(self, rhs.$to())
            }
        }

        /// Computes in floating point and truncates toward zero.
        ///
        /// # Panics
        ///
        /// If the floating-point result is not finite.
        impl<const N: usize> $OpAssign<$t> for Integer<N> {
            fn $op_assign(&mut self, rhs: $t) {
                let result = $Op::$op(self.$to(), rhs);
                self.assign_truncated(result as f64);
            }
        }
    )*};
}

float_binop!(Add, add, AddAssign, add_assign; f32 => to_f32, f64 => to_f64);
float_binop!(Sub, sub, SubAssign, sub_assign; f32 => to_f32, f64 => to_f64);
float_binop!(Mul, mul, MulAssign, mul_assign; f32 => to_f32, f64 => to_f64);

impl<const N: usize> Neg for Integer<N> {
    type Output = Integer<N>;

    fn neg(mut self) -> Integer<N> {
        self.negate();
        self
    }
}

impl<const N: usize> Neg for &Integer<N> {
    type Output = Integer<N>;

    fn neg(self) -> Integer<N> {
        let mut out = Integer::from_limbs(self.is_negative(), self.limbs());
        out.negate();
        out
    }
}

macro_rules! shift_ops {
    ($($t:ty),*) => {$(
        impl<const N: usize> Shl<$t> for &Integer<N> {
            type Output = Integer<N>;

            fn shl(self, s: $t) -> Integer<N> {
                shifted_left(self, s as u64).into_integer()
            }
        }

        impl<const N: usize> Shl<$t> for Integer<N> {
            type Output = Integer<N>;

            fn shl(self, s: $t) -> Integer<N> {
                shifted_left(&self, s as u64).into_integer()
            }
        }

        impl<const N: usize> ShlAssign<$t> for Integer<N> {
            fn shl_assign(&mut self, s: $t) {
                let r = shifted_left(self, s as u64);
                r.commit_into(self, Placement::KeepMode);
            }
        }

        /// Truncates toward zero.
        impl<const N: usize> Shr<$t> for &Integer<N> {
            type Output = Integer<N>;

            fn shr(self, s: $t) -> Integer<N> {
                shifted_right(self, s as u64).into_integer()
            }
        }

        impl<const N: usize> Shr<$t> for Integer<N> {
            type Output = Integer<N>;

            fn shr(self, s: $t) -> Integer<N> {
                shifted_right(&self, s as u64).into_integer()
            }
        }

        impl<const N: usize> ShrAssign<$t> for Integer<N> {
            fn shr_assign(&mut self, s: $t) {
                let r = shifted_right(self, s as u64);
                r.commit_into(self, Placement::KeepMode);
            }
        }
    )*};
}

shift_ops!(u32, u64, usize);
