//! Add, subtract, multiply and power-of-two scaling.
//!
//! Each operation is split into a pure computation over sign/magnitude
//! pairs, producing a [`Scratch`] result, and a commit into the destination.
//! Because the destination is only touched by the commit, a destination may
//! safely be one of the operands in the in-place forms.

use crate::integer::Integer;
use crate::promotion::Placement;
use entities_limbs::{cmp, normalized, scratch_zeroed, shl_bits, shr_bits, Limb, Scratch};
use std::cmp::Ordering;

/// Sign and magnitude of an intermediate result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SignedLimbs {
    pub negative: bool,
    pub limbs: Scratch,
}

impl SignedLimbs {
    pub(crate) fn commit_into<const N: usize>(&self, rop: &mut Integer<N>, placement: Placement) {
        rop.assign(self.negative, &self.limbs, placement);
    }

    pub(crate) fn into_integer<const N: usize>(self) -> Integer<N> {
        Integer::from_limbs(self.negative, &self.limbs)
    }
}

fn add_magnitudes(a: &[Limb], b: &[Limb]) -> Scratch {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let mut rp = scratch_zeroed(long.len() + 1);
    let carry = entities_limbs::add(&mut rp, long, short);
    rp[long.len()] = carry;
    rp
}

// Requires |a| >= |b|.
fn sub_magnitudes(a: &[Limb], b: &[Limb]) -> Scratch {
    let a = normalized(a);
    let b = normalized(b);
    let mut rp = scratch_zeroed(a.len());
    let borrow = entities_limbs::sub(&mut rp, a, b);
    debug_assert_eq!(borrow, 0);
    rp
}

/// `a + b` on sign/magnitude pairs.
pub(crate) fn add_signed(a_neg: bool, a: &[Limb], b_neg: bool, b: &[Limb]) -> SignedLimbs {
    if a_neg == b_neg {
        return SignedLimbs {
            negative: a_neg,
            limbs: add_magnitudes(a, b),
        };
    }
    // Opposite signs: the larger magnitude decides the sign.
    match cmp(a, b) {
        Ordering::Equal => SignedLimbs {
            negative: false,
            limbs: Scratch::new(),
        },
        Ordering::Greater => SignedLimbs {
            negative: a_neg,
            limbs: sub_magnitudes(a, b),
        },
        Ordering::Less => SignedLimbs {
            negative: b_neg,
            limbs: sub_magnitudes(b, a),
        },
    }
}

pub(crate) fn mul_signed(a_neg: bool, a: &[Limb], b_neg: bool, b: &[Limb]) -> SignedLimbs {
    let mut rp = scratch_zeroed(a.len() + b.len());
    entities_limbs::mul(&mut rp, a, b);
    SignedLimbs {
        negative: a_neg != b_neg,
        limbs: rp,
    }
}

fn operands<const N: usize>(n: &Integer<N>) -> (bool, &[Limb]) {
    (n.is_negative(), n.limbs())
}

pub(crate) fn sum<const N: usize>(a: &Integer<N>, b: &Integer<N>) -> SignedLimbs {
    let (an, al) = operands(a);
    let (bn, bl) = operands(b);
    add_signed(an, al, bn, bl)
}

pub(crate) fn difference<const N: usize>(a: &Integer<N>, b: &Integer<N>) -> SignedLimbs {
    let (an, al) = operands(a);
    let (bn, bl) = operands(b);
    add_signed(an, al, !bn, bl)
}

pub(crate) fn product<const N: usize>(a: &Integer<N>, b: &Integer<N>) -> SignedLimbs {
    let (an, al) = operands(a);
    let (bn, bl) = operands(b);
    mul_signed(an, al, bn, bl)
}

pub(crate) fn shifted_left<const N: usize>(n: &Integer<N>, s: u64) -> SignedLimbs {
    SignedLimbs {
        negative: n.is_negative(),
        limbs: shl_bits(n.limbs(), s),
    }
}

// Truncates toward zero: the magnitude is shifted, the sign kept.
pub(crate) fn shifted_right<const N: usize>(n: &Integer<N>, s: u64) -> SignedLimbs {
    SignedLimbs {
        negative: n.is_negative(),
        limbs: shr_bits(n.limbs(), s),
    }
}

/// `rop = a + b`.
///
/// `rop` keeps its storage mode unless the sum no longer fits inline.
pub fn add<'a, const N: usize>(rop: &'a mut Integer<N>, a: &Integer<N>, b: &Integer<N>) -> &'a mut Integer<N> {
    sum(a, b).commit_into(rop, Placement::KeepMode);
    rop
}

/// `rop = a - b`.
pub fn sub<'a, const N: usize>(rop: &'a mut Integer<N>, a: &Integer<N>, b: &Integer<N>) -> &'a mut Integer<N> {
    difference(a, b).commit_into(rop, Placement::KeepMode);
    rop
}

/// `rop = a * b`.
pub fn mul<'a, const N: usize>(rop: &'a mut Integer<N>, a: &Integer<N>, b: &Integer<N>) -> &'a mut Integer<N> {
    product(a, b).commit_into(rop, Placement::KeepMode);
    rop
}

/// `rop = n * 2^s`.
pub fn mul_2exp<'a, const N: usize>(rop: &'a mut Integer<N>, n: &Integer<N>, s: u64) -> &'a mut Integer<N> {
    shifted_left(n, s).commit_into(rop, Placement::KeepMode);
    rop
}

/// `rop = n / 2^s`, truncated toward zero.
pub fn tdiv_q_2exp<'a, const N: usize>(rop: &'a mut Integer<N>, n: &Integer<N>, s: u64) -> &'a mut Integer<N> {
    shifted_right(n, s).commit_into(rop, Placement::KeepMode);
    rop
}

impl<const N: usize> Integer<N> {
    /// Add one in place.
    pub fn inc(&mut self) -> &mut Self {
        let r = add_signed(self.is_negative(), self.limbs(), false, &[1]);
        r.commit_into(self, Placement::KeepMode);
        self
    }

    /// Subtract one in place.
    pub fn dec(&mut self) -> &mut Self {
        let r = add_signed(self.is_negative(), self.limbs(), true, &[1]);
        r.commit_into(self, Placement::KeepMode);
        self
    }

    /// Add one in place, returning the previous value.
    pub fn post_inc(&mut self) -> Self {
        let prev = self.clone();
        self.inc();
        prev
    }

    /// Subtract one in place, returning the previous value.
    pub fn post_dec(&mut self) -> Self {
        let prev = self.clone();
        self.dec();
        prev
    }

    /// Flip the sign in place.
    pub fn negate(&mut self) -> &mut Self {
        self.storage.negate();
        self
    }

    /// Make the value non-negative in place.
    pub fn abs_assign(&mut self) -> &mut Self {
        if self.is_negative() {
            self.storage.negate();
        }
        self
    }

    /// Absolute value.
    pub fn abs(&self) -> Self {
        let mut out = self.clone();
        out.abs_assign();
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use entities_limbs::LIMB_MAX;

    type Int1 = Integer<1>;

    #[test]
    fn test_add_signed_cancellation() {
        let r = add_signed(false, &[5], true, &[5]);
        assert!(!r.negative);
        assert!(normalized(&r.limbs).is_empty());

        let r = add_signed(true, &[3], false, &[5]);
        assert!(!r.negative);
        assert_eq!(normalized(&r.limbs), &[2]);

        let r = add_signed(false, &[3], true, &[0, 1]);
        assert!(r.negative);
        assert_eq!(normalized(&r.limbs), &[LIMB_MAX - 2]);
    }

    #[test]
    fn test_add_promotes_static_destination() {
        let a = Int1::from_limbs(false, &[LIMB_MAX]);
        let b = Int1::from_limbs(false, &[1]);
        let mut rop = Int1::new();
        add(&mut rop, &a, &b);
        assert!(rop.is_dynamic());
        assert_eq!(rop.limbs(), &[0, 1]);
    }

    #[test]
    fn test_sub_keeps_dynamic_destination() {
        let a = Int1::from_limbs(false, &[0, 1]);
        let b = Int1::from_limbs(false, &[1]);
        let mut rop = Int1::from_limbs(false, &[9, 9, 9]);
        sub(&mut rop, &a, &b);
        assert!(rop.is_dynamic());
        assert_eq!(rop.limbs(), &[LIMB_MAX]);
    }

    #[test]
    fn test_mul_sign() {
        let a = Int1::from_limbs(true, &[3]);
        let b = Int1::from_limbs(false, &[LIMB_MAX]);
        let mut rop = Int1::new();
        mul(&mut rop, &a, &b);
        assert!(rop.is_negative());
        assert_eq!(rop.limbs(), &[LIMB_MAX - 2, 2]);

        mul(&mut rop, &a, &Int1::new());
        assert!(rop.is_zero());
        assert!(!rop.is_negative());
    }

    #[test]
    fn test_shifts() {
        let n = Int1::from_limbs(true, &[3]);
        let mut rop = Int1::new();
        mul_2exp(&mut rop, &n, 127);
        assert_eq!(rop.limbs(), &[0, 1u64 << 63, 1]);
        assert!(rop.is_negative());

        let m = rop.clone();
        tdiv_q_2exp(&mut rop, &m, 128);
        assert_eq!(rop.limbs(), &[1]);
        assert!(rop.is_negative());

        tdiv_q_2exp(&mut rop, &m, 500);
        assert!(rop.is_zero());
        assert!(!rop.is_negative());
    }

    #[test]
    fn test_huge_shift_of_zero() {
        let zero = Int1::new();
        let mut rop = Int1::from_limbs(false, &[7]);
        mul_2exp(&mut rop, &zero, 1 << 62);
        assert!(rop.is_zero());
        assert!(rop.is_static());

        let mut n = Int1::new();
        n <<= u64::MAX;
        assert!(n.is_zero());
        assert!((&zero << (1u64 << 62)).is_zero());

        let mut r = crate::Registers::<1>::new(1);
        r.mul_2exp(0, 0, 1 << 62).unwrap();
        assert!(r.get(0).unwrap().is_zero());
    }

    #[test]
    fn test_inc_dec_across_zero_and_limb_boundary() {
        let mut n = Int1::from_limbs(true, &[1]);
        n.inc();
        assert!(n.is_zero());
        n.dec();
        assert_eq!(n.sgn(), -1);

        let mut m = Int1::from_limbs(false, &[LIMB_MAX]);
        m.inc();
        assert!(m.is_dynamic());
        m.dec();
        // Decrement keeps the dynamic mode.
        assert!(m.is_dynamic());
        assert_eq!(m.limbs(), &[LIMB_MAX]);
    }

    #[test]
    fn test_post_inc_returns_previous() {
        let mut n = Int1::from_limbs(false, &[41]);
        let prev = n.post_inc();
        assert_eq!(prev.limbs(), &[41]);
        assert_eq!(n.limbs(), &[42]);
        let prev = n.post_dec();
        assert_eq!(prev.limbs(), &[42]);
        assert_eq!(n.limbs(), &[41]);
    }

    #[test]
    fn test_abs_negate() {
        let mut n = Int1::from_limbs(true, &[7]);
        assert!(!n.abs().is_negative());
        n.negate();
        assert!(!n.is_negative());
        let mut z = Int1::new();
        z.negate();
        assert!(!z.is_negative());
    }
}
