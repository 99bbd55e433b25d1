//! Addition and subtraction kernels.
//!
//! All functions write `a.len()` limbs into `rp` and return the carry (or
//! borrow) out of the most significant limb.

use crate::Limb;

/// `rp = a + b`, returning the carry.
///
/// Requires `a.len() >= b.len()` and `rp.len() >= a.len()`.
pub fn add(rp: &mut [Limb], a: &[Limb], b: &[Limb]) -> Limb {
    debug_assert!(a.len() >= b.len());
    debug_assert!(rp.len() >= a.len());

    let mut carry = false;
    for i in 0..b.len() {
        let (s1, c1) = a[i].overflowing_add(b[i]);
        let (s2, c2) = s1.overflowing_add(carry as Limb);
        rp[i] = s2;
        carry = c1 | c2;
    }
    add_1(&mut rp[b.len()..], &a[b.len()..], carry as Limb)
}

/// `rp = a + b` for a single-limb `b`, returning the carry.
///
/// Requires `rp.len() >= a.len()`. With an empty `a` the whole of `b` is
/// returned as the carry.
pub fn add_1(rp: &mut [Limb], a: &[Limb], b: Limb) -> Limb {
    debug_assert!(rp.len() >= a.len());

    let mut carry = b;
    for (r, &x) in rp.iter_mut().zip(a) {
        let (s, c) = x.overflowing_add(carry);
        *r = s;
        carry = c as Limb;
    }
    carry
}

/// `rp = a - b`, returning the borrow.
///
/// Requires `a.len() >= b.len()` and `rp.len() >= a.len()`. A non-zero
/// borrow means `b > a` and `rp` holds the two's complement wrap-around.
pub fn sub(rp: &mut [Limb], a: &[Limb], b: &[Limb]) -> Limb {
    debug_assert!(a.len() >= b.len());
    debug_assert!(rp.len() >= a.len());

    let mut borrow = false;
    for i in 0..b.len() {
        let (d1, b1) = a[i].overflowing_sub(b[i]);
        let (d2, b2) = d1.overflowing_sub(borrow as Limb);
        rp[i] = d2;
        borrow = b1 | b2;
    }
    sub_1(&mut rp[b.len()..], &a[b.len()..], borrow as Limb)
}

/// `rp = a - b` for a single-limb `b`, returning the borrow.
pub fn sub_1(rp: &mut [Limb], a: &[Limb], b: Limb) -> Limb {
    debug_assert!(rp.len() >= a.len());

    let mut borrow = b;
    for (r, &x) in rp.iter_mut().zip(a) {
        let (d, c) = x.overflowing_sub(borrow);
        *r = d;
        borrow = c as Limb;
    }
    borrow
}
