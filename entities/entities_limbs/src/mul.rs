//! Multiplication kernels.

use crate::{DoubleLimb, Limb, LIMB_BITS};

/// `rp = a * b` for a single-limb `b`, returning the high limb.
///
/// Requires `rp.len() >= a.len()`.
pub fn mul_1(rp: &mut [Limb], a: &[Limb], b: Limb) -> Limb {
    debug_assert!(rp.len() >= a.len());

    let mut carry: Limb = 0;
    for (r, &x) in rp.iter_mut().zip(a) {
        let prod = x as DoubleLimb * b as DoubleLimb + carry as DoubleLimb;
        *r = prod as Limb;
        carry = (prod >> LIMB_BITS) as Limb;
    }
    carry
}

/// `rp += a * b` over the low `a.len()` limbs of `rp`, returning the high limb.
pub fn addmul_1(rp: &mut [Limb], a: &[Limb], b: Limb) -> Limb {
    debug_assert!(rp.len() >= a.len());

    let mut carry: Limb = 0;
    for (r, &x) in rp.iter_mut().zip(a) {
        // x * b + r + carry <= (2^64 - 1)^2 + 2 * (2^64 - 1) < 2^128
        let prod = x as DoubleLimb * b as DoubleLimb + *r as DoubleLimb + carry as DoubleLimb;
        *r = prod as Limb;
        carry = (prod >> LIMB_BITS) as Limb;
    }
    carry
}

/// Schoolbook product `rp = a * b`.
///
/// Requires `rp.len() >= a.len() + b.len()`. The first `a.len() + b.len()`
/// limbs of `rp` are overwritten; the result may have one leading zero limb.
pub fn mul(rp: &mut [Limb], a: &[Limb], b: &[Limb]) {
    let n = a.len() + b.len();
    debug_assert!(rp.len() >= n);

    rp[..n].iter_mut().for_each(|r| *r = 0);
    if a.is_empty() || b.is_empty() {
        return;
    }
    // Iterate over the shorter operand.
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    for (i, &y) in short.iter().enumerate() {
        let hi = addmul_1(&mut rp[i..], long, y);
        rp[i + long.len()] = hi;
    }
}
