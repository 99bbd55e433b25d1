//! Division and greatest common divisor.

use crate::add::sub;
use crate::shift::{bit_length, lshift, shr_bits, trailing_zeros};
use crate::{cmp, normalized, normalized_len, scratch_zeroed, DoubleLimb, Limb, Scratch, LIMB_BITS};
use std::cmp::Ordering;

/// `qp = a / d` for a single non-zero limb `d`, returning the remainder.
///
/// Requires `qp.len() >= a.len()`.
pub fn divrem_1(qp: &mut [Limb], a: &[Limb], d: Limb) -> Limb {
    debug_assert!(d != 0);
    debug_assert!(qp.len() >= a.len());

    let mut rem: Limb = 0;
    for i in (0..a.len()).rev() {
        let cur = (rem as DoubleLimb) << LIMB_BITS | a[i] as DoubleLimb;
        qp[i] = (cur / d as DoubleLimb) as Limb;
        rem = (cur % d as DoubleLimb) as Limb;
    }
    rem
}

/// Truncating division of magnitudes, returning normalized `(q, r)` with
/// `a = q * d + r` and `r < d`.
///
/// `d` must be non-zero. Single-limb divisors take the [`divrem_1`] path;
/// longer divisors use binary long division.
pub fn divrem(a: &[Limb], d: &[Limb]) -> (Scratch, Scratch) {
    let a = normalized(a);
    let d = normalized(d);
    assert!(!d.is_empty(), "division by a zero magnitude");

    if cmp(a, d) == Ordering::Less {
        return (Scratch::new(), a.iter().copied().collect());
    }
    if d.len() == 1 {
        let mut q = scratch_zeroed(a.len());
        let r = divrem_1(&mut q, a, d[0]);
        q.truncate(normalized_len(&q));
        let r: Scratch = if r == 0 { Scratch::new() } else { [r].into_iter().collect() };
        return (q, r);
    }

    let mut q = scratch_zeroed(a.len());
    let mut r = scratch_zeroed(d.len() + 1);
    let mut shifted = scratch_zeroed(d.len() + 1);
    for bit in (0..bit_length(a)).rev() {
        // r = 2r + bit
        let hi = lshift(&mut shifted, &r, 1);
        debug_assert_eq!(hi, 0);
        let limb = (bit / LIMB_BITS as u64) as usize;
        let offset = bit % LIMB_BITS as u64;
        shifted[0] |= (a[limb] >> offset) & 1;
        r.copy_from_slice(&shifted);

        if cmp(&r, d) != Ordering::Less {
            let src = r.clone();
            sub(&mut r, &src, d);
            q[limb] |= 1 << offset;
        }
    }
    q.truncate(normalized_len(&q));
    r.truncate(normalized_len(&r));
    (q, r)
}

/// Greatest common divisor of two magnitudes (binary algorithm).
///
/// `gcd(a, 0) == a`; the result is normalized.
pub fn gcd(a: &[Limb], b: &[Limb]) -> Scratch {
    let a = normalized(a);
    let b = normalized(b);
    if a.is_empty() {
        return b.iter().copied().collect();
    }
    if b.is_empty() {
        return a.iter().copied().collect();
    }

    let za = trailing_zeros(a);
    let zb = trailing_zeros(b);
    let common = za.min(zb);
    let mut u = shr_bits(a, za);
    let mut v = shr_bits(b, zb);
    // Both odd from here on.
    loop {
        u.truncate(normalized_len(&u));
        v.truncate(normalized_len(&v));
        match cmp(&u, &v) {
            Ordering::Equal => break,
            Ordering::Greater => std::mem::swap(&mut u, &mut v),
            Ordering::Less => {}
        }
        // v > u, both odd: v - u is even and non-zero.
        let src = v.clone();
        sub(&mut v, &src, &u);
        let tz = trailing_zeros(&v);
        v = shr_bits(&v, tz);
    }
    let mut g = crate::shift::shl_bits(&u, common);
    g.truncate(normalized_len(&g));
    g
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LIMB_MAX;

    #[test]
    fn test_divrem_1() {
        let mut q = [0; 2];
        let r = divrem_1(&mut q, &[7, 1], 10);
        // (2^64 + 7) = 10 * 1844674407370955162 + 3
        assert_eq!(q, [1844674407370955162, 0]);
        assert_eq!(r, 3);
    }

    #[test]
    fn test_divrem_single_limb_divisor() {
        let (q, r) = divrem(&[100], &[7]);
        assert_eq!(q.as_slice(), &[14]);
        assert_eq!(r.as_slice(), &[2]);
    }

    #[test]
    fn test_divrem_multi_limb_divisor() {
        // (2^128 - 1) / (2^64 + 1) = 2^64 - 1, remainder 0
        let (q, r) = divrem(&[LIMB_MAX, LIMB_MAX], &[1, 1]);
        assert_eq!(q.as_slice(), &[LIMB_MAX]);
        assert!(r.is_empty());

        // (2^128 + 5) / (2^64) = 2^64, remainder 5
        let (q, r) = divrem(&[5, 0, 1], &[0, 1]);
        assert_eq!(q.as_slice(), &[0, 1]);
        assert_eq!(r.as_slice(), &[5]);
    }

    #[test]
    fn test_divrem_smaller_dividend() {
        let (q, r) = divrem(&[3], &[0, 1]);
        assert!(q.is_empty());
        assert_eq!(r.as_slice(), &[3]);
    }

    #[test]
    fn test_gcd() {
        assert_eq!(gcd(&[12], &[18]).as_slice(), &[6]);
        assert_eq!(gcd(&[], &[5]).as_slice(), &[5]);
        assert_eq!(gcd(&[7], &[]).as_slice(), &[7]);
        assert_eq!(gcd(&[0, 1], &[0, 0, 1]).as_slice(), &[0, 1]);
        assert_eq!(gcd(&[17], &[5]).as_slice(), &[1]);
    }
}
