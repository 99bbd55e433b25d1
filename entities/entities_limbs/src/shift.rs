//! Bit shifts and bit-level queries.

use crate::{normalized_len, scratch_zeroed, DoubleLimb, Limb, Scratch, LIMB_BITS};

/// `rp = a << cnt` for `cnt < LIMB_BITS`, returning the bits shifted out of
/// the top limb (in the low bits of the result).
pub fn lshift(rp: &mut [Limb], a: &[Limb], cnt: u32) -> Limb {
    debug_assert!(cnt < LIMB_BITS);
    debug_assert!(rp.len() >= a.len());

    if cnt == 0 {
        rp[..a.len()].copy_from_slice(a);
        return 0;
    }
    let mut carry: Limb = 0;
    for (r, &x) in rp.iter_mut().zip(a) {
        *r = (x << cnt) | carry;
        carry = x >> (LIMB_BITS - cnt);
    }
    carry
}

/// `rp = a >> cnt` for `cnt < LIMB_BITS`, returning the bits shifted out of
/// the bottom limb (in the high bits of the result).
pub fn rshift(rp: &mut [Limb], a: &[Limb], cnt: u32) -> Limb {
    debug_assert!(cnt < LIMB_BITS);
    debug_assert!(rp.len() >= a.len());

    if cnt == 0 {
        rp[..a.len()].copy_from_slice(a);
        return 0;
    }
    let mut carry: Limb = 0;
    for i in (0..a.len()).rev() {
        let x = a[i];
        rp[i] = (x >> cnt) | carry;
        carry = x << (LIMB_BITS - cnt);
    }
    carry
}

/// `a * 2^bits` as a fresh buffer of `a.len() + bits / LIMB_BITS + 1` limbs.
///
/// A zero magnitude gives an empty buffer whatever the shift.
pub fn shl_bits(a: &[Limb], bits: u64) -> Scratch {
    if normalized_len(a) == 0 {
        return Scratch::new();
    }
    let limb_shift = (bits / LIMB_BITS as u64) as usize;
    let bit_shift = (bits % LIMB_BITS as u64) as u32;
    let mut out = scratch_zeroed(a.len() + limb_shift + 1);
    let hi = lshift(&mut out[limb_shift..], a, bit_shift);
    out[limb_shift + a.len()] = hi;
    out
}

/// `floor(a / 2^bits)` as a fresh buffer.
pub fn shr_bits(a: &[Limb], bits: u64) -> Scratch {
    let limb_shift = bits / LIMB_BITS as u64;
    if limb_shift >= a.len() as u64 {
        return Scratch::new();
    }
    let limb_shift = limb_shift as usize;
    let bit_shift = (bits % LIMB_BITS as u64) as u32;
    let src = &a[limb_shift..];
    let mut out = scratch_zeroed(src.len());
    rshift(&mut out, src, bit_shift);
    out
}

/// Number of significant bits in `a`; zero for the empty magnitude.
pub fn bit_length(a: &[Limb]) -> u64 {
    let len = normalized_len(a);
    if len == 0 {
        return 0;
    }
    (len as u64 - 1) * LIMB_BITS as u64 + (LIMB_BITS - a[len - 1].leading_zeros()) as u64
}

/// Index of the lowest set bit of `a`; zero for the empty magnitude.
pub fn trailing_zeros(a: &[Limb]) -> u64 {
    for (i, &x) in a.iter().enumerate() {
        if x != 0 {
            return i as u64 * LIMB_BITS as u64 + x.trailing_zeros() as u64;
        }
    }
    0
}

/// Bits `[start, start + width)` of `a` as an integer, for `width <= 128`.
/// Bits past the end of `a` read as zero.
pub fn extract_bits(a: &[Limb], start: u64, width: u32) -> u128 {
    debug_assert!(width <= 2 * LIMB_BITS);

    let limb = (start / LIMB_BITS as u64) as usize;
    let offset = (start % LIMB_BITS as u64) as u32;
    let word = |i: usize| -> DoubleLimb { a.get(i).copied().unwrap_or(0) as DoubleLimb };

    let low = (word(limb) | (word(limb + 1) << LIMB_BITS)) >> offset;
    let value = if offset == 0 {
        low
    } else {
        low | (word(limb + 2) << (2 * LIMB_BITS - offset))
    };
    if width == 2 * LIMB_BITS {
        value
    } else {
        value & ((1u128 << width) - 1)
    }
}

/// Whether any bit with index below `pos` is set in `a`.
pub fn has_bits_below(a: &[Limb], pos: u64) -> bool {
    let full = (pos / LIMB_BITS as u64) as usize;
    let rem = (pos % LIMB_BITS as u64) as u32;
    if a[..full.min(a.len())].iter().any(|&x| x != 0) {
        return true;
    }
    rem != 0 && full < a.len() && a[full] & ((1 << rem) - 1) != 0
}
