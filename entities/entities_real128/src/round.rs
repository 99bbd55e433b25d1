//! Rounding exact values to binary128.
//!
//! Every conversion reduces its input to either a scaled magnitude
//! `mag * 2^exp` or a quotient `num / den`, then rounds here to nearest with
//! ties to even. Overflow goes to infinity, underflow through the subnormal
//! range to a signed zero.

use crate::real128::{Real128, FRAC_BITS, MAX_EXP, MIN_SUBNORMAL_EXP};
use entities_limbs::{bit_length, divrem, extract_bits, has_bits_below, shl_bits, Limb};
use log::{debug, trace};

/// Quotient bits produced before rounding: the 113-bit significand, the
/// rounding bit and one more so the remainder only feeds the sticky bit.
const QUOTIENT_BITS: i64 = FRAC_BITS as i64 + 3;

/// Round `mag * 2^exp` to the nearest binary128 value.
///
/// `sticky` marks a discarded non-zero tail below the lowest bit of `mag`.
/// It is only meaningful when `mag` has at least two bits below the rounding
/// position, which [`round_quotient`] guarantees.
pub(crate) fn round_scaled(negative: bool, mag: &[Limb], exp: i64, sticky: bool) -> Real128 {
    let bits = bit_length(mag) as i64;
    if bits == 0 {
        return Real128::signed_zero(negative);
    }
    let top = exp + bits - 1;
    if top > MAX_EXP {
        debug!("value of magnitude 2^{} overflows binary128", top);
        return Real128::signed_inf(negative);
    }

    let mut lsb = (top - FRAC_BITS as i64).max(MIN_SUBNORMAL_EXP);
    let shift = lsb - exp;
    let mut sig = if shift <= 0 {
        extract_bits(mag, 0, 128) << shift.unsigned_abs()
    } else {
        let shift = shift as u64;
        let kept = extract_bits(mag, shift, FRAC_BITS + 1);
        let half = extract_bits(mag, shift - 1, 1) == 1;
        let below = sticky || has_bits_below(mag, shift - 1);
        if half && (below || kept & 1 == 1) {
            kept + 1
        } else {
            kept
        }
    };
    if sig == 0 {
        trace!("value of magnitude 2^{} underflows to zero", top);
    }
    if sig >> (FRAC_BITS + 1) != 0 {
        sig >>= 1;
        lsb += 1;
    }
    Real128::from_parts(negative, sig, lsb)
}

/// Round `num / den` to the nearest binary128 value. `den` must be non-zero.
pub(crate) fn round_quotient(negative: bool, num: &[Limb], den: &[Limb]) -> Real128 {
    let num_bits = bit_length(num) as i64;
    if num_bits == 0 {
        return Real128::signed_zero(negative);
    }
    // Scale so the quotient has QUOTIENT_BITS or QUOTIENT_BITS + 1 bits.
    let k = QUOTIENT_BITS + bit_length(den) as i64 - num_bits;
    let (q, r) = if k >= 0 {
        divrem(&shl_bits(num, k as u64), den)
    } else {
        divrem(num, &shl_bits(den, k.unsigned_abs()))
    };
    round_scaled(negative, &q, -k, !r.is_empty())
}
