//! Integer square root with remainder.

use crate::add::sub;
use crate::shift::{bit_length, rshift};
use crate::{cmp, normalized_len, scratch_zeroed, Limb, Scratch, LIMB_BITS};
use std::cmp::Ordering;

/// Compute `s = floor(sqrt(a))` and `r = a - s^2`.
///
/// Returns `(s, r)` as normalized buffers. `s` has at most
/// `ceil(a.len() / 2)` limbs and `r <= 2 * s`, so `r` never needs more than
/// `a.len()` limbs.
pub fn sqrtrem(a: &[Limb]) -> (Scratch, Scratch) {
    let len = normalized_len(a);
    let a = &a[..len];
    match len {
        0 => (Scratch::new(), Scratch::new()),
        1 | 2 => {
            let x = a[0] as u128 | (a.get(1).copied().unwrap_or(0) as u128) << LIMB_BITS;
            let s = isqrt_u128(x);
            let r = x - s * s;
            (to_scratch(s), to_scratch(r))
        }
        _ => sqrtrem_bitwise(a),
    }
}

fn to_scratch(x: u128) -> Scratch {
    let mut out: Scratch = [x as Limb, (x >> LIMB_BITS) as Limb].into_iter().collect();
    out.truncate(normalized_len(&out));
    out
}

/// Floor square root of a double limb by Newton iteration from above.
fn isqrt_u128(x: u128) -> u128 {
    if x < 2 {
        return x;
    }
    // The float estimate is within 2^12 of the true root for any u128, so
    // padding it keeps the starting point above floor(sqrt(x)).
    let estimate = (x as f64).sqrt() as u128;
    let mut r = (estimate + (1 << 13)).min(Limb::MAX as u128);
    loop {
        let next = (r + x / r) / 2;
        if next >= r {
            return r;
        }
        r = next;
    }
}

/// Digit-by-digit (base 4) square root for magnitudes of three limbs or more.
fn sqrtrem_bitwise(a: &[Limb]) -> (Scratch, Scratch) {
    let n = a.len();
    let mut rem: Scratch = a.iter().copied().collect();
    let mut root = scratch_zeroed(n + 1);
    let mut trial = scratch_zeroed(n + 1);

    // Highest power of four not exceeding a.
    let top = bit_length(a) - 1;
    let mut pos = top - top % 2;
    loop {
        // trial = root + 4^(pos / 2)
        trial.copy_from_slice(&root);
        add_bit(&mut trial, pos);

        let root_src: Scratch = root.clone();
        rshift(&mut root, &root_src, 1);
        if cmp(&rem, &trial) != Ordering::Less {
            let rem_src: Scratch = rem.clone();
            // rem >= trial, so trial fits in rem's limbs.
            let borrow = sub(&mut rem, &rem_src, &trial[..normalized_len(&trial)]);
            debug_assert_eq!(borrow, 0);
            add_bit(&mut root, pos);
        }
        if pos < 2 {
            break;
        }
        pos -= 2;
    }

    root.truncate(normalized_len(&root));
    rem.truncate(normalized_len(&rem));
    (root, rem)
}

/// `xs += 2^pos`, which must not overflow `xs`.
fn add_bit(xs: &mut [Limb], pos: u64) {
    let mut i = (pos / LIMB_BITS as u64) as usize;
    let mut carry = (1 as Limb) << (pos % LIMB_BITS as u64);
    while carry != 0 {
        let (s, c) = xs[i].overflowing_add(carry);
        xs[i] = s;
        carry = c as Limb;
        i += 1;
    }
}
