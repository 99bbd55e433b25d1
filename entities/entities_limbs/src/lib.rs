//! Entities Layer: Limb Kernels
//!
//! Low-level arithmetic on magnitudes stored as slices of machine words
//! ("limbs"), least-significant limb first. These kernels know nothing about
//! signs or storage modes; the integer type layers those on top.
//!
//! ## Conventions
//!
//! - A slice is *normalized* when its most significant limb is non-zero. The
//!   empty slice is the normalized form of zero.
//! - Output slices are caller-provided and must be large enough for the
//!   documented result size. Kernels that can overflow return the carry.
//! - Scratch space is a [`Scratch`] buffer, which stays on the stack for
//!   magnitudes up to [`SCRATCH_LIMBS`] limbs.
//!
//! ## Modules
//!
//! - [`add`]: addition and subtraction with carry/borrow propagation
//! - [`mul`]: single-limb and schoolbook multiplication
//! - [`shift`]: bit shifts and bit extraction
//! - [`sqrt`]: integer square root with remainder
//! - [`div`]: single-limb and long division, binary gcd

pub mod add;
pub mod div;
pub mod mul;
pub mod shift;
pub mod sqrt;

use smallvec::SmallVec;
use std::cmp::Ordering;

pub use add::{add, add_1, sub, sub_1};
pub use div::{divrem, divrem_1, gcd};
pub use mul::{addmul_1, mul, mul_1};
pub use shift::{bit_length, extract_bits, has_bits_below, lshift, rshift, shl_bits, shr_bits, trailing_zeros};
pub use sqrt::sqrtrem;

/// One machine word of a magnitude.
pub type Limb = u64;

/// Twice the width of a [`Limb`], used for carries and products.
pub type DoubleLimb = u128;

/// Number of bits in a [`Limb`].
pub const LIMB_BITS: u32 = Limb::BITS;

/// Largest value a single limb can hold.
pub const LIMB_MAX: Limb = Limb::MAX;

/// Inline capacity of [`Scratch`] before it spills to the heap.
pub const SCRATCH_LIMBS: usize = 16;

/// Temporary limb buffer used by kernels and by the integer layer to stage
/// results before committing them to a destination.
pub type Scratch = SmallVec<[Limb; SCRATCH_LIMBS]>;

/// Create a zeroed scratch buffer of `len` limbs.
pub fn scratch_zeroed(len: usize) -> Scratch {
    SmallVec::from_elem(0, len)
}

/// Length of `xs` once leading (most significant) zero limbs are dropped.
pub fn normalized_len(xs: &[Limb]) -> usize {
    let mut len = xs.len();
    while len > 0 && xs[len - 1] == 0 {
        len -= 1;
    }
    len
}

/// Borrow the normalized prefix of `xs`.
pub fn normalized(xs: &[Limb]) -> &[Limb] {
    &xs[..normalized_len(xs)]
}

/// Compare two magnitudes.
///
/// Leading zero limbs are ignored, so the slices do not have to be
/// normalized or of equal length.
pub fn cmp(a: &[Limb], b: &[Limb]) -> Ordering {
    let a = normalized(a);
    let b = normalized(b);
    match a.len().cmp(&b.len()) {
        Ordering::Equal => {}
        other => return other,
    }
    for (x, y) in a.iter().rev().zip(b.iter().rev()) {
        match x.cmp(y) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    Ordering::Equal
}
