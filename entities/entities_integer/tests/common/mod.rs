//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use entities_integer::Integer;
use malachite::Natural;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Iterations per limb count in the randomized oracle tests.
pub const NTRIES: usize = 250;

/// Deterministic generator; every test gets its own stream.
pub fn rng(stream: u64) -> StdRng {
    StdRng::seed_from_u64(0x6d70_7069_6e74 ^ stream)
}

/// A random reference integer with at most `limbs` limbs and a random sign.
///
/// One draw in five saturates every limb, so carries and borrows across
/// whole words get exercised.
pub fn random_integer(limbs: usize, rng: &mut StdRng) -> malachite::Integer {
    if limbs == 0 {
        return malachite::Integer::from(0);
    }
    let len = rng.gen_range(1..=limbs);
    let xs: Vec<u64> = if rng.gen_bool(0.2) {
        vec![u64::MAX; len]
    } else {
        (0..len).map(|_| rng.gen()).collect()
    };
    malachite::Integer::from_sign_and_abs(rng.gen_bool(0.5), Natural::from_limbs_asc(&xs))
}

/// Non-negative variant of [`random_integer`].
pub fn random_natural(limbs: usize, rng: &mut StdRng) -> malachite::Integer {
    let n = random_integer(limbs, rng);
    malachite::Integer::from(n.unsigned_abs_ref().clone())
}

/// Convert through decimal text, the way values reach the library from the
/// outside.
pub fn from_reference<const N: usize>(r: &malachite::Integer) -> Integer<N> {
    r.to_string().parse().expect("reference integers print as valid decimal")
}

/// Randomly promote a static value, so both representations get used as
/// operands.
pub fn maybe_promote<const N: usize>(n: &mut Integer<N>, rng: &mut StdRng) {
    if n.is_static() && rng.gen_bool(0.5) {
        n.promote();
    }
}

/// One time in eight, reset a destination to a fresh static zero.
pub fn maybe_reset<const N: usize>(n: &mut Integer<N>, rng: &mut StdRng) {
    if rng.gen_ratio(1, 8) {
        *n = Integer::new();
    }
}
