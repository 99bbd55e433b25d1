//! Truncating division, exact division and gcd.
//!
//! These back the canonical form of rationals; they are not exposed as
//! `/` and `%` operators.

use crate::error::{Error, Result};
use crate::integer::Integer;
use crate::promotion::Placement;
use entities_limbs::divrem;

/// `q = trunc(n / d)` and `r = n - q * d`.
///
/// The remainder takes the sign of `n`, as in machine integer division.
///
/// # Errors
///
/// [`Error::ZeroDivision`] if `d` is zero; neither output is touched.
pub fn tdiv_qr<const N: usize>(q: &mut Integer<N>, r: &mut Integer<N>, n: &Integer<N>, d: &Integer<N>) -> Result<()> {
    if d.is_zero() {
        return Err(Error::ZeroDivision);
    }
    let (ql, rl) = divrem(n.limbs(), d.limbs());
    q.assign(n.is_negative() != d.is_negative(), &ql, Placement::KeepMode);
    r.assign(n.is_negative(), &rl, Placement::KeepMode);
    Ok(())
}

/// `rop = n / d` where `d` is known to divide `n`.
///
/// # Errors
///
/// [`Error::ZeroDivision`] if `d` is zero.
pub fn divexact<'a, const N: usize>(rop: &'a mut Integer<N>, n: &Integer<N>, d: &Integer<N>) -> Result<&'a mut Integer<N>> {
    if d.is_zero() {
        return Err(Error::ZeroDivision);
    }
    let (ql, rl) = divrem(n.limbs(), d.limbs());
    debug_assert!(rl.is_empty(), "divexact with a non-zero remainder");
    rop.assign(n.is_negative() != d.is_negative(), &ql, Placement::KeepMode);
    Ok(rop)
}

/// `rop = gcd(a, b)`, always non-negative; `gcd(0, 0) == 0`.
pub fn gcd<'a, const N: usize>(rop: &'a mut Integer<N>, a: &Integer<N>, b: &Integer<N>) -> &'a mut Integer<N> {
    let g = entities_limbs::gcd(a.limbs(), b.limbs());
    rop.assign(false, &g, Placement::KeepMode);
    rop
}
