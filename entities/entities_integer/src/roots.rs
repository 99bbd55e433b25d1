//! Integer square root, with and without remainder.
//!
//! Roots are committed with [`Placement::PreferStatic`]: a destination
//! that was dynamic is demoted when the result fits inline.

use crate::error::{Error, Result};
use crate::integer::Integer;
use crate::promotion::Placement;
use entities_limbs::{sqrtrem as sqrtrem_limbs, Scratch};

pub(crate) const SQRTREM_ALIAS_MESSAGE: &str = "When performing an integer square root with remainder, the result 'rop' and the remainder 'rem' must be distinct objects";

fn check_sqrt_domain<const N: usize>(n: &Integer<N>) -> Result<()> {
    if n.is_negative() {
        return Err(Error::Domain(format!(
            "Cannot compute the square root of the negative number {}",
            n
        )));
    }
    Ok(())
}

fn check_sqrtrem_domain<const N: usize>(n: &Integer<N>) -> Result<()> {
    if n.is_negative() {
        return Err(Error::Domain(format!(
            "Cannot compute the square root with remainder of the negative number {}",
            n
        )));
    }
    Ok(())
}

/// Root of a non-negative `n`, checked for the `sqrt` domain.
pub(crate) fn checked_sqrt<const N: usize>(n: &Integer<N>) -> Result<Scratch> {
    check_sqrt_domain(n)?;
    let (root, _) = sqrtrem_limbs(n.limbs());
    Ok(root)
}

/// Root and remainder of a non-negative `n`, checked for the `sqrtrem`
/// domain.
pub(crate) fn checked_sqrtrem<const N: usize>(n: &Integer<N>) -> Result<(Scratch, Scratch)> {
    check_sqrtrem_domain(n)?;
    Ok(sqrtrem_limbs(n.limbs()))
}

/// `rop = floor(sqrt(n))`.
///
/// # Errors
///
/// [`Error::Domain`] if `n` is negative; `rop` is left untouched.
pub fn sqrt<'a, const N: usize>(rop: &'a mut Integer<N>, n: &Integer<N>) -> Result<&'a mut Integer<N>> {
    let root = checked_sqrt(n)?;
    rop.assign(false, &root, Placement::PreferStatic);
    Ok(rop)
}

/// `rop = floor(sqrt(n))` and `rem = n - rop^2`.
///
/// # Errors
///
/// [`Error::Domain`] if `n` is negative; neither output is touched.
pub fn sqrtrem<const N: usize>(rop: &mut Integer<N>, rem: &mut Integer<N>, n: &Integer<N>) -> Result<()> {
    let (root, r) = checked_sqrtrem(n)?;
    rop.assign(false, &root, Placement::PreferStatic);
    rem.assign(false, &r, Placement::PreferStatic);
    Ok(())
}

impl<const N: usize> Integer<N> {
    /// Integer square root as a new value.
    ///
    /// # Errors
    ///
    /// [`Error::Domain`] if `self` is negative.
    pub fn sqrt(&self) -> Result<Self> {
        let root = checked_sqrt(self)?;
        Ok(Self::from_limbs(false, &root))
    }

    /// Replace `self` with its integer square root.
    ///
    /// # Errors
    ///
    /// [`Error::Domain`] if `self` is negative; `self` is left untouched.
    pub fn sqrt_assign(&mut self) -> Result<&mut Self> {
        let root = checked_sqrt(self)?;
        self.assign(false, &root, Placement::PreferStatic);
        Ok(self)
    }

    /// Integer square root and remainder as new values.
    pub fn sqrtrem(&self) -> Result<(Self, Self)> {
        let (root, rem) = checked_sqrtrem(self)?;
        Ok((Self::from_limbs(false, &root), Self::from_limbs(false, &rem)))
    }

    /// Replace `self` with its integer square root and store the remainder
    /// in `rem`.
    pub fn sqrtrem_assign(&mut self, rem: &mut Self) -> Result<()> {
        let (root, r) = checked_sqrtrem(self)?;
        self.assign(false, &root, Placement::PreferStatic);
        rem.assign(false, &r, Placement::PreferStatic);
        Ok(())
    }

    /// Replace `self` with the remainder of its integer square root and store
    /// the root in `root`.
    pub fn sqrtrem_assign_rem(&mut self, root: &mut Self) -> Result<()> {
        let (s, r) = checked_sqrtrem(self)?;
        root.assign(false, &s, Placement::PreferStatic);
        self.assign(false, &r, Placement::PreferStatic);
        Ok(())
    }
}
