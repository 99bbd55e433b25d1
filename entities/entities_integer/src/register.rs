//! Register File
//!
//! A fixed set of integer slots addressed by index. Every write-into kernel
//! is available with slot arguments, and any slot may name the same integer
//! as any other: `add(0, 0, 0)` doubles slot 0 in place. This is how
//! overlapping destination/source calls are expressed without aliasing
//! references.

use crate::arith::{difference, product, shifted_left, shifted_right, sum, SignedLimbs};
use crate::error::{Error, Result};
use crate::integer::Integer;
use crate::promotion::Placement;
use crate::roots::{checked_sqrt, checked_sqrtrem, SQRTREM_ALIAS_MESSAGE};

/// Indexed integer registers.
#[derive(Debug, Clone)]
pub struct Registers<const N: usize> {
    slots: Vec<Integer<N>>,
}

impl<const N: usize> Registers<N> {
    /// `count` registers, all zero.
    pub fn new(count: usize) -> Self {
        Self {
            slots: vec![Integer::new(); count],
        }
    }

    /// Registers holding `values`, in order.
    pub fn from_values(values: Vec<Integer<N>>) -> Self {
        Self { slots: values }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    fn check(&self, slot: usize) -> Result<usize> {
        if slot < self.slots.len() {
            Ok(slot)
        } else {
            Err(Error::InvalidArgument(format!(
                "Register slot {} is out of range for a file of {} registers",
                slot,
                self.slots.len()
            )))
        }
    }

    /// The integer in `slot`.
    pub fn get(&self, slot: usize) -> Result<&Integer<N>> {
        let slot = self.check(slot)?;
        Ok(&self.slots[slot])
    }

    /// Mutable access to the integer in `slot`.
    pub fn get_mut(&mut self, slot: usize) -> Result<&mut Integer<N>> {
        let slot = self.check(slot)?;
        Ok(&mut self.slots[slot])
    }

    /// Store `value` in `slot`.
    pub fn set(&mut self, slot: usize, value: Integer<N>) -> Result<()> {
        *self.get_mut(slot)? = value;
        Ok(())
    }

    /// Take the registers back out.
    pub fn into_values(self) -> Vec<Integer<N>> {
        self.slots
    }

    fn binary(
        &mut self,
        dst: usize,
        a: usize,
        b: usize,
        compute: fn(&Integer<N>, &Integer<N>) -> SignedLimbs,
    ) -> Result<()> {
        let dst = self.check(dst)?;
        let r = compute(self.get(a)?, self.get(b)?);
        r.commit_into(&mut self.slots[dst], Placement::KeepMode);
        Ok(())
    }

    /// `dst = a + b`.
    pub fn add(&mut self, dst: usize, a: usize, b: usize) -> Result<()> {
        self.binary(dst, a, b, sum)
    }

    /// `dst = a - b`.
    pub fn sub(&mut self, dst: usize, a: usize, b: usize) -> Result<()> {
        self.binary(dst, a, b, difference)
    }

    /// `dst = a * b`.
    pub fn mul(&mut self, dst: usize, a: usize, b: usize) -> Result<()> {
        self.binary(dst, a, b, product)
    }

    /// `dst = src * 2^s`.
    pub fn mul_2exp(&mut self, dst: usize, src: usize, s: u64) -> Result<()> {
        let dst = self.check(dst)?;
        let r = shifted_left(self.get(src)?, s);
        r.commit_into(&mut self.slots[dst], Placement::KeepMode);
        Ok(())
    }

    /// `dst = src / 2^s`, truncated toward zero.
    pub fn tdiv_q_2exp(&mut self, dst: usize, src: usize, s: u64) -> Result<()> {
        let dst = self.check(dst)?;
        let r = shifted_right(self.get(src)?, s);
        r.commit_into(&mut self.slots[dst], Placement::KeepMode);
        Ok(())
    }

    /// `dst = floor(sqrt(src))`.
    ///
    /// # Errors
    ///
    /// [`Error::Domain`] if `src` is negative; no register is modified.
    pub fn sqrt(&mut self, dst: usize, src: usize) -> Result<()> {
        let dst = self.check(dst)?;
        let root = checked_sqrt(self.get(src)?)?;
        self.slots[dst].assign(false, &root, Placement::PreferStatic);
        Ok(())
    }

    /// `root = floor(sqrt(src))`, `rem = src - root^2`.
    ///
    /// `src` may be the same slot as `root` or `rem`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if `root == rem`, checked before anything
    /// else; [`Error::Domain`] if `src` is negative. No register is modified
    /// on error.
    pub fn sqrtrem(&mut self, root: usize, rem: usize, src: usize) -> Result<()> {
        if root == rem {
            return Err(Error::InvalidArgument(SQRTREM_ALIAS_MESSAGE.to_string()));
        }
        let root = self.check(root)?;
        let rem = self.check(rem)?;
        let (s, r) = checked_sqrtrem(self.get(src)?)?;
        self.slots[root].assign(false, &s, Placement::PreferStatic);
        self.slots[rem].assign(false, &r, Placement::PreferStatic);
        Ok(())
    }
}
