//! Static/dynamic limb storage and the switch between them.
//!
//! A value lives either inline ([`StaticInt`], at most `N` limbs, no heap)
//! or in an exactly sized heap buffer ([`DynamicInt`]). [`Storage`] is the
//! tagged union of the two; only one representation is ever valid.
//!
//! Invariants maintained by every constructor and by [`Storage::commit`]:
//!
//! - the used limbs are normalized (no leading zero limb);
//! - zero has no used limbs and is non-negative;
//! - static limbs past the used length are zero;
//! - a dynamic buffer holds exactly the used limbs.

use crate::promotion::{Mode, Placement};
use entities_limbs::{normalized, Limb};
use log::{debug, trace};

/// Inline storage of up to `N` limbs.
#[derive(Debug, Clone)]
pub struct StaticInt<const N: usize> {
    negative: bool,
    len: usize,
    limbs: [Limb; N],
}

impl<const N: usize> StaticInt<N> {
    /// Zero.
    pub const fn zero() -> Self {
        Self {
            negative: false,
            len: 0,
            limbs: [0; N],
        }
    }

    /// Build from a normalized magnitude of at most `N` limbs.
    fn from_limbs(negative: bool, limbs: &[Limb]) -> Self {
        let mut out = Self::zero();
        out.overwrite(negative, limbs);
        out
    }

    /// Replace the value in place, zeroing limbs left over from a longer
    /// previous value.
    fn overwrite(&mut self, negative: bool, limbs: &[Limb]) {
        debug_assert!(limbs.len() <= N);
        self.limbs[..limbs.len()].copy_from_slice(limbs);
        let stale = self.len.max(limbs.len());
        self.limbs[limbs.len()..stale].iter_mut().for_each(|x| *x = 0);
        self.len = limbs.len();
        self.negative = negative && !limbs.is_empty();
    }

    /// Used limbs.
    pub fn limbs(&self) -> &[Limb] {
        &self.limbs[..self.len]
    }

    /// The full inline array, including the zeroed unused limbs.
    pub fn raw_limbs(&self) -> &[Limb; N] {
        &self.limbs
    }
}

/// Heap storage holding exactly the used limbs.
#[derive(Debug, Clone)]
pub struct DynamicInt {
    negative: bool,
    limbs: Box<[Limb]>,
}

impl DynamicInt {
    fn from_limbs(negative: bool, limbs: &[Limb]) -> Self {
        Self {
            negative: negative && !limbs.is_empty(),
            limbs: limbs.into(),
        }
    }

    fn overwrite(&mut self, negative: bool, limbs: &[Limb]) {
        if self.limbs.len() == limbs.len() {
            self.limbs.copy_from_slice(limbs);
        } else {
            self.limbs = limbs.into();
        }
        self.negative = negative && !limbs.is_empty();
    }

    /// Used limbs; the buffer has no slack.
    pub fn limbs(&self) -> &[Limb] {
        &self.limbs
    }
}

/// Tagged union of the two representations.
#[derive(Debug, Clone)]
pub enum Storage<const N: usize> {
    /// Inline representation.
    Static(StaticInt<N>),
    /// Heap representation.
    Dynamic(DynamicInt),
}

impl<const N: usize> Storage<N> {
    /// Zero in static storage.
    pub const fn zero() -> Self {
        Storage::Static(StaticInt::zero())
    }

    /// Storage for a magnitude, static whenever it fits.
    pub fn from_limbs(negative: bool, limbs: &[Limb]) -> Self {
        let limbs = normalized(limbs);
        if limbs.len() <= N {
            Storage::Static(StaticInt::from_limbs(negative, limbs))
        } else {
            Storage::Dynamic(DynamicInt::from_limbs(negative, limbs))
        }
    }

    /// Current mode.
    pub fn mode(&self) -> Mode {
        match self {
            Storage::Static(_) => Mode::Static,
            Storage::Dynamic(_) => Mode::Dynamic,
        }
    }

    /// Used limbs, least significant first.
    pub fn limbs(&self) -> &[Limb] {
        match self {
            Storage::Static(s) => s.limbs(),
            Storage::Dynamic(d) => d.limbs(),
        }
    }

    /// Whether the value is negative.
    pub fn negative(&self) -> bool {
        match self {
            Storage::Static(s) => s.negative,
            Storage::Dynamic(d) => d.negative,
        }
    }

    /// Flip the sign of a non-zero value.
    pub fn negate(&mut self) {
        let nonzero = !self.limbs().is_empty();
        match self {
            Storage::Static(s) => s.negative = !s.negative && nonzero,
            Storage::Dynamic(d) => d.negative = !d.negative && nonzero,
        }
    }

    /// Write a computed result, choosing the final mode with `placement`.
    ///
    /// `limbs` need not be normalized. This is the only place a kernel
    /// result enters a destination, and it runs after all computation is
    /// done, so a destination is never left half-written.
    pub fn commit(&mut self, negative: bool, limbs: &[Limb], placement: Placement) {
        let limbs = normalized(limbs);
        let target = placement.target(self.mode(), limbs.len(), N);
        match self {
            Storage::Static(s) if target == Mode::Static => s.overwrite(negative, limbs),
            Storage::Dynamic(d) if target == Mode::Dynamic => d.overwrite(negative, limbs),
            Storage::Dynamic(_) => {
                trace!("demoting {}-limb result into static storage (capacity {})", limbs.len(), N);
                *self = Storage::Static(StaticInt::from_limbs(negative, limbs));
            }
            Storage::Static(_) => {
                debug!("promoting {}-limb result to dynamic storage (capacity {})", limbs.len(), N);
                *self = Storage::Dynamic(DynamicInt::from_limbs(negative, limbs));
            }
        }
    }

    /// Move a static value to the heap. Returns `false` if already dynamic.
    pub fn promote(&mut self) -> bool {
        match self {
            Storage::Static(s) => {
                trace!("promoting {}-limb value to dynamic storage", s.len);
                *self = Storage::Dynamic(DynamicInt::from_limbs(s.negative, s.limbs()));
                true
            }
            Storage::Dynamic(_) => false,
        }
    }

    /// Move a dynamic value inline. Returns `false` if already static or if
    /// the value needs more than `N` limbs.
    pub fn demote(&mut self) -> bool {
        match self {
            Storage::Dynamic(d) if d.limbs.len() <= N => {
                trace!("demoting {}-limb value to static storage", d.limbs.len());
                *self = Storage::Static(StaticInt::from_limbs(d.negative, &d.limbs));
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use entities_limbs::LIMB_MAX;

    #[test]
    fn test_from_limbs_selects_mode() {
        assert_eq!(Storage::<2>::from_limbs(false, &[1, 2]).mode(), Mode::Static);
        assert_eq!(Storage::<2>::from_limbs(false, &[1, 2, 3]).mode(), Mode::Dynamic);
        // Leading zeros do not count towards the size.
        assert_eq!(Storage::<2>::from_limbs(false, &[1, 2, 0, 0]).mode(), Mode::Static);
    }

    #[test]
    fn test_zero_is_never_negative() {
        let s = Storage::<1>::from_limbs(true, &[0]);
        assert!(!s.negative());
        assert!(s.limbs().is_empty());

        let mut s = Storage::<1>::zero();
        s.negate();
        assert!(!s.negative());
    }

    #[test]
    fn test_commit_zeroes_stale_high_limbs() {
        let mut s = Storage::<3>::from_limbs(false, &[LIMB_MAX, LIMB_MAX, LIMB_MAX]);
        s.commit(false, &[7], Placement::KeepMode);
        match &s {
            Storage::Static(st) => assert_eq!(st.raw_limbs(), &[7, 0, 0]),
            Storage::Dynamic(_) => panic!("expected static storage"),
        }
    }

    #[test]
    fn test_commit_promotes_and_demotes() {
        let mut s = Storage::<1>::zero();
        s.commit(false, &[1, 1], Placement::KeepMode);
        assert_eq!(s.mode(), Mode::Dynamic);

        // KeepMode leaves a dynamic value on the heap even if it fits.
        s.commit(true, &[5], Placement::KeepMode);
        assert_eq!(s.mode(), Mode::Dynamic);
        assert_eq!(s.limbs(), &[5]);
        assert!(s.negative());

        s.commit(false, &[5], Placement::PreferStatic);
        assert_eq!(s.mode(), Mode::Static);
    }

    #[test]
    fn test_dynamic_buffer_is_exact() {
        let mut s = Storage::<1>::from_limbs(false, &[1, 2, 3, 4]);
        s.commit(false, &[1, 2], Placement::KeepMode);
        match &s {
            Storage::Dynamic(d) => assert_eq!(d.limbs.len(), 2),
            Storage::Static(_) => panic!("expected dynamic storage"),
        }
    }

    #[test]
    fn test_promote_demote() {
        let mut s = Storage::<2>::from_limbs(true, &[9]);
        assert!(s.promote());
        assert!(!s.promote());
        assert_eq!(s.mode(), Mode::Dynamic);
        assert!(s.negative());
        assert!(s.demote());
        assert!(!s.demote());
        assert_eq!(s.limbs(), &[9]);

        let mut big = Storage::<2>::from_limbs(false, &[1, 2, 3]);
        assert!(!big.demote());
    }
}
