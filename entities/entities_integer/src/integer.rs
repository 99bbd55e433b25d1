//! The `Integer<N>` value type.

use crate::promotion::{Mode, Placement};
use crate::storage::Storage;
use entities_limbs::Limb;

/// Signed multiprecision integer with inline storage for up to `N` limbs.
///
/// Values whose magnitude fits in `N` limbs live inside the struct; larger
/// values move to an exactly sized heap buffer. The switch is transparent:
/// every operation produces the same value whatever the operands' modes,
/// and equality, ordering and hashing look only at the value.
///
/// `N` must be at least 1; `Integer<0>` fails to compile as soon as a value
/// of it is constructed.
///
/// # Examples
///
/// ```
/// use entities_integer::Integer;
///
/// let mut n = Integer::<1>::from(u64::MAX);
/// assert!(n.is_static());
/// n += 1u32;
/// assert!(n.is_dynamic());
/// assert_eq!(n.to_string(), "18446744073709551616");
/// ```
#[derive(Clone)]
pub struct Integer<const N: usize> {
    pub(crate) storage: Storage<N>,
}

impl<const N: usize> Integer<N> {
    const CAPACITY_CHECK: () = assert!(N >= 1, "Integer<N> needs a static capacity of at least one limb");

    /// Static capacity in limbs.
    pub const STATIC_LIMBS: usize = N;

    /// Zero, in static storage.
    pub const fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::CAPACITY_CHECK;
        Self {
            storage: Storage::zero(),
        }
    }

    /// Build from a sign and a magnitude (least significant limb first).
    ///
    /// Leading zero limbs are ignored and the value lands in static storage
    /// when it fits.
    pub fn from_limbs(negative: bool, limbs: &[Limb]) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::CAPACITY_CHECK;
        Self {
            storage: Storage::from_limbs(negative, limbs),
        }
    }

    /// Whether the value is stored inline.
    pub fn is_static(&self) -> bool {
        self.storage.mode() == Mode::Static
    }

    /// Whether the value is stored on the heap.
    pub fn is_dynamic(&self) -> bool {
        self.storage.mode() == Mode::Dynamic
    }

    /// Current storage mode.
    pub fn mode(&self) -> Mode {
        self.storage.mode()
    }

    /// Move to dynamic storage. Returns `false` if already dynamic.
    pub fn promote(&mut self) -> bool {
        self.storage.promote()
    }

    /// Move to static storage. Returns `false` if already static or if the
    /// value needs more than `N` limbs.
    pub fn demote(&mut self) -> bool {
        self.storage.demote()
    }

    /// Number of limbs in use; zero for zero.
    pub fn size(&self) -> usize {
        self.storage.limbs().len()
    }

    /// Magnitude limbs, least significant first, normalized.
    pub fn limbs(&self) -> &[Limb] {
        self.storage.limbs()
    }

    /// -1, 0 or 1 according to the sign.
    pub fn sgn(&self) -> i32 {
        if self.is_zero() {
            0
        } else if self.is_negative() {
            -1
        } else {
            1
        }
    }

    pub fn is_zero(&self) -> bool {
        self.storage.limbs().is_empty()
    }

    pub fn is_negative(&self) -> bool {
        self.storage.negative()
    }

    /// Copy `other`'s value into `self`, keeping `self`'s storage mode when
    /// the value allows it.
    pub fn set(&mut self, other: &Self) -> &mut Self {
        self.assign(other.is_negative(), other.limbs(), Placement::KeepMode);
        self
    }

    /// Overwrite the value with a computed sign and magnitude.
    pub(crate) fn assign(&mut self, negative: bool, limbs: &[Limb], placement: Placement) {
        self.storage.commit(negative, limbs, placement);
    }
}

impl<const N: usize> Default for Integer<N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use entities_limbs::LIMB_MAX;

    #[test]
    fn test_new_is_static_zero() {
        let n = Integer::<1>::new();
        assert!(n.is_static());
        assert!(n.is_zero());
        assert_eq!(n.size(), 0);
        assert_eq!(n.sgn(), 0);
        assert_eq!(Integer::<3>::default().limbs(), &[] as &[Limb]);
    }

    #[test]
    fn test_from_limbs_mode() {
        let n = Integer::<2>::from_limbs(true, &[1, 2, 0]);
        assert!(n.is_static());
        assert_eq!(n.size(), 2);
        assert_eq!(n.sgn(), -1);

        let big = Integer::<2>::from_limbs(false, &[1, 2, 3]);
        assert!(big.is_dynamic());
        assert_eq!(big.size(), 3);
    }

    #[test]
    fn test_set_keeps_destination_mode() {
        let mut dst = Integer::<2>::from_limbs(false, &[LIMB_MAX]);
        dst.promote();
        dst.set(&Integer::from_limbs(true, &[4]));
        assert!(dst.is_dynamic());
        assert_eq!(dst.limbs(), &[4]);
        assert!(dst.is_negative());
    }

    #[test]
    fn test_static_limbs_constant() {
        assert_eq!(Integer::<6>::STATIC_LIMBS, 6);
    }
}
