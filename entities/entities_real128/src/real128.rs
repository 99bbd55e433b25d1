//! Quadruple-Precision Values
//!
//! `Real128` stores the bit pattern of an IEEE 754 binary128 number: one
//! sign bit, 15 exponent bits and 112 fraction bits. Arithmetic is not
//! provided. Values come from conversions that round to nearest, ties to
//! even, and are consumed by comparisons and text output.
//!
//! # Examples
//!
//! ```rust
//! use entities_real128::Real128;
//!
//! let x: Real128 = "1.5".parse().unwrap();
//! assert_eq!(x.to_string(), "0x1.8p+0");
//! assert!(x == Real128::from(1.5f64));
//! ```

use std::fmt;

pub(crate) const SIGN_MASK: u128 = 1 << 127;
pub(crate) const FRAC_BITS: u32 = 112;
pub(crate) const FRAC_MASK: u128 = (1 << FRAC_BITS) - 1;
pub(crate) const EXP_BIAS: i64 = 16383;
pub(crate) const EXP_MAX_BIASED: u128 = 0x7fff;
const EXP_MASK: u128 = EXP_MAX_BIASED << FRAC_BITS;
const QUIET_BIT: u128 = 1 << (FRAC_BITS - 1);

/// Exponent of the highest bit of the largest finite value.
pub(crate) const MAX_EXP: i64 = EXP_BIAS;

/// Exponent of the lowest bit of every subnormal.
pub(crate) const MIN_SUBNORMAL_EXP: i64 = 1 - EXP_BIAS - FRAC_BITS as i64;

/// An IEEE 754 binary128 value, held as its bit pattern.
#[derive(Clone, Copy, Default)]
pub struct Real128 {
    bits: u128,
}

/// Positive infinity.
pub const fn real128_inf() -> Real128 {
    Real128::INFINITY
}

/// A quiet NaN with the sign bit clear.
pub const fn real128_nan() -> Real128 {
    Real128::NAN
}

impl Real128 {
    pub const ZERO: Real128 = Real128 { bits: 0 };
    pub const INFINITY: Real128 = Real128 { bits: EXP_MASK };
    pub const NAN: Real128 = Real128 {
        bits: EXP_MASK | QUIET_BIT,
    };

    pub const fn from_bits(bits: u128) -> Self {
        Self { bits }
    }

    pub const fn to_bits(self) -> u128 {
        self.bits
    }

    pub const fn is_nan(self) -> bool {
        self.bits & EXP_MASK == EXP_MASK && self.bits & FRAC_MASK != 0
    }

    pub const fn is_inf(self) -> bool {
        self.bits & !SIGN_MASK == EXP_MASK
    }

    pub const fn is_finite(self) -> bool {
        self.bits & EXP_MASK != EXP_MASK
    }

    /// Whether the sign bit is set. True for `-0` and for negative NaNs.
    pub const fn signbit(self) -> bool {
        self.bits & SIGN_MASK != 0
    }

    pub const fn is_zero(self) -> bool {
        self.bits & !SIGN_MASK == 0
    }

    pub(crate) const fn signed_zero(negative: bool) -> Self {
        Self::with_sign(Self::ZERO, negative)
    }

    pub(crate) const fn signed_inf(negative: bool) -> Self {
        Self::with_sign(Self::INFINITY, negative)
    }

    pub(crate) const fn with_sign(self, negative: bool) -> Self {
        let magnitude = self.bits & !SIGN_MASK;
        Self {
            bits: if negative { magnitude | SIGN_MASK } else { magnitude },
        }
    }

    const fn biased_exponent(self) -> u128 {
        (self.bits & EXP_MASK) >> FRAC_BITS
    }

    /// Assemble a finite value `sig * 2^lsb`.
    ///
    /// `sig` has at most 113 bits. A 113-bit `sig` is a normal number; a
    /// shorter one is only valid with `lsb == MIN_SUBNORMAL_EXP`. Exponents
    /// past the largest finite value give infinity.
    pub(crate) fn from_parts(negative: bool, sig: u128, lsb: i64) -> Self {
        debug_assert!(sig >> (FRAC_BITS + 1) == 0);
        if sig >> FRAC_BITS == 0 {
            debug_assert!(sig == 0 || lsb == MIN_SUBNORMAL_EXP);
            return Self::from_bits(sig).with_sign(negative);
        }
        let biased = lsb + FRAC_BITS as i64 + EXP_BIAS;
        if biased >= EXP_MAX_BIASED as i64 {
            return Self::signed_inf(negative);
        }
        Self::from_bits(((biased as u128) << FRAC_BITS) | (sig & FRAC_MASK)).with_sign(negative)
    }

    /// Split a finite value into `(negative, sig, exp)` with
    /// `|self| == sig * 2^exp`. Zero has `sig == 0`.
    pub(crate) fn decompose(self) -> (bool, u128, i64) {
        debug_assert!(self.is_finite());
        let frac = self.bits & FRAC_MASK;
        let biased = self.biased_exponent();
        if biased == 0 {
            (self.signbit(), frac, MIN_SUBNORMAL_EXP)
        } else {
            (
                self.signbit(),
                frac | (1 << FRAC_BITS),
                biased as i64 - EXP_BIAS - FRAC_BITS as i64,
            )
        }
    }
}

impl std::ops::Neg for Real128 {
    type Output = Real128;

    fn neg(self) -> Real128 {
        Real128 {
            bits: self.bits ^ SIGN_MASK,
        }
    }
}

impl std::ops::Neg for &Real128 {
    type Output = Real128;

    fn neg(self) -> Real128 {
        -*self
    }
}

/// Hexadecimal floating notation, as in `0x1.8p+0`, with trailing zero
/// digits dropped. Subnormals print as `0x0.<digits>p-16382`.
impl fmt::Display for Real128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.signbit() { "-" } else { "" };
        if self.is_nan() {
            return write!(f, "{sign}nan");
        }
        if self.is_inf() {
            return write!(f, "{sign}inf");
        }
        let frac = self.bits & FRAC_MASK;
        let biased = self.biased_exponent() as i64;
        let (lead, exp) = match (biased, frac) {
            (0, 0) => (0, 0),
            (0, _) => (0, 1 - EXP_BIAS),
            _ => (1, biased - EXP_BIAS),
        };
        write!(f, "{sign}0x{lead}")?;
        if frac != 0 {
            let digits = format!("{:028x}", frac);
            write!(f, ".{}", digits.trim_end_matches('0'))?;
        }
        write!(f, "p{:+}", exp)
    }
}

impl fmt::Debug for Real128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
