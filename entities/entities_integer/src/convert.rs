//! Conversions: machine integers, floats, text and the reference view.

use crate::error::{Error, Result};
use crate::integer::Integer;
use entities_limbs::{
    add_1, bit_length, divrem_1, extract_bits, has_bits_below, mul_1, normalized_len, scratch_zeroed, shl_bits,
    Limb, Scratch, LIMB_BITS,
};
use malachite::base::num::basic::traits::Zero;
use malachite::Natural;
use std::fmt;
use std::str::FromStr;

/// Machine integer types that convert exactly to and compare exactly with
/// multiprecision values.
pub trait MachineInt: Copy {
    /// `(is_negative, |self|)`.
    fn sign_magnitude(self) -> (bool, u128);
}

macro_rules! machine_int_signed {
    ($($t:ty),*) => {$(
        impl MachineInt for $t {
            fn sign_magnitude(self) -> (bool, u128) {
                (self < 0, (self as i128).unsigned_abs())
            }
        }
    )*};
}

macro_rules! machine_int_unsigned {
    ($($t:ty),*) => {$(
        impl MachineInt for $t {
            fn sign_magnitude(self) -> (bool, u128) {
                (false, self as u128)
            }
        }
    )*};
}

machine_int_signed!(i8, i16, i32, i64, i128, isize);
machine_int_unsigned!(u8, u16, u32, u64, u128, usize);

/// A `u128` magnitude as two limbs, least significant first.
pub fn u128_limbs(m: u128) -> [Limb; 2] {
    [m as Limb, (m >> LIMB_BITS) as Limb]
}

macro_rules! integer_from_machine {
    ($($t:ty),*) => {$(
        impl<const N: usize> From<$t> for Integer<N> {
            fn from(value: $t) -> Self {
                let (negative, magnitude) = value.sign_magnitude();
                Integer::from_limbs(negative, &u128_limbs(magnitude))
            }
        }
    )*};
}

integer_from_machine!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Sign and truncated magnitude of a finite `f64`.
pub(crate) fn truncate_f64(x: f64) -> (bool, Scratch) {
    let bits = x.to_bits();
    let negative = bits >> 63 != 0;
    let biased = ((bits >> 52) & 0x7ff) as i64;
    if biased == 0 {
        // Zero or subnormal: |x| < 1.
        return (negative, Scratch::new());
    }
    let mantissa = (bits & ((1 << 52) - 1)) | (1 << 52);
    let exp = biased - 1075;
    let limbs = if exp >= 0 {
        shl_bits(&[mantissa], exp as u64)
    } else if exp > -64 {
        [mantissa >> -exp].into_iter().collect()
    } else {
        Scratch::new()
    };
    (negative, limbs)
}

fn non_finite_error(x: impl fmt::Display) -> Error {
    Error::Domain(format!(
        "Cannot construct an integer from the non-finite floating-point value {}",
        x
    ))
}

impl<const N: usize> TryFrom<f64> for Integer<N> {
    type Error = Error;

    /// Truncates toward zero.
    fn try_from(x: f64) -> Result<Self> {
        if !x.is_finite() {
            return Err(non_finite_error(x));
        }
        let (negative, limbs) = truncate_f64(x);
        Ok(Integer::from_limbs(negative, &limbs))
    }
}

impl<const N: usize> TryFrom<f32> for Integer<N> {
    type Error = Error;

    fn try_from(x: f32) -> Result<Self> {
        if !x.is_finite() {
            return Err(non_finite_error(x));
        }
        let (negative, limbs) = truncate_f64(x as f64);
        Ok(Integer::from_limbs(negative, &limbs))
    }
}

/// The 64 most significant bits of a non-zero magnitude, with a sticky bit
/// for anything below them, and the power of two they are scaled by.
fn leading_bits(limbs: &[Limb]) -> (u64, u64) {
    let len = bit_length(limbs);
    if len <= 64 {
        return (limbs.first().copied().unwrap_or(0), 0);
    }
    let shift = len - 64;
    let mut top = extract_bits(limbs, shift, 64) as u64;
    if has_bits_below(limbs, shift) {
        top |= 1;
    }
    (top, shift)
}

fn pow2_f64(e: u64) -> f64 {
    if e > 1023 {
        f64::INFINITY
    } else {
        f64::from_bits((e + 1023) << 52)
    }
}

fn pow2_f32(e: u64) -> f32 {
    if e > 127 {
        f32::INFINITY
    } else {
        f32::from_bits(((e + 127) as u32) << 23)
    }
}

impl<const N: usize> Integer<N> {
    /// Nearest `f64`, ties to even; infinite past `f64::MAX`.
    pub fn to_f64(&self) -> f64 {
        // The sticky bit sits well below the 53-bit rounding position, so
        // the u64 -> f64 conversion rounds as the full value would.
        let (top, shift) = leading_bits(self.limbs());
        let magnitude = top as f64 * pow2_f64(shift);
        if self.is_negative() {
            -magnitude
        } else {
            magnitude
        }
    }

    /// Nearest `f32`, ties to even; infinite past `f32::MAX`.
    pub fn to_f32(&self) -> f32 {
        let (top, shift) = leading_bits(self.limbs());
        let magnitude = top as f32 * pow2_f32(shift);
        if self.is_negative() {
            -magnitude
        } else {
            magnitude
        }
    }

    /// The value as an `i64`, if it fits.
    pub fn to_i64(&self) -> Option<i64> {
        let m = match self.limbs() {
            [] => return Some(0),
            [m] => *m,
            _ => return None,
        };
        if !self.is_negative() {
            i64::try_from(m).ok()
        } else if m <= 1 << 63 {
            Some((m as i64).wrapping_neg())
        } else {
            None
        }
    }

    /// The value as a `u64`, if it fits.
    pub fn to_u64(&self) -> Option<u64> {
        if self.is_negative() {
            return None;
        }
        match self.limbs() {
            [] => Some(0),
            [m] => Some(*m),
            _ => None,
        }
    }

    /// Parse an optionally signed integer in `radix` (2 to 36).
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] for an unsupported radix,
    /// [`Error::InvalidString`] for anything that is not a sign followed
    /// by at least one digit.
    pub fn from_str_radix(s: &str, radix: u32) -> Result<Self> {
        if !(2..=36).contains(&radix) {
            return Err(Error::InvalidArgument(format!(
                "Cannot parse an integer in base {}: the base must be between 2 and 36",
                radix
            )));
        }
        let invalid = || Error::InvalidString {
            text: s.to_string(),
            radix,
        };
        let (negative, digits) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };
        let magnitude = parse_magnitude(digits, radix).ok_or_else(invalid)?;
        Ok(Integer::from_limbs(negative, &magnitude))
    }

    /// Exact copy as a `malachite::Integer`.
    pub fn to_reference(&self) -> malachite::Integer {
        let abs = Natural::from_limbs_asc(self.limbs());
        malachite::Integer::from_sign_and_abs(!self.is_negative(), abs)
    }
}

/// Largest `k` with `radix^k` fitting a limb, and that power.
fn chunk_params(radix: u32) -> (usize, Limb) {
    let mut k = 0;
    let mut power: Limb = 1;
    while let Some(next) = power.checked_mul(radix as Limb) {
        power = next;
        k += 1;
    }
    (k, power)
}

/// `acc * scale + addend`, normalized.
fn mul_add_1(acc: &[Limb], scale: Limb, addend: Limb) -> Scratch {
    let n = acc.len();
    let mut product = scratch_zeroed(n + 1);
    let hi = mul_1(&mut product, acc, scale);
    product[n] = hi;
    let mut out = scratch_zeroed(n + 2);
    let carry = add_1(&mut out, &product, addend);
    out[n + 1] = carry;
    out.truncate(normalized_len(&out));
    out
}

fn parse_magnitude(digits: &str, radix: u32) -> Option<Scratch> {
    if digits.is_empty() || !digits.is_ascii() {
        return None;
    }
    let (chunk, _) = chunk_params(radix);
    let bytes = digits.as_bytes();
    let head = match bytes.len() % chunk {
        0 => chunk,
        r => r,
    };
    let mut acc = Scratch::new();
    let mut start = 0;
    let mut end = head;
    while start < bytes.len() {
        let mut value: Limb = 0;
        let mut scale: Limb = 1;
        for &b in &bytes[start..end] {
            let d = (b as char).to_digit(radix)?;
            value = value * radix as Limb + d as Limb;
            scale *= radix as Limb;
        }
        acc = mul_add_1(&acc, scale, value);
        start = end;
        end += chunk;
    }
    Some(acc)
}

const DECIMAL_CHUNK: Limb = 10_000_000_000_000_000_000;

fn decimal_digits(limbs: &[Limb]) -> String {
    if limbs.is_empty() {
        return "0".to_string();
    }
    let mut chunks = Vec::new();
    let mut cur: Scratch = limbs.iter().copied().collect();
    while !cur.is_empty() {
        let mut q = scratch_zeroed(cur.len());
        chunks.push(divrem_1(&mut q, &cur, DECIMAL_CHUNK));
        q.truncate(normalized_len(&q));
        cur = q;
    }
    let mut out = String::with_capacity(chunks.len() * 19);
    let mut rest = chunks.iter().rev();
    if let Some(first) = rest.next() {
        out.push_str(&first.to_string());
    }
    for c in rest {
        out.push_str(&format!("{:019}", c));
    }
    out
}

impl<const N: usize> FromStr for Integer<N> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_radix(s, 10)
    }
}

impl<const N: usize> fmt::Display for Integer<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.is_negative(), "", &decimal_digits(self.limbs()))
    }
}

impl<const N: usize> fmt::Debug for Integer<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Integer")
            .field("value", &format_args!("{}", self))
            .field("mode", &self.mode())
            .finish()
    }
}

impl<const N: usize> From<&malachite::Integer> for Integer<N> {
    fn from(value: &malachite::Integer) -> Self {
        let limbs = value.unsigned_abs_ref().to_limbs_asc();
        Integer::from_limbs(*value < malachite::Integer::ZERO, &limbs)
    }
}
