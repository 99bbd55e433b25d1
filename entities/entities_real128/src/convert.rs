//! Conversions into `Real128`.
//!
//! Machine floats convert exactly. Machine integers convert exactly up to
//! 113 significant bits. Integers, rationals and decimal text are rounded to
//! nearest, ties to even.

use crate::error::{Error, Result};
use crate::real128::Real128;
use crate::round::{round_quotient, round_scaled};
use entities_integer::{u128_limbs, Integer, MachineInt};
use entities_limbs::{mul, mul_1, scratch_zeroed, Limb, Scratch};
use entities_rational::Rational;
use std::str::FromStr;

/// Decimal exponents past which a value is certainly out of range:
/// `10^4933` exceeds the largest finite value and `10^-4966` is below half
/// the smallest subnormal.
const DECIMAL_OVERFLOW: i64 = 4933;
const DECIMAL_UNDERFLOW: i64 = -4966;

/// Largest power of ten in a limb.
const TEN_19: Limb = 10_000_000_000_000_000_000;

impl Real128 {
    /// Nearest binary128 value to `n`.
    pub fn from_integer<const N: usize>(n: &Integer<N>) -> Self {
        round_scaled(n.is_negative(), n.limbs(), 0, false)
    }

    /// Nearest binary128 value to `r`.
    pub fn from_rational<const N: usize>(r: &Rational<N>) -> Self {
        round_quotient(r.num().is_negative(), r.num().limbs(), r.den().limbs())
    }
}

impl<const N: usize> From<&Integer<N>> for Real128 {
    fn from(n: &Integer<N>) -> Self {
        Self::from_integer(n)
    }
}

impl<const N: usize> From<&Rational<N>> for Real128 {
    fn from(r: &Rational<N>) -> Self {
        Self::from_rational(r)
    }
}

impl From<f64> for Real128 {
    fn from(x: f64) -> Self {
        let negative = x.is_sign_negative();
        if x.is_nan() {
            return Real128::NAN.with_sign(negative);
        }
        if x.is_infinite() {
            return Real128::signed_inf(negative);
        }
        let bits = x.to_bits();
        let biased = ((bits >> 52) & 0x7ff) as i64;
        let frac = bits & ((1 << 52) - 1);
        let (mant, exp) = if biased == 0 {
            (frac, -1074)
        } else {
            (frac | (1 << 52), biased - 1075)
        };
        round_scaled(negative, &[mant], exp, false)
    }
}

impl From<f32> for Real128 {
    fn from(x: f32) -> Self {
        Self::from(x as f64)
    }
}

macro_rules! real128_from_machine_int {
    ($($t:ty),*) => {$(
        impl From<$t> for Real128 {
            fn from(value: $t) -> Self {
                let (negative, magnitude) = value.sign_magnitude();
                round_scaled(negative, &u128_limbs(magnitude), 0, false)
            }
        }
    )*};
}

real128_from_machine_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

fn pow10(k: u64) -> Scratch {
    let mut acc = scratch_zeroed(1);
    acc[0] = 1;
    let mut remaining = k;
    while remaining > 0 {
        let step = remaining.min(19);
        let factor = if step == 19 { TEN_19 } else { 10u64.pow(step as u32) };
        let src = acc.clone();
        let hi = mul_1(&mut acc, &src, factor);
        if hi != 0 {
            acc.push(hi);
        }
        remaining -= step;
    }
    acc
}

/// Decimal exponent `[sign]digits`. Values past the `i64` range saturate,
/// which the range clamps then turn into infinity or zero.
fn parse_exponent(text: &str) -> Option<i64> {
    let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(text.parse::<i64>().unwrap_or(if text.starts_with('-') { i64::MIN } else { i64::MAX }))
}

impl FromStr for Real128 {
    type Err = Error;

    /// Parses `[sign]digits[.digits][(e|E)[sign]digits]`, or `inf`,
    /// `infinity` and `nan` in any case.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidString(s.to_string());
        let (negative, body) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };
        if body.eq_ignore_ascii_case("inf") || body.eq_ignore_ascii_case("infinity") {
            return Ok(Real128::signed_inf(negative));
        }
        if body.eq_ignore_ascii_case("nan") {
            return Ok(Real128::NAN.with_sign(negative));
        }

        let (mantissa, exponent) = match body.find(|c: char| c == 'e' || c == 'E') {
            Some(pos) => (&body[..pos], parse_exponent(&body[pos + 1..]).ok_or_else(invalid)?),
            None => (body, 0),
        };
        let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));
        if int_part.is_empty() && frac_part.is_empty() {
            return Err(invalid());
        }
        if !int_part.bytes().chain(frac_part.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let digits = format!("{int_part}{frac_part}");
        let digits = digits.trim_start_matches('0');
        if digits.is_empty() {
            return Ok(Real128::signed_zero(negative));
        }
        // value = digits * 10^scale, and 10^(top - 1) <= value < 10^top
        let scale = exponent.saturating_sub(frac_part.len() as i64);
        let top = scale.saturating_add(digits.len() as i64);
        if top > DECIMAL_OVERFLOW {
            return Ok(Real128::signed_inf(negative));
        }
        if top <= DECIMAL_UNDERFLOW {
            return Ok(Real128::signed_zero(negative));
        }

        let magnitude = Integer::<2>::from_str_radix(digits, 10).map_err(|_| invalid())?;
        let magnitude = magnitude.limbs();
        if scale >= 0 {
            let factor = pow10(scale as u64);
            let mut product = scratch_zeroed(magnitude.len() + factor.len());
            mul(&mut product, magnitude, &factor);
            Ok(round_scaled(negative, &product, 0, false))
        } else {
            Ok(round_quotient(negative, magnitude, &pow10(scale.unsigned_abs())))
        }
    }
}
