//! Integration tests for entities_integer crate
//!
//! These tests drive `Integer<N>` through its public API and check every
//! result against malachite, for all the size classes in use.

mod common;

use common::{from_reference, maybe_promote, maybe_reset, random_integer, rng, NTRIES};
use entities_integer::{add, gcd, mul, mul_2exp, sub, tdiv_q_2exp, tdiv_qr, Error, Integer};
use malachite::base::num::basic::traits::Zero;
use proptest::prelude::*;
use rand::Rng;
use std::collections::HashSet;
use std::ops::{Add, AddAssign, Sub, SubAssign};

fn check_add_ops<const N: usize>() {
    let n1 = Integer::<N>::from(1);
    let n2 = Integer::<N>::from(-2);
    assert_eq!((-&n2).to_string(), "2");
    assert_eq!((&n1 + &n2).to_string(), "-1");
    assert_eq!((&n1 + 4i8).to_string(), "5");
    assert_eq!((4i8 + &n2).to_string(), "2");
    assert_eq!((&n1 + 4u8).to_string(), "5");
    assert_eq!((4u8 + &n2).to_string(), "2");
    assert_eq!((&n1 + 4i16).to_string(), "5");
    assert_eq!((4i16 + &n2).to_string(), "2");
    assert_eq!((&n1 + 4i32).to_string(), "5");
    assert_eq!((4i32 + &n2).to_string(), "2");
    assert_eq!((&n1 + 4u32).to_string(), "5");
    assert_eq!((4u32 + &n2).to_string(), "2");
    assert_eq!(&n1 + 4.0f32, 5.0f32);
    assert_eq!(4.0f32 + &n2, 2.0f32);
    assert_eq!(&n1 + 4.0f64, 5.0f64);
    assert_eq!(4.0f64 + &n2, 2.0f64);

    let mut retval = Integer::<N>::from(1);
    retval += &n1;
    assert_eq!(retval.to_string(), "2");
    retval += 1;
    assert_eq!(retval.to_string(), "3");
    retval += -1i16;
    assert_eq!(retval.to_string(), "2");
    retval += -1i8;
    assert_eq!(retval.to_string(), "1");
    retval += -5i64;
    assert_eq!(retval.to_string(), "-4");
    retval += 20u64;
    assert_eq!(retval.to_string(), "16");
    retval += 2.5f32;
    assert_eq!(retval.to_string(), "18");
    retval += -3.5f64;
    assert_eq!(retval.to_string(), "14");

    let mut retval = Integer::<N>::new();
    assert_eq!(retval.inc().to_string(), "1");
    assert_eq!(retval.inc().to_string(), "2");
    let mut retval = Integer::<N>::from(-2);
    retval.inc();
    assert_eq!(retval.to_string(), "-1");
    retval.inc();
    assert_eq!(retval.to_string(), "0");
    retval.inc();
    assert_eq!(retval.to_string(), "1");
    assert_eq!(retval.post_inc().to_string(), "1");
    assert_eq!(retval.post_inc().to_string(), "2");
    assert_eq!(retval.post_inc().to_string(), "3");
    assert_eq!(retval, 4);
}

fn check_sub_ops<const N: usize>() {
    let n1 = Integer::<N>::from(1);
    let n2 = Integer::<N>::from(-2);
    assert_eq!((&n1 - &n2).to_string(), "3");
    assert_eq!((&n1 - 4i8).to_string(), "-3");
    assert_eq!((4i8 - &n2).to_string(), "6");
    assert_eq!((&n1 - 4u16).to_string(), "-3");
    assert_eq!((4usize - &n2).to_string(), "6");
    assert_eq!(&n1 - 4.0f32, -3.0f32);
    assert_eq!(4.0f64 - &n2, 6.0f64);

    let mut retval = Integer::<N>::from(1);
    retval -= &n1;
    assert_eq!(retval.to_string(), "0");
    retval -= 1;
    assert_eq!(retval.to_string(), "-1");
    retval -= 20u64;
    assert_eq!(retval.to_string(), "-21");
    retval -= -7i128;
    assert_eq!(retval.to_string(), "-14");
    retval -= 2.5f32;
    assert_eq!(retval.to_string(), "-16");

    let mut retval = Integer::<N>::from(2);
    retval.dec();
    retval.dec();
    retval.dec();
    assert_eq!(retval.to_string(), "-1");
    assert_eq!(retval.post_dec().to_string(), "-1");
    assert_eq!(retval.to_string(), "-2");
}

// Values straddling whole-limb boundaries: 2^64 - 1, (2^128 - 1) and
// (2^192 - 1), each incremented once.
fn check_increment_boundaries<const N: usize>() {
    let max = Integer::<N>::from(u64::MAX);
    let mut retval = max.clone();
    let mut reference = retval.to_reference();
    retval.inc();
    reference += malachite::Integer::from(1);
    assert_eq!(retval.to_string(), reference.to_string());

    let mut retval = max.clone();
    for _ in 0..2 {
        let prev = retval.clone();
        mul_2exp(&mut retval, &prev, 64);
        let prev = retval.clone();
        add(&mut retval, &prev, &max);
        let mut reference = retval.to_reference();
        let mut bumped = retval.clone();
        bumped.post_inc();
        reference += malachite::Integer::from(1);
        assert_eq!(bumped.to_string(), reference.to_string());
        assert!(bumped.is_zero() || bumped.size() > retval.size());
    }
}

fn check_random_arith<const N: usize>(stream: u64) {
    let mut rng = rng(stream);
    let mut rop = Integer::<N>::new();
    for x in 0..=4 {
        for y in 0..=4 {
            for _ in 0..NTRIES / 5 {
                maybe_reset(&mut rop, &mut rng);
                let ma = random_integer(x, &mut rng);
                let mb = random_integer(y, &mut rng);
                let mut a: Integer<N> = from_reference(&ma);
                let mut b: Integer<N> = from_reference(&mb);
                maybe_promote(&mut a, &mut rng);
                maybe_promote(&mut b, &mut rng);

                let was_dynamic = rop.is_dynamic();
                add(&mut rop, &a, &b);
                assert_eq!(rop.to_reference(), &ma + &mb);
                assert!(!was_dynamic || rop.is_dynamic());
                assert!(rop.is_dynamic() || rop.size() <= N);

                sub(&mut rop, &a, &b);
                assert_eq!(rop.to_reference(), &ma - &mb);

                mul(&mut rop, &a, &b);
                assert_eq!(rop.to_reference(), &ma * &mb);

                assert_eq!((&a + &b).to_reference(), &ma + &mb);
                assert_eq!((&a - &b).to_reference(), &ma - &mb);
                assert_eq!((&a * &b).to_reference(), &ma * &mb);

                let mut c = a.clone();
                c += &b;
                assert_eq!(c.to_reference(), &ma + &mb);
                assert_eq!(c.is_dynamic(), a.is_dynamic() || c.size() > N);
            }
        }
    }
}

fn check_random_shifts<const N: usize>(stream: u64) {
    let mut rng = rng(stream);
    let mut rop = Integer::<N>::new();
    for x in 0..=4 {
        for _ in 0..NTRIES {
            let m = random_integer(x, &mut rng);
            let n: Integer<N> = from_reference(&m);
            let s = rng.gen_range(0u64..200);
            mul_2exp(&mut rop, &n, s);
            assert_eq!(rop.to_reference(), &m << s);
            tdiv_q_2exp(&mut rop, &n, s);
            // Truncation toward zero: shift the magnitude, keep the sign.
            let abs = malachite::Integer::from(m.unsigned_abs_ref() >> s);
            let expected = if m < malachite::Integer::ZERO { -abs } else { abs };
            assert_eq!(rop.to_reference(), expected);
        }
    }
}

macro_rules! size_classes {
    ($name:ident, $check:ident) => {
        #[test]
        fn $name() {
            $check::<1>();
            $check::<2>();
            $check::<3>();
            $check::<6>();
            $check::<10>();
        }
    };
    ($name:ident, $check:ident, seeded) => {
        #[test]
        fn $name() {
            $check::<1>(101);
            $check::<2>(102);
            $check::<3>(103);
            $check::<6>(106);
            $check::<10>(110);
        }
    };
}

size_classes!(test_add_operators, check_add_ops);
size_classes!(test_sub_operators, check_sub_ops);
size_classes!(test_increment_boundaries, check_increment_boundaries);
size_classes!(test_random_arithmetic, check_random_arith, seeded);
size_classes!(test_random_shifts, check_random_shifts, seeded);

#[test]
fn test_promotion_and_demotion_round_trip() {
    let mut n = Integer::<2>::from(u128::MAX);
    assert!(n.is_static());
    assert!(n.promote());
    assert!(n.is_dynamic());
    assert!(!n.promote());
    assert!(n.demote());
    assert!(!n.demote());
    n += 1u8;
    assert!(n.is_dynamic());
    assert_eq!(n.size(), 3);
    assert!(!n.demote());
}

#[test]
fn test_write_into_functions_chain() {
    let a = Integer::<1>::from(6);
    let b = Integer::<1>::from(7);
    let mut rop = Integer::<1>::new();
    let out = mul(&mut rop, &a, &b);
    out.inc();
    assert_eq!(rop, 43);
}

#[test]
fn test_hash_set_mixes_modes() {
    let mut set = HashSet::new();
    let a = Integer::<1>::from(99);
    let mut b = a.clone();
    b.promote();
    set.insert(a);
    assert!(!set.insert(b));
    assert!(set.contains(&Integer::from(99)));
}

#[test]
fn test_error_messages() {
    let err = "12x".parse::<Integer<1>>().unwrap_err();
    assert_eq!(err.to_string(), "The string '12x' is not a valid integer in base 10");
    assert_eq!(
        Integer::<1>::try_from(f64::NAN).unwrap_err().to_string(),
        "Cannot construct an integer from the non-finite floating-point value NaN"
    );
}

#[test]
fn test_gcd_and_division_against_reference() {
    use malachite::base::num::arithmetic::traits::{DivRem, Gcd};
    let mut rng = rng(7);
    let mut g = Integer::<2>::new();
    let mut q = Integer::<2>::new();
    let mut r = Integer::<2>::new();
    for _ in 0..NTRIES {
        let ma = random_integer(4, &mut rng);
        let mb = random_integer(3, &mut rng);
        let a: Integer<2> = from_reference(&ma);
        let b: Integer<2> = from_reference(&mb);
        gcd(&mut g, &a, &b);
        assert_eq!(
            g.to_reference(),
            malachite::Integer::from(ma.unsigned_abs_ref().clone().gcd(mb.unsigned_abs_ref().clone()))
        );
        if b.is_zero() {
            assert_eq!(tdiv_qr(&mut q, &mut r, &a, &b), Err(Error::ZeroDivision));
            continue;
        }
        tdiv_qr(&mut q, &mut r, &a, &b).unwrap();
        let (eq, er) = ma.clone().div_rem(mb.clone());
        assert_eq!(q.to_reference(), eq);
        assert_eq!(r.to_reference(), er);
    }
}

type Int3 = Integer<3>;

// Up to five limbs, so values land in both storage modes of `Int3`.
fn multi_limb() -> impl Strategy<Value = Int3> {
    (any::<bool>(), prop::collection::vec(any::<u64>(), 0..6))
        .prop_map(|(negative, limbs)| Int3::from_limbs(negative, &limbs))
}

fn check_machine_round_trip<T>(a: &Int3, b: T)
where
    T: Copy + std::fmt::Debug + for<'x> Add<&'x Int3, Output = Int3>,
    for<'x> &'x Int3: Add<T, Output = Int3>,
    Int3: Sub<T, Output = Int3> + AddAssign<T> + SubAssign<T>,
    malachite::Integer: From<T>,
{
    let sum: Int3 = a + b;
    assert_eq!(sum.to_reference(), a.to_reference() + malachite::Integer::from(b), "{} + {:?}", a, b);
    assert_eq!(sum.clone() - b, *a, "({} + {:?}) - {:?}", a, b, b);
    assert_eq!(b + a, sum);

    let mut c = a.clone();
    c += b;
    c -= b;
    assert_eq!(&c, a);
}

proptest! {
    #[test]
    fn display_matches_reference(v in any::<i128>(), hi in any::<u64>()) {
        let reference = malachite::Integer::from(v) * malachite::Integer::from(hi);
        let n = Integer::<2>::from(v) * hi;
        prop_assert_eq!(n.to_string(), reference.to_string());
        prop_assert_eq!(n.to_string().parse::<Integer<2>>().unwrap(), n.clone());
        prop_assert_eq!(Integer::<2>::from(&reference), n);
    }

    #[test]
    fn machine_comparisons_are_exact(a in any::<i64>(), b in any::<i64>()) {
        let n = Integer::<1>::from(a);
        prop_assert_eq!(n.partial_cmp(&b), a.partial_cmp(&b));
        prop_assert_eq!(b.partial_cmp(&n), b.partial_cmp(&a));
        prop_assert_eq!(n.cmp(&Integer::from(b)), a.cmp(&b));
    }

    #[test]
    fn float_round_trip(x in -1e300f64..1e300f64) {
        let n = Integer::<3>::try_from(x).unwrap();
        prop_assert_eq!(n.to_f64(), x.trunc());
        prop_assert!(n == x.trunc());
    }

    #[test]
    fn mixed_machine_int_add_sub_round_trip(
        a in multi_limb(),
        s in any::<(i8, i16, i32, i64, i128, isize)>(),
        u in any::<(u8, u16, u32, u64, u128, usize)>(),
    ) {
        check_machine_round_trip(&a, s.0);
        check_machine_round_trip(&a, s.1);
        check_machine_round_trip(&a, s.2);
        check_machine_round_trip(&a, s.3);
        check_machine_round_trip(&a, s.4);
        check_machine_round_trip(&a, s.5);
        check_machine_round_trip(&a, u.0);
        check_machine_round_trip(&a, u.1);
        check_machine_round_trip(&a, u.2);
        check_machine_round_trip(&a, u.3);
        check_machine_round_trip(&a, u.4);
        check_machine_round_trip(&a, u.5);
    }

    #[test]
    fn mixed_float_add_sub_yields_float(a in multi_limb(), x in -1e30f64..1e30f64, y in -1e6f32..1e6f32) {
        let sum: f64 = &a + x;
        prop_assert_eq!(sum, a.to_f64() + x);
        let back: f64 = (&a + x) - x;
        prop_assert_eq!(back, (a.to_f64() + x) - x);
        prop_assert_eq!(x + &a, x + a.to_f64());
        prop_assert_eq!(x - &a, x - a.to_f64());

        let sum: f32 = &a + y;
        prop_assert_eq!(sum, a.to_f32() + y);
        prop_assert_eq!(y - a.clone(), y - a.to_f32());
    }
}
