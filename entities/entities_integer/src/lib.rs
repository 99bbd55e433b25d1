//! Entities Layer: Multiprecision Integers
//!
//! `Integer<N>` is a signed arbitrary-precision integer that keeps values of
//! up to `N` limbs inline and moves larger ones to an exactly sized heap
//! buffer. The limb arithmetic itself lives in `entities_limbs`; this crate
//! adds signs, the static/dynamic storage switch and the public API.
//!
//! ## Modules
//!
//! - [`storage`]: the two representations and the switch between them
//! - [`promotion`]: which mode a computed result is written in
//! - [`integer`]: the `Integer<N>` type and its storage queries
//! - [`arith`]: add, sub, mul, power-of-two scaling, increment/decrement
//! - [`roots`]: square root with and without remainder
//! - [`division`]: truncating and exact division, gcd
//! - [`convert`]: machine numbers, text and the reference view
//! - [`cmp`]: equality, ordering, hashing and mixed comparisons
//! - [`ops`]: operator overloads
//! - [`register`]: slot-addressed kernels for overlapping arguments
//!
//! ## Write-into functions
//!
//! Free functions take the destination first, as in `add(&mut rop, &a, &b)`,
//! and return it for chaining. A destination cannot be borrowed as a source
//! at the same time; use the in-place methods (`+=`, `sqrt_assign`,
//! `sqrtrem_assign`) or [`Registers`] when an operand is also the output.

pub mod arith;
pub mod cmp;
pub mod convert;
pub mod division;
pub mod error;
pub mod integer;
pub mod ops;
pub mod promotion;
pub mod register;
pub mod roots;
pub mod storage;

pub use arith::{add, mul, mul_2exp, sub, tdiv_q_2exp};
pub use cmp::cmp_signed;
pub use convert::{u128_limbs, MachineInt};
pub use division::{divexact, gcd, tdiv_qr};
pub use entities_limbs::{Limb, LIMB_BITS};
pub use error::{Error, Result};
pub use integer::Integer;
pub use promotion::{Mode, Placement};
pub use register::Registers;
pub use roots::{sqrt, sqrtrem};
