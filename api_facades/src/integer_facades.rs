//! Integer Facades
//!
//! Re-exports of `entities_integer` and the common size classes.

pub use entities_integer::{
    add, cmp_signed, divexact, gcd, mul, mul_2exp, sqrt, sqrtrem, sub, tdiv_q_2exp, tdiv_qr, Error as IntegerError,
    Integer, Limb, MachineInt, Mode, Registers, LIMB_BITS,
};

/// Up to 64 bits inline.
pub type Integer1 = Integer<1>;
/// Up to 128 bits inline.
pub type Integer2 = Integer<2>;
pub type Integer3 = Integer<3>;
pub type Integer6 = Integer<6>;
pub type Integer10 = Integer<10>;
