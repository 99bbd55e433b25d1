//! Binary128 Facades

pub use entities_real128::{
    real128_equal_to, real128_inf, real128_less_than, real128_nan, Complex128, Error as Real128Error, Real128,
};
