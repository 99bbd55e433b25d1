//! API Facades Layer
//!
//! One import path for every public type and write-into function of the
//! inner layers, plus aliases for the size classes callers use most.
//!
//! ```rust
//! use api_facades::{sqrtrem, Integer1};
//!
//! let mut root = Integer1::new();
//! let mut rem = Integer1::new();
//! sqrtrem(&mut root, &mut rem, &Integer1::from(10)).unwrap();
//! assert_eq!((root.to_string(), rem.to_string()), ("3".into(), "1".into()));
//! ```

pub mod integer_facades;
pub mod rational_facades;
pub mod real128_facades;

pub use integer_facades::*;
pub use rational_facades::*;
pub use real128_facades::*;
