//! Error types for binary128 parsing.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Text that is neither a decimal number nor `inf`/`nan`.
    #[error("The string '{0}' is not a valid quadruple-precision floating-point value")]
    InvalidString(String),
}
