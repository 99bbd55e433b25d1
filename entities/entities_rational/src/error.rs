//! Error types for rational construction.

use thiserror::Error;

/// Result of a fallible rational operation.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A denominator of zero was supplied.
    #[error("Cannot construct a rational with a zero denominator")]
    ZeroDenominator,

    /// Text that is not `numerator` or `numerator/denominator`.
    #[error("The string '{0}' is not a valid rational in base 10")]
    InvalidString(String),

    /// An error from the underlying integers.
    #[error(transparent)]
    Integer(#[from] entities_integer::Error),
}
