//! Error types for integer operations.

use thiserror::Error;

/// Result of a fallible integer operation.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by integer construction and arithmetic.
///
/// All errors are detected before the destination of an operation is
/// written, so a failed call never leaves a half-updated value behind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The operand is outside the mathematical domain of the operation,
    /// e.g. the square root of a negative number.
    #[error("{0}")]
    Domain(String),

    /// A structural precondition on the arguments was violated, e.g. the
    /// root and remainder outputs of a square root are the same slot.
    #[error("{0}")]
    InvalidArgument(String),

    /// Text that is not an integer in the requested base.
    #[error("The string '{text}' is not a valid integer in base {radix}")]
    InvalidString { text: String, radix: u32 },

    /// Division by zero.
    #[error("Integer division by zero")]
    ZeroDivision,
}
