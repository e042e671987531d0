//! Extension trait for lifting a `Result` into a [`Try`].
//!
//! # Examples
//!
//! ```
//! use try_rail::traits::IntoTry;
//!
//! let outcome = "42".parse::<i32>().into_try();
//! assert_eq!(outcome.get_or_else(0), 42);
//! ```

use crate::outcome::Try;
use crate::traits::Recoverable;

/// Converts an already evaluated `Result` into a [`Try`].
///
/// This is the eager counterpart of [`Try::to`]: the computation has already
/// run, so only its outcome is captured.
pub trait IntoTry<T> {
    fn into_try(self) -> Try<T>;
}

impl<T, E: Recoverable> IntoTry<T> for Result<T, E> {
    #[inline]
    fn into_try(self) -> Try<T> {
        match self {
            Ok(value) => Try::Success(value),
            Err(error) => Try::Failure(error.into_fault()),
        }
    }
}
