//! Conversion helpers between `Result`, `Option`, and [`Try`].
//!
//! These adapters make it straightforward to adopt `try-rail` at the edges of
//! existing code: wrap the `Result`s you already have, and flatten outcomes
//! back into plain `Result`s when handing them to external APIs.
//!
//! # Examples
//!
//! ```
//! use try_rail::convert::*;
//! use try_rail::Try;
//!
//! let outcome = result_to_try("7".parse::<i32>());
//! assert_eq!(outcome, Try::success(7));
//!
//! let result = try_to_result(outcome);
//! assert_eq!(result.ok(), Some(7));
//! ```

use crate::outcome::Try;
use crate::traits::Recoverable;
use crate::types::Fault;

/// Converts a `Result` into a [`Try`], capturing the error as a fault.
#[inline]
pub fn result_to_try<T, E: Recoverable>(result: Result<T, E>) -> Try<T> {
    result.into()
}

/// Converts a [`Try`] into a `Result`, exposing the fault as `Err`.
#[inline]
pub fn try_to_result<T>(outcome: Try<T>) -> Result<T, Fault> {
    outcome.into_result()
}

/// Converts an `Option` into a [`Try`], using `error` when it is `None`.
///
/// `error` is only called on `None`.
///
/// # Examples
///
/// ```
/// use try_rail::convert::option_to_try;
/// use try_rail::Fault;
///
/// let missing = option_to_try(None::<i32>, || Fault::msg("no value"));
/// assert_eq!(missing.to_string(), "no value");
/// ```
#[inline]
pub fn option_to_try<T, E, F>(option: Option<T>, error: F) -> Try<T>
where
    E: Recoverable,
    F: FnOnce() -> E,
{
    match option {
        Some(value) => Try::Success(value),
        None => Try::Failure(error().into_fault()),
    }
}

impl<T, E: Recoverable> From<Result<T, E>> for Try<T> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error.into_fault()),
        }
    }
}

impl<T> From<Try<T>> for Result<T, Fault> {
    #[inline]
    fn from(outcome: Try<T>) -> Self {
        outcome.into_result()
    }
}
