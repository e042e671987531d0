//! Ergonomic macros for building outcomes.
//!
//! - [`macro@crate::attempt`] - Runs a block that may use `?` and captures its
//!   outcome as a [`Try`](crate::Try), without spelling out the closure and its
//!   error type.
//!
//! # Examples
//!
//! ```
//! use try_rail::{attempt, Try};
//!
//! let sum = attempt! {
//!     let a: i32 = "2".parse()?;
//!     let b: i32 = "3".parse()?;
//!     a + b
//! };
//! assert_eq!(sum, Try::success(5));
//! ```

/// Evaluates a block once and captures its outcome as a [`Try`](crate::Try).
///
/// Inside the block, `?` converts any recoverable error into a
/// [`Fault`](crate::Fault); the first one raised becomes the `Failure`. The
/// block's final expression becomes the `Success` value.
///
/// # Syntax
///
/// - `attempt!(expr)` - Captures a single expression
/// - `attempt! { stmts; expr }` - Captures a block of statements
///
/// # Examples
///
/// ```
/// use try_rail::attempt;
///
/// let outcome = attempt!("abc".parse::<i32>()?);
/// assert!(outcome.is_failure());
/// ```
#[macro_export]
macro_rules! attempt {
    ($($body:tt)*) => {
        $crate::Try::to(|| -> ::core::result::Result<_, $crate::Fault> {
            ::core::result::Result::Ok({ $($body)* })
        })
    };
}
