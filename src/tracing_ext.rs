//! Tracing integration for try-rail.
//!
//! Outcomes are never logged implicitly. Call [`Try::trace`] at the point
//! where you want a pipeline's result recorded.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! try-rail = { version = "0.1", features = ["tracing"] }
//! ```

use crate::outcome::Try;

impl<T> Try<T> {
    /// Records the outcome as a `tracing` event and returns it unchanged.
    ///
    /// A `Success` is emitted at `DEBUG`, a `Failure` at `WARN` with the fault
    /// attached as the `error` field.
    ///
    /// # Examples
    ///
    /// ```
    /// use try_rail::Try;
    ///
    /// let outcome = Try::to(|| "12".parse::<i32>()).trace("parse_port");
    /// assert_eq!(outcome, Try::success(12));
    /// ```
    pub fn trace(self, operation: &str) -> Self {
        match &self {
            Try::Success(_) => tracing::debug!(operation, "computation succeeded"),
            Try::Failure(fault) => tracing::warn!(operation, error = %fault, "computation failed"),
        }
        self
    }
}
