//! Core traits for capturing and composing outcomes.
//!
//! - [`Recoverable`]: errors eligible for capture into a `Failure`
//! - [`Exhausted`] / [`Interrupt`]: the flow-control sentinel kept apart from recoverable errors
//! - [`IntoTry`]: lifts an evaluated `Result` into a [`Try`](crate::Try)
//! - [`FaultOps`]: recovery and bimapping shared by `Try` and `Result<T, Fault>`
//!
//! # Examples
//!
//! ```
//! use try_rail::traits::{FaultOps, IntoTry};
//!
//! let outcome = "oops".parse::<i32>().into_try();
//! assert!(outcome.is_failure());
//! assert_eq!(outcome.to_result().ok(), None);
//! ```

pub mod fault_ops;
pub mod recoverable;
pub mod result_ext;

pub use fault_ops::FaultOps;
pub use recoverable::{Exhausted, Interrupt, Recoverable};
pub use result_ext::IntoTry;
