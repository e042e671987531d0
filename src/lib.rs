//! A value-based representation of a computation's outcome.
//!
//! [`Try`] holds either the value a computation produced or the error that
//! interrupted it. Instead of handling each error where it occurs, fallible
//! steps are chained declaratively and failure is dealt with at a single point.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `try_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Capturing a Computation
//!
//! ```
//! use try_rail::Try;
//!
//! let outcome = Try::to(|| 10_i32.checked_div(0).ok_or(core::fmt::Error));
//! assert!(outcome.is_failure());
//! assert_eq!(outcome.get_or_else(-1), -1);
//! ```
//!
//! ## Chaining Steps
//!
//! ```
//! use try_rail::Try;
//!
//! let outcome = Try::to(|| Ok::<_, core::num::ParseIntError>("5"))
//!     .map(str::parse::<i32>)
//!     .flat_map(|x| Try::to(|| 10_i32.checked_div(x).ok_or(core::fmt::Error)));
//! assert_eq!(outcome, Try::success(2));
//! ```
//!
//! ## Inverting a Failure
//!
//! ```
//! use try_rail::{Fault, Try, UnsupportedOperation};
//!
//! let error = Fault::msg("x");
//! assert_eq!(Try::<()>::Failure(error.clone()).failed(), Try::success(error));
//! assert!(Try::success(5).failed().err().unwrap().is::<UnsupportedOperation>());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Conversions between Result, Option, and Try
pub mod convert;
/// Macros for building outcomes
pub mod macros;
/// The Try outcome type, its combinators and iterators
pub mod outcome;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Core traits for capturing and composing outcomes
pub mod traits;
/// Fault and the error kinds raised by this crate
pub mod types;

/// Tracing integration (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

pub use convert::*;
pub use outcome::{IntoIter, Iter, Payload, Try};
pub use traits::*;
pub use types::*;
