//! The [`Try`] outcome type.
//!
//! A `Try<T>` is either a `Success` holding a computed value or a `Failure`
//! holding the [`Fault`](crate::Fault) that interrupted the computation. It
//! replaces scattered error checks with a value that can be passed around,
//! transformed and chained, with failure handled once at the end.
//!
//! # Key Components
//!
//! - [`Try`] - The outcome itself, its factory and combinators
//! - [`Payload`] - Non-raising view of whichever payload is held
//! - [`Iter`] / [`IntoIter`] - At-most-one-element iteration over the value
//!
//! # Examples
//!
//! ```
//! use try_rail::Try;
//!
//! let outcome = Try::to(|| "5".parse::<i32>())
//!     .flat_map(|x| Try::to(|| 10_i32.checked_div(x).ok_or(core::fmt::Error)));
//!
//! match outcome {
//!     Try::Success(v) => assert_eq!(v, 2),
//!     Try::Failure(fault) => panic!("unexpected: {fault}"),
//! }
//! ```
pub mod core;
pub mod iter;
pub mod traits;

pub use self::core::*;
pub use self::iter::*;
