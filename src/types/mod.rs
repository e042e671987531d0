//! Error capture types.
//!
//! Everything a [`Try::Failure`](crate::Try::Failure) can hold lives here: the
//! type-erased [`Fault`] wrapper and the dedicated error kinds this crate
//! raises itself.
//!
//! # Examples
//!
//! ```
//! use try_rail::{Fault, UnsupportedOperation};
//!
//! let fault = Fault::new(UnsupportedOperation::new("Success.failed"));
//! assert_eq!(fault.to_string(), "Success.failed");
//! assert!(fault.is::<UnsupportedOperation>());
//! ```
pub mod alloc_type;
pub mod error_kinds;
pub mod fault;

pub use error_kinds::*;
pub use fault::*;
