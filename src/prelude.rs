//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use try_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`attempt!`]
//! - **Types**: [`Try`], [`Fault`], [`Payload`], [`UnsupportedOperation`]
//! - **Traits**: [`IntoTry`], [`FaultOps`], [`Recoverable`]
//!
//! # Examples
//!
//! ```
//! use try_rail::prelude::*;
//!
//! fn parse_port(raw: &str) -> Try<u16> {
//!     raw.trim().parse::<u16>().into_try()
//! }
//!
//! assert_eq!(parse_port(" 8080 ").get_or_else(80), 8080);
//! assert_eq!(parse_port("http").get_or_else(80), 80);
//! ```

// Macros
pub use crate::attempt;

// Core types
pub use crate::outcome::{Payload, Try};
pub use crate::types::{Fault, UnsupportedOperation};

// Traits
pub use crate::traits::{FaultOps, IntoTry, Recoverable};
