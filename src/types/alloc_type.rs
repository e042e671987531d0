#[cfg(not(feature = "std"))]
pub use alloc::{boxed::Box, string::String, sync::Arc};
#[cfg(feature = "std")]
pub use std::{boxed::Box, string::String, sync::Arc};
