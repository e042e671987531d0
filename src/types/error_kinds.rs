use core::error::Error;
use core::fmt;

/// Raised when an operation makes no sense for the variant it was called on.
///
/// [`Try::failed`](crate::Try::failed) produces this error when invoked on a
/// `Success`, since only a failed outcome can be inverted.
///
/// # Examples
///
/// ```
/// use try_rail::{Try, UnsupportedOperation};
///
/// let inverted = Try::success(5).failed();
/// let fault = inverted.err().unwrap();
/// let error = fault.downcast_ref::<UnsupportedOperation>().unwrap();
/// assert_eq!(error.operation(), "Success.failed");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct UnsupportedOperation {
    operation: &'static str,
}

impl UnsupportedOperation {
    #[must_use]
    #[inline]
    pub const fn new(operation: &'static str) -> Self {
        Self { operation }
    }

    /// Name of the rejected operation, e.g. `"Success.failed"`.
    #[must_use]
    #[inline]
    pub const fn operation(&self) -> &'static str {
        self.operation
    }
}

impl fmt::Display for UnsupportedOperation {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.operation)
    }
}

impl Error for UnsupportedOperation {}

#[cfg(feature = "std")]
pub use self::panicked::Panicked;

#[cfg(feature = "std")]
mod panicked {
    use core::error::Error;
    use core::fmt;
    use std::any::Any;
    use std::boxed::Box;
    use std::string::{String, ToString};

    /// A panic caught by [`Try::catch_unwind`](crate::Try::catch_unwind).
    ///
    /// Only the panic message survives; payloads that are neither `&str` nor
    /// `String` are reported with a placeholder message.
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    pub struct Panicked {
        message: String,
    }

    impl Panicked {
        pub(crate) fn from_payload(payload: Box<dyn Any + Send>) -> Self {
            let message = if let Some(s) = payload.downcast_ref::<&'static str>() {
                (*s).to_string()
            } else if let Some(s) = payload.downcast_ref::<String>() {
                s.clone()
            } else {
                "Box<dyn Any>".to_string()
            };
            Self { message }
        }

        #[must_use]
        #[inline]
        pub fn message(&self) -> &str {
            &self.message
        }
    }

    impl fmt::Display for Panicked {
        #[inline]
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(&self.message)
        }
    }

    impl Error for Panicked {}
}
