use crate::types::Fault;
use core::error::Error;
use core::fmt;

/// Errors that [`Try`](crate::Try) captures into a `Failure`.
///
/// Every `Error + Send + Sync + 'static` type is recoverable, and so is an
/// already captured [`Fault`]. The iteration sentinel [`Exhausted`] is not: it
/// implements neither `Error` nor this trait, so no factory or combinator can
/// ever box it.
///
/// # Examples
///
/// ```
/// use try_rail::traits::Recoverable;
///
/// let fault = "x".parse::<u8>().unwrap_err().into_fault();
/// assert!(fault.is::<core::num::ParseIntError>());
/// ```
pub trait Recoverable {
    /// Converts the raised error into the payload of a `Failure`.
    fn into_fault(self) -> Fault;
}

impl<E> Recoverable for E
where
    E: Error + Send + Sync + 'static,
{
    #[inline]
    fn into_fault(self) -> Fault {
        Fault::new(self)
    }
}

impl Recoverable for Fault {
    #[inline]
    fn into_fault(self) -> Fault {
        self
    }
}

/// End-of-sequence signal.
///
/// This is flow control, not a computational failure. It is never converted
/// into a `Failure`; [`Try::to_or_exhausted`](crate::Try::to_or_exhausted)
/// hands it back to the caller untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Exhausted;

impl fmt::Display for Exhausted {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("sequence exhausted")
    }
}

/// Why a thunk passed to [`Try::to_or_exhausted`](crate::Try::to_or_exhausted) stopped early.
///
/// Both conversions are available through `?`: a recoverable error becomes
/// [`Interrupt::Raised`], an [`Exhausted`] becomes [`Interrupt::Exhausted`].
///
/// # Examples
///
/// ```
/// use try_rail::traits::{Exhausted, Interrupt};
/// use try_rail::Try;
///
/// let mut input = ["7", "x"].into_iter();
/// let mut next = || -> Result<i32, Interrupt> {
///     let raw = input.next().ok_or(Exhausted)?;
///     Ok(raw.parse::<i32>()?)
/// };
///
/// assert_eq!(Try::to_or_exhausted(&mut next), Ok(Try::success(7)));
/// assert!(Try::to_or_exhausted(&mut next).unwrap().is_failure());
/// assert_eq!(Try::to_or_exhausted(&mut next), Err(Exhausted));
/// ```
#[derive(Debug)]
pub enum Interrupt {
    Raised(Fault),
    Exhausted(Exhausted),
}

impl<E: Recoverable> From<E> for Interrupt {
    #[inline]
    fn from(error: E) -> Self {
        Self::Raised(error.into_fault())
    }
}

impl From<Exhausted> for Interrupt {
    #[inline]
    fn from(signal: Exhausted) -> Self {
        Self::Exhausted(signal)
    }
}
