use crate::outcome::Try;
use crate::types::Fault;

/// Recovery and bimapping over anything that carries either a value or a [`Fault`].
///
/// Implemented for [`Try`] and for `Result<T, Fault>`, so code can stay
/// agnostic of which of the two it was handed.
///
/// # Examples
///
/// ```
/// use try_rail::traits::FaultOps;
/// use try_rail::{Fault, Try};
///
/// let recovered = Try::<i32>::failure(Fault::msg("missing")).recover(|_| Try::success(0));
/// assert_eq!(recovered, Try::success(0));
///
/// let described = Try::success(21).bimap_result(|x| x * 2, |fault| fault.to_string());
/// assert_eq!(described, Ok(42));
/// ```
pub trait FaultOps<T>: Sized {
    /// Replaces a failure with whatever `recovery` builds from its fault.
    fn recover<F>(self, recovery: F) -> Self
    where
        F: FnOnce(Fault) -> Self;

    fn bimap_result<B, G, SuccessF, ErrorF>(
        self,
        success_f: SuccessF,
        error_f: ErrorF,
    ) -> Result<B, G>
    where
        SuccessF: FnOnce(T) -> B,
        ErrorF: FnOnce(Fault) -> G;

    /// Converts the container into a `Result`.
    fn to_result(self) -> Result<T, Fault>;
}

impl<T> FaultOps<T> for Try<T> {
    #[inline]
    fn recover<F>(self, recovery: F) -> Self
    where
        F: FnOnce(Fault) -> Self,
    {
        match self {
            Try::Success(value) => Try::Success(value),
            Try::Failure(fault) => recovery(fault),
        }
    }

    #[inline]
    fn bimap_result<B, G, SuccessF, ErrorF>(
        self,
        success_f: SuccessF,
        error_f: ErrorF,
    ) -> Result<B, G>
    where
        SuccessF: FnOnce(T) -> B,
        ErrorF: FnOnce(Fault) -> G,
    {
        match self {
            Try::Success(value) => Ok(success_f(value)),
            Try::Failure(fault) => Err(error_f(fault)),
        }
    }

    #[inline]
    fn to_result(self) -> Result<T, Fault> {
        self.into_result()
    }
}

impl<T> FaultOps<T> for Result<T, Fault> {
    #[inline]
    fn recover<F>(self, recovery: F) -> Self
    where
        F: FnOnce(Fault) -> Self,
    {
        match self {
            Ok(value) => Ok(value),
            Err(fault) => recovery(fault),
        }
    }

    #[inline]
    fn bimap_result<B, G, SuccessF, ErrorF>(
        self,
        success_f: SuccessF,
        error_f: ErrorF,
    ) -> Result<B, G>
    where
        SuccessF: FnOnce(T) -> B,
        ErrorF: FnOnce(Fault) -> G,
    {
        match self {
            Ok(value) => Ok(success_f(value)),
            Err(fault) => Err(error_f(fault)),
        }
    }

    #[inline]
    fn to_result(self) -> Result<T, Fault> {
        self
    }
}
