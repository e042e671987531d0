use crate::traits::{Exhausted, Interrupt, Recoverable};
use crate::types::{Fault, UnsupportedOperation};
use core::convert::Infallible;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The outcome of a computation that may fail: its value or the error that interrupted it.
///
/// `Try<T>` lets several fallible steps be chained declaratively, deferring
/// failure handling to a single point. Instead of reacting to each error where
/// it happens, you build the pipeline with [`map`](Try::map) and
/// [`flat_map`](Try::flat_map) and inspect the result once at the end.
///
/// Combinators short-circuit asymmetrically: a `Failure` passes through `map`,
/// `flat_map`, `for_each` and iteration untouched, and only [`get`](Try::get)
/// turns it back into a live `Err`.
///
/// # Variants
///
/// * `Success(T)` - Holds the computed value
/// * `Failure(Fault)` - Holds the captured error
///
/// # Examples
///
/// ```
/// use try_rail::Try;
///
/// let divided = Try::to(|| "5".parse::<i32>())
///     .flat_map(|divisor| Try::to(|| 10_i32.checked_div(divisor).ok_or(core::fmt::Error)));
/// assert_eq!(divided, Try::success(2));
///
/// let broken = Try::to(|| "abc".parse::<i32>());
/// assert!(broken.is_failure());
/// assert_eq!(broken.get_or_else(-1), -1);
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, PartialEq, Eq)]
pub enum Try<T> {
    Success(T),
    Failure(Fault),
}

/// Borrowed payload of a [`Try`], whichever variant holds it.
///
/// Returned by [`Try::value`] for diagnostics. Displays as the payload alone.
#[derive(Debug)]
pub enum Payload<'a, T> {
    Value(&'a T),
    Error(&'a Fault),
}

impl<T> Clone for Payload<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Payload<'_, T> {}

impl<T> Try<T> {
    /// Evaluates `f` once and captures its outcome.
    ///
    /// `Ok` becomes `Success`; any recoverable error becomes `Failure` and does
    /// not reach the caller.
    ///
    /// # Examples
    ///
    /// ```
    /// use try_rail::Try;
    ///
    /// assert!(Try::to(|| "12".parse::<u8>()).is_success());
    /// assert!(Try::to(|| "300".parse::<u8>()).is_failure());
    /// ```
    #[inline]
    pub fn to<F, E>(f: F) -> Self
    where
        F: FnOnce() -> Result<T, E>,
        E: Recoverable,
    {
        match f() {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error.into_fault()),
        }
    }

    /// Same as [`Try::to`].
    #[inline]
    pub fn apply<F, E>(f: F) -> Self
    where
        F: FnOnce() -> Result<T, E>,
        E: Recoverable,
    {
        Self::to(f)
    }

    /// Evaluates `f` once, keeping the exhaustion signal out of the outcome.
    ///
    /// A recoverable error is captured as a `Failure` like in [`Try::to`], but
    /// [`Exhausted`] is returned to the caller as `Err` without being boxed.
    #[inline]
    pub fn to_or_exhausted<F>(f: F) -> Result<Self, Exhausted>
    where
        F: FnOnce() -> Result<T, Interrupt>,
    {
        match f() {
            Ok(value) => Ok(Self::Success(value)),
            Err(Interrupt::Raised(fault)) => Ok(Self::Failure(fault)),
            Err(Interrupt::Exhausted(signal)) => Err(signal),
        }
    }

    /// Evaluates an infallible closure, capturing a panic as a `Failure`.
    ///
    /// The panic surfaces as a [`Panicked`](crate::Panicked) error carrying the
    /// panic message. The panic hook still runs as usual.
    ///
    /// # Examples
    ///
    /// ```
    /// use try_rail::{Panicked, Try};
    ///
    /// let divisor = std::hint::black_box(0);
    /// let outcome = Try::catch_unwind(move || 10 / divisor);
    /// let fault = outcome.err().unwrap();
    /// assert!(fault.downcast_ref::<Panicked>().unwrap().message().contains("divide by zero"));
    /// ```
    #[cfg(feature = "std")]
    pub fn catch_unwind<F>(f: F) -> Self
    where
        F: FnOnce() -> T + std::panic::UnwindSafe,
    {
        match std::panic::catch_unwind(f) {
            Ok(value) => Self::Success(value),
            Err(payload) => Self::Failure(Fault::new(crate::Panicked::from_payload(payload))),
        }
    }

    /// Wraps a plain value.
    #[inline]
    pub fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Wraps an error.
    #[inline]
    pub fn failure<E: Recoverable>(error: E) -> Self {
        Self::Failure(error.into_fault())
    }

    /// Returns `true` if this is a `Success`.
    #[must_use]
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if this is a `Failure`.
    #[must_use]
    #[inline]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Peeks at the payload without raising, whichever variant holds it.
    ///
    /// # Examples
    ///
    /// ```
    /// use try_rail::{Fault, Try};
    ///
    /// assert_eq!(Try::success(3).value().to_string(), "3");
    /// assert_eq!(Try::<i32>::failure(Fault::msg("boom")).value().to_string(), "boom");
    /// ```
    #[inline]
    pub fn value(&self) -> Payload<'_, T> {
        match self {
            Self::Success(value) => Payload::Value(value),
            Self::Failure(fault) => Payload::Error(fault),
        }
    }

    /// Returns the value, or raises the held fault as `Err`.
    ///
    /// Every call on a `Failure` yields the same fault instance.
    ///
    /// # Examples
    ///
    /// ```
    /// use try_rail::{Fault, Try};
    ///
    /// assert_eq!(Try::success(1).get(), Ok(&1));
    ///
    /// let failed = Try::<i32>::failure(Fault::msg("boom"));
    /// let first = failed.get().unwrap_err();
    /// let second = failed.get().unwrap_err();
    /// assert!(Fault::ptr_eq(&first, &second));
    /// ```
    #[inline]
    pub fn get(&self) -> Result<&T, Fault> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(fault) => Err(fault.clone()),
        }
    }

    /// Consuming form of [`get`](Try::get).
    #[inline]
    pub fn into_result(self) -> Result<T, Fault> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(fault) => Err(fault),
        }
    }

    /// Inverts the outcome.
    ///
    /// A `Failure` becomes a `Success` holding its fault. A `Success` becomes a
    /// `Failure` holding [`UnsupportedOperation`]`("Success.failed")`.
    ///
    /// # Examples
    ///
    /// ```
    /// use try_rail::{Fault, Try, UnsupportedOperation};
    ///
    /// let fault = Fault::msg("x");
    /// assert_eq!(Try::<i32>::Failure(fault.clone()).failed(), Try::success(fault));
    ///
    /// let misuse = Try::success(5).failed();
    /// assert!(misuse.err().unwrap().is::<UnsupportedOperation>());
    /// ```
    #[inline]
    pub fn failed(self) -> Try<Fault> {
        match self {
            Self::Failure(fault) => Try::Success(fault),
            Self::Success(_) => Try::Failure(Fault::new(UnsupportedOperation::new("Success.failed"))),
        }
    }

    /// Returns the value, or `default` if this is a `Failure`.
    ///
    /// `default` is already evaluated by the caller; nothing here captures a
    /// failure that happened while producing it.
    #[inline]
    pub fn get_or_else(self, default: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    /// Chains a step that produces its own outcome.
    ///
    /// On `Success` the result of `f` is returned as is. On `Failure` `f` is
    /// never called and the same fault is carried forward.
    ///
    /// # Examples
    ///
    /// ```
    /// use try_rail::Try;
    ///
    /// let halve = |x: i32| if x % 2 == 0 { Try::success(x / 2) } else { Try::failure(core::fmt::Error) };
    /// assert_eq!(Try::success(8).flat_map(halve), Try::success(4));
    /// assert!(Try::success(7).flat_map(halve).is_failure());
    /// ```
    #[inline]
    pub fn flat_map<U, F>(self, f: F) -> Try<U>
    where
        F: FnOnce(T) -> Try<U>,
    {
        self.try_flat_map(|value| Ok::<_, Infallible>(f(value)))
    }

    /// Like [`flat_map`](Try::flat_map), for steps that can raise before producing an outcome.
    ///
    /// The held value is retrieved with [`get`](Try::get) semantics and handed to
    /// `f`; a fault raised anywhere along the way becomes the resulting `Failure`.
    ///
    /// # Examples
    ///
    /// ```
    /// use try_rail::Try;
    ///
    /// let parsed = Try::success("4").try_flat_map(|s| {
    ///     let n = s.parse::<i32>()?;
    ///     Ok::<_, core::num::ParseIntError>(Try::success(n * 10))
    /// });
    /// assert_eq!(parsed, Try::success(40));
    /// ```
    pub fn try_flat_map<U, E, F>(self, f: F) -> Try<U>
    where
        F: FnOnce(T) -> Result<Try<U>, E>,
        E: Recoverable,
    {
        let attempt = || -> Result<Try<U>, Fault> {
            let value = self.into_result()?;
            f(value).map_err(Recoverable::into_fault)
        };
        match attempt() {
            Ok(next) => next,
            Err(fault) => Try::Failure(fault),
        }
    }

    /// Transforms the value with a step that may raise.
    ///
    /// On `Success`, `f` runs under the same capture discipline as
    /// [`Try::to`]. On `Failure`, `f` is never called and the original fault is
    /// returned unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use try_rail::Try;
    ///
    /// assert_eq!(Try::success("5").map(str::parse::<i32>), Try::success(5));
    /// assert!(Try::success("abc").map(str::parse::<i32>).is_failure());
    /// ```
    #[inline]
    pub fn map<U, E, F>(self, f: F) -> Try<U>
    where
        F: FnOnce(T) -> Result<U, E>,
        E: Recoverable,
    {
        match self {
            Self::Success(value) => Try::to(|| f(value)),
            Self::Failure(fault) => Try::Failure(fault),
        }
    }

    /// Transforms the value with a step that cannot fail.
    #[inline]
    pub fn map_value<U, F>(self, f: F) -> Try<U>
    where
        F: FnOnce(T) -> U,
    {
        self.map(|value| Ok::<_, Infallible>(f(value)))
    }

    /// Returns `self` if it is a `Success`, otherwise `alternative`.
    #[inline]
    pub fn or_else(self, alternative: Try<T>) -> Try<T> {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(_) => alternative,
        }
    }

    /// Calls `f` with the value exactly once on `Success`; does nothing on `Failure`.
    ///
    /// Whatever `f` returns is discarded.
    ///
    /// # Examples
    ///
    /// ```
    /// use try_rail::{Fault, Try};
    ///
    /// let mut seen = Vec::new();
    /// Try::success(1).for_each(|v| seen.push(*v));
    /// Try::<i32>::failure(Fault::msg("boom")).for_each(|v| seen.push(*v));
    /// assert_eq!(seen, vec![1]);
    /// ```
    #[inline]
    pub fn for_each<R, F>(&self, f: F)
    where
        F: FnOnce(&T) -> R,
    {
        if let Self::Success(value) = self {
            let _ = f(value);
        }
    }

    /// Converts into `Option<T>`, discarding the fault.
    #[must_use]
    #[inline]
    pub fn ok(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Converts into `Option<Fault>`, discarding the value.
    #[must_use]
    #[inline]
    pub fn err(self) -> Option<Fault> {
        match self {
            Self::Success(_) => None,
            Self::Failure(fault) => Some(fault),
        }
    }
}
