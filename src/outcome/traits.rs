use crate::outcome::core::{Payload, Try};
use core::fmt::{self, Debug, Display};

/// Renders the payload alone: the value of a `Success`, the error of a `Failure`.
///
/// # Examples
///
/// ```
/// use try_rail::{Fault, Try};
///
/// assert_eq!(Try::success(5).to_string(), "5");
/// assert_eq!(Try::<i32>::failure(Fault::msg("boom")).to_string(), "boom");
/// ```
impl<T: Display> Display for Try<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.value(), f)
    }
}

/// Renders `Success(<value>)` or `Failure(<error>)`.
///
/// # Examples
///
/// ```
/// use try_rail::{Fault, Try};
///
/// assert_eq!(format!("{:?}", Try::success(5)), "Success(5)");
/// assert_eq!(format!("{:?}", Try::<i32>::failure(Fault::msg("boom"))), "Failure(boom)");
/// ```
impl<T: Debug> Debug for Try<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Try::Success(value) => write!(f, "Success({value:?})"),
            Try::Failure(fault) => write!(f, "Failure({fault})"),
        }
    }
}

impl<T: Display> Display for Payload<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Payload::Value(value) => Display::fmt(value, f),
            Payload::Error(fault) => Display::fmt(fault, f),
        }
    }
}

/// Collects outcomes fail-fast: the first `Failure` wins and iteration stops there.
///
/// Only one fault is ever kept; later items are not evaluated.
///
/// # Examples
///
/// ```
/// use try_rail::Try;
///
/// let all: Try<Vec<i32>> = ["1", "2", "3"].iter().map(|s| Try::to(|| s.parse::<i32>())).collect();
/// assert_eq!(all, Try::success(vec![1, 2, 3]));
///
/// let broken: Try<Vec<i32>> = ["1", "x", "3"].iter().map(|s| Try::to(|| s.parse::<i32>())).collect();
/// assert!(broken.is_failure());
/// ```
impl<A, V> FromIterator<Try<A>> for Try<V>
where
    V: FromIterator<A>,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Try<A>>,
    {
        let mut failure = None;
        let values: V = iter
            .into_iter()
            .map_while(|item| match item {
                Try::Success(value) => Some(value),
                Try::Failure(fault) => {
                    failure = Some(fault);
                    None
                }
            })
            .collect();

        match failure {
            Some(fault) => Try::Failure(fault),
            None => Try::Success(values),
        }
    }
}
