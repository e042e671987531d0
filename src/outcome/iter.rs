use crate::outcome::core::Try;
use core::iter::FusedIterator;

/// Borrowing iterator over the value of a `Success`.
///
/// Each pass yields the value once and then `None`. The cursor resets when it
/// reports `None`, so calling `next` again starts a new pass:
/// `Some(v), None, Some(v), None, ...`. Over a `Failure` it yields nothing, ever.
///
/// Because of the restart this iterator is intentionally not
/// [`FusedIterator`]; wrap it in [`Iterator::fuse`] for single-pass semantics.
/// The cursor is exclusive to this iterator, so callers sharing one across
/// threads must synchronize it themselves.
///
/// # Examples
///
/// ```
/// use try_rail::Try;
///
/// let outcome = Try::success(7);
/// let mut iter = outcome.iter();
/// assert_eq!(iter.next(), Some(&7));
/// assert_eq!(iter.next(), None);
/// assert_eq!(iter.next(), Some(&7));
/// ```
#[derive(Debug)]
pub struct Iter<'a, T> {
    value: Option<&'a T>,
    has_next: bool,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self { value: self.value, has_next: self.has_next }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.value?;
        if self.has_next {
            self.has_next = false;
            Some(value)
        } else {
            self.has_next = true;
            None
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::from(self.value.is_some() && self.has_next);
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// Owning iterator over the value of a `Success`.
///
/// The value is moved out on the first `next`, so unlike [`Iter`] this one is
/// single-pass.
#[derive(Clone, Debug)]
pub struct IntoIter<T> {
    inner: Option<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::from(self.inner.is_some());
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for Try<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { inner: self.ok() }
    }
}

impl<'a, T> IntoIterator for &'a Try<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Try<T> {
    /// Returns a restartable iterator over the value, if any.
    ///
    /// Iterating a `Failure` never raises its fault.
    pub fn iter(&self) -> Iter<'_, T> {
        match self {
            Try::Success(value) => Iter { value: Some(value), has_next: true },
            Try::Failure(_) => Iter { value: None, has_next: false },
        }
    }
}
