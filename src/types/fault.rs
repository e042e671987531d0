use crate::types::alloc_type::{Arc, Box};
use core::error::Error;
use core::fmt::{self, Debug, Display};
use smallvec::SmallVec;

/// The error and every `source()` beneath it, outermost first.
///
/// Uses inline storage for up to 4 links, which covers nearly every
/// real-world chain without touching the heap.
pub type ErrorChain<'a> = SmallVec<[&'a (dyn Error + 'static); 4]>;

/// A captured, type-erased error.
///
/// `Fault` is the payload of [`Try::Failure`](crate::Try::Failure). It keeps the
/// original error value intact behind a reference count, so the concrete type
/// can be recovered with [`downcast_ref`](Fault::downcast_ref) and every clone
/// refers to the very same error. Nothing is formatted until you ask for it.
///
/// Two faults compare equal only when they share the same underlying error
/// (see [`ptr_eq`](Fault::ptr_eq)).
///
/// # Examples
///
/// ```
/// use try_rail::Fault;
///
/// let fault = Fault::new("x".parse::<i32>().unwrap_err());
/// assert!(fault.is::<core::num::ParseIntError>());
///
/// let copy = fault.clone();
/// assert!(Fault::ptr_eq(&fault, &copy));
/// ```
#[derive(Clone)]
pub struct Fault {
    inner: Arc<dyn Error + Send + Sync + 'static>,
}

impl Fault {
    /// Captures a concrete error.
    #[must_use]
    #[inline]
    pub fn new<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self { inner: Arc::new(error) }
    }

    /// Captures a bare message as an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use try_rail::Fault;
    ///
    /// let fault = Fault::msg("connection reset");
    /// assert_eq!(fault.to_string(), "connection reset");
    /// ```
    #[must_use]
    #[inline]
    pub fn msg<M>(message: M) -> Self
    where
        M: Display + Debug + Send + Sync + 'static,
    {
        Self::new(Message(message))
    }

    /// Captures an already boxed error without re-wrapping it.
    #[must_use]
    #[inline]
    pub fn from_boxed(error: Box<dyn Error + Send + Sync + 'static>) -> Self {
        Self { inner: Arc::from(error) }
    }

    /// Borrows the underlying error.
    #[must_use]
    #[inline]
    pub fn as_error(&self) -> &(dyn Error + Send + Sync + 'static) {
        &*self.inner
    }

    /// Returns the underlying error as `E`, if that is its concrete type.
    #[must_use]
    #[inline]
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: Error + 'static,
    {
        self.as_error().downcast_ref::<E>()
    }

    /// Returns `true` if the underlying error is of type `E`.
    #[must_use]
    #[inline]
    pub fn is<E>(&self) -> bool
    where
        E: Error + 'static,
    {
        self.as_error().is::<E>()
    }

    /// Returns `true` if both faults hold the same error instance.
    #[must_use]
    #[inline]
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        Arc::ptr_eq(&this.inner, &other.inner)
    }

    /// Walks the `source()` chain of the underlying error.
    ///
    /// # Examples
    ///
    /// ```
    /// use try_rail::Fault;
    ///
    /// let fault = Fault::msg("top");
    /// let chain = fault.chain();
    /// assert_eq!(chain.len(), 1);
    /// assert_eq!(chain[0].to_string(), "top");
    /// ```
    #[must_use]
    pub fn chain(&self) -> ErrorChain<'_> {
        let mut chain = ErrorChain::new();
        let mut current: Option<&(dyn Error + 'static)> = Some(self.as_error());
        while let Some(error) = current {
            chain.push(error);
            current = error.source();
        }
        chain
    }
}

impl Display for Fault {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&*self.inner, f)
    }
}

impl Debug for Fault {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Debug::fmt(&*self.inner, f)
    }
}

impl PartialEq for Fault {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        Self::ptr_eq(self, other)
    }
}

impl Eq for Fault {}

// `Fault` must never implement `Error`, or this overlaps `From<T> for T`.
impl<E> From<E> for Fault
where
    E: Error + Send + Sync + 'static,
{
    #[inline]
    fn from(error: E) -> Self {
        Self::new(error)
    }
}

struct Message<M>(M);

impl<M: Display> Display for Message<M> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl<M: Debug> Debug for Message<M> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Debug::fmt(&self.0, f)
    }
}

impl<M: Display + Debug> Error for Message<M> {}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::Fault;
    use crate::types::alloc_type::String;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    /// A fault serializes as its message; the concrete error type is not preserved.
    impl Serialize for Fault {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_str(self)
        }
    }

    impl<'de> Deserialize<'de> for Fault {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            String::deserialize(deserializer).map(Fault::msg)
        }
    }
}
