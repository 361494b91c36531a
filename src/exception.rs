use super::backend::{ActiveBackend, Backend};
use core::{any::Any, fmt};

/// A caught exception.
///
/// Owns the payload exactly as it was raised: the box passed to [`std::panic::panic_any`],
/// [`std::panic::resume_unwind`] or [`throw`](super::throw), or the message of a [`panic!`]. The
/// payload is never copied or rewrapped; [`Exception::into_payload`] hands back the same
/// allocation.
///
/// [`panic!`] produces a `&'static str` payload when called with a literal and a [`String`] when
/// called with format arguments. [`Exception::message`] understands both.
pub struct Exception {
    payload: Box<dyn Any + Send>,
}

impl Exception {
    /// Returns `true` if the payload is of type `T`.
    #[inline]
    #[must_use]
    pub fn is<T: Any>(&self) -> bool {
        self.payload.is::<T>()
    }

    /// Returns a reference to the payload if it is of type `T`.
    #[inline]
    #[must_use]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.payload.downcast_ref()
    }

    /// Returns a mutable reference to the payload if it is of type `T`.
    #[inline]
    #[must_use]
    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        self.payload.downcast_mut()
    }

    /// Take the payload out as `T`.
    ///
    /// On a type mismatch, the exception is returned untouched.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tryblock::*;
    ///
    /// let ex = try_block(|| throw(42_u8)).unwrap();
    /// let ex = ex.downcast::<u16>().unwrap_err();
    /// assert_eq!(ex.downcast::<u8>().unwrap(), 42);
    /// ```
    #[allow(clippy::missing_errors_doc)]
    #[inline]
    pub fn downcast<T: Any>(self) -> Result<T, Self> {
        match self.payload.downcast::<T>() {
            Ok(cause) => Ok(*cause),
            Err(payload) => Err(Self { payload }),
        }
    }

    /// The payload as text, if it is a `&'static str` or a [`String`].
    #[inline]
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        if let Some(message) = self.payload.downcast_ref::<&'static str>() {
            Some(*message)
        } else {
            self.payload.downcast_ref::<String>().map(String::as_str)
        }
    }

    /// Give up the wrapper and get the raw payload back.
    #[inline]
    #[must_use]
    pub fn into_payload(self) -> Box<dyn Any + Send> {
        self.payload
    }

    /// Raise the payload again, unchanged.
    ///
    /// The panic hook is not invoked a second time.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tryblock::*;
    ///
    /// let outer = try_block(|| {
    ///     if let Some(ex) = try_block(|| panic!("inner")) {
    ///         ex.resume();
    ///     }
    /// });
    /// assert_eq!(outer.unwrap().message(), Some("inner"));
    /// ```
    #[inline]
    pub fn resume(self) -> ! {
        ActiveBackend::throw(self.payload)
    }
}

impl From<Box<dyn Any + Send>> for Exception {
    #[inline]
    fn from(payload: Box<dyn Any + Send>) -> Self {
        Self { payload }
    }
}

impl From<Exception> for Box<dyn Any + Send> {
    #[inline]
    fn from(ex: Exception) -> Self {
        ex.payload
    }
}

impl fmt::Debug for Exception {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tuple = f.debug_tuple("Exception");
        match self.message() {
            Some(message) => tuple.field(&message),
            None => tuple.field(&format_args!("..")),
        };
        tuple.finish()
    }
}

impl fmt::Display for Exception {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message().unwrap_or("non-string exception payload"))
    }
}

impl core::error::Error for Exception {}
