use super::backend::{ActiveBackend, Backend};
use core::any::Any;

/// Throw an exception.
///
/// Any [`try_block`](super::try_block) or [`try`](super::try()) up the stack catches it, as does
/// [`std::panic::catch_unwind`]. If uncaught, the exception terminates the thread, and with it the
/// process if it's the main thread.
///
/// Unlike [`panic!`], this doesn't invoke the panic hook, so nothing is printed.
///
/// # Example
///
/// ```should_panic
/// use tryblock::*;
///
/// throw::<&'static str>("Oops!");
/// ```
#[inline]
pub fn throw<E: Any + Send>(cause: E) -> ! {
    ActiveBackend::throw(Box::new(cause));
}
