use core::any::Any;

/// An unwinding backend.
///
/// Unwinding is a mechanism of forcefully "returning" through multiple call frames, called
/// *throwing*, up until a special call frame, called *interceptor*. On Rust this is the
/// `resume_unwind`/`catch_unwind` pair.
///
/// Backends treat payloads as opaque. Whatever is thrown must reach the closest (most nested)
/// `intercept` frame as the same allocation, unmodified, and all destructors of locals must run
/// on the way, as if `return` was called.
///
/// Several exceptions can co-exist at once, even in a single thread: a destructor may throw and
/// intercept its own exception while another one is unwinding through it. The order of catching
/// is the reverse order of throwing.
pub(crate) trait Backend {
    /// Throw a payload.
    fn throw(payload: Box<dyn Any + Send>) -> !;

    /// Catch a payload.
    ///
    /// This function returns `Ok` if the function returns normally, or `Err` if it throws (and the
    /// thrown payload is not caught by a nested interceptor). If `Err` is returned, the box must be
    /// the one that was thrown.
    fn intercept<Func: FnOnce() -> R, R>(func: Func) -> Result<R, Box<dyn Any + Send>>;
}

#[cfg(backend = "panic")]
#[path = "panic.rs"]
mod imp;

#[cfg(backend = "abort")]
#[path = "abort.rs"]
mod imp;

pub(crate) use imp::ActiveBackend;

#[cfg(test)]
mod select;
