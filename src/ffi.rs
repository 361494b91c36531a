//! C ABI for callers that can't catch Rust panics themselves.
//!
//! ```c
//! typedef struct TryblockException TryblockException;
//!
//! TryblockException *tryblock_invoke(void (*callback)(void *), void *context);
//! intptr_t tryblock_exception_message(const TryblockException *ex, uint8_t *buf, size_t len);
//! void tryblock_exception_free(TryblockException *ex);
//! ```
//!
//! A non-null return from [`tryblock_invoke`] is owned by the caller and must be released with
//! [`tryblock_exception_free`].

use super::{exception::Exception, r#try::try_block};
use core::{ffi::c_void, ptr};

/// A callback run under the guard.
///
/// Uses the `C-unwind` ABI so that a Rust panic raised inside reaches the guard instead of
/// aborting at the ABI boundary.
pub type Callback = unsafe extern "C-unwind" fn(context: *mut c_void);

/// Run `callback(context)`, catching any exception it raises.
///
/// This is [`try_block`] for a function pointer and context pair.
///
/// # Panics
///
/// Panics if `callback` is `None`. The panic happens outside of the guard and is never reported
/// as a caught exception.
///
/// # Safety
///
/// `callback` must be sound to call with `context`.
#[inline]
pub unsafe fn invoke_callback(
    callback: Option<Callback>,
    context: *mut c_void,
) -> Option<Exception> {
    let Some(callback) = callback else {
        log::error!("null callback passed to tryblock_invoke");
        panic!("null callback passed to tryblock_invoke");
    };
    // SAFETY: `callback` accepts `context` by the safety requirement.
    try_block(|| unsafe { callback(context) })
}

/// Run `callback(context)`, returning the caught exception or null.
///
/// A null `callback` aborts the process, since the precondition panic can't unwind out of an
/// `extern "C"` function.
///
/// # Safety
///
/// `callback` must be null or sound to call with `context`.
#[unsafe(no_mangle)]
#[allow(improper_ctypes_definitions)]
pub unsafe extern "C" fn tryblock_invoke(
    callback: Option<Callback>,
    context: *mut c_void,
) -> *mut Exception {
    // SAFETY: Forwarded from the caller.
    match unsafe { invoke_callback(callback, context) } {
        Some(ex) => Box::into_raw(Box::new(ex)),
        None => ptr::null_mut(),
    }
}

/// Copy the exception message into `buf`.
///
/// Writes at most `len` bytes of UTF-8, without a terminating NUL. A truncated copy ends on a
/// character boundary, so it may be shorter than `len`. The return value is the length of the
/// whole message, so that callers can retry with a larger
/// buffer. Returns `-1` if `ex` is null or its payload is not text.
///
/// # Safety
///
/// `ex` must be null or returned by [`tryblock_invoke`] and not yet freed. `buf` must be valid for
/// writes of `len` bytes; it may be null if `len` is zero.
#[unsafe(no_mangle)]
#[allow(improper_ctypes_definitions)]
pub unsafe extern "C" fn tryblock_exception_message(
    ex: *const Exception,
    buf: *mut u8,
    len: usize,
) -> isize {
    // SAFETY: `ex` is null or a live exception by the safety requirement.
    let Some(message) = unsafe { ex.as_ref() }.and_then(Exception::message) else {
        return -1;
    };
    let mut copied = message.len().min(len);
    while !message.is_char_boundary(copied) {
        copied -= 1;
    }
    if copied > 0 {
        // SAFETY: `buf` is valid for `len >= copied` bytes and can't overlap with a live `&str`.
        unsafe {
            ptr::copy_nonoverlapping(message.as_ptr(), buf, copied);
        }
    }
    isize::try_from(message.len()).unwrap_or(isize::MAX)
}

/// Free an exception returned by [`tryblock_invoke`].
///
/// Null is ignored.
///
/// # Safety
///
/// `ex` must be null or returned by [`tryblock_invoke`] and not yet freed.
#[unsafe(no_mangle)]
#[allow(improper_ctypes_definitions)]
pub unsafe extern "C" fn tryblock_exception_free(ex: *mut Exception) {
    if !ex.is_null() {
        // SAFETY: `ex` came from `Box::into_raw` in `tryblock_invoke` and is freed only once.
        drop(unsafe { Box::from_raw(ex) });
    }
}
