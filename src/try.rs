use super::{
    backend::{ActiveBackend, Backend},
    exception::Exception,
};

/// Run `func`, catching any exception it raises.
///
/// Returns [`None`] if `func` completes normally, and the caught [`Exception`] otherwise. This
/// function never unwinds on account of `func`.
///
/// Only unwinding panics are caught: [`panic!`], [`std::panic::panic_any`],
/// [`std::panic::resume_unwind`] and [`throw`](super::throw). Aborts, stack overflows, faults and
/// signals stay fatal, as do all panics when built with `panic = "abort"`. Foreign exceptions
/// unwinding into `func` abort the process.
///
/// Side effects `func` performs before raising are kept, and its locals are dropped on the way
/// out. State shared with `func` through references may be left half-updated; it's up to the
/// caller to check it, as with [`std::panic::AssertUnwindSafe`].
///
/// # Example
///
/// ```rust
/// use tryblock::*;
///
/// assert!(try_block(|| {}).is_none());
///
/// let ex = try_block(|| panic!("boom")).unwrap();
/// assert_eq!(ex.message(), Some("boom"));
/// ```
#[inline]
pub fn try_block(func: impl FnOnce()) -> Option<Exception> {
    r#try(func).err()
}

/// Run `func`, catching any exception it raises.
///
/// If `func` returns a value, this function wraps it in [`Ok`].
///
/// If `func` throws an exception, this function returns it, wrapped in [`Err`]. See
/// [`try_block`] for what counts as an exception.
///
/// # Example
///
/// ```rust
/// use anyhow::anyhow;
/// use tryblock::*;
///
/// let res = r#try::<()>(|| throw(anyhow!("Oops!")));
/// let err = res.unwrap_err().downcast::<anyhow::Error>().unwrap();
/// assert_eq!(err.to_string(), "Oops!");
///
/// assert_eq!(r#try(|| 1 + 1).unwrap(), 2);
/// ```
#[allow(clippy::missing_errors_doc)]
#[inline]
pub fn r#try<R>(func: impl FnOnce() -> R) -> Result<R, Exception> {
    ActiveBackend::intercept(func).map_err(|payload| {
        let ex = Exception::from(payload);
        log::trace!("caught exception: {ex}");
        ex
    })
}

#[cfg(all(test, backend = "panic"))]
mod test {
    use super::*;
    use crate::throw;
    use core::any::Any;
    use std::{panic::resume_unwind, sync::Arc, thread};

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[derive(Debug, PartialEq)]
    struct Error(&'static str);

    #[test]
    fn empty_block() {
        init_logger();
        assert!(try_block(|| {}).is_none());
    }

    #[test]
    fn panic_is_caught() {
        init_logger();
        let ex = try_block(|| panic!("boom")).unwrap();
        assert_eq!(ex.message(), Some("boom"));
        assert!(ex.is::<&'static str>());
    }

    #[test]
    fn panic_never_escapes_the_guard() {
        let outer = std::panic::catch_unwind(|| try_block(|| panic!("boom")));
        assert_eq!(outer.unwrap().unwrap().message(), Some("boom"));
    }

    #[test]
    fn formatted_panic_is_caught() {
        init_logger();
        let what = "boom";
        let ex = try_block(|| panic!("{what}!")).unwrap();
        assert_eq!(ex.downcast::<String>().unwrap(), "boom!");
    }

    #[test]
    fn thrown_value_is_caught() {
        init_logger();
        let ex = try_block(|| throw(Error("boom"))).unwrap();
        assert_eq!(ex.downcast::<Error>().unwrap(), Error("boom"));
    }

    #[test]
    fn payload_identity_is_preserved() {
        let payload: Box<dyn Any + Send> = Box::new(String::from("boom"));
        let addr = &raw const *payload;
        let ex = try_block(|| resume_unwind(payload)).unwrap();
        assert!(core::ptr::addr_eq(addr, &raw const *ex.into_payload()));
    }

    #[test]
    fn side_effects_are_observable() {
        let mut x = 0;
        assert!(try_block(|| x = 1 + 1).is_none());
        assert_eq!(x, 2);
    }

    #[test]
    fn side_effects_before_raise_are_kept() {
        let mut steps = Vec::new();
        let ex = try_block(|| {
            steps.push("before");
            throw(Error("boom"));
        });
        assert!(ex.is_some());
        assert_eq!(steps, ["before"]);
    }

    #[test]
    fn destructors_are_run() {
        struct Dropper<'a>(&'a mut bool);
        impl Drop for Dropper<'_> {
            fn drop(&mut self) {
                *self.0 = true;
            }
        }

        let mut destructor_was_run = false;
        let ex = try_block(|| {
            let _dropper = Dropper(&mut destructor_was_run);
            throw(Error("boom"));
        });
        assert!(ex.is_some());
        assert!(destructor_was_run);
    }

    #[test]
    fn nested_raise_is_absorbed_by_inner_guard() {
        let mut inner = None;
        let outer = try_block(|| {
            inner = try_block(|| throw(Error("inner")));
        });
        assert!(outer.is_none());
        assert_eq!(inner.unwrap().downcast::<Error>().unwrap(), Error("inner"));
    }

    #[test]
    fn resume_reaches_outer_guard() {
        let outer = try_block(|| {
            if let Some(ex) = try_block(|| throw(Error("inner"))) {
                ex.resume();
            }
        });
        assert_eq!(outer.unwrap().downcast::<Error>().unwrap(), Error("inner"));
    }

    #[test]
    fn try_keeps_return_value() {
        assert_eq!(r#try(|| "value").unwrap(), "value");
        let res: Result<u32, _> = r#try(|| throw(7_u32));
        assert_eq!(res.unwrap_err().downcast::<u32>().unwrap(), 7);
    }

    #[test]
    fn concurrent_guards_are_independent() {
        let barrier = Arc::new(std::sync::Barrier::new(8));
        let handles: Vec<_> = (0..8_u32)
            .map(|i| {
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    try_block(|| {
                        if i % 2 == 0 {
                            throw(i);
                        }
                    })
                    .map(|ex| ex.downcast::<u32>().unwrap())
                })
            })
            .collect();
        for (i, handle) in (0..8_u32).zip(handles) {
            let expected = (i % 2 == 0).then_some(i);
            assert_eq!(handle.join().unwrap(), expected);
        }
    }
}
