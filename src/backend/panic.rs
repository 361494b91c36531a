use super::Backend;
use core::any::Any;
use std::panic::{AssertUnwindSafe, catch_unwind, resume_unwind};

pub(crate) struct ActiveBackend;

impl Backend for ActiveBackend {
    #[inline]
    fn throw(payload: Box<dyn Any + Send>) -> ! {
        // Skips the panic hook, unlike `panic_any`.
        resume_unwind(payload);
    }

    #[inline]
    fn intercept<Func: FnOnce() -> R, R>(func: Func) -> Result<R, Box<dyn Any + Send>> {
        // Unwind safety of captured state is up to the caller of `try`/`try_block`.
        catch_unwind(AssertUnwindSafe(func))
    }
}
