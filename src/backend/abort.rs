use super::Backend;
use core::any::Any;

pub(crate) struct ActiveBackend;

// With `panic = "abort"` nothing ever unwinds, so there is nothing to intercept: any panic inside
// `func` terminates the process before `intercept` could observe it.
impl Backend for ActiveBackend {
    #[inline]
    fn throw(_payload: Box<dyn Any + Send>) -> ! {
        log::error!("exception thrown in a build without unwinding");
        eprintln!(
            "A tryblock exception was thrown, but this build aborts on panic. The process will now terminate.",
        );
        std::process::abort();
    }

    #[inline]
    fn intercept<Func: FnOnce() -> R, R>(func: Func) -> Result<R, Box<dyn Any + Send>> {
        Ok(func())
    }
}
