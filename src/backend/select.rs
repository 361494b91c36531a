// Shared between `build.rs` and the crate's tests.

/// Pick the backend cfg value for a target built with the `panic_strategy` panic strategy.
///
/// `requested` is the `TRYBLOCK_BACKEND` override, if any. The `abort` backend doesn't intercept
/// anything, so it's only accepted when panics can't unwind in the first place.
pub(crate) fn select_backend(
    panic_strategy: &str,
    requested: Option<&str>,
) -> Result<&'static str, String> {
    let unwinds = panic_strategy != "abort";
    match requested {
        None if unwinds => Ok("panic"),
        None => Ok("abort"),
        Some("panic") => Ok("panic"),
        Some("abort") if !unwinds => Ok("abort"),
        Some("abort") => Err(format!(
            "TRYBLOCK_BACKEND=abort requires `panic = \"abort\"`, but this target uses `panic = \"{panic_strategy}\"`",
        )),
        Some(other) => Err(format!(
            "unknown TRYBLOCK_BACKEND value `{other}`, expected `panic` or `abort`",
        )),
    }
}
