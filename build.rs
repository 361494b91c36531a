#[path = "src/backend/select.rs"]
mod select;

fn cfg(name: &str) -> String {
    std::env::var(format!("CARGO_CFG_{}", name.to_uppercase())).unwrap_or_default()
}

fn make_overridable_cfg(
    name: &str,
    logic: impl FnOnce(Option<&str>) -> Result<&'static str, String>,
) -> String {
    let env_name = format!("TRYBLOCK_{}", name.to_uppercase());
    println!("cargo::rerun-if-env-changed={env_name}");
    let requested = std::env::var(env_name).ok();
    let value = logic(requested.as_deref()).unwrap_or_else(|err| panic!("{err}"));
    println!("cargo::rustc-cfg={name}=\"{value}\"");
    value.to_string()
}

fn main() {
    // `CARGO_CFG_PANIC` reflects `-C panic=...` for the target being compiled, so a profile or
    // RUSTFLAGS override that switches to aborting panics picks the `abort` backend.
    make_overridable_cfg("backend", |requested| {
        select::select_backend(&cfg("panic"), requested)
    });
}
