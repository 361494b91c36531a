//! Exceptions as values.
//!
//! Tryblock runs a closure under a panic guard and hands back whatever it raised as an ordinary
//! value, instead of letting it unwind further. It's the glue between code that signals failure
//! by unwinding and code that can only consume return values, be it Rust code that wants an
//! [`Option`] or a foreign caller on the other side of a C ABI.
//!
//!
//! # Usage
//!
//! Run a block with [`try_block`], or with [`try`](try()) if the block produces a value. Raise an
//! exception with [`throw`] (or a plain [`panic!`]). Inspect the caught payload through
//! [`Exception`].
//!
//! ```rust
//! use tryblock::*;
//!
//! #[derive(Debug, PartialEq)]
//! struct Error(&'static str);
//!
//! assert!(try_block(|| {}).is_none());
//!
//! let ex = try_block(|| throw(Error("boom"))).unwrap();
//! assert_eq!(ex.downcast::<Error>().unwrap(), Error("boom"));
//! ```
//!
//! The payload is passed through verbatim: tryblock doesn't copy, wrap or classify it.
//!
//!
//! # What is caught
//!
//! Unwinding Rust panics, and only them. That includes [`panic!`], [`std::panic::panic_any`],
//! [`std::panic::resume_unwind`] and [`throw`].
//!
//! Process aborts, double panics, stack overflows, memory faults and signals are fatal and stay
//! so. Foreign exceptions (say, C++ ones) unwinding into the guard abort the process, as they do
//! with [`std::panic::catch_unwind`].
//!
//!
//! # Configuration
//!
//! The guard mechanism is picked at build time. By default, tryblock uses
//! [`std::panic::catch_unwind`]. When the target is compiled with `panic = "abort"`, there is no
//! unwinding to intercept: [`try_block`] then always returns [`None`], because any panic inside
//! terminates the process first. Set `TRYBLOCK_BACKEND` to `panic` or `abort` to override the
//! choice; `abort` is rejected at build time unless panics abort anyway.
//!
//!
//! # FFI
//!
//! The [`ffi`] module exposes the guard over the C ABI for callers that can't intercept Rust
//! panics on their own.

#![deny(unsafe_op_in_unsafe_fn)]
#![warn(
    clippy::pedantic,
    clippy::missing_const_for_fn,
    clippy::arithmetic_side_effects,
    clippy::as_underscore,
    clippy::assertions_on_result_states,
    clippy::clone_on_ref_ptr,
    clippy::decimal_literal_representation,
    clippy::default_numeric_fallback,
    clippy::else_if_without_else,
    clippy::empty_drop,
    clippy::empty_structs_with_brackets,
    clippy::exhaustive_enums,
    clippy::exhaustive_structs,
    clippy::format_push_string,
    clippy::missing_assert_message,
    clippy::missing_inline_in_public_items,
    clippy::multiple_unsafe_ops_per_block,
    clippy::needless_raw_strings,
    clippy::pub_without_shorthand,
    clippy::redundant_type_annotations,
    clippy::same_name_method,
    clippy::self_named_module_files,
    clippy::semicolon_inside_block,
    clippy::std_instead_of_core,
    clippy::string_to_string,
    clippy::tests_outside_test_module,
    clippy::try_err,
    clippy::undocumented_unsafe_blocks,
    clippy::unnecessary_safety_comment,
    clippy::unnecessary_safety_doc,
    clippy::unused_result_ok,
    clippy::wildcard_enum_match_arm,
)]

mod backend;
mod exception;
pub mod ffi;
mod throw;
mod r#try;

pub use exception::Exception;
pub use r#try::{r#try, try_block};
pub use throw::throw;
