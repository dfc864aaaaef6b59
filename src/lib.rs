//! Foreign-language bindings for the hodiya Sinhala ⇄ Singlish engine.
//!
//! [`api`] exports the engine through UniFFI; [`ffi`] is a plain C ABI for
//! hosts without a UniFFI runtime.

// FFI functions perform null checks before dereferencing raw pointers.
// Clippy cannot verify this statically, so we allow it at crate level.
#![allow(clippy::not_unsafe_ptr_arg_deref)]

uniffi::setup_scaffolding!();

pub mod api;
pub mod ffi;
mod trace_init;

pub use hodiya_core::mapping::{MappingEntry, MappingTable};
pub use hodiya_core::translit::{Direction, TranslitError};
