//! C ABI for hosts without a UniFFI runtime.
//!
//! Strings returned to C are heap-allocated and must be released with
//! [`hodiya_string_free`]. Null is returned for null or non-UTF-8 arguments
//! and for an unknown direction selector.

use std::ffi::{c_char, CStr, CString};
use std::path::Path;
use std::ptr;

pub mod translit;


pub use translit::*;

/// Safely convert a C string pointer to a `&str`.
/// Returns `None` if the pointer is null or contains invalid UTF-8.
pub(crate) unsafe fn cptr_to_str<'a>(ptr: *const c_char) -> Option<&'a str> {
    if ptr.is_null() {
        return None;
    }
    CStr::from_ptr(ptr).to_str().ok()
}

/// Hand an owned string to C. Null if it contains an interior NUL.
pub(crate) fn into_c_string(s: String) -> *mut c_char {
    match CString::new(s) {
        Ok(cs) => cs.into_raw(),
        Err(_) => ptr::null_mut(),
    }
}

// ---------------------------------------------------------------------------
// FFI boilerplate-reduction macros (crate-internal)
// ---------------------------------------------------------------------------

/// Validate one or more C string arguments and bind them as `&str`,
/// returning `$on_err` from the **calling** function if any check fails.
///
/// ```ignore
/// ffi_guard!(ptr::null_mut();
///     str: text = text_ptr,
///     str: direction = direction_ptr,
/// );
/// ```
macro_rules! ffi_guard {
    ($on_err:expr ; ) => {};

    ($on_err:expr ; str: $name:ident = $ptr:expr , $($rest:tt)*) => {
        let Some($name) = (unsafe { $crate::ffi::cptr_to_str($ptr) }) else {
            return $on_err;
        };
        $crate::ffi::ffi_guard!($on_err ; $($rest)*);
    };
}

pub(crate) use ffi_guard;

// --- Top-level FFI functions ---

#[no_mangle]
pub extern "C" fn hodiya_engine_version() -> *const c_char {
    c"0.1.0".as_ptr()
}

/// Free a string returned by any `hodiya_*` function. No-op on null.
#[no_mangle]
pub extern "C" fn hodiya_string_free(s: *mut c_char) {
    if !s.is_null() {
        unsafe { drop(CString::from_raw(s)) };
    }
}

#[no_mangle]
#[allow(clippy::unused_unit)]
pub extern "C" fn hodiya_trace_init(log_dir: *const c_char) {
    ffi_guard!(();
        str: dir_str = log_dir,
    );
    crate::trace_init::init_tracing(Path::new(dir_str));
}
