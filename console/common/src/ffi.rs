//! Helpers shared by the `extern "C"` entry points of the runtimes.

use std::borrow::Cow;
use std::ffi::{CStr, c_char};

/// Read a C string pointer, replacing invalid UTF-8. Returns None if null.
///
/// # Safety
///
/// `ptr` must be null or point to a null-terminated string that stays valid
/// for `'a`.
pub unsafe fn read_cstr<'a>(ptr: *const c_char) -> Option<Cow<'a, str>> {
    if ptr.is_null() {
        return None;
    }
    Some(unsafe { CStr::from_ptr(ptr) }.to_string_lossy())
}
