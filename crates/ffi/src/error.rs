use std::cell::RefCell;
use std::ffi::CString;
use std::os::raw::c_char;
use std::ptr;

use v3math_core::V3Error;

/// Common interface for FFI error types.
///
/// # Design
/// - `code()` - Returns the error code to be passed across FFI boundary
/// - `msg()` - Returns the error message for diagnostic purposes
pub(crate) trait V3MathError {
    /// Returns the error code to be returned across the FFI boundary.
    fn code(&self) -> V3ErrorCode;

    /// Returns the human-readable error message.
    fn msg(&self) -> &str;
}

/// Default implementation of `V3MathError` for FFI failures.
///
/// Covers both a missing argument (null pointer) and a mathematically
/// undefined result reported by the core library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DefaultV3MathError {
    code: V3ErrorCode,
    msg: String,
}

impl DefaultV3MathError {
    /// Create error for null pointer passed where non-null required.
    ///
    /// # Arguments
    /// * `param_name` - The name of the parameter that was null (e.g., `"dst"`, `"a"`)
    pub fn null_pointer(param_name: &str) -> Self {
        Self {
            code: V3ErrorCode::NullPointer,
            msg: format!("Parameter '{param_name}' cannot be null"),
        }
    }
}

impl From<V3Error> for DefaultV3MathError {
    fn from(error: V3Error) -> Self {
        let code = match error {
            V3Error::ZeroLength { .. } => V3ErrorCode::ZeroLength,
            V3Error::NonFiniteLength { .. } => V3ErrorCode::NonFiniteLength,
        };
        Self {
            code,
            msg: error.to_string(),
        }
    }
}

impl V3MathError for DefaultV3MathError {
    fn code(&self) -> V3ErrorCode {
        self.code
    }

    fn msg(&self) -> &str {
        &self.msg
    }
}

/// FFI error codes returned by vector-producing functions.
/// Follows standard C convention: 0 = success, non-zero = error.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum V3ErrorCode {
    /// Operation completed successfully.
    Ok = 0,

    /// Invalid pointer: null pointer passed where non-null required.
    /// Nothing was written to `dst`.
    NullPointer = 1,

    /// Result undefined because a vector had zero length.
    /// The documented fallback value was written to `dst`.
    ZeroLength = 2,

    /// Result undefined because a vector had infinite or NaN length.
    /// The documented fallback value was written to `dst`.
    NonFiniteLength = 3,
}

thread_local! {
    /// Thread-local storage for the most recent FFI error (C string, error code).
    /// The CString is stored so the pointer handed out by `v3_get_last_error` stays valid.
    static LAST_ERROR: RefCell<(Option<CString>, V3ErrorCode)> = const { RefCell::new((None, V3ErrorCode::Ok)) };
}

/// Internal helper to read `LAST_ERROR` thread-local storage (cstring, code).
pub(crate) fn with_last_error<F, R>(f: F) -> R
where
    F: FnOnce(&(Option<CString>, V3ErrorCode)) -> R,
{
    LAST_ERROR.with_borrow(f)
}

/// Internal helper to mutate `LAST_ERROR` thread-local storage (cstring, code).
pub(crate) fn with_last_error_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut (Option<CString>, V3ErrorCode)) -> R,
{
    LAST_ERROR.with_borrow_mut(f)
}

/// Retrieve the most recent FFI error message as a null-terminated C string.
///
/// Returns:
/// - A borrowed pointer to the error message if the last call on this thread failed.
/// - `null` if the last call succeeded.
///
/// # Lifetime
/// The returned pointer is valid until the next `v3_*` call on this thread.
///
/// **DO NOT FREE THIS POINTER** - it is managed internally.
///
/// Example:
/// ```c
/// float out[3];
/// if (v3_normalize(out, v) != Ok) {
///     fprintf(stderr, "normalize failed: %s\n", v3_get_last_error());
/// }
/// ```
#[no_mangle]
pub extern "C" fn v3_get_last_error() -> *const c_char {
    with_last_error(|(cstring, _code)| cstring.as_ref().map_or(ptr::null(), |cs| cs.as_ptr()))
}

/// Retrieve the most recent FFI error code.
///
/// Returns `V3ErrorCode::Ok` (0) if the last call on this thread succeeded.
/// Scalar functions (`v3_length`, `v3_angle`, ...) report failures only through
/// this channel and their NaN return value.
#[no_mangle]
pub extern "C" fn v3_get_last_error_code() -> V3ErrorCode {
    with_last_error(|(_cstring, code)| *code)
}
