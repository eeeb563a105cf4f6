use std::ffi::CString;

use v3math_core::{V3Error, Vec3};

use crate::error::{with_last_error_mut, DefaultV3MathError, V3ErrorCode, V3MathError};

/// Set the thread-local error message and code.
/// Accepts any type implementing `V3MathError` trait.
pub(crate) fn set_last_error(error: &impl V3MathError) {
    with_last_error_mut(|(cstring, code)| {
        *cstring = CString::new(error.msg()).ok();
        *code = error.code();
    });
}

/// Track an error by setting it in thread-local storage and returning its code.
#[inline]
pub(crate) fn track_error(error: &impl V3MathError) -> V3ErrorCode {
    set_last_error(error);
    error.code()
}

/// Clear the thread-local error message and code.
/// Called on successful operations.
pub(crate) fn clear_last_error() {
    with_last_error_mut(|(cstring, code)| {
        *cstring = None;
        *code = V3ErrorCode::Ok;
    });
}

/// Read three floats starting at `ptr`.
///
/// # Safety
/// `ptr` must be null or point to 3 readable, initialized `f32` values.
pub(crate) unsafe fn read_v3(ptr: *const f32, param_name: &str) -> Result<Vec3, DefaultV3MathError> {
    if ptr.is_null() {
        return Err(DefaultV3MathError::null_pointer(param_name));
    }
    // SAFETY: non-null and caller guarantees 3 readable floats; [f32; 3] has f32 alignment
    let components = unsafe { ptr.cast::<[f32; 3]>().read() };
    Ok(Vec3::from_array(components))
}

/// Snapshot every source vector. Nothing is written, so a later store to a
/// destination that aliases any source sees the original values.
///
/// # Safety
/// Each pointer must be null or point to 3 readable `f32` values.
pub(crate) unsafe fn read_sources<const N: usize>(
    sources: [(*const f32, &str); N],
) -> Result<[Vec3; N], DefaultV3MathError> {
    let mut values = [Vec3::ZERO; N];
    for (slot, (ptr, param_name)) in values.iter_mut().zip(sources) {
        *slot = unsafe { read_v3(ptr, param_name) }?;
    }
    Ok(values)
}

/// Check `dst` and snapshot every source before anything is written.
///
/// # Safety
/// As for [`read_sources`].
pub(crate) unsafe fn read_inputs<const N: usize>(
    dst: *mut f32,
    sources: [(*const f32, &str); N],
) -> Result<[Vec3; N], DefaultV3MathError> {
    if dst.is_null() {
        return Err(DefaultV3MathError::null_pointer("dst"));
    }
    unsafe { read_sources(sources) }
}

/// Write `value` to `dst` and report success.
///
/// # Safety
/// `dst` must be non-null and point to 3 writable `f32` values.
pub(crate) unsafe fn store(dst: *mut f32, value: Vec3) -> V3ErrorCode {
    // SAFETY: guaranteed by caller
    unsafe { dst.cast::<[f32; 3]>().write(value.to_array()) };
    clear_last_error();
    V3ErrorCode::Ok
}

/// Write the result to `dst`, or `fallback` if the result is undefined.
///
/// # Safety
/// As for [`store`].
pub(crate) unsafe fn store_or_fallback(
    dst: *mut f32,
    result: Result<Vec3, V3Error>,
    fallback: Vec3,
) -> V3ErrorCode {
    match result {
        Ok(value) => unsafe { store(dst, value) },
        Err(err) => {
            // SAFETY: guaranteed by caller
            unsafe { dst.cast::<[f32; 3]>().write(fallback.to_array()) };
            track_error(&DefaultV3MathError::from(err))
        }
    }
}

/// Unwrap a scalar result, recording the failure and returning NaN if any.
pub(crate) fn scalar_or_nan(result: Result<f32, DefaultV3MathError>) -> f32 {
    match result {
        Ok(value) => {
            clear_last_error();
            value
        }
        Err(err) => {
            set_last_error(&err);
            f32::NAN
        }
    }
}
