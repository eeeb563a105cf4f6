//! C entry points for the vector operations.
//!
//! Every vector argument is a pointer to 3 contiguous `float`s. All sources
//! are copied out before `dst` is written, so `dst` may alias any of them.

use v3math_core::{ops, Vec3};

use crate::error::V3ErrorCode;
use crate::helpers::{
    clear_last_error, read_inputs, read_sources, scalar_or_nan, set_last_error, store,
    store_or_fallback, track_error,
};

/// Displacement from `a` to `b`: `dst = b - a`.
///
/// # Returns
/// - `V3ErrorCode::Ok` on success
/// - `V3ErrorCode::NullPointer` if any pointer is null (nothing written)
///
/// # Safety
/// Each pointer must be null or address 3 valid `float`s; `dst` must be writable.
#[no_mangle]
pub unsafe extern "C" fn v3_from_points(
    dst: *mut f32,
    a: *const f32,
    b: *const f32,
) -> V3ErrorCode {
    match unsafe { read_inputs(dst, [(a, "a"), (b, "b")]) } {
        Ok([a, b]) => unsafe { store(dst, ops::from_points(a, b)) },
        Err(err) => track_error(&err),
    }
}

/// `dst = a + b`.
///
/// # Safety
/// Each pointer must be null or address 3 valid `float`s; `dst` must be writable.
#[no_mangle]
pub unsafe extern "C" fn v3_add(dst: *mut f32, a: *const f32, b: *const f32) -> V3ErrorCode {
    match unsafe { read_inputs(dst, [(a, "a"), (b, "b")]) } {
        Ok([a, b]) => unsafe { store(dst, ops::add(a, b)) },
        Err(err) => track_error(&err),
    }
}

/// `dst = a - b`.
///
/// # Safety
/// Each pointer must be null or address 3 valid `float`s; `dst` must be writable.
#[no_mangle]
pub unsafe extern "C" fn v3_subtract(
    dst: *mut f32,
    a: *const f32,
    b: *const f32,
) -> V3ErrorCode {
    match unsafe { read_inputs(dst, [(a, "a"), (b, "b")]) } {
        Ok([a, b]) => unsafe { store(dst, ops::subtract(a, b)) },
        Err(err) => track_error(&err),
    }
}

/// Dot product of `a` and `b`. Returns NaN if either pointer is null.
///
/// # Safety
/// Each pointer must be null or address 3 valid `float`s.
#[no_mangle]
pub unsafe extern "C" fn v3_dot_product(a: *const f32, b: *const f32) -> f32 {
    scalar_or_nan(unsafe { read_sources([(a, "a"), (b, "b")]) }.map(|[a, b]| ops::dot(a, b)))
}

/// Right-handed cross product: `dst = a × b`.
///
/// # Safety
/// Each pointer must be null or address 3 valid `float`s; `dst` must be writable.
#[no_mangle]
pub unsafe extern "C" fn v3_cross_product(
    dst: *mut f32,
    a: *const f32,
    b: *const f32,
) -> V3ErrorCode {
    match unsafe { read_inputs(dst, [(a, "a"), (b, "b")]) } {
        Ok([a, b]) => unsafe { store(dst, ops::cross(a, b)) },
        Err(err) => track_error(&err),
    }
}

/// Scale in place: `dst = dst * s`.
///
/// # Safety
/// `dst` must be null or address 3 readable and writable `float`s.
#[no_mangle]
pub unsafe extern "C" fn v3_scale(dst: *mut f32, s: f32) -> V3ErrorCode {
    match unsafe { read_inputs(dst, [(dst.cast_const(), "dst")]) } {
        Ok([mut v]) => {
            ops::scale(&mut v, s);
            unsafe { store(dst, v) }
        }
        Err(err) => track_error(&err),
    }
}

/// Euclidean length of `a`. Returns NaN if `a` is null.
///
/// # Safety
/// `a` must be null or address 3 valid `float`s.
#[no_mangle]
pub unsafe extern "C" fn v3_length(a: *const f32) -> f32 {
    scalar_or_nan(unsafe { read_sources([(a, "a")]) }.map(|[a]| ops::length(a)))
}

/// Unit vector in the direction of `a`.
///
/// # Returns
/// - `V3ErrorCode::Ok` on success
/// - `V3ErrorCode::ZeroLength` / `V3ErrorCode::NonFiniteLength` if `a` has no
///   direction; `dst` is set to the zero vector
/// - `V3ErrorCode::NullPointer` if any pointer is null (nothing written)
///
/// # Safety
/// Each pointer must be null or address 3 valid `float`s; `dst` must be writable.
#[no_mangle]
pub unsafe extern "C" fn v3_normalize(dst: *mut f32, a: *const f32) -> V3ErrorCode {
    match unsafe { read_inputs(dst, [(a, "a")]) } {
        Ok([a]) => unsafe { store_or_fallback(dst, ops::try_normalize(a), Vec3::ZERO) },
        Err(err) => track_error(&err),
    }
}

/// Cosine of the angle between `a` and `b`, clamped to `[-1, 1]`.
/// Returns NaN if a pointer is null or either vector has zero or non-finite length.
///
/// # Safety
/// Each pointer must be null or address 3 valid `float`s.
#[no_mangle]
pub unsafe extern "C" fn v3_angle_quick(a: *const f32, b: *const f32) -> f32 {
    scalar_or_nan(
        unsafe { read_sources([(a, "a"), (b, "b")]) }
            .and_then(|[a, b]| ops::try_angle_quick(a, b).map_err(Into::into)),
    )
}

/// Angle between `a` and `b` in radians, in `[0, π]`.
/// Returns NaN if a pointer is null or either vector has zero or non-finite length.
///
/// # Safety
/// Each pointer must be null or address 3 valid `float`s.
#[no_mangle]
pub unsafe extern "C" fn v3_angle(a: *const f32, b: *const f32) -> f32 {
    scalar_or_nan(
        unsafe { read_sources([(a, "a"), (b, "b")]) }
            .and_then(|[a, b]| ops::try_angle(a, b).map_err(Into::into)),
    )
}

/// Reflect `v` about normal `n` (need not be unit length):
/// `dst = v - 2(v·n̂)n̂`.
///
/// # Returns
/// - `V3ErrorCode::Ok` on success
/// - `V3ErrorCode::ZeroLength` / `V3ErrorCode::NonFiniteLength` if `n` has no
///   direction; `dst` is set to `v` unchanged
/// - `V3ErrorCode::NullPointer` if any pointer is null (nothing written)
///
/// # Safety
/// Each pointer must be null or address 3 valid `float`s; `dst` must be writable.
#[no_mangle]
pub unsafe extern "C" fn v3_reflect(dst: *mut f32, v: *const f32, n: *const f32) -> V3ErrorCode {
    match unsafe { read_inputs(dst, [(v, "v"), (n, "n")]) } {
        Ok([v, n]) => unsafe { store_or_fallback(dst, ops::try_reflect(v, n), v) },
        Err(err) => track_error(&err),
    }
}

/// True if every component of `a` and `b` differs by at most `|tolerance|`.
/// Returns false if either pointer is null.
///
/// # Safety
/// Each pointer must be null or address 3 valid `float`s.
#[no_mangle]
pub unsafe extern "C" fn v3_equals(a: *const f32, b: *const f32, tolerance: f32) -> bool {
    match unsafe { read_sources([(a, "a"), (b, "b")]) } {
        Ok([a, b]) => {
            clear_last_error();
            ops::equals(a, b, tolerance)
        }
        Err(err) => {
            set_last_error(&err);
            false
        }
    }
}
