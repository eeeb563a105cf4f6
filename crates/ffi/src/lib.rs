//! C ABI for the v3math vector library.
//!
//! Mirrors the classic `float*` interface: every vector is a pointer to three
//! contiguous floats and results are written through a `dst` pointer that may
//! alias any input. Failures never abort; they are reported through the
//! returned `V3ErrorCode` (or a NaN scalar) and the thread-local last-error
//! channel (`v3_get_last_error`, `v3_get_last_error_code`).

mod error;
mod helpers;
mod ops;

pub use error::{v3_get_last_error, v3_get_last_error_code, V3ErrorCode};
pub use ops::{
    v3_add, v3_angle, v3_angle_quick, v3_cross_product, v3_dot_product, v3_equals,
    v3_from_points, v3_length, v3_normalize, v3_reflect, v3_scale, v3_subtract,
};
