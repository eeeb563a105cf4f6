//! Vector3 operations
//!
//! Every operation is a pure function over [`Vec3`] values (except [`scale`],
//! which mutates its argument in place). Inputs are taken by value, so a
//! result may always be stored back into any of its sources.
//!
//! # Degradation policy
//! Operations that need a well-defined direction never panic. Each has two
//! forms:
//! - `try_*` returns `Err(V3Error)` when the input length is zero or non-finite
//! - the plain form returns a fixed substitute and emits a `tracing` warning:
//!
//! | Operation | Substitute |
//! |---|---|
//! | [`normalize`] | zero vector |
//! | [`angle_quick`] | NaN |
//! | [`angle`] | NaN |
//! | [`reflect`] | `v` unchanged |
//!
//! [`dot`] and [`length`] are defined for every input and follow IEEE-754
//! propagation (a NaN component gives a NaN result).

use tracing::warn;

use crate::core_types::Vec3;
use crate::error::V3Error;

/// Displacement from `a` to `b`: `b - a`.
#[inline]
pub fn from_points(a: Vec3, b: Vec3) -> Vec3 {
    subtract(b, a)
}

/// Componentwise `a + b`.
#[inline]
pub fn add(a: Vec3, b: Vec3) -> Vec3 {
    Vec3::new(a.x + b.x, a.y + b.y, a.z + b.z)
}

/// Componentwise `a - b`.
#[inline]
pub fn subtract(a: Vec3, b: Vec3) -> Vec3 {
    Vec3::new(a.x - b.x, a.y - b.y, a.z - b.z)
}

/// Dot product `Σ aᵢbᵢ`.
#[inline]
pub fn dot(a: Vec3, b: Vec3) -> f32 {
    a.x * b.x + a.y * b.y + a.z * b.z
}

/// Right-handed cross product `a × b`.
#[inline]
pub fn cross(a: Vec3, b: Vec3) -> Vec3 {
    Vec3::new(
        a.y * b.z - a.z * b.y,
        a.z * b.x - a.x * b.z,
        a.x * b.y - a.y * b.x,
    )
}

/// Scale `v` in place by `s`.
#[inline]
pub fn scale(v: &mut Vec3, s: f32) {
    v.x *= s;
    v.y *= s;
    v.z *= s;
}

/// Euclidean norm `√(x² + y² + z²)`. Zero for the zero vector.
#[inline]
pub fn length(v: Vec3) -> f32 {
    dot(v, v).sqrt()
}

/// Unit vector in the direction of `v`.
///
/// # Errors
/// Returns [`V3Error::ZeroLength`] or [`V3Error::NonFiniteLength`] if `v` has
/// no usable direction.
pub fn try_normalize(v: Vec3) -> Result<Vec3, V3Error> {
    let len = V3Error::check_length(length(v), "normalize")?;
    let inv = 1.0 / len;
    Ok(Vec3::new(v.x * inv, v.y * inv, v.z * inv))
}

/// Unit vector in the direction of `v`, or the zero vector if `v` has zero or
/// non-finite length.
pub fn normalize(v: Vec3) -> Vec3 {
    try_normalize(v).unwrap_or_else(|err| {
        warn!(input = %v, "{err}; returning zero vector");
        Vec3::ZERO
    })
}

/// Cosine of the angle between `a` and `b`, clamped to `[-1, 1]`.
///
/// The clamp absorbs rounding drift that would otherwise push `acos` out of
/// its domain for (anti)parallel vectors.
///
/// # Errors
/// Returns [`V3Error`] if either vector has zero or non-finite length.
pub fn try_angle_quick(a: Vec3, b: Vec3) -> Result<f32, V3Error> {
    let la = V3Error::check_length(length(a), "angle_quick")?;
    let lb = V3Error::check_length(length(b), "angle_quick")?;
    Ok((dot(a, b) / (la * lb)).clamp(-1.0, 1.0))
}

/// Cosine of the angle between `a` and `b`, or NaN if undefined.
pub fn angle_quick(a: Vec3, b: Vec3) -> f32 {
    try_angle_quick(a, b).unwrap_or_else(|err| {
        warn!(a = %a, b = %b, "{err}; returning NaN");
        f32::NAN
    })
}

/// Angle between `a` and `b` in radians, in `[0, π]`.
///
/// # Errors
/// Propagates the [`try_angle_quick`] failure, attributed to `angle`.
pub fn try_angle(a: Vec3, b: Vec3) -> Result<f32, V3Error> {
    try_angle_quick(a, b)
        .map(f32::acos)
        .map_err(|err| err.propagated_by("angle"))
}

/// Angle between `a` and `b` in radians, or NaN if undefined.
pub fn angle(a: Vec3, b: Vec3) -> f32 {
    try_angle(a, b).unwrap_or_else(|err| {
        warn!(a = %a, b = %b, "{err}; returning NaN");
        f32::NAN
    })
}

/// Reflect `v` about the plane with normal `n`: `v - 2(v·n̂)n̂`.
///
/// `n` need not be unit length; the result is invariant to its positive scale.
///
/// # Errors
/// Returns [`V3Error`] (attributed to `reflect`) if `n` cannot be normalized.
pub fn try_reflect(v: Vec3, n: Vec3) -> Result<Vec3, V3Error> {
    let n_hat = try_normalize(n).map_err(|err| err.propagated_by("reflect"))?;
    let d = 2.0 * dot(v, n_hat);
    Ok(Vec3::new(
        v.x - d * n_hat.x,
        v.y - d * n_hat.y,
        v.z - d * n_hat.z,
    ))
}

/// Reflect `v` about normal `n`, or return `v` unchanged if `n` has zero or
/// non-finite length.
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    try_reflect(v, n).unwrap_or_else(|err| {
        warn!(v = %v, n = %n, "{err}; returning input unchanged");
        v
    })
}

/// True if every component pair differs by at most `|tolerance|`.
///
/// Comparisons involving NaN are never equal.
#[inline]
pub fn equals(a: Vec3, b: Vec3, tolerance: f32) -> bool {
    let tol = tolerance.abs();
    (a.x - b.x).abs() <= tol && (a.y - b.y).abs() <= tol && (a.z - b.z).abs() <= tol
}
