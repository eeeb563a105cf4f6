//! Minimal 3D Vector Math Library
//!
//! Single-precision 3-component vector arithmetic with defined behavior on
//! edge cases: zero-length vectors, non-finite components, and results stored
//! back into one of their inputs.
//!
//! ## Error reporting
//!
//! Operations that need a direction (normalize, angle, reflect) never abort.
//! Each returns a documented substitute value and logs a `tracing` warning;
//! the `try_*` variants surface the same condition as a [`V3Error`].

// Core types and utilities
pub mod core_types;
pub mod error;
pub mod ops;

pub use core_types::Vec3;
pub use error::V3Error;
pub use ops::{
    add, angle, angle_quick, cross, dot, equals, from_points, length, normalize, reflect, scale,
    subtract, try_angle, try_angle_quick, try_normalize, try_reflect,
};

/// Default component tolerance used by the reference fixtures when comparing
/// results with [`equals`].
pub const DEFAULT_TOLERANCE: f32 = 1e-5;
