//! Math utilities and types for building surface transforms.
//!
//! This module provides the [`Vec3`] and [`Mat4`] types used to build the
//! model, view and projection matrices, as well as helper functions for angle
//! conversions. Both types are plain-old-data so they can be handed to the
//! renderer as raw column-major float buffers.
//!
//! # Module Organization
//!
//! - [`vec`] module contains all vector operations (re-exported at root level)
//! - [`mat`] module contains all matrix operations (re-exported at root level)
//! - Utility functions like angle conversions are provided at root level

pub mod mat;
pub mod vec;


pub use mat::Mat4;
pub use vec::Vec3;

use thiserror::Error;

/// Errors from the few fallible matrix operations.
///
/// Plain arithmetic never fails: degenerate inputs propagate as IEEE-754
/// infinities or NaNs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    /// A runtime buffer did not hold exactly one matrix worth of floats.
    #[error("matrix buffer must hold {expected} floats, found {found}")]
    BufferLength {
        /// Required element count.
        expected: usize,
        /// Element count of the supplied buffer.
        found: usize,
    },
    /// The matrix has a zero determinant.
    #[error("matrix is singular and has no inverse")]
    Singular,
}

/// Converts degrees to radians.
///
/// This handles angle wrapping by first normalizing the input to the range [0, 360).
///
/// # Example
/// ```
/// use saddle::math::deg_to_rad;
///
/// assert_eq!(deg_to_rad(180.0), std::f32::consts::PI);
/// assert_eq!(deg_to_rad(540.0), std::f32::consts::PI);
/// ```
pub fn deg_to_rad(degrees: f32) -> f32 {
    (degrees % 360.0) * (std::f32::consts::PI / 180.0)
}

/// Converts radians to degrees.
///
/// This handles angle wrapping by first normalizing the input to the range [0, 2π).
pub fn rad_to_deg(radians: f32) -> f32 {
    (radians % (2.0 * std::f32::consts::PI)) * (180.0 / std::f32::consts::PI)
}
