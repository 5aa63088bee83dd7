//! Common numeric types for the packing visualization.
//!
//! Defines the 3D vector used for container dimensions, packed item
//! dimensions and placement positions, together with the global
//! floating-point tolerance.

use std::ops::{Add, Neg};

/// Global numerical tolerance for floating-point comparisons.
///
/// Used when comparing computed placement positions against expected values.
pub const EPSILON_GENERAL: f64 = 1e-6;

/// Represents a 3D vector or point in space.
///
/// Used for dimensions, placement coordinates and origin offsets.
///
/// # Examples
/// ```
/// use packview::types::Vec3;
///
/// let offset = Vec3::new(-7.5, -4.5, -6.5);
/// let half_extent = Vec3::new(5.0, 2.0, 4.0).half();
/// let position = offset + half_extent;
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    /// Creates a new 3D vector.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Creates a zero vector (origin).
    #[inline]
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Converts to tuple format for API compatibility.
    #[inline]
    pub const fn as_tuple(&self) -> (f64, f64, f64) {
        (self.x, self.y, self.z)
    }

    /// Returns the vector scaled to half length per component.
    ///
    /// This is the half-extent of a box with these dimensions, i.e. the
    /// translation from its corner to its center.
    #[inline]
    pub fn half(&self) -> Self {
        Self::new(self.x / 2.0, self.y / 2.0, self.z / 2.0)
    }

    /// Checks component-wise equality within a tolerance.
    #[inline]
    pub fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        (self.x - other.x).abs() <= tolerance
            && (self.y - other.y).abs() <= tolerance
            && (self.z - other.z).abs() <= tolerance
    }
}

impl Add for Vec3 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Neg for Vec3 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y, -self.z)
    }
}
