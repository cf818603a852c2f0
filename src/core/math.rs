//! Angle and interpolation utilities.
//!
//! All angles are in radians. The plot uses a y-up data space with
//! counter-clockwise positive rotation; conversion to screen coordinates
//! (y-down) happens in the scale layer.

use std::f32::consts::PI;

/// Two times PI (full circle in radians).
pub const TWO_PI: f32 = 2.0 * PI;

/// Normalize an angle to [0, 2π).
///
/// # Example
/// ```
/// use chakra_plot::core::math::{normalize_angle, TWO_PI};
/// use std::f32::consts::PI;
///
/// assert!((normalize_angle(-PI / 2.0) - 1.5 * PI).abs() < 1e-6);
/// assert!(normalize_angle(TWO_PI) < 1e-6);
/// ```
#[inline]
pub fn normalize_angle(angle: f32) -> f32 {
    let mut a = angle % TWO_PI;
    if a < 0.0 {
        a += TWO_PI;
    }
    a
}

/// Check if two angles are approximately equal (within tolerance).
///
/// Handles wrap-around at 0/2π correctly.
#[inline]
pub fn angles_approx_equal(a: f32, b: f32, tolerance: f32) -> bool {
    let diff = normalize_angle(a - b);
    diff <= tolerance || TWO_PI - diff <= tolerance
}

/// Convert degrees to radians.
#[inline]
pub fn deg_to_rad(deg: f32) -> f32 {
    deg * PI / 180.0
}

/// Convert radians to degrees.
#[inline]
pub fn rad_to_deg(rad: f32) -> f32 {
    rad * 180.0 / PI
}

/// Linear interpolation between two values.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
