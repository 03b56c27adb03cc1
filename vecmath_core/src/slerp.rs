//! Shortest-arc interpolation between scalar angles.
//!
//! The angular difference is reduced into `[-half turn, half turn)` before
//! it is scaled by `t`, so interpolation always travels the short way around
//! the circle. `t` is not clamped and the result is not wrapped back into
//! `[0, full turn)`.

use std::f64::consts::{PI, TAU};

/// Interpolates between two angles in radians.
pub fn slerp(from: f64, to: f64, t: f64) -> f64 {
    from + (((((to - from) % TAU) + 3.0 * PI) % TAU) - PI) * t
}

/// Interpolates between two angles in degrees.
pub fn slerp_degrees(from: f64, to: f64, t: f64) -> f64 {
    from + (((((to - from) % 360.0) + 540.0) % 360.0) - 180.0) * t
}
