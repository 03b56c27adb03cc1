//! Frozen vector snapshots.
//!
//! A snapshot computes every derived quantity once, at construction, and
//! exposes them through getters only. There is no way to change a snapshot
//! after it is built.

use std::fmt;

use crate::text::write_vector;
use crate::tuple::{d2, d3, d4, Vector2, Vector3, Vector4};

bitflags::bitflags! {
    /// Classification of a vector's components.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct VectorFlags: u8 {
        const NONE = 0;
        const ZERO = 1 << 0;     // every component == 0
        const NAN = 1 << 1;      // any component is NaN
        const INFINITE = 1 << 2; // any component is ±inf
    }
}

impl Default for VectorFlags {
    fn default() -> Self {
        Self::NONE
    }
}

impl VectorFlags {
    fn classify(components: &[f64]) -> Self {
        let mut flags = Self::NONE;
        if components.iter().all(|&c| c == 0.0) {
            flags |= Self::ZERO;
        }
        if components.iter().any(|c| c.is_nan()) {
            flags |= Self::NAN;
        }
        if components.iter().any(|c| c.is_infinite()) {
            flags |= Self::INFINITE;
        }
        flags
    }
}

/// Read-only 2D vector with precomputed magnitude, angles and flags.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot2 {
    xy: Vector2,
    magnitude: f64,
    magnitude_sq: f64,
    angle_x: f64,
    angle_y: f64,
    flags: VectorFlags,
}

impl Snapshot2 {
    pub fn new(xy: Vector2) -> Self {
        Self {
            xy,
            magnitude: d2::magnitude(xy),
            magnitude_sq: d2::magnitude_sq(xy),
            angle_x: d2::angle_x(xy),
            angle_y: d2::angle_y(xy),
            flags: VectorFlags::classify(&xy),
        }
    }

    pub fn x(&self) -> f64 {
        self.xy[0]
    }

    pub fn y(&self) -> f64 {
        self.xy[1]
    }

    pub fn xy(&self) -> Vector2 {
        self.xy
    }

    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    pub fn magnitude_sq(&self) -> f64 {
        self.magnitude_sq
    }

    pub fn angle_x(&self) -> f64 {
        self.angle_x
    }

    pub fn angle_y(&self) -> f64 {
        self.angle_y
    }

    pub fn flags(&self) -> VectorFlags {
        self.flags
    }

    pub fn is_zero(&self) -> bool {
        self.flags.contains(VectorFlags::ZERO)
    }

    pub fn is_nan(&self) -> bool {
        self.flags.contains(VectorFlags::NAN)
    }

    pub fn is_infinite(&self) -> bool {
        self.flags.contains(VectorFlags::INFINITE)
    }
}

/// Read-only 3D vector with precomputed magnitude, angles and flags.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot3 {
    xyz: Vector3,
    magnitude: f64,
    magnitude_sq: f64,
    angles: Vector3,
    flags: VectorFlags,
}

impl Snapshot3 {
    pub fn new(xyz: Vector3) -> Self {
        Self {
            xyz,
            magnitude: d3::magnitude(xyz),
            magnitude_sq: d3::magnitude_sq(xyz),
            angles: [d3::angle_x(xyz), d3::angle_y(xyz), d3::angle_z(xyz)],
            flags: VectorFlags::classify(&xyz),
        }
    }

    pub fn x(&self) -> f64 {
        self.xyz[0]
    }

    pub fn y(&self) -> f64 {
        self.xyz[1]
    }

    pub fn z(&self) -> f64 {
        self.xyz[2]
    }

    pub fn xyz(&self) -> Vector3 {
        self.xyz
    }

    pub fn r(&self) -> f64 {
        self.xyz[0]
    }

    pub fn g(&self) -> f64 {
        self.xyz[1]
    }

    pub fn b(&self) -> f64 {
        self.xyz[2]
    }

    pub fn rgb(&self) -> Vector3 {
        self.xyz
    }

    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    pub fn magnitude_sq(&self) -> f64 {
        self.magnitude_sq
    }

    pub fn angle_x(&self) -> f64 {
        self.angles[0]
    }

    pub fn angle_y(&self) -> f64 {
        self.angles[1]
    }

    pub fn angle_z(&self) -> f64 {
        self.angles[2]
    }

    pub fn flags(&self) -> VectorFlags {
        self.flags
    }

    pub fn is_zero(&self) -> bool {
        self.flags.contains(VectorFlags::ZERO)
    }

    pub fn is_nan(&self) -> bool {
        self.flags.contains(VectorFlags::NAN)
    }

    pub fn is_infinite(&self) -> bool {
        self.flags.contains(VectorFlags::INFINITE)
    }
}

/// Read-only 4D vector with precomputed magnitude, angles and flags.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot4 {
    xyzw: Vector4,
    magnitude: f64,
    magnitude_sq: f64,
    angles: Vector4,
    flags: VectorFlags,
}

impl Snapshot4 {
    pub fn new(xyzw: Vector4) -> Self {
        Self {
            xyzw,
            magnitude: d4::magnitude(xyzw),
            magnitude_sq: d4::magnitude_sq(xyzw),
            angles: [
                d4::angle_x(xyzw),
                d4::angle_y(xyzw),
                d4::angle_z(xyzw),
                d4::angle_w(xyzw),
            ],
            flags: VectorFlags::classify(&xyzw),
        }
    }

    pub fn x(&self) -> f64 {
        self.xyzw[0]
    }

    pub fn y(&self) -> f64 {
        self.xyzw[1]
    }

    pub fn z(&self) -> f64 {
        self.xyzw[2]
    }

    pub fn w(&self) -> f64 {
        self.xyzw[3]
    }

    pub fn xyzw(&self) -> Vector4 {
        self.xyzw
    }

    pub fn r(&self) -> f64 {
        self.xyzw[0]
    }

    pub fn g(&self) -> f64 {
        self.xyzw[1]
    }

    pub fn b(&self) -> f64 {
        self.xyzw[2]
    }

    pub fn a(&self) -> f64 {
        self.xyzw[3]
    }

    pub fn rgba(&self) -> Vector4 {
        self.xyzw
    }

    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    pub fn magnitude_sq(&self) -> f64 {
        self.magnitude_sq
    }

    pub fn angle_x(&self) -> f64 {
        self.angles[0]
    }

    pub fn angle_y(&self) -> f64 {
        self.angles[1]
    }

    pub fn angle_z(&self) -> f64 {
        self.angles[2]
    }

    pub fn angle_w(&self) -> f64 {
        self.angles[3]
    }

    pub fn flags(&self) -> VectorFlags {
        self.flags
    }

    pub fn is_zero(&self) -> bool {
        self.flags.contains(VectorFlags::ZERO)
    }

    pub fn is_nan(&self) -> bool {
        self.flags.contains(VectorFlags::NAN)
    }

    pub fn is_infinite(&self) -> bool {
        self.flags.contains(VectorFlags::INFINITE)
    }
}

impl fmt::Display for Snapshot2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_vector(f, "Vec2", &self.xy)
    }
}

impl fmt::Display for Snapshot3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_vector(f, "Vec3", &self.xyz)
    }
}

impl fmt::Display for Snapshot4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_vector(f, "Vec4", &self.xyzw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn derived_values_are_precomputed() {
        let s = Snapshot2::new([3.0, 4.0]);
        assert_eq!(s.magnitude(), 5.0);
        assert_eq!(s.magnitude_sq(), 25.0);
        assert_eq!(s.x(), 3.0);
        assert_eq!(s.y(), 4.0);
        assert_eq!(s.flags(), VectorFlags::NONE);

        let s = Snapshot2::new([0.0, 2.0]);
        assert_abs_diff_eq!(s.angle_x(), FRAC_PI_2);
        assert_abs_diff_eq!(s.angle_y(), 0.0);
    }

    #[test]
    fn flags_classify_components() {
        assert!(Snapshot3::new([0.0, -0.0, 0.0]).is_zero());
        let s = Snapshot3::new([f64::NAN, 1.0, f64::INFINITY]);
        assert!(s.is_nan());
        assert!(s.is_infinite());
        assert!(!s.is_zero());
        assert_eq!(s.flags(), VectorFlags::NAN | VectorFlags::INFINITE);
    }

    #[test]
    fn nan_flag_is_set_by_any_component() {
        assert!(Snapshot4::new([0.0, 0.0, 0.0, f64::NAN]).is_nan());
        assert!(Snapshot2::new([f64::NAN, 1.0]).is_nan());
    }

    #[test]
    fn color_aliases_read_the_same_components() {
        let s = Snapshot4::new([0.1, 0.2, 0.3, 0.4]);
        assert_eq!([s.r(), s.g(), s.b(), s.a()], s.xyzw());
        assert_eq!(s.rgba(), [s.x(), s.y(), s.z(), s.w()]);

        let s = Snapshot3::new([0.5, 0.6, 0.7]);
        assert_eq!(s.rgb(), [s.r(), s.g(), s.b()]);
        assert_eq!(s.rgb(), s.xyz());
    }

    #[test]
    fn axis_angles() {
        let s = Snapshot3::new([0.0, 0.0, 2.0]);
        assert_abs_diff_eq!(s.angle_z(), 0.0);
        assert_abs_diff_eq!(s.angle_x(), FRAC_PI_2);
        assert_abs_diff_eq!(s.angle_y(), FRAC_PI_2);

        let s = Snapshot4::new([0.0, 0.0, 0.0, -1.0]);
        assert_abs_diff_eq!(s.angle_w(), std::f64::consts::PI);
        assert_abs_diff_eq!(s.magnitude(), 1.0);
    }

    #[test]
    fn display_matches_vector_text_form() {
        assert_eq!(Snapshot2::new([1.0, -0.0]).to_string(), "Vec2(1, 0)");
        assert_eq!(
            Snapshot4::new([1.5, 2.0, f64::INFINITY, 0.0]).to_string(),
            "Vec4(1.5, 2, Infinity, 0)"
        );
    }
}
