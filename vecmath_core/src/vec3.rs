//! `Vec3`: a mutable 3D vector with a cached magnitude.
//!
//! `r`/`g`/`b` alias `x`/`y`/`z` for use as a color.

use std::fmt;
use std::str::FromStr;

use approx::AbsDiffEq;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::VectorParseError;
use crate::object::Xyz;
use crate::random::thread_source;
use crate::snapshot::Snapshot3;
use crate::text::{parse_vector, write_vector};
use crate::tuple::{d3, Vector3};
use crate::vec4::Vec4;

/// Mutable 3D vector. See [`crate::Vec2`] for the caching contract.
#[derive(Clone, Copy, Serialize, Deserialize)]
#[serde(from = "Xyz", into = "Xyz")]
pub struct Vec3 {
    xyz: Vector3,
    magnitude: f64,
    prev_xyz: Vector3,
}

impl Vec3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self::from_array([x, y, z])
    }

    pub fn from_array(xyz: Vector3) -> Self {
        Self {
            xyz,
            magnitude: d3::magnitude(xyz),
            prev_xyz: xyz,
        }
    }

    pub fn from_slice(s: &[f64]) -> Self {
        Self::from_array(d3::from_slice(s))
    }

    pub fn from_object(o: Xyz) -> Self {
        Self::from_array(d3::from_object(o))
    }

    pub fn from_json(s: &str) -> Result<Self, VectorParseError> {
        match serde_json::from_str::<Xyz>(s) {
            Ok(o) => Ok(Self::from_object(o)),
            Err(e) => {
                debug!(error = %e, "Rejected Vec3 JSON");
                Err(e.into())
            }
        }
    }

    pub fn zero() -> Self {
        Self::from_array(d3::zero())
    }

    pub fn one() -> Self {
        Self::from_array(d3::one())
    }

    pub fn random() -> Self {
        Self::from_array(d3::random())
    }

    pub fn random_with(next: impl FnMut() -> f64) -> Self {
        Self::from_array(d3::random_with(next))
    }

    pub fn from_spherical(r: f64, theta: f64, phi: f64) -> Self {
        Self::from_array(d3::from_spherical(r, theta, phi))
    }

    pub fn from_cylindrical(r: f64, phi: f64, z: f64) -> Self {
        Self::from_array(d3::from_cylindrical(r, phi, z))
    }

    pub fn immutable(x: f64, y: f64, z: f64) -> Snapshot3 {
        Snapshot3::new([x, y, z])
    }

    pub fn snapshot(&self) -> Snapshot3 {
        Snapshot3::new(self.xyz)
    }

    /// Homogeneous extension with the given `w`.
    pub fn extend(&self, w: f64) -> Vec4 {
        let [x, y, z] = self.xyz;
        Vec4::new(x, y, z, w)
    }

    fn assign(&mut self, xyz: Vector3) -> &mut Self {
        self.xyz = xyz;
        self.update_magnitude();
        self
    }

    fn update_magnitude(&mut self) {
        let stale = self
            .xyz
            .iter()
            .zip(&self.prev_xyz)
            .any(|(a, b)| a.to_bits() != b.to_bits());
        if stale {
            self.magnitude = d3::magnitude(self.xyz);
            self.prev_xyz = self.xyz;
        }
    }

    // ─── Accessors ───

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

    pub fn set_x(&mut self, x: f64) -> &mut Self {
        let [_, y, z] = self.xyz;
        self.assign([x, y, z])
    }

    pub fn set_y(&mut self, y: f64) -> &mut Self {
        let [x, _, z] = self.xyz;
        self.assign([x, y, z])
    }

    pub fn set_z(&mut self, z: f64) -> &mut Self {
        let [x, y, _] = self.xyz;
        self.assign([x, y, z])
    }

    pub fn set_xyz(&mut self, xyz: Vector3) -> &mut Self {
        self.assign(xyz)
    }

    pub fn r(&self) -> f64 {
        self.x()
    }

    pub fn g(&self) -> f64 {
        self.y()
    }

    pub fn b(&self) -> f64 {
        self.z()
    }

    pub fn rgb(&self) -> Vector3 {
        self.xyz
    }

    pub fn set_r(&mut self, r: f64) -> &mut Self {
        self.set_x(r)
    }

    pub fn set_g(&mut self, g: f64) -> &mut Self {
        self.set_y(g)
    }

    pub fn set_b(&mut self, b: f64) -> &mut Self {
        self.set_z(b)
    }

    pub fn set_rgb(&mut self, rgb: Vector3) -> &mut Self {
        self.assign(rgb)
    }

    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    pub fn magnitude_sq(&self) -> f64 {
        d3::magnitude_sq(self.xyz)
    }

    pub fn set_magnitude(&mut self, m: f64) -> &mut Self {
        self.assign(d3::set_magnitude_with(self.xyz, m, self.magnitude))
    }

    pub fn angle_x(&self) -> f64 {
        d3::angle_x(self.xyz)
    }

    pub fn angle_y(&self) -> f64 {
        d3::angle_y(self.xyz)
    }

    pub fn angle_z(&self) -> f64 {
        d3::angle_z(self.xyz)
    }

    pub fn iter(&self) -> std::array::IntoIter<f64, 3> {
        self.xyz.into_iter()
    }

    // ─── Mutators ───

    pub fn copy_from(&mut self, v: &Vec3) -> &mut Self {
        self.assign(v.xyz)
    }

    pub fn set_zero(&mut self) -> &mut Self {
        self.assign(d3::zero())
    }

    pub fn randomize(&mut self) -> &mut Self {
        self.randomize_with(thread_source())
    }

    /// Random direction, current magnitude.
    pub fn randomize_with(&mut self, next: impl FnMut() -> f64) -> &mut Self {
        let m = self.magnitude;
        self.assign(d3::scale(d3::random_with(next), m))
    }

    pub fn add(&mut self, v: &Vec3) -> &mut Self {
        self.assign(d3::add(self.xyz, v.xyz))
    }

    pub fn subtract(&mut self, v: &Vec3) -> &mut Self {
        self.assign(d3::subtract(self.xyz, v.xyz))
    }

    pub fn multiply(&mut self, v: &Vec3) -> &mut Self {
        self.assign(d3::multiply(self.xyz, v.xyz))
    }

    pub fn divide(&mut self, v: &Vec3) -> &mut Self {
        self.assign(d3::divide(self.xyz, v.xyz))
    }

    pub fn scale(&mut self, c: f64) -> &mut Self {
        self.assign(d3::scale(self.xyz, c))
    }

    /// Replaces `self` with `self × v`.
    pub fn cross(&mut self, v: &Vec3) -> &mut Self {
        self.assign(d3::cross(self.xyz, v.xyz))
    }

    pub fn negate(&mut self) -> &mut Self {
        self.assign(d3::negate(self.xyz))
    }

    pub fn normalize(&mut self) -> &mut Self {
        self.assign(d3::normalize_with(self.xyz, self.magnitude))
    }

    pub fn clamp(&mut self, min: f64, max: f64) -> &mut Self {
        self.assign(d3::clamp_with(self.xyz, min, max, self.magnitude))
    }

    pub fn limit_max(&mut self, max: f64) -> &mut Self {
        self.assign(d3::limit_max_with(self.xyz, max, self.magnitude))
    }

    pub fn limit_min(&mut self, min: f64) -> &mut Self {
        self.assign(d3::limit_min_with(self.xyz, min, self.magnitude))
    }

    pub fn look_at(&mut self, target: &Vec3) -> &mut Self {
        self.assign(d3::look_at_with(self.xyz, target.xyz, self.magnitude, target.magnitude))
    }

    pub fn project(&mut self, onto: &Vec3) -> &mut Self {
        self.assign(d3::project_with(self.xyz, onto.xyz, onto.magnitude))
    }

    /// `t` is clamped to `[0, 1]`.
    pub fn lerp(&mut self, v: &Vec3, t: f64) -> &mut Self {
        self.assign(d3::lerp(self.xyz, v.xyz, t.clamp(0.0, 1.0)))
    }

    pub fn rotate_x(&mut self, phi: f64) -> &mut Self {
        self.assign(d3::rotate_x(self.xyz, phi))
    }

    pub fn rotate_y(&mut self, phi: f64) -> &mut Self {
        self.assign(d3::rotate_y(self.xyz, phi))
    }

    pub fn rotate_z(&mut self, phi: f64) -> &mut Self {
        self.assign(d3::rotate_z(self.xyz, phi))
    }

    pub fn rotate_x_about(&mut self, phi: f64, pivot: &Vec3) -> &mut Self {
        self.assign(d3::rotate_x_about(self.xyz, phi, pivot.xyz))
    }

    pub fn rotate_y_about(&mut self, phi: f64, pivot: &Vec3) -> &mut Self {
        self.assign(d3::rotate_y_about(self.xyz, phi, pivot.xyz))
    }

    pub fn rotate_z_about(&mut self, phi: f64, pivot: &Vec3) -> &mut Self {
        self.assign(d3::rotate_z_about(self.xyz, phi, pivot.xyz))
    }

    // ─── Queries ───

    /// Reflection across the unit `normal`, as a new vector.
    pub fn reflect(&self, normal: &Vec3) -> Vec3 {
        Vec3::from_array(d3::reflect(self.xyz, normal.xyz))
    }

    pub fn dot(&self, v: &Vec3) -> f64 {
        d3::dot(self.xyz, v.xyz)
    }

    pub fn angle_between(&self, v: &Vec3) -> f64 {
        d3::angle_between_with(self.xyz, v.xyz, self.magnitude, v.magnitude)
    }

    pub fn distance(&self, v: &Vec3) -> f64 {
        d3::distance(self.xyz, v.xyz)
    }

    pub fn distance_sq(&self, v: &Vec3) -> f64 {
        d3::distance_sq(self.xyz, v.xyz)
    }

    pub fn distance_chebyshev(&self, v: &Vec3) -> f64 {
        d3::distance_chebyshev(self.xyz, v.xyz)
    }

    pub fn distance_manhattan(&self, v: &Vec3) -> f64 {
        d3::distance_manhattan(self.xyz, v.xyz)
    }

    pub fn distance_minkowski(&self, v: &Vec3, p: f64) -> f64 {
        d3::distance_minkowski(self.xyz, v.xyz, p)
    }

    pub fn is_equal(&self, v: &Vec3) -> bool {
        d3::is_equal(self.xyz, v.xyz)
    }

    pub fn is_equal_approx(&self, v: &Vec3, epsilon: f64) -> bool {
        d3::is_equal_approx(self.xyz, v.xyz, epsilon)
    }

    pub fn is_opposite(&self, v: &Vec3) -> bool {
        d3::is_opposite(self.xyz, v.xyz)
    }

    pub fn is_zero(&self) -> bool {
        d3::is_zero(self.xyz)
    }

    pub fn is_nan(&self) -> bool {
        d3::is_nan(self.xyz)
    }

    pub fn is_infinite(&self) -> bool {
        d3::is_infinite(self.xyz)
    }

    pub fn to_object(&self) -> Xyz {
        d3::to_object(self.xyz)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.to_object())
    }
}

// ─── Pure functions ───

pub fn add(a: &Vec3, b: &Vec3) -> Vec3 {
    Vec3::from_array(d3::add(a.xyz, b.xyz))
}

pub fn subtract(a: &Vec3, b: &Vec3) -> Vec3 {
    Vec3::from_array(d3::subtract(a.xyz, b.xyz))
}

pub fn multiply(a: &Vec3, b: &Vec3) -> Vec3 {
    Vec3::from_array(d3::multiply(a.xyz, b.xyz))
}

pub fn divide(a: &Vec3, b: &Vec3) -> Vec3 {
    Vec3::from_array(d3::divide(a.xyz, b.xyz))
}

pub fn scale(v: &Vec3, c: f64) -> Vec3 {
    Vec3::from_array(d3::scale(v.xyz, c))
}

pub fn cross(a: &Vec3, b: &Vec3) -> Vec3 {
    Vec3::from_array(d3::cross(a.xyz, b.xyz))
}

pub fn negate(v: &Vec3) -> Vec3 {
    Vec3::from_array(d3::negate(v.xyz))
}

pub fn normalize(v: &Vec3) -> Vec3 {
    Vec3::from_array(d3::normalize_with(v.xyz, v.magnitude))
}

pub fn clamp(v: &Vec3, min: f64, max: f64) -> Vec3 {
    Vec3::from_array(d3::clamp_with(v.xyz, min, max, v.magnitude))
}

pub fn limit_max(v: &Vec3, max: f64) -> Vec3 {
    Vec3::from_array(d3::limit_max_with(v.xyz, max, v.magnitude))
}

pub fn limit_min(v: &Vec3, min: f64) -> Vec3 {
    Vec3::from_array(d3::limit_min_with(v.xyz, min, v.magnitude))
}

pub fn look_at(v: &Vec3, target: &Vec3) -> Vec3 {
    Vec3::from_array(d3::look_at_with(v.xyz, target.xyz, v.magnitude, target.magnitude))
}

pub fn project(v: &Vec3, onto: &Vec3) -> Vec3 {
    Vec3::from_array(d3::project_with(v.xyz, onto.xyz, onto.magnitude))
}

/// `t` is clamped to `[0, 1]`.
pub fn lerp(a: &Vec3, b: &Vec3, t: f64) -> Vec3 {
    Vec3::from_array(d3::lerp(a.xyz, b.xyz, t.clamp(0.0, 1.0)))
}

pub fn reflect(v: &Vec3, normal: &Vec3) -> Vec3 {
    v.reflect(normal)
}

pub fn rotate_x(v: &Vec3, phi: f64) -> Vec3 {
    Vec3::from_array(d3::rotate_x(v.xyz, phi))
}

pub fn rotate_y(v: &Vec3, phi: f64) -> Vec3 {
    Vec3::from_array(d3::rotate_y(v.xyz, phi))
}

pub fn rotate_z(v: &Vec3, phi: f64) -> Vec3 {
    Vec3::from_array(d3::rotate_z(v.xyz, phi))
}

pub fn dot(a: &Vec3, b: &Vec3) -> f64 {
    a.dot(b)
}

pub fn distance(a: &Vec3, b: &Vec3) -> f64 {
    a.distance(b)
}

pub fn angle_between(a: &Vec3, b: &Vec3) -> f64 {
    a.angle_between(b)
}

// ─── Trait impls ───

impl Default for Vec3 {
    fn default() -> Self {
        Self::zero()
    }
}

impl PartialEq for Vec3 {
    fn eq(&self, other: &Self) -> bool {
        self.xyz == other.xyz
    }
}

impl fmt::Debug for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vec3")
            .field("x", &self.xyz[0])
            .field("y", &self.xyz[1])
            .field("z", &self.xyz[2])
            .field("magnitude", &self.magnitude)
            .finish()
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_vector(f, "Vec3", &self.xyz)
    }
}

impl FromStr for Vec3 {
    type Err = VectorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_vector::<3>(s, "Vec3").map(Self::from_array)
    }
}

impl AbsDiffEq for Vec3 {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        d3::is_equal_approx(self.xyz, other.xyz, epsilon)
    }
}

impl From<Vector3> for Vec3 {
    fn from(xyz: Vector3) -> Self {
        Self::from_array(xyz)
    }
}

impl From<Vec3> for Vector3 {
    fn from(v: Vec3) -> Self {
        v.xyz
    }
}

impl From<Xyz> for Vec3 {
    fn from(o: Xyz) -> Self {
        Self::from_object(o)
    }
}

impl From<Vec3> for Xyz {
    fn from(v: Vec3) -> Self {
        v.to_object()
    }
}

impl std::ops::Index<usize> for Vec3 {
    type Output = f64;

    fn index(&self, i: usize) -> &f64 {
        &self.xyz[i]
    }
}

impl<'a> IntoIterator for &'a Vec3 {
    type Item = f64;
    type IntoIter = std::array::IntoIter<f64, 3>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl std::ops::Add for Vec3 {
    type Output = Vec3;

    fn add(self, rhs: Vec3) -> Vec3 {
        add(&self, &rhs)
    }
}

impl std::ops::Sub for Vec3 {
    type Output = Vec3;

    fn sub(self, rhs: Vec3) -> Vec3 {
        subtract(&self, &rhs)
    }
}

impl std::ops::Neg for Vec3 {
    type Output = Vec3;

    fn neg(self) -> Vec3 {
        negate(&self)
    }
}

impl std::ops::Mul<f64> for Vec3 {
    type Output = Vec3;

    fn mul(self, c: f64) -> Vec3 {
        scale(&self, c)
    }
}

impl std::ops::AddAssign for Vec3 {
    fn add_assign(&mut self, rhs: Vec3) {
        self.assign(d3::add(self.xyz, rhs.xyz));
    }
}

impl std::ops::SubAssign for Vec3 {
    fn sub_assign(&mut self, rhs: Vec3) {
        self.assign(d3::subtract(self.xyz, rhs.xyz));
    }
}

impl std::ops::MulAssign<f64> for Vec3 {
    fn mul_assign(&mut self, c: f64) {
        self.assign(d3::scale(self.xyz, c));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn cross_method_replaces_self() {
        let mut v = Vec3::new(1.0, 0.0, 0.0);
        let returned: *const Vec3 = v.cross(&Vec3::new(0.0, 1.0, 0.0));
        assert!(std::ptr::eq(returned, &v));
        assert_eq!(v.xyz(), [0.0, 0.0, 1.0]);
        assert_eq!(v.magnitude(), 1.0);

        let a = Vec3::new(0.0, 1.0, 0.0);
        let b = Vec3::new(1.0, 0.0, 0.0);
        assert_eq!(cross(&a, &b), Vec3::new(0.0, 0.0, -1.0));
        assert_eq!(a.xyz(), [0.0, 1.0, 0.0]);
    }

    #[test]
    fn magnitude_follows_setters_and_aliases() {
        let mut c = Vec3::new(2.0, 3.0, 6.0);
        assert_eq!(c.magnitude(), 7.0);
        c.set_r(0.0).set_g(0.0);
        assert_eq!(c.magnitude(), 6.0);
        c.set_b(-1.0);
        assert_eq!(c.magnitude(), 1.0);
        assert_eq!([c.r(), c.g(), c.b()], c.xyz());
        c.set_rgb([0.0, 3.0, 4.0]);
        assert_eq!(c.magnitude(), 5.0);
        assert_eq!(c.rgb(), [0.0, 3.0, 4.0]);
        c.set_z(0.0);
        assert_eq!(c.magnitude(), 3.0);
    }

    #[test]
    fn rotations_chain() {
        let mut v = Vec3::new(1.0, 0.0, 0.0);
        v.rotate_z(FRAC_PI_2).rotate_x(FRAC_PI_2);
        assert_abs_diff_eq!(v, Vec3::new(0.0, 0.0, 1.0), epsilon = 1e-12);
        v.rotate_y(FRAC_PI_2);
        assert_abs_diff_eq!(v, Vec3::new(1.0, 0.0, 0.0), epsilon = 1e-12);
        v.rotate_z_about(PI, &Vec3::new(2.0, 0.0, 0.0));
        assert_abs_diff_eq!(v, Vec3::new(3.0, 0.0, 0.0), epsilon = 1e-12);
        v.rotate_x_about(FRAC_PI_2, &Vec3::new(0.0, 1.0, 0.0))
            .rotate_y_about(0.0, &Vec3::zero());
        assert_abs_diff_eq!(v, Vec3::new(3.0, 1.0, -1.0), epsilon = 1e-12);
        assert_abs_diff_eq!(
            rotate_y(&Vec3::new(0.0, 0.0, 1.0), FRAC_PI_2),
            Vec3::new(1.0, 0.0, 0.0),
            epsilon = 1e-12
        );
    }

    #[test]
    fn reflect_returns_new_value_and_leaves_self() {
        let v = Vec3::new(1.0, -1.0, 0.5);
        let r = v.reflect(&Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(v.xyz(), [1.0, -1.0, 0.5]);
        assert_abs_diff_eq!(r, Vec3::new(1.0, 1.0, 0.5), epsilon = 1e-12);
    }

    #[test]
    fn lerp_clamps_t() {
        let a = Vec3::zero();
        let b = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(lerp(&a, &b, 1.5), b);
        let mut c = b;
        c.lerp(&a, -0.5);
        assert_eq!(c, b);
        c.lerp(&a, 0.5);
        assert_eq!(c.xyz(), [0.5, 1.0, 1.5]);
    }

    #[test]
    fn normalize_of_zero_stays_zero() {
        assert!(normalize(&Vec3::zero()).is_zero());
        let mut v = Vec3::new(0.0, 0.0, -4.0);
        v.normalize();
        assert_eq!(v.xyz(), [0.0, 0.0, -1.0]);
    }

    #[test]
    fn angle_between_uses_cached_magnitudes() {
        let a = Vec3::new(3.0, 0.0, 0.0);
        let b = Vec3::new(0.0, 0.0, 5.0);
        assert_abs_diff_eq!(a.angle_between(&b), FRAC_PI_2);
        assert_abs_diff_eq!(a.angle_between(&-a), PI);
    }

    #[test]
    fn homogeneous_extension() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        let h = v.extend(1.0);
        assert_eq!(h.xyzw(), [1.0, 2.0, 3.0, 1.0]);
        assert_eq!(h.truncate(), v);
    }

    #[test]
    fn text_and_json() {
        let v = Vec3::new(1.0, 2.5, -3.0);
        assert_eq!(v.to_string(), "Vec3(1, 2.5, -3)");
        assert_eq!("Vec3(1, 2.5, -3)".parse::<Vec3>().unwrap(), v);
        assert_eq!(
            "Vec3(1, 2)".parse::<Vec3>(),
            Err(VectorParseError::WrongArity { expected: 3, found: 2 })
        );
        let json = v.to_json().unwrap();
        assert_eq!(Vec3::from_json(&json).unwrap(), v);
        assert!(Vec3::from_json(r#"{"x":1,"y":"a","z":3}"#).is_err());
    }

    #[test]
    fn iteration_and_indexing() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v.iter().count(), 3);
        assert_eq!(v.iter().count(), 3);
        assert_eq!((&v).into_iter().map(|c| c * 2.0).collect::<Vec<_>>(), vec![2.0, 4.0, 6.0]);
        assert_eq!(v[2], 3.0);
    }

    #[test]
    fn random_and_randomize() {
        let mut next = crate::random::seeded(5);
        let v = Vec3::random_with(&mut next);
        assert_abs_diff_eq!(v.magnitude(), 1.0, epsilon = 1e-12);
        let mut w = Vec3::new(0.0, 0.0, 2.0);
        w.randomize();
        assert_abs_diff_eq!(w.magnitude(), 2.0, epsilon = 1e-12);
    }
}
