//! `Vec4`: a mutable 4D vector with a cached magnitude.

use std::fmt;
use std::str::FromStr;

use approx::AbsDiffEq;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::VectorParseError;
use crate::object::Xyzw;
use crate::random::thread_source;
use crate::snapshot::Snapshot4;
use crate::text::{parse_vector, write_vector};
use crate::tuple::{d4, Vector4};
use crate::vec3::Vec3;

/// Mutable 4D vector, also used as a homogeneous coordinate or RGBA color.
#[derive(Clone, Copy, Serialize, Deserialize)]
#[serde(from = "Xyzw", into = "Xyzw")]
pub struct Vec4 {
    xyzw: Vector4,
    magnitude: f64,
    prev_xyzw: Vector4,
}

impl Vec4 {
    pub fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self::from_array([x, y, z, w])
    }

    /// Homogeneous point, `w = 1`.
    pub fn point(x: f64, y: f64, z: f64) -> Self {
        Self::new(x, y, z, 1.0)
    }

    /// Homogeneous direction, `w = 0`.
    pub fn direction(x: f64, y: f64, z: f64) -> Self {
        Self::new(x, y, z, 0.0)
    }

    pub fn from_array(xyzw: Vector4) -> Self {
        Self {
            xyzw,
            magnitude: d4::magnitude(xyzw),
            prev_xyzw: xyzw,
        }
    }

    pub fn from_slice(s: &[f64]) -> Self {
        Self::from_array(d4::from_slice(s))
    }

    pub fn from_object(o: Xyzw) -> Self {
        Self::from_array(d4::from_object(o))
    }

    pub fn from_json(s: &str) -> Result<Self, VectorParseError> {
        match serde_json::from_str::<Xyzw>(s) {
            Ok(o) => Ok(Self::from_object(o)),
            Err(e) => {
                debug!(error = %e, "Rejected Vec4 JSON");
                Err(e.into())
            }
        }
    }

    pub fn zero() -> Self {
        Self::from_array(d4::zero())
    }

    pub fn one() -> Self {
        Self::from_array(d4::one())
    }

    pub fn random() -> Self {
        Self::from_array(d4::random())
    }

    pub fn random_with(next: impl FnMut() -> f64) -> Self {
        Self::from_array(d4::random_with(next))
    }

    pub fn immutable(x: f64, y: f64, z: f64, w: f64) -> Snapshot4 {
        Snapshot4::new([x, y, z, w])
    }

    pub fn snapshot(&self) -> Snapshot4 {
        Snapshot4::new(self.xyzw)
    }

    /// Drops `w`.
    pub fn truncate(&self) -> Vec3 {
        let [x, y, z, _] = self.xyzw;
        Vec3::new(x, y, z)
    }

    fn assign(&mut self, xyzw: Vector4) -> &mut Self {
        self.xyzw = xyzw;
        self.update_magnitude();
        self
    }

    fn update_magnitude(&mut self) {
        let stale = self
            .xyzw
            .iter()
            .zip(&self.prev_xyzw)
            .any(|(a, b)| a.to_bits() != b.to_bits());
        if stale {
            self.magnitude = d4::magnitude(self.xyzw);
            self.prev_xyzw = self.xyzw;
        }
    }

    fn with_component(&mut self, i: usize, c: f64) -> &mut Self {
        let mut xyzw = self.xyzw;
        xyzw[i] = c;
        self.assign(xyzw)
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

    pub fn set_x(&mut self, x: f64) -> &mut Self {
        self.with_component(0, x)
    }

    pub fn set_y(&mut self, y: f64) -> &mut Self {
        self.with_component(1, y)
    }

    pub fn set_z(&mut self, z: f64) -> &mut Self {
        self.with_component(2, z)
    }

    pub fn set_w(&mut self, w: f64) -> &mut Self {
        self.with_component(3, w)
    }

    pub fn set_xyzw(&mut self, xyzw: Vector4) -> &mut Self {
        self.assign(xyzw)
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

    pub fn set_r(&mut self, r: f64) -> &mut Self {
        self.with_component(0, r)
    }

    pub fn set_g(&mut self, g: f64) -> &mut Self {
        self.with_component(1, g)
    }

    pub fn set_b(&mut self, b: f64) -> &mut Self {
        self.with_component(2, b)
    }

    pub fn set_a(&mut self, a: f64) -> &mut Self {
        self.with_component(3, a)
    }

    pub fn set_rgba(&mut self, rgba: Vector4) -> &mut Self {
        self.assign(rgba)
    }

    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    pub fn magnitude_sq(&self) -> f64 {
        d4::magnitude_sq(self.xyzw)
    }

    pub fn set_magnitude(&mut self, m: f64) -> &mut Self {
        self.assign(d4::set_magnitude_with(self.xyzw, m, self.magnitude))
    }

    pub fn angle_x(&self) -> f64 {
        d4::angle_x(self.xyzw)
    }

    pub fn angle_y(&self) -> f64 {
        d4::angle_y(self.xyzw)
    }

    pub fn angle_z(&self) -> f64 {
        d4::angle_z(self.xyzw)
    }

    pub fn angle_w(&self) -> f64 {
        d4::angle_w(self.xyzw)
    }

    pub fn iter(&self) -> std::array::IntoIter<f64, 4> {
        self.xyzw.into_iter()
    }

    pub fn copy_from(&mut self, v: &Vec4) -> &mut Self {
        self.assign(v.xyzw)
    }

    pub fn set_zero(&mut self) -> &mut Self {
        self.assign(d4::zero())
    }

    pub fn randomize(&mut self) -> &mut Self {
        self.randomize_with(thread_source())
    }

    pub fn randomize_with(&mut self, next: impl FnMut() -> f64) -> &mut Self {
        let m = self.magnitude;
        self.assign(d4::scale(d4::random_with(next), m))
    }

    pub fn add(&mut self, v: &Vec4) -> &mut Self {
        self.assign(d4::add(self.xyzw, v.xyzw))
    }

    pub fn subtract(&mut self, v: &Vec4) -> &mut Self {
        self.assign(d4::subtract(self.xyzw, v.xyzw))
    }

    pub fn multiply(&mut self, v: &Vec4) -> &mut Self {
        self.assign(d4::multiply(self.xyzw, v.xyzw))
    }

    pub fn divide(&mut self, v: &Vec4) -> &mut Self {
        self.assign(d4::divide(self.xyzw, v.xyzw))
    }

    pub fn scale(&mut self, c: f64) -> &mut Self {
        self.assign(d4::scale(self.xyzw, c))
    }

    pub fn negate(&mut self) -> &mut Self {
        self.assign(d4::negate(self.xyzw))
    }

    pub fn normalize(&mut self) -> &mut Self {
        self.assign(d4::normalize_with(self.xyzw, self.magnitude))
    }

    pub fn clamp(&mut self, min: f64, max: f64) -> &mut Self {
        self.assign(d4::clamp_with(self.xyzw, min, max, self.magnitude))
    }

    pub fn limit_max(&mut self, max: f64) -> &mut Self {
        self.assign(d4::limit_max_with(self.xyzw, max, self.magnitude))
    }

    pub fn limit_min(&mut self, min: f64) -> &mut Self {
        self.assign(d4::limit_min_with(self.xyzw, min, self.magnitude))
    }

    pub fn look_at(&mut self, target: &Vec4) -> &mut Self {
        self.assign(d4::look_at_with(self.xyzw, target.xyzw, self.magnitude, target.magnitude))
    }

    pub fn project(&mut self, onto: &Vec4) -> &mut Self {
        self.assign(d4::project_with(self.xyzw, onto.xyzw, onto.magnitude))
    }

    /// `t` is clamped to `[0, 1]`.
    pub fn lerp(&mut self, v: &Vec4, t: f64) -> &mut Self {
        self.assign(d4::lerp(self.xyzw, v.xyzw, t.clamp(0.0, 1.0)))
    }

    pub fn reflect(&self, normal: &Vec4) -> Vec4 {
        Vec4::from_array(d4::reflect(self.xyzw, normal.xyzw))
    }

    pub fn dot(&self, v: &Vec4) -> f64 {
        d4::dot(self.xyzw, v.xyzw)
    }

    pub fn angle_between(&self, v: &Vec4) -> f64 {
        d4::angle_between_with(self.xyzw, v.xyzw, self.magnitude, v.magnitude)
    }

    pub fn distance(&self, v: &Vec4) -> f64 {
        d4::distance(self.xyzw, v.xyzw)
    }

    pub fn distance_sq(&self, v: &Vec4) -> f64 {
        d4::distance_sq(self.xyzw, v.xyzw)
    }

    pub fn distance_chebyshev(&self, v: &Vec4) -> f64 {
        d4::distance_chebyshev(self.xyzw, v.xyzw)
    }

    pub fn distance_manhattan(&self, v: &Vec4) -> f64 {
        d4::distance_manhattan(self.xyzw, v.xyzw)
    }

    pub fn distance_minkowski(&self, v: &Vec4, p: f64) -> f64 {
        d4::distance_minkowski(self.xyzw, v.xyzw, p)
    }

    pub fn is_equal(&self, v: &Vec4) -> bool {
        d4::is_equal(self.xyzw, v.xyzw)
    }

    pub fn is_equal_approx(&self, v: &Vec4, epsilon: f64) -> bool {
        d4::is_equal_approx(self.xyzw, v.xyzw, epsilon)
    }

    pub fn is_opposite(&self, v: &Vec4) -> bool {
        d4::is_opposite(self.xyzw, v.xyzw)
    }

    pub fn is_zero(&self) -> bool {
        d4::is_zero(self.xyzw)
    }

    pub fn is_nan(&self) -> bool {
        d4::is_nan(self.xyzw)
    }

    pub fn is_infinite(&self) -> bool {
        d4::is_infinite(self.xyzw)
    }

    pub fn to_object(&self) -> Xyzw {
        d4::to_object(self.xyzw)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.to_object())
    }
}

pub fn add(a: &Vec4, b: &Vec4) -> Vec4 {
    Vec4::from_array(d4::add(a.xyzw, b.xyzw))
}

pub fn subtract(a: &Vec4, b: &Vec4) -> Vec4 {
    Vec4::from_array(d4::subtract(a.xyzw, b.xyzw))
}

pub fn multiply(a: &Vec4, b: &Vec4) -> Vec4 {
    Vec4::from_array(d4::multiply(a.xyzw, b.xyzw))
}

pub fn divide(a: &Vec4, b: &Vec4) -> Vec4 {
    Vec4::from_array(d4::divide(a.xyzw, b.xyzw))
}

pub fn scale(v: &Vec4, c: f64) -> Vec4 {
    Vec4::from_array(d4::scale(v.xyzw, c))
}

pub fn negate(v: &Vec4) -> Vec4 {
    Vec4::from_array(d4::negate(v.xyzw))
}

pub fn normalize(v: &Vec4) -> Vec4 {
    Vec4::from_array(d4::normalize_with(v.xyzw, v.magnitude))
}

pub fn clamp(v: &Vec4, min: f64, max: f64) -> Vec4 {
    Vec4::from_array(d4::clamp_with(v.xyzw, min, max, v.magnitude))
}

pub fn limit_max(v: &Vec4, max: f64) -> Vec4 {
    Vec4::from_array(d4::limit_max_with(v.xyzw, max, v.magnitude))
}

pub fn limit_min(v: &Vec4, min: f64) -> Vec4 {
    Vec4::from_array(d4::limit_min_with(v.xyzw, min, v.magnitude))
}

pub fn look_at(v: &Vec4, target: &Vec4) -> Vec4 {
    Vec4::from_array(d4::look_at_with(v.xyzw, target.xyzw, v.magnitude, target.magnitude))
}

pub fn project(v: &Vec4, onto: &Vec4) -> Vec4 {
    Vec4::from_array(d4::project_with(v.xyzw, onto.xyzw, onto.magnitude))
}

/// `t` is clamped to `[0, 1]`.
pub fn lerp(a: &Vec4, b: &Vec4, t: f64) -> Vec4 {
    Vec4::from_array(d4::lerp(a.xyzw, b.xyzw, t.clamp(0.0, 1.0)))
}

pub fn reflect(v: &Vec4, normal: &Vec4) -> Vec4 {
    v.reflect(normal)
}

pub fn dot(a: &Vec4, b: &Vec4) -> f64 {
    a.dot(b)
}

pub fn distance(a: &Vec4, b: &Vec4) -> f64 {
    a.distance(b)
}

pub fn angle_between(a: &Vec4, b: &Vec4) -> f64 {
    a.angle_between(b)
}

impl Default for Vec4 {
    fn default() -> Self {
        Self::zero()
    }
}

impl PartialEq for Vec4 {
    fn eq(&self, other: &Self) -> bool {
        self.xyzw == other.xyzw
    }
}

impl fmt::Debug for Vec4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vec4")
            .field("x", &self.xyzw[0])
            .field("y", &self.xyzw[1])
            .field("z", &self.xyzw[2])
            .field("w", &self.xyzw[3])
            .field("magnitude", &self.magnitude)
            .finish()
    }
}

impl fmt::Display for Vec4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_vector(f, "Vec4", &self.xyzw)
    }
}

impl FromStr for Vec4 {
    type Err = VectorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_vector::<4>(s, "Vec4").map(Self::from_array)
    }
}

impl AbsDiffEq for Vec4 {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        d4::is_equal_approx(self.xyzw, other.xyzw, epsilon)
    }
}

impl From<Vector4> for Vec4 {
    fn from(xyzw: Vector4) -> Self {
        Self::from_array(xyzw)
    }
}

impl From<Vec4> for Vector4 {
    fn from(v: Vec4) -> Self {
        v.xyzw
    }
}

impl From<Xyzw> for Vec4 {
    fn from(o: Xyzw) -> Self {
        Self::from_object(o)
    }
}

impl From<Vec4> for Xyzw {
    fn from(v: Vec4) -> Self {
        v.to_object()
    }
}

impl std::ops::Index<usize> for Vec4 {
    type Output = f64;

    fn index(&self, i: usize) -> &f64 {
        &self.xyzw[i]
    }
}

impl<'a> IntoIterator for &'a Vec4 {
    type Item = f64;
    type IntoIter = std::array::IntoIter<f64, 4>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl std::ops::Add for Vec4 {
    type Output = Vec4;

    fn add(self, rhs: Vec4) -> Vec4 {
        add(&self, &rhs)
    }
}

impl std::ops::Sub for Vec4 {
    type Output = Vec4;

    fn sub(self, rhs: Vec4) -> Vec4 {
        subtract(&self, &rhs)
    }
}

impl std::ops::Neg for Vec4 {
    type Output = Vec4;

    fn neg(self) -> Vec4 {
        negate(&self)
    }
}

impl std::ops::Mul<f64> for Vec4 {
    type Output = Vec4;

    fn mul(self, c: f64) -> Vec4 {
        scale(&self, c)
    }
}

impl std::ops::AddAssign for Vec4 {
    fn add_assign(&mut self, rhs: Vec4) {
        self.assign(d4::add(self.xyzw, rhs.xyzw));
    }
}

impl std::ops::SubAssign for Vec4 {
    fn sub_assign(&mut self, rhs: Vec4) {
        self.assign(d4::subtract(self.xyzw, rhs.xyzw));
    }
}

impl std::ops::MulAssign<f64> for Vec4 {
    fn mul_assign(&mut self, c: f64) {
        self.assign(d4::scale(self.xyzw, c));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn homogeneous_constructors() {
        assert_eq!(Vec4::point(1.0, 2.0, 3.0).w(), 1.0);
        assert_eq!(Vec4::direction(1.0, 2.0, 3.0).w(), 0.0);
        assert_eq!(Vec4::point(1.0, 2.0, 3.0).truncate(), Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn point_minus_point_is_direction() {
        let d = Vec4::point(4.0, 6.0, 8.0) - Vec4::point(1.0, 2.0, 3.0);
        assert_eq!(d, Vec4::direction(3.0, 4.0, 5.0));
    }

    #[test]
    fn rgba_aliases_share_storage() {
        let mut c = Vec4::new(0.0, 0.0, 0.0, 0.0);
        c.set_r(1.0).set_g(1.0).set_b(1.0).set_a(1.0);
        assert_eq!(c.xyzw(), [1.0; 4]);
        assert_eq!(c.magnitude(), 2.0);
        c.set_rgba([0.0, 0.0, 3.0, 4.0]);
        assert_eq!([c.r(), c.g(), c.b(), c.a()], [0.0, 0.0, 3.0, 4.0]);
        assert_eq!(c.magnitude(), 5.0);
        c.set_w(0.0);
        assert_eq!(c.magnitude(), 3.0);
        assert_eq!(c.rgba(), c.xyzw());
    }

    #[test]
    fn divide_by_zero_in_w_is_infinite() {
        let mut v = Vec4::new(1.0, 1.0, 1.0, 1.0);
        v.divide(&Vec4::new(1.0, 1.0, 1.0, 0.0));
        assert_eq!(v.w(), f64::INFINITY);
        assert_eq!(v.z(), 1.0);
    }

    #[test]
    fn normalize_scale_chain() {
        let mut v = Vec4::new(2.0, 2.0, 2.0, 2.0);
        v.normalize().scale(4.0).negate();
        assert_eq!(v.xyzw(), [-2.0; 4]);
        assert_eq!(v.magnitude(), 4.0);
        assert!(Vec4::zero().normalize().is_zero());
    }

    #[test]
    fn reflect_returns_new_value_and_leaves_self() {
        let v = Vec4::new(1.0, 1.0, 1.0, 1.0);
        let r = v.reflect(&Vec4::direction(0.0, 1.0, 0.0));
        assert_eq!(r.xyzw(), [1.0, -1.0, 1.0, 1.0]);
        assert_eq!(v.xyzw(), [1.0; 4]);
    }

    #[test]
    fn lerp_clamps_t() {
        let a = Vec4::zero();
        let b = Vec4::one();
        assert_eq!(lerp(&a, &b, 7.0), b);
        assert_eq!(lerp(&a, &b, 0.25).xyzw(), [0.25; 4]);
    }

    #[test]
    fn shape_methods() {
        let mut v = Vec4::new(1.0, 1.0, 1.0, 1.0);
        v.limit_min(4.0);
        assert_eq!(v.xyzw(), [2.0; 4]);
        v.clamp(0.0, 1.0);
        assert_eq!(v.xyzw(), [0.5; 4]);
        v.look_at(&Vec4::direction(0.0, 0.0, -2.0));
        assert_eq!(v.xyzw(), [0.0, 0.0, -1.0, 0.0]);
        v.set_xyzw([1.0, 2.0, 3.0, 4.0]).project(&Vec4::new(0.0, 0.0, 0.0, 2.0));
        assert_eq!(v.xyzw(), [0.0, 0.0, 0.0, 4.0]);
        v.limit_max(1.0);
        assert_eq!(v.xyzw(), [0.0, 0.0, 0.0, 1.0]);
        v.set_magnitude(3.0);
        assert_eq!(v.w(), 3.0);
    }

    #[test]
    fn random_is_unit_length() {
        assert_abs_diff_eq!(Vec4::random().magnitude(), 1.0, epsilon = 1e-12);
        let mut v = Vec4::point(0.0, 0.0, 0.0);
        v.randomize_with(crate::random::seeded(9));
        assert_abs_diff_eq!(v.magnitude(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn text_json_and_snapshot() {
        let v = Vec4::new(0.5, -1.0, 2.0, 1.0);
        assert_eq!(v.to_string(), "Vec4(0.5, -1, 2, 1)");
        assert_eq!(v.to_string().parse::<Vec4>().unwrap(), v);
        assert_eq!(Vec4::from_json(&v.to_json().unwrap()).unwrap(), v);
        let s = v.snapshot();
        assert_eq!(s.xyzw(), v.xyzw());
        assert_eq!(s.magnitude(), v.magnitude());
        assert_eq!(Vec4::immutable(0.5, -1.0, 2.0, 1.0), s);
        assert_eq!(v.iter().collect::<Vec<_>>(), vec![0.5, -1.0, 2.0, 1.0]);
        assert_eq!(v[3], 1.0);
    }
}
