//! `Vec2`: a mutable 2D vector with a cached magnitude.
//!
//! Methods that change the vector return `&mut Self` so calls chain:
//!
//! ```
//! use vecmath_core::Vec2;
//!
//! let mut v = Vec2::new(3.0, 4.0);
//! v.normalize().scale(10.0);
//! assert_eq!(v.xy(), [6.0, 8.0]);
//! assert_eq!(v.magnitude(), 10.0);
//! ```
//!
//! The module-level functions (`vec2::add(&a, &b)` and friends) are the
//! non-mutating counterparts and return new values.

use std::fmt;
use std::str::FromStr;

use approx::AbsDiffEq;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::VectorParseError;
use crate::object::Xy;
use crate::random::thread_source;
use crate::snapshot::Snapshot2;
use crate::text::{parse_vector, write_vector};
use crate::tuple::{d2, Vector2};

/// Mutable 2D vector.
///
/// `magnitude()` is always the Euclidean length of the current components.
/// It is recomputed lazily after a mutation, and only if the components
/// actually changed.
#[derive(Clone, Copy, Serialize, Deserialize)]
#[serde(from = "Xy", into = "Xy")]
pub struct Vec2 {
    xy: Vector2,
    magnitude: f64,
    prev_xy: Vector2,
}

impl Vec2 {
    pub fn new(x: f64, y: f64) -> Self {
        Self::from_array([x, y])
    }

    /// Both components set to `v`.
    pub fn splat(v: f64) -> Self {
        Self::new(v, v)
    }

    pub fn from_array(xy: Vector2) -> Self {
        Self {
            xy,
            magnitude: d2::magnitude(xy),
            prev_xy: xy,
        }
    }

    /// Missing trailing components default to 0; extra ones are ignored.
    pub fn from_slice(s: &[f64]) -> Self {
        Self::from_array(d2::from_slice(s))
    }

    pub fn from_object(o: Xy) -> Self {
        Self::from_array(d2::from_object(o))
    }

    pub fn from_json(s: &str) -> Result<Self, VectorParseError> {
        match serde_json::from_str::<Xy>(s) {
            Ok(o) => Ok(Self::from_object(o)),
            Err(e) => {
                debug!(error = %e, "Rejected Vec2 JSON");
                Err(e.into())
            }
        }
    }

    pub fn zero() -> Self {
        Self::from_array(d2::zero())
    }

    pub fn one() -> Self {
        Self::from_array(d2::one())
    }

    /// Random unit vector.
    pub fn random() -> Self {
        Self::from_array(d2::random())
    }

    pub fn random_with(next: impl FnMut() -> f64) -> Self {
        Self::from_array(d2::random_with(next))
    }

    pub fn from_polar(r: f64, phi: f64) -> Self {
        Self::from_array(d2::from_polar(r, phi))
    }

    pub fn from_angle_x(phi: f64, magnitude: f64) -> Self {
        Self::from_array(d2::from_angle_x(phi, magnitude))
    }

    pub fn from_angle_y(phi: f64, magnitude: f64) -> Self {
        Self::from_array(d2::from_angle_y(phi, magnitude))
    }

    /// Frozen snapshot of `(x, y)`.
    pub fn immutable(x: f64, y: f64) -> Snapshot2 {
        Snapshot2::new([x, y])
    }

    /// Frozen snapshot of the current state.
    pub fn snapshot(&self) -> Snapshot2 {
        Snapshot2::new(self.xy)
    }

    fn assign(&mut self, xy: Vector2) -> &mut Self {
        self.xy = xy;
        self.update_magnitude();
        self
    }

    fn update_magnitude(&mut self) {
        let stale = self
            .xy
            .iter()
            .zip(&self.prev_xy)
            .any(|(a, b)| a.to_bits() != b.to_bits());
        if stale {
            self.magnitude = d2::magnitude(self.xy);
            self.prev_xy = self.xy;
        }
    }

    // ─── Accessors ───

    pub fn x(&self) -> f64 {
        self.xy[0]
    }

    pub fn y(&self) -> f64 {
        self.xy[1]
    }

    pub fn xy(&self) -> Vector2 {
        self.xy
    }

    pub fn set_x(&mut self, x: f64) -> &mut Self {
        self.assign([x, self.xy[1]])
    }

    pub fn set_y(&mut self, y: f64) -> &mut Self {
        self.assign([self.xy[0], y])
    }

    pub fn set_xy(&mut self, xy: Vector2) -> &mut Self {
        self.assign(xy)
    }

    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    pub fn magnitude_sq(&self) -> f64 {
        d2::magnitude_sq(self.xy)
    }

    /// Rescales along the current direction. A zero vector becomes `NaN`.
    pub fn set_magnitude(&mut self, m: f64) -> &mut Self {
        self.assign(d2::set_magnitude_with(self.xy, m, self.magnitude))
    }

    pub fn angle_x(&self) -> f64 {
        d2::angle_x(self.xy)
    }

    pub fn angle_y(&self) -> f64 {
        d2::angle_y(self.xy)
    }

    /// Points the vector at `phi` from the x-axis, keeping its magnitude.
    pub fn set_angle_x(&mut self, phi: f64) -> &mut Self {
        self.assign(d2::from_angle_x(phi, self.magnitude))
    }

    /// Points the vector at `phi` from the y-axis, keeping its magnitude.
    pub fn set_angle_y(&mut self, phi: f64) -> &mut Self {
        self.assign(d2::from_angle_y(phi, self.magnitude))
    }

    pub fn iter(&self) -> std::array::IntoIter<f64, 2> {
        self.xy.into_iter()
    }

    // ─── Mutators ───

    pub fn copy_from(&mut self, v: &Vec2) -> &mut Self {
        self.assign(v.xy)
    }

    pub fn set_zero(&mut self) -> &mut Self {
        self.assign(d2::zero())
    }

    /// Random direction, current magnitude.
    pub fn randomize(&mut self) -> &mut Self {
        self.randomize_with(thread_source())
    }

    pub fn randomize_with(&mut self, next: impl FnMut() -> f64) -> &mut Self {
        let m = self.magnitude;
        self.assign(d2::scale(d2::random_with(next), m))
    }

    pub fn add(&mut self, v: &Vec2) -> &mut Self {
        self.assign(d2::add(self.xy, v.xy))
    }

    pub fn subtract(&mut self, v: &Vec2) -> &mut Self {
        self.assign(d2::subtract(self.xy, v.xy))
    }

    pub fn multiply(&mut self, v: &Vec2) -> &mut Self {
        self.assign(d2::multiply(self.xy, v.xy))
    }

    pub fn divide(&mut self, v: &Vec2) -> &mut Self {
        self.assign(d2::divide(self.xy, v.xy))
    }

    pub fn scale(&mut self, c: f64) -> &mut Self {
        self.assign(d2::scale(self.xy, c))
    }

    pub fn negate(&mut self) -> &mut Self {
        self.assign(d2::negate(self.xy))
    }

    pub fn normalize(&mut self) -> &mut Self {
        self.assign(d2::normalize_with(self.xy, self.magnitude))
    }

    pub fn clamp(&mut self, min: f64, max: f64) -> &mut Self {
        self.assign(d2::clamp_with(self.xy, min, max, self.magnitude))
    }

    pub fn limit_max(&mut self, max: f64) -> &mut Self {
        self.assign(d2::limit_max_with(self.xy, max, self.magnitude))
    }

    pub fn limit_min(&mut self, min: f64) -> &mut Self {
        self.assign(d2::limit_min_with(self.xy, min, self.magnitude))
    }

    pub fn look_at(&mut self, target: &Vec2) -> &mut Self {
        self.assign(d2::look_at_with(self.xy, target.xy, self.magnitude, target.magnitude))
    }

    pub fn project(&mut self, onto: &Vec2) -> &mut Self {
        self.assign(d2::project_with(self.xy, onto.xy, onto.magnitude))
    }

    /// Moves toward `v`; `t` is clamped to `[0, 1]`.
    pub fn lerp(&mut self, v: &Vec2, t: f64) -> &mut Self {
        self.assign(d2::lerp(self.xy, v.xy, t.clamp(0.0, 1.0)))
    }

    pub fn rotate(&mut self, phi: f64) -> &mut Self {
        self.assign(d2::rotate(self.xy, phi))
    }

    pub fn rotate_about(&mut self, phi: f64, pivot: &Vec2) -> &mut Self {
        self.assign(d2::rotate_about(self.xy, phi, pivot.xy))
    }

    pub fn turn_left(&mut self) -> &mut Self {
        self.assign(d2::turn_left(self.xy))
    }

    pub fn turn_right(&mut self) -> &mut Self {
        self.assign(d2::turn_right(self.xy))
    }

    // ─── Queries ───

    /// Reflection across the unit `normal`, as a new vector. `self` is
    /// left untouched.
    pub fn reflect(&self, normal: &Vec2) -> Vec2 {
        Vec2::from_array(d2::reflect(self.xy, normal.xy))
    }

    pub fn dot(&self, v: &Vec2) -> f64 {
        d2::dot(self.xy, v.xy)
    }

    pub fn cross(&self, v: &Vec2) -> f64 {
        d2::cross(self.xy, v.xy)
    }

    pub fn angle_between(&self, v: &Vec2) -> f64 {
        d2::angle_between(self.xy, v.xy)
    }

    pub fn distance(&self, v: &Vec2) -> f64 {
        d2::distance(self.xy, v.xy)
    }

    pub fn distance_sq(&self, v: &Vec2) -> f64 {
        d2::distance_sq(self.xy, v.xy)
    }

    pub fn distance_chebyshev(&self, v: &Vec2) -> f64 {
        d2::distance_chebyshev(self.xy, v.xy)
    }

    pub fn distance_manhattan(&self, v: &Vec2) -> f64 {
        d2::distance_manhattan(self.xy, v.xy)
    }

    pub fn distance_minkowski(&self, v: &Vec2, p: f64) -> f64 {
        d2::distance_minkowski(self.xy, v.xy, p)
    }

    pub fn is_equal(&self, v: &Vec2) -> bool {
        d2::is_equal(self.xy, v.xy)
    }

    pub fn is_equal_approx(&self, v: &Vec2, epsilon: f64) -> bool {
        d2::is_equal_approx(self.xy, v.xy, epsilon)
    }

    pub fn is_opposite(&self, v: &Vec2) -> bool {
        d2::is_opposite(self.xy, v.xy)
    }

    pub fn is_zero(&self) -> bool {
        d2::is_zero(self.xy)
    }

    pub fn is_nan(&self) -> bool {
        d2::is_nan(self.xy)
    }

    pub fn is_infinite(&self) -> bool {
        d2::is_infinite(self.xy)
    }

    pub fn to_object(&self) -> Xy {
        d2::to_object(self.xy)
    }

    /// `{"x":..,"y":..}`. Non-finite components are written as `null`.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.to_object())
    }
}

// ─── Pure functions ───

pub fn add(a: &Vec2, b: &Vec2) -> Vec2 {
    Vec2::from_array(d2::add(a.xy, b.xy))
}

pub fn subtract(a: &Vec2, b: &Vec2) -> Vec2 {
    Vec2::from_array(d2::subtract(a.xy, b.xy))
}

pub fn multiply(a: &Vec2, b: &Vec2) -> Vec2 {
    Vec2::from_array(d2::multiply(a.xy, b.xy))
}

pub fn divide(a: &Vec2, b: &Vec2) -> Vec2 {
    Vec2::from_array(d2::divide(a.xy, b.xy))
}

pub fn scale(v: &Vec2, c: f64) -> Vec2 {
    Vec2::from_array(d2::scale(v.xy, c))
}

pub fn negate(v: &Vec2) -> Vec2 {
    Vec2::from_array(d2::negate(v.xy))
}

pub fn normalize(v: &Vec2) -> Vec2 {
    Vec2::from_array(d2::normalize_with(v.xy, v.magnitude))
}

pub fn clamp(v: &Vec2, min: f64, max: f64) -> Vec2 {
    Vec2::from_array(d2::clamp_with(v.xy, min, max, v.magnitude))
}

pub fn limit_max(v: &Vec2, max: f64) -> Vec2 {
    Vec2::from_array(d2::limit_max_with(v.xy, max, v.magnitude))
}

pub fn limit_min(v: &Vec2, min: f64) -> Vec2 {
    Vec2::from_array(d2::limit_min_with(v.xy, min, v.magnitude))
}

pub fn look_at(v: &Vec2, target: &Vec2) -> Vec2 {
    Vec2::from_array(d2::look_at_with(v.xy, target.xy, v.magnitude, target.magnitude))
}

pub fn project(v: &Vec2, onto: &Vec2) -> Vec2 {
    Vec2::from_array(d2::project_with(v.xy, onto.xy, onto.magnitude))
}

/// Clamps `t` to `[0, 1]`, like the method form.
pub fn lerp(a: &Vec2, b: &Vec2, t: f64) -> Vec2 {
    Vec2::from_array(d2::lerp(a.xy, b.xy, t.clamp(0.0, 1.0)))
}

pub fn reflect(v: &Vec2, normal: &Vec2) -> Vec2 {
    v.reflect(normal)
}

pub fn rotate(v: &Vec2, phi: f64) -> Vec2 {
    Vec2::from_array(d2::rotate(v.xy, phi))
}

pub fn rotate_about(v: &Vec2, phi: f64, pivot: &Vec2) -> Vec2 {
    Vec2::from_array(d2::rotate_about(v.xy, phi, pivot.xy))
}

pub fn turn_left(v: &Vec2) -> Vec2 {
    Vec2::from_array(d2::turn_left(v.xy))
}

pub fn turn_right(v: &Vec2) -> Vec2 {
    Vec2::from_array(d2::turn_right(v.xy))
}

pub fn dot(a: &Vec2, b: &Vec2) -> f64 {
    a.dot(b)
}

pub fn cross(a: &Vec2, b: &Vec2) -> f64 {
    a.cross(b)
}

pub fn distance(a: &Vec2, b: &Vec2) -> f64 {
    a.distance(b)
}

pub fn angle_between(a: &Vec2, b: &Vec2) -> f64 {
    a.angle_between(b)
}

// ─── Trait impls ───

impl Default for Vec2 {
    fn default() -> Self {
        Self::zero()
    }
}

impl PartialEq for Vec2 {
    fn eq(&self, other: &Self) -> bool {
        self.xy == other.xy
    }
}

impl fmt::Debug for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vec2")
            .field("x", &self.xy[0])
            .field("y", &self.xy[1])
            .field("magnitude", &self.magnitude)
            .finish()
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_vector(f, "Vec2", &self.xy)
    }
}

impl FromStr for Vec2 {
    type Err = VectorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_vector::<2>(s, "Vec2").map(Self::from_array)
    }
}

impl AbsDiffEq for Vec2 {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        d2::is_equal_approx(self.xy, other.xy, epsilon)
    }
}

impl From<Vector2> for Vec2 {
    fn from(xy: Vector2) -> Self {
        Self::from_array(xy)
    }
}

impl From<Vec2> for Vector2 {
    fn from(v: Vec2) -> Self {
        v.xy
    }
}

impl From<Xy> for Vec2 {
    fn from(o: Xy) -> Self {
        Self::from_object(o)
    }
}

impl From<Vec2> for Xy {
    fn from(v: Vec2) -> Self {
        v.to_object()
    }
}

impl std::ops::Index<usize> for Vec2 {
    type Output = f64;

    fn index(&self, i: usize) -> &f64 {
        &self.xy[i]
    }
}

impl<'a> IntoIterator for &'a Vec2 {
    type Item = f64;
    type IntoIter = std::array::IntoIter<f64, 2>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl std::ops::Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        add(&self, &rhs)
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        subtract(&self, &rhs)
    }
}

impl std::ops::Neg for Vec2 {
    type Output = Vec2;

    fn neg(self) -> Vec2 {
        negate(&self)
    }
}

impl std::ops::Mul<f64> for Vec2 {
    type Output = Vec2;

    fn mul(self, c: f64) -> Vec2 {
        scale(&self, c)
    }
}

impl std::ops::AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        self.assign(d2::add(self.xy, rhs.xy));
    }
}

impl std::ops::SubAssign for Vec2 {
    fn sub_assign(&mut self, rhs: Vec2) {
        self.assign(d2::subtract(self.xy, rhs.xy));
    }
}

impl std::ops::MulAssign<f64> for Vec2 {
    fn mul_assign(&mut self, c: f64) {
        self.assign(d2::scale(self.xy, c));
    }
}
