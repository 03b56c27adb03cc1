//! Pure functions over 2D tuples `[x, y]`.

use std::f64::consts::TAU;

use crate::object::Xy;
use crate::random::thread_source;
use crate::snapshot::Snapshot2;

/// A 2D vector as a plain component array.
pub type Vector2 = [f64; 2];

// ─── Construction ───

/// `[0, 0]`.
pub fn zero() -> Vector2 {
    [0.0, 0.0]
}

/// `[1, 1]`.
pub fn one() -> Vector2 {
    [1.0, 1.0]
}

/// Uniformly distributed unit vector drawn from the thread-local generator.
pub fn random() -> Vector2 {
    random_with(thread_source())
}

/// Uniformly distributed unit vector: a uniform angle on the circle.
pub fn random_with(mut next: impl FnMut() -> f64) -> Vector2 {
    let phi = next() * TAU;
    [phi.cos(), phi.sin()]
}

/// Vector of length `r` at angle `phi` from the positive x-axis.
pub fn from_polar(r: f64, phi: f64) -> Vector2 {
    [r * phi.cos(), r * phi.sin()]
}

/// Vector of the given magnitude whose [`angle_x`] is `phi`.
pub fn from_angle_x(phi: f64, magnitude: f64) -> Vector2 {
    [magnitude * phi.cos(), magnitude * phi.sin()]
}

/// Vector of the given magnitude whose [`angle_y`] is `phi`.
pub fn from_angle_y(phi: f64, magnitude: f64) -> Vector2 {
    [magnitude * -phi.sin(), magnitude * phi.cos()]
}

pub fn from_object(o: Xy) -> Vector2 {
    [o.x, o.y]
}

pub fn to_object(xy: Vector2) -> Xy {
    Xy { x: xy[0], y: xy[1] }
}

/// Reads up to two leading components; missing ones default to 0.
pub fn from_slice(s: &[f64]) -> Vector2 {
    [
        s.first().copied().unwrap_or(0.0),
        s.get(1).copied().unwrap_or(0.0),
    ]
}

/// Frozen snapshot with precomputed derived values.
pub fn immutable(xy: Vector2) -> Snapshot2 {
    Snapshot2::new(xy)
}

// ─── Arithmetic ───

pub fn add(a: Vector2, b: Vector2) -> Vector2 {
    [a[0] + b[0], a[1] + b[1]]
}

pub fn subtract(a: Vector2, b: Vector2) -> Vector2 {
    [a[0] - b[0], a[1] - b[1]]
}

/// Component-wise product.
pub fn multiply(a: Vector2, b: Vector2) -> Vector2 {
    [a[0] * b[0], a[1] * b[1]]
}

/// Component-wise quotient. A divisor component of exactly zero yields
/// `+inf` for that component, whatever the sign of the dividend.
pub fn divide(a: Vector2, b: Vector2) -> Vector2 {
    [
        if b[0] == 0.0 { f64::INFINITY } else { a[0] / b[0] },
        if b[1] == 0.0 { f64::INFINITY } else { a[1] / b[1] },
    ]
}

pub fn scale(xy: Vector2, c: f64) -> Vector2 {
    [xy[0] * c, xy[1] * c]
}

pub fn negate(xy: Vector2) -> Vector2 {
    [-xy[0], -xy[1]]
}

// ─── Products ───

pub fn dot(a: Vector2, b: Vector2) -> f64 {
    a[0] * b[0] + a[1] * b[1]
}

/// The z-component of the 3D cross product of two planar vectors.
pub fn cross(a: Vector2, b: Vector2) -> f64 {
    a[0] * b[1] - a[1] * b[0]
}

// ─── Magnitude ───

pub fn magnitude(xy: Vector2) -> f64 {
    (xy[0] * xy[0] + xy[1] * xy[1]).sqrt()
}

pub fn magnitude_sq(xy: Vector2) -> f64 {
    xy[0] * xy[0] + xy[1] * xy[1]
}

/// Rescales to `new_magnitude` along the current direction.
///
/// A zero vector has no direction; the result is `NaN`.
pub fn set_magnitude(xy: Vector2, new_magnitude: f64) -> Vector2 {
    set_magnitude_with(xy, new_magnitude, magnitude(xy))
}

/// [`set_magnitude`] with the current magnitude already known.
pub fn set_magnitude_with(xy: Vector2, new_magnitude: f64, m: f64) -> Vector2 {
    [(xy[0] / m) * new_magnitude, (xy[1] / m) * new_magnitude]
}

// ─── Distances ───

pub fn distance(a: Vector2, b: Vector2) -> f64 {
    distance_sq(a, b).sqrt()
}

pub fn distance_sq(a: Vector2, b: Vector2) -> f64 {
    let dx = a[0] - b[0];
    let dy = a[1] - b[1];
    dx * dx + dy * dy
}

/// L∞ distance: the largest absolute component difference. NaN in either
/// position yields NaN.
pub fn distance_chebyshev(a: Vector2, b: Vector2) -> f64 {
    let dx = (a[0] - b[0]).abs();
    let dy = (a[1] - b[1]).abs();
    if dx.is_nan() || dy.is_nan() {
        f64::NAN
    } else {
        dx.max(dy)
    }
}

/// L1 distance: the sum of absolute component differences.
pub fn distance_manhattan(a: Vector2, b: Vector2) -> f64 {
    (a[0] - b[0]).abs() + (a[1] - b[1]).abs()
}

/// Minkowski distance of order `p`.
pub fn distance_minkowski(a: Vector2, b: Vector2, p: f64) -> f64 {
    ((a[0] - b[0]).abs().powf(p) + (a[1] - b[1]).abs().powf(p)).powf(1.0 / p)
}

// ─── Shape ───

/// Keeps the magnitude within `[min, max]`, rescaling when it falls
/// outside. A vector already within bounds is returned untouched.
pub fn clamp(xy: Vector2, min: f64, max: f64) -> Vector2 {
    clamp_with(xy, min, max, magnitude(xy))
}

pub fn clamp_with(xy: Vector2, min: f64, max: f64, m: f64) -> Vector2 {
    if m > max {
        set_magnitude_with(xy, max, m)
    } else if m < min {
        set_magnitude_with(xy, min, m)
    } else {
        xy
    }
}

pub fn limit_max(xy: Vector2, max: f64) -> Vector2 {
    limit_max_with(xy, max, magnitude(xy))
}

pub fn limit_max_with(xy: Vector2, max: f64, m: f64) -> Vector2 {
    if m > max {
        set_magnitude_with(xy, max, m)
    } else {
        xy
    }
}

pub fn limit_min(xy: Vector2, min: f64) -> Vector2 {
    limit_min_with(xy, min, magnitude(xy))
}

pub fn limit_min_with(xy: Vector2, min: f64, m: f64) -> Vector2 {
    if m < min {
        set_magnitude_with(xy, min, m)
    } else {
        xy
    }
}

/// Direction of `target` with the magnitude of `xy`.
pub fn look_at(xy: Vector2, target: Vector2) -> Vector2 {
    look_at_with(xy, target, magnitude(xy), magnitude(target))
}

pub fn look_at_with(_xy: Vector2, target: Vector2, m: f64, target_m: f64) -> Vector2 {
    [(target[0] / target_m) * m, (target[1] / target_m) * m]
}

/// Orthogonal projection of `xy` onto `onto`.
pub fn project(xy: Vector2, onto: Vector2) -> Vector2 {
    project_with(xy, onto, magnitude(onto))
}

/// [`project`] with `|onto|` already known.
pub fn project_with(xy: Vector2, onto: Vector2, onto_m: f64) -> Vector2 {
    let f = dot(xy, onto) / onto_m;
    [(onto[0] / onto_m) * f, (onto[1] / onto_m) * f]
}

// ─── Orientation ───

/// Unit vector along `xy`; the zero vector maps to itself.
pub fn normalize(xy: Vector2) -> Vector2 {
    normalize_with(xy, magnitude(xy))
}

pub fn normalize_with(xy: Vector2, m: f64) -> Vector2 {
    if m == 0.0 {
        zero()
    } else {
        [xy[0] / m, xy[1] / m]
    }
}

/// `xy - 2 (xy · normal) normal`. `normal` must already be unit length.
pub fn reflect(xy: Vector2, normal: Vector2) -> Vector2 {
    let d = dot(xy, normal);
    [xy[0] - 2.0 * d * normal[0], xy[1] - 2.0 * d * normal[1]]
}

/// Counter-clockwise rotation by `phi` about the origin.
pub fn rotate(xy: Vector2, phi: f64) -> Vector2 {
    let (sin, cos) = phi.sin_cos();
    [xy[0] * cos - xy[1] * sin, xy[0] * sin + xy[1] * cos]
}

/// Counter-clockwise rotation by `phi` about `pivot`.
pub fn rotate_about(xy: Vector2, phi: f64, pivot: Vector2) -> Vector2 {
    add(rotate(subtract(xy, pivot), phi), pivot)
}

/// Exact quarter turn counter-clockwise.
pub fn turn_left(xy: Vector2) -> Vector2 {
    [-xy[1], xy[0]]
}

/// Exact quarter turn clockwise.
pub fn turn_right(xy: Vector2) -> Vector2 {
    [xy[1], -xy[0]]
}

// ─── Angles ───

/// Signed angle from `a` to `b`, in `(-π, π]`.
pub fn angle_between(a: Vector2, b: Vector2) -> f64 {
    cross(a, b).atan2(dot(a, b))
}

/// Counter-clockwise angle from the positive x-axis, in `[0, 2π)`.
pub fn angle_x(xy: Vector2) -> f64 {
    full_turn(xy[1].atan2(xy[0]))
}

/// Counter-clockwise angle from the positive y-axis, in `[0, 2π)`.
pub fn angle_y(xy: Vector2) -> f64 {
    full_turn(-(xy[0].atan2(xy[1])))
}

fn full_turn(a: f64) -> f64 {
    if a < 0.0 {
        a + TAU
    } else {
        a
    }
}

// ─── Interpolation ───

/// `a + (b - a) t`; `t` outside `[0, 1]` extrapolates.
pub fn lerp(a: Vector2, b: Vector2, t: f64) -> Vector2 {
    [a[0] + (b[0] - a[0]) * t, a[1] + (b[1] - a[1]) * t]
}

// ─── Predicates ───

pub fn is_equal(a: Vector2, b: Vector2) -> bool {
    a[0] == b[0] && a[1] == b[1]
}

/// Absolute per-component comparison; see [`super::DEFAULT_EPSILON`].
pub fn is_equal_approx(a: Vector2, b: Vector2, epsilon: f64) -> bool {
    (a[0] - b[0]).abs() <= epsilon && (a[1] - b[1]).abs() <= epsilon
}

pub fn is_opposite(a: Vector2, b: Vector2) -> bool {
    a[0] == -b[0] && a[1] == -b[1]
}

pub fn is_zero(xy: Vector2) -> bool {
    xy[0] == 0.0 && xy[1] == 0.0
}

pub fn is_nan(xy: Vector2) -> bool {
    xy[0].is_nan() || xy[1].is_nan()
}

pub fn is_infinite(xy: Vector2) -> bool {
    xy[0].is_infinite() || xy[1].is_infinite()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    fn assert_close(actual: Vector2, expected: Vector2) {
        assert!(
            is_equal_approx(actual, expected, 1e-12),
            "expected {expected:?}, got {actual:?}"
        );
    }

    #[test]
    fn arithmetic() {
        assert_eq!(add([1.0, 2.0], [3.0, 4.0]), [4.0, 6.0]);
        assert_eq!(subtract([3.0, 4.0], [1.0, 2.0]), [2.0, 2.0]);
        assert_eq!(multiply([2.0, 3.0], [4.0, 5.0]), [8.0, 15.0]);
        assert_eq!(divide([8.0, 15.0], [2.0, 3.0]), [4.0, 5.0]);
        assert_eq!(scale([3.0, 4.0], 2.0), [6.0, 8.0]);
        assert_eq!(negate([3.0, -4.0]), [-3.0, 4.0]);
    }

    #[test]
    fn divide_by_zero_component_is_positive_infinity() {
        assert_eq!(divide([5.0, 10.0], [0.0, 2.0]), [f64::INFINITY, 5.0]);
        assert_eq!(divide([-5.0, 0.0], [0.0, 0.0]), [f64::INFINITY, f64::INFINITY]);
    }

    #[test]
    fn products() {
        assert_eq!(dot([3.0, 4.0], [2.0, 1.0]), 10.0);
        assert_eq!(cross([3.0, 4.0], [2.0, 1.0]), -5.0);
        assert_eq!(cross([1.0, 0.0], [0.0, 1.0]), 1.0);
    }

    #[test]
    fn magnitudes() {
        assert_eq!(magnitude([3.0, 4.0]), 5.0);
        assert_eq!(magnitude_sq([3.0, 4.0]), 25.0);
        assert_close(set_magnitude([3.0, 4.0], 10.0), [6.0, 8.0]);
        assert_close(set_magnitude_with([3.0, 4.0], 1.0, 5.0), [0.6, 0.8]);
        assert!(is_nan(set_magnitude(zero(), 1.0)));
    }

    #[test]
    fn distances() {
        let a = [1.0, 2.0];
        let b = [4.0, 6.0];
        assert_eq!(distance(a, b), 5.0);
        assert_eq!(distance_sq(a, b), 25.0);
        assert_eq!(distance_chebyshev(a, b), 4.0);
        assert_eq!(distance_manhattan(a, b), 7.0);
        assert_abs_diff_eq!(distance_minkowski(a, b, 1.0), 7.0, epsilon = 1e-12);
        assert_abs_diff_eq!(distance_minkowski(a, b, 2.0), 5.0, epsilon = 1e-12);
        assert_abs_diff_eq!(distance_minkowski(a, b, 64.0), 4.0, epsilon = 1e-6);
    }

    #[test]
    fn clamp_rescales_only_out_of_range() {
        assert_close(clamp([3.0, 4.0], 1.0, 2.0), [1.2, 1.6]);
        assert_close(clamp([0.3, 0.4], 1.0, 2.0), [0.6, 0.8]);
        let inside = [0.1 + 0.2, 0.7];
        assert_eq!(clamp(inside, 0.0, 10.0), inside);
        assert_close(limit_max([3.0, 4.0], 1.0), [0.6, 0.8]);
        assert_eq!(limit_max([3.0, 4.0], 6.0), [3.0, 4.0]);
        assert_close(limit_min([0.3, 0.4], 5.0), [3.0, 4.0]);
        assert_eq!(limit_min([3.0, 4.0], 1.0), [3.0, 4.0]);
    }

    #[test]
    fn look_at_keeps_own_magnitude() {
        assert_close(look_at([3.0, 4.0], [0.0, 2.0]), [0.0, 5.0]);
    }

    #[test]
    fn look_at_zero_target_is_nan() {
        assert!(is_nan(look_at([3.0, 4.0], [0.0, 0.0])));
    }

    #[test]
    fn project_onto_axis() {
        assert_close(project([3.0, 4.0], [2.0, 0.0]), [3.0, 0.0]);
        assert_close(project([1.0, 1.0], [1.0, -1.0]), [0.0, 0.0]);
        assert_close(project_with([2.0, 2.0], [0.0, 3.0], 3.0), [0.0, 2.0]);
    }

    #[test]
    fn normalize_zero_vector_is_zero() {
        assert_eq!(normalize(zero()), [0.0, 0.0]);
        assert_close(normalize([3.0, 4.0]), [0.6, 0.8]);
    }

    #[test]
    fn reflect_across_normal() {
        assert_close(reflect([1.0, -1.0], [0.0, 1.0]), [1.0, 1.0]);
        assert_close(reflect([2.0, 3.0], [1.0, 0.0]), [-2.0, 3.0]);
    }

    #[test]
    fn rotation() {
        assert_close(rotate([1.0, 0.0], FRAC_PI_2), [0.0, 1.0]);
        assert_close(rotate([1.0, 0.0], PI), [-1.0, 0.0]);
        assert_close(rotate_about([2.0, 1.0], FRAC_PI_2, [1.0, 1.0]), [1.0, 2.0]);
        assert_close(rotate_about([1.0, 0.0], FRAC_PI_2, zero()), [0.0, 1.0]);
        assert_eq!(turn_left([1.0, 2.0]), [-2.0, 1.0]);
        assert_eq!(turn_right([1.0, 2.0]), [2.0, -1.0]);
    }

    #[test]
    fn angles() {
        assert_abs_diff_eq!(angle_between([1.0, 0.0], [0.0, 1.0]), FRAC_PI_2);
        assert_abs_diff_eq!(angle_between([0.0, 1.0], [1.0, 0.0]), -FRAC_PI_2);
        assert_abs_diff_eq!(angle_x([1.0, 1.0]), FRAC_PI_4);
        assert_abs_diff_eq!(angle_x([0.0, -1.0]), 3.0 * FRAC_PI_2);
        assert_abs_diff_eq!(angle_x([-1.0, -0.0]), PI);
        assert_abs_diff_eq!(angle_y([0.0, 1.0]), 0.0);
        assert_abs_diff_eq!(angle_y([-1.0, 0.0]), FRAC_PI_2);
        assert_abs_diff_eq!(angle_y([1.0, 0.0]), 3.0 * FRAC_PI_2);
    }

    #[test]
    fn angle_factories_invert_angle_queries() {
        for phi in [0.3, 1.7, 3.5, 5.9] {
            assert_abs_diff_eq!(angle_x(from_angle_x(phi, 2.0)), phi, epsilon = 1e-12);
            assert_abs_diff_eq!(angle_y(from_angle_y(phi, 2.0)), phi, epsilon = 1e-12);
        }
        assert_close(from_polar(5.0, PI), [-5.0, 0.0]);
    }

    #[test]
    fn lerp_extrapolates_outside_unit_interval() {
        assert_eq!(lerp([0.0, 0.0], [2.0, 4.0], 0.5), [1.0, 2.0]);
        assert_eq!(lerp([0.0, 0.0], [2.0, 4.0], 2.0), [4.0, 8.0]);
        assert_eq!(lerp([0.0, 0.0], [2.0, 4.0], -1.0), [-2.0, -4.0]);
    }

    #[test]
    fn predicates() {
        assert!(is_equal([1.0, 2.0], [1.0, 2.0]));
        assert!(!is_equal([1.0, 2.0], [1.0, 2.5]));
        assert!(is_equal_approx([1.0, 2.0], [1.05, 2.0], 0.1));
        assert!(!is_equal_approx([0.1 + 0.2, 0.0], [0.3, 0.0], 0.0));
        assert!(is_equal_approx([0.1 + 0.2, 0.0], [0.3, 0.0], crate::tuple::DEFAULT_EPSILON));
        assert!(is_opposite([1.0, -2.0], [-1.0, 2.0]));
        assert!(is_zero([0.0, -0.0]));
        assert!(is_nan([f64::NAN, 0.0]));
        assert!(is_infinite([0.0, f64::NEG_INFINITY]));
        assert!(!is_infinite([f64::NAN, 0.0]));
    }

    #[test]
    fn random_is_unit_length() {
        assert_abs_diff_eq!(magnitude(random()), 1.0, epsilon = 1e-12);
        assert_close(random_with(|| 0.25), [0.0, 1.0]);
        assert_close(random_with(|| 0.0), [1.0, 0.0]);
    }

    #[test]
    fn slice_and_object_conversions() {
        assert_eq!(from_slice(&[7.0]), [7.0, 0.0]);
        assert_eq!(from_slice(&[]), [0.0, 0.0]);
        assert_eq!(from_slice(&[1.0, 2.0, 3.0]), [1.0, 2.0]);
        assert_eq!(from_object(Xy::new(2.0, 4.0)), [2.0, 4.0]);
        assert_eq!(to_object([2.0, 4.0]), Xy::new(2.0, 4.0));
    }

    #[test]
    fn chebyshev_propagates_nan_from_any_component() {
        assert!(distance_chebyshev([f64::NAN, 0.0], [0.0, 9.0]).is_nan());
        assert!(distance_chebyshev([0.0, 9.0], [f64::NAN, 0.0]).is_nan());
    }
}
