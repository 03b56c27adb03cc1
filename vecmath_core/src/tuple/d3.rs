//! Pure functions over 3D tuples `[x, y, z]`.

use std::f64::consts::TAU;

use crate::object::Xyz;
use crate::random::thread_source;
use crate::snapshot::Snapshot3;

/// A 3D vector as a plain component array.
pub type Vector3 = [f64; 3];

// ─── Construction ───

pub fn zero() -> Vector3 {
    [0.0, 0.0, 0.0]
}

pub fn one() -> Vector3 {
    [1.0, 1.0, 1.0]
}

/// Uniformly distributed unit vector drawn from the thread-local generator.
pub fn random() -> Vector3 {
    random_with(thread_source())
}

/// Uniformly distributed unit vector on the sphere.
///
/// Draws the polar angle as `acos(2u - 1)` so that points are not bunched
/// at the poles, then a uniform azimuth.
pub fn random_with(mut next: impl FnMut() -> f64) -> Vector3 {
    let theta = (2.0 * next() - 1.0).acos();
    let phi = next() * TAU;
    from_spherical(1.0, theta, phi)
}

/// `theta` is the polar angle from +z, `phi` the azimuth from +x.
pub fn from_spherical(r: f64, theta: f64, phi: f64) -> Vector3 {
    let (sin_theta, cos_theta) = theta.sin_cos();
    [r * sin_theta * phi.cos(), r * sin_theta * phi.sin(), r * cos_theta]
}

/// Radius `r` in the xy-plane at azimuth `phi`, height `z`.
pub fn from_cylindrical(r: f64, phi: f64, z: f64) -> Vector3 {
    [r * phi.cos(), r * phi.sin(), z]
}

pub fn from_object(o: Xyz) -> Vector3 {
    [o.x, o.y, o.z]
}

pub fn to_object(xyz: Vector3) -> Xyz {
    Xyz {
        x: xyz[0],
        y: xyz[1],
        z: xyz[2],
    }
}

/// Reads up to three leading components; missing ones default to 0.
pub fn from_slice(s: &[f64]) -> Vector3 {
    let mut out = zero();
    for (slot, c) in out.iter_mut().zip(s) {
        *slot = *c;
    }
    out
}

pub fn immutable(xyz: Vector3) -> Snapshot3 {
    Snapshot3::new(xyz)
}

// ─── Arithmetic ───

pub fn add(a: Vector3, b: Vector3) -> Vector3 {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}

pub fn subtract(a: Vector3, b: Vector3) -> Vector3 {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

pub fn multiply(a: Vector3, b: Vector3) -> Vector3 {
    [a[0] * b[0], a[1] * b[1], a[2] * b[2]]
}

/// Component-wise quotient; a zero divisor component yields `+inf`.
pub fn divide(a: Vector3, b: Vector3) -> Vector3 {
    let mut out = zero();
    for i in 0..3 {
        out[i] = if b[i] == 0.0 { f64::INFINITY } else { a[i] / b[i] };
    }
    out
}

pub fn scale(xyz: Vector3, c: f64) -> Vector3 {
    [xyz[0] * c, xyz[1] * c, xyz[2] * c]
}

pub fn negate(xyz: Vector3) -> Vector3 {
    [-xyz[0], -xyz[1], -xyz[2]]
}

// ─── Products ───

pub fn dot(a: Vector3, b: Vector3) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

/// Right-handed cross product.
pub fn cross(a: Vector3, b: Vector3) -> Vector3 {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

// ─── Magnitude ───

pub fn magnitude(xyz: Vector3) -> f64 {
    magnitude_sq(xyz).sqrt()
}

pub fn magnitude_sq(xyz: Vector3) -> f64 {
    xyz[0] * xyz[0] + xyz[1] * xyz[1] + xyz[2] * xyz[2]
}

/// Rescales to `new_magnitude`. A zero vector yields `NaN` components.
pub fn set_magnitude(xyz: Vector3, new_magnitude: f64) -> Vector3 {
    set_magnitude_with(xyz, new_magnitude, magnitude(xyz))
}

pub fn set_magnitude_with(xyz: Vector3, new_magnitude: f64, m: f64) -> Vector3 {
    [
        (xyz[0] / m) * new_magnitude,
        (xyz[1] / m) * new_magnitude,
        (xyz[2] / m) * new_magnitude,
    ]
}

// ─── Distances ───

pub fn distance(a: Vector3, b: Vector3) -> f64 {
    distance_sq(a, b).sqrt()
}

pub fn distance_sq(a: Vector3, b: Vector3) -> f64 {
    magnitude_sq(subtract(a, b))
}

pub fn distance_chebyshev(a: Vector3, b: Vector3) -> f64 {
    let dx = (a[0] - b[0]).abs();
    let dy = (a[1] - b[1]).abs();
    let dz = (a[2] - b[2]).abs();
    if dx.is_nan() || dy.is_nan() || dz.is_nan() {
        f64::NAN
    } else {
        dx.max(dy).max(dz)
    }
}

pub fn distance_manhattan(a: Vector3, b: Vector3) -> f64 {
    (a[0] - b[0]).abs() + (a[1] - b[1]).abs() + (a[2] - b[2]).abs()
}

pub fn distance_minkowski(a: Vector3, b: Vector3, p: f64) -> f64 {
    ((a[0] - b[0]).abs().powf(p) + (a[1] - b[1]).abs().powf(p) + (a[2] - b[2]).abs().powf(p))
        .powf(1.0 / p)
}

// ─── Shape ───

pub fn clamp(xyz: Vector3, min: f64, max: f64) -> Vector3 {
    clamp_with(xyz, min, max, magnitude(xyz))
}

pub fn clamp_with(xyz: Vector3, min: f64, max: f64, m: f64) -> Vector3 {
    if m > max {
        set_magnitude_with(xyz, max, m)
    } else if m < min {
        set_magnitude_with(xyz, min, m)
    } else {
        xyz
    }
}

pub fn limit_max(xyz: Vector3, max: f64) -> Vector3 {
    limit_max_with(xyz, max, magnitude(xyz))
}

pub fn limit_max_with(xyz: Vector3, max: f64, m: f64) -> Vector3 {
    if m > max {
        set_magnitude_with(xyz, max, m)
    } else {
        xyz
    }
}

pub fn limit_min(xyz: Vector3, min: f64) -> Vector3 {
    limit_min_with(xyz, min, magnitude(xyz))
}

pub fn limit_min_with(xyz: Vector3, min: f64, m: f64) -> Vector3 {
    if m < min {
        set_magnitude_with(xyz, min, m)
    } else {
        xyz
    }
}

/// Direction of `target` with the magnitude of `xyz`.
pub fn look_at(xyz: Vector3, target: Vector3) -> Vector3 {
    look_at_with(xyz, target, magnitude(xyz), magnitude(target))
}

pub fn look_at_with(_xyz: Vector3, target: Vector3, m: f64, target_m: f64) -> Vector3 {
    scale(target, m / target_m)
}

pub fn project(xyz: Vector3, onto: Vector3) -> Vector3 {
    project_with(xyz, onto, magnitude(onto))
}

pub fn project_with(xyz: Vector3, onto: Vector3, onto_m: f64) -> Vector3 {
    let f = dot(xyz, onto) / onto_m;
    [
        (onto[0] / onto_m) * f,
        (onto[1] / onto_m) * f,
        (onto[2] / onto_m) * f,
    ]
}

// ─── Orientation ───

/// Unit vector along `xyz`; the zero vector maps to itself.
pub fn normalize(xyz: Vector3) -> Vector3 {
    normalize_with(xyz, magnitude(xyz))
}

pub fn normalize_with(xyz: Vector3, m: f64) -> Vector3 {
    if m == 0.0 {
        zero()
    } else {
        [xyz[0] / m, xyz[1] / m, xyz[2] / m]
    }
}

/// Mirror image across the plane with unit `normal`.
pub fn reflect(xyz: Vector3, normal: Vector3) -> Vector3 {
    subtract(xyz, scale(normal, 2.0 * dot(xyz, normal)))
}

/// Right-handed rotation about the x-axis.
pub fn rotate_x(xyz: Vector3, phi: f64) -> Vector3 {
    let (sin, cos) = phi.sin_cos();
    [xyz[0], xyz[1] * cos - xyz[2] * sin, xyz[1] * sin + xyz[2] * cos]
}

/// Right-handed rotation about the y-axis.
pub fn rotate_y(xyz: Vector3, phi: f64) -> Vector3 {
    let (sin, cos) = phi.sin_cos();
    [xyz[0] * cos + xyz[2] * sin, xyz[1], -xyz[0] * sin + xyz[2] * cos]
}

/// Right-handed rotation about the z-axis.
pub fn rotate_z(xyz: Vector3, phi: f64) -> Vector3 {
    let (sin, cos) = phi.sin_cos();
    [xyz[0] * cos - xyz[1] * sin, xyz[0] * sin + xyz[1] * cos, xyz[2]]
}

pub fn rotate_x_about(xyz: Vector3, phi: f64, pivot: Vector3) -> Vector3 {
    add(rotate_x(subtract(xyz, pivot), phi), pivot)
}

pub fn rotate_y_about(xyz: Vector3, phi: f64, pivot: Vector3) -> Vector3 {
    add(rotate_y(subtract(xyz, pivot), phi), pivot)
}

pub fn rotate_z_about(xyz: Vector3, phi: f64, pivot: Vector3) -> Vector3 {
    add(rotate_z(subtract(xyz, pivot), phi), pivot)
}

// ─── Angles ───

/// Unsigned angle between `a` and `b`, in `[0, π]`.
pub fn angle_between(a: Vector3, b: Vector3) -> f64 {
    angle_between_with(a, b, magnitude(a), magnitude(b))
}

/// [`angle_between`] with both magnitudes already known.
pub fn angle_between_with(a: Vector3, b: Vector3, ma: f64, mb: f64) -> f64 {
    (dot(a, b) / (ma * mb)).clamp(-1.0, 1.0).acos()
}

/// Angle from the positive x-axis, in `[0, π]`.
pub fn angle_x(xyz: Vector3) -> f64 {
    (xyz[1] * xyz[1] + xyz[2] * xyz[2]).sqrt().atan2(xyz[0])
}

/// Angle from the positive y-axis, in `[0, π]`.
pub fn angle_y(xyz: Vector3) -> f64 {
    (xyz[0] * xyz[0] + xyz[2] * xyz[2]).sqrt().atan2(xyz[1])
}

/// Angle from the positive z-axis, in `[0, π]`.
pub fn angle_z(xyz: Vector3) -> f64 {
    (xyz[0] * xyz[0] + xyz[1] * xyz[1]).sqrt().atan2(xyz[2])
}

// ─── Interpolation ───

/// Unclamped linear interpolation.
pub fn lerp(a: Vector3, b: Vector3, t: f64) -> Vector3 {
    [
        a[0] + (b[0] - a[0]) * t,
        a[1] + (b[1] - a[1]) * t,
        a[2] + (b[2] - a[2]) * t,
    ]
}

// ─── Predicates ───

pub fn is_equal(a: Vector3, b: Vector3) -> bool {
    a[0] == b[0] && a[1] == b[1] && a[2] == b[2]
}

pub fn is_equal_approx(a: Vector3, b: Vector3, epsilon: f64) -> bool {
    a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() <= epsilon)
}

pub fn is_opposite(a: Vector3, b: Vector3) -> bool {
    a[0] == -b[0] && a[1] == -b[1] && a[2] == -b[2]
}

pub fn is_zero(xyz: Vector3) -> bool {
    xyz[0] == 0.0 && xyz[1] == 0.0 && xyz[2] == 0.0
}

pub fn is_nan(xyz: Vector3) -> bool {
    xyz.iter().any(|c| c.is_nan())
}

pub fn is_infinite(xyz: Vector3) -> bool {
    xyz.iter().any(|c| c.is_infinite())
}
