//! Pure functions over 4D tuples `[x, y, z, w]`.

use std::f64::consts::TAU;

use crate::object::Xyzw;
use crate::random::thread_source;
use crate::snapshot::Snapshot4;

/// A 4D vector as a plain component array.
pub type Vector4 = [f64; 4];

fn map(a: Vector4, f: impl Fn(f64) -> f64) -> Vector4 {
    [f(a[0]), f(a[1]), f(a[2]), f(a[3])]
}

fn zip(a: Vector4, b: Vector4, f: impl Fn(f64, f64) -> f64) -> Vector4 {
    [f(a[0], b[0]), f(a[1], b[1]), f(a[2], b[2]), f(a[3], b[3])]
}

// ─── Construction ───

pub fn zero() -> Vector4 {
    [0.0; 4]
}

pub fn one() -> Vector4 {
    [1.0; 4]
}

pub fn random() -> Vector4 {
    random_with(thread_source())
}

/// Uniformly distributed unit vector on the 3-sphere.
///
/// Four standard normals from the Box–Muller transform, normalized.
/// Consumes eight draws.
pub fn random_with(mut next: impl FnMut() -> f64) -> Vector4 {
    let mut gaussian = || {
        let u1 = 1.0 - next();
        let u2 = next();
        (-2.0 * u1.ln()).sqrt() * (TAU * u2).cos()
    };
    let g = [gaussian(), gaussian(), gaussian(), gaussian()];
    normalize(g)
}

pub fn from_object(o: Xyzw) -> Vector4 {
    [o.x, o.y, o.z, o.w]
}

pub fn to_object(v: Vector4) -> Xyzw {
    Xyzw {
        x: v[0],
        y: v[1],
        z: v[2],
        w: v[3],
    }
}

/// Reads up to four leading components; missing ones default to 0.
pub fn from_slice(s: &[f64]) -> Vector4 {
    let mut out = zero();
    for (slot, c) in out.iter_mut().zip(s) {
        *slot = *c;
    }
    out
}

pub fn immutable(v: Vector4) -> Snapshot4 {
    Snapshot4::new(v)
}

// ─── Arithmetic ───

pub fn add(a: Vector4, b: Vector4) -> Vector4 {
    zip(a, b, |x, y| x + y)
}

pub fn subtract(a: Vector4, b: Vector4) -> Vector4 {
    zip(a, b, |x, y| x - y)
}

pub fn multiply(a: Vector4, b: Vector4) -> Vector4 {
    zip(a, b, |x, y| x * y)
}

/// Component-wise quotient; a zero divisor component yields `+inf`.
pub fn divide(a: Vector4, b: Vector4) -> Vector4 {
    zip(a, b, |x, y| if y == 0.0 { f64::INFINITY } else { x / y })
}

pub fn scale(v: Vector4, c: f64) -> Vector4 {
    map(v, |x| x * c)
}

pub fn negate(v: Vector4) -> Vector4 {
    map(v, |x| -x)
}

pub fn dot(a: Vector4, b: Vector4) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2] + a[3] * b[3]
}

// ─── Magnitude ───

pub fn magnitude(v: Vector4) -> f64 {
    magnitude_sq(v).sqrt()
}

pub fn magnitude_sq(v: Vector4) -> f64 {
    dot(v, v)
}

pub fn set_magnitude(v: Vector4, new_magnitude: f64) -> Vector4 {
    set_magnitude_with(v, new_magnitude, magnitude(v))
}

pub fn set_magnitude_with(v: Vector4, new_magnitude: f64, m: f64) -> Vector4 {
    map(v, |x| (x / m) * new_magnitude)
}

// ─── Distances ───

pub fn distance(a: Vector4, b: Vector4) -> f64 {
    distance_sq(a, b).sqrt()
}

pub fn distance_sq(a: Vector4, b: Vector4) -> f64 {
    magnitude_sq(subtract(a, b))
}

pub fn distance_chebyshev(a: Vector4, b: Vector4) -> f64 {
    let d = map(subtract(a, b), f64::abs);
    if d.iter().any(|x| x.is_nan()) {
        return f64::NAN;
    }
    d.iter().fold(0.0, |max, &x| max.max(x))
}

pub fn distance_manhattan(a: Vector4, b: Vector4) -> f64 {
    map(subtract(a, b), f64::abs).iter().sum()
}

pub fn distance_minkowski(a: Vector4, b: Vector4, p: f64) -> f64 {
    map(subtract(a, b), |x| x.abs().powf(p))
        .iter()
        .sum::<f64>()
        .powf(1.0 / p)
}

// ─── Shape ───

pub fn clamp(v: Vector4, min: f64, max: f64) -> Vector4 {
    clamp_with(v, min, max, magnitude(v))
}

pub fn clamp_with(v: Vector4, min: f64, max: f64, m: f64) -> Vector4 {
    if m > max {
        set_magnitude_with(v, max, m)
    } else if m < min {
        set_magnitude_with(v, min, m)
    } else {
        v
    }
}

pub fn limit_max(v: Vector4, max: f64) -> Vector4 {
    limit_max_with(v, max, magnitude(v))
}

pub fn limit_max_with(v: Vector4, max: f64, m: f64) -> Vector4 {
    if m > max {
        set_magnitude_with(v, max, m)
    } else {
        v
    }
}

pub fn limit_min(v: Vector4, min: f64) -> Vector4 {
    limit_min_with(v, min, magnitude(v))
}

pub fn limit_min_with(v: Vector4, min: f64, m: f64) -> Vector4 {
    if m < min {
        set_magnitude_with(v, min, m)
    } else {
        v
    }
}

pub fn look_at(v: Vector4, target: Vector4) -> Vector4 {
    look_at_with(v, target, magnitude(v), magnitude(target))
}

pub fn look_at_with(_v: Vector4, target: Vector4, m: f64, target_m: f64) -> Vector4 {
    scale(target, m / target_m)
}

pub fn project(v: Vector4, onto: Vector4) -> Vector4 {
    project_with(v, onto, magnitude(onto))
}

pub fn project_with(v: Vector4, onto: Vector4, onto_m: f64) -> Vector4 {
    let f = dot(v, onto) / onto_m;
    map(onto, |x| (x / onto_m) * f)
}

pub fn normalize(v: Vector4) -> Vector4 {
    normalize_with(v, magnitude(v))
}

pub fn normalize_with(v: Vector4, m: f64) -> Vector4 {
    if m == 0.0 {
        zero()
    } else {
        map(v, |x| x / m)
    }
}

pub fn reflect(v: Vector4, normal: Vector4) -> Vector4 {
    subtract(v, scale(normal, 2.0 * dot(v, normal)))
}

// ─── Angles ───

pub fn angle_between(a: Vector4, b: Vector4) -> f64 {
    angle_between_with(a, b, magnitude(a), magnitude(b))
}

pub fn angle_between_with(a: Vector4, b: Vector4, ma: f64, mb: f64) -> f64 {
    (dot(a, b) / (ma * mb)).clamp(-1.0, 1.0).acos()
}

fn angle_from_axis(v: Vector4, axis: usize) -> f64 {
    let rest: f64 = v
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != axis)
        .map(|(_, c)| c * c)
        .sum();
    rest.sqrt().atan2(v[axis])
}

/// Angle from the positive x-axis, in `[0, π]`.
pub fn angle_x(v: Vector4) -> f64 {
    angle_from_axis(v, 0)
}

pub fn angle_y(v: Vector4) -> f64 {
    angle_from_axis(v, 1)
}

pub fn angle_z(v: Vector4) -> f64 {
    angle_from_axis(v, 2)
}

pub fn angle_w(v: Vector4) -> f64 {
    angle_from_axis(v, 3)
}

/// Unclamped linear interpolation.
pub fn lerp(a: Vector4, b: Vector4, t: f64) -> Vector4 {
    zip(a, b, |x, y| x + (y - x) * t)
}

// ─── Predicates ───

pub fn is_equal(a: Vector4, b: Vector4) -> bool {
    a == b
}

pub fn is_equal_approx(a: Vector4, b: Vector4, epsilon: f64) -> bool {
    a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() <= epsilon)
}

pub fn is_opposite(a: Vector4, b: Vector4) -> bool {
    a == negate(b)
}

pub fn is_zero(v: Vector4) -> bool {
    v.iter().all(|&c| c == 0.0)
}

pub fn is_nan(v: Vector4) -> bool {
    v.iter().any(|c| c.is_nan())
}

pub fn is_infinite(v: Vector4) -> bool {
    v.iter().any(|c| c.is_infinite())
}
