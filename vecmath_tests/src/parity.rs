//! Tuple/class parity suite.
//!
//! Every operation shared by the tuple functions and the `Vec2/3/4` types
//! is evaluated three ways for each sample (tuple function, pure module
//! function, mutating method) and the results are compared. Mutating
//! results are also checked against their cached magnitude. A second group
//! of checks runs the algebraic properties of the tuple API.

use std::f64::consts::TAU;
use std::time::Instant;

use tracing::{debug, info};
use vecmath_core::slerp::slerp_degrees;
use vecmath_core::tuple::{d2, d3, d4};
use vecmath_core::{random, vec2, vec3, vec4, Vec2, Vec3, Vec4};

use crate::config::ParityConfig;
use crate::report::{Report, ReportBuilder, TestResult, TestStatus};

/// One input: two vectors and a scalar in `[0, 1)`.
#[derive(Debug, Clone, Copy)]
pub struct Sample<const N: usize> {
    pub a: [f64; N],
    pub b: [f64; N],
    pub s: f64,
}

/// Runs the whole suite.
pub fn run(config: &ParityConfig) -> Report {
    info!(
        samples = config.samples,
        seed = config.seed,
        tolerance = config.tolerance,
        "Running parity suite"
    );
    let mut next = random::seeded(config.seed);
    let s2 = samples::<2>(config, &mut next);
    let s3 = samples::<3>(config, &mut next);
    let s4 = samples::<4>(config, &mut next);
    let tol = config.tolerance;

    let groups = [
        ("Vec2", vec2_checks(&s2, tol)),
        ("Vec3", vec3_checks(&s3, tol)),
        ("Vec4", vec4_checks(&s4, tol)),
        ("Properties", property_checks(&s2, &s3, &s4, tol)),
    ];

    let mut builder = ReportBuilder::new("vecmath parity")
        .subtitle("tuple functions vs Vec2/Vec3/Vec4")
        .metadata("samples", &config.samples.to_string())
        .metadata("seed", &config.seed.to_string())
        .metadata("tolerance", &config.tolerance.to_string());

    for (category, results) in groups {
        let failed = results
            .iter()
            .filter(|r| r.status == TestStatus::Failed)
            .count();
        info!(category, checks = results.len(), failed, "Suite finished");
        builder = builder.add_tests(results);
    }
    builder.build()
}

/// Seeded samples with components in `[-range, range)`.
///
/// The first sample is always degenerate: a zero `a` and a `b` with a zero
/// last component.
pub fn samples<const N: usize>(
    config: &ParityConfig,
    next: &mut impl FnMut() -> f64,
) -> Vec<Sample<N>> {
    let mut b = [1.0; N];
    b[N - 1] = 0.0;
    let mut out = vec![Sample {
        a: [0.0; N],
        b,
        s: 0.5,
    }];
    for _ in 0..config.samples {
        let a = draw(next, config.component_range);
        let b = draw(next, config.component_range);
        out.push(Sample { a, b, s: next() });
    }
    out
}

fn draw<const N: usize>(next: &mut impl FnMut() -> f64, range: f64) -> [f64; N] {
    let mut v = [0.0; N];
    for c in v.iter_mut() {
        *c = (next() * 2.0 - 1.0) * range;
    }
    v
}

// ─── Comparison ───

/// Equal within `tol`, scaled by the larger operand once that exceeds 1.
/// Two NaNs compare equal, as do equal infinities.
pub fn close(x: f64, y: f64, tol: f64) -> bool {
    if x.is_nan() || y.is_nan() {
        return x.is_nan() && y.is_nan();
    }
    if x.is_infinite() || y.is_infinite() {
        return x == y;
    }
    if x == y {
        return true;
    }
    (x - y).abs() <= tol * 1f64.max(x.abs()).max(y.abs())
}

fn expect(what: &str, got: f64, want: f64, tol: f64) -> Result<(), String> {
    if close(got, want, tol) {
        Ok(())
    } else {
        Err(format!("{}: got {}, want {}", what, got, want))
    }
}

fn expect_n<const N: usize>(what: &str, got: [f64; N], want: [f64; N], tol: f64) -> Result<(), String> {
    if got.iter().zip(&want).all(|(&g, &w)| close(g, w, tol)) {
        Ok(())
    } else {
        Err(format!("{}: got {:?}, want {:?}", what, got, want))
    }
}

fn ensure(cond: bool, what: &str) -> Result<(), String> {
    if cond {
        Ok(())
    } else {
        Err(what.to_string())
    }
}

trait Cached<const N: usize>: Copy + Into<[f64; N]> {
    fn cached_magnitude(&self) -> f64;
}

impl Cached<2> for Vec2 {
    fn cached_magnitude(&self) -> f64 {
        self.magnitude()
    }
}

impl Cached<3> for Vec3 {
    fn cached_magnitude(&self) -> f64 {
        self.magnitude()
    }
}

impl Cached<4> for Vec4 {
    fn cached_magnitude(&self) -> f64 {
        self.magnitude()
    }
}

/// Pure and mutating results both match the tuple result, and the mutated
/// value's cached magnitude matches its components.
fn agree<V: Cached<N>, const N: usize>(tuple: [f64; N], pure: V, method: V, tol: f64) -> Result<(), String> {
    expect_n("pure", pure.into(), tuple, tol)?;
    let components: [f64; N] = method.into();
    expect_n("method", components, tuple, tol)?;
    let m = components.iter().map(|c| c * c).sum::<f64>().sqrt();
    expect("cached magnitude", method.cached_magnitude(), m, tol)
}

fn mutated<V>(mut v: V, f: impl FnOnce(&mut V)) -> V {
    f(&mut v);
    v
}

fn check<T: Copy>(
    id: &str,
    name: &str,
    category: &str,
    samples: &[T],
    f: impl Fn(T) -> Result<(), String>,
) -> TestResult {
    let start = Instant::now();
    let outcome = samples
        .iter()
        .enumerate()
        .try_for_each(|(i, &s)| f(s).map_err(|e| format!("sample {}: {}", i, e)));
    let duration = start.elapsed();

    let test = TestResult::new(id, name, category).with_samples(samples.len());
    match outcome {
        Ok(()) => test.pass(duration),
        Err(e) => {
            debug!(id, error = %e, "Parity check failed");
            test.fail(duration, &e)
        }
    }
}

// ─── Vec2 ───

fn vec2_checks(samples: &[Sample<2>], tol: f64) -> Vec<TestResult> {
    const CAT: &str = "Vec2";
    let v = |s: Sample<2>| (Vec2::from(s.a), Vec2::from(s.b));

    vec![
        check("V2-ADD", "add", CAT, samples, |s| {
            let (a, b) = v(s);
            agree(d2::add(s.a, s.b), vec2::add(&a, &b), mutated(a, |m| { m.add(&b); }), tol)?;
            agree(d2::add(s.a, s.b), a + b, mutated(a, |m| *m += b), tol)
        }),
        check("V2-SUB", "subtract", CAT, samples, |s| {
            let (a, b) = v(s);
            agree(d2::subtract(s.a, s.b), vec2::subtract(&a, &b), mutated(a, |m| { m.subtract(&b); }), tol)?;
            agree(d2::subtract(s.a, s.b), a - b, mutated(a, |m| *m -= b), tol)
        }),
        check("V2-MUL", "multiply", CAT, samples, |s| {
            let (a, b) = v(s);
            agree(d2::multiply(s.a, s.b), vec2::multiply(&a, &b), mutated(a, |m| { m.multiply(&b); }), tol)
        }),
        check("V2-DIV", "divide", CAT, samples, |s| {
            let (a, b) = v(s);
            agree(d2::divide(s.a, s.b), vec2::divide(&a, &b), mutated(a, |m| { m.divide(&b); }), tol)
        }),
        check("V2-SCALE", "scale", CAT, samples, |s| {
            let a = Vec2::from(s.a);
            agree(d2::scale(s.a, s.s), vec2::scale(&a, s.s), mutated(a, |m| { m.scale(s.s); }), tol)?;
            agree(d2::scale(s.a, s.s), a * s.s, mutated(a, |m| *m *= s.s), tol)
        }),
        check("V2-NEG", "negate", CAT, samples, |s| {
            let a = Vec2::from(s.a);
            agree(d2::negate(s.a), vec2::negate(&a), mutated(a, |m| { m.negate(); }), tol)?;
            agree(d2::negate(s.a), -a, mutated(a, |m| { m.negate(); }), tol)
        }),
        check("V2-NORM", "normalize", CAT, samples, |s| {
            let a = Vec2::from(s.a);
            agree(d2::normalize(s.a), vec2::normalize(&a), mutated(a, |m| { m.normalize(); }), tol)
        }),
        check("V2-SETMAG", "set_magnitude", CAT, samples, |s| {
            let a = Vec2::from(s.a);
            let want = d2::set_magnitude(s.a, s.s);
            agree(want, mutated(a, |m| { m.set_magnitude(s.s); }), mutated(a, |m| { m.set_magnitude(s.s); }), tol)
        }),
        check("V2-CLAMP", "clamp / limit_max / limit_min", CAT, samples, |s| {
            let a = Vec2::from(s.a);
            let (lo, hi) = (s.s * 50.0, s.s * 50.0 + 25.0);
            agree(d2::clamp(s.a, lo, hi), vec2::clamp(&a, lo, hi), mutated(a, |m| { m.clamp(lo, hi); }), tol)?;
            agree(d2::limit_max(s.a, hi), vec2::limit_max(&a, hi), mutated(a, |m| { m.limit_max(hi); }), tol)?;
            agree(d2::limit_min(s.a, lo), vec2::limit_min(&a, lo), mutated(a, |m| { m.limit_min(lo); }), tol)
        }),
        check("V2-LOOK", "look_at", CAT, samples, |s| {
            let (a, b) = v(s);
            agree(d2::look_at(s.a, s.b), vec2::look_at(&a, &b), mutated(a, |m| { m.look_at(&b); }), tol)
        }),
        check("V2-PROJ", "project", CAT, samples, |s| {
            let (a, b) = v(s);
            agree(d2::project(s.a, s.b), vec2::project(&a, &b), mutated(a, |m| { m.project(&b); }), tol)
        }),
        check("V2-LERP", "lerp", CAT, samples, |s| {
            let (a, b) = v(s);
            agree(d2::lerp(s.a, s.b, s.s), vec2::lerp(&a, &b, s.s), mutated(a, |m| { m.lerp(&b, s.s); }), tol)
        }),
        check("V2-REFL", "reflect", CAT, samples, |s| {
            let n = d2::normalize(s.b);
            let (a, normal) = (Vec2::from(s.a), Vec2::from(n));
            let r = a.reflect(&normal);
            ensure(a.xy() == s.a, "reflect changed its receiver")?;
            agree(d2::reflect(s.a, n), vec2::reflect(&a, &normal), r, tol)
        }),
        check("V2-ROT", "rotate / rotate_about / turns", CAT, samples, |s| {
            let (a, b) = v(s);
            let phi = s.s * TAU;
            agree(d2::rotate(s.a, phi), vec2::rotate(&a, phi), mutated(a, |m| { m.rotate(phi); }), tol)?;
            agree(
                d2::rotate_about(s.a, phi, s.b),
                vec2::rotate_about(&a, phi, &b),
                mutated(a, |m| { m.rotate_about(phi, &b); }),
                tol,
            )?;
            agree(d2::turn_left(s.a), vec2::turn_left(&a), mutated(a, |m| { m.turn_left(); }), tol)?;
            agree(d2::turn_right(s.a), vec2::turn_right(&a), mutated(a, |m| { m.turn_right(); }), tol)
        }),
        check("V2-SCALAR", "dot / cross / distances", CAT, samples, |s| {
            let (a, b) = v(s);
            expect("dot", a.dot(&b), d2::dot(s.a, s.b), tol)?;
            expect("cross", a.cross(&b), d2::cross(s.a, s.b), tol)?;
            expect("distance", a.distance(&b), d2::distance(s.a, s.b), tol)?;
            expect("distance_sq", a.distance_sq(&b), d2::distance_sq(s.a, s.b), tol)?;
            expect("chebyshev", a.distance_chebyshev(&b), d2::distance_chebyshev(s.a, s.b), tol)?;
            expect("manhattan", a.distance_manhattan(&b), d2::distance_manhattan(s.a, s.b), tol)?;
            expect("minkowski", a.distance_minkowski(&b, 3.0), d2::distance_minkowski(s.a, s.b, 3.0), tol)
        }),
        check("V2-ANGLE", "angles", CAT, samples, |s| {
            let (a, b) = v(s);
            expect("angle_between", a.angle_between(&b), d2::angle_between(s.a, s.b), tol)?;
            expect("angle_x", a.angle_x(), d2::angle_x(s.a), tol)?;
            expect("angle_y", a.angle_y(), d2::angle_y(s.a), tol)
        }),
        check("V2-SNAP", "snapshot", CAT, samples, |s| {
            let snap = Vec2::from(s.a).snapshot();
            ensure(snap == d2::immutable(s.a), "snapshot differs from tuple immutable")?;
            expect("magnitude", snap.magnitude(), d2::magnitude(s.a), tol)?;
            ensure(snap.is_zero() == d2::is_zero(s.a), "zero flag")
        }),
        check("V2-TEXT", "text and JSON round trip", CAT, samples, |s| {
            let a = Vec2::from(s.a);
            let text: Vec2 = a.to_string().parse().map_err(|e| format!("{}", e))?;
            ensure(text == a, "text round trip")?;
            let json = a.to_json().map_err(|e| e.to_string())?;
            let back = Vec2::from_json(&json).map_err(|e| e.to_string())?;
            ensure(back == a, "JSON round trip")
        }),
    ]
}

// ─── Vec3 ───

fn vec3_checks(samples: &[Sample<3>], tol: f64) -> Vec<TestResult> {
    const CAT: &str = "Vec3";
    let v = |s: Sample<3>| (Vec3::from(s.a), Vec3::from(s.b));

    vec![
        check("V3-ADD", "add / subtract", CAT, samples, |s| {
            let (a, b) = v(s);
            agree(d3::add(s.a, s.b), vec3::add(&a, &b), mutated(a, |m| { m.add(&b); }), tol)?;
            agree(d3::subtract(s.a, s.b), a - b, mutated(a, |m| { m.subtract(&b); }), tol)
        }),
        check("V3-MULDIV", "multiply / divide / scale", CAT, samples, |s| {
            let (a, b) = v(s);
            agree(d3::multiply(s.a, s.b), vec3::multiply(&a, &b), mutated(a, |m| { m.multiply(&b); }), tol)?;
            agree(d3::divide(s.a, s.b), vec3::divide(&a, &b), mutated(a, |m| { m.divide(&b); }), tol)?;
            agree(d3::scale(s.a, s.s), a * s.s, mutated(a, |m| { m.scale(s.s); }), tol)
        }),
        check("V3-CROSS", "cross", CAT, samples, |s| {
            let (a, b) = v(s);
            agree(d3::cross(s.a, s.b), vec3::cross(&a, &b), mutated(a, |m| { m.cross(&b); }), tol)
        }),
        check("V3-NORM", "normalize / negate", CAT, samples, |s| {
            let a = Vec3::from(s.a);
            agree(d3::normalize(s.a), vec3::normalize(&a), mutated(a, |m| { m.normalize(); }), tol)?;
            agree(d3::negate(s.a), -a, mutated(a, |m| { m.negate(); }), tol)
        }),
        check("V3-SHAPE", "clamp / limits / look_at / project", CAT, samples, |s| {
            let (a, b) = v(s);
            let (lo, hi) = (s.s * 50.0, s.s * 50.0 + 25.0);
            agree(d3::clamp(s.a, lo, hi), vec3::clamp(&a, lo, hi), mutated(a, |m| { m.clamp(lo, hi); }), tol)?;
            agree(d3::limit_max(s.a, hi), vec3::limit_max(&a, hi), mutated(a, |m| { m.limit_max(hi); }), tol)?;
            agree(d3::limit_min(s.a, lo), vec3::limit_min(&a, lo), mutated(a, |m| { m.limit_min(lo); }), tol)?;
            agree(d3::look_at(s.a, s.b), vec3::look_at(&a, &b), mutated(a, |m| { m.look_at(&b); }), tol)?;
            agree(d3::project(s.a, s.b), vec3::project(&a, &b), mutated(a, |m| { m.project(&b); }), tol)
        }),
        check("V3-LERP", "lerp", CAT, samples, |s| {
            let (a, b) = v(s);
            agree(d3::lerp(s.a, s.b, s.s), vec3::lerp(&a, &b, s.s), mutated(a, |m| { m.lerp(&b, s.s); }), tol)
        }),
        check("V3-REFL", "reflect", CAT, samples, |s| {
            let n = d3::normalize(s.b);
            let (a, normal) = (Vec3::from(s.a), Vec3::from(n));
            let r = a.reflect(&normal);
            ensure(a.xyz() == s.a, "reflect changed its receiver")?;
            agree(d3::reflect(s.a, n), vec3::reflect(&a, &normal), r, tol)
        }),
        check("V3-ROT", "rotate_x / rotate_y / rotate_z", CAT, samples, |s| {
            let (a, b) = v(s);
            let phi = s.s * TAU;
            agree(d3::rotate_x(s.a, phi), vec3::rotate_x(&a, phi), mutated(a, |m| { m.rotate_x(phi); }), tol)?;
            agree(d3::rotate_y(s.a, phi), vec3::rotate_y(&a, phi), mutated(a, |m| { m.rotate_y(phi); }), tol)?;
            agree(d3::rotate_z(s.a, phi), vec3::rotate_z(&a, phi), mutated(a, |m| { m.rotate_z(phi); }), tol)?;
            let about = mutated(a, |m| { m.rotate_y_about(phi, &b); });
            agree(d3::rotate_y_about(s.a, phi, s.b), about, about, tol)
        }),
        check("V3-SCALAR", "dot / distances / angles", CAT, samples, |s| {
            let (a, b) = v(s);
            expect("dot", a.dot(&b), d3::dot(s.a, s.b), tol)?;
            expect("distance", a.distance(&b), d3::distance(s.a, s.b), tol)?;
            expect("chebyshev", a.distance_chebyshev(&b), d3::distance_chebyshev(s.a, s.b), tol)?;
            expect("manhattan", a.distance_manhattan(&b), d3::distance_manhattan(s.a, s.b), tol)?;
            expect("minkowski", a.distance_minkowski(&b, 1.5), d3::distance_minkowski(s.a, s.b, 1.5), tol)?;
            expect("angle_between", a.angle_between(&b), d3::angle_between(s.a, s.b), tol)?;
            expect("angle_z", a.angle_z(), d3::angle_z(s.a), tol)
        }),
        check("V3-SNAP", "snapshot / text / JSON", CAT, samples, |s| {
            let a = Vec3::from(s.a);
            ensure(a.snapshot() == d3::immutable(s.a), "snapshot differs from tuple immutable")?;
            let text: Vec3 = a.to_string().parse().map_err(|e| format!("{}", e))?;
            ensure(text == a, "text round trip")?;
            let json = a.to_json().map_err(|e| e.to_string())?;
            ensure(Vec3::from_json(&json).map_err(|e| e.to_string())? == a, "JSON round trip")
        }),
    ]
}

// ─── Vec4 ───

fn vec4_checks(samples: &[Sample<4>], tol: f64) -> Vec<TestResult> {
    const CAT: &str = "Vec4";
    let v = |s: Sample<4>| (Vec4::from(s.a), Vec4::from(s.b));

    vec![
        check("V4-ARITH", "add / subtract / multiply / divide / scale", CAT, samples, |s| {
            let (a, b) = v(s);
            agree(d4::add(s.a, s.b), vec4::add(&a, &b), mutated(a, |m| { m.add(&b); }), tol)?;
            agree(d4::subtract(s.a, s.b), vec4::subtract(&a, &b), mutated(a, |m| { m.subtract(&b); }), tol)?;
            agree(d4::multiply(s.a, s.b), vec4::multiply(&a, &b), mutated(a, |m| { m.multiply(&b); }), tol)?;
            agree(d4::divide(s.a, s.b), vec4::divide(&a, &b), mutated(a, |m| { m.divide(&b); }), tol)?;
            agree(d4::scale(s.a, s.s), vec4::scale(&a, s.s), mutated(a, |m| { m.scale(s.s); }), tol)
        }),
        check("V4-NORM", "normalize / negate", CAT, samples, |s| {
            let a = Vec4::from(s.a);
            agree(d4::normalize(s.a), vec4::normalize(&a), mutated(a, |m| { m.normalize(); }), tol)?;
            agree(d4::negate(s.a), vec4::negate(&a), mutated(a, |m| { m.negate(); }), tol)
        }),
        check("V4-SHAPE", "clamp / limits / look_at / project", CAT, samples, |s| {
            let (a, b) = v(s);
            let (lo, hi) = (s.s * 50.0, s.s * 50.0 + 25.0);
            agree(d4::clamp(s.a, lo, hi), vec4::clamp(&a, lo, hi), mutated(a, |m| { m.clamp(lo, hi); }), tol)?;
            agree(d4::limit_max(s.a, hi), vec4::limit_max(&a, hi), mutated(a, |m| { m.limit_max(hi); }), tol)?;
            agree(d4::limit_min(s.a, lo), vec4::limit_min(&a, lo), mutated(a, |m| { m.limit_min(lo); }), tol)?;
            agree(d4::look_at(s.a, s.b), vec4::look_at(&a, &b), mutated(a, |m| { m.look_at(&b); }), tol)?;
            agree(d4::project(s.a, s.b), vec4::project(&a, &b), mutated(a, |m| { m.project(&b); }), tol)
        }),
        check("V4-LERP", "lerp / reflect", CAT, samples, |s| {
            let (a, b) = v(s);
            agree(d4::lerp(s.a, s.b, s.s), vec4::lerp(&a, &b, s.s), mutated(a, |m| { m.lerp(&b, s.s); }), tol)?;
            let n = d4::normalize(s.b);
            let normal = Vec4::from(n);
            agree(d4::reflect(s.a, n), vec4::reflect(&a, &normal), a.reflect(&normal), tol)
        }),
        check("V4-SCALAR", "dot / distances / angles", CAT, samples, |s| {
            let (a, b) = v(s);
            expect("dot", a.dot(&b), d4::dot(s.a, s.b), tol)?;
            expect("distance", a.distance(&b), d4::distance(s.a, s.b), tol)?;
            expect("chebyshev", a.distance_chebyshev(&b), d4::distance_chebyshev(s.a, s.b), tol)?;
            expect("manhattan", a.distance_manhattan(&b), d4::distance_manhattan(s.a, s.b), tol)?;
            expect("angle_between", a.angle_between(&b), d4::angle_between(s.a, s.b), tol)?;
            expect("angle_w", a.angle_w(), d4::angle_w(s.a), tol)
        }),
        check("V4-SNAP", "snapshot / text / JSON", CAT, samples, |s| {
            let a = Vec4::from(s.a);
            ensure(a.snapshot() == d4::immutable(s.a), "snapshot differs from tuple immutable")?;
            let text: Vec4 = a.to_string().parse().map_err(|e| format!("{}", e))?;
            ensure(text == a, "text round trip")?;
            let json = a.to_json().map_err(|e| e.to_string())?;
            ensure(Vec4::from_json(&json).map_err(|e| e.to_string())? == a, "JSON round trip")
        }),
    ]
}

// ─── Properties ───

fn property_checks(s2: &[Sample<2>], s3: &[Sample<3>], s4: &[Sample<4>], tol: f64) -> Vec<TestResult> {
    const CAT: &str = "Properties";

    vec![
        check("P-MAG", "magnitude == sqrt(magnitude_sq)", CAT, s4, |s| {
            expect("2D", d2::magnitude([s.a[0], s.a[1]]), d2::magnitude_sq([s.a[0], s.a[1]]).sqrt(), tol)?;
            expect("3D", d3::magnitude([s.a[0], s.a[1], s.a[2]]), d3::magnitude_sq([s.a[0], s.a[1], s.a[2]]).sqrt(), tol)?;
            expect("4D", d4::magnitude(s.a), d4::magnitude_sq(s.a).sqrt(), tol)
        }),
        check("P-NORM", "normalize gives a parallel unit vector", CAT, s3, |s| {
            if d3::is_zero(s.a) {
                return ensure(d3::is_zero(d3::normalize(s.a)), "zero did not normalize to zero");
            }
            let n = d3::normalize(s.a);
            expect("magnitude", d3::magnitude(n), 1.0, tol)?;
            expect_n("parallel", d3::cross(n, s.a), [0.0; 3], tol * d3::magnitude(s.a).max(1.0))
        }),
        check("P-ADDSUB", "subtract(add(v, w), w) == v", CAT, s2, |s| {
            expect_n("round trip", d2::subtract(d2::add(s.a, s.b), s.b), s.a, tol * 100.0)
        }),
        check("P-EQ", "is_equal / is_opposite", CAT, s4, |s| {
            ensure(d4::is_equal(s.a, s.a), "is_equal(v, v)")?;
            ensure(d4::is_opposite(s.a, d4::negate(s.a)), "is_opposite(v, -v)")
        }),
        check("P-LERP", "lerp endpoints", CAT, s3, |s| {
            ensure(d3::lerp(s.a, s.b, 0.0) == s.a, "lerp(v, w, 0) != v")?;
            expect_n("lerp(v, w, 1)", d3::lerp(s.a, s.b, 1.0), s.b, tol)
        }),
        check("P-SYM", "dot / distance symmetry, cross antisymmetry", CAT, s3, |s| {
            ensure(d3::dot(s.a, s.b) == d3::dot(s.b, s.a), "dot not symmetric")?;
            ensure(
                d3::cross(s.a, s.b) == d3::negate(d3::cross(s.b, s.a)),
                "cross not antisymmetric",
            )?;
            ensure(d3::distance(s.a, s.b) == d3::distance(s.b, s.a), "distance not symmetric")?;
            expect("distance_sq", d3::distance_sq(s.a, s.b), d3::distance(s.a, s.b).powi(2), tol)
        }),
        check("P-SLERP", "slerp_degrees crosses 0 on the short arc", CAT, s2, |s| {
            let from = 340.0 + s.s * 20.0;
            let to = from + 20.0 - 360.0;
            let mid = slerp_degrees(from, to, 0.5);
            expect("midpoint", mid, from + 10.0, tol)
        }),
    ]
}
