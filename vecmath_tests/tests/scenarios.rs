use std::f64::consts::{FRAC_PI_2, PI};

use approx::{assert_abs_diff_eq, assert_relative_eq};
use vecmath_core::slerp::slerp_degrees;
use vecmath_core::tuple::{d2, d3, d4};
use vecmath_core::{vec2, Snapshot2, Vec2, Vec3, Vec4, VectorFlags};

#[test]
fn tuple_arithmetic_2d() {
    assert_eq!(d2::add([1.0, 2.0], [3.0, 4.0]), [4.0, 6.0]);
    assert_eq!(d2::dot([1.0, 2.0], [3.0, 4.0]), 11.0);
    assert_eq!(d2::cross([1.0, 2.0], [3.0, 4.0]), -2.0);
    assert_eq!(d2::magnitude([3.0, 4.0]), 5.0);
    assert_eq!(d2::distance([1.0, 1.0], [4.0, 5.0]), 5.0);
    assert_eq!(d2::dot([3.0, 4.0], [2.0, 1.0]), 10.0);
    assert_eq!(d2::cross([3.0, 4.0], [2.0, 1.0]), -5.0);
}

#[test]
fn normalize_mutates_in_place() {
    let mut v = Vec2::new(3.0, 4.0);
    let p: *const Vec2 = &v;
    assert!(std::ptr::eq(p, v.normalize()));
    assert_eq!(v.xy(), [0.6, 0.8]);
    assert_abs_diff_eq!(v.magnitude(), 1.0, epsilon = 1e-15);
}

#[test]
fn quarter_turn_rotation() {
    let r = d2::rotate([1.0, 0.0], FRAC_PI_2);
    assert!(d2::is_equal_approx(r, [0.0, 1.0], 1e-15));
    assert_eq!(d2::turn_left([1.0, 0.0]), [-0.0, 1.0]);
    assert_eq!(d2::turn_right([1.0, 0.0]), [0.0, -1.0]);
}

#[test]
fn division_by_zero_component_gives_positive_infinity() {
    assert_eq!(d2::divide([5.0, 10.0], [0.0, 2.0]), [f64::INFINITY, 5.0]);
    assert_eq!(d3::divide([-1.0, 1.0, 1.0], [0.0, 1.0, 1.0])[0], f64::INFINITY);
}

#[test]
fn right_handed_cross_product() {
    assert_eq!(d3::cross([1.0, 0.0, 0.0], [0.0, 1.0, 0.0]), [0.0, 0.0, 1.0]);
    assert_eq!(d3::cross([0.0, 1.0, 0.0], [0.0, 0.0, 1.0]), [1.0, 0.0, 0.0]);
}

#[test]
fn normalizing_zero_yields_zero() {
    assert_eq!(d2::normalize([0.0, 0.0]), [0.0, 0.0]);
    assert_eq!(d3::normalize(d3::zero()), d3::zero());
    assert_eq!(d4::normalize(d4::zero()), d4::zero());

    let mut v = Vec3::zero();
    v.normalize();
    assert!(v.is_zero());
    assert_eq!(v.magnitude(), 0.0);
}

#[test]
fn tuple_lerp_extrapolates_while_class_lerp_clamps() {
    assert_eq!(d2::lerp([0.0, 0.0], [2.0, 2.0], 2.0), [4.0, 4.0]);

    let mut v = Vec2::new(0.0, 0.0);
    v.lerp(&Vec2::new(2.0, 2.0), 2.0);
    assert_eq!(v.xy(), [2.0, 2.0]);
    assert_eq!(vec2::lerp(&Vec2::zero(), &Vec2::new(2.0, 2.0), -1.0), Vec2::zero());
}

#[test]
fn chained_mutators_return_the_same_instance() {
    let mut v = Vec2::new(3.0, 4.0);
    let p: *const Vec2 = &v;
    let r = v.normalize().scale(10.0).rotate(PI);
    assert!(std::ptr::eq(p, r));
    assert_abs_diff_eq!(v.x(), -6.0, epsilon = 1e-12);
    assert_abs_diff_eq!(v.y(), -8.0, epsilon = 1e-12);
    assert_abs_diff_eq!(v.magnitude(), 10.0, epsilon = 1e-12);
}

#[test]
fn cached_magnitude_follows_component_writes() {
    let mut v = Vec3::new(1.0, 2.0, 2.0);
    assert_eq!(v.magnitude(), 3.0);
    v.set_z(0.0);
    assert_relative_eq!(v.magnitude(), 5f64.sqrt());
    v.set_magnitude(2.0);
    assert_relative_eq!(v.magnitude(), 2.0, epsilon = 1e-12);
    assert_relative_eq!(d3::magnitude(v.xyz()), 2.0, epsilon = 1e-12);
}

#[test]
fn randomize_keeps_magnitude() {
    let mut v = Vec4::new(0.0, 3.0, 0.0, 4.0);
    v.randomize();
    assert_abs_diff_eq!(v.magnitude(), 5.0, epsilon = 1e-12);
    assert_abs_diff_eq!(d4::magnitude(v.xyzw()), 5.0, epsilon = 1e-12);
}

#[test]
fn snapshot_carries_classification() {
    let s: Snapshot2 = d2::immutable([f64::NAN, 1.0]);
    assert!(s.is_nan());
    assert!(s.flags().contains(VectorFlags::NAN));

    let z = d3::immutable([0.0, 0.0, 0.0]);
    assert!(z.is_zero());
    assert_eq!(z.magnitude(), 0.0);

    let i = d4::immutable([1.0, f64::INFINITY, 0.0, 0.0]);
    assert!(i.is_infinite());
    assert!(!i.is_nan());
}

#[test]
fn slerp_takes_short_way_across_zero() {
    let mid = slerp_degrees(350.0, 10.0, 0.5);
    let off = mid.rem_euclid(360.0);
    assert_abs_diff_eq!(off.min(360.0 - off), 0.0, epsilon = 1e-9);
}

#[test]
fn text_form() {
    assert_eq!(Vec2::new(1.0, -0.0).to_string(), "Vec2(1, 0)");
    assert_eq!(Vec3::new(1.5, 2.0, f64::INFINITY).to_string(), "Vec3(1.5, 2, Infinity)");
    let v: Vec4 = "Vec4(1, 2, 3, 4)".parse().unwrap();
    assert_eq!(v, Vec4::new(1.0, 2.0, 3.0, 4.0));
    assert!("Vec4(1, 2, 3)".parse::<Vec4>().is_err());
    assert!("Vec2(1, x)".parse::<Vec2>().is_err());
}

#[test]
fn json_object_form() {
    let v = Vec3::new(1.0, 2.0, 3.0);
    let json = v.to_json().unwrap();
    assert_eq!(json, r#"{"x":1.0,"y":2.0,"z":3.0}"#);
    assert_eq!(Vec3::from_json(&json).unwrap(), v);
}

#[test]
fn homogeneous_points_and_directions() {
    let p = Vec4::point(1.0, 2.0, 3.0);
    let d = Vec4::direction(1.0, 2.0, 3.0);
    assert_eq!(p.w(), 1.0);
    assert_eq!(d.w(), 0.0);
    assert_eq!(p.truncate(), d.truncate());
    assert_eq!(Vec3::new(1.0, 2.0, 3.0).extend(1.0), p);
}
