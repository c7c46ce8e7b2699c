//! Tests for the normalizer and derived angles.

use bloch_core::vector::{BlochAngles, BlochVector, normalize};
use std::f64::consts::{FRAC_PI_2, PI};

const TOL: f64 = 1e-12;

// ---------------------------------------------------------------------------
// Normalizer
// ---------------------------------------------------------------------------

#[test]
fn normalize_unit_input_is_stable() {
    let v = normalize(0.0, 0.0, 1.0);
    assert_eq!(v, BlochVector::ZERO);

    let once = normalize(0.36, 0.48, 0.8);
    let twice = normalize(once.x(), once.y(), once.z());
    assert!(once.approx_eq(&twice, TOL));
}

#[test]
fn normalize_zero_is_north_pole() {
    assert_eq!(normalize(0.0, 0.0, 0.0), BlochVector::ZERO);
    assert_eq!(normalize(-0.0, 0.0, -0.0), BlochVector::ZERO);
}

#[test]
fn normalize_non_finite_is_north_pole() {
    assert_eq!(normalize(f64::NAN, f64::NAN, f64::NAN), BlochVector::ZERO);
    assert_eq!(normalize(1.0, f64::INFINITY, 0.0), BlochVector::ZERO);
}

#[test]
fn normalize_preserves_direction() {
    let v = normalize(-2.0, 0.0, 2.0);
    let s = 1.0 / 2f64.sqrt();
    assert!(v.approx_eq(&BlochVector::new(-s, 0.0, s), TOL));
}

#[test]
fn default_is_north_pole() {
    assert_eq!(BlochVector::default(), BlochVector::ZERO);
}

// ---------------------------------------------------------------------------
// Derived angles
// ---------------------------------------------------------------------------

#[test]
fn poles_have_extreme_polar_angle() {
    assert!(BlochVector::ZERO.polar_degrees().abs() < TOL);
    assert!((BlochVector::ONE.polar_degrees() - 180.0).abs() < TOL);
}

#[test]
fn azimuth_wraps_into_positive_range() {
    let minus_y = BlochVector::new(0.0, -1.0, 0.0);
    assert!((minus_y.azimuth_degrees() - 270.0).abs() < 1e-9);

    let minus_x = BlochVector::new(-1.0, 0.0, 0.0);
    assert!((minus_x.azimuth_degrees() - 180.0).abs() < 1e-9);

    let below_x = BlochVector::new(1.0, -1e-17, 0.0);
    let phi = below_x.azimuth_degrees();
    assert!((0.0..360.0).contains(&phi));
}

#[test]
fn angles_match_components() {
    let v = BlochVector::new(0.0, 1.0, 1.0);
    let BlochAngles { theta, phi } = v.angles();
    assert!((theta - PI / 4.0).abs() < TOL);
    assert!((phi - FRAC_PI_2).abs() < TOL);
}

#[test]
fn radius_is_constant() {
    assert_eq!(BlochVector::new(0.3, -0.1, 0.9).radius(), 1.0);
}

// ---------------------------------------------------------------------------
// Serialization
// ---------------------------------------------------------------------------

#[test]
fn deserialize_normalizes() {
    let v: BlochVector = serde_json::from_str(r#"{"x": 0.0, "y": 3.0, "z": 4.0}"#).unwrap();
    assert!(v.approx_eq(&BlochVector::new(0.0, 0.6, 0.8), TOL));

    let zero: BlochVector = serde_json::from_str(r#"{"x": 0.0, "y": 0.0, "z": 0.0}"#).unwrap();
    assert_eq!(zero, BlochVector::ZERO);
}

#[test]
fn serialize_components() {
    let json = serde_json::to_value(BlochVector::ONE).unwrap();
    assert_eq!(json["z"], -1.0);
    assert_eq!(json["x"], 0.0);
}
