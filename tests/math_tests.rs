use approx::assert_relative_eq;
use disk_dynamics::math::{approx_eq, approx_zero, clamp, lerp, Vector2};

#[test]
fn test_vector2_operations() {
    let v1 = Vector2::new(1.0, 2.0);
    let v2 = Vector2::new(4.0, 5.0);

    // Addition
    let sum = v1 + v2;
    assert_eq!(sum.x, 5.0);
    assert_eq!(sum.y, 7.0);

    // Subtraction
    let diff = v2 - v1;
    assert_eq!(diff.x, 3.0);
    assert_eq!(diff.y, 3.0);

    // Scalar multiplication
    let scaled = v1 * 2.0;
    assert_eq!(scaled.x, 2.0);
    assert_eq!(scaled.y, 4.0);

    // Scalar division
    let halved = v1 / 2.0;
    assert_eq!(halved.x, 0.5);
    assert_eq!(halved.y, 1.0);

    // Negation
    let negated = -v1;
    assert_eq!(negated.x, -1.0);
    assert_eq!(negated.y, -2.0);

    // Dot product
    let dot = v1.dot(&v2);
    assert_eq!(dot, 1.0 * 4.0 + 2.0 * 5.0);

    // Length
    let length = v1.length();
    assert_relative_eq!(length, (1.0f32.powi(2) + 2.0f32.powi(2)).sqrt());

    // Normalize
    let normalized = v1.normalize();
    assert_relative_eq!(normalized.length(), 1.0);
    assert_relative_eq!(normalized.x, v1.x / length);
    assert_relative_eq!(normalized.y, v1.y / length);
}

#[test]
fn test_vector2_assign_operations() {
    let mut v = Vector2::new(1.0, 2.0);

    v += Vector2::new(1.0, 1.0);
    assert_eq!(v, Vector2::new(2.0, 3.0));

    v -= Vector2::new(0.5, 0.5);
    assert_eq!(v, Vector2::new(1.5, 2.5));

    v *= 2.0;
    assert_eq!(v, Vector2::new(3.0, 5.0));

    v /= 2.0;
    assert_eq!(v, Vector2::new(1.5, 2.5));
}

#[test]
fn test_vector2_normalize_zero_vector() {
    // Normalizing a zero vector must not divide by zero
    let zero = Vector2::zero();
    let normalized = zero.normalize();

    assert!(normalized.is_zero());
}

#[test]
fn test_vector2_unit_vectors() {
    assert_eq!(Vector2::unit_x(), Vector2::new(1.0, 0.0));
    assert_eq!(Vector2::unit_y(), Vector2::new(0.0, 1.0));
    assert_relative_eq!(Vector2::unit_x().length(), 1.0);
    assert_relative_eq!(Vector2::unit_y().length(), 1.0);
    assert_eq!(Vector2::unit_x().dot(&Vector2::unit_y()), 0.0);
}

#[test]
fn test_vector2_lerp() {
    let start = Vector2::new(0.0, -1.0);
    let end = Vector2::new(2.0, 1.0);

    assert_eq!(start.lerp(&end, 0.0), start);
    assert_eq!(start.lerp(&end, 1.0), end);

    let midpoint = start.lerp(&end, 0.5);
    assert_relative_eq!(midpoint.x, 1.0);
    assert_relative_eq!(midpoint.y, 0.0);
}

#[test]
fn test_vector2_nalgebra_round_trip() {
    let v = Vector2::new(3.5, -1.25);
    let converted = Vector2::from_na(&v.to_na());

    assert_eq!(v, converted);
}

#[test]
fn test_scalar_helpers() {
    assert_eq!(clamp(5.0, 0.0, 1.0), 1.0);
    assert_eq!(clamp(-5.0, 0.0, 1.0), 0.0);
    assert_eq!(clamp(0.5, 0.0, 1.0), 0.5);

    assert_relative_eq!(lerp(0.0, 10.0, 0.25), 2.5);
    assert_relative_eq!(lerp(-1.0, 1.0, 0.5), 0.0);

    assert!(approx_eq(1.0, 1.0 + 1.0e-7));
    assert!(!approx_eq(1.0, 1.1));
    assert!(approx_zero(1.0e-7));
    assert!(!approx_zero(0.1));
}
