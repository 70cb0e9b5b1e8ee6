//! Tests for operator traits and conversions.
//!
//! These tests verify the expression-style surface of the vector type:
//! - Binary and unary operators on copies
//! - Scalar multiplication and division from either side
//! - Assigning operator forms
//! - Tuple and array conversions, Display, Default
//!
//! ## Test Organization
//!
//! 1. **Binary Operators** - addition, subtraction, negation
//! 2. **Scalar Operators** - mul and div, scalar on either side
//! 3. **Assigning Operators** - compound assignment forms
//! 4. **Conversions** - tuples and arrays, both directions
//! 5. **Formatting and Default** - Display output, default value

use vector2d::Vector;

// ============================================================================
// Binary Operator Tests
// ============================================================================

/// Test vector addition and subtraction on copies.
#[test]
fn test_add_sub() {
    let a = Vector::new(1.0, 2.0);
    let b = Vector::new(3.0, 4.0);

    assert_eq!(a + b, Vector::new(4.0, 6.0));
    assert_eq!(b - a, Vector::new(2.0, 2.0));

    // Operands are copies; the originals are untouched.
    assert_eq!(a, Vector::new(1.0, 2.0));
    assert_eq!(b, Vector::new(3.0, 4.0));
}

/// Test unary negation.
#[test]
fn test_neg() {
    let v = Vector::new(3.0, -2.0);

    assert_eq!(-v, Vector::new(-3.0, 2.0));
    assert_eq!(-(-v), v);
}

// ============================================================================
// Scalar Operator Tests
// ============================================================================

/// Test scalar multiplication and division with the scalar on the right.
#[test]
fn test_scalar_mul_div() {
    let v = Vector::new(1.5, -2.25);

    assert_eq!(v * 2.0, Vector::new(3.0, -4.5));
    assert_eq!(v / 2.0, Vector::new(0.75, -1.125));
    assert_eq!(v * 2.0 / 2.0, v);
}

/// Test that the scalar can sit on the left for f64 and f32.
#[test]
fn test_scalar_on_the_left() {
    let v = Vector::new(1.0, -2.0);
    assert_eq!(2.0 * v, v * 2.0);

    let w = Vector::<f32>::new(0.5, 4.0);
    assert_eq!(3.0_f32 * w, Vector::new(1.5, 12.0));
}

// ============================================================================
// Assigning Operator Tests
// ============================================================================

/// Test the compound assignment forms against their binary counterparts.
#[test]
fn test_assigning_operators() {
    let mut v = Vector::new(1.0, 2.0);

    v += Vector::new(3.0, 4.0);
    assert_eq!(v, Vector::new(4.0, 6.0));

    v -= Vector::new(1.0, 1.0);
    assert_eq!(v, Vector::new(3.0, 5.0));

    v *= 2.0;
    assert_eq!(v, Vector::new(6.0, 10.0));

    v /= 4.0;
    assert_eq!(v, Vector::new(1.5, 2.5));
}

// ============================================================================
// Conversion Tests
// ============================================================================

/// Test tuple conversions in both directions.
#[test]
fn test_tuple_conversions() {
    let v = Vector::from((3.0, 4.0));
    assert_eq!(v, Vector::new(3.0, 4.0));

    let pair: (f64, f64) = v.into();
    assert_eq!(pair, (3.0, 4.0));
}

/// Test array conversions in both directions.
#[test]
fn test_array_conversions() {
    let v = Vector::from([-1.0, 2.5]);
    assert_eq!(v, Vector::new(-1.0, 2.5));

    let components: [f64; 2] = v.into();
    assert_eq!(components, [-1.0, 2.5]);
}

// ============================================================================
// Formatting and Default Tests
// ============================================================================

/// Test the Display format.
#[test]
fn test_display() {
    assert_eq!(format!("{}", Vector::new(3.0, 4.0)), "(3, 4)");
    assert_eq!(format!("{}", Vector::new(1.5, -2.5)), "(1.5, -2.5)");
}

/// Test that the default vector is the origin.
#[test]
fn test_default_is_zero() {
    assert_eq!(Vector::<f64>::default(), Vector::zero());
}
