//! Tests for aggregate folds over vector slices.
//!
//! These tests verify the slice-level reductions:
//! - Component-wise sum, left-to-right difference, arithmetic mean
//! - Singleton and empty-slice edge cases
//! - The typed empty-input error and its message
//!
//! ## Test Organization
//!
//! 1. **Sum** - values, singleton, empty input
//! 2. **Difference** - order sensitivity, singleton, empty input
//! 3. **Average** - values, singleton, empty input
//! 4. **Error Reporting** - equality and Display of the error

use vector2d::{Vector, VectorError};

// ============================================================================
// Sum Tests
// ============================================================================

/// Test the component-wise sum of several vectors.
#[test]
fn test_sum() {
    let vectors = [
        Vector::new(1.0, 2.0),
        Vector::new(3.0, 4.0),
        Vector::new(5.0, 6.0),
    ];

    assert_eq!(Vector::sum(&vectors), Ok(Vector::new(9.0, 12.0)));

    // The input slice is read, never mutated.
    assert_eq!(vectors[0], Vector::new(1.0, 2.0));
}

/// Test that the fold agrees with chaining the instance mutator by hand.
#[test]
fn test_sum_matches_manual_fold() {
    let vectors = [
        Vector::new(0.5, -1.0),
        Vector::new(2.0, 3.5),
        Vector::new(-4.0, 0.25),
    ];

    let mut manual = vectors[0];
    manual.add(&vectors[1]).add(&vectors[2]);

    assert_eq!(Vector::sum(&vectors), Ok(manual));
}

/// Test that a one-element sum is a copy of that element.
#[test]
fn test_sum_singleton() {
    let only = [Vector::new(2.5, -1.0)];

    assert_eq!(Vector::sum(&only), Ok(Vector::new(2.5, -1.0)));
}

/// Test that summing an empty slice is a typed error.
#[test]
fn test_sum_empty() {
    assert_eq!(Vector::<f64>::sum(&[]), Err(VectorError::EmptyInput));
}

/// Test the sum at the f32 instantiation.
#[test]
fn test_sum_f32() {
    let vectors = [Vector::<f32>::new(1.0, 2.0), Vector::new(0.5, -0.5)];

    assert_eq!(Vector::sum(&vectors), Ok(Vector::new(1.5, 1.5)));
}

// ============================================================================
// Difference Tests
// ============================================================================

/// Test the left-to-right difference: first element minus the rest.
#[test]
fn test_difference() {
    let vectors = [
        Vector::new(10.0, 10.0),
        Vector::new(1.0, 2.0),
        Vector::new(3.0, 4.0),
    ];

    assert_eq!(Vector::difference(&vectors), Ok(Vector::new(6.0, 4.0)));
}

/// Test that the difference depends on element order.
#[test]
fn test_difference_order_matters() {
    let forward = [Vector::new(10.0, 0.0), Vector::new(4.0, 0.0)];
    let backward = [Vector::new(4.0, 0.0), Vector::new(10.0, 0.0)];

    assert_eq!(Vector::difference(&forward), Ok(Vector::new(6.0, 0.0)));
    assert_eq!(Vector::difference(&backward), Ok(Vector::new(-6.0, 0.0)));
}

/// Test that a one-element difference is a copy of that element.
#[test]
fn test_difference_singleton() {
    let only = [Vector::new(-3.0, 7.0)];

    assert_eq!(Vector::difference(&only), Ok(Vector::new(-3.0, 7.0)));
}

/// Test that differencing an empty slice is a typed error.
#[test]
fn test_difference_empty() {
    assert_eq!(Vector::<f64>::difference(&[]), Err(VectorError::EmptyInput));
}

// ============================================================================
// Average Tests
// ============================================================================

/// Test the arithmetic mean of several vectors.
#[test]
fn test_average() {
    let corners = [Vector::new(0.0, 0.0), Vector::new(10.0, 20.0)];
    assert_eq!(Vector::average(&corners), Ok(Vector::new(5.0, 10.0)));

    let trio = [
        Vector::new(1.0, 1.0),
        Vector::new(2.0, 2.0),
        Vector::new(3.0, 3.0),
    ];
    assert_eq!(Vector::average(&trio), Ok(Vector::new(2.0, 2.0)));
}

/// Test that a one-element average is that element unchanged.
#[test]
fn test_average_singleton() {
    let only = [Vector::new(4.0, -8.0)];

    assert_eq!(Vector::average(&only), Ok(Vector::new(4.0, -8.0)));
}

/// Test that averaging identical vectors reproduces the vector.
#[test]
fn test_average_identical() {
    let same = Vector::new(2.5, -4.0);
    let trio = [same, same, same];

    assert_eq!(Vector::average(&trio), Ok(same));
}

/// Test that averaging an empty slice is a typed error.
#[test]
fn test_average_empty() {
    assert_eq!(Vector::<f64>::average(&[]), Err(VectorError::EmptyInput));
}

// ============================================================================
// Error Reporting Tests
// ============================================================================

/// Test that the empty-input error compares equal across operations and
/// renders a useful message.
#[test]
fn test_empty_input_error() {
    let sum_err = Vector::<f64>::sum(&[]).unwrap_err();
    let avg_err = Vector::<f64>::average(&[]).unwrap_err();
    assert_eq!(sum_err, avg_err);

    assert_eq!(
        format!("{}", sum_err),
        "Input slice is empty (at least one vector is required)"
    );
}
