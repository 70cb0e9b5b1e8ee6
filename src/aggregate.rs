//! Aggregate folds over sequences of vectors.
//!
//! ## Purpose
//!
//! This module reduces slices of [`Vector`]s to a single vector: the
//! component-wise sum, the left-to-right difference, and the arithmetic
//! mean.
//!
//! ## Design notes
//!
//! * **Seeded folds**: every fold starts from a copy of the first element
//!   and walks the rest in order. Order matters for [`Vector::difference`];
//!   the others are order-insensitive up to rounding.
//! * **Typed emptiness**: an empty slice cannot seed a fold, so all three
//!   return [`VectorError::EmptyInput`] rather than inventing a zero.
//!
//! ## Invariants
//!
//! * An empty input is the only failure; any non-empty slice succeeds.
//! * A one-element slice returns a copy of that element unchanged.
//! * Inputs are never mutated; the result is always a new vector.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::errors::VectorError;
use crate::vector::Vector;

// ============================================================================
// Aggregate Folds
// ============================================================================

impl<T: Float> Vector<T> {
    /// The component-wise sum of all vectors in the slice.
    ///
    /// ```rust
    /// use vector2d::{Vector, VectorError};
    ///
    /// let forces = [Vector::new(1.0, 2.0), Vector::new(3.0, 4.0)];
    ///
    /// assert_eq!(Vector::sum(&forces), Ok(Vector::new(4.0, 6.0)));
    /// assert_eq!(Vector::<f64>::sum(&[]), Err(VectorError::EmptyInput));
    /// ```
    pub fn sum(vectors: &[Self]) -> Result<Self, VectorError> {
        if vectors.is_empty() {
            return Err(VectorError::EmptyInput);
        }

        let mut total = vectors[0];
        for v in &vectors[1..] {
            total.add(v);
        }

        Ok(total)
    }

    /// The left-to-right difference: the first vector minus every
    /// subsequent one.
    pub fn difference(vectors: &[Self]) -> Result<Self, VectorError> {
        if vectors.is_empty() {
            return Err(VectorError::EmptyInput);
        }

        let mut remainder = vectors[0];
        for v in &vectors[1..] {
            remainder.sub(v);
        }

        Ok(remainder)
    }

    /// The arithmetic mean of all vectors in the slice: the sum divided by
    /// the element count.
    ///
    /// ```rust
    /// use vector2d::Vector;
    ///
    /// let corners = [Vector::new(0.0, 0.0), Vector::new(10.0, 20.0)];
    ///
    /// assert_eq!(Vector::average(&corners), Ok(Vector::new(5.0, 10.0)));
    /// ```
    pub fn average(vectors: &[Self]) -> Result<Self, VectorError> {
        let mut mean = Self::sum(vectors)?;
        mean.div(T::from(vectors.len()).unwrap());
        Ok(mean)
    }
}
