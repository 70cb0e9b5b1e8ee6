//! Operator traits and conversions for [`Vector`].
//!
//! ## Purpose
//!
//! This module wires [`Vector`] into the standard operator and conversion
//! traits, so callers who prefer expression-style math over the chainable
//! mutators can write it directly:
//!
//! ```rust
//! use vector2d::Vector;
//!
//! let a = Vector::new(1.0, 2.0);
//! let b = Vector::new(3.0, 4.0);
//!
//! assert_eq!(a + b, Vector::new(4.0, 6.0));
//! assert_eq!(2.0 * a, Vector::new(2.0, 4.0));
//! assert_eq!(format!("{}", b), "(3, 4)");
//! ```
//!
//! ## Design notes
//!
//! * **By-value operands**: `Vector` is `Copy`, so the binary operators
//!   take and return values; the originals are untouched.
//! * **Scalar side**: `v * s` and `v / s` are generic; `s * v` needs one
//!   impl per scalar type because a blanket impl on `T` would overlap the
//!   standard library's `Mul` impls.
//!
//! ## Non-goals
//!
//! * No component-wise `Vector * Vector`; the product of two vectors is
//!   the dot product, which lives on the type itself.

// External dependencies
use core::fmt::{Display, Formatter, Result};
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_traits::Float;

// Internal dependencies
use crate::vector::Vector;

// ============================================================================
// Default and Display
// ============================================================================

impl<T: Float> Default for Vector<T> {
    /// The zero vector.
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Float + Display> Display for Vector<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl<T: Float> From<(T, T)> for Vector<T> {
    #[inline]
    fn from((x, y): (T, T)) -> Self {
        Self::new(x, y)
    }
}

impl<T: Float> From<Vector<T>> for (T, T) {
    #[inline]
    fn from(v: Vector<T>) -> Self {
        (v.x, v.y)
    }
}

impl<T: Float> From<[T; 2]> for Vector<T> {
    #[inline]
    fn from([x, y]: [T; 2]) -> Self {
        Self::new(x, y)
    }
}

impl<T: Float> From<Vector<T>> for [T; 2] {
    #[inline]
    fn from(v: Vector<T>) -> Self {
        [v.x, v.y]
    }
}

// ============================================================================
// Arithmetic Operators
// ============================================================================

impl<T: Float> Add for Vector<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<T: Float> Sub for Vector<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<T: Float> Mul<T> for Vector<T> {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: T) -> Self {
        Self::new(self.x * scalar, self.y * scalar)
    }
}

impl<T: Float> Div<T> for Vector<T> {
    type Output = Self;

    #[inline]
    fn div(self, scalar: T) -> Self {
        Self::new(self.x / scalar, self.y / scalar)
    }
}

impl<T: Float> Neg for Vector<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

// Coherence forbids `impl<T: Float> Mul<Vector<T>> for T`, so the scalar
// goes on the left one concrete type at a time.
impl Mul<Vector<f64>> for f64 {
    type Output = Vector<f64>;

    #[inline]
    fn mul(self, v: Vector<f64>) -> Vector<f64> {
        v * self
    }
}

impl Mul<Vector<f32>> for f32 {
    type Output = Vector<f32>;

    #[inline]
    fn mul(self, v: Vector<f32>) -> Vector<f32> {
        v * self
    }
}

// ============================================================================
// Assigning Operators
// ============================================================================

impl<T: Float> AddAssign for Vector<T> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Float> SubAssign for Vector<T> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Float> MulAssign<T> for Vector<T> {
    #[inline]
    fn mul_assign(&mut self, scalar: T) {
        *self = *self * scalar;
    }
}

impl<T: Float> DivAssign<T> for Vector<T> {
    #[inline]
    fn div_assign(&mut self, scalar: T) {
        *self = *self / scalar;
    }
}
