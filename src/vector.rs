//! The 2D Euclidean vector value type.
//!
//! ## Purpose
//!
//! This module defines [`Vector`], a point or displacement in the plane,
//! together with its factories, derived attributes, chainable in-place
//! mutators, and non-mutating geometric queries.
//!
//! ## Design notes
//!
//! * **Chainable mutation**: every mutator takes `&mut self`, updates the
//!   components in place, and returns `&mut Self`, so transformations read
//!   as fluent pipelines.
//! * **Value semantics**: `Vector` is `Copy`; cloning always yields an
//!   independent instance with no shared state.
//! * **Generics**: all math is generic over `Float` types; `f64` is the
//!   default type parameter.
//! * **Screen convention**: `y` grows downward, so [`Vector::up`] decreases
//!   `y` and [`Vector::down`] increases it.
//!
//! ## Key concepts
//!
//! * **Heading**: the angle from the positive x-axis, `atan2(y, x)`,
//!   in (-pi, pi].
//! * **Magnitude**: the Euclidean length, `sqrt(x^2 + y^2)`.
//!
//! ## Invariants
//!
//! * Components stay finite under every well-formed operation.
//! * Zero-magnitude normalization and division by zero yield non-finite
//!   components silently; they are not errors.
//! * Equality is exact component equality (IEEE-754 `==`, no epsilon).
//!
//! ## Non-goals
//!
//! * This module does not provide 3D vectors or matrix transforms.
//! * This module does not implement the operator traits (see `ops`).
//! * This module does not fold sequences of vectors (see `aggregate`).

// External dependencies
use num_traits::Float;

#[cfg(feature = "rand")]
use core::f64::consts::TAU;

// ============================================================================
// Vector Type
// ============================================================================

/// A 2D Euclidean vector: a point or displacement in the plane.
///
/// Mutating methods return `&mut Self`, so updates chain fluently:
///
/// ```rust
/// use vector2d::Vector;
///
/// let mut velocity = Vector::new(10.0, 0.0);
/// velocity.rotate(0.0).mult(0.5).down(1.0);
///
/// assert_eq!(velocity, Vector::new(5.0, 1.0));
/// ```
///
/// Equality compares components exactly (no epsilon); `Copy`/`Clone` yield
/// fully independent instances.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector<T = f64> {
    /// Horizontal component.
    pub x: T,

    /// Vertical component. Positive `y` points down the screen.
    pub y: T,
}

impl<T: Float> Vector<T> {
    // ========================================================================
    // Factories
    // ========================================================================

    /// Create a vector from its components.
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// The origin, `(0, 0)`.
    #[inline]
    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero())
    }

    /// The unit vector along the positive x-axis, `(1, 0)`.
    #[inline]
    pub fn unit() -> Self {
        Self::new(T::one(), T::zero())
    }

    /// A unit vector pointing at the given heading:
    /// `(cos(radians), sin(radians))`.
    ///
    /// ```rust
    /// use vector2d::Vector;
    ///
    /// assert_eq!(Vector::from_angle(0.0), Vector::new(1.0, 0.0));
    /// ```
    #[inline]
    pub fn from_angle(radians: T) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self::new(cos, sin)
    }

    /// A unit vector at a uniformly random heading in `[0, 2*pi)`.
    ///
    /// Uses the thread-local RNG, so this is only available with the
    /// default-on `rand` feature.
    #[cfg(feature = "rand")]
    pub fn random() -> Self {
        let heading = rand::random_range(0.0..TAU);
        Self::from_angle(T::from(heading).unwrap())
    }

    // ========================================================================
    // Derived Attributes
    // ========================================================================

    /// The angle between the positive x-axis and this vector, in radians,
    /// in (-pi, pi].
    ///
    /// The origin has no direction; `atan2(0, 0)` is `0`, and that zero
    /// heading is what the degenerate geometric operations work from.
    #[inline]
    pub fn heading(&self) -> T {
        self.y.atan2(self.x)
    }

    /// The Euclidean length of this vector.
    ///
    /// ```rust
    /// use vector2d::Vector;
    ///
    /// assert_eq!(Vector::new(3.0, 4.0).magnitude(), 5.0);
    /// ```
    #[inline]
    pub fn magnitude(&self) -> T {
        self.x.hypot(self.y)
    }

    // ========================================================================
    // Component Mutators
    // ========================================================================

    /// Overwrite this vector's components with `other`'s.
    #[inline]
    pub fn copy_from(&mut self, other: &Self) -> &mut Self {
        self.x = other.x;
        self.y = other.y;
        self
    }

    /// Set both components.
    #[inline]
    pub fn set_xy(&mut self, x: T, y: T) -> &mut Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Set the horizontal component.
    #[inline]
    pub fn set_x(&mut self, x: T) -> &mut Self {
        self.x = x;
        self
    }

    /// Set the vertical component.
    #[inline]
    pub fn set_y(&mut self, y: T) -> &mut Self {
        self.y = y;
        self
    }

    /// Translate up the screen: decreases `y`.
    #[inline]
    pub fn up(&mut self, amount: T) -> &mut Self {
        self.y = self.y - amount;
        self
    }

    /// Translate down the screen: increases `y`.
    #[inline]
    pub fn down(&mut self, amount: T) -> &mut Self {
        self.y = self.y + amount;
        self
    }

    /// Translate left: decreases `x`.
    #[inline]
    pub fn left(&mut self, amount: T) -> &mut Self {
        self.x = self.x - amount;
        self
    }

    /// Translate right: increases `x`.
    #[inline]
    pub fn right(&mut self, amount: T) -> &mut Self {
        self.x = self.x + amount;
        self
    }

    // ========================================================================
    // Geometric Mutators
    // ========================================================================

    /// Rotate this vector to an absolute heading, preserving its magnitude.
    pub fn set_heading(&mut self, radians: T) -> &mut Self {
        let magnitude = self.magnitude();
        let (sin, cos) = radians.sin_cos();
        self.x = cos * magnitude;
        self.y = sin * magnitude;
        self
    }

    /// Rotate this vector by a relative angle, preserving its magnitude.
    #[inline]
    pub fn rotate(&mut self, radians: T) -> &mut Self {
        self.set_heading(self.heading() + radians)
    }

    /// Flip this vector through the origin (negate both components).
    #[inline]
    pub fn reflect(&mut self) -> &mut Self {
        self.mult(-T::one())
    }

    /// Rescale this vector to the given length, preserving its heading.
    ///
    /// The zero vector has the degenerate heading `0`, so rescaling it
    /// yields `(length, 0)` rather than an error.
    pub fn set_magnitude(&mut self, length: T) -> &mut Self {
        let heading = self.heading();
        let (sin, cos) = heading.sin_cos();
        self.x = cos * length;
        self.y = sin * length;
        self
    }

    /// Cap this vector's magnitude: rescale down to exactly `max` only when
    /// the current magnitude exceeds it.
    ///
    /// ```rust
    /// use vector2d::Vector;
    ///
    /// let mut fast = Vector::new(5.0, 0.0);
    /// let mut slow = Vector::new(2.0, 0.0);
    ///
    /// assert_eq!(fast.limit(3.0).magnitude(), 3.0);
    /// assert_eq!(slow.limit(3.0).magnitude(), 2.0);
    /// ```
    pub fn limit(&mut self, max: T) -> &mut Self {
        if self.magnitude() > max {
            self.set_magnitude(max);
        }
        self
    }

    /// Normalize this vector to unit magnitude, preserving its heading.
    ///
    /// Normalizing the zero vector divides by zero and leaves non-finite
    /// components; that degenerate result is deliberate, not an error.
    ///
    /// ```rust
    /// use vector2d::Vector;
    ///
    /// let mut v = Vector::new(3.0, 4.0);
    /// v.norm();
    ///
    /// assert_eq!(v, Vector::new(0.6, 0.8));
    /// ```
    pub fn norm(&mut self) -> &mut Self {
        let magnitude = self.magnitude();
        self.div(magnitude)
    }

    // ========================================================================
    // Arithmetic Mutators
    // ========================================================================

    /// Add `other` into this vector, component-wise.
    #[inline]
    pub fn add(&mut self, other: &Self) -> &mut Self {
        self.x = self.x + other.x;
        self.y = self.y + other.y;
        self
    }

    /// Subtract `other` from this vector, component-wise.
    #[inline]
    pub fn sub(&mut self, other: &Self) -> &mut Self {
        self.x = self.x - other.x;
        self.y = self.y - other.y;
        self
    }

    /// Scale both components by `scalar`.
    #[inline]
    pub fn mult(&mut self, scalar: T) -> &mut Self {
        self.x = self.x * scalar;
        self.y = self.y * scalar;
        self
    }

    /// Divide both components by `scalar`.
    ///
    /// Dividing by zero yields non-finite components silently.
    #[inline]
    pub fn div(&mut self, scalar: T) -> &mut Self {
        self.x = self.x / scalar;
        self.y = self.y / scalar;
        self
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// The Euclidean distance between this vector's endpoint and `other`'s.
    ///
    /// Symmetric: `a.distance(&b) == b.distance(&a)` exactly.
    #[inline]
    pub fn distance(&self, other: &Self) -> T {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// The dot product `x1 * x2 + y1 * y2`.
    #[inline]
    pub fn dot(&self, other: &Self) -> T {
        self.x * other.x + self.y * other.y
    }

    /// The angle between this vector and `other`, in radians, in `[0, pi]`.
    ///
    /// NaN when either vector has zero magnitude: there is no angle to a
    /// directionless vector.
    pub fn angle_between(&self, other: &Self) -> T {
        let ratio = self.dot(other) / (self.magnitude() * other.magnitude());

        // NaN means a zero-magnitude operand; the NaN-ignoring clamp below
        // must not swallow it.
        if ratio.is_nan() {
            return ratio;
        }

        // Rounding drift can push |ratio| past 1 for near-parallel vectors.
        ratio.min(T::one()).max(-T::one()).acos()
    }

    /// The vector projection of this vector onto the direction of `onto`.
    ///
    /// Returns a new vector; neither input is mutated. Projecting onto the
    /// zero vector has no defined direction and yields NaN components.
    ///
    /// ```rust
    /// use vector2d::Vector;
    ///
    /// let v = Vector::new(3.0, 4.0);
    /// let axis = Vector::new(10.0, 0.0);
    ///
    /// assert_eq!(v.project(&axis), Vector::new(3.0, 0.0));
    /// ```
    pub fn project(&self, onto: &Self) -> Self {
        let mut direction = *onto;
        direction.norm();
        let scale = self.dot(&direction);
        direction.mult(scale);
        direction
    }
}
