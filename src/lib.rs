//! # vector2d — Chainable 2D Euclidean Vectors for Rust
//!
//! A small, fluent 2D vector type for simulations, games, and graphics
//! positioning, with value semantics, in-place chainable transforms, and
//! aggregate folds over sequences.
//!
//! ## What is a chainable vector?
//!
//! Every mutating method updates the vector in place and returns `&mut Self`,
//! so a pipeline of transforms reads as one expression. Queries never mutate,
//! and the standard operators (`+`, `-`, `*`, `/`, unary `-`) are wired up
//! for expression-style math on copies.
//!
//! ## Quick Start
//!
//! ### Typical Use
//!
//! ```rust
//! use vector2d::prelude::*;
//!
//! // A position: normalize, scale out to radius 10, nudge right.
//! let mut position = Vector::new(3.0, 4.0);
//! position.norm().mult(10.0).right(2.0);
//!
//! assert_eq!(position, Vector::new(8.0, 8.0));
//! println!("{}", position);
//! ```
//!
//! ```text
//! (8, 8)
//! ```
//!
//! ### Aggregates and Error Handling
//!
//! Folding an empty slice has no meaningful result, so the aggregate
//! functions return `Result<Vector<T>, VectorError>`.
//!
//! The `?` operator is idiomatic:
//!
//! ```rust
//! use vector2d::prelude::*;
//!
//! let waypoints = [
//!     Vector::new(0.0, 0.0),
//!     Vector::new(4.0, 0.0),
//!     Vector::new(4.0, 8.0),
//! ];
//!
//! let total = Vector::sum(&waypoints)?;
//! let center = Vector::average(&waypoints)?;
//!
//! assert_eq!(total, Vector::new(8.0, 8.0));
//! assert_eq!(center, Vector::new(8.0 / 3.0, 8.0 / 3.0));
//! # Result::<(), VectorError>::Ok(())
//! ```
//!
//! But you can also handle results explicitly:
//!
//! ```rust
//! use vector2d::prelude::*;
//!
//! let readings: Vec<Vector> = Vec::new();
//!
//! match Vector::average(&readings) {
//!     Ok(mean) => println!("mean reading: {}", mean),
//!     Err(e) => eprintln!("no readings: {}", e),
//! }
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments; the trigonometry falls back to
//! `libm` when the standard library is disabled:
//!
//! ```toml
//! [dependencies]
//! vector2d = { version = "0.1", default-features = false }
//! ```
//!
//! **Tips for embedded/no_std usage:**
//! - Use `Vector<f32>` instead of the default `Vector<f64>` to reduce
//!   memory footprint
//! - `Vector::random()` needs the thread-local RNG, so the `rand` feature
//!   (and with it `std`) stays off in embedded builds
//!
//! ## License
//!
//! See the repository for license information and contribution guidelines.

#![cfg_attr(not(feature = "std"), no_std)]

// Typed failures for the aggregate folds.
mod errors;

// The vector type: factories, derived attributes, mutators, and queries.
mod vector;

// Operator traits, conversions, and formatting.
mod ops;

// Folds over slices of vectors.
mod aggregate;

pub use crate::errors::VectorError;
pub use crate::vector::Vector;

// Standard vector prelude.
pub mod prelude {
    pub use crate::errors::VectorError;
    pub use crate::vector::Vector;
}
