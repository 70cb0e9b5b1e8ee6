//! Error types for vector operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur when working
//! with vectors. Only the aggregate operations over sequences can fail;
//! everything else on [`Vector`](crate::Vector) is total.
//!
//! ## Design notes
//!
//! * **Minimal**: One variant, because the API has exactly one failure mode.
//! * **No-std**: Uses only `core`; the `Error` trait impl is gated on `std`.
//! * **Degenerate numerics are not errors**: zero-magnitude normalization,
//!   division by zero, and undefined angles produce non-finite values by
//!   design and never surface here.
//!
//! ## Invariants
//!
//! * Every variant carries enough context to diagnose the failure from the
//!   message alone.
//!
//! ## Non-goals
//!
//! * This module does not detect the failure; the aggregate folds do.
//! * This module does not provide recovery or fallback strategies.

// External dependencies
use core::fmt::{Display, Formatter, Result};

#[cfg(feature = "std")]
use std::error::Error;

// ============================================================================
// Error Type
// ============================================================================

/// Error type for aggregate vector operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VectorError {
    /// The input slice is empty; aggregate folds need a first element to
    /// seed the accumulator.
    EmptyInput,
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for VectorError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => write!(f, "Input slice is empty (at least one vector is required)"),
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for VectorError {}
