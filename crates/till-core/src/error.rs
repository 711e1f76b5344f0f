//! # Error Types
//!
//! Domain-specific error types for till-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  till-core errors (this file)                                          │
//! │  ├── CoreError        - Pipeline failures (rate, total, item lookup)   │
//! │  └── ValidationError  - Item / cart input validation failures          │
//! │                                                                         │
//! │  till-cli errors (app crate)                                           │
//! │  ├── ConfigError      - Bad environment values                         │
//! │  └── CliError         - Cart file loading                              │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → OutputPort::report_error          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Errors are enum variants, never String
//! 3. The `Display` text of each variant is the message shown to the operator

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Errors that abort the checkout pipeline.
///
/// None of these are retried: every failure is a deterministic function of
/// the input, so the caller reports the message and stops the run.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    /// Discount rate is not a number, is NaN, or lies outside `[0, 1]`.
    ///
    /// ## When This Occurs
    /// ```text
    /// apply_discount(1700, 0.2)   → Ok(1360)
    /// apply_discount(1700, -1)    → InvalidDiscountRate
    /// apply_discount(1700, 2)     → InvalidDiscountRate
    /// "abc".parse::<DiscountRate>() → InvalidDiscountRate
    /// ```
    #[error("Invalid discount rate. Must be a number between 0 and 1.")]
    InvalidDiscountRate,

    /// Total handed to the receipt formatter is not a usable number.
    #[error("Invalid total amount")]
    InvalidTotal,

    /// Positional lookup past the end of the cart.
    #[error("No item at index {index} (cart has {len} items)")]
    ItemOutOfRange { index: usize, len: usize },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors for items and carts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be zero or greater.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },

    /// Value is NaN or infinite.
    #[error("{field} must be a finite number")]
    NotFinite { field: String },

    /// Collection holds more entries than allowed.
    #[error("{field} cannot have more than {max} entries")]
    TooMany { field: String, max: usize },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
