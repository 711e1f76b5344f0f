//! # Discount
//!
//! Applies a fractional discount to a cart total.
//!
//! ## User Workflow
//! ```text
//! Cart Total: 1700
//!      │
//!      ▼
//! apply_discount(1700, 0.2) ← THIS MODULE
//!      │
//!      ├── rate NaN?           → InvalidDiscountRate
//!      ├── rate < 0 or > 1?    → InvalidDiscountRate
//!      │
//!      └── OK → 1700 - 1700 × 0.2 = 1360
//! ```
//!
//! Rates that arrive as text or JSON are turned into a [`DiscountRate`] first
//! (`str::parse`, [`DiscountRate::from_json`]); anything that is not a number
//! fails there with the same `InvalidDiscountRate`.

use crate::error::CoreResult;
use crate::types::DiscountRate;

/// Validates `rate` and returns `total - total * rate`.
///
/// The rate is checked before anything is computed. `total` itself is not
/// validated; a NaN total passes through and is caught by the receipt step.
///
/// ## Example
/// ```rust
/// use till_core::{apply_discount, CoreError};
///
/// assert_eq!(apply_discount(1700.0, 0.2), Ok(1360.0));
/// assert_eq!(apply_discount(1700.0, 2.0), Err(CoreError::InvalidDiscountRate));
/// ```
pub fn apply_discount(total: f64, rate: f64) -> CoreResult<f64> {
    let rate = DiscountRate::new(rate)?;
    Ok(discounted_total(total, rate))
}

/// Applies an already validated rate.
///
/// This is the typed entry point: a [`DiscountRate`] can only hold a value in
/// `[0, 1]`, so nothing is left to check.
///
/// For `total >= 0` the result lies in `[0, total]`: rate 0 keeps the total,
/// rate 1 makes it zero.
pub fn discounted_total(total: f64, rate: DiscountRate) -> f64 {
    total - total * rate.value()
}
