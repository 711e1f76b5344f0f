//! # Cart Total
//!
//! Reduces a sequence of items to the sum of their prices.
//!
//! ```text
//! [Laptop 1000, Phone 500, Headphones 200]
//!      │
//!      ▼
//! calculate_total ← THIS MODULE
//!      │
//!      ▼
//! 1700 ──► apply_discount ──► generate_receipt
//! ```

use crate::types::Item;

/// Sums the `price` of every item.
///
/// Iterates the slice directly, so exactly `items.len()` additions happen and
/// no index past the end is ever touched. An empty slice totals to `0.0`
/// (positive zero, so it renders as `$0.00`).
///
/// Prices are not checked: negative prices reduce the sum, and a NaN price
/// makes the whole total NaN, which the receipt step then rejects.
///
/// ## Example
/// ```rust
/// use till_core::{calculate_total, Cart};
///
/// assert_eq!(calculate_total(Cart::sample().items()), 1700.0);
/// assert_eq!(calculate_total(&[]), 0.0);
/// ```
pub fn calculate_total(items: &[Item]) -> f64 {
    items.iter().fold(0.0, |total, item| total + item.price)
}
