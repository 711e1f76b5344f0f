//! # Receipt
//!
//! Renders the text receipt for a cart and its final total.
//!
//! ## Layout
//! ```text
//! Items:
//! Laptop: $1000
//! Phone: $500
//! Headphones: $200
//! Total: $1360.00
//! ```
//!
//! - Item prices use their shortest decimal form (`1000`, `19.99`, `0.5`)
//! - The total always has exactly two decimals
//! - Lines are joined with `\n`; there is no trailing newline

use serde_json::Value;
use std::fmt::Write;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::Item;

const HEADER: &str = "Items:";

/// Builds the receipt text.
///
/// ## Errors
/// `InvalidTotal` when `total` is NaN or infinite. Nothing is rendered in
/// that case.
///
/// ## Example
/// ```rust
/// use till_core::{generate_receipt, Item};
///
/// let receipt = generate_receipt(&[Item::new("Laptop", 1000.0)], 800.0).unwrap();
/// assert_eq!(receipt, "Items:\nLaptop: $1000\nTotal: $800.00");
///
/// assert_eq!(generate_receipt(&[], 0.0).unwrap(), "Items:\nTotal: $0.00");
/// ```
pub fn generate_receipt(items: &[Item], total: f64) -> CoreResult<String> {
    let total = Money::from_amount(total)?;

    let mut receipt = String::from(HEADER);
    for item in items {
        // Writing into a String cannot fail
        let _ = write!(receipt, "\n{}: ${}", item.name, format_price(item.price));
    }
    let _ = write!(receipt, "\nTotal: {total}");

    Ok(receipt)
}

/// Same as [`generate_receipt`] for a total that arrives as untyped JSON.
///
/// Anything other than a JSON number (strings, null, booleans) fails with
/// `InvalidTotal`.
pub fn generate_receipt_from_json(items: &[Item], total: &Value) -> CoreResult<String> {
    let total = total.as_f64().ok_or(CoreError::InvalidTotal)?;
    generate_receipt(items, total)
}

/// Shortest decimal form of a price, with no forced decimal places.
fn format_price(price: f64) -> String {
    if price == 0.0 {
        // Covers -0.0 as well
        "0".to_string()
    } else if price == f64::INFINITY {
        "Infinity".to_string()
    } else if price == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else {
        price.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Cart;
    use serde_json::json;

    #[test]
    fn test_sample_receipt() {
        let receipt = generate_receipt(Cart::sample().items(), 1360.0).unwrap();
        assert_eq!(
            receipt,
            "Items:\nLaptop: $1000\nPhone: $500\nHeadphones: $200\nTotal: $1360.00"
        );
    }

    #[test]
    fn test_empty_cart_receipt() {
        assert_eq!(generate_receipt(&[], 0.0).unwrap(), "Items:\nTotal: $0.00");
    }

    #[test]
    fn test_item_prices_keep_their_decimals() {
        let items = [
            Item::new("Pen", 1.5),
            Item::new("Book", 19.99),
            Item::new("Gift", 0.0),
            Item::new("Refund", -0.0),
        ];
        let receipt = generate_receipt(&items, 21.49).unwrap();
        assert_eq!(
            receipt,
            "Items:\nPen: $1.5\nBook: $19.99\nGift: $0\nRefund: $0\nTotal: $21.49"
        );
    }

    #[test]
    fn test_total_is_rounded_to_two_decimals() {
        let receipt = generate_receipt(&[], 1359.999).unwrap();
        assert!(receipt.ends_with("Total: $1360.00"));

        let receipt = generate_receipt(&[], 0.1 + 0.2).unwrap();
        assert!(receipt.ends_with("Total: $0.30"));
    }

    #[test]
    fn test_total_rounds_the_stored_value() {
        let total_line = |total: f64| {
            let receipt = generate_receipt(&[], total).unwrap();
            receipt.lines().last().unwrap().to_string()
        };

        assert_eq!(total_line(4.055), "Total: $4.05");
        assert_eq!(total_line(1.005), "Total: $1.00");
        assert_eq!(total_line(16.255), "Total: $16.25");
        assert_eq!(total_line(0.125), "Total: $0.13");
        assert_eq!(total_line(-0.125), "Total: $-0.13");
    }

    #[test]
    fn test_negative_total() {
        let receipt = generate_receipt(&[Item::new("Voucher", -5.0)], -5.0).unwrap();
        assert_eq!(receipt, "Items:\nVoucher: $-5\nTotal: $-5.00");
    }

    #[test]
    fn test_large_totals() {
        assert_eq!(
            generate_receipt(&[], 1e17).unwrap(),
            "Items:\nTotal: $100000000000000000.00"
        );
        assert_eq!(
            generate_receipt(&[], 1e20).unwrap(),
            "Items:\nTotal: $100000000000000000000.00"
        );
    }

    #[test]
    fn test_no_trailing_newline() {
        let receipt = generate_receipt(Cart::sample().items(), 1700.0).unwrap();
        assert!(!receipt.ends_with('\n'));
        assert_eq!(receipt.lines().count(), 5);
    }

    #[test]
    fn test_invalid_totals_fail() {
        let items = Cart::sample();
        assert_eq!(
            generate_receipt(items.items(), f64::NAN),
            Err(CoreError::InvalidTotal)
        );
        assert_eq!(
            generate_receipt(items.items(), f64::INFINITY),
            Err(CoreError::InvalidTotal)
        );
        assert_eq!(
            generate_receipt_from_json(items.items(), &json!("abc")),
            Err(CoreError::InvalidTotal)
        );
        assert_eq!(
            generate_receipt_from_json(items.items(), &json!(null)),
            Err(CoreError::InvalidTotal)
        );
    }

    #[test]
    fn test_json_total() {
        assert_eq!(
            generate_receipt_from_json(&[], &json!(12)).unwrap(),
            "Items:\nTotal: $12.00"
        );
    }

    #[test]
    fn test_receipt_is_idempotent_and_leaves_items_alone() {
        let cart = Cart::sample();
        let first = generate_receipt(cart.items(), 1360.0);
        let second = generate_receipt(cart.items(), 1360.0);
        assert_eq!(first, second);
        assert_eq!(cart, Cart::sample());
    }
}
