//! # Validation Module
//!
//! Stricter checks for item data coming from outside the program.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Deserialization (serde)                                      │
//! │  ├── Missing fields, non-numeric prices                                │
//! │  └── Rejected before an Item exists                                    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE (called by the CLI for loaded carts)             │
//! │  ├── Empty names, negative or non-finite prices                        │
//! │  └── Oversized carts                                                    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Checkout pipeline                                             │
//! │  ├── Discount rate range                                                │
//! │  └── Finite total before the receipt is rendered                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The pipeline itself does not call these: it accepts negative prices so
//! that callers can model vouchers or refunds.
//!
//! ## Usage
//! ```rust
//! use till_core::validation::{validate_cart, validate_price};
//! use till_core::Cart;
//!
//! assert!(validate_cart(&Cart::sample()).is_ok());
//! assert!(validate_price(-1.0).is_err());
//! ```

use crate::error::ValidationError;
use crate::types::{Cart, Item};
use crate::{MAX_CART_ITEMS, MAX_ITEM_NAME_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates an item name.
///
/// ## Rules
/// - Must not be empty or whitespace only
/// - At most `MAX_ITEM_NAME_LEN` characters
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_ITEM_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_ITEM_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a price.
///
/// ## Rules
/// - Must be finite (no NaN, no infinity)
/// - Must be non-negative; zero is allowed (free items)
pub fn validate_price(price: f64) -> ValidationResult<()> {
    if !price.is_finite() {
        return Err(ValidationError::NotFinite {
            field: "price".to_string(),
        });
    }

    if price < 0.0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Validates a single item.
pub fn validate_item(item: &Item) -> ValidationResult<()> {
    validate_item_name(&item.name)?;
    validate_price(item.price)
}

/// Validates a whole cart.
///
/// ## Rules
/// - At most `MAX_CART_ITEMS` items
/// - Every item passes [`validate_item`]; the first failure is returned
pub fn validate_cart(cart: &Cart) -> ValidationResult<()> {
    if cart.len() > MAX_CART_ITEMS {
        return Err(ValidationError::TooMany {
            field: "cart".to_string(),
            max: MAX_CART_ITEMS,
        });
    }

    cart.items().iter().try_for_each(validate_item)
}

// =============================================================================
// Unit Tests
// =============================================================================
