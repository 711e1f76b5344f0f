//! # Domain Types
//!
//! Core domain types used throughout Till.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │      Item       │   │      Cart       │   │  DiscountRate   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  name           │◄──│  items (ordered)│   │  f64 in [0, 1]  │       │
//! │  │  price (f64)    │   │                 │   │  0.2 = 20% off  │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Items and carts are plain input data: the pipeline reads them and never
//! mutates them. A `DiscountRate` only exists once its range has been checked.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::error::{CoreError, CoreResult};

// =============================================================================
// Item
// =============================================================================

/// A priced line item.
///
/// The price is taken as-is: negative prices are tolerated by the pipeline
/// and only rejected by [`crate::validation::validate_item`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Display name shown on the receipt.
    pub name: String,

    /// Unit price in major currency units (e.g. dollars).
    pub price: f64,
}

impl Item {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Item {
            name: name.into(),
            price,
        }
    }
}

// =============================================================================
// Cart
// =============================================================================

/// An ordered collection of items.
///
/// Order does not change the total but decides the line order on the receipt.
/// Serializes as a bare JSON array of items.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<Item>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// The demo cart: Laptop $1000, Phone $500, Headphones $200.
    pub fn sample() -> Self {
        Cart::from(vec![
            Item::new("Laptop", 1000.0),
            Item::new("Phone", 500.0),
            Item::new("Headphones", 200.0),
        ])
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the item at `index`.
    ///
    /// ## Errors
    /// `ItemOutOfRange` for any index `>= len()`. A missing item is never
    /// treated as a zero-priced one.
    ///
    /// ## Example
    /// ```rust
    /// use till_core::{Cart, CoreError};
    ///
    /// let cart = Cart::sample();
    /// assert_eq!(cart.get(2).unwrap().name, "Headphones");
    /// assert_eq!(
    ///     cart.get(3).unwrap_err(),
    ///     CoreError::ItemOutOfRange { index: 3, len: 3 }
    /// );
    /// ```
    pub fn get(&self, index: usize) -> CoreResult<&Item> {
        self.items.get(index).ok_or(CoreError::ItemOutOfRange {
            index,
            len: self.items.len(),
        })
    }

    /// Sum of all item prices. See [`crate::total::calculate_total`].
    pub fn total(&self) -> f64 {
        crate::total::calculate_total(&self.items)
    }
}

impl From<Vec<Item>> for Cart {
    fn from(items: Vec<Item>) -> Self {
        Cart { items }
    }
}

impl FromIterator<Item> for Cart {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        Cart {
            items: iter.into_iter().collect(),
        }
    }
}

// =============================================================================
// Discount Rate
// =============================================================================

/// A discount expressed as a fraction of the total, checked to lie in `[0, 1]`.
///
/// ## Accepted Inputs
/// ```text
/// DiscountRate::new(0.2)                 → Ok   (20% off)
/// DiscountRate::new(1.0)                 → Ok   (free)
/// DiscountRate::new(-1.0) / new(2.0)     → InvalidDiscountRate
/// DiscountRate::new(f64::NAN)            → InvalidDiscountRate
/// "0.2".parse::<DiscountRate>()          → Ok
/// "abc".parse::<DiscountRate>()          → InvalidDiscountRate
/// DiscountRate::from_json(&json!("abc")) → InvalidDiscountRate
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct DiscountRate(f64);

impl DiscountRate {
    /// No discount.
    pub const NONE: DiscountRate = DiscountRate(0.0);

    /// Validates and wraps a rate.
    pub fn new(rate: f64) -> CoreResult<Self> {
        // NaN fails both comparisons, so it is rejected here too
        if (0.0..=1.0).contains(&rate) {
            Ok(DiscountRate(rate))
        } else {
            Err(CoreError::InvalidDiscountRate)
        }
    }

    /// Validates an untyped JSON value. Anything but a JSON number fails.
    pub fn from_json(value: &Value) -> CoreResult<Self> {
        value
            .as_f64()
            .ok_or(CoreError::InvalidDiscountRate)
            .and_then(DiscountRate::new)
    }

    /// The rate as a fraction.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.0
    }
}

impl Default for DiscountRate {
    fn default() -> Self {
        DiscountRate::NONE
    }
}

impl TryFrom<f64> for DiscountRate {
    type Error = CoreError;

    fn try_from(rate: f64) -> CoreResult<Self> {
        DiscountRate::new(rate)
    }
}

impl FromStr for DiscountRate {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        let rate: f64 = s
            .trim()
            .parse()
            .map_err(|_| CoreError::InvalidDiscountRate)?;
        DiscountRate::new(rate)
    }
}

impl<'de> Deserialize<'de> for DiscountRate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let rate = f64::deserialize(deserializer)?;
        DiscountRate::new(rate).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for DiscountRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0 * 100.0)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
