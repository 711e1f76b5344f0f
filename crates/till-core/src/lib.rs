//! # till-core: Pure Cart Calculations for Till
//!
//! Sums a cart, applies a bounded discount, and renders a text receipt.
//! Every function here is pure: no I/O, no logging, no retained state.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Till Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    till-cli (presentation)                      │   │
//! │  │     config ──► cart loading ──► ConsoleOutput (OutputPort)      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ run_checkout                           │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ till-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   total   │─►│ discount  │─►│  receipt  │─►│ checkout  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOGGING • PURE FUNCTIONS                         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Item, Cart, DiscountRate
//! - [`total`] - Cart total
//! - [`discount`] - Rate validation and discount math
//! - [`receipt`] - Receipt rendering
//! - [`checkout`] - The full pipeline and the `OutputPort` trait
//! - [`money`] - Two-decimal display of totals
//! - [`validation`] - Optional stricter checks on item data
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use till_core::{checkout, Cart};
//!
//! let result = checkout(Cart::sample().items(), 0.2).unwrap();
//! assert_eq!(
//!     result.receipt,
//!     "Items:\nLaptop: $1000\nPhone: $500\nHeadphones: $200\nTotal: $1360.00"
//! );
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod checkout;
pub mod discount;
pub mod error;
pub mod money;
pub mod receipt;
pub mod total;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use checkout::{checkout, run_checkout, Checkout, OutputPort};
pub use discount::{apply_discount, discounted_total};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use receipt::{generate_receipt, generate_receipt_from_json};
pub use total::calculate_total;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum items accepted by [`validation::validate_cart`].
pub const MAX_CART_ITEMS: usize = 100;

/// Maximum item name length, in characters.
pub const MAX_ITEM_NAME_LEN: usize = 200;
