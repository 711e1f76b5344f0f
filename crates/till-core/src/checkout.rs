//! # Checkout Pipeline
//!
//! Chains total → discount → receipt and hands the result to an [`OutputPort`].
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Checkout Pipeline                               │
//! │                                                                         │
//! │  items ──► calculate_total ──► apply_discount ──► generate_receipt     │
//! │                                     │                    │              │
//! │                           InvalidDiscountRate       InvalidTotal        │
//! │                                     │                    │              │
//! │                                     └────────┬───────────┘              │
//! │                                              ▼                          │
//! │                              OutputPort::report_error(message)          │
//! │                                                                         │
//! │  success ─────────────────► OutputPort::display(total, receipt)         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The first failing step ends the run. Nothing reaches `display` after an
//! error.

use serde::Serialize;

use crate::discount::discounted_total;
use crate::error::CoreResult;
use crate::money::Money;
use crate::receipt::generate_receipt;
use crate::total::calculate_total;
use crate::types::{DiscountRate, Item};

// =============================================================================
// Output Port
// =============================================================================

/// Where checkout results go.
///
/// Implemented by the presentation layer (console, GUI, test recorder).
/// The pipeline never prints or logs on its own.
pub trait OutputPort {
    /// Shows the discounted total and the receipt text.
    fn display(&mut self, total: Money, receipt: &str);

    /// Reports a failed run.
    fn report_error(&mut self, message: &str);
}

// =============================================================================
// Checkout Result
// =============================================================================

/// Everything one successful checkout produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Checkout {
    /// Sum of item prices before the discount.
    pub total: f64,

    /// Validated rate that was applied.
    pub rate: DiscountRate,

    /// Total after the discount.
    pub discounted_total: f64,

    /// Receipt text.
    pub receipt: String,
}

impl Checkout {
    /// Discounted total, checked for display.
    pub fn display_total(&self) -> CoreResult<Money> {
        Money::from_amount(self.discounted_total)
    }
}

// =============================================================================
// Pipeline
// =============================================================================

/// Runs total → discount → receipt.
///
/// ## Errors
/// - `InvalidDiscountRate` when `rate` is NaN or outside `[0, 1]`; the receipt
///   is never built in that case
/// - `InvalidTotal` when the discounted total is not a finite number
///
/// ## Example
/// ```rust
/// use till_core::{checkout, Cart};
///
/// let result = checkout(Cart::sample().items(), 0.2).unwrap();
/// assert_eq!(result.total, 1700.0);
/// assert_eq!(result.discounted_total, 1360.0);
/// assert!(result.receipt.ends_with("Total: $1360.00"));
/// ```
pub fn checkout(items: &[Item], rate: f64) -> CoreResult<Checkout> {
    let total = calculate_total(items);
    let rate = DiscountRate::new(rate)?;
    let discounted = discounted_total(total, rate);
    let receipt = generate_receipt(items, discounted)?;

    Ok(Checkout {
        total,
        rate,
        discounted_total: discounted,
        receipt,
    })
}

/// Runs [`checkout`] and reports the outcome through `port`.
///
/// Exactly one port method is called per run. The result is also returned so
/// callers can decide on an exit status.
///
/// Rates given as text or JSON are parsed into a [`DiscountRate`] by the
/// caller; pass `rate.value()` here.
pub fn run_checkout<P>(items: &[Item], rate: f64, port: &mut P) -> CoreResult<Checkout>
where
    P: OutputPort + ?Sized,
{
    let outcome = checkout(items, rate).and_then(|result| {
        let total = result.display_total()?;
        Ok((total, result))
    });

    match outcome {
        Ok((total, result)) => {
            port.display(total, &result.receipt);
            Ok(result)
        }
        Err(err) => {
            port.report_error(&err.to_string());
            Err(err)
        }
    }
}
