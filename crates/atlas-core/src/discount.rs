//! # Discount Calculator
//!
//! Pure mapping from (subtotal, discount rule) to (discount amount, net
//! total).
//!
//! ## Clamping Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Discount Clamping                                    │
//! │                                                                         │
//! │  Percentage  rate is clamped into [0%, 100%]                           │
//! │              150% behaves as 100%, -5% behaves as 0%                   │
//! │                                                                         │
//! │  Fixed       amount is capped at the subtotal                          │
//! │              $500 off a $100 sale deducts exactly $100                 │
//! │                                                                         │
//! │  Either way  total = subtotal - discount_amount, floored at 0          │
//! │              A discount can never produce a negative total            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Out-of-range values are clamped rather than rejected: the cashier sees
//! "cannot exceed subtotal" behavior instead of an error dialog.
//!
//! [`Discount::apply`] is total (it never fails) and holds no state; the
//! terminal re-applies it on every cart or discount change so displayed
//! totals are always live.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::Money;

/// Basis points in 100%.
const FULL_RATE_BPS: u32 = 10_000;

// =============================================================================
// Discount
// =============================================================================

/// The cashier-chosen discount rule for the open cart.
///
/// Stored as a tagged enum so a Transaction can label its receipt with
/// the original kind and value, not just the resulting amount. Reset to
/// `None` whenever the cart is cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Discount {
    /// No discount.
    #[default]
    None,

    /// Percentage of the subtotal, in basis points (1000 = 10%).
    /// Applied clamped to [0, 10000].
    Percentage { bps: u32 },

    /// Flat amount off, capped at the subtotal.
    Fixed { amount: Money },
}

/// Result of applying a discount to a subtotal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DiscountOutcome {
    /// Amount deducted after clamping. Never negative, never more than
    /// the subtotal.
    pub discount_amount: Money,

    /// `subtotal - discount_amount`, floored at zero.
    pub total: Money,
}

impl Discount {
    /// Applies this discount to a subtotal.
    ///
    /// Total function: every input produces an outcome, no error path.
    ///
    /// ## Example
    /// ```rust
    /// use atlas_core::discount::Discount;
    /// use atlas_core::money::Money;
    ///
    /// let subtotal = Money::from_cents(49_000); // $490.00
    /// let outcome = Discount::Percentage { bps: 1000 }.apply(subtotal);
    /// assert_eq!(outcome.discount_amount, Money::from_cents(4_900));
    /// assert_eq!(outcome.total, Money::from_cents(44_100));
    /// ```
    pub fn apply(&self, subtotal: Money) -> DiscountOutcome {
        let discount_amount = match *self {
            Discount::None => Money::zero(),
            Discount::Percentage { bps } => {
                let clamped = bps.min(FULL_RATE_BPS);
                subtotal.percentage_bps(clamped)
            }
            Discount::Fixed { amount } => {
                if amount.is_positive() {
                    amount.min(subtotal)
                } else {
                    // A zero or negative fixed value means no discount.
                    Money::zero()
                }
            }
        };

        DiscountOutcome {
            discount_amount,
            total: subtotal.saturating_sub(discount_amount),
        }
    }

    /// Checks whether this rule can deduct anything at all.
    pub fn is_none(&self) -> bool {
        match *self {
            Discount::None => true,
            Discount::Percentage { bps } => bps == 0,
            Discount::Fixed { amount } => !amount.is_positive(),
        }
    }
}

/// Receipt label carrying the original kind and value.
///
/// `Percentage { bps: 825 }` displays as "8.25% off";
/// `Fixed { amount: $5.00 }` displays as "$5.00 off".
impl fmt::Display for Discount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Discount::None => write!(f, "none"),
            Discount::Percentage { bps } => {
                if bps % 100 == 0 {
                    write!(f, "{}% off", bps / 100)
                } else {
                    write!(f, "{}.{:02}% off", bps / 100, bps % 100)
                }
            }
            Discount::Fixed { amount } => write!(f, "{} off", amount),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
