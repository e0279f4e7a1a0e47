//! # Domain Types
//!
//! Core domain types for the Atlas POS checkout core.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │   Transaction   │   │    Discount     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  (discount.rs)  │       │
//! │  │  id             │   │  id (UUID)      │   │  None           │       │
//! │  │  name           │   │  receipt_number │   │  Percentage{bps}│       │
//! │  │  unit_price     │   │  lines (frozen) │   │  Fixed{amount}  │       │
//! │  │  category       │   │  totals, change │   └─────────────────┘       │
//! │  └─────────────────┘   └─────────────────┘                             │
//! │                                                                         │
//! │  Product is read-only catalog data; Transaction is the immutable       │
//! │  record of a completed sale. The mutable Cart lives in cart.rs.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::CartLine;
use crate::discount::Discount;
use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A product as served by the external catalog.
///
/// The catalog is a read-only collaborator: this core never mutates a
/// Product and never holds one past the moment of adding it to the cart
/// (the cart snapshots the fields it needs instead).
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier.
    pub id: String,

    /// Display name shown to the cashier and on the receipt.
    pub name: String,

    /// Current catalog price in cents.
    pub unit_price_cents: i64,

    /// Catalog category ("Hardware", "Plumbing", ...). Display only.
    pub category: String,
}

impl Product {
    /// Returns the price as a Money type.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }
}

// =============================================================================
// Transaction
// =============================================================================

/// The immutable record of a completed sale.
///
/// ## Lifecycle
/// ```text
/// AwaitingConfirmation ──confirm()──► Finalized
///                                        │
///                                        ▼
///                          TransactionRecorder::finalize()
///                          creates the ONE Transaction for this sale
/// ```
///
/// A Transaction is created exactly once, when a checkout is confirmed,
/// and is never mutated afterward. It holds frozen copies of the cart
/// lines, so reusing the cart for the next customer cannot change an
/// already-recorded sale or its receipt.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Human-readable receipt number (date + per-terminal sequence).
    pub receipt_number: String,

    /// Frozen cart lines at the moment of confirmation.
    pub lines: Vec<CartLine>,

    /// Sum of line totals before discount.
    pub subtotal: Money,

    /// The discount rule that was applied (kind and value, for the
    /// receipt label), not just the resulting amount.
    pub discount: Discount,

    /// Amount actually deducted after clamping.
    pub discount_amount: Money,

    /// Amount due: subtotal minus discount, floored at zero.
    pub total: Money,

    /// Cash the customer handed over.
    pub cash_tendered: Money,

    /// Cash returned: `cash_tendered - total`, non-negative by the
    /// checkout guard.
    pub change: Money,

    /// When the sale was confirmed (from the injected clock).
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// Total quantity across all lines (for the receipt footer).
    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
