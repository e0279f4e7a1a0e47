//! # Cart Module
//!
//! The mutable, in-progress collection of line items before a sale is
//! committed.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  UI Action               Cart Method             Effect                 │
//! │  ─────────               ───────────             ──────                 │
//! │                                                                         │
//! │  Click Product ────────► add_line() ───────────► new line OR qty += n  │
//! │                                                                         │
//! │  Change Quantity ──────► set_quantity() ───────► qty = n (0 removes)   │
//! │                                                                         │
//! │  Click Remove ─────────► remove_line() ────────► line dropped          │
//! │                                                                         │
//! │  New Customer ─────────► clear() ──────────────► all lines dropped     │
//! │                                                                         │
//! │  (every change) ───────► subtotal() ───────────► recomputed, never     │
//! │                                                   cached                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Lines are unique by `product_id` (adding the same product increments)
//! - Every line has quantity >= 1; a quantity reduced to 0 removes the line
//! - Insertion order is display order
//! - `subtotal()` is derived from the lines on every call

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CartError, CartResult};
use crate::money::Money;
use crate::types::Product;
use crate::{MAX_CART_LINES, MAX_LINE_QUANTITY};

// =============================================================================
// Cart Line
// =============================================================================

/// One product entry in a cart.
///
/// ## Price Freezing
/// `name` and `unit_price` are copied from the Product at the moment of
/// first add. A catalog price change after that point does not
/// retroactively alter an open cart, and a confirmed Transaction keeps
/// these frozen values forever.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Product ID (uniqueness key within the cart).
    pub product_id: String,

    /// Product name at time of adding (frozen).
    pub name: String,

    /// Unit price at time of adding (frozen).
    pub unit_price: Money,

    /// Quantity in cart. Always >= 1 while the line exists.
    pub quantity: i64,
}

impl CartLine {
    /// Creates a cart line from a product, freezing name and price.
    pub fn from_product(product: &Product, quantity: i64) -> Self {
        CartLine {
            product_id: product.id.clone(),
            name: product.name.clone(),
            unit_price: product.unit_price(),
            quantity,
        }
    }

    /// Line total: unit price × quantity.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The in-progress sale: an insertion-ordered collection of lines, unique
/// by product id.
///
/// A `Vec` keyed by `product_id` gives both guarantees at cart scale
/// (tens of lines): uniqueness is enforced by every mutation path, and
/// the Vec itself preserves display order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { lines: Vec::new() }
    }

    /// Adds a product to the cart or increments its quantity if already
    /// present.
    ///
    /// ## Behavior
    /// - quantity <= 0: rejected with `InvalidQuantity`, cart unchanged
    /// - product already in cart: quantity increases (price stays frozen
    ///   at whatever it was when first added)
    /// - product not in cart: appended as a new line with frozen
    ///   name/price snapshots
    pub fn add_line(&mut self, product: &Product, quantity: i64) -> CartResult<()> {
        if quantity <= 0 {
            return Err(CartError::InvalidQuantity { quantity });
        }

        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|l| l.product_id == product.id)
        {
            let new_qty = line.quantity + quantity;
            if new_qty > MAX_LINE_QUANTITY {
                return Err(CartError::QuantityTooLarge {
                    requested: new_qty,
                    max: MAX_LINE_QUANTITY,
                });
            }
            line.quantity = new_qty;
            return Ok(());
        }

        if self.lines.len() >= MAX_CART_LINES {
            return Err(CartError::CartFull {
                max: MAX_CART_LINES,
            });
        }
        if quantity > MAX_LINE_QUANTITY {
            return Err(CartError::QuantityTooLarge {
                requested: quantity,
                max: MAX_LINE_QUANTITY,
            });
        }

        self.lines.push(CartLine::from_product(product, quantity));
        Ok(())
    }

    /// Sets the quantity of an existing line.
    ///
    /// ## Behavior
    /// - quantity <= 0: removes the line (a zero-quantity line is never
    ///   stored)
    /// - quantity > 0: replaces the line's quantity
    /// - product not in cart: `LineNotFound`, cart unchanged
    pub fn set_quantity(&mut self, product_id: &str, quantity: i64) -> CartResult<()> {
        let Some(index) = self.lines.iter().position(|l| l.product_id == product_id) else {
            return Err(CartError::LineNotFound {
                product_id: product_id.to_string(),
            });
        };

        if quantity <= 0 {
            self.lines.remove(index);
            return Ok(());
        }

        if quantity > MAX_LINE_QUANTITY {
            return Err(CartError::QuantityTooLarge {
                requested: quantity,
                max: MAX_LINE_QUANTITY,
            });
        }

        self.lines[index].quantity = quantity;
        Ok(())
    }

    /// Removes a line by product id. A no-op (not an error) when absent.
    pub fn remove_line(&mut self, product_id: &str) {
        self.lines.retain(|l| l.product_id != product_id);
    }

    /// Empties all lines.
    ///
    /// The terminal session clears the discount and cash-tendered input
    /// alongside this; an empty cart makes both meaningless.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// The lines in display (insertion) order.
    #[inline]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Number of distinct lines.
    #[inline]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Total quantity across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Subtotal: Σ unit_price × quantity over all lines.
    ///
    /// Recomputed on every call so it can never drift from the line
    /// contents.
    pub fn subtotal(&self) -> Money {
        self.lines
            .iter()
            .fold(Money::zero(), |acc, l| acc + l.line_total())
    }

    /// Checks if the cart has no lines.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
