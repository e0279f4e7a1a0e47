//! # Receipt Generator
//!
//! Renders a frozen [`Transaction`] into a printable document.
//!
//! ## Determinism Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Receipt Rendering                                    │
//! │                                                                         │
//! │  render(tx) ──► Receipt                                                │
//! │                                                                         │
//! │  • Pure: reads ONLY the Transaction, never the live cart               │
//! │  • Deterministic: same Transaction in, byte-identical body out,        │
//! │    no matter how many times or how much later it is called             │
//! │  • The printed timestamp comes from Transaction.created_at,            │
//! │    never from the wall clock at render time                            │
//! │                                                                         │
//! │  This is what makes reprints safe: a sale that was recorded but       │
//! │  never printed can always be re-rendered from its Transaction.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Layout
//! 42 columns, the common thermal printer width. Amounts are
//! right-aligned; each item prints its name on one line and
//! `qty x unit_price` with the line total on the next.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::Transaction;

/// Printable width in characters.
const RECEIPT_WIDTH: usize = 42;

// =============================================================================
// Receipt
// =============================================================================

/// A rendered, immutable receipt document for exactly one Transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    /// The Transaction this document was rendered from.
    pub transaction_id: String,

    /// The full printable text.
    pub body: String,
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.body)
    }
}

// =============================================================================
// Receipt Renderer
// =============================================================================

/// Renders transactions under a fixed store header.
///
/// The header is the only configuration; everything else on the document
/// comes from the Transaction itself.
#[derive(Debug, Clone)]
pub struct ReceiptRenderer {
    store_name: String,
}

impl ReceiptRenderer {
    /// Creates a renderer with the given store header.
    pub fn new(store_name: impl Into<String>) -> Self {
        ReceiptRenderer {
            store_name: store_name.into(),
        }
    }

    /// Renders a Transaction into a Receipt.
    ///
    /// Pure and deterministic: calling this twice on the same Transaction
    /// yields byte-identical bodies.
    pub fn render(&self, tx: &Transaction) -> Receipt {
        let mut body = String::new();
        let rule = "=".repeat(RECEIPT_WIDTH);
        let thin_rule = "-".repeat(RECEIPT_WIDTH);

        body.push_str(&rule);
        body.push('\n');
        body.push_str(&center(&self.store_name));
        body.push('\n');
        body.push_str(&rule);
        body.push('\n');
        body.push_str(&format!("Receipt: {}\n", tx.receipt_number));
        body.push_str(&format!(
            "Date:    {}\n",
            tx.created_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));
        body.push_str(&thin_rule);
        body.push('\n');

        for line in &tx.lines {
            body.push_str(&line.name);
            body.push('\n');
            body.push_str(&amount_row(
                &format!("  {} x {}", line.quantity, line.unit_price),
                &line.line_total().to_string(),
            ));
        }

        body.push_str(&thin_rule);
        body.push('\n');
        body.push_str(&amount_row("Subtotal", &tx.subtotal.to_string()));

        // The discount line only appears when something was deducted, and
        // it is labeled with the original rule (kind + value), not just
        // the resulting amount.
        if tx.discount_amount.is_positive() {
            body.push_str(&amount_row(
                &format!("Discount ({})", tx.discount),
                &format!("-{}", tx.discount_amount),
            ));
        }

        body.push_str(&amount_row("TOTAL", &tx.total.to_string()));
        body.push_str(&thin_rule);
        body.push('\n');
        body.push_str(&amount_row("Cash", &tx.cash_tendered.to_string()));
        body.push_str(&amount_row("Change", &tx.change.to_string()));
        body.push_str(&rule);
        body.push('\n');
        body.push_str(&center(&format!("Items: {}", tx.total_quantity())));
        body.push('\n');

        Receipt {
            transaction_id: tx.id.clone(),
            body,
        }
    }
}

/// Centers text within the receipt width.
fn center(text: &str) -> String {
    if text.len() >= RECEIPT_WIDTH {
        return text.to_string();
    }
    let pad = (RECEIPT_WIDTH - text.len()) / 2;
    format!("{}{}", " ".repeat(pad), text)
}

/// A label on the left, an amount right-aligned to the full width.
fn amount_row(label: &str, amount: &str) -> String {
    let pad = RECEIPT_WIDTH.saturating_sub(label.len() + amount.len());
    format!("{}{}{}\n", label, " ".repeat(pad.max(1)), amount)
}

// =============================================================================
// Unit Tests
// =============================================================================
