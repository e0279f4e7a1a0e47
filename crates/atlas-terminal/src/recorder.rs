//! # Transaction Recorder
//!
//! The only component allowed to construct a [`Transaction`].
//!
//! ## Finalize Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    TransactionRecorder::finalize                        │
//! │                                                                         │
//! │  cart + discount + cash_tendered                                        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  discount.apply(subtotal) ──► discount_amount, total                   │
//! │  change = cash_tendered - total   (>= 0 by the checkout guard)         │
//! │  id = UUID v4, receipt_number = yymmdd-HHMMSS-seq, created_at = clock  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  store.record(&tx) ── Err? ──► warn! and carry on (no retry)           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Transaction (owned by the caller, never mutated again)                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The per-terminal sequence is bumped inside `finalize`, before the next
//! `Open` cart can exist, so one terminal can never mint two transactions
//! with the same receipt number.

use tracing::{info, warn};
use uuid::Uuid;

use atlas_core::{Cart, Discount, Money, Transaction};

use crate::clock::Clock;
use crate::gateway::TransactionStore;

// =============================================================================
// Transaction Recorder
// =============================================================================

/// Snapshots a cart into an immutable Transaction and hands it to the
/// persistence collaborator.
#[derive(Debug)]
pub struct TransactionRecorder<S: TransactionStore> {
    store: S,
    /// Monotonic per-terminal sequence folded into the receipt number.
    sequence: u64,
}

impl<S: TransactionStore> TransactionRecorder<S> {
    /// Creates a recorder writing to the given store.
    pub fn new(store: S) -> Self {
        TransactionRecorder { store, sequence: 0 }
    }

    /// Freezes the cart + discount + cash into a new Transaction.
    ///
    /// The caller (the checkout state machine) guarantees the guards
    /// already held: non-empty cart, positive total, sufficient cash.
    /// Persistence is fire-and-forget: an `Err` from the store is logged
    /// and the sale proceeds; the collaborator owns its own durability.
    pub fn finalize(
        &mut self,
        cart: &Cart,
        discount: Discount,
        cash_tendered: Money,
        clock: &impl Clock,
    ) -> Transaction {
        let subtotal = cart.subtotal();
        let outcome = discount.apply(subtotal);
        let change = cash_tendered - outcome.total;
        let created_at = clock.now();

        self.sequence += 1;
        let receipt_number = format!(
            "{}-{:04}",
            created_at.format("%y%m%d-%H%M%S"),
            self.sequence
        );

        let transaction = Transaction {
            id: Uuid::new_v4().to_string(),
            receipt_number,
            lines: cart.lines().to_vec(),
            subtotal,
            discount,
            discount_amount: outcome.discount_amount,
            total: outcome.total,
            cash_tendered,
            change,
            created_at,
        };

        if let Err(err) = self.store.record(&transaction) {
            // Non-blocking: the sale is committed in this core either way.
            warn!(
                transaction_id = %transaction.id,
                error = %err,
                "persistence collaborator rejected transaction"
            );
        }

        info!(
            transaction_id = %transaction.id,
            receipt_number = %transaction.receipt_number,
            total = %transaction.total,
            change = %transaction.change,
            lines = transaction.lines.len(),
            "Transaction finalized"
        );

        transaction
    }

    /// Number of transactions finalized by this terminal so far.
    pub fn sequence(&self) -> u64 {
        self.sequence
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
