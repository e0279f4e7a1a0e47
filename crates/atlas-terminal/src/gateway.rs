//! # Collaborator Seams
//!
//! Traits for everything the checkout core talks to but does not own.
//!
//! ## Contract Summary
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    External Collaborators                               │
//! │                                                                         │
//! │  Catalog           consumed    read-only product lookup                 │
//! │                                                                         │
//! │  TransactionStore  produced-to fire-and-forget: the core records the   │
//! │                                sale once and never retries; a failure  │
//! │                                is logged as a warning, the checkout    │
//! │                                proceeds                                 │
//! │                                                                         │
//! │  PrintGateway      produced-to failure never reopens a transaction;    │
//! │                                the cashier may reprint from the        │
//! │                                Transaction at any time                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Retry policies, queueing and durability all live on the collaborator's
//! side of these traits, not in this core.

use thiserror::Error;

use atlas_core::{Product, Receipt, Transaction};

// =============================================================================
// Catalog
// =============================================================================

/// Read-only product lookup.
///
/// The cart snapshots name and price at add time, so this core never
/// holds a Product beyond a single call.
pub trait Catalog {
    /// Returns the product, or `None` when the id is unknown.
    fn product(&self, id: &str) -> Option<Product>;
}

// =============================================================================
// Transaction Store
// =============================================================================

/// Persistence collaborator error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The backend refused the record.
    #[error("persistence rejected transaction {transaction_id}: {reason}")]
    Rejected {
        transaction_id: String,
        reason: String,
    },

    /// The backend could not be reached.
    #[error("persistence unavailable: {0}")]
    Unavailable(String),
}

/// Where finalized transactions are written.
///
/// The core calls [`record`](TransactionStore::record) exactly once per
/// confirmed sale and does not retry; an `Err` is surfaced to the
/// operator as a non-blocking warning.
pub trait TransactionStore {
    fn record(&mut self, transaction: &Transaction) -> Result<(), StoreError>;
}

// =============================================================================
// Print Gateway
// =============================================================================

/// Print gateway error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PrintError {
    /// The host environment blocked the print (e.g. pop-up blocker).
    #[error("print blocked: {0}")]
    Blocked(String),

    /// The physical printer is not reachable.
    #[error("printer offline")]
    Offline,
}

/// Consumes a rendered receipt document.
///
/// A failure here is reported to the cashier but never affects the
/// recorded Transaction.
pub trait PrintGateway {
    fn print(&mut self, receipt: &Receipt) -> Result<(), PrintError>;
}
