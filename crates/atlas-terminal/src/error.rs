//! # Terminal Error Type
//!
//! Unified error type for terminal session operations.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Atlas POS                              │
//! │                                                                         │
//! │  UI shell                    Terminal Session                           │
//! │  ────────                    ────────────────                           │
//! │                                                                         │
//! │  initiate_checkout($400)                                               │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  guard fails ──► InsufficientCash { tendered, total } ──► UI shows     │
//! │                  state stays Open, cart untouched         "need $41    │
//! │                                                            more"       │
//! │                                                                         │
//! │  Every variant is recoverable. The worst outcome in this core is a     │
//! │  sale that was recorded but never printed, and that is always          │
//! │  repairable, because receipts re-render deterministically from the     │
//! │  Transaction.                                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each variant maps to a machine-readable [`ErrorCode`] so the UI can
//! branch without parsing messages.

use serde::Serialize;
use thiserror::Error;

use atlas_core::{CartError, Money};

use crate::gateway::PrintError;

// =============================================================================
// Terminal Error
// =============================================================================

/// Errors surfaced by terminal session operations.
///
/// Guard failures (`EmptyCart`, `ZeroTotal`, `InsufficientCash`) leave the
/// state machine in `Open` with no side effect; the cashier corrects the
/// input and retries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TerminalError {
    /// Checkout was initiated with no lines in the cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// Checkout was initiated with a total of zero (fully discounted).
    #[error("Total is zero; nothing to charge")]
    ZeroTotal,

    /// Cash tendered does not cover the total due.
    #[error("Insufficient cash: tendered {tendered}, total due {total}")]
    InsufficientCash { tendered: Money, total: Money },

    /// Catalog lookup returned nothing for this id.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// The operation is not valid in the current checkout state.
    ///
    /// ## When This Occurs
    /// - Editing the cart while a checkout is pending
    /// - confirm() or cancel() without a pending checkout
    /// - print() or skip() without a rendered receipt waiting
    #[error("Cannot {action} while checkout is in state {state}")]
    InvalidState {
        action: &'static str,
        state: &'static str,
    },

    /// The print gateway failed. The sale is already recorded and stays
    /// recorded; only the paper copy is missing.
    #[error("Print failed: {reason}")]
    Print { reason: String },

    /// A cart mutation was rejected (cart left unchanged).
    #[error(transparent)]
    Cart(#[from] CartError),
}

impl From<PrintError> for TerminalError {
    fn from(err: PrintError) -> Self {
        TerminalError::Print {
            reason: err.to_string(),
        }
    }
}

// =============================================================================
// Error Codes
// =============================================================================

/// Machine-readable error codes for the UI shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Checkout guard failed; correct input and retry
    EmptyCart,
    ZeroTotal,
    InsufficientCash,

    /// Catalog has no such product
    NotFound,

    /// Operation not valid in the current checkout state
    InvalidState,

    /// Print gateway failure (sale stays recorded)
    PrintFailure,

    /// Cart mutation rejected
    CartError,
}

impl TerminalError {
    /// The code the UI shell branches on.
    pub fn code(&self) -> ErrorCode {
        match self {
            TerminalError::EmptyCart => ErrorCode::EmptyCart,
            TerminalError::ZeroTotal => ErrorCode::ZeroTotal,
            TerminalError::InsufficientCash { .. } => ErrorCode::InsufficientCash,
            TerminalError::ProductNotFound(_) => ErrorCode::NotFound,
            TerminalError::InvalidState { .. } => ErrorCode::InvalidState,
            TerminalError::Print { .. } => ErrorCode::PrintFailure,
            TerminalError::Cart(_) => ErrorCode::CartError,
        }
    }
}

/// Convenience type alias for Results with TerminalError.
pub type TerminalResult<T> = Result<T, TerminalError>;

// =============================================================================
// Unit Tests
// =============================================================================
