//! # atlas-terminal: Checkout Session Layer for Atlas POS
//!
//! One [`Terminal`] per checkout lane. This crate wires the pure logic in
//! `atlas-core` to the outside world through four trait seams and drives
//! the checkout state machine.
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    One Sale, End to End                                 │
//! │                                                                         │
//! │  add_item / set_quantity / set_discount                                │
//! │        │         (totals recomputed on every read)                     │
//! │        ▼                                                                │
//! │  initiate_checkout(cash) ── guards ──► AwaitingConfirmation            │
//! │        │                                                                │
//! │        ▼ confirm()                                                      │
//! │  TransactionRecorder: snapshot ► record to store ► clear cart          │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  ReceiptRenderer: deterministic document ──► AwaitingPrintDecision     │
//! │        │                                                                │
//! │        ▼ print() / skip_print()                                         │
//! │  PrintGateway (failure never reopens the sale) ──► fresh Open cart     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`checkout`] - `Terminal`, `CheckoutState`, the transition logic
//! - [`recorder`] - builds the one immutable Transaction per sale
//! - [`gateway`] - `Catalog`, `TransactionStore`, `PrintGateway` seams
//! - [`clock`] - injected time source
//! - [`error`] - `TerminalError` with machine-readable codes

// =============================================================================
// Module Declarations
// =============================================================================

pub mod checkout;
pub mod clock;
pub mod error;
pub mod gateway;
pub mod recorder;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use checkout::{CartTotals, CheckoutState, Terminal, TerminalConfig};
pub use clock::{Clock, SystemClock};
pub use error::{ErrorCode, TerminalError, TerminalResult};
pub use gateway::{Catalog, PrintError, PrintGateway, StoreError, TransactionStore};
pub use recorder::TransactionRecorder;
