//! # Checkout State Machine
//!
//! Orchestrates the irreversible transition from "editable cart" to
//! "finalized transaction" for one terminal.
//!
//! ## State Diagram
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Checkout Lifecycle                                   │
//! │                                                                         │
//! │            initiate_checkout(cash)                                      │
//! │  ┌──────┐  guard: cart non-empty,    ┌──────────────────────┐          │
//! │  │ Open │  total > 0, cash >= total  │ AwaitingConfirmation │          │
//! │  │      │───────────────────────────►│                      │          │
//! │  └──────┘                            └──────────┬───────────┘          │
//! │     ▲  ▲                                        │                       │
//! │     │  │            cancel()                    │ confirm()             │
//! │     │  └────────────────────────────────────────┤                       │
//! │     │     (cart/discount/cash untouched)        ▼                       │
//! │     │                                    [ Finalized ]  transient:      │
//! │     │                                    snapshot ──► record ──►        │
//! │     │                                    clear cart ──► render          │
//! │     │                                           │                       │
//! │     │                             ┌─────────────▼──────────┐            │
//! │     │      print() / skip()       │ AwaitingPrintDecision  │            │
//! │     └─────────────────────────────│  (holds the rendered   │            │
//! │        via [ Closed ], transient:  │   receipt document)    │            │
//! │        fresh Open, empty cart      └────────────────────────┘            │
//! │                                                                         │
//! │  Guard failures report EmptyCart / ZeroTotal / InsufficientCash and    │
//! │  change NOTHING. A Transaction created on confirm() is never mutated   │
//! │  or deleted by any later transition.                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The source system tracked this with independent modal-visibility
//! booleans, which admits impossible combinations (both dialogs open at
//! once). Here the session is a single tagged enum and every operation is
//! an exhaustive match; a UI layer merely projects the current state into
//! which controls to show.

use serde::Serialize;
use tracing::{debug, info, warn};

use atlas_core::{Cart, CartLine, Discount, Money, Receipt, ReceiptRenderer, Transaction};

use crate::clock::Clock;
use crate::error::{TerminalError, TerminalResult};
use crate::gateway::{Catalog, PrintGateway, TransactionStore};
use crate::recorder::TransactionRecorder;

// =============================================================================
// Checkout State
// =============================================================================

/// The resting states of one terminal's checkout machine.
///
/// `Finalized` and `Closed` from the lifecycle are transient: both
/// auto-advance (`Finalized` renders the receipt and moves on; `Closed`
/// resets to a fresh `Open`), so the machine is never observed in either.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum CheckoutState {
    /// Cart is editable; discount and cash input may change freely.
    Open,

    /// A checkout was initiated and passed its guards; waiting for the
    /// cashier to confirm or cancel.
    AwaitingConfirmation,

    /// The sale is recorded; the rendered receipt waits for a
    /// print-or-skip decision.
    AwaitingPrintDecision { receipt: Receipt },
}

impl CheckoutState {
    /// Short name for error messages and logs.
    pub fn name(&self) -> &'static str {
        match self {
            CheckoutState::Open => "open",
            CheckoutState::AwaitingConfirmation => "awaiting_confirmation",
            CheckoutState::AwaitingPrintDecision { .. } => "awaiting_print_decision",
        }
    }
}

// =============================================================================
// Live Totals
// =============================================================================

/// Totals snapshot for display, recomputed from the cart and discount on
/// every call, never cached, so it can never drift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub line_count: usize,
    pub total_quantity: i64,
    pub subtotal: Money,
    pub discount_amount: Money,
    pub total: Money,
}

// =============================================================================
// Terminal Configuration
// =============================================================================

/// Static per-terminal configuration.
#[derive(Debug, Clone)]
pub struct TerminalConfig {
    /// Header printed on every receipt.
    pub store_name: String,

    /// Identifies this lane in logs.
    pub terminal_id: String,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        TerminalConfig {
            store_name: "ATLAS POS".to_string(),
            terminal_id: "pos-01".to_string(),
        }
    }
}

// =============================================================================
// Terminal
// =============================================================================

/// One checkout lane: cart, discount, cash input and the state machine,
/// wired to its external collaborators.
///
/// ## Concurrency Model
/// One logical thread of control per terminal: each method runs to
/// completion before the next user action is accepted. Terminals share
/// nothing with each other; multi-lane setups own one `Terminal` each.
#[derive(Debug)]
pub struct Terminal<C, S, P, K>
where
    C: Catalog,
    S: TransactionStore,
    P: PrintGateway,
    K: Clock,
{
    config: TerminalConfig,
    catalog: C,
    printer: P,
    clock: K,
    recorder: TransactionRecorder<S>,
    renderer: ReceiptRenderer,

    cart: Cart,
    discount: Discount,
    /// Cash-tendered input register. Survives cancel() so the cashier can
    /// adjust and retry; reset by clear_cart() and by a confirmed sale.
    cash_tendered: Money,
    state: CheckoutState,
}

impl<C, S, P, K> Terminal<C, S, P, K>
where
    C: Catalog,
    S: TransactionStore,
    P: PrintGateway,
    K: Clock,
{
    /// Creates a terminal with an empty cart in the `Open` state.
    pub fn new(config: TerminalConfig, catalog: C, store: S, printer: P, clock: K) -> Self {
        let renderer = ReceiptRenderer::new(config.store_name.clone());
        Terminal {
            config,
            catalog,
            printer,
            clock,
            recorder: TransactionRecorder::new(store),
            renderer,
            cart: Cart::new(),
            discount: Discount::None,
            cash_tendered: Money::zero(),
            state: CheckoutState::Open,
        }
    }

    // -------------------------------------------------------------------------
    // Read access
    // -------------------------------------------------------------------------

    /// Current machine state.
    pub fn state(&self) -> &CheckoutState {
        &self.state
    }

    /// The cart lines in display order.
    pub fn lines(&self) -> &[CartLine] {
        self.cart.lines()
    }

    /// The discount rule currently selected.
    pub fn discount(&self) -> Discount {
        self.discount
    }

    /// The cash-tendered input register.
    pub fn cash_tendered(&self) -> Money {
        self.cash_tendered
    }

    /// Live totals: subtotal recomputed from the lines, discount
    /// re-applied on every call.
    pub fn totals(&self) -> CartTotals {
        let subtotal = self.cart.subtotal();
        let outcome = self.discount.apply(subtotal);
        CartTotals {
            line_count: self.cart.line_count(),
            total_quantity: self.cart.total_quantity(),
            subtotal,
            discount_amount: outcome.discount_amount,
            total: outcome.total,
        }
    }

    /// The rendered receipt awaiting a print decision, if any.
    pub fn pending_receipt(&self) -> Option<&Receipt> {
        match &self.state {
            CheckoutState::AwaitingPrintDecision { receipt } => Some(receipt),
            _ => None,
        }
    }

    // -------------------------------------------------------------------------
    // Cart editing (Open state only)
    // -------------------------------------------------------------------------

    /// Adds a product to the cart (default quantity 1 at the call sites).
    ///
    /// Looks the product up in the catalog; the cart freezes its name and
    /// price at this moment.
    pub fn add_item(&mut self, product_id: &str, quantity: i64) -> TerminalResult<()> {
        debug!(product_id = %product_id, quantity = %quantity, "add_item");
        self.require_open("add an item")?;

        let product = self
            .catalog
            .product(product_id)
            .ok_or_else(|| TerminalError::ProductNotFound(product_id.to_string()))?;

        self.cart.add_line(&product, quantity)?;
        Ok(())
    }

    /// Sets the quantity of an existing line; zero or less removes it.
    pub fn set_quantity(&mut self, product_id: &str, quantity: i64) -> TerminalResult<()> {
        debug!(product_id = %product_id, quantity = %quantity, "set_quantity");
        self.require_open("change a quantity")?;
        self.cart.set_quantity(product_id, quantity)?;
        Ok(())
    }

    /// Removes a line; a no-op when the product is not in the cart.
    pub fn remove_item(&mut self, product_id: &str) -> TerminalResult<()> {
        debug!(product_id = %product_id, "remove_item");
        self.require_open("remove an item")?;
        self.cart.remove_line(product_id);
        Ok(())
    }

    /// Empties the cart and resets the discount and cash input; both are
    /// meaningless for an empty cart.
    pub fn clear_cart(&mut self) -> TerminalResult<()> {
        debug!("clear_cart");
        self.require_open("clear the cart")?;
        self.reset_sale_inputs();
        Ok(())
    }

    /// Selects the discount rule for the open cart.
    pub fn set_discount(&mut self, discount: Discount) -> TerminalResult<()> {
        debug!(discount = %discount, "set_discount");
        self.require_open("change the discount")?;
        self.discount = discount;
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Checkout transitions
    // -------------------------------------------------------------------------

    /// `Open → AwaitingConfirmation`, guarded.
    ///
    /// ## Guards (checked in order)
    /// 1. cart non-empty (`EmptyCart`)
    /// 2. total > 0 (`ZeroTotal`: a fully discounted sale has nothing to
    ///    charge)
    /// 3. cash_tendered >= total (`InsufficientCash`)
    ///
    /// A failed guard keeps the machine in `Open` with no side effect
    /// beyond remembering the cash input for the retry.
    pub fn initiate_checkout(&mut self, cash_tendered: Money) -> TerminalResult<()> {
        debug!(cash_tendered = %cash_tendered, "initiate_checkout");
        self.require_open("initiate checkout")?;

        // Remember the input either way so the cashier can correct it.
        self.cash_tendered = cash_tendered;

        if self.cart.is_empty() {
            return Err(TerminalError::EmptyCart);
        }

        let total = self.totals().total;
        if total.is_zero() {
            return Err(TerminalError::ZeroTotal);
        }
        if cash_tendered < total {
            return Err(TerminalError::InsufficientCash {
                tendered: cash_tendered,
                total,
            });
        }

        self.state = CheckoutState::AwaitingConfirmation;
        Ok(())
    }

    /// `AwaitingConfirmation → Open`, discarding only the pending intent.
    ///
    /// Cart, discount and cash input are left untouched so the cashier
    /// can adjust and retry.
    pub fn cancel(&mut self) -> TerminalResult<()> {
        debug!("cancel");
        self.require_state("cancel", &CheckoutState::AwaitingConfirmation)?;
        self.state = CheckoutState::Open;
        Ok(())
    }

    /// `AwaitingConfirmation → Finalized → AwaitingPrintDecision`.
    ///
    /// One atomic step: snapshot the cart + discount + cash into a new
    /// Transaction (recorded to the store, fire-and-forget), then clear
    /// the cart, discount and cash input. A confirmed sale never leaves
    /// residual cart state visible to the next customer.
    ///
    /// Returns the caller's own copy of the Transaction; the terminal
    /// keeps no mutable path back into it.
    pub fn confirm(&mut self) -> TerminalResult<Transaction> {
        debug!("confirm");
        self.require_state("confirm", &CheckoutState::AwaitingConfirmation)?;

        let transaction =
            self.recorder
                .finalize(&self.cart, self.discount, self.cash_tendered, &self.clock);

        // Clearing and state change happen before control returns: no
        // observer can see a confirmed sale with a non-empty cart.
        self.reset_sale_inputs();

        // Rendering is pure string construction over the frozen
        // Transaction; it cannot fail, so the print offer is always made.
        let receipt = self.renderer.render(&transaction);

        info!(
            terminal_id = %self.config.terminal_id,
            transaction_id = %transaction.id,
            total = %transaction.total,
            "Sale confirmed"
        );

        self.state = CheckoutState::AwaitingPrintDecision { receipt };
        Ok(transaction)
    }

    /// `AwaitingPrintDecision → Closed → Open`: hands the document to the
    /// print gateway, then resets for the next customer.
    ///
    /// A gateway failure is returned as `PrintFailure` but the machine
    /// still resets; the sale is recorded and a reprint can always be
    /// rendered from the Transaction.
    pub fn print(&mut self) -> TerminalResult<()> {
        debug!("print");
        let receipt = self.take_pending_receipt("print")?;

        let result = self.printer.print(&receipt);

        match result {
            Ok(()) => {
                info!(transaction_id = %receipt.transaction_id, "Receipt printed");
                Ok(())
            }
            Err(err) => {
                warn!(
                    transaction_id = %receipt.transaction_id,
                    error = %err,
                    "Receipt print failed; transaction remains recorded"
                );
                Err(err.into())
            }
        }
    }

    /// `AwaitingPrintDecision → Closed → Open`: discards the rendered
    /// document without printing.
    pub fn skip_print(&mut self) -> TerminalResult<()> {
        debug!("skip_print");
        self.take_pending_receipt("skip printing")?;
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Internal helpers
    // -------------------------------------------------------------------------

    /// Clears everything tied to the open sale: lines, discount, cash.
    fn reset_sale_inputs(&mut self) {
        self.cart.clear();
        self.discount = Discount::None;
        self.cash_tendered = Money::zero();
    }

    fn require_open(&self, action: &'static str) -> TerminalResult<()> {
        self.require_state(action, &CheckoutState::Open)
    }

    fn require_state(&self, action: &'static str, expected: &CheckoutState) -> TerminalResult<()> {
        if std::mem::discriminant(&self.state) == std::mem::discriminant(expected) {
            Ok(())
        } else {
            Err(TerminalError::InvalidState {
                action,
                state: self.state.name(),
            })
        }
    }

    /// Takes the pending receipt out, resetting the machine to a fresh
    /// `Open` (the transient `Closed` state).
    fn take_pending_receipt(&mut self, action: &'static str) -> TerminalResult<Receipt> {
        match std::mem::replace(&mut self.state, CheckoutState::Open) {
            CheckoutState::AwaitingPrintDecision { receipt } => Ok(receipt),
            other => {
                // Not in the print-decision state: put it back untouched.
                let name = other.name();
                self.state = other;
                Err(TerminalError::InvalidState {
                    action,
                    state: name,
                })
            }
        }
    }
}
