//! End-to-end checkout flows against in-memory collaborators.
//!
//! One test per behavior the session layer promises: the guard set on
//! `initiate_checkout`, the atomic confirm-and-clear, the print decision,
//! and the reprint guarantee after the cart has been reused.

use std::cell::RefCell;
use std::rc::Rc;

use chrono::{DateTime, TimeZone, Utc};

use atlas_core::{Discount, Money, Product, Receipt, ReceiptRenderer, Transaction};
use atlas_terminal::{
    Catalog, CheckoutState, Clock, PrintError, PrintGateway, StoreError, Terminal, TerminalConfig,
    TerminalError, TransactionStore,
};

// =============================================================================
// In-memory collaborators
// =============================================================================

#[derive(Debug, Clone)]
struct MemoryCatalog {
    products: Vec<Product>,
}

impl Catalog for MemoryCatalog {
    fn product(&self, id: &str) -> Option<Product> {
        self.products.iter().find(|p| p.id == id).cloned()
    }
}

#[derive(Debug, Default)]
struct RecordingStore {
    recorded: Rc<RefCell<Vec<Transaction>>>,
    fail: bool,
}

impl TransactionStore for RecordingStore {
    fn record(&mut self, transaction: &Transaction) -> Result<(), StoreError> {
        if self.fail {
            return Err(StoreError::Unavailable("backend down".to_string()));
        }
        self.recorded.borrow_mut().push(transaction.clone());
        Ok(())
    }
}

#[derive(Debug, Default)]
struct FakePrinter {
    printed: Rc<RefCell<Vec<Receipt>>>,
    fail: bool,
}

impl PrintGateway for FakePrinter {
    fn print(&mut self, receipt: &Receipt) -> Result<(), PrintError> {
        if self.fail {
            return Err(PrintError::Blocked("pop-up blocked".to_string()));
        }
        self.printed.borrow_mut().push(receipt.clone());
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
struct FixedClock(DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

// =============================================================================
// Fixtures
// =============================================================================

type TestTerminal = Terminal<MemoryCatalog, RecordingStore, FakePrinter, FixedClock>;

struct Harness {
    terminal: TestTerminal,
    recorded: Rc<RefCell<Vec<Transaction>>>,
    printed: Rc<RefCell<Vec<Receipt>>>,
}

fn catalog() -> MemoryCatalog {
    MemoryCatalog {
        products: vec![
            Product {
                id: "p-hammer".to_string(),
                name: "Claw Hammer".to_string(),
                unit_price_cents: 24_500, // $245.00
                category: "Hardware".to_string(),
            },
            Product {
                id: "p-pipe".to_string(),
                name: "PVC Pipe 2m".to_string(),
                unit_price_cents: 10_000, // $100.00
                category: "Plumbing".to_string(),
            },
        ],
    }
}

fn init_tracing() {
    use std::sync::Once;
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("atlas_terminal=debug")
            .with_test_writer()
            .try_init();
    });
}

fn harness_with(store_fail: bool, print_fail: bool) -> Harness {
    init_tracing();
    let recorded = Rc::new(RefCell::new(Vec::new()));
    let printed = Rc::new(RefCell::new(Vec::new()));
    let terminal = Terminal::new(
        TerminalConfig {
            store_name: "ATLAS HARDWARE".to_string(),
            terminal_id: "lane-1".to_string(),
        },
        catalog(),
        RecordingStore {
            recorded: Rc::clone(&recorded),
            fail: store_fail,
        },
        FakePrinter {
            printed: Rc::clone(&printed),
            fail: print_fail,
        },
        FixedClock(Utc.with_ymd_and_hms(2026, 8, 30, 10, 15, 0).unwrap()),
    );
    Harness {
        terminal,
        recorded,
        printed,
    }
}

fn harness() -> Harness {
    harness_with(false, false)
}

// =============================================================================
// Totals scenarios
// =============================================================================

#[test]
fn scenario_a_no_discount() {
    let mut h = harness();
    h.terminal.add_item("p-hammer", 2).unwrap();

    let totals = h.terminal.totals();
    assert_eq!(totals.subtotal, Money::from_cents(49_000));
    assert_eq!(totals.discount_amount, Money::zero());
    assert_eq!(totals.total, Money::from_cents(49_000));

    h.terminal
        .initiate_checkout(Money::from_cents(50_000))
        .unwrap();
    let tx = h.terminal.confirm().unwrap();

    assert_eq!(tx.total, Money::from_cents(49_000));
    assert_eq!(tx.change, Money::from_cents(1_000)); // $10.00
}

#[test]
fn scenario_b_percentage_discount() {
    let mut h = harness();
    h.terminal.add_item("p-hammer", 2).unwrap();
    h.terminal
        .set_discount(Discount::Percentage { bps: 1000 })
        .unwrap();

    let totals = h.terminal.totals();
    assert_eq!(totals.discount_amount, Money::from_cents(4_900));
    assert_eq!(totals.total, Money::from_cents(44_100));
}

#[test]
fn scenario_c_fixed_discount_clamped() {
    let mut h = harness();
    h.terminal.add_item("p-pipe", 1).unwrap(); // subtotal $100.00
    h.terminal
        .set_discount(Discount::Fixed {
            amount: Money::from_cents(50_000), // $500 off
        })
        .unwrap();

    let totals = h.terminal.totals();
    assert_eq!(totals.discount_amount, Money::from_cents(10_000));
    assert_eq!(totals.total, Money::zero());

    // A fully discounted sale has nothing to charge: the guard rejects it.
    let err = h
        .terminal
        .initiate_checkout(Money::from_cents(10_000))
        .unwrap_err();
    assert_eq!(err, TerminalError::ZeroTotal);
    assert_eq!(h.terminal.state(), &CheckoutState::Open);
}

// =============================================================================
// Checkout guards
// =============================================================================

#[test]
fn scenario_d_insufficient_cash_rejected() {
    let mut h = harness();
    h.terminal.add_item("p-hammer", 2).unwrap();
    h.terminal
        .set_discount(Discount::Percentage { bps: 1000 })
        .unwrap();

    let err = h
        .terminal
        .initiate_checkout(Money::from_cents(40_000))
        .unwrap_err();

    assert_eq!(
        err,
        TerminalError::InsufficientCash {
            tendered: Money::from_cents(40_000),
            total: Money::from_cents(44_100),
        }
    );
    // No state change, no side effect: cart and discount as before.
    assert_eq!(h.terminal.state(), &CheckoutState::Open);
    assert_eq!(h.terminal.lines().len(), 1);
    assert_eq!(h.terminal.totals().total, Money::from_cents(44_100));
    assert!(h.recorded.borrow().is_empty());
}

#[test]
fn empty_cart_rejected() {
    let mut h = harness();
    let err = h
        .terminal
        .initiate_checkout(Money::from_cents(10_000))
        .unwrap_err();
    assert_eq!(err, TerminalError::EmptyCart);
    assert_eq!(h.terminal.state(), &CheckoutState::Open);
}

#[test]
fn exact_cash_is_sufficient() {
    let mut h = harness();
    h.terminal.add_item("p-pipe", 1).unwrap();
    h.terminal
        .initiate_checkout(Money::from_cents(10_000))
        .unwrap();

    let tx = h.terminal.confirm().unwrap();
    assert_eq!(tx.change, Money::zero());
}

// =============================================================================
// Confirm / cancel semantics
// =============================================================================

#[test]
fn scenario_e_confirm_clears_and_reprint_is_stable() {
    let mut h = harness();
    h.terminal.add_item("p-hammer", 2).unwrap();
    h.terminal
        .initiate_checkout(Money::from_cents(50_000))
        .unwrap();

    let tx = h.terminal.confirm().unwrap();

    // Cart, discount and cash input are cleared atomically with the
    // confirmation.
    assert!(h.terminal.lines().is_empty());
    assert_eq!(h.terminal.discount(), Discount::None);
    assert_eq!(h.terminal.cash_tendered(), Money::zero());

    // The snapshot is complete and recorded.
    assert_eq!(tx.lines.len(), 1);
    assert_eq!(tx.lines[0].quantity, 2);
    assert_eq!(h.recorded.borrow().len(), 1);

    let original_receipt = h.terminal.pending_receipt().unwrap().clone();
    h.terminal.skip_print().unwrap();

    // Reuse the terminal for a second, different sale.
    h.terminal.add_item("p-pipe", 3).unwrap();
    h.terminal
        .initiate_checkout(Money::from_cents(40_000))
        .unwrap();
    h.terminal.confirm().unwrap();
    h.terminal.skip_print().unwrap();

    // Re-rendering the first Transaction still reproduces the original
    // receipt byte for byte.
    let renderer = ReceiptRenderer::new("ATLAS HARDWARE");
    let reprint = renderer.render(&tx);
    assert_eq!(reprint.body, original_receipt.body);
}

#[test]
fn cancel_keeps_cart_discount_and_cash() {
    let mut h = harness();
    h.terminal.add_item("p-hammer", 2).unwrap();
    h.terminal
        .set_discount(Discount::Percentage { bps: 1000 })
        .unwrap();
    h.terminal
        .initiate_checkout(Money::from_cents(50_000))
        .unwrap();

    h.terminal.cancel().unwrap();

    assert_eq!(h.terminal.state(), &CheckoutState::Open);
    assert_eq!(h.terminal.lines().len(), 1);
    assert_eq!(h.terminal.discount(), Discount::Percentage { bps: 1000 });
    assert_eq!(h.terminal.cash_tendered(), Money::from_cents(50_000));
    assert!(h.recorded.borrow().is_empty());

    // The cashier adjusts nothing and retries successfully.
    h.terminal
        .initiate_checkout(Money::from_cents(50_000))
        .unwrap();
    h.terminal.confirm().unwrap();
    assert_eq!(h.recorded.borrow().len(), 1);
}

#[test]
fn cart_is_locked_while_checkout_pending() {
    let mut h = harness();
    h.terminal.add_item("p-hammer", 1).unwrap();
    h.terminal
        .initiate_checkout(Money::from_cents(30_000))
        .unwrap();

    let err = h.terminal.add_item("p-pipe", 1).unwrap_err();
    assert!(matches!(err, TerminalError::InvalidState { .. }));
    assert_eq!(h.terminal.lines().len(), 1);
}

#[test]
fn confirm_requires_pending_checkout() {
    let mut h = harness();
    let err = h.terminal.confirm().unwrap_err();
    assert!(matches!(err, TerminalError::InvalidState { .. }));
}

#[test]
fn clear_cart_resets_discount_and_cash() {
    let mut h = harness();
    h.terminal.add_item("p-hammer", 1).unwrap();
    h.terminal
        .set_discount(Discount::Fixed {
            amount: Money::from_cents(500),
        })
        .unwrap();
    // A failed guard leaves the cash input populated.
    let _ = h.terminal.initiate_checkout(Money::from_cents(100));

    h.terminal.clear_cart().unwrap();

    assert!(h.terminal.lines().is_empty());
    assert_eq!(h.terminal.discount(), Discount::None);
    assert_eq!(h.terminal.cash_tendered(), Money::zero());
}

// =============================================================================
// Print decision
// =============================================================================

#[test]
fn print_hands_document_to_gateway_and_resets() {
    let mut h = harness();
    h.terminal.add_item("p-hammer", 1).unwrap();
    h.terminal
        .initiate_checkout(Money::from_cents(30_000))
        .unwrap();
    let tx = h.terminal.confirm().unwrap();

    h.terminal.print().unwrap();

    assert_eq!(h.terminal.state(), &CheckoutState::Open);
    let printed = h.printed.borrow();
    assert_eq!(printed.len(), 1);
    assert_eq!(printed[0].transaction_id, tx.id);
    assert!(printed[0].body.contains("Claw Hammer"));
}

#[test]
fn print_failure_reports_but_never_reopens_the_sale() {
    let mut h = harness_with(false, true);
    h.terminal.add_item("p-hammer", 1).unwrap();
    h.terminal
        .initiate_checkout(Money::from_cents(30_000))
        .unwrap();
    h.terminal.confirm().unwrap();

    let err = h.terminal.print().unwrap_err();

    assert!(matches!(err, TerminalError::Print { .. }));
    // The machine reset anyway and the transaction stays recorded.
    assert_eq!(h.terminal.state(), &CheckoutState::Open);
    assert_eq!(h.recorded.borrow().len(), 1);
    assert!(h.printed.borrow().is_empty());
}

#[test]
fn skip_discards_document_and_resets() {
    let mut h = harness();
    h.terminal.add_item("p-hammer", 1).unwrap();
    h.terminal
        .initiate_checkout(Money::from_cents(30_000))
        .unwrap();
    h.terminal.confirm().unwrap();

    h.terminal.skip_print().unwrap();

    assert_eq!(h.terminal.state(), &CheckoutState::Open);
    assert!(h.printed.borrow().is_empty());
    assert_eq!(h.recorded.borrow().len(), 1);
}

#[test]
fn print_requires_pending_receipt() {
    let mut h = harness();
    let err = h.terminal.print().unwrap_err();
    assert!(matches!(err, TerminalError::InvalidState { .. }));
    let err = h.terminal.skip_print().unwrap_err();
    assert!(matches!(err, TerminalError::InvalidState { .. }));
}

// =============================================================================
// Collaborator failure modes
// =============================================================================

#[test]
fn store_failure_does_not_block_checkout() {
    let mut h = harness_with(true, false);
    h.terminal.add_item("p-hammer", 1).unwrap();
    h.terminal
        .initiate_checkout(Money::from_cents(30_000))
        .unwrap();

    // confirm succeeds; the store warning is non-blocking.
    let tx = h.terminal.confirm().unwrap();
    assert_eq!(tx.total, Money::from_cents(24_500));
    assert!(h.recorded.borrow().is_empty());
    assert!(h.terminal.pending_receipt().is_some());
}

#[test]
fn unknown_product_rejected() {
    let mut h = harness();
    let err = h.terminal.add_item("p-ghost", 1).unwrap_err();
    assert_eq!(err, TerminalError::ProductNotFound("p-ghost".to_string()));
    assert!(h.terminal.lines().is_empty());
}

#[test]
fn receipt_numbers_are_unique_per_terminal() {
    let mut h = harness();
    let mut numbers = Vec::new();

    for _ in 0..3 {
        h.terminal.add_item("p-pipe", 1).unwrap();
        h.terminal
            .initiate_checkout(Money::from_cents(10_000))
            .unwrap();
        let tx = h.terminal.confirm().unwrap();
        h.terminal.skip_print().unwrap();
        numbers.push(tx.receipt_number);
    }

    numbers.sort();
    numbers.dedup();
    assert_eq!(numbers.len(), 3);
}
