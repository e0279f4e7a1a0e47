//! # atlas-core: Pure Business Logic for Atlas POS
//!
//! This crate is the **heart** of the Atlas POS checkout core. It contains
//! all business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Atlas POS Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    UI Shell (external)                          │   │
//! │  │    Catalog UI ──► Cart UI ──► Tender UI ──► Print Dialog       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 atlas-terminal (session layer)                  │   │
//! │  │    Terminal, CheckoutState, TransactionRecorder,                │   │
//! │  │    Catalog / TransactionStore / PrintGateway / Clock traits     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ atlas-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   money   │  │   cart    │  │ discount  │  │  receipt  │  │   │
//! │  │   │   Money   │  │   Cart    │  │ Discount  │  │  Renderer │  │   │
//! │  │   │  (cents)  │  │ CartLine  │  │  apply()  │  │  render() │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CLOCK • NO NETWORK • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Transaction)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - The in-progress sale: ordered lines, frozen prices
//! - [`discount`] - Pure discount calculator with clamping rules
//! - [`receipt`] - Deterministic receipt rendering
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input = same output; receipt reprints are
//!    byte-identical because nothing here reads a clock
//! 2. **No I/O**: database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: all monetary values are in cents (i64); guards
//!    like `cash_tendered >= total` are exact comparisons
//! 4. **Explicit Errors**: all errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use atlas_core::cart::Cart;
//! use atlas_core::discount::Discount;
//! use atlas_core::money::Money;
//! use atlas_core::types::Product;
//!
//! let hammer = Product {
//!     id: "p-1".to_string(),
//!     name: "Claw Hammer".to_string(),
//!     unit_price_cents: 24_500, // $245.00
//!     category: "Hardware".to_string(),
//! };
//!
//! let mut cart = Cart::new();
//! cart.add_line(&hammer, 2).unwrap();
//! assert_eq!(cart.subtotal(), Money::from_cents(49_000));
//!
//! let outcome = Discount::Percentage { bps: 1000 }.apply(cart.subtotal());
//! assert_eq!(outcome.total, Money::from_cents(44_100));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod discount;
pub mod error;
pub mod money;
pub mod receipt;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use atlas_core::Money` instead of
// `use atlas_core::money::Money`

pub use cart::{Cart, CartLine};
pub use discount::{Discount, DiscountOutcome};
pub use error::{CartError, CartResult};
pub use money::Money;
pub use receipt::{Receipt, ReceiptRenderer};
pub use types::{Product, Transaction};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum distinct lines allowed in a single cart
///
/// ## Business Reason
/// Prevents runaway carts and ensures reasonable transaction sizes.
pub const MAX_CART_LINES: usize = 100;

/// Maximum quantity of a single line in cart
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10).
pub const MAX_LINE_QUANTITY: i64 = 999;
