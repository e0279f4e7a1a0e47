//! # Error Types
//!
//! Domain-specific error types for atlas-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  atlas-core errors (this file)                                         │
//! │  └── CartError       - Cart mutation failures                          │
//! │                                                                         │
//! │  atlas-terminal errors (separate crate)                                │
//! │  ├── TerminalError   - Checkout guard + state machine failures         │
//! │  ├── StoreError      - Persistence collaborator failures               │
//! │  └── PrintError      - Print gateway failures                          │
//! │                                                                         │
//! │  Flow: CartError → TerminalError → UI shell                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product id, quantity, etc.)
//! 3. Errors are enum variants, never String
//! 4. Every error here is recoverable: the cart is left untouched

use thiserror::Error;

// =============================================================================
// Cart Error
// =============================================================================

/// Cart mutation errors.
///
/// Every variant leaves the cart exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    /// A non-positive quantity was passed to an add operation.
    ///
    /// ## When This Occurs
    /// - UI sends quantity 0 or a negative value
    /// - A quantity field was parsed from empty input
    #[error("Invalid quantity: {quantity} (must be at least 1)")]
    InvalidQuantity { quantity: i64 },

    /// A set/update targeted a product id with no line in the cart.
    #[error("No cart line for product {product_id}")]
    LineNotFound { product_id: String },

    /// Line quantity would exceed the per-line maximum.
    #[error("Quantity {requested} exceeds maximum allowed ({max})")]
    QuantityTooLarge { requested: i64, max: i64 },

    /// Cart has reached the maximum number of distinct lines.
    #[error("Cart cannot have more than {max} lines")]
    CartFull { max: usize },
}

/// Convenience type alias for Results with CartError.
pub type CartResult<T> = Result<T, CartError>;

// =============================================================================
// Unit Tests
// =============================================================================
