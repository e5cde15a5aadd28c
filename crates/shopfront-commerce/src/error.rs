//! Storefront domain error types.

use thiserror::Error;

/// Errors that can occur in cart and checkout operations.
///
/// Cart operations are total for valid input; every variant here is a
/// rejected-input or arithmetic condition that leaves the cart unchanged.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Product id is the empty string.
    #[error("product id must not be empty")]
    EmptyProductId,

    /// Quantity is zero or negative.
    #[error("invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Unit price is negative.
    #[error("negative unit price: {0} minor units")]
    NegativePrice(i64),

    /// Quantity exceeds maximum allowed per line.
    #[error("quantity {0} exceeds maximum allowed ({1})")]
    QuantityExceedsLimit(i64, i64),

    /// Currency mismatch.
    #[error("currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Arithmetic overflow.
    #[error("arithmetic overflow in money calculation")]
    Overflow,

    /// Checkout requested for an empty cart.
    #[error("cannot create a checkout session for an empty cart")]
    EmptyCart,
}
