//! Commerce domain types and cart logic for Shopfront.
//!
//! This crate is the pure core of the storefront:
//!
//! - **Cart**: the single source of truth for cart contents, with
//!   upsert-by-product add, exact removal, and derived totals
//! - **Catalog**: the product type the listing page renders
//! - **Checkout**: translation of a cart snapshot into a payment-provider
//!   session request
//!
//! No I/O happens here; the provider boundary lives in `shopfront-gateway`
//! and the UI surfaces live in the storefront application.
//!
//! # Example
//!
//! ```rust
//! use shopfront_commerce::prelude::*;
//!
//! let mut cart = Cart::new();
//! cart.add_line(CartLine::new(
//!     ProductId::new("sneaker-fall-01"),
//!     "Fall Limited Edition Sneakers",
//!     Money::new(12_500, Currency::USD),
//!     2,
//!     "/images/image-product-1.jpg",
//! )?)?;
//!
//! assert_eq!(cart.item_count(), 2);
//! assert_eq!(cart.subtotal()?, Money::new(25_000, Currency::USD));
//! # Ok::<(), shopfront_commerce::StoreError>(())
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;

pub use error::StoreError;
pub use ids::{CheckoutSessionId, ProductId};
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::StoreError;
    pub use crate::ids::{CheckoutSessionId, ProductId};
    pub use crate::money::{Currency, Money};

    pub use crate::cart::{Cart, CartLine, MAX_QUANTITY_PER_LINE};
    pub use crate::catalog::Product;
    pub use crate::checkout::{
        CheckoutSession, CheckoutSessionRequest, RedirectUrls, SessionLineItem,
    };
}
