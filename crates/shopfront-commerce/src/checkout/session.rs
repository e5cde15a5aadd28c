//! Checkout session request construction.

use crate::cart::Cart;
use crate::error::StoreError;
use crate::ids::CheckoutSessionId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// One entry of the session request, mirroring one cart line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionLineItem {
    /// Display name shown on the hosted payment page.
    pub name: String,
    /// One display image.
    pub image: String,
    /// Unit price in minor units; the provider multiplies by quantity.
    pub unit_amount: Money,
    /// Quantity.
    pub quantity: i64,
}

/// The two fixed redirect destinations after hosted payment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RedirectUrls {
    /// Destination after a completed payment.
    pub success_url: String,
    /// Destination after an abandoned payment.
    pub cancel_url: String,
}

/// The outbound session-creation request.
///
/// Contains exactly one entry per distinct cart line at submission time.
/// The subtotal is informational; the provider owns price-on-quantity
/// multiplication, tax, and currency handling.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckoutSessionRequest {
    /// Cart currency.
    pub currency: Currency,
    /// One entry per cart line, in cart order.
    pub line_items: Vec<SessionLineItem>,
    /// Informational total, not re-validated against the provider's.
    pub subtotal: Money,
    /// Redirect target after a completed payment.
    pub success_url: String,
    /// Redirect target after an abandoned payment.
    pub cancel_url: String,
}

impl CheckoutSessionRequest {
    /// Build the request from the current cart snapshot.
    ///
    /// An empty cart is rejected locally; the provider would reject it
    /// anyway, and failing before the network call keeps the error
    /// explicit.
    pub fn from_cart(cart: &Cart, redirects: RedirectUrls) -> Result<Self, StoreError> {
        if cart.is_empty() {
            return Err(StoreError::EmptyCart);
        }
        let subtotal = cart.subtotal()?;
        let line_items = cart
            .lines()
            .iter()
            .map(|line| SessionLineItem {
                name: line.name.clone(),
                image: line.image.clone(),
                unit_amount: line.price,
                quantity: line.quantity,
            })
            .collect();

        Ok(Self {
            currency: cart.currency(),
            line_items,
            subtotal,
            success_url: redirects.success_url,
            cancel_url: redirects.cancel_url,
        })
    }
}

/// The provider's answer: an opaque session reference plus the hosted
/// payment page the client is redirected to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckoutSession {
    /// Opaque session identifier.
    pub id: CheckoutSessionId,
    /// Hosted payment page URL.
    pub url: String,
}
