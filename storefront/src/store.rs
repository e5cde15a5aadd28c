//! Shared cart state.

use leptos::prelude::*;
use shopfront_commerce::cart::{Cart, CartLine};
use shopfront_commerce::{Money, ProductId};

/// The single owner of cart state.
///
/// Exactly one `SharedCart` exists per application instance: it is
/// created in `App` and provided through context. The navbar badge, the
/// cart panel, and the checkout submission all read and mutate through
/// it, so no surface can hold a diverging copy. Subscription is the
/// reactive graph; every mutation re-renders every reader from the same
/// snapshot.
#[derive(Clone, Copy)]
pub struct SharedCart(RwSignal<Cart>);

impl SharedCart {
    /// Create the cart container. Called once, at application start.
    pub fn new() -> Self {
        Self(RwSignal::new(Cart::new()))
    }

    /// Add a line; an existing product id accumulates quantity.
    ///
    /// The UI surfaces never produce invalid input; if one does anyway,
    /// the intent is logged and dropped and the cart is unchanged.
    pub fn add_to_cart(&self, line: CartLine) {
        self.0.update(|cart| {
            if let Err(e) = cart.add_line(line) {
                tracing::warn!(error = %e, "rejected add-to-cart intent");
            }
        });
    }

    /// Remove the line with the given product id; absent ids are a no-op.
    pub fn remove_from_cart(&self, id: &ProductId) {
        let id = id.clone();
        self.0.update(|cart| {
            cart.remove_line(&id);
        });
    }

    /// Ordered snapshot of the current lines.
    pub fn cart_items(&self) -> Vec<CartLine> {
        self.0.with(|cart| cart.lines().to_vec())
    }

    /// Badge value: sum of quantities across the snapshot.
    pub fn item_count(&self) -> i64 {
        self.0.with(|cart| cart.item_count())
    }

    /// Informational subtotal for the cart panel.
    pub fn subtotal(&self) -> Money {
        self.0.with(|cart| {
            cart.subtotal()
                .unwrap_or_else(|_| Money::zero(cart.currency()))
        })
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.0.with(|cart| cart.is_empty())
    }
}

impl Default for SharedCart {
    fn default() -> Self {
        Self::new()
    }
}

/// Provide the single cart instance to the component tree.
pub fn provide_shared_cart() {
    provide_context(SharedCart::new());
}

/// The shared cart from context. `App` provides it at the root.
pub fn use_shared_cart() -> SharedCart {
    expect_context::<SharedCart>()
}
