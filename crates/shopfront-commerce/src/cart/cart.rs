//! The cart: single source of truth for cart contents.

use crate::cart::CartLine;
use crate::error::StoreError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};

/// Maximum quantity allowed per cart line.
pub const MAX_QUANTITY_PER_LINE: i64 = 999;

/// An ordered collection of cart lines, at most one per product id.
///
/// The line list is private: every consumer reads through [`Cart::lines`]
/// and mutates through the operations here, so the uniqueness and
/// positive-quantity invariants hold for every reachable snapshot. The
/// navbar badge, the cart panel, and the checkout payload all derive from
/// the same snapshot. Lines cross the wire individually; a cart is only
/// ever rebuilt through [`Cart::add_line`].
#[derive(Debug, Clone, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
    currency: Currency,
}

impl Cart {
    /// Create an empty cart in the default currency.
    pub fn new() -> Self {
        Self::with_currency(Currency::default())
    }

    /// Create an empty cart in the given currency.
    pub fn with_currency(currency: Currency) -> Self {
        Self {
            lines: Vec::new(),
            currency,
        }
    }

    /// The cart currency.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Add a line to the cart.
    ///
    /// If a line with the same product id already exists, its quantity is
    /// increased by the incoming quantity and the incoming name, price,
    /// and image are ignored; the line keeps its original position.
    /// Otherwise the line is appended verbatim, preserving insertion
    /// order.
    ///
    /// Returns an error if:
    /// - the line fails validation (empty id, non-positive quantity,
    ///   negative price)
    /// - the line's currency differs from the cart's
    /// - the merged quantity would exceed MAX_QUANTITY_PER_LINE or
    ///   overflow
    ///
    /// On error the cart is unchanged.
    pub fn add_line(&mut self, line: CartLine) -> Result<(), StoreError> {
        line.validate()?;
        if line.price.currency != self.currency {
            return Err(StoreError::CurrencyMismatch {
                expected: self.currency.code().to_string(),
                got: line.price.currency.code().to_string(),
            });
        }

        if let Some(existing) = self.lines.iter_mut().find(|l| l.id == line.id) {
            let merged = existing
                .quantity
                .checked_add(line.quantity)
                .ok_or(StoreError::Overflow)?;
            if merged > MAX_QUANTITY_PER_LINE {
                return Err(StoreError::QuantityExceedsLimit(
                    merged,
                    MAX_QUANTITY_PER_LINE,
                ));
            }
            existing.quantity = merged;
            return Ok(());
        }

        if line.quantity > MAX_QUANTITY_PER_LINE {
            return Err(StoreError::QuantityExceedsLimit(
                line.quantity,
                MAX_QUANTITY_PER_LINE,
            ));
        }
        self.lines.push(line);
        Ok(())
    }

    /// Remove the line with the given product id.
    ///
    /// Returns `true` if a line was removed. An absent id is a no-op, not
    /// an error.
    pub fn remove_line(&mut self, id: &ProductId) -> bool {
        let len_before = self.lines.len();
        self.lines.retain(|l| &l.id != id);
        self.lines.len() < len_before
    }

    /// Set the quantity of an existing line.
    ///
    /// A target quantity of zero or less removes the line, so a
    /// zero-quantity line is never retained. Returns `true` if a line was
    /// updated or removed, `false` if the id was absent.
    pub fn set_quantity(&mut self, id: &ProductId, quantity: i64) -> Result<bool, StoreError> {
        if quantity <= 0 {
            return Ok(self.remove_line(id));
        }
        if quantity > MAX_QUANTITY_PER_LINE {
            return Err(StoreError::QuantityExceedsLimit(
                quantity,
                MAX_QUANTITY_PER_LINE,
            ));
        }
        match self.lines.iter_mut().find(|l| &l.id == id) {
            Some(line) => {
                line.quantity = quantity;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Clear all lines.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Ordered snapshot of the current lines.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Get a line by product id.
    pub fn get_line(&self, id: &ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| &l.id == id)
    }

    /// Total item count (sum of quantities); the navigation badge value.
    pub fn item_count(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Number of distinct lines.
    pub fn unique_line_count(&self) -> usize {
        self.lines.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Informational subtotal (sum of line totals).
    ///
    /// The payment provider recomputes the authoritative total; this value
    /// is only displayed.
    pub fn subtotal(&self) -> Result<Money, StoreError> {
        let mut total = Money::zero(self.currency);
        for line in &self.lines {
            total = total
                .checked_add(&line.line_total()?)
                .ok_or(StoreError::Overflow)?;
        }
        Ok(total)
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}
