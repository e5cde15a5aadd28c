//! Cart line type.

use crate::error::StoreError;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// One product entry in the cart, keyed by product id.
///
/// Carries the quantity plus the display metadata (name, unit price,
/// image) the cart panel and the checkout payload need.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// Stable product identifier; the unique key within a cart.
    pub id: ProductId,
    /// Product name (denormalized for display).
    pub name: String,
    /// Unit price.
    pub price: Money,
    /// Quantity, always >= 1.
    pub quantity: i64,
    /// Display image path.
    pub image: String,
}

impl CartLine {
    /// Create a new cart line.
    ///
    /// Returns an error if the id is empty, the quantity is not positive,
    /// or the price is negative.
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        price: Money,
        quantity: i64,
        image: impl Into<String>,
    ) -> Result<Self, StoreError> {
        let line = Self {
            id,
            name: name.into(),
            price,
            quantity,
            image: image.into(),
        };
        line.validate()?;
        Ok(line)
    }

    /// Validate the line's invariants.
    ///
    /// Lines can also arrive over the wire with arbitrary field values, so
    /// the cart re-runs this check on every add.
    pub fn validate(&self) -> Result<(), StoreError> {
        if self.id.is_empty() {
            return Err(StoreError::EmptyProductId);
        }
        if self.quantity < 1 {
            return Err(StoreError::InvalidQuantity(self.quantity));
        }
        if self.price.is_negative() {
            return Err(StoreError::NegativePrice(self.price.amount_minor));
        }
        Ok(())
    }

    /// Line total (unit price times quantity).
    pub fn line_total(&self) -> Result<Money, StoreError> {
        self.price
            .checked_mul(self.quantity)
            .ok_or(StoreError::Overflow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn line(quantity: i64) -> Result<CartLine, StoreError> {
        CartLine::new(
            ProductId::new("sneaker-fall-01"),
            "Fall Limited Edition Sneakers",
            Money::new(12_500, Currency::USD),
            quantity,
            "/images/image-product-1.jpg",
        )
    }

    #[test]
    fn test_valid_line() {
        let line = line(2).unwrap();
        assert_eq!(line.quantity, 2);
        assert_eq!(
            line.line_total().unwrap(),
            Money::new(25_000, Currency::USD)
        );
    }

    #[test]
    fn test_rejects_empty_id() {
        let result = CartLine::new(
            ProductId::new(""),
            "Nameless",
            Money::new(100, Currency::USD),
            1,
            "/images/none.jpg",
        );
        assert!(matches!(result, Err(StoreError::EmptyProductId)));
    }

    #[test]
    fn test_rejects_zero_and_negative_quantity() {
        assert!(matches!(line(0), Err(StoreError::InvalidQuantity(0))));
        assert!(matches!(line(-3), Err(StoreError::InvalidQuantity(-3))));
    }

    #[test]
    fn test_rejects_negative_price() {
        let result = CartLine::new(
            ProductId::new("sneaker-fall-01"),
            "Fall Limited Edition Sneakers",
            Money::new(-1, Currency::USD),
            1,
            "/images/image-product-1.jpg",
        );
        assert!(matches!(result, Err(StoreError::NegativePrice(-1))));
    }

    #[test]
    fn test_line_total_overflow() {
        let line = CartLine::new(
            ProductId::new("sneaker-fall-01"),
            "Fall Limited Edition Sneakers",
            Money::new(i64::MAX, Currency::USD),
            2,
            "/images/image-product-1.jpg",
        )
        .unwrap();
        assert!(matches!(line.line_total(), Err(StoreError::Overflow)));
    }

    #[test]
    fn test_wire_roundtrip() {
        let json = r#"{
            "id": "sneaker-fall-01",
            "name": "Fall Limited Edition Sneakers",
            "price": { "amount_minor": 12500, "currency": "USD" },
            "quantity": 3,
            "image": "/images/image-product-1.jpg"
        }"#;
        let line: CartLine = serde_json::from_str(json).unwrap();
        assert_eq!(line.id.as_str(), "sneaker-fall-01");
        assert_eq!(line.quantity, 3);
        line.validate().unwrap();
    }
}
