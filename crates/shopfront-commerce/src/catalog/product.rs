//! Product type for the listing page.

use crate::cart::CartLine;
use crate::error::StoreError;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Short line shown under the name in listings.
    pub tagline: String,
    /// Full description.
    pub description: String,
    /// Unit price.
    pub price: Money,
    /// Display image path.
    pub image: String,
}

impl Product {
    /// Build the cart line for an add-to-cart intent with the chosen
    /// quantity.
    pub fn to_cart_line(&self, quantity: i64) -> Result<CartLine, StoreError> {
        CartLine::new(
            self.id.clone(),
            self.name.clone(),
            self.price,
            quantity,
            self.image.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn sneakers() -> Product {
        Product {
            id: ProductId::new("sneaker-fall-01"),
            name: "Fall Limited Edition Sneakers".to_string(),
            tagline: "Sneaker Company".to_string(),
            description: "Low-profile sneakers with a durable rubber sole.".to_string(),
            price: Money::new(12_500, Currency::USD),
            image: "/images/image-product-1.jpg".to_string(),
        }
    }

    #[test]
    fn test_to_cart_line_copies_display_fields() {
        let product = sneakers();
        let line = product.to_cart_line(2).unwrap();

        assert_eq!(line.id, product.id);
        assert_eq!(line.name, product.name);
        assert_eq!(line.price, product.price);
        assert_eq!(line.image, product.image);
        assert_eq!(line.quantity, 2);
    }

    #[test]
    fn test_to_cart_line_rejects_non_positive_quantity() {
        let product = sneakers();
        assert!(product.to_cart_line(0).is_err());
    }
}
