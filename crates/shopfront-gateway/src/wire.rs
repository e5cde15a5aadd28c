//! Provider wire payloads for session creation.

use serde::{Deserialize, Serialize};
use shopfront_commerce::checkout::CheckoutSessionRequest;

/// The JSON body of a session-creation call.
#[derive(Debug, Serialize)]
pub(crate) struct SessionPayload {
    pub payment_method_types: Vec<&'static str>,
    pub line_items: Vec<WireLineItem>,
    pub mode: &'static str,
    pub success_url: String,
    pub cancel_url: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct WireLineItem {
    pub price_data: PriceData,
    pub quantity: i64,
}

#[derive(Debug, Serialize)]
pub(crate) struct PriceData {
    /// Lowercase currency code, e.g. "usd".
    pub currency: String,
    pub product_data: ProductData,
    /// Unit price in minor units.
    pub unit_amount: i64,
}

#[derive(Debug, Serialize)]
pub(crate) struct ProductData {
    pub name: String,
    pub images: Vec<String>,
}

impl SessionPayload {
    /// Encode a session request as the provider expects it: one entry per
    /// line, unit price only, quantity alongside. The provider does the
    /// multiplication.
    pub(crate) fn from_request(request: &CheckoutSessionRequest) -> Self {
        let currency = request.currency.code().to_lowercase();
        let line_items = request
            .line_items
            .iter()
            .map(|item| WireLineItem {
                price_data: PriceData {
                    currency: currency.clone(),
                    product_data: ProductData {
                        name: item.name.clone(),
                        images: vec![item.image.clone()],
                    },
                    unit_amount: item.unit_amount.amount_minor,
                },
                quantity: item.quantity,
            })
            .collect();

        Self {
            payment_method_types: vec!["card"],
            line_items,
            mode: "payment",
            success_url: request.success_url.clone(),
            cancel_url: request.cancel_url.clone(),
        }
    }
}

/// The provider's 2xx response body.
#[derive(Debug, Deserialize)]
pub(crate) struct SessionCreated {
    pub id: String,
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopfront_commerce::cart::{Cart, CartLine};
    use shopfront_commerce::checkout::RedirectUrls;
    use shopfront_commerce::{Currency, Money, ProductId};

    fn request() -> CheckoutSessionRequest {
        let mut cart = Cart::new();
        cart.add_line(
            CartLine::new(
                ProductId::new("a"),
                "Product a",
                Money::new(1000, Currency::USD),
                2,
                "/images/a.jpg",
            )
            .unwrap(),
        )
        .unwrap();
        cart.add_line(
            CartLine::new(
                ProductId::new("b"),
                "Product b",
                Money::new(2500, Currency::USD),
                1,
                "/images/b.jpg",
            )
            .unwrap(),
        )
        .unwrap();
        CheckoutSessionRequest::from_cart(
            &cart,
            RedirectUrls {
                success_url: "http://localhost:3000/checkout/success".to_string(),
                cancel_url: "http://localhost:3000/checkout/cancel".to_string(),
            },
        )
        .unwrap()
    }

    #[test]
    fn test_payload_mirrors_every_line() {
        let request = request();
        let payload = SessionPayload::from_request(&request);

        assert_eq!(payload.mode, "payment");
        assert_eq!(payload.payment_method_types, vec!["card"]);
        assert_eq!(payload.line_items.len(), request.line_items.len());
        for (wire, item) in payload.line_items.iter().zip(&request.line_items) {
            assert_eq!(wire.price_data.product_data.name, item.name);
            assert_eq!(wire.price_data.product_data.images, vec![item.image.clone()]);
            assert_eq!(wire.price_data.unit_amount, item.unit_amount.amount_minor);
            assert_eq!(wire.price_data.currency, "usd");
            assert_eq!(wire.quantity, item.quantity);
        }
    }

    #[test]
    fn test_payload_json_shape() {
        let payload = SessionPayload::from_request(&request());
        let json = serde_json::to_value(&payload).unwrap();

        assert_eq!(json["mode"], "payment");
        assert_eq!(json["line_items"][0]["quantity"], 2);
        assert_eq!(json["line_items"][0]["price_data"]["unit_amount"], 1000);
        assert_eq!(
            json["line_items"][1]["price_data"]["product_data"]["name"],
            "Product b"
        );
        assert_eq!(
            json["success_url"],
            "http://localhost:3000/checkout/success"
        );
    }

    #[test]
    fn test_response_parses() {
        let created: SessionCreated = serde_json::from_str(
            r#"{ "id": "cs_live_42", "url": "https://pay.example.com/s/cs_live_42", "object": "checkout.session" }"#,
        )
        .unwrap();
        assert_eq!(created.id, "cs_live_42");
        assert_eq!(created.url, "https://pay.example.com/s/cs_live_42");
    }
}
