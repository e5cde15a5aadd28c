//! In-process payment provider double.

use crate::client::PaymentGateway;
use crate::error::GatewayError;
use async_trait::async_trait;
use shopfront_commerce::checkout::{CheckoutSession, CheckoutSessionRequest};
use shopfront_commerce::CheckoutSessionId;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::info;

/// Deterministic provider double for tests and offline development.
///
/// Applies the same front-door rejections the live provider does: an
/// empty line list or a negative unit amount is a 400, everything else
/// yields a session.
#[derive(Debug, Default)]
pub struct MockGateway {
    counter: AtomicU64,
}

impl MockGateway {
    /// Create a new mock provider.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PaymentGateway for MockGateway {
    async fn create_session(
        &self,
        request: &CheckoutSessionRequest,
    ) -> Result<CheckoutSession, GatewayError> {
        if request.line_items.is_empty() {
            return Err(GatewayError::Rejected {
                status: 400,
                message: "line_items must not be empty".to_string(),
            });
        }
        if let Some(item) = request
            .line_items
            .iter()
            .find(|i| i.unit_amount.is_negative())
        {
            return Err(GatewayError::Rejected {
                status: 400,
                message: format!("negative unit_amount for '{}'", item.name),
            });
        }

        let n = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        let id = format!("mock_cs_{n}");
        info!(session_id = %id, "mock checkout session created");

        Ok(CheckoutSession {
            url: format!("https://pay.example.test/session/{id}"),
            id: CheckoutSessionId::new(id),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopfront_commerce::cart::{Cart, CartLine};
    use shopfront_commerce::checkout::{RedirectUrls, SessionLineItem};
    use shopfront_commerce::{Currency, Money, ProductId};

    fn redirects() -> RedirectUrls {
        RedirectUrls {
            success_url: "http://localhost:3000/checkout/success".to_string(),
            cancel_url: "http://localhost:3000/checkout/cancel".to_string(),
        }
    }

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
        CheckoutSessionRequest::from_cart(&cart, redirects()).unwrap()
    }

    #[tokio::test]
    async fn test_creates_distinct_sessions() {
        let gateway = MockGateway::new();
        let first = gateway.create_session(&request()).await.unwrap();
        let second = gateway.create_session(&request()).await.unwrap();

        assert_ne!(first.id, second.id);
        assert!(first.url.ends_with(first.id.as_str()));
    }

    #[tokio::test]
    async fn test_rejects_empty_line_items() {
        let gateway = MockGateway::new();
        // Build a request with no lines directly; the domain constructor
        // refuses to, which is the point of the double check.
        let request = CheckoutSessionRequest {
            currency: Currency::USD,
            line_items: Vec::new(),
            subtotal: Money::zero(Currency::USD),
            success_url: redirects().success_url,
            cancel_url: redirects().cancel_url,
        };

        let result = gateway.create_session(&request).await;
        assert!(matches!(
            result,
            Err(GatewayError::Rejected { status: 400, .. })
        ));
    }

    #[tokio::test]
    async fn test_rejects_negative_unit_amount() {
        let gateway = MockGateway::new();
        let request = CheckoutSessionRequest {
            currency: Currency::USD,
            line_items: vec![SessionLineItem {
                name: "Broken".to_string(),
                image: "/images/broken.jpg".to_string(),
                unit_amount: Money::new(-500, Currency::USD),
                quantity: 1,
            }],
            subtotal: Money::new(-500, Currency::USD),
            success_url: redirects().success_url,
            cancel_url: redirects().cancel_url,
        };

        let result = gateway.create_session(&request).await;
        assert!(matches!(
            result,
            Err(GatewayError::Rejected { status: 400, .. })
        ));
    }

    #[tokio::test]
    async fn test_trait_object_usable() {
        let gateway: Box<dyn PaymentGateway> = Box::new(MockGateway::new());
        let session = gateway.create_session(&request()).await.unwrap();
        assert_eq!(session.id.as_str(), "mock_cs_1");
    }
}
