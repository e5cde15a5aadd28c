//! Session-creation client.

use crate::config::GatewayConfig;
use crate::error::GatewayError;
use crate::wire::{SessionCreated, SessionPayload};
use async_trait::async_trait;
use shopfront_commerce::checkout::{CheckoutSession, CheckoutSessionRequest};
use shopfront_commerce::CheckoutSessionId;
use tracing::{info, instrument};

/// The session-creation seam.
///
/// One outbound call per checkout attempt; implementations must not
/// retry. The live client talks to the hosted provider, the mock stays
/// in-process.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Create a checkout session for the given request.
    async fn create_session(
        &self,
        request: &CheckoutSessionRequest,
    ) -> Result<CheckoutSession, GatewayError>;
}

/// HTTP client for the hosted payment provider.
#[derive(Debug, Clone)]
pub struct HostedPaymentClient {
    config: GatewayConfig,
    http: reqwest::Client,
}

impl HostedPaymentClient {
    /// Create a new client from the given configuration.
    pub fn new(config: GatewayConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl PaymentGateway for HostedPaymentClient {
    #[instrument(
        name = "gateway::create_session",
        skip(self, request),
        fields(line_count = request.line_items.len(), subtotal = %request.subtotal)
    )]
    async fn create_session(
        &self,
        request: &CheckoutSessionRequest,
    ) -> Result<CheckoutSession, GatewayError> {
        let payload = SessionPayload::from_request(request);

        let response = self
            .http
            .post(&self.config.session_endpoint)
            .bearer_auth(&self.config.secret_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(GatewayError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        let created: SessionCreated = response
            .json()
            .await
            .map_err(|e| GatewayError::InvalidResponse(e.to_string()))?;

        info!(session_id = %created.id, "checkout session created");

        Ok(CheckoutSession {
            id: CheckoutSessionId::new(created.id),
            url: created.url,
        })
    }
}
