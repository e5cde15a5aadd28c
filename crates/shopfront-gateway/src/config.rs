//! Gateway configuration from the environment.

use crate::error::GatewayError;
use shopfront_commerce::checkout::RedirectUrls;
use std::env;

/// Configuration for the payment provider boundary.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Secret credential for the payment provider. Never logged.
    pub secret_key: String,
    /// Session-creation endpoint of the provider.
    pub session_endpoint: String,
    /// Public base URL of this application; the success and cancel
    /// redirect destinations are built from it.
    pub base_url: String,
}

impl GatewayConfig {
    /// Load configuration from the environment, reading a `.env` file if
    /// present.
    ///
    /// `SHOPFRONT_PAYMENT_SECRET` is required; the endpoint and base URL
    /// fall back to development defaults.
    pub fn from_env() -> Result<Self, GatewayError> {
        dotenvy::dotenv().ok();

        let secret_key = env::var("SHOPFRONT_PAYMENT_SECRET").map_err(|_| {
            GatewayError::Config("missing environment variable 'SHOPFRONT_PAYMENT_SECRET'".into())
        })?;
        let session_endpoint = env::var("SHOPFRONT_PAYMENT_ENDPOINT")
            .unwrap_or_else(|_| "https://api.payments.example.com/v1/checkout/sessions".into());
        let base_url =
            env::var("SHOPFRONT_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".into());

        tracing::info!(%session_endpoint, %base_url, "gateway configuration loaded");

        Ok(Self {
            secret_key,
            session_endpoint,
            base_url,
        })
    }

    /// The two fixed redirect destinations after hosted payment.
    pub fn redirect_urls(&self) -> RedirectUrls {
        let base = self.base_url.trim_end_matches('/');
        RedirectUrls {
            success_url: format!("{base}/checkout/success"),
            cancel_url: format!("{base}/checkout/cancel"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(base_url: &str) -> GatewayConfig {
        GatewayConfig {
            secret_key: "sk_test_1".to_string(),
            session_endpoint: "https://api.payments.example.com/v1/checkout/sessions".to_string(),
            base_url: base_url.to_string(),
        }
    }

    #[test]
    fn test_redirect_urls_from_base() {
        let urls = config("https://shop.example.com").redirect_urls();
        assert_eq!(urls.success_url, "https://shop.example.com/checkout/success");
        assert_eq!(urls.cancel_url, "https://shop.example.com/checkout/cancel");
    }

    #[test]
    fn test_redirect_urls_trim_trailing_slash() {
        let urls = config("http://localhost:3000/").redirect_urls();
        assert_eq!(urls.success_url, "http://localhost:3000/checkout/success");
    }
}
