//! Payment provider boundary for Shopfront.
//!
//! The provider owns payment processing: it computes the authoritative
//! total, handles tax and currency, and hosts the payment page. This
//! crate only creates checkout sessions:
//!
//! - **Config**: environment-driven provider credentials and the base URL
//!   the redirect destinations are built from
//! - **Client**: the [`PaymentGateway`] trait and the reqwest-backed
//!   [`HostedPaymentClient`]
//! - **Mock**: a deterministic in-process provider for tests and offline
//!   development
//!
//! A failed session-creation call is terminal for that checkout attempt;
//! there is no retry policy.

pub mod client;
pub mod config;
pub mod error;
pub mod mock;

mod wire;

pub use client::{HostedPaymentClient, PaymentGateway};
pub use config::GatewayConfig;
pub use error::GatewayError;
pub use mock::MockGateway;
