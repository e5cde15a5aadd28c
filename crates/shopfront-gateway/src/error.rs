//! Gateway error types.

use thiserror::Error;

/// Errors from the payment provider boundary.
///
/// Every variant is terminal for the checkout attempt that produced it;
/// the caller reports it and leaves the cart unchanged.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Configuration error (missing or invalid environment).
    #[error("configuration error: {0}")]
    Config(String),

    /// The provider rejected the request (malformed payload, credential
    /// failure).
    #[error("payment provider rejected the request (status {status}): {message}")]
    Rejected { status: u16, message: String },

    /// Network or protocol failure reaching the provider.
    #[error("transport error calling payment provider")]
    Transport(#[from] reqwest::Error),

    /// The provider answered 2xx with a body we could not understand.
    #[error("malformed provider response: {0}")]
    InvalidResponse(String),
}
