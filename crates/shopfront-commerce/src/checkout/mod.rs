//! Checkout module.
//!
//! Translates a cart snapshot into the session request handed to the
//! payment provider.

mod session;

pub use session::{CheckoutSession, CheckoutSessionRequest, RedirectUrls, SessionLineItem};
