//! Newtype IDs for type-safe identifiers.
//!
//! Using newtypes prevents accidentally mixing up different ID types,
//! e.g., passing a ProductId where a CheckoutSessionId is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate newtype ID structs.
macro_rules! define_id {
    ($name:ident) => {
        /// A unique identifier.
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from a string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the ID as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Check whether the ID is the empty string.
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }

            /// Consume and return the inner string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

// Product ids come from the catalog; session ids come from the payment
// provider. Neither is generated locally.
define_id!(ProductId);
define_id!(CheckoutSessionId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let id = ProductId::new("sneaker-fall-01");
        assert_eq!(id.as_str(), "sneaker-fall-01");
        assert!(!id.is_empty());
    }

    #[test]
    fn test_empty_id() {
        let id = ProductId::new("");
        assert!(id.is_empty());
    }

    #[test]
    fn test_id_from_string() {
        let id: ProductId = "sneaker-fall-02".into();
        assert_eq!(id.as_str(), "sneaker-fall-02");
    }

    #[test]
    fn test_id_display() {
        let id = CheckoutSessionId::new("cs_test_123");
        assert_eq!(format!("{}", id), "cs_test_123");
    }

    #[test]
    fn test_id_equality() {
        let id1 = ProductId::new("same");
        let id2 = ProductId::new("same");
        let id3 = ProductId::new("different");

        assert_eq!(id1, id2);
        assert_ne!(id1, id3);
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let id = ProductId::new("sneaker-fall-01");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"sneaker-fall-01\"");
    }
}
