//! Newtype IDs for type-safe identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate newtype ID structs.
macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from a string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Generate a new unique ID (UUID v4).
            pub fn generate() -> Self {
                Self(uuid::Uuid::new_v4().to_string())
            }

            /// Get the ID as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Whether the ID is empty or whitespace.
            pub fn is_blank(&self) -> bool {
                self.0.trim().is_empty()
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

define_id!(
    /// Identity of a product, and of the line item that holds it.
    ProductId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let id = ProductId::new("ring-01");
        assert_eq!(id.as_str(), "ring-01");
    }

    #[test]
    fn test_id_generation_is_unique() {
        let ids: std::collections::HashSet<_> =
            (0..1000).map(|_| ProductId::generate()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_generated_id_is_uuid() {
        let id = ProductId::generate();
        assert!(uuid::Uuid::parse_str(id.as_str()).is_ok());
    }

    #[test]
    fn test_blank() {
        assert!(ProductId::new("  ").is_blank());
        assert!(!ProductId::new("a").is_blank());
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let json = serde_json::to_string(&ProductId::new("a")).unwrap();
        assert_eq!(json, r#""a""#);
    }
}
