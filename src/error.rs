//! Crate-level error types

use crate::registry::DeliveryError;

/// Error type for subscriber construction and delivery
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A subscriber was created with an unusable address
    InvalidAddress {
        /// Kind of address (e.g., "email")
        kind: &'static str,
        /// Value that was rejected
        value: String,
    },
    /// A delivery sink refused a notification
    Delivery(DeliveryError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidAddress { kind, value } => {
                write!(f, "Invalid {} address: {:?}", kind, value)
            }
            Error::Delivery(err) => write!(f, "Delivery failed: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Delivery(err) => Some(err),
            Error::InvalidAddress { .. } => None,
        }
    }
}

impl From<DeliveryError> for Error {
    fn from(err: DeliveryError) -> Self {
        Error::Delivery(err)
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn test_invalid_address_display() {
        let err = Error::InvalidAddress {
            kind: "email",
            value: "  ".into(),
        };
        assert_eq!(err.to_string(), "Invalid email address: \"  \"");
        assert!(err.source().is_none());
    }

    #[test]
    fn test_delivery_conversion() {
        let err: Error = DeliveryError::SinkClosed.into();
        assert!(matches!(err, Error::Delivery(DeliveryError::SinkClosed)));
        assert!(err.source().is_some());
    }
}
