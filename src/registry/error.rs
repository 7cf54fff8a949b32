//! Delivery error types
//!
//! Error types for a single subscriber callback. A failing callback never
//! aborts a fan-out; it is collected into a [`DeliveryFailure`] instead.

use crate::subscriber::SubscriberId;

/// Error returned by a subscriber callback or its delivery sink
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryError {
    /// The sink refused the notification
    Rejected(String),
    /// The recipient could not be reached
    Unreachable {
        /// Recipient address
        address: String,
        /// Reason reported by the sink
        reason: String,
    },
    /// The sink is no longer accepting deliveries
    SinkClosed,
}

impl std::fmt::Display for DeliveryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeliveryError::Rejected(reason) => write!(f, "Delivery rejected: {}", reason),
            DeliveryError::Unreachable { address, reason } => {
                write!(f, "Recipient unreachable: {} ({})", address, reason)
            }
            DeliveryError::SinkClosed => write!(f, "Delivery sink closed"),
        }
    }
}

impl std::error::Error for DeliveryError {}

/// A failed notification for one subscriber during a fan-out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryFailure {
    /// Subscriber whose callback failed
    pub subscriber: SubscriberId,
    /// Human-readable subscriber label
    pub label: String,
    /// Error returned by the callback
    pub error: DeliveryError,
}

impl std::fmt::Display for DeliveryFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}]: {}", self.label, self.subscriber, self.error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            DeliveryError::Rejected("quota".into()).to_string(),
            "Delivery rejected: quota"
        );
        assert_eq!(
            DeliveryError::Unreachable {
                address: "+7-777-123-4567".into(),
                reason: "no signal".into(),
            }
            .to_string(),
            "Recipient unreachable: +7-777-123-4567 (no signal)"
        );
        assert_eq!(DeliveryError::SinkClosed.to_string(), "Delivery sink closed");
    }

    #[test]
    fn test_failure_display() {
        let failure = DeliveryFailure {
            subscriber: SubscriberId::from_raw(7),
            label: "SMSSubscriber(+1)".into(),
            error: DeliveryError::SinkClosed,
        };
        assert_eq!(
            failure.to_string(),
            "SMSSubscriber(+1) [#7]: Delivery sink closed"
        );
    }
}
