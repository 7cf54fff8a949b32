//! Sink that reports deliveries through `tracing`

use crate::registry::DeliveryError;

use super::{Delivery, DeliverySink};

/// Emits each delivery as an `info` event on the `channel_notify::delivery` target
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl TracingSink {
    /// Create a tracing sink
    pub fn new() -> Self {
        Self
    }
}

impl DeliverySink for TracingSink {
    fn deliver(&self, delivery: &Delivery) -> Result<(), DeliveryError> {
        tracing::info!(
            target: "channel_notify::delivery",
            medium = %delivery.medium,
            recipient = %delivery.recipient,
            body = %delivery.body,
            "Notification delivered"
        );
        Ok(())
    }
}
