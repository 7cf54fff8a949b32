//! Delivery sinks
//!
//! Subscribers never perform I/O themselves. Each one is built with a
//! [`DeliverySink`] that receives a rendered [`Delivery`] and is responsible
//! for actually sending it somewhere:
//!
//! - [`TracingSink`] emits every delivery as a structured `tracing` event
//! - [`MemorySink`] records deliveries in memory, useful for tests

pub mod log;
pub mod memory;

pub use log::TracingSink;
pub use memory::MemorySink;

use crate::registry::DeliveryError;

/// Medium a delivery is sent over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Medium {
    /// Email message
    Email,
    /// Mobile app push notification
    Push,
    /// Text message
    Sms,
}

impl std::fmt::Display for Medium {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Medium::Email => f.write_str("email"),
            Medium::Push => f.write_str("push"),
            Medium::Sms => f.write_str("sms"),
        }
    }
}

/// A rendered notification ready to be sent to one recipient
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery {
    /// Medium to deliver over
    pub medium: Medium,
    /// Recipient address (email, username, or phone number)
    pub recipient: String,
    /// Message text
    pub body: String,
}

impl Delivery {
    /// Create a delivery
    pub fn new(medium: Medium, recipient: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            medium,
            recipient: recipient.into(),
            body: body.into(),
        }
    }
}

/// Destination for rendered deliveries
///
/// Implementations must be cheap to call; the channel invokes them
/// synchronously from inside the fan-out loop.
pub trait DeliverySink: Send + Sync {
    /// Send one delivery
    fn deliver(&self, delivery: &Delivery) -> Result<(), DeliveryError>;
}
