//! Email subscriber

use std::sync::Arc;

use crate::error::Result;
use crate::registry::{DeliveryError, Notification};
use crate::sink::{Delivery, DeliverySink, Medium};

use super::{validate_address, Subscriber};

/// Subscriber notified by email
pub struct EmailSubscriber {
    address: String,
    sink: Arc<dyn DeliverySink>,
}

impl EmailSubscriber {
    /// Create an email subscriber
    ///
    /// Fails with `Error::InvalidAddress` if the address is blank.
    pub fn new(address: impl Into<String>, sink: Arc<dyn DeliverySink>) -> Result<Self> {
        Ok(Self {
            address: validate_address("email", address.into())?,
            sink,
        })
    }

    /// Email address
    pub fn address(&self) -> &str {
        &self.address
    }
}

impl Subscriber for EmailSubscriber {
    fn update(&self, notification: &Notification<'_>) -> std::result::Result<(), DeliveryError> {
        let body = format!(
            "'{}' uploaded '{}'",
            notification.channel, notification.upload
        );
        self.sink
            .deliver(&Delivery::new(Medium::Email, self.address.as_str(), body))
    }

    fn label(&self) -> String {
        format!("EmailSubscriber({})", self.address)
    }
}
