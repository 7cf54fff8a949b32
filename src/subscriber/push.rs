//! Mobile app push subscriber

use std::sync::Arc;

use crate::error::Result;
use crate::registry::{DeliveryError, Notification};
use crate::sink::{Delivery, DeliverySink, Medium};

use super::{validate_address, Subscriber};

/// Subscriber notified through the mobile app
pub struct PushSubscriber {
    username: String,
    sink: Arc<dyn DeliverySink>,
}

impl PushSubscriber {
    /// Create a push subscriber for an app username
    pub fn new(username: impl Into<String>, sink: Arc<dyn DeliverySink>) -> Result<Self> {
        Ok(Self {
            username: validate_address("username", username.into())?,
            sink,
        })
    }

    /// App username
    pub fn username(&self) -> &str {
        &self.username
    }
}

impl Subscriber for PushSubscriber {
    fn update(&self, notification: &Notification<'_>) -> std::result::Result<(), DeliveryError> {
        let body = format!(
            "New video from {}: '{}'",
            notification.channel, notification.upload
        );
        self.sink
            .deliver(&Delivery::new(Medium::Push, self.username.as_str(), body))
    }

    fn label(&self) -> String {
        format!("MobileAppSubscriber(@{})", self.username)
    }
}
