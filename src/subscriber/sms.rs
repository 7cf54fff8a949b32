//! SMS subscriber

use std::sync::Arc;

use crate::error::Result;
use crate::registry::{DeliveryError, Notification};
use crate::sink::{Delivery, DeliverySink, Medium};

use super::{validate_address, Subscriber};

/// Subscriber notified by text message
pub struct SmsSubscriber {
    phone_number: String,
    sink: Arc<dyn DeliverySink>,
}

impl SmsSubscriber {
    /// Create an SMS subscriber
    pub fn new(phone_number: impl Into<String>, sink: Arc<dyn DeliverySink>) -> Result<Self> {
        Ok(Self {
            phone_number: validate_address("phone", phone_number.into())?,
            sink,
        })
    }

    /// Phone number
    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }
}

impl Subscriber for SmsSubscriber {
    fn update(&self, notification: &Notification<'_>) -> std::result::Result<(), DeliveryError> {
        let body = format!("{}: '{}'", notification.channel, notification.upload);
        self.sink
            .deliver(&Delivery::new(Medium::Sms, self.phone_number.as_str(), body))
    }

    fn label(&self) -> String {
        format!("SMSSubscriber({})", self.phone_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{ChannelName, LatestUpload};
    use crate::sink::MemorySink;

    #[test]
    fn test_sms_delivery() {
        let sink = Arc::new(MemorySink::new());
        let sub = SmsSubscriber::new("+7-777-123-4567", sink.clone()).unwrap();
        let name = ChannelName::new("TechMaster");
        let upload = LatestUpload::Title("Clean Code Principles in Python".into());

        sub.update(&Notification::new(&name, &upload)).unwrap();

        let deliveries = sink.deliveries();
        assert_eq!(deliveries[0].medium, Medium::Sms);
        assert_eq!(
            deliveries[0].body,
            "TechMaster: 'Clean Code Principles in Python'"
        );
        assert_eq!(sub.label(), "SMSSubscriber(+7-777-123-4567)");
        assert_eq!(sub.phone_number(), "+7-777-123-4567");
    }

    #[test]
    fn test_sentinel_upload_is_rendered() {
        let sink = Arc::new(MemorySink::new());
        let sub = SmsSubscriber::new("+1", sink.clone()).unwrap();
        let name = ChannelName::new("TechMaster");
        let upload = LatestUpload::Nothing;

        sub.update(&Notification::new(&name, &upload)).unwrap();

        assert_eq!(sink.deliveries()[0].body, "TechMaster: '<no uploads yet>'");
    }
}
