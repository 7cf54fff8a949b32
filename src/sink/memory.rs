//! In-memory sink
//!
//! Records every delivery so it can be inspected later. Recipients can be
//! marked as failing to simulate an unreachable delivery channel.

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::registry::DeliveryError;

use super::{Delivery, DeliverySink};

#[derive(Debug, Default)]
struct Inner {
    deliveries: Vec<Delivery>,
    failing: HashSet<String>,
    closed: bool,
}

/// Sink that stores deliveries in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    inner: Mutex<Inner>,
}

impl MemorySink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Make every delivery to `recipient` fail with `DeliveryError::Unreachable`
    pub fn fail_for(&self, recipient: impl Into<String>) {
        self.lock().failing.insert(recipient.into());
    }

    /// Reject all further deliveries with `DeliveryError::SinkClosed`
    pub fn close(&self) {
        self.lock().closed = true;
    }

    /// Snapshot of recorded deliveries, oldest first
    pub fn deliveries(&self) -> Vec<Delivery> {
        self.lock().deliveries.clone()
    }

    /// Recipients of recorded deliveries, oldest first
    pub fn recipients(&self) -> Vec<String> {
        self.lock()
            .deliveries
            .iter()
            .map(|d| d.recipient.clone())
            .collect()
    }

    /// Number of recorded deliveries
    pub fn len(&self) -> usize {
        self.lock().deliveries.len()
    }

    /// Check if nothing was recorded
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Forget recorded deliveries
    pub fn clear(&self) {
        self.lock().deliveries.clear();
    }
}

impl DeliverySink for MemorySink {
    fn deliver(&self, delivery: &Delivery) -> Result<(), DeliveryError> {
        let mut inner = self.lock();

        if inner.closed {
            return Err(DeliveryError::SinkClosed);
        }
        if inner.failing.contains(&delivery.recipient) {
            return Err(DeliveryError::Unreachable {
                address: delivery.recipient.clone(),
                reason: "recipient marked as failing".into(),
            });
        }

        inner.deliveries.push(delivery.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::Medium;

    #[test]
    fn test_records_in_order() {
        let sink = MemorySink::new();
        assert!(sink.is_empty());

        sink.deliver(&Delivery::new(Medium::Email, "a", "1")).unwrap();
        sink.deliver(&Delivery::new(Medium::Sms, "b", "2")).unwrap();

        assert_eq!(sink.len(), 2);
        assert_eq!(sink.recipients(), vec!["a", "b"]);
        assert_eq!(sink.deliveries()[1].body, "2");

        sink.clear();
        assert!(sink.is_empty());
    }

    #[test]
    fn test_fail_for_recipient() {
        let sink = MemorySink::new();
        sink.fail_for("bob_dev");

        let result = sink.deliver(&Delivery::new(Medium::Push, "bob_dev", "x"));
        assert!(matches!(result, Err(DeliveryError::Unreachable { .. })));
        assert!(sink.is_empty());

        // Other recipients are unaffected
        sink.deliver(&Delivery::new(Medium::Push, "carol", "x")).unwrap();
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn test_closed_sink() {
        let sink = MemorySink::new();
        sink.close();

        let result = sink.deliver(&Delivery::new(Medium::Email, "a", "1"));
        assert_eq!(result, Err(DeliveryError::SinkClosed));
    }
}
