//! Outcome of a single fan-out

use super::error::DeliveryFailure;
use super::upload::LatestUpload;

/// Result of notifying every subscriber once
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishReport {
    /// Upload that was delivered
    pub upload: LatestUpload,
    /// Number of subscriber callbacks invoked
    pub notified: usize,
    /// Callbacks that returned an error, in notification order
    pub failures: Vec<DeliveryFailure>,
}

impl PublishReport {
    pub(super) fn new(upload: LatestUpload) -> Self {
        Self {
            upload,
            notified: 0,
            failures: Vec::new(),
        }
    }

    /// Check that every callback succeeded
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Number of callbacks that completed without error
    pub fn delivered(&self) -> usize {
        self.notified.saturating_sub(self.failures.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::DeliveryError;
    use crate::subscriber::SubscriberId;

    #[test]
    fn test_empty_report() {
        let report = PublishReport::new(LatestUpload::Nothing);
        assert!(report.is_success());
        assert_eq!(report.notified, 0);
        assert_eq!(report.delivered(), 0);
    }

    #[test]
    fn test_report_with_failure() {
        let mut report = PublishReport::new(LatestUpload::Title("t".into()));
        report.notified = 3;
        report.failures.push(DeliveryFailure {
            subscriber: SubscriberId::from_raw(2),
            label: "x".into(),
            error: DeliveryError::SinkClosed,
        });

        assert!(!report.is_success());
        assert_eq!(report.delivered(), 2);
    }

    #[test]
    fn test_delivered_more_failures_than_notified() {
        let mut report = PublishReport::new(LatestUpload::Nothing);
        report.failures.push(DeliveryFailure {
            subscriber: SubscriberId::from_raw(1),
            label: "x".into(),
            error: DeliveryError::SinkClosed,
        });

        assert_eq!(report.notified, 0);
        assert_eq!(report.delivered(), 0);
    }
}
