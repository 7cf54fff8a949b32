//! Counters kept by a channel

/// Channel-level statistics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChannelStats {
    /// Number of publish calls
    pub publishes: u64,
    /// Number of subscriber callbacks invoked
    pub notifications: u64,
    /// Number of callbacks that returned an error
    pub failures: u64,
    /// Number of subscriptions that actually added a subscriber
    pub subscribes: u64,
    /// Number of unsubscriptions that actually removed a subscriber
    pub unsubscribes: u64,
}

impl ChannelStats {
    /// Create zeroed counters
    pub fn new() -> Self {
        Self::default()
    }

    /// Fraction of callbacks that succeeded, 1.0 when nothing was sent
    pub fn success_rate(&self) -> f64 {
        if self.notifications == 0 {
            1.0
        } else {
            (self.notifications - self.failures) as f64 / self.notifications as f64
        }
    }
}
