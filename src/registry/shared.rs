//! Shared channel
//!
//! Wraps a [`Channel`] in an `Arc<RwLock<_>>` so it can be cloned into
//! several tasks. Every mutation and every fan-out holds the write lock, so
//! the subscriber list and the latest upload are never observed half-updated.
//! Subscriber callbacks are still plain synchronous calls.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::stats::ChannelStats;
use crate::subscriber::SubscriberHandle;

use super::config::RegistryConfig;
use super::report::PublishReport;
use super::store::Channel;
use super::upload::{ChannelName, LatestUpload};

/// Cloneable, task-safe handle to a channel
#[derive(Clone)]
pub struct SharedChannel {
    inner: Arc<RwLock<Channel>>,
    name: ChannelName,
}

impl SharedChannel {
    /// Create a shared channel with default configuration
    pub fn new(name: impl Into<ChannelName>) -> Self {
        Self::from_channel(Channel::new(name))
    }

    /// Create a shared channel with custom configuration
    pub fn with_config(name: impl Into<ChannelName>, config: RegistryConfig) -> Self {
        Self::from_channel(Channel::with_config(name, config))
    }

    /// Share an existing channel
    pub fn from_channel(channel: Channel) -> Self {
        let name = channel.name().clone();
        Self {
            inner: Arc::new(RwLock::new(channel)),
            name,
        }
    }

    /// Channel name
    pub fn name(&self) -> &ChannelName {
        &self.name
    }

    /// Subscribe to the channel, see [`Channel::subscribe`]
    pub async fn subscribe(&self, subscriber: &SubscriberHandle) -> bool {
        self.inner.write().await.subscribe(subscriber)
    }

    /// Unsubscribe from the channel, see [`Channel::unsubscribe`]
    pub async fn unsubscribe(&self, subscriber: &SubscriberHandle) -> bool {
        self.inner.write().await.unsubscribe(subscriber)
    }

    /// Publish a new upload, see [`Channel::publish`]
    pub async fn publish(&self, title: impl Into<String>) -> PublishReport {
        let title = title.into();
        self.inner.write().await.publish(title)
    }

    /// Re-send the latest upload, see [`Channel::notify`]
    pub async fn notify(&self) -> PublishReport {
        self.inner.write().await.notify()
    }

    /// Check whether a subscriber is currently subscribed
    pub async fn is_subscribed(&self, subscriber: &SubscriberHandle) -> bool {
        self.inner.read().await.is_subscribed(subscriber)
    }

    /// Number of current subscribers
    pub async fn subscriber_count(&self) -> usize {
        self.inner.read().await.subscriber_count()
    }

    /// Latest published upload
    pub async fn latest(&self) -> LatestUpload {
        self.inner.read().await.latest().clone()
    }

    /// Snapshot of the channel counters
    pub async fn stats(&self) -> ChannelStats {
        self.inner.read().await.stats().clone()
    }
}

impl std::fmt::Debug for SharedChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedChannel")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::MemorySink;
    use crate::subscriber::{EmailSubscriber, SmsSubscriber};

    fn email(address: &str, sink: &Arc<MemorySink>) -> SubscriberHandle {
        SubscriberHandle::new(EmailSubscriber::new(address, sink.clone()).unwrap())
    }

    #[tokio::test]
    async fn test_shared_publish() {
        let sink = Arc::new(MemorySink::new());
        let channel = SharedChannel::new("TechMaster");
        let alice = email("alice@example.com", &sink);

        assert!(channel.subscribe(&alice).await);
        assert!(!channel.subscribe(&alice).await);

        let report = channel.publish("Video").await;
        assert_eq!(report.notified, 1);
        assert_eq!(channel.latest().await.title(), Some("Video"));
        assert_eq!(sink.len(), 1);

        assert!(channel.unsubscribe(&alice).await);
        assert_eq!(channel.subscriber_count().await, 0);
        assert_eq!(channel.stats().await.publishes, 1);
    }

    #[tokio::test]
    async fn test_concurrent_subscribers() {
        let sink = Arc::new(MemorySink::new());
        let channel = SharedChannel::new("TechMaster");

        let mut tasks = Vec::new();
        for i in 0..16 {
            let channel = channel.clone();
            let handle = email(&format!("user{}@example.com", i), &sink);
            tasks.push(tokio::spawn(async move {
                // Duplicate subscribes from the same task must collapse
                channel.subscribe(&handle).await;
                channel.subscribe(&handle).await;
            }));
        }
        for task in tasks {
            task.await.unwrap();
        }

        assert_eq!(channel.subscriber_count().await, 16);

        let report = channel.publish("Video").await;
        assert_eq!(report.notified, 16);
        assert_eq!(sink.len(), 16);
    }

    #[tokio::test]
    async fn test_from_channel_keeps_state() {
        let sink = Arc::new(MemorySink::new());
        let mut channel = Channel::new("TechMaster");
        let phone = SubscriberHandle::new(SmsSubscriber::new("+1", sink.clone()).unwrap());
        channel.subscribe(&phone);
        channel.publish("Before");

        let shared = SharedChannel::from_channel(channel);
        assert_eq!(shared.name().as_str(), "TechMaster");
        assert!(shared.is_subscribed(&phone).await);
        assert_eq!(shared.latest().await.title(), Some("Before"));

        let report = shared.notify().await;
        assert_eq!(report.upload.title(), Some("Before"));
        assert_eq!(sink.len(), 2);
    }

    #[test]
    fn test_blocking_use() {
        let channel =
            SharedChannel::with_config("TechMaster", RegistryConfig::default().log_deliveries(false));

        let report = tokio_test::block_on(channel.publish("Nobody Watching"));

        assert!(report.is_success());
        assert_eq!(
            tokio_test::block_on(channel.latest()),
            LatestUpload::Title("Nobody Watching".into())
        );
    }
}
