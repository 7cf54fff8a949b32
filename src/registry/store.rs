//! Channel implementation
//!
//! The notifier registry: an ordered list of subscribers plus the latest
//! published upload. Publishing overwrites the upload and then hands it to
//! every subscriber, in the order they subscribed.

use tokio::sync::mpsc;

use crate::stats::ChannelStats;
use crate::subscriber::SubscriberHandle;

use super::config::RegistryConfig;
use super::error::DeliveryFailure;
use super::event::ChannelEvent;
use super::report::PublishReport;
use super::upload::{ChannelName, LatestUpload, Notification};

/// Something subscribers can attach to and be notified by
pub trait Publisher {
    /// Identity of the publisher
    fn name(&self) -> &ChannelName;

    /// Add a subscriber unless it is already present
    ///
    /// Returns `true` if the subscriber was added.
    fn subscribe(&mut self, subscriber: &SubscriberHandle) -> bool;

    /// Remove a subscriber if present
    ///
    /// Returns `true` if the subscriber was removed.
    fn unsubscribe(&mut self, subscriber: &SubscriberHandle) -> bool;

    /// Notify every current subscriber of the latest state
    fn notify(&mut self) -> PublishReport;
}

/// A publishing channel and its subscribers
///
/// Not synchronized; wrap it in a [`SharedChannel`](super::SharedChannel)
/// to use it from several tasks.
pub struct Channel {
    /// Channel identity, fixed at construction
    name: ChannelName,

    /// Subscribers in notification order, never containing duplicates
    subscribers: Vec<SubscriberHandle>,

    /// Payload of the most recent publish
    latest: LatestUpload,

    /// Counters
    stats: ChannelStats,

    /// Optional sink for confirmation events
    events: Option<mpsc::UnboundedSender<ChannelEvent>>,

    /// Configuration
    config: RegistryConfig,
}

impl Channel {
    /// Create a channel with default configuration
    pub fn new(name: impl Into<ChannelName>) -> Self {
        Self::with_config(name, RegistryConfig::default())
    }

    /// Create a channel with custom configuration
    pub fn with_config(name: impl Into<ChannelName>, config: RegistryConfig) -> Self {
        Self {
            name: name.into(),
            subscribers: Vec::with_capacity(config.initial_capacity),
            latest: LatestUpload::Nothing,
            stats: ChannelStats::new(),
            events: None,
            config,
        }
    }

    /// Create a channel that reports confirmation events
    ///
    /// Returns the channel and a receiver for its events. Events are sent
    /// synchronously; dropping the receiver simply discards them.
    pub fn with_events(
        name: impl Into<ChannelName>,
        config: RegistryConfig,
    ) -> (Self, mpsc::UnboundedReceiver<ChannelEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut channel = Self::with_config(name, config);
        channel.events = Some(tx);
        (channel, rx)
    }

    /// Channel name
    pub fn name(&self) -> &ChannelName {
        &self.name
    }

    /// Latest published upload
    pub fn latest(&self) -> &LatestUpload {
        &self.latest
    }

    /// Get the channel configuration
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Channel counters
    pub fn stats(&self) -> &ChannelStats {
        &self.stats
    }

    /// Number of current subscribers
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Check whether a subscriber is currently subscribed
    pub fn is_subscribed(&self, subscriber: &SubscriberHandle) -> bool {
        self.subscribers.contains(subscriber)
    }

    /// Current subscribers in notification order
    pub fn subscribers(&self) -> impl Iterator<Item = &SubscriberHandle> {
        self.subscribers.iter()
    }

    /// Subscribe to the channel
    ///
    /// Subscribing twice is a no-op. Returns `true` if the subscriber was
    /// added, in which case a confirmation event is emitted.
    pub fn subscribe(&mut self, subscriber: &SubscriberHandle) -> bool {
        if self.is_subscribed(subscriber) {
            tracing::debug!(
                channel = %self.name,
                subscriber = %subscriber.id(),
                "Already subscribed"
            );
            return false;
        }

        self.subscribers.push(subscriber.clone());
        self.stats.subscribes += 1;

        let label = subscriber.label();
        tracing::info!(
            channel = %self.name,
            subscriber = %subscriber.id(),
            label = %label,
            subscribers = self.subscribers.len(),
            "Subscriber added"
        );
        self.emit(ChannelEvent::Subscribed {
            channel: self.name.clone(),
            subscriber: subscriber.id(),
            label,
        });

        true
    }

    /// Unsubscribe from the channel
    ///
    /// Removing a subscriber that is not present is a no-op. Returns `true`
    /// if the subscriber was removed.
    pub fn unsubscribe(&mut self, subscriber: &SubscriberHandle) -> bool {
        let Some(pos) = self.subscribers.iter().position(|s| s == subscriber) else {
            tracing::debug!(
                channel = %self.name,
                subscriber = %subscriber.id(),
                "Not subscribed"
            );
            return false;
        };

        // Keep notification order for the remaining subscribers
        let removed = self.subscribers.remove(pos);
        self.stats.unsubscribes += 1;

        let label = removed.label();
        tracing::info!(
            channel = %self.name,
            subscriber = %removed.id(),
            label = %label,
            subscribers = self.subscribers.len(),
            "Subscriber removed"
        );
        self.emit(ChannelEvent::Unsubscribed {
            channel: self.name.clone(),
            subscriber: removed.id(),
            label,
        });

        true
    }

    /// Publish a new upload and notify every subscriber
    pub fn publish(&mut self, title: impl Into<String>) -> PublishReport {
        let title = title.into();
        self.stats.publishes += 1;

        tracing::info!(
            channel = %self.name,
            title = %title,
            subscribers = self.subscribers.len(),
            "Upload published"
        );
        self.emit(ChannelEvent::Published {
            channel: self.name.clone(),
            title: title.clone(),
            subscribers: self.subscribers.len(),
        });

        self.latest = LatestUpload::Title(title);
        self.notify()
    }

    /// Notify every subscriber of the latest upload
    ///
    /// Subscribers are called one after another in subscription order. A
    /// callback error is recorded in the report and does not prevent the
    /// remaining subscribers from being notified. Before the first publish
    /// subscribers receive `LatestUpload::Nothing`.
    pub fn notify(&mut self) -> PublishReport {
        let mut report = PublishReport::new(self.latest.clone());
        let notification = Notification::new(&self.name, &self.latest);

        for subscriber in &self.subscribers {
            report.notified += 1;
            self.stats.notifications += 1;

            match subscriber.update(&notification) {
                Ok(()) => {
                    if self.config.log_deliveries {
                        tracing::debug!(
                            channel = %self.name,
                            subscriber = %subscriber.id(),
                            "Subscriber notified"
                        );
                    }
                }
                Err(error) => {
                    tracing::warn!(
                        channel = %self.name,
                        subscriber = %subscriber.id(),
                        error = %error,
                        "Subscriber notification failed"
                    );
                    self.stats.failures += 1;
                    report.failures.push(DeliveryFailure {
                        subscriber: subscriber.id(),
                        label: subscriber.label(),
                        error,
                    });
                }
            }
        }

        report
    }

    fn emit(&self, event: ChannelEvent) {
        if !self.config.emit_confirmations {
            return;
        }
        if let Some(ref tx) = self.events {
            // Receiver may have been dropped
            let _ = tx.send(event);
        }
    }
}

impl Publisher for Channel {
    fn name(&self) -> &ChannelName {
        Channel::name(self)
    }

    fn subscribe(&mut self, subscriber: &SubscriberHandle) -> bool {
        Channel::subscribe(self, subscriber)
    }

    fn unsubscribe(&mut self, subscriber: &SubscriberHandle) -> bool {
        Channel::unsubscribe(self, subscriber)
    }

    fn notify(&mut self) -> PublishReport {
        Channel::notify(self)
    }
}

impl std::fmt::Debug for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Channel")
            .field("name", &self.name)
            .field("subscribers", &self.subscribers)
            .field("latest", &self.latest)
            .field("stats", &self.stats)
            .finish()
    }
}
