//! Confirmation events emitted by a channel

use crate::subscriber::SubscriberId;

use super::upload::ChannelName;

/// Events emitted when a channel's subscriptions or content change
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChannelEvent {
    /// A subscriber was added
    Subscribed {
        channel: ChannelName,
        subscriber: SubscriberId,
        label: String,
    },

    /// A subscriber was removed
    Unsubscribed {
        channel: ChannelName,
        subscriber: SubscriberId,
        label: String,
    },

    /// A new upload was published
    Published {
        channel: ChannelName,
        title: String,
        /// Number of subscribers at the time of publishing
        subscribers: usize,
    },
}

impl ChannelEvent {
    /// Channel the event belongs to
    pub fn channel(&self) -> &ChannelName {
        match self {
            ChannelEvent::Subscribed { channel, .. }
            | ChannelEvent::Unsubscribed { channel, .. }
            | ChannelEvent::Published { channel, .. } => channel,
        }
    }
}

impl std::fmt::Display for ChannelEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChannelEvent::Subscribed { channel, label, .. } => {
                write!(f, "{} subscribed to {}", label, channel)
            }
            ChannelEvent::Unsubscribed { channel, label, .. } => {
                write!(f, "{} unsubscribed from {}", label, channel)
            }
            ChannelEvent::Published { channel, title, .. } => {
                write!(f, "{} uploaded: '{}'", channel, title)
            }
        }
    }
}
