//! Subscriber callbacks
//!
//! A subscriber is anything that implements [`Subscriber`]. The channel only
//! ever sees subscribers through a [`SubscriberHandle`], which gives each one
//! a process-unique identity. Two handles are the same subscriber iff they
//! carry the same [`SubscriberId`]; the configuration of the subscriber
//! (address, username, ...) plays no part in that comparison.
//!
//! Three delivery variants are provided:
//!
//! - [`EmailSubscriber`] - email address
//! - [`PushSubscriber`] - mobile app username
//! - [`SmsSubscriber`] - phone number

pub mod email;
pub mod push;
pub mod sms;

pub use email::EmailSubscriber;
pub use push::PushSubscriber;
pub use sms::SmsSubscriber;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::registry::{DeliveryError, Notification};

/// Callback invoked by a channel for every published upload
pub trait Subscriber: Send + Sync {
    /// Handle a notification
    ///
    /// Returning an error does not stop the channel from notifying the
    /// remaining subscribers.
    fn update(&self, notification: &Notification<'_>) -> std::result::Result<(), DeliveryError>;

    /// Human-readable label used in logs and confirmation events
    fn label(&self) -> String;
}

static NEXT_SUBSCRIBER_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique subscriber identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriberId(u64);

impl SubscriberId {
    fn next() -> Self {
        Self(NEXT_SUBSCRIBER_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Wrap a raw id
    pub fn from_raw(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw id
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for SubscriberId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Shared handle to a subscriber with identity-based equality
///
/// Cloning a handle yields the same subscriber. The channel holds a clone,
/// the caller keeps its own and uses it to unsubscribe later.
#[derive(Clone)]
pub struct SubscriberHandle {
    id: SubscriberId,
    inner: Arc<dyn Subscriber>,
}

impl SubscriberHandle {
    /// Wrap a subscriber, assigning it a fresh identity
    pub fn new<S: Subscriber + 'static>(subscriber: S) -> Self {
        Self {
            id: SubscriberId::next(),
            inner: Arc::new(subscriber),
        }
    }

    /// Subscriber identity
    pub fn id(&self) -> SubscriberId {
        self.id
    }

    /// Subscriber label
    pub fn label(&self) -> String {
        self.inner.label()
    }

    /// Invoke the subscriber callback
    pub fn update(&self, notification: &Notification<'_>) -> std::result::Result<(), DeliveryError> {
        self.inner.update(notification)
    }
}

impl PartialEq for SubscriberHandle {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for SubscriberHandle {}

impl std::fmt::Debug for SubscriberHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubscriberHandle")
            .field("id", &self.id)
            .field("label", &self.inner.label())
            .finish()
    }
}

impl std::fmt::Display for SubscriberHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.inner.label())
    }
}

/// Reject empty or whitespace-only addresses
pub(crate) fn validate_address(kind: &'static str, value: String) -> Result<String> {
    if value.trim().is_empty() {
        return Err(Error::InvalidAddress { kind, value });
    }
    Ok(value)
}
