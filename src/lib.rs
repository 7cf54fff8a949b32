//! In-process publish/subscribe notifier
//!
//! A [`Channel`](registry::Channel) keeps an ordered list of subscribers and,
//! whenever a new upload is published, hands it to every subscriber in the
//! order they joined. Subscribers decide how to deliver it (email, push, SMS)
//! through an injected [`DeliverySink`](sink::DeliverySink).
//!
//! ```
//! use std::sync::Arc;
//!
//! use channel_notify::registry::Channel;
//! use channel_notify::sink::MemorySink;
//! use channel_notify::subscriber::{EmailSubscriber, SubscriberHandle};
//!
//! # fn main() -> channel_notify::Result<()> {
//! let sink = Arc::new(MemorySink::new());
//! let mut channel = Channel::new("TechMaster");
//!
//! let alice = SubscriberHandle::new(EmailSubscriber::new("alice@example.com", sink.clone())?);
//! channel.subscribe(&alice);
//!
//! let report = channel.publish("Python Design Patterns Tutorial");
//! assert!(report.is_success());
//! assert_eq!(sink.len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod registry;
pub mod sink;
pub mod stats;
pub mod subscriber;

pub use error::{Error, Result};
pub use registry::{Channel, ChannelName, LatestUpload, PublishReport, RegistryConfig, SharedChannel};
pub use subscriber::{Subscriber, SubscriberHandle, SubscriberId};
