//! Channel registry for upload notifications
//!
//! The registry keeps the subscribers of a channel and fans each new upload
//! out to them, one after another, in subscription order.
//!
//! # Architecture
//!
//! ```text
//!                            Channel
//!                     ┌─────────────────────────┐
//!                     │ name: ChannelName       │
//!                     │ subscribers: Vec<       │
//!                     │   SubscriberHandle      │
//!                     │ >                       │
//!                     │ latest: LatestUpload    │
//!                     └───────────┬─────────────┘
//!                                 │ publish() ─► notify()
//!         ┌───────────────────────┼───────────────────────┐
//!         │                       │                       │
//!         ▼                       ▼                       ▼
//!   [EmailSubscriber]      [PushSubscriber]        [SmsSubscriber]
//!     update()               update()                update()
//!         │                       │                       │
//!         └──────────────► DeliverySink::deliver() ◄──────┘
//! ```
//!
//! # Failure handling
//!
//! A subscriber returning an error is recorded in the [`PublishReport`] and
//! the fan-out carries on with the next subscriber.

pub mod config;
pub mod error;
pub mod event;
pub mod report;
pub mod shared;
pub mod store;
pub mod upload;

pub use config::RegistryConfig;
pub use error::{DeliveryError, DeliveryFailure};
pub use event::ChannelEvent;
pub use report::PublishReport;
pub use shared::SharedChannel;
pub use store::{Channel, Publisher};
pub use upload::{ChannelName, LatestUpload, Notification};
