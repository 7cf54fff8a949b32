//! Channel statistics

pub mod metrics;

pub use metrics::ChannelStats;
