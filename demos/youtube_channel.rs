//! Channel notification demo
//!
//! Run with: cargo run --example youtube_channel
//!
//! Set `RUST_LOG=channel_notify=debug` to see the registry's own trace
//! output next to the printed transcript.
//!
//! Walks through a fixed sequence:
//! subscribe x3, publish, unsubscribe one, publish, subscribe one, publish.

use std::sync::Arc;

use channel_notify::registry::{Channel, ChannelEvent, DeliveryError, RegistryConfig};
use channel_notify::sink::{Delivery, DeliverySink, Medium};
use channel_notify::subscriber::{EmailSubscriber, PushSubscriber, SmsSubscriber, SubscriberHandle};
use tokio::sync::mpsc::UnboundedReceiver;
use tracing_subscriber::EnvFilter;

/// Sink that prints every delivery to stdout
struct ConsoleSink;

impl DeliverySink for ConsoleSink {
    fn deliver(&self, delivery: &Delivery) -> Result<(), DeliveryError> {
        let icon = match delivery.medium {
            Medium::Email => "📧 Email sent to",
            Medium::Push => "📱 Push notification to @",
            Medium::Sms => "💬 SMS to",
        };
        let sep = if delivery.medium == Medium::Push { "" } else { " " };
        println!("{}{}{}:", icon, sep, delivery.recipient);
        println!("   {}", delivery.body);
        Ok(())
    }
}

fn banner(title: &str) {
    println!("{}", "=".repeat(60));
    println!("{}", title);
    println!("{}", "=".repeat(60));
}

fn print_events(events: &mut UnboundedReceiver<ChannelEvent>) {
    while let Ok(event) = events.try_recv() {
        match event {
            ChannelEvent::Subscribed { .. } => println!("✓ {}", event),
            ChannelEvent::Unsubscribed { .. } => println!("✗ {}", event),
            // Announced by `publish` before the fan-out starts
            ChannelEvent::Published { .. } => {}
        }
    }
}

fn publish(channel: &mut Channel, events: &mut UnboundedReceiver<ChannelEvent>, title: &str) {
    println!("\n📹 {} uploaded: '{}'", channel.name(), title);
    println!("\n🔔 Notifying {} subscribers...", channel.subscriber_count());

    let report = channel.publish(title);
    print_events(events);

    for failure in &report.failures {
        println!("⚠ {}", failure);
    }
}

fn main() -> channel_notify::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    banner("OBSERVER PATTERN DEMO - YouTube Notification System");

    let sink: Arc<dyn DeliverySink> = Arc::new(ConsoleSink);
    let (mut channel, mut events) = Channel::with_events("TechMaster", RegistryConfig::default());

    let alice = SubscriberHandle::new(EmailSubscriber::new("alice@example.com", sink.clone())?);
    let bob = SubscriberHandle::new(PushSubscriber::new("bob_dev", sink.clone())?);
    let phone = SubscriberHandle::new(SmsSubscriber::new("+7-777-123-4567", sink.clone())?);

    println!("\n--- Subscribing Users ---");
    channel.subscribe(&alice);
    channel.subscribe(&bob);
    channel.subscribe(&phone);
    print_events(&mut events);

    publish(&mut channel, &mut events, "Python Design Patterns Tutorial");

    println!("\n--- Unsubscribing One User ---");
    channel.unsubscribe(&bob);
    print_events(&mut events);

    publish(&mut channel, &mut events, "Advanced Observer Pattern Explained");

    println!("\n--- Adding New Subscriber ---");
    let charlie = SubscriberHandle::new(EmailSubscriber::new("charlie@example.com", sink)?);
    channel.subscribe(&charlie);
    print_events(&mut events);

    publish(&mut channel, &mut events, "Clean Code Principles in Python");

    let stats = channel.stats();
    println!(
        "\nStats: publishes={} notifications={} failures={}",
        stats.publishes, stats.notifications, stats.failures
    );

    println!();
    banner("DEMO COMPLETED");
    Ok(())
}
