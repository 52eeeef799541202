//! Captures `tracing` events so tests can check what was logged and at which
//! level.

use std::fmt;
use std::sync::{Arc, Mutex};

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::Registry;

/// Layer recording the level and message of every event.
#[derive(Clone, Default)]
struct EventCapture {
    events: Arc<Mutex<Vec<(Level, String)>>>,
}

#[derive(Default)]
struct MessageVisitor(String);

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.0 = format!("{value:?}");
        }
    }
}

impl<S: Subscriber> Layer<S> for EventCapture {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        if let Ok(mut events) = self.events.lock() {
            events.push((*event.metadata().level(), visitor.0));
        }
    }
}

/// Run `f` under a capturing subscriber and return every event it logged,
/// in order.
pub fn capture_events(f: impl FnOnce()) -> Vec<(Level, String)> {
    let capture = EventCapture::default();
    let subscriber = Registry::default().with(capture.clone());
    tracing::subscriber::with_default(subscriber, f);
    let events = capture.events.lock().map(|events| events.clone());
    events.unwrap_or_default()
}

/// Levels of the captured events, in order.
pub fn capture_levels(f: impl FnOnce()) -> Vec<Level> {
    capture_events(f).into_iter().map(|(level, _)| level).collect()
}
