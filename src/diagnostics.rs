//! Logging setup and warning capture.

use std::sync::{Arc, Mutex, PoisonError};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};

/// Install the default subscriber: human-readable output on stderr,
/// filtered by `RUST_LOG` with `locale_accessors=info` as the baseline.
pub fn init_logging() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("locale_accessors=info".parse()?),
        )
        .init();
    Ok(())
}

/// A [`Layer`] that keeps the message of every WARN event.
///
/// Clones share the same buffer, so one clone can be handed to a subscriber
/// while another is kept for inspection.
#[derive(Debug, Clone, Default)]
pub struct WarningCollector {
    warnings: Arc<Mutex<Vec<String>>>,
}

impl WarningCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages collected so far, oldest first.
    pub fn warnings(&self) -> Vec<String> {
        self.warnings
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Check whether any collected message contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.warnings().iter().any(|message| message.contains(needle))
    }

    pub fn clear(&self) {
        self.warnings
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

/// Extracts the `message` field of an event.
#[derive(Default)]
struct MessageVisitor {
    message: String,
}

impl Visit for MessageVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        }
    }
}

impl<S: Subscriber> Layer<S> for WarningCollector {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() != Level::WARN {
            return;
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        self.warnings
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(visitor.message);
    }
}
