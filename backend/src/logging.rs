use std::fmt::{self, Write as _};

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{layer::Context, EnvFilter, Layer, Registry};

const DEFAULT_FILTER: &str = "warn,backend=info";

/// Collects the event message plus any structured fields as `key=value`
#[derive(Default)]
struct LineVisitor {
    message: String,
    fields: String,
}

impl Visit for LineVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            let _ = write!(self.fields, " {}={}", field.name(), value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{:?}", value);
        } else {
            let _ = write!(self.fields, " {}={:?}", field.name(), value);
        }
    }
}

fn level_tag(level: &Level) -> &'static str {
    match *level {
        Level::ERROR => "❌ ERROR",
        Level::WARN => "⚠️ WARN",
        Level::INFO => "🍽️ INFO",
        // Only reachable when RUST_LOG opts into debug output
        _ => "🔍 DEBUG",
    }
}

fn format_line(timestamp: &str, level: &Level, target: &str, visitor: &LineVisitor) -> String {
    format!(
        "[{}] {} {}: {}{}",
        timestamp,
        level_tag(level),
        target,
        visitor.message,
        visitor.fields
    )
}

struct ConsoleLayer;

impl<S: Subscriber> Layer<S> for ConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = LineVisitor::default();
        event.record(&mut visitor);
        if visitor.message.is_empty() && visitor.fields.is_empty() {
            return;
        }

        let metadata = event.metadata();
        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f").to_string();
        let line = format_line(&timestamp, metadata.level(), metadata.target(), &visitor);
        if *metadata.level() <= Level::WARN {
            eprintln!("{}", line);
        } else {
            println!("{}", line);
        }
    }
}

/// Installs the global subscriber. `RUST_LOG` overrides the default filter.
pub fn setup() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let subscriber = Registry::default()
        .with(env_filter)
        .with(ConsoleLayer);

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("Logging was already initialised");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_carries_message_and_fields() {
        let visitor = LineVisitor {
            message: "Spin picked \"Pho\"".to_string(),
            fields: " options=4".to_string(),
        };
        let line = format_line("2024-03-09 18:05:42.000", &Level::INFO, "backend::games", &visitor);
        assert_eq!(
            line,
            "[2024-03-09 18:05:42.000] 🍽️ INFO backend::games: Spin picked \"Pho\" options=4"
        );
    }

    #[test]
    fn test_warnings_and_errors_are_tagged() {
        assert_eq!(level_tag(&Level::ERROR), "❌ ERROR");
        assert_eq!(level_tag(&Level::WARN), "⚠️ WARN");
        assert_eq!(level_tag(&Level::TRACE), "🔍 DEBUG");
    }

    #[test]
    fn test_setup_twice_does_not_panic() {
        setup();
        setup();
    }
}
