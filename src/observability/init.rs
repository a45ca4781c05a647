//! Tracing initialization and subscriber setup.
//!
//! This module configures the tracing subscriber for the preview binary and
//! any other host that wants the core's spans on stderr.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::Config;

/// Initializes the tracing subscriber.
///
/// Filters spans by `config.trace_level` (falling back to `"info"`, and
/// honoring `RUST_LOG` when set) and writes formatted events to stderr.
///
/// Idempotent: safe to call multiple times, only the first call takes
/// effect.
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or("info");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    let _ = subscriber.try_init();
}
