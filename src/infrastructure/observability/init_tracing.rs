use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use super::TracingConfig;

pub const DEFAULT_FILTER: &str = "info,voxguard=debug,tower_http=debug";

/// Initialize the tracing subscriber with structured logging.
///
/// `RUST_LOG` wins over `default_level`; `default_level` falls back to the
/// crate default when it cannot be parsed.
pub fn init_tracing(config: &TracingConfig, default_level: Option<&str>) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback_filter(default_level));

    let fmt_layer = fmt::layer()
        .with_target(true)
        .with_file(true)
        .with_line_number(true);

    if config.json_format {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer.json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .init();
    }

    tracing::info!(
        environment = %config.environment,
        json_format = config.json_format,
        "Tracing initialized"
    );
}

/// Filter used when `RUST_LOG` is unset or invalid.
pub fn fallback_filter(default_level: Option<&str>) -> EnvFilter {
    let level = default_level.unwrap_or(DEFAULT_FILTER);
    EnvFilter::try_new(level).unwrap_or_else(|e| {
        eprintln!("Invalid log level {:?} ({}); using {}", level, e, DEFAULT_FILTER);
        EnvFilter::new(DEFAULT_FILTER)
    })
}
