//! Tracing setup
//!
//! Logs go to stderr so the report on stdout stays clean for piping.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is not set
pub fn default_filter(level: &str) -> String {
    format!("rentbuy={level},rentbuy_core=warn")
}

/// Initialize logging at `level` (trace, debug, info, warn, error).
///
/// `RUST_LOG` takes precedence over `level` when set.
pub fn init_logging(level: &str) -> color_eyre::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter(level)))?;

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false)
                .with_target(false)
                .without_time(),
        )
        .try_init()?;

    tracing::debug!(level, "logging initialized");
    Ok(())
}
