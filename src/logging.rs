use anyhow::Result;
use std::path::Path;
use tracing::level_filters::LevelFilter;
use tracing_appender::rolling::Rotation;
use tracing_subscriber::EnvFilter;

/// Prefix for the rolling log files
pub const LOG_PREFIX: &str = "daylog";

/// Number of daily log files kept
const MAX_LOG_FILES: usize = 5;

/// Filter for the crate's events
///
/// An explicit level applies to this crate only. Otherwise `RUST_LOG` is used
/// as written, falling back to `info` for this crate when unset or invalid.
fn log_filter(log_level: Option<LevelFilter>, rust_log: Option<&str>) -> EnvFilter {
    let crate_name = env!("CARGO_PKG_NAME").replace('-', "_");
    match (log_level, rust_log) {
        (Some(level), _) => EnvFilter::new(format!("{crate_name}={level}")),
        (None, Some(directives)) => EnvFilter::try_new(directives)
            .unwrap_or_else(|_| EnvFilter::new(format!("{crate_name}=info"))),
        (None, None) => EnvFilter::new(format!("{crate_name}=info")),
    }
}

/// Send tracing output to a daily rolling file in `log_dir`
///
/// The terminal belongs to the dashboard, so nothing is written to stdout.
/// Level comes from `log_level`, then `RUST_LOG`, then `info`.
pub fn enable_logging(log_dir: &Path, log_level: Option<LevelFilter>) -> Result<()> {
    let appender = tracing_appender::rolling::Builder::new()
        .rotation(Rotation::DAILY)
        .max_log_files(MAX_LOG_FILES)
        .filename_prefix(LOG_PREFIX)
        .filename_suffix("log")
        .build(log_dir)?;

    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(log_level, rust_log.as_deref()))
        .with_ansi(false)
        .with_writer(appender)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {}", e))?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "logging enabled");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shown(filter: EnvFilter) -> String {
        filter.to_string().to_lowercase()
    }

    #[test]
    fn test_explicit_level_wins() {
        let filter = log_filter(Some(LevelFilter::DEBUG), Some("warn"));
        assert_eq!(shown(filter), "daylog=debug");
    }

    #[test]
    fn test_rust_log_used_as_written() {
        let filter = shown(log_filter(None, Some("info,daylog=trace")));
        assert!(filter.contains("daylog=trace"));
        assert!(filter.contains("info"));
    }

    #[test]
    fn test_default_is_info() {
        assert_eq!(shown(log_filter(None, None)), "daylog=info");
    }
}
