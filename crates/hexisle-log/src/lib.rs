//! Structured logging for the island generator.
//!
//! Console output through `tracing-subscriber`, filtered by `RUST_LOG` or the
//! configured log level, plus a JSON log file in debug builds.

use std::path::{Path, PathBuf};

use hexisle_config::DebugConfig;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when neither `RUST_LOG` nor the config names a level.
pub const DEFAULT_FILTER: &str = "info";

/// Name of the JSON log file written in debug builds.
pub const LOG_FILE_NAME: &str = "hexisle.log";

/// Filter directives for `config`, falling back to [`DEFAULT_FILTER`].
pub fn filter_directives(config: Option<&DebugConfig>) -> String {
    match config {
        Some(debug) if !debug.log_level.trim().is_empty() => debug.log_level.trim().to_string(),
        _ => DEFAULT_FILTER.to_string(),
    }
}

/// Path of the JSON log file inside `log_dir`.
pub fn log_file_path(log_dir: &Path) -> PathBuf {
    log_dir.join(LOG_FILE_NAME)
}

/// Installs the global subscriber.
///
/// `RUST_LOG` takes precedence over `config.log_level`. When `debug_build` is
/// set and `log_dir` is writable, records are also written as JSON lines to
/// [`LOG_FILE_NAME`] there.
///
/// # Panics
///
/// Panics if a global subscriber is already installed.
///
/// ```no_run
/// use hexisle_config::DebugConfig;
/// use hexisle_log::init_logging;
///
/// init_logging(None, false, Some(&DebugConfig::default()));
/// ```
pub fn init_logging(log_dir: Option<&Path>, debug_build: bool, config: Option<&DebugConfig>) {
    let directives = filter_directives(config);
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&directives));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::uptime());

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer);

    if debug_build
        && let Some(log_dir) = log_dir
        && std::fs::create_dir_all(log_dir).is_ok()
        && let Ok(log_file) = std::fs::File::create(log_file_path(log_dir))
    {
        let file_layer = fmt::layer()
            .with_writer(log_file)
            .with_ansi(false)
            .with_target(true)
            .with_timer(fmt::time::uptime())
            .json();

        subscriber.with(file_layer).init();
        return;
    }

    subscriber.init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives() {
        assert_eq!(filter_directives(None), "info");

        let blank = DebugConfig {
            log_level: "  ".to_string(),
            ..Default::default()
        };
        assert_eq!(filter_directives(Some(&blank)), "info");
    }

    #[test]
    fn test_config_level_used() {
        let config = DebugConfig {
            log_level: "warn,hexisle_terrain=debug".to_string(),
            ..Default::default()
        };
        let directives = filter_directives(Some(&config));
        assert_eq!(directives, "warn,hexisle_terrain=debug");

        let filter = EnvFilter::new(&directives);
        assert!(filter.to_string().contains("hexisle_terrain=debug"));
    }

    #[test]
    fn test_env_filter_parsing() {
        for directives in ["info", "debug,hexisle_mesh=trace", "error"] {
            assert!(
                EnvFilter::try_new(directives).is_ok(),
                "failed to parse filter: {directives}"
            );
        }
    }

    #[test]
    fn test_log_file_path() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = log_file_path(temp_dir.path());
        assert_eq!(path.file_name().unwrap(), LOG_FILE_NAME);
        assert_eq!(path.parent().unwrap(), temp_dir.path());
    }
}
