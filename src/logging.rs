use std::fs::OpenOptions;
use std::io;
use std::path::Path;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "info";

/// Initialize tracing into `log_path`.
///
/// The terminal belongs to the UI, so all output goes to the file. The file
/// is appended to, never truncated.
pub fn init_tracing(filter: Option<&str>, log_path: &Path) -> io::Result<()> {
    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)?;

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::UtcTime::rfc_3339());

    tracing_subscriber::registry()
        .with(build_filter(filter))
        .with(file_layer)
        .try_init()
        .map_err(io::Error::other)
}

/// `RUST_LOG` first, then the configured directive, then `info`.
fn build_filter(configured: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(configured.unwrap_or(DEFAULT_FILTER)))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_directive_falls_back() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let filter = build_filter(Some("firstrun=[[["));
        assert_eq!(filter.to_string(), DEFAULT_FILTER);
    }

    #[test]
    fn configured_directive_is_used() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let filter = build_filter(Some("firstrun=debug"));
        assert_eq!(filter.to_string(), "firstrun=debug");
    }
}
