use std::fs::OpenOptions;
use std::io::IsTerminal;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding a tracing filter directive
pub const LOG_ENV: &str = "LISTO_LOG";

/// Where log events go
#[derive(Debug, Clone, Copy)]
pub enum LogTarget<'a> {
    /// Append to a file. Used by the terminal UI, where stderr is the screen.
    File(&'a Path),
    /// Plain stderr. Colors only when stderr is a terminal.
    Stderr,
}

/// Build the filter: LISTO_LOG wins, then the configured level, then `fallback`.
pub fn build_filter(configured: Option<&str>, fallback: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(configured.unwrap_or(fallback)))
        .unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Install the global subscriber. Calling it twice is harmless; the second
/// call is ignored.
pub fn init(target: LogTarget, filter: EnvFilter) -> std::io::Result<()> {
    let registry = tracing_subscriber::registry().with(filter);
    let result = match target {
        LogTarget::File(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            registry
                .with(
                    fmt::layer()
                        .with_writer(Mutex::new(file))
                        .with_ansi(false)
                        .with_target(true)
                        .with_line_number(true),
                )
                .try_init()
        }
        LogTarget::Stderr => registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(std::io::stderr().is_terminal())
                    .with_target(false)
                    .without_time(),
            )
            .try_init(),
    };
    if result.is_ok() {
        tracing::debug!(?target, "logging initialized");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_falls_back_on_bad_directive() {
        // An unparsable configured level must not panic
        let filter = build_filter(Some("[[not a filter"), "warn");
        assert!(!filter.to_string().is_empty());
    }

    #[test]
    fn test_init_file_target_creates_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("listo.log");
        init(LogTarget::File(&path), EnvFilter::new("debug")).unwrap();
        assert!(path.exists());
    }
}
