//! `tracing-subscriber` setup for binaries and ad hoc debugging.

use tracing_subscriber::{fmt, EnvFilter};

use crate::errors::{Result, WikiracerError};

/// Maps a `-v` count to a filter; `RUST_LOG` wins when nothing was requested.
#[must_use]
pub fn filter_for_verbosity(verbosity: u8) -> EnvFilter {
    match verbosity {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    }
}

/// Installs a stderr formatter as the global subscriber.
///
/// Fails if a global subscriber is already installed.
pub fn init_logging(verbosity: u8) -> Result<()> {
    fmt()
        .with_env_filter(filter_for_verbosity(verbosity))
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| WikiracerError::config(format!("cannot install logger: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_for_verbosity() {
        assert_eq!(filter_for_verbosity(1).to_string(), "info");
        assert_eq!(filter_for_verbosity(2).to_string(), "debug");
        assert_eq!(filter_for_verbosity(9).to_string(), "trace");
    }
}
