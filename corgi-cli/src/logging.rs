//! Log output of the command-line driver.

use std::io;
use tracing_subscriber::EnvFilter;

/// Environment variable that overrides the verbosity flags with a full filter directive,
/// e.g. `CORGI_LOG=corgi::parser=debug`.
pub const LOG_ENV_VAR: &str = "CORGI_LOG";

/// Maps the number of `-v` flags to a default filter directive.
pub fn directive_for_verbosity(verbosity: u64) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Installs a global subscriber writing to stderr. Does nothing if one is already installed.
pub fn init(verbosity: u64) {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(directive_for_verbosity(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(directive_for_verbosity(0), "warn");
        assert_eq!(directive_for_verbosity(2), "debug");
        assert_eq!(directive_for_verbosity(7), "trace");
    }
}
