//! `tracing` subscriber setup.
//!
//! Events go to stderr so that stdout carries only command output. The
//! filter comes from `--quiet` / `--verbose` when given, otherwise from
//! `RUST_LOG`, otherwise `warn`.
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Returns the filter directive implied by the verbosity flags, if any.
pub fn directive(quiet: bool, verbose: bool) -> Option<&'static str> {
    if quiet {
        Some("error")
    } else if verbose {
        Some("debug")
    } else {
        None
    }
}

/// Installs the global subscriber. Safe to call more than once; later calls
/// leave the first subscriber in place.
pub fn init(quiet: bool, verbose: bool) {
    let filter = match directive(quiet, verbose) {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
    if installed.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_pick_directive() {
        assert_eq!(directive(true, false), Some("error"));
        assert_eq!(directive(false, true), Some("debug"));
        assert_eq!(directive(false, false), None);
    }

    #[test]
    fn init_twice_does_not_panic() {
        init(false, true);
        init(true, false);
    }
}
