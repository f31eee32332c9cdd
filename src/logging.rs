//! Optional subscriber setup for hosts without their own.
//!
//! Diagnostics are plain `tracing` events on [`LOG_TARGET`](crate::LOG_TARGET),
//! so an application that already installs a subscriber needs none of this.

use tracing_subscriber::EnvFilter;

/// Installs a global `fmt` subscriber filtered by `RUST_LOG`.
///
/// Falls back to `warn` when `RUST_LOG` is unset or invalid. Returns
/// `false` if a global subscriber was already installed.
pub fn init_logging() -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok();
    if installed {
        tracing::debug!(target: crate::LOG_TARGET, "initialized {} v{}", crate::NAME, crate::VERSION);
    }
    installed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_only_once() {
        init_logging();
        assert!(!init_logging());
    }
}
