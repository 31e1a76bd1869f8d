//! Diagnostic logging setup

use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding a tracing filter, e.g. `spendlog=debug`
pub const LOG_FILTER_ENV: &str = "SPENDLOG_LOG";

static TRACING_INIT: Once = Once::new();

/// Filter directive for a `-v` count; None leaves the choice to the environment
pub fn verbosity_directive(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("spendlog=info"),
        _ => Some("spendlog=debug"),
    }
}

/// Install the global stderr subscriber once.
///
/// `-v` flags win over `SPENDLOG_LOG`; with neither, warnings only.
pub fn init_tracing(verbose: u8) {
    TRACING_INIT.call_once(|| {
        let filter = match verbosity_directive(verbose) {
            Some(directive) => EnvFilter::new(directive),
            None => EnvFilter::try_from_env(LOG_FILTER_ENV)
                .unwrap_or_else(|_| EnvFilter::new("spendlog=warn")),
        };

        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}
