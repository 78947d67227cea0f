//! Tracing setup for the command line tool.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the log filter, e.g. `VERTEXAREAS_LOG=vertexareas=debug`.
pub const LOG_ENV: &str = "VERTEXAREAS_LOG";

static INIT: Once = Once::new();

/// Install a stderr logger, filtered by `VERTEXAREAS_LOG` (default: warnings only).
///
/// Calling this more than once has no further effect. Stdout is left to the run report.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new("vertexareas=warn"));

        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
            .with(filter)
            .init();
    });
}
