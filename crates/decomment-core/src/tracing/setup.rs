//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::{DEFAULT_LOG_FILTER, LOG_ENV_VAR};

static INIT: Once = Once::new();

/// Initialize the decomment tracing/logging system.
///
/// Reads the `DECOMMENT_LOG` environment variable for per-module log levels.
/// Format: `DECOMMENT_LOG=decomment_core::stripper=debug,decomment_core::scanner=warn`
///
/// Events go to stderr; stdout is reserved for the per-file report.
/// Calling it more than once is a no-op.
pub fn init_tracing() {
    INIT.call_once(|| {
        let raw = std::env::var(LOG_ENV_VAR).ok();
        let filter = build_filter(raw.as_deref());

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .init();
    });
}

/// Parse a `DECOMMENT_LOG` value, falling back to `decomment_core=info` when
/// it is unset, blank or not a valid filter.
pub fn build_filter(raw: Option<&str>) -> EnvFilter {
    raw.map(str::trim)
        .filter(|directives| !directives.is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}
