//! Logging setup
//!
//! Diagnostics go to stderr through `tracing`, so stdout stays reserved
//! for the plan itself (text or JSON).

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Verbosity;

/// Filter directive variable, e.g. `EXTPLAN_LOG=extplan=debug`
pub const LOG_ENV: &str = "EXTPLAN_LOG";

/// Level from the configured verbosity raised by `-v` flags
pub fn level_for(verbosity: Verbosity, verbose_flags: u8) -> LevelFilter {
    let base: u8 = match verbosity {
        Verbosity::Quiet => 0,
        Verbosity::Normal => 1,
        Verbosity::Verbose => 2,
        Verbosity::Debug => 3,
    };
    match base.saturating_add(verbose_flags) {
        0 => LevelFilter::ERROR,
        1 => LevelFilter::WARN,
        2 => LevelFilter::INFO,
        3 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Install the global subscriber. `EXTPLAN_LOG` wins over `level`.
pub fn init_logging(
    level: LevelFilter,
    json: bool,
) -> Result<(), tracing_subscriber::util::TryInitError> {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::default().add_directive(level.into()));

    let fmt = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt.json().with_current_span(true))
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt.without_time())
            .try_init()
    }
}
