//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! Logs go to stderr so they never interleave with the prompts on stdout.
//! Without `-v`/`-q`, `RUST_LOG` decides the filter and defaults to `warn`.

use clap_verbosity_flag::{Verbosity, WarnLevel};
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, util::TryInitError, EnvFilter,
};

/// Build the filter for the given verbosity flags.
pub fn env_filter(verbosity: &Verbosity<WarnLevel>) -> EnvFilter {
    if verbosity.is_present() {
        EnvFilter::new(verbosity.tracing_level_filter().to_string())
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    }
}

/// Install the global subscriber.
pub fn init_logging(verbosity: &Verbosity<WarnLevel>) -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(env_filter(verbosity))
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init()
}
