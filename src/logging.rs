//! Logging setup for the command-line tool
//!
//! The engine logs through `tracing` macros; nothing is printed unless a
//! subscriber is installed, which [`init_logger`] does for the binary.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Pick the filter for the given flags.
///
/// `verbose` wins over `quiet`; without either, `RUST_LOG` is honored and
/// `compscan=info` is the fallback.
pub fn build_filter(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("compscan=debug")
    } else if quiet {
        EnvFilter::new("compscan=error")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("compscan=info"))
    }
}

/// Install a stderr subscriber. Calling it twice keeps the first one.
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_ansi(!no_color)
        .with_writer(std::io::stderr);

    let _ = tracing_subscriber::registry()
        .with(build_filter(verbose, quiet))
        .with(fmt_layer)
        .try_init();
}
