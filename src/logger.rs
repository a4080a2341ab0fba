//! Logging setup for the command line.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// The level of this crate's logs for a given number of `-v` flags.
fn level(verbose: usize) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install a compact stderr logger. Other crates stay at `warn`.
pub fn init_cli_logger(verbose: usize) {
    let filter = EnvFilter::new(format!("warn,quotefix={}", level(verbose)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
