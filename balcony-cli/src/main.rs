//! Entry point for the `balcony` command-line interface.
#![forbid(unsafe_code)]

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[expect(
    clippy::print_stderr,
    reason = "the binary reports fatal errors on stderr"
)]
fn main() {
    init_logging();
    match balcony_cli::run() {
        Ok(()) => {}
        // Clap renders help, version and usage errors itself.
        Err(balcony_cli::CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("balcony: {err}");
            std::process::exit(1);
        }
    }
}

/// Route `log` records to stderr, filtered by `RUST_LOG` (default `warn`).
#[expect(
    clippy::print_stderr,
    reason = "logging is unavailable when its own setup fails"
)]
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));
    if let Err(err) = subscriber.try_init() {
        eprintln!("balcony: logging disabled: {err}");
    }
}
