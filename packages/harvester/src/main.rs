//! Entry point of the `review-harvester` binary.

use std::process::ExitCode;

use console::style;
use review_harvester::cli;
use tracing_subscriber::EnvFilter;

/// Log to stderr so review listings on stdout stay clean. `RUST_LOG`
/// overrides the default `warn` level.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    init_tracing();

    match cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e}", style("Error:").for_stderr().red().bold());
            ExitCode::FAILURE
        }
    }
}
