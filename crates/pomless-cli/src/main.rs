use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use pomless_cli::{Cli, run};

fn main() -> ExitCode {
    let cli = Cli::parse();
    let start = Instant::now();

    // Initialize tracing subscriber for logging
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();
    }

    let code = match run(&cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            tracing::error!(error = %e, "execution failed");
            ExitCode::FAILURE
        }
    };

    tracing::info!(total_secs = start.elapsed().as_secs_f64(), "complete");
    code
}
