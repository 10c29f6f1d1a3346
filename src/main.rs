use std::process::ExitCode;

use clap::Parser;
use portfolio_lib::bootstrap::tracing::init_tracing_subscriber;
use portfolio_lib::{run, Cli};

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = init_tracing_subscriber() {
        eprintln!("Failed to initialize tracing: {err}");
    }

    match run(&cli) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
