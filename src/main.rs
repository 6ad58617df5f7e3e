use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use vocab_sql::{app, cli::Cli, error::AppError};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = cli
        .settings()
        .map_err(AppError::from)
        .and_then(|settings| app::execute(&settings));

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
