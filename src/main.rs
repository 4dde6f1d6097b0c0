use std::process::ExitCode;

use clap::Parser;
use regwizard_lib::bootstrap;
use regwizard_lib::cli::{self, Cli};

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is normal.
    let _ = dotenvy::dotenv();

    let args = Cli::parse();

    let config = match bootstrap::resolve_config(args.config.clone()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("regwizard: {err:#}");
            return ExitCode::from(2);
        }
    };

    if let Err(err) = bootstrap::tracing::init_tracing_subscriber(&config.log_directory) {
        eprintln!("Failed to initialize tracing: {err:#}");
    }

    let mut stdout = std::io::stdout().lock();
    match cli::run(args, config, &mut stdout).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            tracing::error!(error = %format!("{err:#}"), "command failed");
            eprintln!("regwizard: {err:#}");
            ExitCode::from(2)
        }
    }
}
