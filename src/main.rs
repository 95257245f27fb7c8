//! zonelint - Lint JavaScript/TypeScript projects against naming, structure,
//! and framework conventions
//!
//! This is the main entry point for the CLI application.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use zonelint::cli::{commands, Cli, Commands};
use zonelint::exit_codes;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let root = cli.directory.unwrap_or_else(|| PathBuf::from("."));

    let result = match cli.command {
        Commands::Check(args) => commands::check::execute(args, root, cli.config).await,
        Commands::Rules(args) => commands::rules::execute(args, root, cli.config).await,
        Commands::Init(args) => commands::init::execute(args, root).await,
    };

    match result {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(exit_codes::FAILURE);
        }
    }
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();
}
