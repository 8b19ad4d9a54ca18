//! Strata CLI
//!
//! Resolves configuration documents through their parents and imports and
//! prints the result.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so resolved output stays pipeable
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::debug!("Verbose mode enabled");
    }

    match cli.command {
        Some(Commands::Resolve { args, output }) => commands::run_resolve(&args, output),
        Some(Commands::Check { args }) => commands::run_check(&args),
        None => {
            println!("{} layered configuration resolver", "strata".green().bold());
            println!();
            println!("Run {} for available commands.", "strata --help".cyan());
            Ok(())
        }
    }
}
