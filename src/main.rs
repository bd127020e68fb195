use std::io::IsTerminal;

use clap::Parser;
use pwguard::cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() {
    // Diagnostics go to stderr; stdout carries only command output.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("pwguard=warn"))
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .without_time()
        .try_init();

    let cli = Cli::parse();

    let result = match cli.command {
        None => pwguard::cli::commands::session::execute(&cli),
        Some(Commands::Store) => pwguard::cli::commands::store::execute(&cli),
        Some(Commands::Verify) => pwguard::cli::commands::verify::execute(&cli),
    };

    if let Err(e) = result {
        pwguard::cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}
