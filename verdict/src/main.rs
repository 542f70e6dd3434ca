// verdict/src/main.rs

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod account;
mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    // 1. Setup Logging (Tracing)
    // RUST_LOG=debug verdict check ... pour voir les détails
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // 2. Bindings are registered once, before any validation
    verdict_core::install_global(account::registry())?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Check {
            file,
            groups,
            project_dir,
        } => commands::check::execute(file, groups, project_dir),
        Commands::Bindings => commands::bindings::execute(),
    }
}
