//! dochost CLI - canonical URL resolution for hosted documentation
//!
//! This is the main entry point for the dochost command-line interface.
//! Command implementations live in separate modules under `commands`.

use anyhow::Result;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

mod cli;
mod commands;
mod output;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    initialize_logging(&cli)?;

    execute_command(&cli)
}

fn initialize_logging(cli: &Cli) -> Result<()> {
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };

    // Diagnostics go to stderr; stdout carries only resolved results.
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn execute_command(cli: &Cli) -> Result<()> {
    let context = commands::ResolverContext::load(cli)?;

    match &cli.command {
        Commands::Url {
            slug,
            filename,
            overrides,
            output,
        } => commands::resolve_url(&context, slug, filename, overrides, *output),

        Commands::Path {
            slug,
            filename,
            overrides,
            output,
        } => commands::resolve_path(&context, slug, filename, overrides, *output),

        Commands::Domain { slug, output } => commands::resolve_domain(&context, slug, *output),

        Commands::List { output } => commands::list_projects(&context, *output),
    }
}
