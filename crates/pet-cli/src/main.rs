use anyhow::Context;
use clap::Parser;

mod cli;
mod commands;
mod context;
mod output;

fn main() {
    if let Err(error) = run() {
        eprintln!("petcare error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let config = pet_config::PetCareConfig::load_with_dotenv()
        .context("failed to load petcare configuration")?;
    let flags = cli.global_flags(&config)?;

    if let cli::Commands::Schema(args) = &cli.command {
        return commands::schema::handle(args, &flags);
    }

    let mut ctx = context::AppContext::init(&config, &flags)
        .context("failed to initialize petcare application context")?;

    let command = cli.command;
    let mutates = command_mutates_state(&command);
    commands::dispatch::dispatch(command, &mut ctx, &flags)?;

    if mutates {
        ctx.save()?;
    }
    Ok(())
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("PETCARE_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

/// Whether a successful run of `command` must be written back to disk.
fn command_mutates_state(command: &cli::Commands) -> bool {
    use crate::cli::subcommands::{OwnerCommands, PetCommands, TaskCommands};

    match command {
        cli::Commands::Owner { action } => !matches!(action, OwnerCommands::List),
        cli::Commands::Pet { action } => !matches!(
            action,
            PetCommands::List { .. } | PetCommands::Info { .. }
        ),
        cli::Commands::Task { action } => !matches!(action, TaskCommands::List { .. }),
        cli::Commands::Vet { .. } | cli::Commands::Import(_) => true,
        cli::Commands::Due(_) | cli::Commands::Export(_) | cli::Commands::Schema(_) => false,
    }
}
