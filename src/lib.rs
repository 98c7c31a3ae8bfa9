//! easynote - hierarchical topics and markdown cards

pub mod cli;
pub mod domain;
pub mod infra;
pub mod notebook;
pub mod store;
pub mod tree;

use anyhow::Result;
use clap::Parser;

use cli::{
    Cli, Command,
    config::Config,
    handlers::{handle_card, handle_check, handle_completions, handle_topic},
    logging::init_tracing,
};

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Command::Completions(args) = &cli.command {
        return handle_completions(args);
    }

    let config = Config::load()?;
    let db_path = config.db_path(cli.db.as_ref());
    let requester = config.requester(cli.user)?;

    match &cli.command {
        Command::Topic { command } => handle_topic(command, &db_path, &requester),
        Command::Card { command } => handle_card(command, &db_path, &requester),
        Command::Check(args) => handle_check(args, &db_path, &requester),
        Command::Completions(args) => handle_completions(args),
    }
}
