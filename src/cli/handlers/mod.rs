//! Command handlers for the CLI.

mod cards;
mod check;
mod topics;

use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use clap::CommandFactory;
use clap_complete::generate;

use crate::cli::{Cli, CompletionsArgs};
use crate::notebook::Notebook;
use crate::store::SqliteStore;

pub use cards::handle_card;
pub use check::handle_check;
pub use topics::handle_topic;

/// Opens the notebook stored at `db_path`, creating the file if needed.
pub(crate) fn open_notebook(db_path: &Path) -> Result<Notebook<SqliteStore>> {
    let store = SqliteStore::open(db_path)
        .with_context(|| format!("failed to open database at {}", db_path.display()))?;
    Ok(Notebook::new(store))
}

pub fn handle_completions(args: &CompletionsArgs) -> Result<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(args.shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}
