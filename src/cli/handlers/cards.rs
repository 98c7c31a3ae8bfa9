//! Card command handlers.

use anyhow::{Context, Result};
use std::path::Path;

use super::open_notebook;
use crate::cli::CardCommand;
use crate::cli::output::{OutputFormat, card_line, print_json};
use crate::domain::Requester;

pub fn handle_card(command: &CardCommand, db_path: &Path, requester: &Requester) -> Result<()> {
    let mut notebook = open_notebook(db_path)?;

    match command {
        CardCommand::Ls(args) => {
            let cards = notebook
                .list_cards(requester, args.topic)
                .with_context(|| format!("failed to list cards of topic {}", args.topic))?;
            match args.format {
                OutputFormat::Human if cards.is_empty() => println!("No cards found."),
                OutputFormat::Human => {
                    for card in &cards {
                        println!("{}", card_line(card));
                    }
                }
                OutputFormat::Json => print_json(&cards)?,
            }
        }
        CardCommand::Show(args) => {
            let card = notebook
                .get_card(requester, args.id)
                .with_context(|| format!("failed to show card {}", args.id))?;
            match args.format {
                OutputFormat::Human if args.html => print!("{}", card.sanitized_text()),
                OutputFormat::Human => println!("{}", card.text()),
                OutputFormat::Json => print_json(&card)?,
            }
        }
        CardCommand::New(args) => {
            let card = notebook
                .create_card(requester, args.topic, &args.text)
                .with_context(|| format!("failed to create card in topic {}", args.topic))?;
            match args.format {
                OutputFormat::Human => println!("Created card: {}", card.id()),
                OutputFormat::Json => print_json(&card)?,
            }
        }
        CardCommand::Edit(args) => {
            let card = notebook
                .update_card(requester, args.id, &args.text)
                .with_context(|| format!("failed to update card {}", args.id))?;
            match args.format {
                OutputFormat::Human => println!("Updated card: {}", card.id()),
                OutputFormat::Json => print_json(&card)?,
            }
        }
        CardCommand::Rm(args) => {
            notebook
                .delete_card(requester, args.id)
                .with_context(|| format!("failed to delete card {}", args.id))?;
            println!("Deleted card: {}", args.id);
        }
    }
    Ok(())
}
