//! Topic command handlers.

use anyhow::{Context, Result};
use std::path::Path;

use super::open_notebook;
use crate::cli::TopicCommand;
use crate::cli::output::{OutputFormat, card_line, print_json, topic_line, topic_path};
use crate::domain::Requester;

pub fn handle_topic(command: &TopicCommand, db_path: &Path, requester: &Requester) -> Result<()> {
    let mut notebook = open_notebook(db_path)?;

    match command {
        TopicCommand::Ls(args) => {
            let topics = notebook
                .list_root_topics(requester)
                .context("failed to list topics")?;
            match args.format {
                OutputFormat::Human if topics.is_empty() => println!("No topics found."),
                OutputFormat::Human => {
                    for topic in &topics {
                        println!("{}", topic_line(topic));
                    }
                }
                OutputFormat::Json => print_json(&topics)?,
            }
        }
        TopicCommand::Show(args) => {
            let contents = notebook
                .open_topic(requester, args.id)
                .with_context(|| format!("failed to open topic {}", args.id))?;
            match args.format {
                OutputFormat::Human => {
                    let topic = &contents.topic;
                    println!("{}", topic_path(topic));
                    println!("id:      {}", topic.id());
                    println!("created: {}", topic.date().format("%Y-%m-%d %H:%M"));
                    if !contents.children.is_empty() {
                        println!("\nTopics:");
                        for child in &contents.children {
                            println!("  {}  {}", child.id(), child.title());
                        }
                    }
                    if !contents.cards.is_empty() {
                        println!("\nCards:");
                        for card in &contents.cards {
                            println!("  {}", card_line(card));
                        }
                    }
                }
                OutputFormat::Json => print_json(&contents)?,
            }
        }
        TopicCommand::New(args) => {
            let topic = match args.parent {
                Some(parent) => notebook
                    .create_child_topic(requester, parent, &args.title)
                    .with_context(|| format!("failed to create topic under {}", parent))?,
                None => notebook
                    .create_root_topic(requester, &args.title)
                    .context("failed to create topic")?,
            };
            match args.format {
                OutputFormat::Human => println!("Created topic: {}", topic_line(&topic)),
                OutputFormat::Json => print_json(&topic)?,
            }
        }
        TopicCommand::Rename(args) => {
            let topic = notebook
                .rename_topic(requester, args.id, &args.title)
                .with_context(|| format!("failed to rename topic {}", args.id))?;
            match args.format {
                OutputFormat::Human => println!("Renamed topic: {}", topic_line(&topic)),
                OutputFormat::Json => print_json(&topic)?,
            }
        }
        TopicCommand::Rm(args) => {
            let report = notebook
                .delete_topic(requester, args.id)
                .with_context(|| format!("failed to delete topic {}", args.id))?;
            match args.format {
                OutputFormat::Human => println!(
                    "Deleted {} topic(s) and {} card(s)",
                    report.topics, report.cards
                ),
                OutputFormat::Json => print_json(report)?,
            }
        }
    }
    Ok(())
}
