//! CLI command definitions and handlers

pub mod config;
pub mod handlers;
pub mod logging;
pub mod output;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::domain::{CardId, TopicId, UserId};
use output::OutputFormat;

/// easynote - hierarchical topics and markdown cards
#[derive(Parser, Debug)]
#[command(name = "easynote", version, about, long_about = None)]
pub struct Cli {
    /// Database file (overrides config file)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// User to act as (overrides config file)
    #[arg(short, long, global = true)]
    pub user: Option<UserId>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Manage topics
    Topic {
        #[command(subcommand)]
        command: TopicCommand,
    },

    /// Manage cards
    Card {
        #[command(subcommand)]
        command: CardCommand,
    },

    /// Check the topic tree for leftovers of interrupted operations
    Check(CheckArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Subcommand, Debug)]
pub enum TopicCommand {
    /// List root topics
    Ls(TopicListArgs),

    /// Show a topic with its children and cards
    Show(TopicShowArgs),

    /// Create a topic
    New(TopicNewArgs),

    /// Rename a topic
    Rename(TopicRenameArgs),

    /// Delete a topic, its descendants, and all their cards
    Rm(TopicRemoveArgs),
}

#[derive(Subcommand, Debug)]
pub enum CardCommand {
    /// List the cards of a topic
    Ls(CardListArgs),

    /// Show a card
    Show(CardShowArgs),

    /// Create a card
    New(CardNewArgs),

    /// Replace a card's text
    Edit(CardEditArgs),

    /// Delete a card
    Rm(CardRemoveArgs),
}

/// Arguments for `topic ls`
#[derive(Parser, Debug)]
pub struct TopicListArgs {
    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for `topic show`
#[derive(Parser, Debug)]
pub struct TopicShowArgs {
    /// Topic ID
    pub id: TopicId,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for `topic new`
#[derive(Parser, Debug)]
pub struct TopicNewArgs {
    /// Topic title
    pub title: String,

    /// Create the topic under this parent instead of as a root
    #[arg(short, long)]
    pub parent: Option<TopicId>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for `topic rename`
#[derive(Parser, Debug)]
pub struct TopicRenameArgs {
    /// Topic ID
    pub id: TopicId,

    /// New title
    pub title: String,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for `topic rm`
#[derive(Parser, Debug)]
pub struct TopicRemoveArgs {
    /// Topic ID
    pub id: TopicId,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for `card ls`
#[derive(Parser, Debug)]
pub struct CardListArgs {
    /// Topic ID
    pub topic: TopicId,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for `card show`
#[derive(Parser, Debug)]
pub struct CardShowArgs {
    /// Card ID
    pub id: CardId,

    /// Print the sanitized HTML instead of the markdown
    #[arg(long)]
    pub html: bool,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for `card new`
#[derive(Parser, Debug)]
pub struct CardNewArgs {
    /// Topic ID
    pub topic: TopicId,

    /// Markdown text
    pub text: String,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for `card edit`
#[derive(Parser, Debug)]
pub struct CardEditArgs {
    /// Card ID
    pub id: CardId,

    /// New markdown text
    pub text: String,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for `card rm`
#[derive(Parser, Debug)]
pub struct CardRemoveArgs {
    /// Card ID
    pub id: CardId,
}

/// Arguments for the `check` command
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Repair what can be repaired
    #[arg(long)]
    pub fix: bool,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, zsh, fish)
    #[arg(value_enum)]
    pub shell: Shell,
}
