//! Output format types for CLI commands.

use clap::ValueEnum;
use serde::Serialize;

use crate::domain::{Card, Topic};

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for programmatic consumption
    Json,
}

/// Wrapper for serializable command output.
#[derive(Debug, Serialize)]
pub struct Output<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> Output<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Prints `data` as pretty JSON wrapped in `{"data": ...}`.
pub fn print_json<T: Serialize>(data: T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(&Output::new(data))?);
    Ok(())
}

/// One line of a topic listing: `<id>  <path>`.
pub fn topic_line(topic: &Topic) -> String {
    format!("{}  {}", topic.id(), topic_path(topic))
}

/// The topic's titles from the root down, separated by `/`.
pub fn topic_path(topic: &Topic) -> String {
    let mut path = String::new();
    for ancestor in topic.parents() {
        path.push_str(ancestor.title.as_str());
        path.push('/');
    }
    path.push_str(topic.title().as_str());
    path
}

/// One line of a card listing: `<id>  <first line of text>`.
pub fn card_line(card: &Card) -> String {
    let first = card.text().lines().find(|l| !l.trim().is_empty()).unwrap_or("");
    format!("{}  {}", card.id(), truncate_str(first.trim(), 60))
}

/// Truncates a string to a maximum display width, adding ellipsis if needed.
pub fn truncate_str(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_width.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}
