//! Row decoding for the topics and cards tables.

use crate::domain::{Ancestor, Card, Title, Topic};
use crate::store::{StoreError, StoreResult};
use chrono::{DateTime, Utc};
use rusqlite::Row;
use std::str::FromStr;

pub(super) const TOPIC_COLUMNS: &str = "id, user, title, parent, parents, date";
pub(super) const CARD_COLUMNS: &str = "id, user, topic, text, sanitized_text, date";

/// Raw column values of a topics row.
pub(super) struct TopicRow {
    id: String,
    user: String,
    title: String,
    parent: Option<String>,
    parents: String,
    date: String,
}

impl TopicRow {
    pub(super) fn read(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            user: row.get(1)?,
            title: row.get(2)?,
            parent: row.get(3)?,
            parents: row.get(4)?,
            date: row.get(5)?,
        })
    }

    pub(super) fn into_topic(self) -> StoreResult<Topic> {
        let parents: Vec<Ancestor> = serde_json::from_str(&self.parents).map_err(|e| {
            StoreError::InvalidRecord(format!("invalid parents of topic {}: {}", self.id, e))
        })?;
        let parent = self.parent.as_deref().map(|p| parse(p, "parent")).transpose()?;

        Ok(Topic::from_parts(
            parse(&self.id, "topic id")?,
            parse(&self.user, "user id")?,
            Title::new(&self.title)
                .map_err(|e| StoreError::InvalidRecord(format!("invalid title: {}", e)))?,
            parent,
            parents,
            parse_date(&self.date)?,
        ))
    }
}

/// Raw column values of a cards row.
pub(super) struct CardRow {
    id: String,
    user: String,
    topic: String,
    text: String,
    sanitized_text: String,
    date: String,
}

impl CardRow {
    pub(super) fn read(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            user: row.get(1)?,
            topic: row.get(2)?,
            text: row.get(3)?,
            sanitized_text: row.get(4)?,
            date: row.get(5)?,
        })
    }

    pub(super) fn into_card(self) -> StoreResult<Card> {
        Ok(Card::from_parts(
            parse(&self.id, "card id")?,
            parse(&self.user, "user id")?,
            parse(&self.topic, "topic id")?,
            self.text,
            self.sanitized_text,
            parse_date(&self.date)?,
        ))
    }
}

/// Serializes a topic's chain for the `parents` column.
pub(super) fn encode_parents(parents: &[Ancestor]) -> StoreResult<String> {
    serde_json::to_string(parents)
        .map_err(|e| StoreError::InvalidRecord(format!("cannot encode parents: {}", e)))
}

fn parse<T>(value: &str, what: &str) -> StoreResult<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .parse()
        .map_err(|e| StoreError::InvalidRecord(format!("invalid {} in database: {}", what, e)))
}

fn parse_date(value: &str) -> StoreResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|d| d.with_timezone(&Utc))
        .map_err(|e| StoreError::InvalidRecord(format!("invalid timestamp: {}", e)))
}
