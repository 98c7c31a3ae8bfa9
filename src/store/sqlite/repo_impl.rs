//! NoteStore implementation for SqliteStore.

use super::SqliteStore;
use super::rows::{CARD_COLUMNS, CardRow, TOPIC_COLUMNS, TopicRow, encode_parents};
use crate::domain::{Card, CardId, Topic, TopicId, UserId};
use crate::store::{NoteStore, StoreError, StoreResult};
use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::OptionalExtension;

/// Fixed-width timestamps so that text ordering matches time ordering.
fn format_date(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

impl SqliteStore {
    fn query_topics(&self, filter: &str, param: &str) -> StoreResult<Vec<Topic>> {
        let sql = format!(
            "SELECT {} FROM topics WHERE {} ORDER BY date, id",
            TOPIC_COLUMNS, filter
        );
        let rows = self
            .conn
            .prepare(&sql)?
            .query_map([param], TopicRow::read)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        rows.into_iter().map(TopicRow::into_topic).collect()
    }

    fn query_cards(&self, filter: &str, param: &str) -> StoreResult<Vec<Card>> {
        let sql = format!(
            "SELECT {} FROM cards WHERE {} ORDER BY date, id",
            CARD_COLUMNS, filter
        );
        let rows = self
            .conn
            .prepare(&sql)?
            .query_map([param], CardRow::read)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        rows.into_iter().map(CardRow::into_card).collect()
    }
}

impl NoteStore for SqliteStore {
    fn insert_topic(&mut self, topic: &Topic) -> StoreResult<()> {
        self.conn.execute(
            "INSERT INTO topics (id, user, title, parent, parents, date)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            rusqlite::params![
                topic.id().to_string(),
                topic.user().to_string(),
                topic.title().as_str(),
                topic.parent().map(|p| p.to_string()),
                encode_parents(topic.parents())?,
                format_date(topic.date()),
            ],
        )?;
        Ok(())
    }

    fn get_topic(&self, id: TopicId) -> StoreResult<Option<Topic>> {
        let sql = format!("SELECT {} FROM topics WHERE id = ?", TOPIC_COLUMNS);
        let row = self
            .conn
            .query_row(&sql, [id.to_string()], TopicRow::read)
            .optional()?;
        row.map(TopicRow::into_topic).transpose()
    }

    fn child_topics(&self, parent: TopicId) -> StoreResult<Vec<Topic>> {
        self.query_topics("parent = ?", &parent.to_string())
    }

    fn root_topics(&self, user: UserId) -> StoreResult<Vec<Topic>> {
        self.query_topics("user = ? AND parent IS NULL", &user.to_string())
    }

    fn topics_for_user(&self, user: UserId) -> StoreResult<Vec<Topic>> {
        self.query_topics("user = ?", &user.to_string())
    }

    fn update_topic(&mut self, topic: &Topic) -> StoreResult<()> {
        let changed = self.conn.execute(
            "UPDATE topics SET title = ?2, parents = ?3 WHERE id = ?1",
            rusqlite::params![
                topic.id().to_string(),
                topic.title().as_str(),
                encode_parents(topic.parents())?,
            ],
        )?;
        if changed == 0 {
            return Err(StoreError::TopicNotFound { id: topic.id() });
        }
        Ok(())
    }

    fn remove_topic(&mut self, id: TopicId) -> StoreResult<bool> {
        let removed = self
            .conn
            .execute("DELETE FROM topics WHERE id = ?", [id.to_string()])?;
        Ok(removed > 0)
    }

    fn insert_card(&mut self, card: &Card) -> StoreResult<()> {
        self.conn.execute(
            "INSERT INTO cards (id, user, topic, text, sanitized_text, date)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            rusqlite::params![
                card.id().to_string(),
                card.user().to_string(),
                card.topic().to_string(),
                card.text(),
                card.sanitized_text(),
                format_date(card.date()),
            ],
        )?;
        Ok(())
    }

    fn get_card(&self, id: CardId) -> StoreResult<Option<Card>> {
        let sql = format!("SELECT {} FROM cards WHERE id = ?", CARD_COLUMNS);
        let row = self
            .conn
            .query_row(&sql, [id.to_string()], CardRow::read)
            .optional()?;
        row.map(CardRow::into_card).transpose()
    }

    fn cards_for_topic(&self, topic: TopicId) -> StoreResult<Vec<Card>> {
        self.query_cards("topic = ?", &topic.to_string())
    }

    fn cards_for_user(&self, user: UserId) -> StoreResult<Vec<Card>> {
        self.query_cards("user = ?", &user.to_string())
    }

    fn update_card(&mut self, card: &Card) -> StoreResult<()> {
        let changed = self.conn.execute(
            "UPDATE cards SET text = ?2, sanitized_text = ?3 WHERE id = ?1",
            rusqlite::params![
                card.id().to_string(),
                card.text(),
                card.sanitized_text(),
            ],
        )?;
        if changed == 0 {
            return Err(StoreError::CardNotFound { id: card.id() });
        }
        Ok(())
    }

    fn remove_card(&mut self, id: CardId) -> StoreResult<bool> {
        let removed = self
            .conn
            .execute("DELETE FROM cards WHERE id = ?", [id.to_string()])?;
        Ok(removed > 0)
    }

    fn remove_cards_for_topic(&mut self, topic: TopicId) -> StoreResult<usize> {
        Ok(self
            .conn
            .execute("DELETE FROM cards WHERE topic = ?", [topic.to_string()])?)
    }
}
