//! NoteStore trait and store errors.

use crate::domain::{Card, CardId, Topic, TopicId, UserId};
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur in the persistence layer.
#[derive(Debug, Error)]
pub enum StoreError {
    /// An update targeted a topic that is not stored.
    #[error("topic not found: {id}")]
    TopicNotFound { id: TopicId },

    /// An update targeted a card that is not stored.
    #[error("card not found: {id}")]
    CardNotFound { id: CardId },

    /// A database error occurred.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A stored value could not be decoded.
    #[error("invalid record: {0}")]
    InvalidRecord(String),

    /// An I/O error occurred.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence boundary for the topic and card collections.
///
/// Lookups by filter return records ordered by creation date, then id.
/// Removal by id is idempotent: removing a missing record reports `false`
/// (or zero) and changes nothing.
pub trait NoteStore {
    /// Stores a new topic.
    fn insert_topic(&mut self, topic: &Topic) -> StoreResult<()>;

    /// Fetches a topic by id.
    fn get_topic(&self, id: TopicId) -> StoreResult<Option<Topic>>;

    /// Topics whose `parent` is `parent`.
    fn child_topics(&self, parent: TopicId) -> StoreResult<Vec<Topic>>;

    /// Topics of `user` that have no parent.
    fn root_topics(&self, user: UserId) -> StoreResult<Vec<Topic>>;

    /// Every topic owned by `user`.
    fn topics_for_user(&self, user: UserId) -> StoreResult<Vec<Topic>>;

    /// Saves the mutable fields (`title`, `parents`) of an existing topic.
    fn update_topic(&mut self, topic: &Topic) -> StoreResult<()>;

    /// Removes a topic. Returns whether a record was removed.
    fn remove_topic(&mut self, id: TopicId) -> StoreResult<bool>;

    /// Stores a new card.
    fn insert_card(&mut self, card: &Card) -> StoreResult<()>;

    /// Fetches a card by id.
    fn get_card(&self, id: CardId) -> StoreResult<Option<Card>>;

    /// Cards attached to `topic`.
    fn cards_for_topic(&self, topic: TopicId) -> StoreResult<Vec<Card>>;

    /// Every card owned by `user`.
    fn cards_for_user(&self, user: UserId) -> StoreResult<Vec<Card>>;

    /// Saves the text and rendering of an existing card.
    fn update_card(&mut self, card: &Card) -> StoreResult<()>;

    /// Removes a card. Returns whether a record was removed.
    fn remove_card(&mut self, id: CardId) -> StoreResult<bool>;

    /// Removes every card attached to `topic`. Returns how many were removed.
    fn remove_cards_for_topic(&mut self, topic: TopicId) -> StoreResult<usize>;
}
