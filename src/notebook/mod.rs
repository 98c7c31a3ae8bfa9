//! Notebook service: topic and card operations on behalf of a requester.

mod cards;
mod topics;


use serde::Serialize;
use thiserror::Error;

use crate::domain::{
    Access, Card, CardId, Owned, ParseCardError, ParseTitleError, Requester, Topic, TopicId,
};
use crate::store::{NoteStore, StoreError};
use crate::tree::{CheckReport, RepairReport, TreeError, check_user, repair};

/// Errors returned by notebook operations.
#[derive(Debug, Error)]
pub enum NotebookError {
    #[error("topic not found: {0}")]
    TopicNotFound(TopicId),

    #[error("card not found: {0}")]
    CardNotFound(CardId),

    /// The entity belongs to another user.
    #[error("not authorized")]
    Unauthorized,

    /// Input was rejected before anything was looked up.
    #[error("validation failed: {0}")]
    Validation(String),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Tree(#[from] TreeError),
}

impl From<ParseTitleError> for NotebookError {
    fn from(err: ParseTitleError) -> Self {
        NotebookError::Validation(err.to_string())
    }
}

impl From<ParseCardError> for NotebookError {
    fn from(err: ParseCardError) -> Self {
        NotebookError::Validation(err.to_string())
    }
}

/// Result type for notebook operations.
pub type NotebookResult<T> = Result<T, NotebookError>;

impl Requester {
    /// Fails with [`NotebookError::Unauthorized`] unless this requester owns `entity`.
    pub fn ensure_owns(&self, entity: &impl Owned) -> NotebookResult<()> {
        match self.access(entity) {
            Access::Allowed => Ok(()),
            Access::Denied => Err(NotebookError::Unauthorized),
        }
    }
}

/// A topic together with its direct children and its cards.
#[derive(Debug, Clone, Serialize)]
pub struct TopicContents {
    pub topic: Topic,
    pub children: Vec<Topic>,
    pub cards: Vec<Card>,
}

/// Topic and card operations over a [`NoteStore`].
///
/// Every operation takes the [`Requester`] it runs for; reads and writes of
/// a single topic or card are refused unless the requester owns it.
pub struct Notebook<S: NoteStore> {
    store: S,
}

impl<S: NoteStore> Notebook<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Scans the requester's topics and cards for inconsistencies.
    pub fn check(&self, requester: &Requester) -> NotebookResult<CheckReport> {
        Ok(check_user(&self.store, requester.user())?)
    }

    /// Checks the requester's data and fixes what can be fixed.
    pub fn repair(&mut self, requester: &Requester) -> NotebookResult<(CheckReport, RepairReport)> {
        let report = check_user(&self.store, requester.user())?;
        let repaired = repair(&mut self.store, &report)?;
        Ok((report, repaired))
    }

    fn owned_topic(&self, requester: &Requester, id: TopicId) -> NotebookResult<Topic> {
        let topic = self
            .store
            .get_topic(id)?
            .ok_or(NotebookError::TopicNotFound(id))?;
        requester.ensure_owns(&topic)?;
        Ok(topic)
    }

    fn owned_card(&self, requester: &Requester, id: CardId) -> NotebookResult<Card> {
        let card = self
            .store
            .get_card(id)?
            .ok_or(NotebookError::CardNotFound(id))?;
        requester.ensure_owns(&card)?;
        Ok(card)
    }
}
