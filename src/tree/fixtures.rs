//! Shared test fixtures for tree algorithms.

use std::cell::Cell;

use chrono::Utc;

use crate::domain::{Card, CardId, Title, Topic, TopicId, UserId};
use crate::store::{NoteStore, SqliteStore, StoreError, StoreResult};

/// An in-memory store plus one user to build trees for.
pub(crate) struct Tree {
    pub store: SqliteStore,
    pub user: UserId,
}

impl Tree {
    pub fn new() -> Self {
        Self {
            store: SqliteStore::open_in_memory().unwrap(),
            user: UserId::new(),
        }
    }

    pub fn root(&mut self, title: &str) -> Topic {
        let topic = Topic::root(self.user, Title::new(title).unwrap());
        self.store.insert_topic(&topic).unwrap();
        topic
    }

    pub fn child(&mut self, parent: &Topic, title: &str) -> Topic {
        let topic = Topic::child_of(parent, self.user, Title::new(title).unwrap());
        self.store.insert_topic(&topic).unwrap();
        topic
    }

    pub fn card(&mut self, topic: &Topic, text: &str) -> Card {
        let card = Card::new(self.user, topic.id(), text).unwrap();
        self.store.insert_card(&card).unwrap();
        card
    }

    pub fn reload(&self, topic: &Topic) -> Topic {
        self.store.get_topic(topic.id()).unwrap().unwrap()
    }
}

/// Inserts a linear chain of `depth` topics with full ancestry; returns them root first.
pub(crate) fn chain(store: &mut SqliteStore, user: UserId, depth: usize) -> Vec<Topic> {
    let mut topics: Vec<Topic> = Vec::with_capacity(depth);
    for i in 0..depth {
        let title = Title::new(&format!("T{}", i)).unwrap();
        let topic = match topics.last() {
            Some(parent) => Topic::child_of(parent, user, title),
            None => Topic::root(user, title),
        };
        store.insert_topic(&topic).unwrap();
        topics.push(topic);
    }
    topics
}

/// Inserts a linear chain linked only by `parent` (empty cached chains); returns the root.
pub(crate) fn bare_chain(store: &mut SqliteStore, user: UserId, depth: usize) -> TopicId {
    let root = TopicId::new();
    let mut parent = None;
    let mut id = root;
    for i in 0..depth {
        let topic = Topic::from_parts(
            id,
            user,
            Title::new(&format!("T{}", i)).unwrap(),
            parent,
            Vec::new(),
            Utc::now(),
        );
        store.insert_topic(&topic).unwrap();
        parent = Some(id);
        id = TopicId::new();
    }
    root
}

fn injected() -> StoreError {
    StoreError::InvalidRecord("injected failure".to_string())
}

/// Store wrapper that fails one chosen write.
pub(crate) struct FailOn {
    inner: SqliteStore,
    remove_topic: Option<TopicId>,
    update_topic: Option<TopicId>,
}

impl FailOn {
    pub fn remove_topic(inner: SqliteStore, id: TopicId) -> Self {
        Self {
            inner,
            remove_topic: Some(id),
            update_topic: None,
        }
    }

    pub fn update_topic(inner: SqliteStore, id: TopicId) -> Self {
        Self {
            inner,
            remove_topic: None,
            update_topic: Some(id),
        }
    }

    pub fn into_inner(self) -> SqliteStore {
        self.inner
    }
}

impl NoteStore for FailOn {
    fn insert_topic(&mut self, topic: &Topic) -> StoreResult<()> {
        self.inner.insert_topic(topic)
    }
    fn get_topic(&self, id: TopicId) -> StoreResult<Option<Topic>> {
        self.inner.get_topic(id)
    }
    fn child_topics(&self, parent: TopicId) -> StoreResult<Vec<Topic>> {
        self.inner.child_topics(parent)
    }
    fn root_topics(&self, user: UserId) -> StoreResult<Vec<Topic>> {
        self.inner.root_topics(user)
    }
    fn topics_for_user(&self, user: UserId) -> StoreResult<Vec<Topic>> {
        self.inner.topics_for_user(user)
    }
    fn update_topic(&mut self, topic: &Topic) -> StoreResult<()> {
        if self.update_topic == Some(topic.id()) {
            return Err(injected());
        }
        self.inner.update_topic(topic)
    }
    fn remove_topic(&mut self, id: TopicId) -> StoreResult<bool> {
        if self.remove_topic == Some(id) {
            return Err(injected());
        }
        self.inner.remove_topic(id)
    }
    fn insert_card(&mut self, card: &Card) -> StoreResult<()> {
        self.inner.insert_card(card)
    }
    fn get_card(&self, id: CardId) -> StoreResult<Option<Card>> {
        self.inner.get_card(id)
    }
    fn cards_for_topic(&self, topic: TopicId) -> StoreResult<Vec<Card>> {
        self.inner.cards_for_topic(topic)
    }
    fn cards_for_user(&self, user: UserId) -> StoreResult<Vec<Card>> {
        self.inner.cards_for_user(user)
    }
    fn update_card(&mut self, card: &Card) -> StoreResult<()> {
        self.inner.update_card(card)
    }
    fn remove_card(&mut self, id: CardId) -> StoreResult<bool> {
        self.inner.remove_card(id)
    }
    fn remove_cards_for_topic(&mut self, topic: TopicId) -> StoreResult<usize> {
        self.inner.remove_cards_for_topic(topic)
    }
}

/// Store wrapper that records the order of removals and counts topic reads.
pub(crate) struct RecordingStore {
    inner: SqliteStore,
    pub ops: Vec<String>,
    pub reads: Cell<usize>,
}

impl RecordingStore {
    pub fn new(inner: SqliteStore) -> Self {
        Self {
            inner,
            ops: Vec::new(),
            reads: Cell::new(0),
        }
    }

    pub fn into_inner(self) -> SqliteStore {
        self.inner
    }
}

impl NoteStore for RecordingStore {
    fn insert_topic(&mut self, topic: &Topic) -> StoreResult<()> {
        self.inner.insert_topic(topic)
    }
    fn get_topic(&self, id: TopicId) -> StoreResult<Option<Topic>> {
        self.reads.set(self.reads.get() + 1);
        self.inner.get_topic(id)
    }
    fn child_topics(&self, parent: TopicId) -> StoreResult<Vec<Topic>> {
        self.inner.child_topics(parent)
    }
    fn root_topics(&self, user: UserId) -> StoreResult<Vec<Topic>> {
        self.inner.root_topics(user)
    }
    fn topics_for_user(&self, user: UserId) -> StoreResult<Vec<Topic>> {
        self.inner.topics_for_user(user)
    }
    fn update_topic(&mut self, topic: &Topic) -> StoreResult<()> {
        self.inner.update_topic(topic)
    }
    fn remove_topic(&mut self, id: TopicId) -> StoreResult<bool> {
        self.ops.push(format!("topic {}", id));
        self.inner.remove_topic(id)
    }
    fn insert_card(&mut self, card: &Card) -> StoreResult<()> {
        self.inner.insert_card(card)
    }
    fn get_card(&self, id: CardId) -> StoreResult<Option<Card>> {
        self.inner.get_card(id)
    }
    fn cards_for_topic(&self, topic: TopicId) -> StoreResult<Vec<Card>> {
        self.inner.cards_for_topic(topic)
    }
    fn cards_for_user(&self, user: UserId) -> StoreResult<Vec<Card>> {
        self.inner.cards_for_user(user)
    }
    fn update_card(&mut self, card: &Card) -> StoreResult<()> {
        self.inner.update_card(card)
    }
    fn remove_card(&mut self, id: CardId) -> StoreResult<bool> {
        self.inner.remove_card(id)
    }
    fn remove_cards_for_topic(&mut self, topic: TopicId) -> StoreResult<usize> {
        self.ops.push(format!("cards {}", topic));
        self.inner.remove_cards_for_topic(topic)
    }
}
