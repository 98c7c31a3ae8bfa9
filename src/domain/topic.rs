//! Topic entity and its cached ancestry chain.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{Owned, Title, TopicId, UserId};

/// One entry of a topic's cached ancestry chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ancestor {
    /// The ancestor topic.
    pub id: TopicId,
    /// The ancestor's title at the time it was last propagated.
    pub title: Title,
}

impl Ancestor {
    pub fn new(id: TopicId, title: Title) -> Self {
        Self { id, title }
    }
}

/// The cached chain does not hold the expected ancestor at the given position.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("topic {topic} has no ancestor {expected} at position {index}")]
pub struct AncestryMismatch {
    pub topic: TopicId,
    pub expected: TopicId,
    pub index: usize,
}

/// A node in a user's topic tree.
///
/// `parents` is a denormalized copy of the chain reached by following
/// `parent` links upward, root first and immediate parent last. A topic's
/// parent is fixed at creation, so the tree can never form a cycle.
///
/// # Examples
///
/// ```
/// use easynote::domain::{Title, Topic, UserId};
///
/// let user = UserId::new();
/// let root = Topic::root(user, Title::new("Rust").unwrap());
/// let child = Topic::child_of(&root, user, Title::new("Traits").unwrap());
///
/// assert_eq!(child.parent(), Some(root.id()));
/// assert_eq!(child.parents().len(), 1);
/// assert_eq!(child.parents()[0].title.as_str(), "Rust");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    id: TopicId,
    user: UserId,
    title: Title,
    parent: Option<TopicId>,
    parents: Vec<Ancestor>,
    date: DateTime<Utc>,
}

impl Topic {
    /// Creates a root topic (no parent, empty ancestry).
    pub fn root(user: UserId, title: Title) -> Self {
        Self {
            id: TopicId::new(),
            user,
            title,
            parent: None,
            parents: Vec::new(),
            date: Utc::now(),
        }
    }

    /// Creates a child of `parent`.
    ///
    /// The new chain is the parent's chain followed by the parent itself.
    /// Existence and ownership of `parent` are the caller's business.
    pub fn child_of(parent: &Topic, user: UserId, title: Title) -> Self {
        let mut parents = Vec::with_capacity(parent.parents.len() + 1);
        parents.extend(parent.parents.iter().cloned());
        parents.push(Ancestor::new(parent.id, parent.title.clone()));

        Self {
            id: TopicId::new(),
            user,
            title,
            parent: Some(parent.id),
            parents,
            date: Utc::now(),
        }
    }

    /// Rebuilds a topic from stored fields.
    pub fn from_parts(
        id: TopicId,
        user: UserId,
        title: Title,
        parent: Option<TopicId>,
        parents: Vec<Ancestor>,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user,
            title,
            parent,
            parents,
            date,
        }
    }

    pub fn id(&self) -> TopicId {
        self.id
    }

    pub fn user(&self) -> UserId {
        self.user
    }

    pub fn title(&self) -> &Title {
        &self.title
    }

    /// Returns the direct parent, or `None` for a root topic.
    pub fn parent(&self) -> Option<TopicId> {
        self.parent
    }

    /// Returns the cached ancestry chain, root first.
    pub fn parents(&self) -> &[Ancestor] {
        &self.parents
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Position this topic occupies in every descendant's chain.
    pub fn ancestry_index(&self) -> usize {
        self.parents.len()
    }

    /// Replaces the title. Descendants are not touched here.
    pub fn rename(&mut self, title: Title) {
        self.title = title;
    }

    /// Rewrites the cached title of the ancestor at `index`.
    ///
    /// Fails without modifying anything if that position does not hold
    /// `expected`.
    pub fn set_ancestor_title(
        &mut self,
        index: usize,
        expected: TopicId,
        title: Title,
    ) -> Result<(), AncestryMismatch> {
        match self.parents.get_mut(index) {
            Some(ancestor) if ancestor.id == expected => {
                ancestor.title = title;
                Ok(())
            }
            _ => Err(AncestryMismatch {
                topic: self.id,
                expected,
                index,
            }),
        }
    }

    /// Replaces the whole cached chain.
    pub fn replace_parents(&mut self, parents: Vec<Ancestor>) {
        self.parents = parents;
    }
}

impl Owned for Topic {
    fn owner(&self) -> UserId {
        self.user
    }
}
