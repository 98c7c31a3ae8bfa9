//! Ancestry computed from `parent` links instead of the cached chain.

use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use crate::domain::{Ancestor, Title, Topic, TopicId};
use crate::store::{NoteStore, StoreResult};

/// Outcome of walking a topic's `parent` links up to its root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved {
    /// The full chain, root first.
    Chain(Vec<Ancestor>),
    /// The walk reached a `parent` that is not stored.
    Dangling {
        /// The topic whose parent is missing.
        orphan: TopicId,
        missing: TopicId,
    },
    /// The walk came back to a topic it had already visited.
    Cycle,
}

/// Computes `topic`'s ancestry by following `parent` links through the store.
///
/// This is the read-time counterpart of the cached `parents` chain; for a
/// consistent tree the two are equal.
pub fn resolve_ancestry<S>(store: &S, topic: &Topic) -> StoreResult<Resolved>
where
    S: NoteStore + ?Sized,
{
    Ancestries::new(std::slice::from_ref(topic)).resolve(store, topic)
}

/// A topic in a resolved chain, linked to its parent.
///
/// Children share their parent's link, so a whole tree resolves to one
/// link per topic.
struct Link {
    ancestor: Ancestor,
    /// Number of topics above this one.
    depth: usize,
    up: Option<Rc<Link>>,
}

impl Link {
    fn root(id: TopicId, title: Title) -> Rc<Self> {
        Rc::new(Self {
            ancestor: Ancestor::new(id, title),
            depth: 0,
            up: None,
        })
    }

    fn below(parent: &Rc<Self>, id: TopicId, title: Title) -> Rc<Self> {
        Rc::new(Self {
            ancestor: Ancestor::new(id, title),
            depth: parent.depth + 1,
            up: Some(Rc::clone(parent)),
        })
    }

    /// The ancestors above this link, root first.
    fn ancestors(&self) -> Vec<Ancestor> {
        let mut chain = Vec::with_capacity(self.depth);
        let mut next = self.up.as_deref();
        while let Some(link) = next {
            chain.push(link.ancestor.clone());
            next = link.up.as_deref();
        }
        chain.reverse();
        chain
    }

    /// Whether `cached` lists exactly the ancestors above this link.
    fn matches(&self, cached: &[Ancestor]) -> bool {
        if cached.len() != self.depth {
            return false;
        }
        let mut next = self.up.as_deref();
        for expected in cached.iter().rev() {
            match next {
                Some(link) if link.ancestor == *expected => next = link.up.as_deref(),
                _ => return false,
            }
        }
        true
    }
}

// Unlink iteratively; the default drop recurses once per level.
impl Drop for Link {
    fn drop(&mut self) {
        let mut up = self.up.take();
        while let Some(link) = up {
            up = match Rc::try_unwrap(link) {
                Ok(mut link) => link.up.take(),
                Err(_) => None,
            };
        }
    }
}

#[derive(Clone)]
enum Outcome {
    Lineage(Rc<Link>),
    Dangling { orphan: TopicId, missing: TopicId },
    Cycle,
}

impl Outcome {
    /// The outcome of a child of the topic this outcome belongs to.
    fn below(&self, id: TopicId, title: &Title) -> Outcome {
        match self {
            Outcome::Lineage(parent) => Outcome::Lineage(Link::below(parent, id, title.clone())),
            other => other.clone(),
        }
    }

    fn into_resolved(self) -> Resolved {
        match self {
            Outcome::Lineage(link) => Resolved::Chain(link.ancestors()),
            Outcome::Dangling { orphan, missing } => Resolved::Dangling { orphan, missing },
            Outcome::Cycle => Resolved::Cycle,
        }
    }
}

#[derive(Clone)]
struct Node {
    parent: Option<TopicId>,
    title: Title,
}

impl Node {
    fn of(topic: &Topic) -> Self {
        Self {
            parent: topic.parent(),
            title: topic.title().clone(),
        }
    }
}

/// Resolves the ancestry of many topics, each at most once.
///
/// Topics handed to `new` are never read again; other parents are fetched
/// from the store when a walk reaches them.
pub(crate) struct Ancestries {
    nodes: HashMap<TopicId, Node>,
    settled: HashMap<TopicId, Outcome>,
}

impl Ancestries {
    pub(crate) fn new(topics: &[Topic]) -> Self {
        Self {
            nodes: topics.iter().map(|t| (t.id(), Node::of(t))).collect(),
            settled: HashMap::new(),
        }
    }

    pub(crate) fn resolve<S>(&mut self, store: &S, topic: &Topic) -> StoreResult<Resolved>
    where
        S: NoteStore + ?Sized,
    {
        Ok(self.settle(store, topic)?.into_resolved())
    }

    /// Like `resolve`, but `None` when the cached chain is already current.
    pub(crate) fn compare<S>(&mut self, store: &S, topic: &Topic) -> StoreResult<Option<Resolved>>
    where
        S: NoteStore + ?Sized,
    {
        let outcome = self.settle(store, topic)?;
        if let Outcome::Lineage(link) = &outcome
            && link.matches(topic.parents())
        {
            return Ok(None);
        }
        Ok(Some(outcome.into_resolved()))
    }

    fn settle<S>(&mut self, store: &S, topic: &Topic) -> StoreResult<Outcome>
    where
        S: NoteStore + ?Sized,
    {
        if let Some(done) = self.settled.get(&topic.id()) {
            return Ok(done.clone());
        }

        // Climb to a root, a settled topic, a missing parent or a repeat.
        // `top` belongs to the last topic on `path`.
        let mut path: Vec<(TopicId, Title)> = Vec::new();
        let mut on_path = HashSet::new();
        let mut id = topic.id();
        let mut title = topic.title().clone();
        let mut parent = topic.parent();
        let top = loop {
            if !on_path.insert(id) {
                break Outcome::Cycle;
            }
            path.push((id, title.clone()));
            let Some(up) = parent else {
                break Outcome::Lineage(Link::root(id, title));
            };
            if let Some(done) = self.settled.get(&up) {
                break done.below(id, &title);
            }
            let Some(node) = self.node(store, up)? else {
                break Outcome::Dangling {
                    orphan: id,
                    missing: up,
                };
            };
            id = up;
            title = node.title;
            parent = node.parent;
        };

        let mut outcome = top;
        let mut descending = path.into_iter().rev();
        if let Some((id, _)) = descending.next() {
            self.settled.insert(id, outcome.clone());
        }
        for (id, title) in descending {
            outcome = outcome.below(id, &title);
            self.settled.insert(id, outcome.clone());
        }
        Ok(outcome)
    }

    fn node<S>(&mut self, store: &S, id: TopicId) -> StoreResult<Option<Node>>
    where
        S: NoteStore + ?Sized,
    {
        if let Some(node) = self.nodes.get(&id) {
            return Ok(Some(node.clone()));
        }
        let Some(topic) = store.get_topic(id)? else {
            return Ok(None);
        };
        let node = Node::of(&topic);
        self.nodes.insert(id, node.clone());
        Ok(Some(node))
    }
}
