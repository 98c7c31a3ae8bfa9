//! Cascade deletion of a topic subtree.

use std::collections::HashSet;

use serde::Serialize;
use tracing::{debug, info};

use super::{TreeResult, at};
use crate::domain::TopicId;
use crate::store::NoteStore;

/// Number of records removed by a cascade.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CascadeReport {
    pub topics: usize,
    pub cards: usize,
}

impl CascadeReport {
    pub fn is_empty(&self) -> bool {
        self.topics == 0 && self.cards == 0
    }

    pub(crate) fn absorb(&mut self, other: CascadeReport) {
        self.topics += other.topics;
        self.cards += other.cards;
    }
}

enum Frame {
    /// Remove the topic's cards and schedule its children.
    Enter(TopicId),
    /// Remove the topic itself; all of its children are gone by now.
    Exit(TopicId),
}

/// Deletes `root`, every descendant topic, and every card attached to any of them.
///
/// Order per topic: its own cards first, then each child subtree in turn
/// (first child fully before the second), then the topic itself. A crash
/// therefore leaves topics whose cards are already gone, and never leaves a
/// child whose parent was removed before it.
///
/// Deleting an id that no longer exists removes nothing and succeeds.
/// A failing step aborts the walk; records removed before it stay removed.
pub fn delete_subtree<S>(store: &mut S, root: TopicId) -> TreeResult<CascadeReport>
where
    S: NoteStore + ?Sized,
{
    let mut report = CascadeReport::default();
    let mut stack = vec![Frame::Enter(root)];
    // Guards against cycles in corrupt data.
    let mut seen = HashSet::new();

    while let Some(frame) = stack.pop() {
        match frame {
            Frame::Enter(id) => {
                if !seen.insert(id) {
                    continue;
                }
                let cards = store.remove_cards_for_topic(id).map_err(at(id))?;
                let children = store.child_topics(id).map_err(at(id))?;
                debug!(topic = %id, cards, children = children.len(), "cascade enter");

                report.cards += cards;
                stack.push(Frame::Exit(id));
                stack.extend(children.iter().rev().map(|child| Frame::Enter(child.id())));
            }
            Frame::Exit(id) => {
                if store.remove_topic(id).map_err(at(id))? {
                    report.topics += 1;
                }
            }
        }
    }

    info!(
        root = %root,
        topics = report.topics,
        cards = report.cards,
        "deleted topic subtree"
    );
    Ok(report)
}
