//! Consistency check and repair of a user's topic tree.

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;
use tracing::{info, warn};

use super::ancestry::Ancestries;
use super::{CascadeReport, Resolved, TreeResult, at, delete_subtree};
use crate::domain::{Ancestor, CardId, TopicId, UserId};
use crate::store::{NoteStore, StoreResult};

/// A problem found in a user's stored tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Issue {
    /// The cached chain differs from the one reached through `parent` links.
    StaleAncestry {
        topic: TopicId,
        expected: Vec<Ancestor>,
    },
    /// The topic's parent is gone; the topic is left over from an interrupted cascade.
    DanglingParent { topic: TopicId, parent: TopicId },
    /// Following `parent` from this topic loops.
    ParentCycle { topic: TopicId },
    /// The card's topic is gone.
    OrphanCard { card: CardId, topic: TopicId },
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Issue::StaleAncestry { topic, .. } => {
                write!(f, "topic {}: cached ancestry is stale", topic)
            }
            Issue::DanglingParent { topic, parent } => {
                write!(f, "topic {}: parent {} does not exist", topic, parent)
            }
            Issue::ParentCycle { topic } => write!(f, "topic {}: parent links form a cycle", topic),
            Issue::OrphanCard { card, topic } => {
                write!(f, "card {}: topic {} does not exist", card, topic)
            }
        }
    }
}

/// Everything `check_user` found.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    pub issues: Vec<Issue>,
}

impl CheckReport {
    pub fn is_ok(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }
}

/// What `repair` changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RepairReport {
    /// Topics whose cached chain was rebuilt.
    pub rewritten: usize,
    /// Records removed by resumed cascades.
    pub cascade: CascadeReport,
    /// Orphan cards removed.
    pub orphan_cards: usize,
    /// Issues that cannot be fixed automatically (cycles).
    pub unresolved: usize,
}

/// Scans all topics and cards of `user` for inconsistencies.
///
/// A topic below a dangling one is not reported separately; resuming the
/// cascade on the dangling topic removes it too. Chains are resolved from
/// the loaded topics; the store is only asked for parents outside them.
pub fn check_user<S>(store: &S, user: UserId) -> StoreResult<CheckReport>
where
    S: NoteStore + ?Sized,
{
    let mut report = CheckReport::default();
    let topics = store.topics_for_user(user)?;
    let known: HashSet<TopicId> = topics.iter().map(|t| t.id()).collect();
    let mut ancestries = Ancestries::new(&topics);

    for topic in &topics {
        match ancestries.compare(store, topic)? {
            None => {}
            Some(Resolved::Chain(expected)) => {
                report.issues.push(Issue::StaleAncestry {
                    topic: topic.id(),
                    expected,
                });
            }
            Some(Resolved::Dangling { orphan, missing }) if orphan == topic.id() => {
                report.issues.push(Issue::DanglingParent {
                    topic: topic.id(),
                    parent: missing,
                });
            }
            Some(Resolved::Dangling { .. }) => {}
            Some(Resolved::Cycle) => {
                report.issues.push(Issue::ParentCycle { topic: topic.id() });
            }
        }
    }

    for card in store.cards_for_user(user)? {
        if !known.contains(&card.topic()) && store.get_topic(card.topic())?.is_none() {
            report.issues.push(Issue::OrphanCard {
                card: card.id(),
                topic: card.topic(),
            });
        }
    }

    for issue in &report.issues {
        warn!(user = %user, "{}", issue);
    }
    Ok(report)
}

/// Fixes the issues of a `check_user` report.
///
/// Resumes the cascade below dangling topics, rebuilds stale chains from the
/// resolved ancestry, and removes orphan cards. Cycles are left alone and
/// counted as unresolved.
pub fn repair<S>(store: &mut S, report: &CheckReport) -> TreeResult<RepairReport>
where
    S: NoteStore + ?Sized,
{
    let mut repaired = RepairReport::default();

    for issue in &report.issues {
        if let Issue::DanglingParent { topic, .. } = issue {
            repaired.cascade.absorb(delete_subtree(store, *topic)?);
        }
    }

    for issue in &report.issues {
        match issue {
            Issue::StaleAncestry { topic, expected } => {
                // May already be gone with a resumed cascade.
                if let Some(mut stored) = store.get_topic(*topic).map_err(at(*topic))? {
                    stored.replace_parents(expected.clone());
                    store.update_topic(&stored).map_err(at(*topic))?;
                    repaired.rewritten += 1;
                }
            }
            Issue::OrphanCard { card, topic } => {
                if store.remove_card(*card).map_err(at(*topic))? {
                    repaired.orphan_cards += 1;
                }
            }
            Issue::ParentCycle { .. } => repaired.unresolved += 1,
            Issue::DanglingParent { .. } => {}
        }
    }

    info!(
        rewritten = repaired.rewritten,
        topics = repaired.cascade.topics,
        cards = repaired.cascade.cards,
        orphan_cards = repaired.orphan_cards,
        unresolved = repaired.unresolved,
        "repaired topic tree"
    );
    Ok(repaired)
}
