//! Topic-tree algorithms: cascade deletion, title propagation, ancestry checks.
//!
//! Every traversal here keeps its own frontier on the heap, so the depth of
//! a user's tree never translates into call-stack depth. None of them is
//! transactional: a failure stops the walk and leaves completed writes in
//! place. `check` and `repair` exist to find and finish such leftovers.

mod ancestry;
mod cascade;
mod check;
mod propagate;

#[cfg(test)]
pub(crate) mod fixtures;

use crate::domain::{AncestryMismatch, TopicId};
use crate::store::StoreError;
use thiserror::Error;

pub use ancestry::{Resolved, resolve_ancestry};
pub use cascade::{CascadeReport, delete_subtree};
pub use check::{CheckReport, Issue, RepairReport, check_user, repair};
pub use propagate::propagate_title;

/// Errors raised while walking a topic tree.
#[derive(Debug, Error)]
pub enum TreeError {
    /// The store failed while the walk was at `topic`.
    #[error("store failure at topic {topic}: {source}")]
    Store {
        topic: TopicId,
        #[source]
        source: StoreError,
    },

    /// A descendant's cached chain does not contain the expected ancestor.
    #[error(transparent)]
    Ancestry(#[from] AncestryMismatch),
}

/// Result type for tree operations.
pub type TreeResult<T> = Result<T, TreeError>;

/// Tags a store error with the topic being processed.
pub(crate) fn at(topic: TopicId) -> impl FnOnce(StoreError) -> TreeError {
    move |source| TreeError::Store { topic, source }
}
