//! Propagation of a renamed topic's title into its descendants' cached chains.

use std::collections::HashSet;

use tracing::{debug, info};

use super::{TreeResult, at};
use crate::domain::{Title, TopicId};
use crate::store::NoteStore;

/// Rewrites `parents[index].title` to `title` in every descendant of `renamed`.
///
/// `index` is the renamed topic's own position in its descendants' chains
/// (its `ancestry_index`). It is the same for every descendant and is never
/// recomputed during the walk. Each rewritten descendant must actually hold
/// `renamed` at that position, otherwise the walk stops with
/// [`TreeError::Ancestry`](super::TreeError::Ancestry).
///
/// Each descendant is rewritten at most once, even if `parent` links loop.
///
/// Returns how many descendants were rewritten. A failure stops the walk;
/// descendants already saved keep the new title.
pub fn propagate_title<S>(
    store: &mut S,
    index: usize,
    renamed: TopicId,
    title: &Title,
) -> TreeResult<usize>
where
    S: NoteStore + ?Sized,
{
    let mut frontier = vec![renamed];
    let mut seen = HashSet::from([renamed]);
    let mut rewritten = 0;

    while let Some(current) = frontier.pop() {
        let children = store.child_topics(current).map_err(at(current))?;
        for mut child in children {
            if !seen.insert(child.id()) {
                continue;
            }
            child.set_ancestor_title(index, renamed, title.clone())?;
            store.update_topic(&child).map_err(at(child.id()))?;
            debug!(topic = %child.id(), index, "propagated ancestor title");

            rewritten += 1;
            frontier.push(child.id());
        }
    }

    info!(topic = %renamed, index, rewritten, "propagated title to descendants");
    Ok(rewritten)
}
