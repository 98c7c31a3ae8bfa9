//! Topic operations.

use tracing::info;

use super::{Notebook, NotebookResult, TopicContents};
use crate::domain::{Requester, Title, Topic, TopicId};
use crate::store::NoteStore;
use crate::tree::{CascadeReport, delete_subtree, propagate_title};

impl<S: NoteStore> Notebook<S> {
    /// Lists the requester's root topics, oldest first.
    pub fn list_root_topics(&self, requester: &Requester) -> NotebookResult<Vec<Topic>> {
        Ok(self.store.root_topics(requester.user())?)
    }

    /// Returns a topic with its children and cards.
    pub fn open_topic(&self, requester: &Requester, id: TopicId) -> NotebookResult<TopicContents> {
        let topic = self.owned_topic(requester, id)?;
        let children = self.store.child_topics(id)?;
        let cards = self.store.cards_for_topic(id)?;
        Ok(TopicContents {
            topic,
            children,
            cards,
        })
    }

    pub fn create_root_topic(
        &mut self,
        requester: &Requester,
        title: &str,
    ) -> NotebookResult<Topic> {
        let title = Title::new(title)?;
        let topic = Topic::root(requester.user(), title);
        self.store.insert_topic(&topic)?;
        info!(topic = %topic.id(), "created root topic");
        Ok(topic)
    }

    /// Creates a topic under `parent`, which the requester must own.
    pub fn create_child_topic(
        &mut self,
        requester: &Requester,
        parent: TopicId,
        title: &str,
    ) -> NotebookResult<Topic> {
        let title = Title::new(title)?;
        let parent = self.owned_topic(requester, parent)?;
        let topic = Topic::child_of(&parent, requester.user(), title);
        self.store.insert_topic(&topic)?;
        info!(
            topic = %topic.id(),
            parent = %parent.id(),
            depth = topic.parents().len(),
            "created child topic"
        );
        Ok(topic)
    }

    /// Renames a topic and rewrites the cached title in all its descendants.
    ///
    /// The topic itself is saved first. If propagation then fails, the
    /// rename stays and some descendants keep the old title until a repair.
    pub fn rename_topic(
        &mut self,
        requester: &Requester,
        id: TopicId,
        title: &str,
    ) -> NotebookResult<Topic> {
        let title = Title::new(title)?;
        let mut topic = self.owned_topic(requester, id)?;
        topic.rename(title);
        self.store.update_topic(&topic)?;
        propagate_title(&mut self.store, topic.ancestry_index(), id, topic.title())?;
        Ok(topic)
    }

    /// Deletes a topic, every topic below it, and all their cards.
    pub fn delete_topic(
        &mut self,
        requester: &Requester,
        id: TopicId,
    ) -> NotebookResult<CascadeReport> {
        self.owned_topic(requester, id)?;
        Ok(delete_subtree(&mut self.store, id)?)
    }
}
