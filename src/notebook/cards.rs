//! Card operations.

use tracing::info;

use super::{Notebook, NotebookError, NotebookResult};
use crate::domain::{Card, CardId, Requester, TopicId};
use crate::store::NoteStore;

impl<S: NoteStore> Notebook<S> {
    /// Lists the cards of a topic the requester owns.
    pub fn list_cards(&self, requester: &Requester, topic: TopicId) -> NotebookResult<Vec<Card>> {
        self.owned_topic(requester, topic)?;
        Ok(self.store.cards_for_topic(topic)?)
    }

    pub fn get_card(&self, requester: &Requester, id: CardId) -> NotebookResult<Card> {
        self.owned_card(requester, id)
    }

    pub fn create_card(
        &mut self,
        requester: &Requester,
        topic: TopicId,
        text: &str,
    ) -> NotebookResult<Card> {
        let card = Card::new(requester.user(), topic, text)?;
        self.owned_topic(requester, topic)?;
        self.store.insert_card(&card)?;
        info!(card = %card.id(), topic = %topic, "created card");
        Ok(card)
    }

    /// Replaces a card's text; the sanitized rendering is regenerated.
    pub fn update_card(
        &mut self,
        requester: &Requester,
        id: CardId,
        text: &str,
    ) -> NotebookResult<Card> {
        Card::validate_text(text)?;
        let mut card = self.owned_card(requester, id)?;
        card.set_text(text)?;
        self.store.update_card(&card)?;
        Ok(card)
    }

    pub fn delete_card(&mut self, requester: &Requester, id: CardId) -> NotebookResult<()> {
        self.owned_card(requester, id)?;
        if !self.store.remove_card(id)? {
            return Err(NotebookError::CardNotFound(id));
        }
        info!(card = %id, "deleted card");
        Ok(())
    }
}
