//! Card entity: markdown text attached to one topic.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{CardId, Owned, TopicId, UserId};
use crate::infra::sanitize;

/// Error returned when card text is empty.
#[derive(Debug, Clone)]
pub struct ParseCardError(String);

impl fmt::Display for ParseCardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ParseCardError {}

/// A markdown card.
///
/// `sanitized_text` is derived from `text` every time the text is set, so a
/// card can never be persisted with a rendering of some older text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    id: CardId,
    user: UserId,
    topic: TopicId,
    text: String,
    sanitized_text: String,
    date: DateTime<Utc>,
}

impl Card {
    /// Rejects empty or whitespace-only text.
    pub fn validate_text(text: &str) -> Result<(), ParseCardError> {
        if text.trim().is_empty() {
            return Err(ParseCardError("text is required".to_string()));
        }
        Ok(())
    }

    /// Creates a card under `topic`.
    pub fn new(user: UserId, topic: TopicId, text: &str) -> Result<Self, ParseCardError> {
        Self::validate_text(text)?;
        Ok(Self {
            id: CardId::new(),
            user,
            topic,
            text: text.to_string(),
            sanitized_text: sanitize(text),
            date: Utc::now(),
        })
    }

    /// Rebuilds a card from stored fields.
    pub fn from_parts(
        id: CardId,
        user: UserId,
        topic: TopicId,
        text: String,
        sanitized_text: String,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user,
            topic,
            text,
            sanitized_text,
            date,
        }
    }

    pub fn id(&self) -> CardId {
        self.id
    }

    pub fn user(&self) -> UserId {
        self.user
    }

    pub fn topic(&self) -> TopicId {
        self.topic
    }

    /// Returns the raw markdown.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the sanitized HTML rendering of the text.
    pub fn sanitized_text(&self) -> &str {
        &self.sanitized_text
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    /// Replaces the text and regenerates the sanitized rendering.
    pub fn set_text(&mut self, text: &str) -> Result<(), ParseCardError> {
        Self::validate_text(text)?;
        self.text = text.to_string();
        self.sanitized_text = sanitize(text);
        Ok(())
    }
}

impl Owned for Card {
    fn owner(&self) -> UserId {
        self.user
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn new_renders_text() {
        let card = Card::new(UserId::new(), TopicId::new(), "**bold**").unwrap();
        assert_eq!(card.text(), "**bold**");
        assert!(card.sanitized_text().contains("<p><strong>bold</strong></p>"));
    }

    #[test]
    fn new_rejects_blank_text() {
        assert!(Card::new(UserId::new(), TopicId::new(), "").is_err());
        assert!(Card::new(UserId::new(), TopicId::new(), "  \n").is_err());
    }

    #[test]
    fn set_text_regenerates_rendering() {
        let mut card = Card::new(UserId::new(), TopicId::new(), "one").unwrap();
        card.set_text("# two").unwrap();
        assert_eq!(card.text(), "# two");
        assert!(card.sanitized_text().contains("<h1>two</h1>"));
    }

    #[test]
    fn set_text_with_same_text_keeps_rendering() {
        let mut card = Card::new(UserId::new(), TopicId::new(), "- a\n- b").unwrap();
        let before = card.sanitized_text().to_string();
        let text = card.text().to_string();
        card.set_text(&text).unwrap();
        assert_eq!(card.sanitized_text(), before);
    }

    #[test]
    fn failed_set_text_leaves_card_unchanged() {
        let mut card = Card::new(UserId::new(), TopicId::new(), "keep").unwrap();
        let before = card.clone();
        assert!(card.set_text(" ").is_err());
        assert_eq!(card, before);
    }

    #[test]
    fn sanitizes_dangerous_markup() {
        let card = Card::new(
            UserId::new(),
            TopicId::new(),
            "<img src=x onerror=alert(1)>",
        )
        .unwrap();
        assert!(!card.sanitized_text().contains("onerror"));
    }
}
