//! Core types: Topic (with cached ancestry), Card, ULID ids, ownership guard

mod access;
mod card;
mod ids;
mod title;
mod topic;

pub use access::{Access, Owned, Requester, authorize};
pub use card::{Card, ParseCardError};
pub use ids::{CardId, ParseIdError, TopicId, UserId};
pub use title::{ParseTitleError, Title};
pub use topic::{Ancestor, AncestryMismatch, Topic};
