//! Validated topic title.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A non-empty topic title.
///
/// Surrounding whitespace is trimmed; anything else is kept as typed,
/// including case and inner punctuation.
///
/// # Examples
///
/// ```
/// use easynote::domain::Title;
///
/// let title = Title::new("  Rust ownership ").unwrap();
/// assert_eq!(title.as_str(), "Rust ownership");
/// assert!(Title::new("   ").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Title(String);

/// Error returned when a title is empty.
#[derive(Debug, Clone)]
pub struct ParseTitleError(String);

impl fmt::Display for ParseTitleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ParseTitleError {}

impl Title {
    /// Creates a title, rejecting empty or whitespace-only input.
    pub fn new(s: &str) -> Result<Self, ParseTitleError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseTitleError("title is required".to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the title as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Title(\"{}\")", self.0)
    }
}

impl FromStr for Title {
    type Err = ParseTitleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for Title {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for Title {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Title {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(Title::new("  Notes  ").unwrap().as_str(), "Notes");
    }

    #[test]
    fn rejects_empty() {
        assert!(Title::new("").is_err());
        assert!(Title::new(" \t\n").is_err());
    }

    #[test]
    fn keeps_case_and_punctuation() {
        let title = Title::new("C++ / Rust: FFI?").unwrap();
        assert_eq!(title.to_string(), "C++ / Rust: FFI?");
    }

    #[test]
    fn error_message_mentions_required() {
        let err = "".parse::<Title>().unwrap_err();
        assert!(err.to_string().contains("required"));
    }

    #[test]
    fn deserialize_rejects_blank() {
        let result: Result<Title, _> = serde_json::from_str("\"  \"");
        assert!(result.is_err());
    }
}
