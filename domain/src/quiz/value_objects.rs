//! Quiz domain value objects - immutable types for questions and choices.
//!
//! # Identifiers
//! - [`QuestionId`] - Validated, nominally-typed identifier for a question
//!
//! # Building blocks
//! - [`Choice`] - A labeled answer option carrying an internal correctness flag

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Validated identifier for a [`Question`](crate::quiz::entities::Question).
///
/// A `QuestionId` is a newtype over `String` so it cannot be silently
/// interchanged with other identifier kinds or with unvalidated input.
/// Construction rejects empty (or whitespace-only) strings; deserialization
/// goes through the same check.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct QuestionId(String);

impl QuestionId {
    /// Create a validated QuestionId.
    ///
    /// Fails with [`DomainError::EmptyQuestionId`] when the input is empty
    /// or contains only whitespace.
    pub fn new(id: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(DomainError::EmptyQuestionId);
        }
        Ok(Self(id))
    }

    /// Returns the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for QuestionId {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<QuestionId> for String {
    fn from(id: QuestionId) -> Self {
        id.0
    }
}

impl std::fmt::Display for QuestionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single multiple-choice option (Value Object).
///
/// The correctness flag is internal domain data. It is deliberately not a
/// public field: only the grading logic in this crate reads it, and the
/// public projection built by the application layer drops it entirely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    label: String,
    text: String,
    is_correct: bool,
}

impl Choice {
    /// Create a new choice.
    ///
    /// Label uniqueness within a question is assumed by the seeding process,
    /// not re-validated here.
    pub fn new(label: impl Into<String>, text: impl Into<String>, is_correct: bool) -> Self {
        Self {
            label: label.into(),
            text: text.into(),
            is_correct,
        }
    }

    /// The short label a client submits (e.g. "A").
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The display text of the option.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether this choice is the correct answer.
    pub fn is_correct(&self) -> bool {
        self.is_correct
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_id_round_trips() {
        let id = QuestionId::new("q1").unwrap();
        assert_eq!(id.as_str(), "q1");
        assert_eq!(id.to_string(), "q1");
        assert_eq!(String::from(id), "q1");
    }

    #[test]
    fn test_empty_question_id_rejected() {
        assert_eq!(
            QuestionId::new("").unwrap_err(),
            DomainError::EmptyQuestionId
        );
        assert_eq!(
            QuestionId::new("   ").unwrap_err(),
            DomainError::EmptyQuestionId
        );
    }

    #[test]
    fn test_question_id_deserialization_validates() {
        let ok: Result<QuestionId, _> = serde_json::from_str("\"q1\"");
        assert_eq!(ok.unwrap().as_str(), "q1");

        let err: Result<QuestionId, _> = serde_json::from_str("\"\"");
        assert!(err.is_err());
    }

    #[test]
    fn test_choice_accessors() {
        let choice = Choice::new("A", "remarkably", true);
        assert_eq!(choice.label(), "A");
        assert_eq!(choice.text(), "remarkably");
        assert!(choice.is_correct());
    }
}
