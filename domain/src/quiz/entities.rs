//! Question entity

use crate::quiz::value_objects::{Choice, QuestionId};

/// A quiz question: a prompt sentence and an ordered set of labeled choices.
///
/// Immutable after construction. Exactly one choice is expected to be
/// marked correct; that invariant is established by seeding and is not
/// re-validated on read. A question that violates it surfaces as a
/// data-integrity error when an answer is graded, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    id: QuestionId,
    sentence: String,
    choices: Vec<Choice>,
}

impl Question {
    /// Create a new question.
    pub fn new(id: QuestionId, sentence: impl Into<String>, choices: Vec<Choice>) -> Self {
        Self {
            id,
            sentence: sentence.into(),
            choices,
        }
    }

    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    pub fn sentence(&self) -> &str {
        &self.sentence
    }

    /// The choices in their original order.
    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }

    /// Grade a submitted label against this question.
    ///
    /// The match is exact and case-sensitive. A label that matches no
    /// choice grades as wrong — submitting garbage is not an error.
    pub fn check_answer(&self, submitted_label: &str) -> bool {
        match self.choices.iter().find(|c| c.label() == submitted_label) {
            Some(choice) => choice.is_correct(),
            None => false,
        }
    }

    /// The choice marked correct, if any.
    ///
    /// Returns `None` only for malformed data; callers that need the
    /// correct label treat that as a data-integrity failure.
    pub fn correct_choice(&self) -> Option<&Choice> {
        self.choices.iter().find(|c| c.is_correct())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_question() -> Question {
        Question::new(
            QuestionId::new("q1").unwrap(),
            "Test sentence _______.",
            vec![
                Choice::new("A", "Correct", true),
                Choice::new("B", "Incorrect", false),
            ],
        )
    }

    #[test]
    fn test_check_answer_correct_label() {
        assert!(test_question().check_answer("A"));
    }

    #[test]
    fn test_check_answer_incorrect_label() {
        assert!(!test_question().check_answer("B"));
    }

    #[test]
    fn test_check_answer_unknown_label() {
        assert!(!test_question().check_answer("C"));
    }

    #[test]
    fn test_check_answer_is_case_sensitive() {
        assert!(!test_question().check_answer("a"));
    }

    #[test]
    fn test_correct_choice_found() {
        let question = test_question();
        assert_eq!(question.correct_choice().unwrap().label(), "A");
    }

    #[test]
    fn test_correct_choice_absent_on_malformed_data() {
        let question = Question::new(
            QuestionId::new("q1").unwrap(),
            "Test sentence _______.",
            vec![Choice::new("A", "Nope", false)],
        );
        assert!(question.correct_choice().is_none());
    }

    #[test]
    fn test_choices_preserve_order() {
        let labels: Vec<_> = test_question()
            .choices()
            .iter()
            .map(|c| c.label().to_string())
            .collect();
        assert_eq!(labels, vec!["A", "B"]);
    }
}
