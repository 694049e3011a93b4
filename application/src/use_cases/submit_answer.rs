//! Submit Answer use case.
//!
//! Grades a submitted choice label against a stored question and reports
//! the correct label alongside the verdict.

use quiz_domain::{QuestionId, QuestionRepository, RepositoryError};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error};

/// Errors that can occur while grading an answer.
#[derive(Error, Debug)]
pub enum SubmitAnswerError {
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),

    /// The question exists but no choice is flagged correct. This is a bug
    /// in the seed data, not a wrong answer, and must never be reported to
    /// the client as `wasCorrect: false`.
    #[error("question '{id}' has no choice marked correct")]
    MissingCorrectChoice { id: QuestionId },
}

/// The result of grading one submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerOutcome {
    pub was_correct: bool,
    pub correct_answer_label: String,
}

/// Use case for submitting and grading an answer.
pub struct SubmitAnswerUseCase {
    repository: Arc<dyn QuestionRepository>,
}

impl SubmitAnswerUseCase {
    pub fn new(repository: Arc<dyn QuestionRepository>) -> Self {
        Self { repository }
    }

    /// Grade `submitted_label` against the question with `id`.
    ///
    /// Returns `Ok(None)` when the question does not exist. A label that
    /// matches no choice grades as wrong while still reporting the true
    /// correct label.
    pub async fn execute(
        &self,
        id: &QuestionId,
        submitted_label: &str,
    ) -> Result<Option<AnswerOutcome>, SubmitAnswerError> {
        let Some(question) = self.repository.find_by_id(id).await? else {
            debug!("question {} not found", id);
            return Ok(None);
        };

        let was_correct = question.check_answer(submitted_label);

        let Some(correct_choice) = question.correct_choice() else {
            error!("question {} has no choice marked correct", id);
            return Err(SubmitAnswerError::MissingCorrectChoice { id: id.clone() });
        };

        debug!(
            "graded submission '{}' for question {}: correct={}",
            submitted_label, id, was_correct
        );

        Ok(Some(AnswerOutcome {
            was_correct,
            correct_answer_label: correct_choice.label().to_string(),
        }))
    }
}
