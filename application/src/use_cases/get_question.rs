//! Get Question use case.
//!
//! Fetches a question and projects it to a public view. The projection is
//! the security boundary of the whole service: whatever a client receives
//! from this use case structurally cannot carry correctness flags.

use quiz_domain::{Question, QuestionId, QuestionRepository, RepositoryError};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while fetching a question.
///
/// "Not found" is not among them — an absent question is an expected
/// outcome and comes back as `Ok(None)`.
#[derive(Error, Debug)]
pub enum GetQuestionError {
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),
}

/// A client-safe view of a choice: label and text only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublicChoice {
    pub label: String,
    pub text: String,
}

/// A client-safe view of a question.
///
/// Built as a fresh record from the entity; there is no field that could
/// hold a correctness flag, so the view cannot leak one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublicQuestion {
    pub id: QuestionId,
    pub sentence: String,
    pub choices: Vec<PublicChoice>,
}

impl From<&Question> for PublicQuestion {
    fn from(question: &Question) -> Self {
        Self {
            id: question.id().clone(),
            sentence: question.sentence().to_string(),
            choices: question
                .choices()
                .iter()
                .map(|c| PublicChoice {
                    label: c.label().to_string(),
                    text: c.text().to_string(),
                })
                .collect(),
        }
    }
}

/// Use case for fetching the public view of a question.
pub struct GetQuestionUseCase {
    repository: Arc<dyn QuestionRepository>,
}

impl GetQuestionUseCase {
    pub fn new(repository: Arc<dyn QuestionRepository>) -> Self {
        Self { repository }
    }

    /// Fetch the question with `id` and strip it for client consumption.
    ///
    /// Returns `Ok(None)` when the question does not exist.
    pub async fn execute(
        &self,
        id: &QuestionId,
    ) -> Result<Option<PublicQuestion>, GetQuestionError> {
        let Some(question) = self.repository.find_by_id(id).await? else {
            debug!("question {} not found", id);
            return Ok(None);
        };

        Ok(Some(PublicQuestion::from(&question)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use quiz_domain::Choice;

    struct MockRepository {
        question: Option<Question>,
    }

    #[async_trait]
    impl QuestionRepository for MockRepository {
        async fn find_by_id(
            &self,
            _id: &QuestionId,
        ) -> Result<Option<Question>, RepositoryError> {
            Ok(self.question.clone())
        }
    }

    struct FailingRepository;

    #[async_trait]
    impl QuestionRepository for FailingRepository {
        async fn find_by_id(
            &self,
            _id: &QuestionId,
        ) -> Result<Option<Question>, RepositoryError> {
            Err(RepositoryError::Backend("kv store unavailable".into()))
        }
    }

    fn question_id(raw: &str) -> QuestionId {
        QuestionId::new(raw).unwrap()
    }

    fn stored_question() -> Question {
        Question::new(
            question_id("q1"),
            "Test sentence _______.",
            vec![
                Choice::new("A", "A", false),
                Choice::new("B", "B", true),
            ],
        )
    }

    #[tokio::test]
    async fn test_returns_public_view_when_found() {
        let use_case = GetQuestionUseCase::new(Arc::new(MockRepository {
            question: Some(stored_question()),
        }));

        let result = use_case.execute(&question_id("q1")).await.unwrap().unwrap();

        assert_eq!(
            result,
            PublicQuestion {
                id: question_id("q1"),
                sentence: "Test sentence _______.".to_string(),
                choices: vec![
                    PublicChoice {
                        label: "A".to_string(),
                        text: "A".to_string(),
                    },
                    PublicChoice {
                        label: "B".to_string(),
                        text: "B".to_string(),
                    },
                ],
            }
        );
    }

    #[tokio::test]
    async fn test_returns_none_when_not_found() {
        let use_case = GetQuestionUseCase::new(Arc::new(MockRepository { question: None }));

        let result = use_case.execute(&question_id("non-existent")).await.unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_serialized_view_never_contains_correctness() {
        let use_case = GetQuestionUseCase::new(Arc::new(MockRepository {
            question: Some(stored_question()),
        }));

        let result = use_case.execute(&question_id("q1")).await.unwrap().unwrap();
        let json = serde_json::to_string(&result).unwrap();

        assert!(!json.contains("isCorrect"));
        assert!(!json.contains("is_correct"));
        assert!(!json.contains("correct"));
    }

    #[tokio::test]
    async fn test_repository_failure_propagates() {
        let use_case = GetQuestionUseCase::new(Arc::new(FailingRepository));

        let result = use_case.execute(&question_id("q1")).await;

        assert!(matches!(
            result.unwrap_err(),
            GetQuestionError::Repository(_)
        ));
    }
}
