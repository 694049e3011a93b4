//! Question repository trait

use crate::quiz::entities::Question;
use crate::quiz::value_objects::QuestionId;
use async_trait::async_trait;
use thiserror::Error;

/// Errors raised by a repository backend.
///
/// A missing question is NOT an error — [`QuestionRepository::find_by_id`]
/// returns `Ok(None)` for that. These variants cover genuine storage
/// failures only.
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("storage backend failure: {0}")]
    Backend(String),

    #[error("stored record for question '{id}' could not be decoded: {reason}")]
    CorruptRecord { id: String, reason: String },
}

/// Repository trait for questions
///
/// This is a domain-level abstraction that defines how questions are
/// looked up. Implementations live in the infrastructure layer; use cases
/// receive one as an injected `Arc<dyn QuestionRepository>`.
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// Look up a question by id.
    ///
    /// Returns `Ok(None)` when no question with this id exists.
    async fn find_by_id(&self, id: &QuestionId) -> Result<Option<Question>, RepositoryError>;
}
