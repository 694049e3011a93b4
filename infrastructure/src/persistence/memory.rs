//! In-memory key-value repository.
//!
//! The store is loaded once at startup and never mutated afterwards, so
//! lookups need no locking; `find_by_id` hands out a cloned snapshot.

use crate::persistence::record::QuestionRecord;
use crate::persistence::seed::sample_records;
use crate::persistence::PersistenceError;
use async_trait::async_trait;
use quiz_domain::{Question, QuestionId, QuestionRepository, RepositoryError};
use std::collections::HashMap;

/// [`QuestionRepository`] backed by an in-process map keyed by question id.
pub struct InMemoryQuestionRepository {
    questions: HashMap<QuestionId, Question>,
}

impl InMemoryQuestionRepository {
    /// Build a repository from storage records.
    ///
    /// Fails if any record does not map to a valid entity; a later record
    /// with a duplicate id replaces the earlier one, as in a KV store.
    pub fn from_records(records: Vec<QuestionRecord>) -> Result<Self, PersistenceError> {
        let mut questions = HashMap::with_capacity(records.len());
        for record in records {
            let question = record.into_entity()?;
            questions.insert(question.id().clone(), question);
        }
        Ok(Self { questions })
    }

    /// Build a repository preloaded with the built-in sample questions.
    pub fn with_sample_questions() -> Self {
        Self::from_records(sample_records()).expect("built-in sample records are valid")
    }

    /// Number of stored questions.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

#[async_trait]
impl QuestionRepository for InMemoryQuestionRepository {
    async fn find_by_id(&self, id: &QuestionId) -> Result<Option<Question>, RepositoryError> {
        Ok(self.questions.get(id).cloned())
    }
}
