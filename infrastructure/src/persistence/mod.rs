//! Persistence adapters for the question repository.
//!
//! Storage records use the same JSON shape as the original seed data:
//! `{id, sentence, choices:[{label, text, isCorrect}]}`. The mapping from
//! record to entity is the only place correctness flags enter the domain.

pub mod memory;
pub mod record;
pub mod seed;

use quiz_domain::DomainError;
use thiserror::Error;

/// Errors raised while loading or decoding stored questions.
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("failed to read seed file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse seed data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid question record: {0}")]
    InvalidRecord(#[from] DomainError),
}
