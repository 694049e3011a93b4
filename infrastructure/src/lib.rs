//! Infrastructure layer for quizserve
//!
//! This crate contains adapters that implement the ports defined in the
//! domain layer (the question repository) plus configuration file loading.

pub mod config;
pub mod persistence;

// Re-export commonly used types
pub use config::{ConfigLoader, FileConfig, FileDataConfig, FileServerConfig};
pub use persistence::{
    memory::InMemoryQuestionRepository,
    record::{ChoiceRecord, QuestionRecord},
    seed::{load_seed_file, sample_records},
    PersistenceError,
};
