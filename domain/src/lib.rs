//! Domain layer for quizserve
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Question
//!
//! A quiz item: a prompt sentence plus an ordered set of labeled choices,
//! exactly one of which is marked correct. Correctness flags are internal
//! domain data and never leave this layer unredacted — the application
//! layer projects questions to a public view before they reach a client.
//!
//! ## Grading
//!
//! [`Question::check_answer`] compares a submitted label against the
//! choices. An unknown label grades as wrong, it is not an error.

pub mod core;
pub mod quiz;

// Re-export commonly used types
pub use self::core::error::DomainError;
pub use quiz::{
    entities::Question,
    repository::{QuestionRepository, RepositoryError},
    value_objects::{Choice, QuestionId},
};
