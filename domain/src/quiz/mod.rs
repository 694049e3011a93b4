//! Quiz subdomain — questions, choices, and the repository seam.
//!
//! - [`value_objects::QuestionId`] — validated question identifier
//! - [`value_objects::Choice`] — a labeled option with an internal correctness flag
//! - [`entities::Question`] — the question aggregate and its grading rule
//! - [`repository::QuestionRepository`] — storage abstraction

pub mod entities;
pub mod repository;
pub mod value_objects;
