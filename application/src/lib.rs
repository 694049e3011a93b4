//! Application layer for quizserve
//!
//! This crate contains the use cases that sit between the HTTP adapter and
//! the domain. It depends only on the domain layer.
//!
//! - [`GetQuestionUseCase`] — fetch a question and project it to a
//!   client-safe view with correctness flags removed
//! - [`SubmitAnswerUseCase`] — grade a submitted label and report the
//!   correct one

pub mod use_cases;

// Re-export commonly used types
pub use use_cases::get_question::{
    GetQuestionError, GetQuestionUseCase, PublicChoice, PublicQuestion,
};
pub use use_cases::submit_answer::{AnswerOutcome, SubmitAnswerError, SubmitAnswerUseCase};
