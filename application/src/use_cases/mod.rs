//! Use cases

pub mod get_question;
pub mod submit_answer;
