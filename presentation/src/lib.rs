//! Presentation layer for quizserve
//!
//! This crate owns the HTTP surface: warp routes, request/response JSON
//! shapes, and the mapping from use-case outcomes to status codes. It
//! depends on the application layer only; the composition root injects
//! the use cases.

pub mod http;

// Re-export commonly used types
pub use http::{
    error::{return_error, ApiError},
    routes::quiz_routes,
};
