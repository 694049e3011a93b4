//! HTTP adapter: routes, handlers, and error mapping.

pub mod error;
pub mod handlers;
pub mod routes;
