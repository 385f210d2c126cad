//! HTTP API
//!
//! Routes and request handlers.

pub mod handlers;
pub mod routes;
