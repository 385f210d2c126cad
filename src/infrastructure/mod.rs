//! Infrastructure Layer
//!
//! Contains implementations for external services:
//! - Database connection pool (PostgreSQL)
//! - Repository implementations of the domain traits

pub mod database;
pub mod repositories;
