//! # Pool Predictions Library
//!
//! Service layer of a pool-prediction web application:
//! - Answering invitations to join a prediction pool
//! - Claiming a one-time, unique display nickname
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles:
//!
//! - **Domain Layer**: Entities, repository traits and nickname rules
//! - **Application Layer**: Invitation and nickname services, DTOs
//! - **Infrastructure Layer**: PostgreSQL repositories
//! - **Presentation Layer**: HTTP handlers and JWT middleware
//!
//! ## Module Structure
//!
//! ```text
//! pool_predictions/
//! +-- config/         Configuration management
//! +-- domain/         Domain entities, value objects, and traits
//! +-- application/    Application services and DTOs
//! +-- infrastructure/ Database implementations
//! +-- presentation/   HTTP routes and middleware
//! +-- shared/         Common utilities (errors)
//! ```

// Configuration module
pub mod config;

// Domain layer - Core business logic
pub mod domain;

// Application layer - Business services
pub mod application;

// Infrastructure layer - External implementations
pub mod infrastructure;

// Presentation layer - HTTP handlers
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Telemetry and observability
pub mod telemetry;
