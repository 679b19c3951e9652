//! # Campus - a GraphQL API for students and departments
//!
//! Campus is a small single-binary GraphQL server over two related record
//! kinds, backed by a flat-file JSON document store. Departments own zero or
//! more students by reference, and a department cannot be deleted while
//! students still point at it.
//!
//! ## Quick Start
//!
//! ```bash
//! # Start the server on the default port (4000)
//! campus
//!
//! # Open GraphiQL
//! open http://localhost:4000/graphql
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions
//! - [`config`]: Configuration loading and defaults
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema, resolvers, and HTTP server
//! - [`model`]: Data models (Department, Student)
//! - [`storage`]: File-based record store
//! - [`validation`]: Input validation utilities

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading and management.
///
/// Handles the optional `campus.yml` configuration file.
pub mod config;

/// Error types and result aliases.
///
/// Defines the `CampusError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema, resolvers, and the axum HTTP server.
pub mod graphql;

/// Data models for campus records.
///
/// Includes `Department` and `Student`.
pub mod model;

/// File-based record store.
///
/// One JSON document per record, atomic writes, write-time constraints.
pub mod storage;

/// Input validation utilities.
///
/// Validates IDs, required fields, and the student age range.
pub mod validation;

pub mod logging;
