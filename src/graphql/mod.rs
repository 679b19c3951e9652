//! GraphQL schema, resolvers, and HTTP server.
//!
//! Exposes CRUD over students and departments through a single endpoint,
//! with GraphiQL available for interactive exploration.
//!
//! ## Usage
//!
//! ```bash
//! # Start the server (PORT env var or --port flag, default 4000)
//! campus --port 4000
//!
//! # Execute a query
//! curl -s localhost:4000/graphql \
//!   -H 'content-type: application/json' \
//!   -d '{"query": "{ departments { id name students { name } } }"}'
//! ```
//!
//! ## Schema
//!
//! - **Queries**: `student`, `students`, `department`, `departments`,
//!   `searchStudents`, `studentsByDepartment`
//! - **Mutations**: `addDepartment`, `addStudent`, `updateStudent`,
//!   `updateDepartment`, `deleteStudent`, `deleteDepartment`
//!
//! The one cross-entity rule lives in `deleteDepartment`: a department with
//! referencing students cannot be deleted.

mod schema;
mod server;
mod types;

pub use schema::{CampusSchema, build_schema};
pub use server::run_server;
pub use types::*;
