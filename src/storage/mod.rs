//! File-based record store.
//!
//! Records are stored as one JSON document per file under the data
//! directory, one subdirectory per collection:
//!
//! ```text
//! data/
//!   departments/
//!     dep-a1b2c3d4e5.json
//!   students/
//!     stu-f6g7h8i9j0.json
//! ```
//!
//! Writes are atomic (temp file + rename). Uniqueness and required-field
//! constraints are enforced by the repositories at write time; there are no
//! transactions across the two collections.
//!
//! ## Components
//!
//! - [`Store`]: process-wide handle holding both repositories
//! - [`DepartmentRepository`]: CRUD for departments
//! - [`StudentRepository`]: CRUD plus reference queries for students

pub mod documents;

mod departments;
mod store;
mod students;

pub use departments::{DEPARTMENT_ID_PREFIX, DepartmentRepository};
pub use store::Store;
pub use students::{STUDENT_ID_PREFIX, StudentRepository};
