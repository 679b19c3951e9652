//! Data models for campus records.
//!
//! This module defines the two record kinds:
//!
//! - [`Department`]: An academic department (unique name and code)
//! - [`Student`]: A student referencing exactly one department by ID

mod department;
mod student;

pub use department::Department;
pub use student::Student;
