use super::{DepartmentRepository, StudentRepository};
use std::path::Path;

/// Process-wide store handle.
///
/// Opened once at startup before serving and injected into the GraphQL
/// schema; resolvers never reach for ambient global state.
pub struct Store {
    pub departments: DepartmentRepository,
    pub students: StudentRepository,
}

impl Store {
    /// Opens the store, creating the collection directories.
    ///
    /// An unusable data directory is logged rather than fatal: the server
    /// keeps accepting requests and the affected operations fail
    /// individually.
    pub fn open(data_path: &Path, id_length: usize) -> Store {
        let departments = DepartmentRepository::new(data_path, id_length);
        let students = StudentRepository::new(data_path, id_length);

        for path in [departments.path(), students.path()] {
            if let Err(e) = std::fs::create_dir_all(path) {
                tracing::error!(
                    path = %path.display(),
                    error = %e,
                    "Store directory unavailable, operations against it will fail"
                );
            }
        }

        tracing::info!(data = %data_path.display(), "Store opened");
        Store {
            departments,
            students,
        }
    }

    /// Explicit shutdown hook. The flat-file store keeps no open handles,
    /// so there is nothing to flush.
    pub fn close(&self) {
        tracing::info!("Store closed");
    }
}
