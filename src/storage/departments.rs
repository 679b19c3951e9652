use super::documents;
use crate::{
    error::{CampusError, Result},
    model::Department,
    validation,
};
use std::path::{Path, PathBuf};

/// ID prefix for department records.
pub const DEPARTMENT_ID_PREFIX: &str = "dep-";

/// Repository for department documents.
///
/// Enforces required fields and the uniqueness of `name` and `code` at write
/// time. Uniqueness is a scan over the collection, not an index; with two
/// small collections that is the whole store.
pub struct DepartmentRepository {
    path: PathBuf,
    id_length: usize,
}

impl DepartmentRepository {
    pub fn new(data_path: &Path, id_length: usize) -> Self {
        Self {
            path: data_path.join("departments"),
            id_length,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn generate_id(&self) -> String {
        documents::generate_id(DEPARTMENT_ID_PREFIX, self.id_length)
    }

    pub fn create(&self, department: &Department) -> Result<()> {
        tracing::info!(id = %department.id, name = %department.name, "Creating department");

        self.validate(department)?;
        self.check_unique(department)?;

        std::fs::create_dir_all(&self.path)?;
        documents::write_document(&self.path, &department.id, department)
    }

    pub fn get(&self, id: &str) -> Result<Department> {
        validation::validate_id(id)?;
        documents::read_document(&self.path, id)
    }

    pub fn exists(&self, id: &str) -> bool {
        validation::validate_id(id).is_ok() && documents::document_path(&self.path, id).is_file()
    }

    /// All departments in creation order.
    pub fn list(&self) -> Result<Vec<Department>> {
        let mut departments: Vec<Department> = documents::list_documents(&self.path)?;
        departments.sort_by(|a, b| a.created.cmp(&b.created));
        Ok(departments)
    }

    pub fn update(&self, department: &mut Department) -> Result<()> {
        tracing::info!(id = %department.id, "Updating department");

        if !self.exists(&department.id) {
            return Err(CampusError::NotFound(department.id.clone()));
        }
        self.validate(department)?;
        self.check_unique(department)?;

        department.touch();
        documents::write_document(&self.path, &department.id, department)
    }

    /// Deletes a department and returns its pre-delete state.
    pub fn delete(&self, id: &str) -> Result<Department> {
        tracing::info!(id = %id, "Deleting department");

        let department = self.get(id)?;
        documents::remove_document(&self.path, id)?;
        Ok(department)
    }

    fn validate(&self, department: &Department) -> Result<()> {
        validation::validate_id(&department.id)?;
        validation::validate_required("name", &department.name)?;
        validation::validate_required("code", &department.code)?;
        validation::validate_required("hod", &department.hod)?;
        Ok(())
    }

    /// The record itself is excluded from the scan, so updates that keep a
    /// field unchanged never trip over their own document.
    fn check_unique(&self, department: &Department) -> Result<()> {
        for other in self.list()? {
            if other.id == department.id {
                continue;
            }
            if other.name == department.name {
                return Err(CampusError::Constraint(format!(
                    "Department name '{}' is already taken",
                    department.name
                )));
            }
            if other.code == department.code {
                return Err(CampusError::Constraint(format!(
                    "Department code '{}' is already taken",
                    department.code
                )));
            }
        }
        Ok(())
    }
}
