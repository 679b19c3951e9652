use super::documents;
use crate::{
    error::{CampusError, Result},
    model::Student,
    validation,
};
use std::path::{Path, PathBuf};

/// ID prefix for student records.
pub const STUDENT_ID_PREFIX: &str = "stu-";

/// Repository for student documents.
///
/// Enforces required fields, the 17-30 age range, and the uniqueness of
/// `email` and `rollNumber` at write time.
pub struct StudentRepository {
    path: PathBuf,
    id_length: usize,
}

impl StudentRepository {
    pub fn new(data_path: &Path, id_length: usize) -> Self {
        Self {
            path: data_path.join("students"),
            id_length,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn generate_id(&self) -> String {
        documents::generate_id(STUDENT_ID_PREFIX, self.id_length)
    }

    pub fn create(&self, student: &Student) -> Result<()> {
        tracing::info!(id = %student.id, name = %student.name, "Creating student");

        self.validate(student)?;
        self.check_unique(student)?;

        std::fs::create_dir_all(&self.path)?;
        documents::write_document(&self.path, &student.id, student)
    }

    pub fn get(&self, id: &str) -> Result<Student> {
        validation::validate_id(id)?;
        documents::read_document(&self.path, id)
    }

    /// All students in creation order.
    pub fn list(&self) -> Result<Vec<Student>> {
        let mut students: Vec<Student> = documents::list_documents(&self.path)?;
        students.sort_by(|a, b| a.created.cmp(&b.created));
        Ok(students)
    }

    pub fn update(&self, student: &mut Student) -> Result<()> {
        tracing::info!(id = %student.id, "Updating student");

        validation::validate_id(&student.id)?;
        if !documents::document_path(&self.path, &student.id).is_file() {
            return Err(CampusError::NotFound(student.id.clone()));
        }
        self.validate(student)?;
        self.check_unique(student)?;

        student.touch();
        documents::write_document(&self.path, &student.id, student)
    }

    /// Deletes a student and returns their pre-delete state.
    pub fn delete(&self, id: &str) -> Result<Student> {
        tracing::info!(id = %id, "Deleting student");

        let student = self.get(id)?;
        documents::remove_document(&self.path, id)?;
        Ok(student)
    }

    /// Students whose stored department reference equals the given ID.
    pub fn find_by_department(&self, department_id: &str) -> Result<Vec<Student>> {
        Ok(self
            .list()?
            .into_iter()
            .filter(|s| s.department == department_id)
            .collect())
    }

    pub fn count_by_department(&self, department_id: &str) -> Result<usize> {
        Ok(self.find_by_department(department_id)?.len())
    }

    /// Case-insensitive substring match on the student name.
    pub fn search_by_name(&self, name: &str) -> Result<Vec<Student>> {
        let needle = name.to_lowercase();
        Ok(self
            .list()?
            .into_iter()
            .filter(|s| s.name.to_lowercase().contains(&needle))
            .collect())
    }

    fn validate(&self, student: &Student) -> Result<()> {
        validation::validate_id(&student.id)?;
        validation::validate_required("name", &student.name)?;
        validation::validate_required("email", &student.email)?;
        validation::validate_required("rollNumber", &student.roll_number)?;
        validation::validate_required("department", &student.department)?;
        validation::validate_age(student.age)?;
        Ok(())
    }

    fn check_unique(&self, student: &Student) -> Result<()> {
        for other in self.list()? {
            if other.id == student.id {
                continue;
            }
            if other.email == student.email {
                return Err(CampusError::Constraint(format!(
                    "Email '{}' is already taken",
                    student.email
                )));
            }
            if other.roll_number == student.roll_number {
                return Err(CampusError::Constraint(format!(
                    "Roll number '{}' is already taken",
                    student.roll_number
                )));
            }
        }
        Ok(())
    }
}
