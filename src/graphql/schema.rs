use std::sync::Arc;

use async_graphql::{Context, EmptySubscription, ID, Object, Schema};

use crate::error::CampusError;
use crate::model;
use crate::storage::Store;
use crate::validation;

use super::types::*;

pub type CampusSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(store: Arc<Store>) -> CampusSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(store)
        .finish()
}

pub(super) fn store(ctx: &Context<'_>) -> Arc<Store> {
    ctx.data::<Arc<Store>>().unwrap().clone()
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Get a single student by ID
    async fn student(&self, ctx: &Context<'_>, id: ID) -> async_graphql::Result<Option<Student>> {
        let store = store(ctx);
        match store.students.get(&id) {
            Ok(student) => Ok(Some(student.into())),
            Err(CampusError::NotFound(_)) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// List all students in the store's natural order
    async fn students(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Student>> {
        let store = store(ctx);
        Ok(store
            .students
            .list()?
            .into_iter()
            .map(Into::into)
            .collect())
    }

    /// Get a single department by ID
    async fn department(
        &self,
        ctx: &Context<'_>,
        id: ID,
    ) -> async_graphql::Result<Option<Department>> {
        let store = store(ctx);
        match store.departments.get(&id) {
            Ok(department) => Ok(Some(department.into())),
            Err(CampusError::NotFound(_)) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// List all departments
    async fn departments(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Department>> {
        let store = store(ctx);
        Ok(store
            .departments
            .list()?
            .into_iter()
            .map(Into::into)
            .collect())
    }

    /// Search students by name, case-insensitive substring match
    async fn search_students(
        &self,
        ctx: &Context<'_>,
        name: String,
    ) -> async_graphql::Result<Vec<Student>> {
        let store = store(ctx);
        Ok(store
            .students
            .search_by_name(&name)?
            .into_iter()
            .map(Into::into)
            .collect())
    }

    /// Students whose department reference equals the given ID
    async fn students_by_department(
        &self,
        ctx: &Context<'_>,
        department_id: ID,
    ) -> async_graphql::Result<Vec<Student>> {
        validation::validate_id(&department_id)?;
        let store = store(ctx);
        Ok(store
            .students
            .find_by_department(&department_id)?
            .into_iter()
            .map(Into::into)
            .collect())
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Create a new department
    async fn add_department(
        &self,
        ctx: &Context<'_>,
        input: AddDepartmentInput,
    ) -> async_graphql::Result<Department> {
        let store = store(ctx);
        let id = store.departments.generate_id();

        let department = model::Department::new(id, input.name, input.code, input.hod)
            .with_building(input.building);

        store.departments.create(&department)?;
        Ok(department.into())
    }

    /// Create a new student; the referenced department must exist
    async fn add_student(
        &self,
        ctx: &Context<'_>,
        input: AddStudentInput,
    ) -> async_graphql::Result<Student> {
        let store = store(ctx);

        validation::validate_id(&input.department_id)?;
        if !store.departments.exists(&input.department_id) {
            return Err(CampusError::Constraint(format!(
                "Department '{}' does not exist",
                *input.department_id
            ))
            .into());
        }

        let id = store.students.generate_id();
        let student = model::Student::new(
            id,
            input.name,
            input.email,
            input.roll_number,
            input.department_id.to_string(),
        )
        .with_age(input.age)
        .with_phone(input.phone);

        store.students.create(&student)?;
        Ok(student.into())
    }

    /// Update an existing student; returns null if the ID is unknown
    async fn update_student(
        &self,
        ctx: &Context<'_>,
        input: UpdateStudentInput,
    ) -> async_graphql::Result<Option<Student>> {
        let store = store(ctx);
        let mut student = match store.students.get(&input.id) {
            Ok(student) => student,
            Err(CampusError::NotFound(_)) => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        if let Some(name) = input.name {
            student.name = name;
        }
        if let Some(email) = input.email {
            student.email = email;
        }
        if let Some(age) = input.age {
            student.age = Some(age);
        }
        if let Some(phone) = input.phone {
            student.phone = Some(phone);
        }

        store.students.update(&mut student)?;
        Ok(Some(student.into()))
    }

    /// Update an existing department; returns null if the ID is unknown
    async fn update_department(
        &self,
        ctx: &Context<'_>,
        input: UpdateDepartmentInput,
    ) -> async_graphql::Result<Option<Department>> {
        let store = store(ctx);
        let mut department = match store.departments.get(&input.id) {
            Ok(department) => department,
            Err(CampusError::NotFound(_)) => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        if let Some(name) = input.name {
            department.name = name;
        }
        if let Some(hod) = input.hod {
            department.hod = hod;
        }
        if let Some(building) = input.building {
            department.building = Some(building);
        }

        store.departments.update(&mut department)?;
        Ok(Some(department.into()))
    }

    /// Delete a student; returns the pre-delete state, null if unknown
    async fn delete_student(
        &self,
        ctx: &Context<'_>,
        id: ID,
    ) -> async_graphql::Result<Option<Student>> {
        let store = store(ctx);
        match store.students.delete(&id) {
            Ok(student) => Ok(Some(student.into())),
            Err(CampusError::NotFound(_)) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Delete a department; refused while students still reference it
    async fn delete_department(
        &self,
        ctx: &Context<'_>,
        id: ID,
    ) -> async_graphql::Result<Option<Department>> {
        let store = store(ctx);

        // Check-then-act: the count and the delete are two store calls, so
        // two concurrent deletes can race past the guard.
        let referencing = store.students.count_by_department(&id)?;
        if referencing > 0 {
            tracing::warn!(id = %*id, students = referencing, "Refusing department delete");
            return Err(
                CampusError::Integrity("Cannot delete department with students".to_string())
                    .into(),
            );
        }

        match store.departments.delete(&id) {
            Ok(department) => Ok(Some(department.into())),
            Err(CampusError::NotFound(_)) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
