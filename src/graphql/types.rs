use async_graphql::{ComplexObject, Context, ID, InputObject, SimpleObject};

use crate::error::CampusError;
use crate::model;

use super::schema::store;

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct Department {
    pub id: ID,
    pub name: String,
    pub code: String,
    pub hod: String,
    pub building: Option<String>,
    pub created: String,
    pub updated: String,
}

#[ComplexObject]
impl Department {
    /// Students enrolled in this department, resolved per query
    async fn students(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Student>> {
        let store = store(ctx);
        Ok(store
            .students
            .find_by_department(&self.id)?
            .into_iter()
            .map(Into::into)
            .collect())
    }
}

impl From<model::Department> for Department {
    fn from(d: model::Department) -> Self {
        Self {
            id: d.id.into(),
            name: d.name,
            code: d.code,
            hod: d.hod,
            building: d.building,
            created: d.created.to_rfc3339(),
            updated: d.updated.to_rfc3339(),
        }
    }
}

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct Student {
    pub id: ID,
    pub name: String,
    pub email: String,
    pub roll_number: String,
    pub age: Option<i32>,
    pub phone: Option<String>,
    pub created: String,
    pub updated: String,

    #[graphql(skip)]
    pub department_id: String,
}

#[ComplexObject]
impl Student {
    /// The referenced department; a dangling reference resolves to null
    async fn department(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<Department>> {
        let store = store(ctx);
        match store.departments.get(&self.department_id) {
            Ok(department) => Ok(Some(department.into())),
            Err(CampusError::NotFound(_)) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

impl From<model::Student> for Student {
    fn from(s: model::Student) -> Self {
        Self {
            id: s.id.into(),
            name: s.name,
            email: s.email,
            roll_number: s.roll_number,
            age: s.age,
            phone: s.phone,
            created: s.created.to_rfc3339(),
            updated: s.updated.to_rfc3339(),
            department_id: s.department,
        }
    }
}

#[derive(InputObject)]
pub struct AddDepartmentInput {
    pub name: String,
    pub code: String,
    pub hod: String,
    pub building: Option<String>,
}

#[derive(InputObject)]
pub struct AddStudentInput {
    pub name: String,
    pub email: String,
    pub roll_number: String,
    pub age: Option<i32>,
    pub phone: Option<String>,
    pub department_id: ID,
}

/// Partial update; absent fields are left untouched. The roll number and
/// department reference cannot be changed after creation.
#[derive(InputObject)]
pub struct UpdateStudentInput {
    pub id: ID,
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<i32>,
    pub phone: Option<String>,
}

/// Partial update; absent fields are left untouched. The department code
/// cannot be changed after creation.
#[derive(InputObject)]
pub struct UpdateDepartmentInput {
    pub id: ID,
    pub name: Option<String>,
    pub hod: Option<String>,
    pub building: Option<String>,
}
