use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: String,
    pub name: String,
    pub email: String,

    #[serde(rename = "rollNumber")]
    pub roll_number: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// ID of the department this student belongs to.
    pub department: String,

    #[serde(default)]
    pub created: DateTime<Utc>,

    #[serde(default)]
    pub updated: DateTime<Utc>,
}

impl Student {
    pub fn new(
        id: String,
        name: String,
        email: String,
        roll_number: String,
        department: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            email,
            roll_number,
            age: None,
            phone: None,
            department,
            created: now,
            updated: now,
        }
    }

    pub fn with_age(mut self, age: Option<i32>) -> Self {
        self.age = age;
        self
    }

    pub fn with_phone(mut self, phone: Option<String>) -> Self {
        self.phone = phone;
        self
    }

    pub fn touch(&mut self) {
        self.updated = Utc::now();
    }
}
