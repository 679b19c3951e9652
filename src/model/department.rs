use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Department {
    pub id: String,
    pub name: String,
    pub code: String,
    pub hod: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub building: Option<String>,

    #[serde(default)]
    pub created: DateTime<Utc>,

    #[serde(default)]
    pub updated: DateTime<Utc>,
}

impl Department {
    pub fn new(id: String, name: String, code: String, hod: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            code,
            hod,
            building: None,
            created: now,
            updated: now,
        }
    }

    pub fn with_building(mut self, building: Option<String>) -> Self {
        self.building = building;
        self
    }

    pub fn touch(&mut self) {
        self.updated = Utc::now();
    }
}
