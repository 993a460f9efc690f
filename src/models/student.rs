//! Student model and related types

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::identifier::IdAssignment;

/// Student record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Student {
    pub id: String,
    pub name: String,
    pub student_number: String,
    pub email: String,
    pub is_active: bool,
}

/// Add student request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateStudent {
    /// Identifier to use; a fresh one is generated when missing or empty
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub student_number: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub is_active: bool,
}

/// Update student request. Replaces every field of the stored student.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateStudent {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub student_number: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub is_active: bool,
}

impl CreateStudent {
    pub fn into_parts(self) -> (IdAssignment, UpdateStudent) {
        let fields = UpdateStudent {
            name: self.name,
            student_number: self.student_number,
            email: self.email,
            is_active: self.is_active,
        };
        (IdAssignment::from_request(self.id), fields)
    }
}

impl Student {
    pub fn from_fields(id: String, fields: UpdateStudent) -> Self {
        Self {
            id,
            name: fields.name,
            student_number: fields.student_number,
            email: fields.email,
            is_active: fields.is_active,
        }
    }
}
