//! Book model and related types

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::identifier::IdAssignment;

/// Book record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Book {
    pub id: String,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub publisher: String,
    pub page_count: u32,
    /// Copies currently available for borrowing
    pub stock: u32,
}

/// Add book request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateBook {
    /// Identifier to use; a fresh one is generated when missing or empty
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub isbn: String,
    #[serde(default)]
    pub publisher: String,
    #[serde(default)]
    pub page_count: u32,
    #[serde(default)]
    pub stock: u32,
}

/// Update book request. Replaces every field of the stored book.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateBook {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub isbn: String,
    #[serde(default)]
    pub publisher: String,
    #[serde(default)]
    pub page_count: u32,
    #[serde(default)]
    pub stock: u32,
}

impl CreateBook {
    /// Split into the identifier rule and the book fields
    pub fn into_parts(self) -> (IdAssignment, UpdateBook) {
        let fields = UpdateBook {
            title: self.title,
            author: self.author,
            isbn: self.isbn,
            publisher: self.publisher,
            page_count: self.page_count,
            stock: self.stock,
        };
        (IdAssignment::from_request(self.id), fields)
    }
}

impl Book {
    pub fn from_fields(id: String, fields: UpdateBook) -> Self {
        Self {
            id,
            title: fields.title,
            author: fields.author,
            isbn: fields.isbn,
            publisher: fields.publisher,
            page_count: fields.page_count,
            stock: fields.stock,
        }
    }
}
