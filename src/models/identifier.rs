//! Identifier assignment for newly added entities

use uuid::Uuid;

/// How a new book or student gets its identifier.
///
/// Built from the optional `id` of an add request with one rule: a non-empty
/// id is `Supplied` and used as-is (the caller is responsible for its
/// uniqueness), a missing or empty id means `Generate`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdAssignment {
    Supplied(String),
    Generate,
}

impl IdAssignment {
    pub fn from_request(id: Option<String>) -> Self {
        match id {
            Some(id) if !id.is_empty() => IdAssignment::Supplied(id),
            _ => IdAssignment::Generate,
        }
    }

    /// Produce the final identifier, generating a fresh UUID when needed
    pub fn resolve(self) -> String {
        match self {
            IdAssignment::Supplied(id) => id,
            IdAssignment::Generate => Uuid::new_v4().to_string(),
        }
    }
}
