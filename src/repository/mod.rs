//! In-memory entity store
//!
//! All three collections live behind a single mutex. Every operation takes
//! the lock once, validates, then mutates, so a failed call never leaves a
//! partial change behind.

pub mod books;
pub mod loans;
pub mod seed;
pub mod students;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::{
    error::{AppError, AppResult},
    models::{Book, Loan, Student},
};

/// Keyed collections owned by the store
#[derive(Debug, Default)]
struct Collections {
    books: HashMap<String, Book>,
    students: HashMap<String, Student>,
    loans: HashMap<String, Loan>,
}

/// Main repository struct holding the shared collections
#[derive(Clone, Default)]
pub struct Repository {
    collections: Arc<Mutex<Collections>>,
}

impl Repository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `op` with exclusive access to every collection
    fn with_collections<T>(
        &self,
        op: impl FnOnce(&mut Collections) -> AppResult<T>,
    ) -> AppResult<T> {
        let mut collections = self
            .collections
            .lock()
            .map_err(|_| AppError::Internal("entity store lock poisoned".to_string()))?;
        op(&mut collections)
    }
}
