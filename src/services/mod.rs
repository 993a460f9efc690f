//! Business logic services

pub mod books;
pub mod loans;
pub mod students;

use crate::repository::Repository;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub books: books::BooksService,
    pub students: students::StudentsService,
    pub loans: loans::LoansService,
}

impl Services {
    /// Create all services sharing the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            books: books::BooksService::new(repository.clone()),
            students: students::StudentsService::new(repository.clone()),
            loans: loans::LoansService::new(repository),
        }
    }
}
