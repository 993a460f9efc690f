//! Book catalog service

use crate::{
    error::AppResult,
    models::{Book, CreateBook, UpdateBook},
    repository::Repository,
};

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub fn add(&self, request: CreateBook) -> AppResult<Book> {
        let (id, data) = request.into_parts();
        let book = self.repository.books_add(id, data)?;
        tracing::info!("Added book: {} ({})", book.title, book.id);
        Ok(book)
    }

    pub fn get(&self, id: &str) -> AppResult<Book> {
        self.repository.books_get(id)
    }

    pub fn list(&self) -> AppResult<Vec<Book>> {
        self.repository.books_list()
    }

    /// Replace the book stored under `id`
    pub fn update(&self, id: &str, data: UpdateBook) -> AppResult<Book> {
        let book = self
            .repository
            .books_update(Book::from_fields(id.to_string(), data))?;
        tracing::info!("Updated book: {}", book.title);
        Ok(book)
    }

    pub fn delete(&self, id: &str) -> AppResult<()> {
        self.repository.books_delete(id)?;
        tracing::info!("Deleted book with ID: {}", id);
        Ok(())
    }
}
