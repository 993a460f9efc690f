//! Book domain methods on Repository

use super::Repository;
use crate::{
    error::{AppError, AppResult},
    models::{Book, IdAssignment, UpdateBook},
};

impl Repository {
    /// Insert a new book, resolving its identifier first
    pub fn books_add(&self, id: IdAssignment, data: UpdateBook) -> AppResult<Book> {
        let book = Book::from_fields(id.resolve(), data);
        self.with_collections(|c| {
            c.books.insert(book.id.clone(), book.clone());
            Ok(book)
        })
    }

    /// Get book by ID
    pub fn books_get(&self, id: &str) -> AppResult<Book> {
        self.with_collections(|c| {
            c.books
                .get(id)
                .cloned()
                .ok_or_else(|| AppError::NotFound(format!("book with ID {} not found", id)))
        })
    }

    /// List all books, in no particular order
    pub fn books_list(&self) -> AppResult<Vec<Book>> {
        self.with_collections(|c| Ok(c.books.values().cloned().collect()))
    }

    /// Replace a stored book wholesale
    pub fn books_update(&self, book: Book) -> AppResult<Book> {
        self.with_collections(|c| match c.books.get_mut(&book.id) {
            Some(stored) => {
                *stored = book.clone();
                Ok(book)
            }
            None => Err(AppError::NotFound(format!(
                "cannot update, book with ID {} not found",
                book.id
            ))),
        })
    }

    /// Delete a book. Loans referencing it are left untouched.
    pub fn books_delete(&self, id: &str) -> AppResult<()> {
        self.with_collections(|c| {
            c.books
                .remove(id)
                .map(|_| ())
                .ok_or_else(|| {
                    AppError::NotFound(format!("cannot delete, book with ID {} not found", id))
                })
        })
    }
}
