//! Sample data loaded into a fresh store at startup

use super::Repository;
use crate::{
    error::AppResult,
    models::{BorrowBook, IdAssignment, UpdateBook, UpdateStudent},
};

impl Repository {
    /// Seed two books, two students and one ongoing loan of the first book
    /// by the first student.
    pub fn seed_initial_data(&self) -> AppResult<()> {
        let go_book = self.books_add(
            IdAssignment::Generate,
            UpdateBook {
                title: "The Go Programming Language".to_string(),
                author: "Donovan & Kernighan".to_string(),
                isbn: "978-0134190440".to_string(),
                publisher: "AW".to_string(),
                page_count: 380,
                stock: 10,
            },
        )?;
        self.books_add(
            IdAssignment::Generate,
            UpdateBook {
                title: "Clean Architecture".to_string(),
                author: "Robert C. Martin".to_string(),
                isbn: "978-0134494166".to_string(),
                publisher: "Prentice Hall".to_string(),
                page_count: 432,
                stock: 5,
            },
        )?;

        let ali = self.students_add(
            IdAssignment::Generate,
            UpdateStudent {
                name: "Ali Veli".to_string(),
                student_number: "123456".to_string(),
                email: "ali.veli@example.com".to_string(),
                is_active: true,
            },
        )?;
        self.students_add(
            IdAssignment::Generate,
            UpdateStudent {
                name: "Ayşe Yılmaz".to_string(),
                student_number: "654321".to_string(),
                email: "ayse.yilmaz@example.com".to_string(),
                is_active: true,
            },
        )?;

        self.loans_borrow(&BorrowBook {
            student_id: ali.id,
            book_id: go_book.id,
        })?;

        tracing::info!("Seeded store with initial books, students and loan");
        Ok(())
    }
}
