//! Loan lifecycle methods on Repository

use chrono::Utc;

use super::Repository;
use crate::{
    error::{AppError, AppResult},
    models::{BorrowBook, IdAssignment, Loan, LoanStatus},
};

impl Repository {
    /// Borrow a book: check the student, the book and its stock, then take
    /// one copy and open an ONGOING loan dated today.
    pub fn loans_borrow(&self, request: &BorrowBook) -> AppResult<Loan> {
        self.with_collections(|c| {
            if !c.students.contains_key(&request.student_id) {
                return Err(AppError::NotFound(format!(
                    "student with ID {} not found",
                    request.student_id
                )));
            }

            let book = c.books.get_mut(&request.book_id).ok_or_else(|| {
                AppError::NotFound(format!("book with ID {} not found", request.book_id))
            })?;

            if book.stock == 0 {
                return Err(AppError::FailedPrecondition(format!(
                    "book '{}' is out of stock",
                    book.title
                )));
            }
            book.stock -= 1;

            let loan = Loan {
                id: IdAssignment::Generate.resolve(),
                student_id: request.student_id.clone(),
                book_id: request.book_id.clone(),
                loan_date: Utc::now().date_naive(),
                return_date: None,
                status: LoanStatus::Ongoing,
            };
            c.loans.insert(loan.id.clone(), loan.clone());

            Ok(loan)
        })
    }

    /// Return a loan: close it and put the copy back in stock. If the book
    /// was deleted in the meantime the stock update is skipped.
    pub fn loans_return(&self, loan_id: &str) -> AppResult<Loan> {
        self.with_collections(|c| {
            let loan = c
                .loans
                .get_mut(loan_id)
                .ok_or_else(|| AppError::NotFound(format!("loan with ID {} not found", loan_id)))?;

            if loan.is_returned() {
                return Err(AppError::FailedPrecondition(
                    "this loan has already been returned".to_string(),
                ));
            }

            match c.books.get_mut(&loan.book_id) {
                Some(book) => book.stock += 1,
                None => tracing::debug!(
                    "Book {} of loan {} no longer exists, stock left unchanged",
                    loan.book_id,
                    loan.id
                ),
            }

            loan.mark_returned(Utc::now().date_naive());
            Ok(loan.clone())
        })
    }

    /// Get loan by ID
    pub fn loans_get(&self, id: &str) -> AppResult<Loan> {
        self.with_collections(|c| {
            c.loans
                .get(id)
                .cloned()
                .ok_or_else(|| AppError::NotFound(format!("loan with ID {} not found", id)))
        })
    }

    /// List all loans, in no particular order
    pub fn loans_list(&self) -> AppResult<Vec<Loan>> {
        self.with_collections(|c| Ok(c.loans.values().cloned().collect()))
    }
}
