//! Loan management service

use crate::{
    error::AppResult,
    models::{BorrowBook, Loan},
    repository::Repository,
};

#[derive(Clone)]
pub struct LoansService {
    repository: Repository,
}

impl LoansService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Borrow a book for a student
    pub fn borrow(&self, request: &BorrowBook) -> AppResult<Loan> {
        let loan = self.repository.loans_borrow(request)?;
        tracing::info!(
            "Student {} borrowed book {} (loan {})",
            loan.student_id,
            loan.book_id,
            loan.id
        );
        Ok(loan)
    }

    /// Return a borrowed book
    pub fn return_loan(&self, loan_id: &str) -> AppResult<Loan> {
        let loan = self.repository.loans_return(loan_id)?;
        tracing::info!("Loan with ID {} has been returned", loan.id);
        Ok(loan)
    }

    pub fn get(&self, id: &str) -> AppResult<Loan> {
        self.repository.loans_get(id)
    }

    pub fn list(&self) -> AppResult<Vec<Loan>> {
        self.repository.loans_list()
    }
}
