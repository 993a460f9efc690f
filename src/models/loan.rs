//! Loan (borrow) model and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::enums::LoanStatus;

/// Loan record linking one student to one book
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Loan {
    pub id: String,
    pub student_id: String,
    pub book_id: String,
    /// Date the book was borrowed (YYYY-MM-DD)
    pub loan_date: NaiveDate,
    /// Date the book came back, absent while the loan is ongoing
    pub return_date: Option<NaiveDate>,
    pub status: LoanStatus,
}

/// Borrow request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BorrowBook {
    pub student_id: String,
    pub book_id: String,
}

impl Loan {
    pub fn is_returned(&self) -> bool {
        self.status == LoanStatus::Returned
    }

    /// Close the loan. Callers check `is_returned` first.
    pub fn mark_returned(&mut self, on: NaiveDate) {
        self.status = LoanStatus::Returned;
        self.return_date = Some(on);
    }
}
