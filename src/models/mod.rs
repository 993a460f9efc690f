//! Data models for the university library

pub mod book;
pub mod enums;
pub mod identifier;
pub mod loan;
pub mod student;

// Re-export commonly used types
pub use book::{Book, CreateBook, UpdateBook};
pub use enums::LoanStatus;
pub use identifier::IdAssignment;
pub use loan::{BorrowBook, Loan};
pub use student::{CreateStudent, Student, UpdateStudent};
