//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{books, health, loans, students};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "University Library API",
        version = "0.1.0",
        description = "Book, student and loan services backed by an in-memory store"
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        // Books
        books::add_book,
        books::get_book,
        books::list_books,
        books::update_book,
        books::delete_book,
        // Students
        students::add_student,
        students::get_student,
        students::list_students,
        students::update_student,
        students::delete_student,
        // Loans
        loans::borrow_book,
        loans::return_book,
        loans::get_loan,
        loans::list_loans,
    ),
    components(
        schemas(
            // Books
            crate::models::book::Book,
            crate::models::book::CreateBook,
            crate::models::book::UpdateBook,
            books::ListBooksResponse,
            // Students
            crate::models::student::Student,
            crate::models::student::CreateStudent,
            crate::models::student::UpdateStudent,
            students::ListStudentsResponse,
            // Loans
            crate::models::loan::Loan,
            crate::models::loan::BorrowBook,
            crate::models::enums::LoanStatus,
            loans::ListLoansResponse,
            // Shared
            crate::api::MessageResponse,
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "books", description = "Book service"),
        (name = "students", description = "Student service"),
        (name = "loans", description = "Loan service")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
