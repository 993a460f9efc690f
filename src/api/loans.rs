//! Loan service endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::{BorrowBook, Loan},
};

/// List loans response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ListLoansResponse {
    pub loans: Vec<Loan>,
}

/// Borrow a book
#[utoipa::path(
    post,
    path = "/loans",
    tag = "loans",
    request_body = BorrowBook,
    responses(
        (status = 201, description = "Loan created", body = Loan),
        (status = 404, description = "Student or book not found", body = crate::error::ErrorResponse),
        (status = 409, description = "Book out of stock", body = crate::error::ErrorResponse)
    )
)]
pub async fn borrow_book(
    State(state): State<crate::AppState>,
    Json(request): Json<BorrowBook>,
) -> AppResult<(StatusCode, Json<Loan>)> {
    let loan = state.services.loans.borrow(&request)?;
    Ok((StatusCode::CREATED, Json(loan)))
}

/// Return a borrowed book
#[utoipa::path(
    post,
    path = "/loans/{id}/return",
    tag = "loans",
    params(("id" = String, Path, description = "Loan ID")),
    responses(
        (status = 200, description = "Book returned", body = Loan),
        (status = 404, description = "Loan not found", body = crate::error::ErrorResponse),
        (status = 409, description = "Already returned", body = crate::error::ErrorResponse)
    )
)]
pub async fn return_book(
    State(state): State<crate::AppState>,
    Path(loan_id): Path<String>,
) -> AppResult<Json<Loan>> {
    let loan = state.services.loans.return_loan(&loan_id)?;
    Ok(Json(loan))
}

/// Get loan by ID
#[utoipa::path(
    get,
    path = "/loans/{id}",
    tag = "loans",
    params(("id" = String, Path, description = "Loan ID")),
    responses(
        (status = 200, description = "Loan details", body = Loan),
        (status = 404, description = "Loan not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_loan(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Loan>> {
    let loan = state.services.loans.get(&id)?;
    Ok(Json(loan))
}

/// List all loans
#[utoipa::path(
    get,
    path = "/loans",
    tag = "loans",
    responses(
        (status = 200, description = "All loans, unordered", body = ListLoansResponse)
    )
)]
pub async fn list_loans(
    State(state): State<crate::AppState>,
) -> AppResult<Json<ListLoansResponse>> {
    let loans = state.services.loans.list()?;
    Ok(Json(ListLoansResponse { loans }))
}
