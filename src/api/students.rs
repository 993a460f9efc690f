//! Student service endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::{CreateStudent, Student, UpdateStudent},
};

use super::MessageResponse;

/// List students response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ListStudentsResponse {
    pub students: Vec<Student>,
}

/// Add a student
#[utoipa::path(
    post,
    path = "/students",
    tag = "students",
    request_body = CreateStudent,
    responses(
        (status = 201, description = "Student added", body = Student)
    )
)]
pub async fn add_student(
    State(state): State<crate::AppState>,
    Json(request): Json<CreateStudent>,
) -> AppResult<(StatusCode, Json<Student>)> {
    let student = state.services.students.add(request)?;
    Ok((StatusCode::CREATED, Json(student)))
}

/// Get student by ID
#[utoipa::path(
    get,
    path = "/students/{id}",
    tag = "students",
    params(("id" = String, Path, description = "Student ID")),
    responses(
        (status = 200, description = "Student details", body = Student),
        (status = 404, description = "Student not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_student(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Student>> {
    let student = state.services.students.get(&id)?;
    Ok(Json(student))
}

/// List all students
#[utoipa::path(
    get,
    path = "/students",
    tag = "students",
    responses(
        (status = 200, description = "All students, unordered", body = ListStudentsResponse)
    )
)]
pub async fn list_students(
    State(state): State<crate::AppState>,
) -> AppResult<Json<ListStudentsResponse>> {
    let students = state.services.students.list()?;
    Ok(Json(ListStudentsResponse { students }))
}

/// Replace a student
#[utoipa::path(
    put,
    path = "/students/{id}",
    tag = "students",
    params(("id" = String, Path, description = "Student ID")),
    request_body = UpdateStudent,
    responses(
        (status = 200, description = "Student updated", body = Student),
        (status = 404, description = "Student not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_student(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
    Json(data): Json<UpdateStudent>,
) -> AppResult<Json<Student>> {
    let student = state.services.students.update(&id, data)?;
    Ok(Json(student))
}

/// Delete a student
#[utoipa::path(
    delete,
    path = "/students/{id}",
    tag = "students",
    params(("id" = String, Path, description = "Student ID")),
    responses(
        (status = 200, description = "Student deleted", body = MessageResponse),
        (status = 404, description = "Student not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_student(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    state.services.students.delete(&id)?;
    Ok(Json(MessageResponse::new("Student deleted successfully")))
}
