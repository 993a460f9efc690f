//! API integration tests, driving the full router in-process

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use university_server::{api, config::AppConfig, AppState};

fn app(seed: bool) -> Router {
    let mut config = AppConfig::default();
    config.store.seed_initial_data = seed;
    let state = AppState::new(config).expect("Failed to build application state");
    api::create_router(state)
}

async fn call(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder()
        .method(method)
        .uri(format!("/api/v1{}", uri));
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("Failed to build request");

    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("Failed to send request");

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("Failed to parse response")
    };
    (status, body)
}

async fn add_book(app: &Router, title: &str, stock: u32) -> Value {
    let (status, body) = call(
        app,
        Method::POST,
        "/books",
        Some(json!({
            "title": title,
            "author": "Donovan & Kernighan",
            "isbn": "978-0134190440",
            "publisher": "AW",
            "page_count": 380,
            "stock": stock
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body
}

async fn add_student(app: &Router, name: &str) -> Value {
    let (status, body) = call(
        app,
        Method::POST,
        "/students",
        Some(json!({
            "name": name,
            "student_number": "987654",
            "email": "zeynep.kaya@example.com",
            "is_active": true
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body
}

fn id_of(value: &Value) -> String {
    value["id"].as_str().expect("No ID in response").to_string()
}

#[tokio::test]
async fn test_health_check() {
    let app = app(false);
    let (status, body) = call(&app, Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_openapi_schema_is_served() {
    let app = app(false);
    let request = Request::builder()
        .uri("/api-docs/openapi.json")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let schema: Value = serde_json::from_slice(&bytes).unwrap();
    assert!(schema["paths"]["/books"].is_object());
    assert!(schema["paths"]["/loans/{id}/return"].is_object());
}

#[tokio::test]
async fn test_seeded_store() {
    let app = app(true);

    let (_, books) = call(&app, Method::GET, "/books", None).await;
    assert_eq!(books["books"].as_array().unwrap().len(), 2);

    let (_, students) = call(&app, Method::GET, "/students", None).await;
    assert_eq!(students["students"].as_array().unwrap().len(), 2);

    let (_, loans) = call(&app, Method::GET, "/loans", None).await;
    let loans = loans["loans"].as_array().unwrap();
    assert_eq!(loans.len(), 1);
    assert_eq!(loans[0]["status"], "ONGOING");
}

#[tokio::test]
async fn test_add_book_generates_id() {
    let app = app(false);
    let first = add_book(&app, "Clean Architecture", 5).await;
    let second = add_book(&app, "Clean Architecture", 5).await;

    let id = id_of(&first);
    assert!(!id.is_empty());
    assert_ne!(id, id_of(&second));

    let (status, body) = call(&app, Method::GET, &format!("/books/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, first);
}

#[tokio::test]
async fn test_add_book_with_supplied_and_empty_id() {
    let app = app(false);

    let (_, supplied) = call(
        &app,
        Method::POST,
        "/books",
        Some(json!({ "id": "go-book", "title": "The Go Programming Language", "stock": 1 })),
    )
    .await;
    assert_eq!(supplied["id"], "go-book");

    let (_, empty) = call(
        &app,
        Method::POST,
        "/books",
        Some(json!({ "id": "", "title": "Clean Architecture" })),
    )
    .await;
    assert!(!id_of(&empty).is_empty());
    assert_eq!(empty["stock"], 0);
}

#[tokio::test]
async fn test_update_and_delete_book() {
    let app = app(false);
    let id = id_of(&add_book(&app, "Clean Architecture", 5).await);

    let (status, body) = call(
        &app,
        Method::PUT,
        &format!("/books/{}", id),
        Some(json!({ "title": "Clean Code", "author": "Robert C. Martin", "stock": 2 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Clean Code");
    assert_eq!(body["isbn"], "");
    assert_eq!(body["id"], id.as_str());

    let (status, body) = call(&app, Method::DELETE, &format!("/books/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Book deleted successfully");

    let (status, body) = call(&app, Method::GET, &format!("/books/{}", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NotFound");
}

#[tokio::test]
async fn test_update_missing_book_is_not_found() {
    let app = app(false);

    let (status, body) = call(
        &app,
        Method::PUT,
        "/books/ghost",
        Some(json!({ "title": "Nothing" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NotFound");

    let (_, books) = call(&app, Method::GET, "/books", None).await;
    assert!(books["books"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_student_crud() {
    let app = app(false);
    let student = add_student(&app, "Zeynep Kaya").await;
    let id = id_of(&student);

    let (status, body) = call(&app, Method::GET, &format!("/students/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Zeynep Kaya");

    let (status, body) = call(
        &app,
        Method::PUT,
        &format!("/students/{}", id),
        Some(json!({ "name": "Zeynep Kaya", "student_number": "987654", "is_active": false })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["is_active"], false);

    let (status, body) = call(&app, Method::DELETE, &format!("/students/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Student deleted successfully");

    let (status, _) = call(&app, Method::DELETE, &format!("/students/{}", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_borrow_return_lifecycle() {
    let app = app(false);
    let book_id = id_of(&add_book(&app, "The Go Programming Language", 1).await);
    let student_id = id_of(&add_student(&app, "Ali Veli").await);
    let borrow = json!({ "student_id": student_id, "book_id": book_id });

    let (status, loan) = call(&app, Method::POST, "/loans", Some(borrow.clone())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(loan["status"], "ONGOING");
    assert!(loan["return_date"].is_null());
    let loan_id = id_of(&loan);

    let (_, book) = call(&app, Method::GET, &format!("/books/{}", book_id), None).await;
    assert_eq!(book["stock"], 0);

    let (status, body) = call(&app, Method::POST, "/loans", Some(borrow)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "FailedPrecondition");
    assert_eq!(body["code"], 9);

    let (status, returned) =
        call(&app, Method::POST, &format!("/loans/{}/return", loan_id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(returned["status"], "RETURNED");
    assert!(returned["return_date"].is_string());

    let (_, book) = call(&app, Method::GET, &format!("/books/{}", book_id), None).await;
    assert_eq!(book["stock"], 1);

    let (status, body) =
        call(&app, Method::POST, &format!("/loans/{}/return", loan_id), None).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "FailedPrecondition");

    let (status, fetched) = call(&app, Method::GET, &format!("/loans/{}", loan_id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, returned);
}

#[tokio::test]
async fn test_borrow_with_unknown_references() {
    let app = app(false);
    let book_id = id_of(&add_book(&app, "Clean Architecture", 5).await);
    let student_id = id_of(&add_student(&app, "Ali Veli").await);

    let (status, body) = call(
        &app,
        Method::POST,
        "/loans",
        Some(json!({ "student_id": "ghost", "book_id": book_id })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 5);

    let (status, _) = call(
        &app,
        Method::POST,
        "/loans",
        Some(json!({ "student_id": student_id, "book_id": "ghost" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, loans) = call(&app, Method::GET, "/loans", None).await;
    assert!(loans["loans"].as_array().unwrap().is_empty());

    let (_, book) = call(&app, Method::GET, &format!("/books/{}", book_id), None).await;
    assert_eq!(book["stock"], 5);
}

#[tokio::test]
async fn test_return_after_book_deleted() {
    let app = app(false);
    let book_id = id_of(&add_book(&app, "Clean Architecture", 2).await);
    let student_id = id_of(&add_student(&app, "Ali Veli").await);

    let (_, loan) = call(
        &app,
        Method::POST,
        "/loans",
        Some(json!({ "student_id": student_id, "book_id": book_id })),
    )
    .await;
    let loan_id = id_of(&loan);

    let (status, _) = call(&app, Method::DELETE, &format!("/books/{}", book_id), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, returned) =
        call(&app, Method::POST, &format!("/loans/{}/return", loan_id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(returned["status"], "RETURNED");

    let (status, _) = call(&app, Method::GET, &format!("/books/{}", book_id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unknown_loan() {
    let app = app(false);

    let (status, _) = call(&app, Method::GET, "/loans/ghost", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = call(&app, Method::POST, "/loans/ghost/return", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_add_accepts_empty_envelopes() {
    let app = app(false);

    let (status, book) = call(&app, Method::POST, "/books", Some(json!({}))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(!id_of(&book).is_empty());
    assert_eq!(book["title"], "");
    assert_eq!(book["stock"], 0);

    let (status, student) = call(
        &app,
        Method::POST,
        "/students",
        Some(json!({ "email": "a@b" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(student["name"], "");
    assert_eq!(student["email"], "a@b");
}

#[tokio::test]
async fn test_update_missing_entity_without_title_is_not_found() {
    let app = app(false);

    let (status, body) = call(
        &app,
        Method::PUT,
        "/books/ghost",
        Some(json!({ "author": "x" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NotFound");
    assert_eq!(body["code"], 5);

    let (status, body) = call(&app, Method::PUT, "/students/ghost", Some(json!({}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NotFound");
}

#[tokio::test]
async fn test_add_student_from_typed_request() {
    let app = app(false);
    let request = university_server::models::CreateStudent {
        id: None,
        name: "Zeynep Kaya".to_string(),
        student_number: "987654".to_string(),
        email: "zeynep.kaya@example.com".to_string(),
        is_active: true,
    };
    let body = serde_json::to_value(&request).unwrap();
    assert!(body.get("id").is_none());

    let (status, student) = call(&app, Method::POST, "/students", Some(body)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(!id_of(&student).is_empty());
    assert_eq!(student["name"], "Zeynep Kaya");
    assert_eq!(student["is_active"], true);
}
