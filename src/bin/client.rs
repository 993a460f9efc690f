//! Demo driver that runs a fixed sequence of calls against a running server.
//!
//! Set `UNIVERSITY_CLIENT_URL` to point it somewhere other than
//! `http://localhost:50051/api/v1`.

use std::time::Duration;

use anyhow::Context;
use reqwest::Client;

use university_server::{
    api::{books::ListBooksResponse, loans::ListLoansResponse, students::ListStudentsResponse},
    models::{BorrowBook, CreateStudent, Loan, Student},
};

const DEFAULT_URL: &str = "http://localhost:50051/api/v1";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "university_client=info".into()),
        )
        .init();

    let base_url = std::env::var("UNIVERSITY_CLIENT_URL").unwrap_or_else(|_| DEFAULT_URL.into());
    let client = Client::builder()
        .timeout(Duration::from_secs(5))
        .build()?;

    tracing::info!("--- 1. Listing all books ---");
    let books = list_books(&client, &base_url).await?;

    tracing::info!("--- 2. Adding a new student ---");
    let student = match add_student(
        &client,
        &base_url,
        "Zeynep Kaya",
        "987654",
        "zeynep.kaya@example.com",
    )
    .await
    {
        Ok(student) => student,
        Err(e) => {
            tracing::warn!("{:#}", e);
            tracing::info!("Could not add student, skipping further tests for this student.");
            return Ok(());
        }
    };
    tracing::info!("Added student: {} (ID: {})", student.name, student.id);

    tracing::info!("--- 3. Listing all students ---");
    list_students(&client, &base_url).await?;

    tracing::info!("--- 4. Borrowing a book for the new student ---");
    match books.books.iter().find(|book| book.stock > 0) {
        Some(book) => {
            tracing::info!(
                "Attempting to borrow book (ID: {}) for student (ID: {})",
                book.id,
                student.id
            );
            match borrow_book(&client, &base_url, &student.id, &book.id).await {
                Ok(loan) => tracing::info!(
                    "Successfully borrowed. Loan ID: {}, Status: {}",
                    loan.id,
                    loan.status
                ),
                Err(e) => tracing::warn!("could not borrow book: {:#}", e),
            }
        }
        None => tracing::info!("No books in stock to borrow."),
    }

    tracing::info!("--- 5. Listing all loans ---");
    list_loans(&client, &base_url).await?;

    Ok(())
}

async fn list_books(client: &Client, base_url: &str) -> anyhow::Result<ListBooksResponse> {
    let response: ListBooksResponse = client
        .get(format!("{}/books", base_url))
        .send()
        .await?
        .error_for_status()?
        .json()
        .await
        .context("could not list books")?;

    tracing::info!("Books:");
    for book in &response.books {
        tracing::info!("- ID: {}, Title: {}, Stock: {}", book.id, book.title, book.stock);
    }
    Ok(response)
}

async fn add_student(
    client: &Client,
    base_url: &str,
    name: &str,
    number: &str,
    email: &str,
) -> anyhow::Result<Student> {
    let request = CreateStudent {
        id: None,
        name: name.to_string(),
        student_number: number.to_string(),
        email: email.to_string(),
        is_active: true,
    };

    client
        .post(format!("{}/students", base_url))
        .json(&request)
        .send()
        .await
        .and_then(|response| response.error_for_status())
        .context("could not add student")?
        .json::<Student>()
        .await
        .context("could not add student")
}

async fn list_students(client: &Client, base_url: &str) -> anyhow::Result<()> {
    let response: ListStudentsResponse = client
        .get(format!("{}/students", base_url))
        .send()
        .await?
        .error_for_status()?
        .json()
        .await
        .context("could not list students")?;

    tracing::info!("Students:");
    for student in &response.students {
        tracing::info!("- ID: {}, Name: {}, Email: {}", student.id, student.name, student.email);
    }
    Ok(())
}

async fn borrow_book(
    client: &Client,
    base_url: &str,
    student_id: &str,
    book_id: &str,
) -> anyhow::Result<Loan> {
    let request = BorrowBook {
        student_id: student_id.to_string(),
        book_id: book_id.to_string(),
    };

    client
        .post(format!("{}/loans", base_url))
        .json(&request)
        .send()
        .await?
        .error_for_status()?
        .json::<Loan>()
        .await
        .context("could not decode loan")
}

async fn list_loans(client: &Client, base_url: &str) -> anyhow::Result<()> {
    let response: ListLoansResponse = client
        .get(format!("{}/loans", base_url))
        .send()
        .await?
        .error_for_status()?
        .json()
        .await
        .context("could not list loans")?;

    tracing::info!("Loans:");
    for loan in &response.loans {
        tracing::info!(
            "- ID: {}, BookID: {}, StudentID: {}, Status: {}",
            loan.id,
            loan.book_id,
            loan.student_id,
            loan.status
        );
    }
    Ok(())
}
