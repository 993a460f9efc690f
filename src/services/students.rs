//! Student management service

use crate::{
    error::AppResult,
    models::{CreateStudent, Student, UpdateStudent},
    repository::Repository,
};

#[derive(Clone)]
pub struct StudentsService {
    repository: Repository,
}

impl StudentsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub fn add(&self, request: CreateStudent) -> AppResult<Student> {
        let (id, data) = request.into_parts();
        let student = self.repository.students_add(id, data)?;
        tracing::info!("Added student: {} ({})", student.name, student.id);
        Ok(student)
    }

    pub fn get(&self, id: &str) -> AppResult<Student> {
        self.repository.students_get(id)
    }

    pub fn list(&self) -> AppResult<Vec<Student>> {
        self.repository.students_list()
    }

    pub fn update(&self, id: &str, data: UpdateStudent) -> AppResult<Student> {
        let student = self
            .repository
            .students_update(Student::from_fields(id.to_string(), data))?;
        tracing::info!("Updated student: {}", student.name);
        Ok(student)
    }

    pub fn delete(&self, id: &str) -> AppResult<()> {
        self.repository.students_delete(id)?;
        tracing::info!("Deleted student with ID: {}", id);
        Ok(())
    }
}
