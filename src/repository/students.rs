//! Student domain methods on Repository

use super::Repository;
use crate::{
    error::{AppError, AppResult},
    models::{IdAssignment, Student, UpdateStudent},
};

impl Repository {
    pub fn students_add(&self, id: IdAssignment, data: UpdateStudent) -> AppResult<Student> {
        let student = Student::from_fields(id.resolve(), data);
        self.with_collections(|c| {
            c.students.insert(student.id.clone(), student.clone());
            Ok(student)
        })
    }

    pub fn students_get(&self, id: &str) -> AppResult<Student> {
        self.with_collections(|c| {
            c.students
                .get(id)
                .cloned()
                .ok_or_else(|| AppError::NotFound(format!("student with ID {} not found", id)))
        })
    }

    pub fn students_list(&self) -> AppResult<Vec<Student>> {
        self.with_collections(|c| Ok(c.students.values().cloned().collect()))
    }

    pub fn students_update(&self, student: Student) -> AppResult<Student> {
        self.with_collections(|c| match c.students.get_mut(&student.id) {
            Some(stored) => {
                *stored = student.clone();
                Ok(student)
            }
            None => Err(AppError::NotFound(format!(
                "cannot update, student with ID {} not found",
                student.id
            ))),
        })
    }

    /// Delete a student. Loans referencing it are left untouched.
    pub fn students_delete(&self, id: &str) -> AppResult<()> {
        self.with_collections(|c| {
            c.students
                .remove(id)
                .map(|_| ())
                .ok_or_else(|| {
                    AppError::NotFound(format!("cannot delete, student with ID {} not found", id))
                })
        })
    }
}
