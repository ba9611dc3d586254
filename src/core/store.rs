//! In-memory credit book
//!
//! Owns every student and their subject grades. All operations either fully
//! succeed or leave the book untouched.

use super::errors::{StoreError, StoreResult};
use super::models::{Grade, Student, Subject};
use crate::debug;
use std::collections::{BTreeMap, HashMap};

/// Grades of a single student, ordered by subject name
pub type Credits = BTreeMap<Subject, Grade>;

/// Result of a successful credit search
#[derive(Debug, Clone, PartialEq)]
pub struct CreditReport {
    /// Subject/grade pairs in subject-name order
    pub credits: Vec<(Subject, Grade)>,
    /// Unweighted mean of the grade scores
    pub average: f64,
}

/// Student → subject → grade store
#[derive(Debug, Default, Clone)]
pub struct CreditBook {
    students: HashMap<Student, Credits>,
}

impl CreditBook {
    /// Create an empty book
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new student with no grades
    ///
    /// # Errors
    /// `DuplicateStudent` if the name is already registered
    pub fn add_student(&mut self, name: &str) -> StoreResult<()> {
        if self.students.contains_key(name) {
            return Err(StoreError::DuplicateStudent(name.to_string()));
        }
        self.students.insert(Student::new(name), Credits::new());
        debug!("Added student {name}");
        Ok(())
    }

    /// Remove a student together with all of their grades
    ///
    /// # Errors
    /// `StudentNotFound` if the name is not registered
    pub fn delete_student(&mut self, name: &str) -> StoreResult<()> {
        let removed = self
            .students
            .remove(name)
            .ok_or_else(|| StoreError::StudentNotFound(name.to_string()))?;
        debug!("Deleted student {name} ({} grade(s) dropped)", removed.len());
        Ok(())
    }

    /// Set a student's grade for a subject, replacing any previous grade
    ///
    /// # Errors
    /// `StudentNotFound` if the student is not registered
    pub fn update_credit(&mut self, student: &str, subject: &str, grade: Grade) -> StoreResult<()> {
        let credits = self.credits_mut(student)?;
        let previous = credits.insert(Subject::new(subject), grade);
        match previous {
            Some(old) => debug!("Replaced {student}/{subject}: {old} -> {grade}"),
            None => debug!("Recorded {student}/{subject}: {grade}"),
        }
        Ok(())
    }

    /// Remove a single subject grade
    ///
    /// The student is checked before the subject.
    ///
    /// # Errors
    /// `StudentNotFound` if the student is not registered, `SubjectNotFound`
    /// if the student has no grade for `subject`
    pub fn delete_credit(&mut self, student: &str, subject: &str) -> StoreResult<()> {
        let credits = self.credits_mut(student)?;
        credits
            .remove(subject)
            .ok_or_else(|| StoreError::SubjectNotFound(subject.to_string()))?;
        debug!("Deleted {student}/{subject}");
        Ok(())
    }

    /// List a student's grades and their average score
    ///
    /// # Errors
    /// `StudentNotFound` if the student is not registered, `CreditsNotFound`
    /// if the student has no grades yet
    pub fn search_credits(&self, student: &str) -> StoreResult<CreditReport> {
        let credits = self
            .credits_of(student)
            .ok_or_else(|| StoreError::StudentNotFound(student.to_string()))?;
        if credits.is_empty() {
            return Err(StoreError::CreditsNotFound(student.to_string()));
        }

        let total: f64 = credits.values().map(|grade| grade.score()).sum();
        #[allow(clippy::cast_precision_loss)]
        let average = total / credits.len() as f64;

        Ok(CreditReport {
            credits: credits
                .iter()
                .map(|(subject, grade)| (subject.clone(), *grade))
                .collect(),
            average,
        })
    }

    /// Whether a student with this name is registered
    #[must_use]
    pub fn contains_student(&self, name: &str) -> bool {
        self.students.contains_key(name)
    }

    /// Borrow a student's grades
    #[must_use]
    pub fn credits_of(&self, student: &str) -> Option<&Credits> {
        self.students.get(student)
    }

    /// Number of registered students
    #[must_use]
    pub fn student_count(&self) -> usize {
        self.students.len()
    }

    /// True when no students are registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    fn credits_mut(&mut self, student: &str) -> StoreResult<&mut Credits> {
        self.students
            .get_mut(student)
            .ok_or_else(|| StoreError::StudentNotFound(student.to_string()))
    }
}
