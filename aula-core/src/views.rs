//! Presentation records produced by the registry's per-role queries.
//!
//! These are owned snapshots; nothing here borrows from the registry.

use serde::Serialize;

/// Placeholder name for an email or course that resolves to nothing.
pub const UNKNOWN_NAME: &str = "Unknown";

/// Placeholder email (or description) for an unresolved reference.
pub const UNKNOWN_EMAIL: &str = "N/A";

/// One of a teacher's courses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseSummary {
    pub title: String,
    pub description: String,
}

/// A roster line: an enrolled email resolved against the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudentEntry {
    pub name: String,
    pub email: String,
}

impl StudentEntry {
    pub fn placeholder() -> Self {
        Self {
            name: UNKNOWN_NAME.to_string(),
            email: UNKNOWN_EMAIL.to_string(),
        }
    }
}

/// The students enrolled in one of a teacher's courses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseRoster {
    pub course_title: String,
    pub students: Vec<StudentEntry>,
}

/// A course a student is enrolled in, with its teacher resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnrolledCourse {
    pub title: String,
    pub description: String,
    pub teacher_name: String,
    pub teacher_email: String,
}
