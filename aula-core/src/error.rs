//! Error types for aula-core.

use thiserror::Error;

use crate::types::{CourseTitle, Email};

/// Recoverable failures of registry mutations.
///
/// None of these leave the registry partially updated: each is raised
/// before any collection is touched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// `add_person` was given an email that is already registered.
    #[error("a user with email '{email}' already exists")]
    DuplicateEmail { email: Email },

    /// `enroll` was given a title that matches no course.
    #[error("course '{title}' does not exist")]
    CourseNotFound { title: CourseTitle },

    /// `enroll` was given an email already on the course's roster.
    #[error("'{email}' is already enrolled in '{title}'")]
    AlreadyEnrolled { title: CourseTitle, email: Email },
}
