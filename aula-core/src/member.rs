//! The person representation a [`Registry`](crate::Registry) stores.

use crate::types::{CourseTitle, Email, Person, Role, RoleKind};

/// What the registry needs to know about a registered person.
///
/// Role-specific access goes through `enrolled_courses*`, which return
/// `None` for anything that is not a student; the registry never probes
/// fields directly.
pub trait Member {
    fn name(&self) -> &str;

    fn email(&self) -> &Email;

    fn role_kind(&self) -> RoleKind;

    /// Titles this student is enrolled in, or `None` for non-students.
    fn enrolled_courses(&self) -> Option<&[CourseTitle]>;

    fn enrolled_courses_mut(&mut self) -> Option<&mut Vec<CourseTitle>>;

    fn is_student(&self) -> bool {
        self.role_kind() == RoleKind::Student
    }
}

impl Member for Person {
    fn name(&self) -> &str {
        &self.name
    }

    fn email(&self) -> &Email {
        &self.email
    }

    fn role_kind(&self) -> RoleKind {
        self.role.kind()
    }

    fn enrolled_courses(&self) -> Option<&[CourseTitle]> {
        match &self.role {
            Role::Student { enrolled_courses } => Some(enrolled_courses),
            Role::Teacher { .. } => None,
        }
    }

    fn enrolled_courses_mut(&mut self) -> Option<&mut Vec<CourseTitle>> {
        match &mut self.role {
            Role::Student { enrolled_courses } => Some(enrolled_courses),
            Role::Teacher { .. } => None,
        }
    }
}
