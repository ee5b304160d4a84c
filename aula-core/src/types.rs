//! Domain types for the Aula course registry.
//!
//! Emails and course titles are lookup keys, never pointers: a `Course`
//! names its teacher by email and a student names its courses by title.
//! All comparisons are exact (case-sensitive, no trimming).

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// A person's email address. Unique across the registry's people.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Email(pub String);

impl Email {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for Email {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Email {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// The title of a course. Used as the course's identifier in lookups.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseTitle(pub String);

impl CourseTitle {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CourseTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for CourseTitle {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for CourseTitle {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl AsRef<str> for CourseTitle {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ---------------------------------------------------------------------------
// Roles
// ---------------------------------------------------------------------------

/// Field-less discriminant of [`Role`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleKind {
    Student,
    Teacher,
}

impl fmt::Display for RoleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoleKind::Student => write!(f, "student"),
            RoleKind::Teacher => write!(f, "teacher"),
        }
    }
}

/// The role a person plays, with the role-specific course list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum Role {
    Student {
        /// Titles in enrollment order.
        #[serde(default)]
        enrolled_courses: Vec<CourseTitle>,
    },
    Teacher {
        /// Never read or written by the registry; ownership lives in
        /// [`Course::teacher_email`].
        #[serde(default)]
        taught_courses: Vec<CourseTitle>,
    },
}

impl Role {
    pub fn kind(&self) -> RoleKind {
        match self {
            Role::Student { .. } => RoleKind::Student,
            Role::Teacher { .. } => RoleKind::Teacher,
        }
    }
}

// ---------------------------------------------------------------------------
// Domain structs
// ---------------------------------------------------------------------------

/// A registered individual.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub email: Email,
    #[serde(flatten)]
    pub role: Role,
}

impl Person {
    /// A student with no enrollments yet.
    pub fn student(name: impl Into<String>, email: impl Into<Email>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            role: Role::Student {
                enrolled_courses: vec![],
            },
        }
    }

    /// A teacher with an empty `taught_courses` list.
    pub fn teacher(name: impl Into<String>, email: impl Into<Email>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            role: Role::Teacher {
                taught_courses: vec![],
            },
        }
    }

    /// Builds a person with the empty collection appropriate for `kind`.
    pub fn with_role(name: impl Into<String>, email: impl Into<Email>, kind: RoleKind) -> Self {
        match kind {
            RoleKind::Student => Self::student(name, email),
            RoleKind::Teacher => Self::teacher(name, email),
        }
    }
}

/// An offered course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub title: CourseTitle,
    pub description: String,
    /// Email of the owning teacher (lookup key only).
    pub teacher_email: Email,
    /// Student emails in enrollment order, no duplicates.
    #[serde(default)]
    pub enrolled_student_emails: Vec<Email>,
}

impl Course {
    pub fn new(
        title: impl Into<CourseTitle>,
        description: impl Into<String>,
        teacher_email: impl Into<Email>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            teacher_email: teacher_email.into(),
            enrolled_student_emails: vec![],
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
