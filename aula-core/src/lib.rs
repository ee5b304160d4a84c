//! Aula core library — course registry, domain types, per-role views.
//!
//! - [`types`] — newtypes and domain structs
//! - [`member`] — the [`Member`] trait the registry is generic over
//! - [`registry`] — [`Registry`] and its operations
//! - [`views`] — presentation records returned by the queries
//! - [`error`] — [`RegistryError`]

pub mod error;
pub mod member;
pub mod registry;
pub mod types;
pub mod views;

pub use error::RegistryError;
pub use member::Member;
pub use registry::{EnrollOutcome, Registry};
pub use types::{Course, CourseTitle, Email, Person, Role, RoleKind};
pub use views::{
    CourseRoster, CourseSummary, EnrolledCourse, StudentEntry, UNKNOWN_EMAIL, UNKNOWN_NAME,
};
