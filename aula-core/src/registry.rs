//! In-memory course registry.
//!
//! # Ownership
//!
//! ```text
//! Registry<P>
//!   people:  Vec<P>       (registration order, unique by email)
//!   courses: Vec<Course>  (creation order, titles not checked)
//! ```
//!
//! Cross-references are by key: `Course::teacher_email` names a person,
//! `Course::enrolled_student_emails` names people, and a student's
//! `enrolled_courses` names courses. Every lookup is a linear scan and
//! the first match in insertion order wins.
//!
//! # Concurrency
//!
//! The registry is a plain owned value with no interior mutability.
//! Sharing it between threads means wrapping it in a single lock.

use crate::error::RegistryError;
use crate::member::Member;
use crate::types::{Course, CourseTitle, Email, Person};
use crate::views::{
    CourseRoster, CourseSummary, EnrolledCourse, StudentEntry, UNKNOWN_EMAIL, UNKNOWN_NAME,
};

/// How the person side of an enrollment turned out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnrollOutcome {
    /// The email belongs to a student whose course list was updated too.
    Reciprocal,
    /// Only the course roster changed: the email belongs to nobody, or to
    /// someone who is not a student.
    RosterOnly,
}

/// Sole owner of all people and courses.
#[derive(Debug, Clone)]
pub struct Registry<P: Member = Person> {
    people: Vec<P>,
    courses: Vec<Course>,
}

impl<P: Member> Default for Registry<P> {
    fn default() -> Self {
        Self {
            people: Vec::new(),
            courses: Vec::new(),
        }
    }
}

impl<P: Member> Registry<P> {
    pub fn new() -> Self {
        Self::default()
    }

    // -----------------------------------------------------------------------
    // 1. People
    // -----------------------------------------------------------------------

    /// Register `person`.
    ///
    /// Returns [`RegistryError::DuplicateEmail`] without touching the
    /// registry if the email is already taken.
    pub fn add_person(&mut self, person: P) -> Result<(), RegistryError> {
        if self.find_by_email(person.email()).is_some() {
            return Err(RegistryError::DuplicateEmail {
                email: person.email().clone(),
            });
        }
        tracing::debug!(email = %person.email(), role = %person.role_kind(), "person added");
        self.people.push(person);
        Ok(())
    }

    /// Login lookup: both `name` and `email` must match exactly.
    pub fn find_person(&self, name: &str, email: &Email) -> Option<&P> {
        self.people
            .iter()
            .find(|p| p.name() == name && p.email() == email)
    }

    /// First person registered under `email`, of any role.
    pub fn find_by_email(&self, email: &Email) -> Option<&P> {
        self.people.iter().find(|p| p.email() == email)
    }

    /// All people in registration order.
    pub fn people(&self) -> &[P] {
        &self.people
    }

    pub fn len_people(&self) -> usize {
        self.people.len()
    }

    // -----------------------------------------------------------------------
    // 2. Courses
    // -----------------------------------------------------------------------

    /// Append `course`. Titles are not checked for uniqueness; a later
    /// course with a repeated title is shadowed by the earlier one in every
    /// title lookup.
    pub fn add_course(&mut self, course: Course) {
        tracing::debug!(title = %course.title, teacher = %course.teacher_email, "course added");
        self.courses.push(course);
    }

    /// All courses in creation order.
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn len_courses(&self) -> usize {
        self.courses.len()
    }

    /// First course titled `title`.
    pub fn find_course(&self, title: &CourseTitle) -> Option<&Course> {
        self.courses.iter().find(|c| &c.title == title)
    }

    // -----------------------------------------------------------------------
    // 3. Enrollment
    // -----------------------------------------------------------------------

    /// Put `email` on the roster of the course titled `title`, then append
    /// `title` to the matching student's course list if there is one.
    ///
    /// The roster update stands even when no student owns `email`; the
    /// returned [`EnrollOutcome`] says which case happened.
    pub fn enroll(
        &mut self,
        title: &CourseTitle,
        email: &Email,
    ) -> Result<EnrollOutcome, RegistryError> {
        let course = self
            .courses
            .iter_mut()
            .find(|c| &c.title == title)
            .ok_or_else(|| RegistryError::CourseNotFound {
                title: title.clone(),
            })?;

        if course.enrolled_student_emails.contains(email) {
            return Err(RegistryError::AlreadyEnrolled {
                title: title.clone(),
                email: email.clone(),
            });
        }
        course.enrolled_student_emails.push(email.clone());

        let student = self
            .people
            .iter_mut()
            .filter(|p| p.email() == email)
            .find_map(|p| p.enrolled_courses_mut());

        match student {
            Some(titles) => {
                titles.push(title.clone());
                tracing::debug!(%title, %email, "student enrolled");
                Ok(EnrollOutcome::Reciprocal)
            }
            None => {
                tracing::warn!(%title, %email, "enrolled email has no student record");
                Ok(EnrollOutcome::RosterOnly)
            }
        }
    }

    // -----------------------------------------------------------------------
    // 4. Teacher views
    // -----------------------------------------------------------------------

    /// Courses owned by `teacher_email`, in creation order.
    pub fn courses_by_teacher(&self, teacher_email: &Email) -> Vec<&Course> {
        self.courses
            .iter()
            .filter(|c| &c.teacher_email == teacher_email)
            .collect()
    }

    pub fn teacher_course_summaries(&self, teacher_email: &Email) -> Vec<CourseSummary> {
        self.courses_by_teacher(teacher_email)
            .into_iter()
            .map(|c| CourseSummary {
                title: c.title.to_string(),
                description: c.description.clone(),
            })
            .collect()
    }

    /// One roster per owned course. Emails are resolved against people of
    /// any role; unresolved ones become [`StudentEntry::placeholder`].
    pub fn rosters_for_teacher(&self, teacher_email: &Email) -> Vec<CourseRoster> {
        self.courses_by_teacher(teacher_email)
            .into_iter()
            .map(|c| CourseRoster {
                course_title: c.title.to_string(),
                students: c
                    .enrolled_student_emails
                    .iter()
                    .map(|email| match self.find_by_email(email) {
                        Some(p) => StudentEntry {
                            name: p.name().to_string(),
                            email: p.email().to_string(),
                        },
                        None => StudentEntry::placeholder(),
                    })
                    .collect(),
            })
            .collect()
    }

    // -----------------------------------------------------------------------
    // 5. Student views
    // -----------------------------------------------------------------------

    /// The student's courses in enrollment order, each with its teacher.
    ///
    /// Empty when `student_email` is unknown or not a student. A title with
    /// no course, or a course whose teacher is unknown, yields placeholder
    /// fields instead of being skipped.
    pub fn student_course_summaries(&self, student_email: &Email) -> Vec<EnrolledCourse> {
        let Some(titles) = self
            .find_by_email(student_email)
            .and_then(|p| p.enrolled_courses())
        else {
            return vec![];
        };

        titles
            .iter()
            .map(|title| {
                let course = self.find_course(title);
                let teacher = course.and_then(|c| self.find_by_email(&c.teacher_email));
                EnrolledCourse {
                    title: course.map_or_else(|| UNKNOWN_NAME.to_string(), |c| c.title.to_string()),
                    description: course
                        .map_or_else(|| UNKNOWN_EMAIL.to_string(), |c| c.description.clone()),
                    teacher_name: teacher
                        .map_or_else(|| UNKNOWN_NAME.to_string(), |t| t.name().to_string()),
                    teacher_email: teacher
                        .map_or_else(|| UNKNOWN_EMAIL.to_string(), |t| t.email().to_string()),
                }
            })
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn ana() -> Email {
        Email::from("ana@x.com")
    }
    fn bob() -> Email {
        Email::from("bob@x.com")
    }
    fn algebra() -> CourseTitle {
        CourseTitle::from("Algebra")
    }

    fn seeded() -> Registry {
        let mut reg = Registry::new();
        reg.add_person(Person::teacher("Ana", "ana@x.com")).expect("ana");
        reg.add_person(Person::student("Bob", "bob@x.com")).expect("bob");
        reg.add_course(Course::new("Algebra", "Basic algebra", "ana@x.com"));
        reg
    }

    #[test]
    fn duplicate_email_leaves_people_unchanged() {
        let mut reg = seeded();
        let err = reg
            .add_person(Person::student("Someone Else", "ana@x.com"))
            .unwrap_err();
        assert_eq!(err, RegistryError::DuplicateEmail { email: ana() });
        assert_eq!(reg.len_people(), 2);
        assert_eq!(reg.people()[0].name, "Ana");
    }

    #[test]
    fn find_person_requires_both_fields() {
        let reg = seeded();
        assert!(reg.find_person("Ana", &ana()).is_some());
        assert!(reg.find_person("ana", &ana()).is_none());
        assert!(reg.find_person("Ana", &bob()).is_none());
    }

    #[test]
    fn enroll_updates_both_sides() {
        let mut reg = seeded();
        let outcome = reg.enroll(&algebra(), &bob()).expect("enroll");
        assert_eq!(outcome, EnrollOutcome::Reciprocal);
        assert_eq!(reg.courses()[0].enrolled_student_emails, vec![bob()]);
        assert_eq!(
            reg.find_by_email(&bob()).and_then(|p| p.enrolled_courses()),
            Some(&[algebra()][..])
        );
    }

    #[test]
    fn enrolling_a_teacher_only_touches_the_roster() {
        let mut reg = seeded();
        let outcome = reg.enroll(&algebra(), &ana()).expect("enroll");
        assert_eq!(outcome, EnrollOutcome::RosterOnly);
        assert_eq!(reg.courses()[0].enrolled_student_emails, vec![ana()]);
    }

    #[test]
    fn enrolling_an_unknown_email_only_touches_the_roster() {
        let mut reg = seeded();
        let ghost = Email::from("ghost@x.com");
        assert_eq!(reg.enroll(&algebra(), &ghost), Ok(EnrollOutcome::RosterOnly));
        assert_eq!(reg.rosters_for_teacher(&ana())[0].students, vec![StudentEntry::placeholder()]);
    }

    #[test]
    fn duplicate_titles_resolve_to_first_course() {
        let mut reg = seeded();
        reg.add_course(Course::new("Algebra", "Second copy", "ana@x.com"));
        reg.enroll(&algebra(), &bob()).expect("enroll");
        assert_eq!(reg.courses()[0].enrolled_student_emails.len(), 1);
        assert!(reg.courses()[1].enrolled_student_emails.is_empty());
        assert_eq!(reg.find_course(&algebra()).map(|c| c.description.as_str()), Some("Basic algebra"));
    }

    #[test]
    fn student_view_uses_placeholders_for_missing_course_and_teacher() {
        let mut reg = seeded();
        reg.add_course(Course::new("Orphan", "No teacher", "gone@x.com"));
        reg.enroll(&CourseTitle::from("Orphan"), &bob()).expect("enroll");

        let mut lost = Person::student("Lost", "lost@x.com");
        lost.enrolled_courses_mut()
            .expect("student")
            .push(CourseTitle::from("Vanished"));
        reg.add_person(lost).expect("add");

        let bob_view = reg.student_course_summaries(&bob());
        assert_eq!(bob_view[0].teacher_name, UNKNOWN_NAME);
        assert_eq!(bob_view[0].teacher_email, UNKNOWN_EMAIL);
        assert_eq!(bob_view[0].description, "No teacher");

        let lost_view = reg.student_course_summaries(&Email::from("lost@x.com"));
        assert_eq!(
            lost_view,
            vec![EnrolledCourse {
                title: UNKNOWN_NAME.to_string(),
                description: UNKNOWN_EMAIL.to_string(),
                teacher_name: UNKNOWN_NAME.to_string(),
                teacher_email: UNKNOWN_EMAIL.to_string(),
            }]
        );
    }

    #[test]
    fn student_view_is_empty_for_teachers_and_strangers() {
        let reg = seeded();
        assert!(reg.student_course_summaries(&ana()).is_empty());
        assert!(reg.student_course_summaries(&Email::from("nobody@x.com")).is_empty());
    }
}
