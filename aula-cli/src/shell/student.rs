//! Student menu: list own courses, browse the catalogue and enroll.

use std::io::{BufRead, Write};

use anyhow::Result;

use aula_core::CourseTitle;

use super::prompt::Choice;
use super::{Flow, Session, Shell};
use crate::render;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StudentAction {
    MyCourses,
    Browse,
    LogOut,
}

const STUDENT_MENU: [Choice<StudentAction>; 3] = [
    Choice::new("courses", "My courses", StudentAction::MyCourses),
    Choice::new("browse", "Browse courses and enroll", StudentAction::Browse),
    Choice::new("logout", "Log out", StudentAction::LogOut),
];

impl<R: BufRead, W: Write> Shell<R, W> {
    pub(super) fn student_session(&mut self, session: &Session) -> Result<Flow> {
        loop {
            let Some(action) = self.select("Student menu", &STUDENT_MENU)? else {
                return Ok(Flow::Quit);
            };
            match action {
                StudentAction::MyCourses => self.show_enrolled_courses(session)?,
                StudentAction::Browse => {
                    if self.browse_and_enroll(session)? == Flow::Quit {
                        return Ok(Flow::Quit);
                    }
                }
                StudentAction::LogOut => return Ok(Flow::Continue),
            }
        }
    }

    fn show_enrolled_courses(&mut self, session: &Session) -> Result<()> {
        let courses = self.registry.student_course_summaries(&session.email);
        if courses.is_empty() {
            return self.warn("you are not enrolled in any course");
        }
        let rendered = render::enrolled_courses(&courses, self.format)?;
        self.say(&rendered)
    }

    fn browse_and_enroll(&mut self, session: &Session) -> Result<Flow> {
        if self.registry.courses().is_empty() {
            self.warn("no courses available yet")?;
            return Ok(Flow::Continue);
        }
        let rendered = render::catalog(self.registry.courses(), self.format)?;
        self.say(&rendered)?;

        let Some(title) = self.ask("Title of the course to enroll in:")? else {
            return Ok(Flow::Quit);
        };
        let title = CourseTitle::from(title);
        match self.registry.enroll(&title, &session.email) {
            Ok(_) => self.success(&format!("Enrolled in '{title}'"))?,
            Err(err) => self.fail(&err.to_string())?,
        }
        Ok(Flow::Continue)
    }
}
