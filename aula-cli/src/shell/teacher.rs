//! Teacher menu: create courses, list own courses, view rosters.

use std::io::{BufRead, Write};

use anyhow::Result;
use colored::Colorize;

use aula_core::Course;

use super::prompt::Choice;
use super::{Flow, Session, Shell};
use crate::render;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TeacherAction {
    CreateCourse,
    MyCourses,
    Rosters,
    LogOut,
}

const TEACHER_MENU: [Choice<TeacherAction>; 4] = [
    Choice::new("create", "Create course", TeacherAction::CreateCourse),
    Choice::new("courses", "My courses", TeacherAction::MyCourses),
    Choice::new("students", "Enrolled students", TeacherAction::Rosters),
    Choice::new("logout", "Log out", TeacherAction::LogOut),
];

impl<R: BufRead, W: Write> Shell<R, W> {
    pub(super) fn teacher_session(&mut self, session: &Session) -> Result<Flow> {
        loop {
            let Some(action) = self.select("Teacher menu", &TEACHER_MENU)? else {
                return Ok(Flow::Quit);
            };
            match action {
                TeacherAction::CreateCourse => {
                    if self.create_course(session)? == Flow::Quit {
                        return Ok(Flow::Quit);
                    }
                }
                TeacherAction::MyCourses => self.show_own_courses(session)?,
                TeacherAction::Rosters => self.show_rosters(session)?,
                TeacherAction::LogOut => return Ok(Flow::Continue),
            }
        }
    }

    fn create_course(&mut self, session: &Session) -> Result<Flow> {
        let Some(title) = self.ask("Course title:")? else {
            return Ok(Flow::Quit);
        };
        let Some(description) = self.ask("Course description:")? else {
            return Ok(Flow::Quit);
        };

        self.registry
            .add_course(Course::new(title.clone(), description, session.email.clone()));
        self.success(&format!("Course '{title}' created"))?;
        Ok(Flow::Continue)
    }

    fn show_own_courses(&mut self, session: &Session) -> Result<()> {
        let courses = self.registry.teacher_course_summaries(&session.email);
        if courses.is_empty() {
            return self.warn("you have not created any courses yet");
        }
        let rendered = render::course_summaries(&courses, self.format)?;
        self.say(&rendered)
    }

    fn show_rosters(&mut self, session: &Session) -> Result<()> {
        let rosters = self.registry.rosters_for_teacher(&session.email);
        if rosters.is_empty() {
            return self.warn("you have not created any courses yet");
        }
        for roster in rosters {
            self.say(&format!("Students in {}", roster.course_title).bold().to_string())?;
            if roster.students.is_empty() {
                self.warn("no students enrolled")?;
                continue;
            }
            let rendered = render::students(&roster.students, self.format)?;
            self.say(&rendered)?;
        }
        Ok(())
    }
}
