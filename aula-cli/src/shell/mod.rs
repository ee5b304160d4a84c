//! The interactive menu loop driving a single [`Registry`].
//!
//! ```text
//! top menu ── log in ──► teacher menu | student menu ── log out ──┐
//!    ▲    └── create user                                         │
//!    └────────────────────────────────────────────────────────────┘
//! ```
//!
//! Registry errors are printed and the current menu continues; only
//! terminal I/O failures end the loop with an error.

mod prompt;
mod student;
mod teacher;

use std::io::{BufRead, Write};

use anyhow::Result;

use aula_core::{Email, Member, Person, Registry, RoleKind};

use crate::render::OutputFormat;
use prompt::Choice;

/// Whether the shell keeps going after a menu returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TopAction {
    Login,
    CreateUser,
    Exit,
}

const TOP_MENU: [Choice<TopAction>; 3] = [
    Choice::new("login", "Log in", TopAction::Login),
    Choice::new("create", "Create user", TopAction::CreateUser),
    Choice::new("exit", "Exit", TopAction::Exit),
];

const ROLE_MENU: [Choice<RoleKind>; 2] = [
    Choice::new("student", "Student", RoleKind::Student),
    Choice::new("teacher", "Teacher", RoleKind::Teacher),
];

/// The logged-in user. Copied out of the registry so the session does not
/// hold a borrow across mutations.
struct Session {
    name: String,
    email: Email,
}

pub struct Shell<R, W> {
    registry: Registry,
    input: R,
    output: W,
    format: OutputFormat,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(registry: Registry, input: R, output: W, format: OutputFormat) -> Self {
        Self {
            registry,
            input,
            output,
            format,
        }
    }

    /// Run until the user picks "Exit" or input ends.
    pub fn run(&mut self) -> Result<()> {
        loop {
            let action = self.select("Course platform", &TOP_MENU)?;
            let flow = match action {
                Some(TopAction::Login) => self.login()?,
                Some(TopAction::CreateUser) => self.create_user()?,
                Some(TopAction::Exit) | None => Flow::Quit,
            };
            if flow == Flow::Quit {
                self.say("Goodbye!")?;
                return Ok(());
            }
        }
    }

    #[cfg(test)]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    fn login(&mut self) -> Result<Flow> {
        let Some(name) = self.ask("Name:")? else {
            return Ok(Flow::Quit);
        };
        let Some(email) = self.ask("Email:")? else {
            return Ok(Flow::Quit);
        };
        let email = Email::from(email);

        let found = self.registry.find_person(&name, &email).map(|p| {
            let session = Session {
                name: p.name().to_string(),
                email: p.email().clone(),
            };
            (p.role_kind(), session)
        });
        let Some((role, session)) = found else {
            self.fail("user not found")?;
            return Ok(Flow::Continue);
        };

        self.success(&format!("Welcome back, {}!", session.name))?;
        tracing::debug!(email = %session.email, %role, "session started");
        match role {
            RoleKind::Teacher => self.teacher_session(&session),
            RoleKind::Student => self.student_session(&session),
        }
    }

    fn create_user(&mut self) -> Result<Flow> {
        let Some(name) = self.ask("Name:")? else {
            return Ok(Flow::Quit);
        };
        let Some(email) = self.ask("Email:")? else {
            return Ok(Flow::Quit);
        };
        let Some(role) = self.select("Account type", &ROLE_MENU)? else {
            return Ok(Flow::Quit);
        };

        let person = Person::with_role(name.clone(), email, role);
        match self.registry.add_person(person) {
            Ok(()) => self.success(&format!("Created {role} '{name}'"))?,
            Err(err) => self.fail(&err.to_string())?,
        }
        Ok(Flow::Continue)
    }
}
