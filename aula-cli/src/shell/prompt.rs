//! Line-based prompting: free-text questions and numbered menus.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use colored::Colorize;

use super::Shell;

/// One entry of a numbered menu. `key` is accepted as an alternative to
/// the number.
pub(crate) struct Choice<T> {
    pub key: &'static str,
    pub label: &'static str,
    pub value: T,
}

impl<T> Choice<T> {
    pub const fn new(key: &'static str, label: &'static str, value: T) -> Self {
        Self { key, label, value }
    }
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Ask for one line. `None` means input is exhausted.
    pub(crate) fn ask(&mut self, question: &str) -> Result<Option<String>> {
        write!(self.output, "{question} ")?;
        self.output.flush().context("failed to flush prompt")?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read from stdin")?;
        if read == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    /// Show a menu until a valid choice is entered. `None` on end of input.
    pub(crate) fn select<T: Copy>(
        &mut self,
        title: &str,
        choices: &[Choice<T>],
    ) -> Result<Option<T>> {
        loop {
            self.say(&title.bold().to_string())?;
            for (i, choice) in choices.iter().enumerate() {
                self.say(&format!("  {}) {}", i + 1, choice.label))?;
            }

            let Some(answer) = self.ask(">")? else {
                return Ok(None);
            };
            if let Some(value) = parse_choice(answer.trim(), choices) {
                return Ok(Some(value));
            }
            self.warn(&format!(
                "invalid choice '{}'; enter 1-{} or an option name",
                answer.trim(),
                choices.len()
            ))?;
        }
    }

    pub(crate) fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{line}").context("failed to write to stdout")
    }

    pub(crate) fn success(&mut self, line: &str) -> Result<()> {
        self.say(&format!("{} {line}", "✓".green().bold()))
    }

    pub(crate) fn warn(&mut self, line: &str) -> Result<()> {
        self.say(&line.yellow().to_string())
    }

    pub(crate) fn fail(&mut self, line: &str) -> Result<()> {
        self.say(&format!("{} {line}", "✗".red().bold()))
    }
}

fn parse_choice<T: Copy>(answer: &str, choices: &[Choice<T>]) -> Option<T> {
    if let Ok(n) = answer.parse::<usize>() {
        return n
            .checked_sub(1)
            .and_then(|i| choices.get(i))
            .map(|c| c.value);
    }
    choices
        .iter()
        .find(|c| c.key.eq_ignore_ascii_case(answer))
        .map(|c| c.value)
}
