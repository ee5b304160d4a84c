//! Table / JSON rendering of the registry's views.

use anyhow::{Context, Result};
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

use aula_core::{Course, CourseSummary, EnrolledCourse, StudentEntry};

/// How views are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Tabled)]
struct CourseRow {
    #[tabled(rename = "title")]
    title: String,
    #[tabled(rename = "description")]
    description: String,
}

#[derive(Tabled)]
struct StudentRow {
    #[tabled(rename = "name")]
    name: String,
    #[tabled(rename = "email")]
    email: String,
}

#[derive(Tabled)]
struct EnrolledRow {
    #[tabled(rename = "title")]
    title: String,
    #[tabled(rename = "description")]
    description: String,
    #[tabled(rename = "teacher")]
    teacher: String,
    #[tabled(rename = "teacher email")]
    teacher_email: String,
}

/// Course listing shown while browsing; only what a student needs to pick one.
#[derive(Serialize)]
struct CatalogEntry<'a> {
    title: &'a str,
    description: &'a str,
    enrolled: usize,
}

pub fn course_summaries(rows: &[CourseSummary], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => json(rows),
        OutputFormat::Table => Ok(table(rows.iter().map(|r| CourseRow {
            title: r.title.clone(),
            description: r.description.clone(),
        }))),
    }
}

pub fn students(rows: &[StudentEntry], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => json(rows),
        OutputFormat::Table => Ok(table(rows.iter().map(|r| StudentRow {
            name: r.name.clone(),
            email: r.email.clone(),
        }))),
    }
}

pub fn enrolled_courses(rows: &[EnrolledCourse], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => json(rows),
        OutputFormat::Table => Ok(table(rows.iter().map(|r| EnrolledRow {
            title: r.title.clone(),
            description: r.description.clone(),
            teacher: r.teacher_name.clone(),
            teacher_email: r.teacher_email.clone(),
        }))),
    }
}

pub fn catalog(courses: &[Course], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let entries: Vec<CatalogEntry<'_>> = courses
                .iter()
                .map(|c| CatalogEntry {
                    title: c.title.as_str(),
                    description: &c.description,
                    enrolled: c.enrolled_student_emails.len(),
                })
                .collect();
            json(&entries)
        }
        OutputFormat::Table => Ok(table(courses.iter().map(|c| CourseRow {
            title: c.title.to_string(),
            description: c.description.clone(),
        }))),
    }
}

fn table<T: Tabled>(rows: impl IntoIterator<Item = T>) -> String {
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}

fn json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("failed to serialize view as JSON")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn algebra() -> CourseSummary {
        CourseSummary {
            title: "Algebra".into(),
            description: "Basic algebra".into(),
        }
    }

    #[test]
    fn table_contains_headers_and_cells() {
        let out = course_summaries(&[algebra()], OutputFormat::Table).expect("render");
        assert!(out.contains("title"));
        assert!(out.contains("description"));
        assert!(out.contains("Algebra"));
        assert!(out.contains("Basic algebra"));
    }

    #[test]
    fn json_is_an_array_of_records() {
        let out = course_summaries(&[algebra()], OutputFormat::Json).expect("render");
        let value: serde_json::Value = serde_json::from_str(&out).expect("valid json");
        assert_eq!(value[0]["title"], "Algebra");
        assert_eq!(value[0]["description"], "Basic algebra");
    }

    #[test]
    fn catalog_json_reports_roster_size() {
        let mut course = Course::new("Algebra", "Basic algebra", "ana@x.com");
        course.enrolled_student_emails.push("bob@x.com".into());
        let out = catalog(&[course], OutputFormat::Json).expect("render");
        let value: serde_json::Value = serde_json::from_str(&out).expect("valid json");
        assert_eq!(value[0]["enrolled"], 1);
    }
}
