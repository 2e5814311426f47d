use std::sync::LazyLock;

use log::debug;
use regex::Regex;
use scraper::{ElementRef, Html};

use crate::core::html_parser::{all, cell_at, cell_texts, first, first_text, or_empty};
use crate::error::{FieldError, HacError};
use crate::model::{Assignment, CourseRecord};

pub const ASSIGNMENTS_PATH: &str = "HomeAccess/Content/Student/Assignments.aspx";

/// Present in the course header only when the student dropped the course.
const DROPPED_MARKER: &str = "span.sg-header-sub-heading.sg-right";

/// Assignment table columns, schema v1: the name comes from the row's link,
/// the rest by position.
const DATE_DUE: usize = 0;
const DATE_ASSIGNED: usize = 1;
const CATEGORY: usize = 3;
const SCORE: usize = 4;
const TOTAL_POINTS: usize = 5;

static LAST_UPDATED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\(Last Updated:\s*(.*?)\)").expect("last-updated pattern is valid")
});

#[derive(Debug)]
struct ParsedCourse {
    record: CourseRecord,
    dropped: bool,
}

/// Parses every class container on `Assignments.aspx` (current or a posted
/// back historical run), leaving out dropped courses.
pub fn parse_courses(html: &str) -> Result<Vec<CourseRecord>, HacError> {
    let document = Html::parse_document(html);

    let mut parsed = Vec::new();
    for container in all(document.root_element(), "div.AssignmentClass")? {
        parsed.push(parse_course(container)?);
    }

    Ok(parsed
        .into_iter()
        .filter(|course| {
            if course.dropped {
                debug!("leaving out dropped course `{}`", course.record.name);
            }
            !course.dropped
        })
        .map(|course| course.record)
        .collect())
}

fn parse_course(container: ElementRef<'_>) -> Result<ParsedCourse, HacError> {
    let mut record = CourseRecord::default();
    let mut dropped = false;

    if let Ok(header) = first(container, "div.sg-header") {
        record.name = or_empty(first_text(header, "a.sg-header-heading"), "course name");

        let updated = or_empty(first_text(header, "span.sg-header-sub-heading"), "last updated");
        record.last_updated = match LAST_UPDATED.captures(&updated) {
            Some(caps) => caps[1].trim().to_string(),
            None => updated,
        };

        record.grade = or_empty(first_text(header, "span.sg-header-heading.sg-right"), "grade")
            .replace("Student Grades", "")
            .replace('%', "")
            .trim()
            .to_string();

        dropped = !all(header, DROPPED_MARKER)?.is_empty();
    }

    for row in all(container, "div.sg-content-grid tr.sg-asp-table-data-row")? {
        match parse_assignment(row) {
            Ok(assignment) => record.assignments.push(assignment),
            Err(err @ FieldError::InvalidSelector(_)) => return Err(err.into()),
            Err(err) => debug!("skipping assignment row in `{}`: {}", record.name, err),
        }
    }

    Ok(ParsedCourse { record, dropped })
}

fn parse_assignment(row: ElementRef<'_>) -> Result<Assignment, FieldError> {
    let name = first_text(row, "a")?;
    let texts = cell_texts(row)?;

    Ok(Assignment {
        name,
        date_due: cell_at(&texts, DATE_DUE)?,
        date_assigned: cell_at(&texts, DATE_ASSIGNED)?,
        category: cell_at(&texts, CATEGORY)?,
        score: cell_at(&texts, SCORE)?,
        total_points: cell_at(&texts, TOTAL_POINTS)?,
    })
}
