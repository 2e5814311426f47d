use scraper::{ElementRef, Html};

use crate::core::html_parser::{all, cells, check_row_width, element_text, first};
use crate::error::{FieldError, HacError};
use crate::model::ScheduleEntry;

pub const CLASSES_PATH: &str = "HomeAccess/Content/Student/Classes.aspx";

/// Column layout of the schedule table, schema v1.
///
/// Columns are read by position, not by header text:
///
/// | # | field          |
/// |---|----------------|
/// | 0 | courseCode     |
/// | 1 | courseName     |
/// | 2 | periods        |
/// | 3 | teacher        |
/// | 4 | room           |
/// | 5 | days           |
/// | 6 | markingPeriods |
/// | 7 | building       |
/// | 8 | status         |
pub const SCHEDULE_COLUMNS: [&str; 9] = [
    "courseCode",
    "courseName",
    "periods",
    "teacher",
    "room",
    "days",
    "markingPeriods",
    "building",
    "status",
];

const TEACHER_COLUMN: usize = 3;

/// Rows with this many cells or fewer are not class rows.
const MIN_CELLS: usize = 3;

pub fn parse_schedule(html: &str) -> Result<Vec<ScheduleEntry>, HacError> {
    let document = Html::parse_document(html);
    let rows = all(document.root_element(), "tr.sg-asp-table-data-row")?;

    let mut schedule = Vec::new();
    for row in rows {
        let row_cells = cells(row)?;
        if row_cells.len() <= MIN_CELLS {
            continue;
        }
        check_row_width("schedule", row_cells.len(), SCHEDULE_COLUMNS.len());
        schedule.push(schedule_entry(&row_cells)?);
    }

    Ok(schedule)
}

fn schedule_entry(row_cells: &[ElementRef<'_>]) -> Result<ScheduleEntry, HacError> {
    let text = |index: usize| row_cells.get(index).map(|c| element_text(*c)).unwrap_or_default();

    let teacher_email = match row_cells.get(TEACHER_COLUMN) {
        Some(cell) => match teacher_email(*cell) {
            Ok(email) => email,
            Err(FieldError::Missing(_)) | Err(FieldError::MissingCell { .. }) => String::new(),
            Err(err) => return Err(err.into()),
        },
        None => String::new(),
    };

    Ok(ScheduleEntry {
        course_code: text(0),
        course_name: text(1),
        periods: text(2),
        teacher: text(TEACHER_COLUMN),
        teacher_email,
        room: text(4),
        days: text(5),
        marking_periods: text(6),
        building: text(7),
        status: text(8),
    })
}

fn teacher_email(cell: ElementRef<'_>) -> Result<String, FieldError> {
    let link = first(cell, r#"a[href^="mailto:"]"#)?;
    let href = link.value().attr("href").unwrap_or_default();
    Ok(href.trim_start_matches("mailto:").trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLASSES: &str = include_str!("../../../tests/fixtures/classes.html");

    #[test]
    fn extracts_rows_in_order() {
        let schedule = parse_schedule(CLASSES).unwrap();
        let codes: Vec<_> = schedule.iter().map(|e| e.course_code.as_str()).collect();
        assert_eq!(codes, ["MTH45300A - 1", "ENG13300A - 4", "SCI30100A - 2"]);

        assert_eq!(
            schedule[0],
            ScheduleEntry {
                course_code: "MTH45300A - 1".into(),
                course_name: "AP Calculus AB S1".into(),
                periods: "1".into(),
                days: "A".into(),
                room: "B201".into(),
                teacher: "Smith, John".into(),
                teacher_email: "john.smith@example.org".into(),
                marking_periods: "Q1, Q2".into(),
                building: "Independence High School".into(),
                status: "Active".into(),
            }
        );
    }

    #[test]
    fn short_rows_are_excluded() {
        let schedule = parse_schedule(CLASSES).unwrap();
        assert!(schedule.iter().all(|e| e.course_name != "Advisory"));
    }

    #[test]
    fn missing_email_is_empty() {
        let schedule = parse_schedule(CLASSES).unwrap();
        assert_eq!(schedule[1].teacher, "Nguyen, Mai");
        assert_eq!(schedule[1].teacher_email, "");
    }

    #[test]
    fn truncated_row_keeps_leading_columns() {
        let schedule = parse_schedule(CLASSES).unwrap();
        let chem = &schedule[2];
        assert_eq!(chem.teacher_email, "RIVERA.L@EXAMPLE.ORG");
        assert_eq!(chem.room, "D010");
        assert_eq!(chem.days, "");
        assert_eq!(chem.status, "");
    }

    #[test]
    fn page_without_table_is_empty() {
        assert!(parse_schedule("<html><body></body></html>").unwrap().is_empty());
    }
}
