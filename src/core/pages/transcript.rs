use log::debug;
use scraper::{ElementRef, Html};

use crate::core::html_parser::{
    all, cell_at, cell_texts, check_row_width, element_text, first_text, or_empty,
};
use crate::error::{FieldError, HacError};
use crate::model::{GpaInfo, TranscriptCourse, TranscriptYear};

pub const TRANSCRIPT_PATH: &str = "HomeAccess/Content/Student/Transcript.aspx";

const GPA_TABLE: &str = "table#plnMain_rpTranscriptGroup_tblCumGPAInfo";

/// Course table columns, schema v1:
/// course, description, sem1, sem2, final, credit.
const COURSE_COLUMNS: usize = 6;

pub fn parse_transcript(html: &str) -> Result<Vec<TranscriptYear>, HacError> {
    let document = Html::parse_document(html);

    let mut years = Vec::new();
    for group in all(document.root_element(), "td.sg-transcript-group")? {
        years.push(parse_year(group)?);
    }
    Ok(years)
}

fn parse_year(group: ElementRef<'_>) -> Result<TranscriptYear, HacError> {
    let mut year = TranscriptYear {
        years_attended: or_empty(first_text(group, r#"[id*="lblYearValue"]"#), "year"),
        grade_level: or_empty(first_text(group, r#"[id*="lblGradeValue"]"#), "grade level"),
        building: or_empty(first_text(group, r#"[id*="lblBuildingValue"]"#), "building"),
        total_credits: or_empty(first_text(group, r#"[id*="LblTCreditValue"]"#), "credits"),
        courses: Vec::new(),
    };

    for row in all(group, "tr.sg-asp-table-data-row")? {
        match parse_course(row) {
            Ok(course) => year.courses.push(course),
            Err(err @ FieldError::InvalidSelector(_)) => return Err(err.into()),
            Err(err) => debug!("skipping transcript row in {}: {}", year.years_attended, err),
        }
    }

    Ok(year)
}

fn parse_course(row: ElementRef<'_>) -> Result<TranscriptCourse, FieldError> {
    let texts = cell_texts(row)?;
    check_row_width("transcript", texts.len(), COURSE_COLUMNS);

    Ok(TranscriptCourse {
        course_code: cell_at(&texts, 0)?,
        course_name: cell_at(&texts, 1)?,
        sem1_grade: cell_at(&texts, 2)?,
        sem2_grade: cell_at(&texts, 3)?,
        final_grade: cell_at(&texts, 4)?,
        course_credits: cell_at(&texts, 5)?,
    })
}

/// Cumulative GPA block on `Transcript.aspx`.
///
/// Rows are matched by their label, not by position.
pub fn parse_gpa(html: &str) -> Result<GpaInfo, HacError> {
    let document = Html::parse_document(html);
    let mut gpa = GpaInfo::default();

    for table in all(document.root_element(), GPA_TABLE)? {
        for row in all(table, "tr")? {
            let label = match cell_texts(row)?.first() {
                Some(label) => label.to_lowercase(),
                None => continue,
            };
            let value = match first_text(row, r#"[id*="lblGPACum"]"#) {
                Ok(value) => value,
                Err(FieldError::Missing(_)) => continue,
                Err(err) => return Err(err.into()),
            };

            if label.contains("unweighted") {
                gpa.unweighted_gpa = value;
            } else if label.contains("weighted") {
                gpa.weighted_gpa = value;
            }
        }
    }

    gpa.rank = all(document.root_element(), r#"[id*="lblGPARank"]"#)?
        .into_iter()
        .map(element_text)
        .find(|rank| !rank.is_empty());

    Ok(gpa)
}
