use scraper::Html;

use crate::core::html_parser::{or_empty, text_by_id};
use crate::error::{FieldError, HacError};
use crate::model::StudentInfo;

pub const REGISTRATION_PATH: &str = "HomeAccess/Content/Student/Registration.aspx";

const NAME_ID: &str = "plnMain_lblRegStudentName";
const STUDENT_ID_ID: &str = "plnMain_lblRegStudentID";

/// What the registration page yields.
///
/// Some districts hide the student id here; `student_id` is then an error
/// and the caller falls back to the schedule page.
#[derive(Debug)]
pub struct RegistrationPage {
    pub info: StudentInfo,
    pub student_id: Result<String, FieldError>,
}

impl RegistrationPage {
    pub fn needs_fallback(&self) -> bool {
        self.student_id.is_err()
    }

    /// Completes `info` with the id found here or, failing that, the id on
    /// `fallback_html` (the schedule page).
    pub fn into_info(self, fallback_html: Option<&str>) -> Result<StudentInfo, HacError> {
        let mut info = self.info;
        info.id = match (self.student_id, fallback_html) {
            (Ok(id), _) => id,
            (Err(err), Some(html)) => {
                log::debug!("student id not on registration page ({}), using fallback", err);
                parse_student_id(html).map_err(|err| {
                    HacError::authentication(&format!("student id not found: {err}"))
                })?
            }
            (Err(err), None) => {
                return Err(HacError::authentication(&format!(
                    "student id not found: {err}"
                )));
            }
        };
        Ok(info)
    }
}

/// Parses `Registration.aspx`.
///
/// The student name is the element that proves the session is logged in;
/// without it the whole lookup is an authentication failure.
pub fn parse_registration(html: &str) -> Result<RegistrationPage, HacError> {
    let document = Html::parse_document(html);

    let name = text_by_id(&document, NAME_ID).map_err(|err| {
        HacError::authentication(&format!("registration page has no student name: {err}"))
    })?;

    let info = StudentInfo {
        id: String::new(),
        name,
        birthdate: or_empty(text_by_id(&document, "plnMain_lblBirthDate"), "birthdate"),
        campus: or_empty(text_by_id(&document, "plnMain_lblBuildingName"), "campus"),
        grade: or_empty(text_by_id(&document, "plnMain_lblGrade"), "grade"),
        counselor: or_empty(text_by_id(&document, "plnMain_lblCounselor"), "counselor"),
    };

    Ok(RegistrationPage {
        info,
        student_id: student_id_in(&document),
    })
}

/// Reads the student id label from any page that carries it.
pub fn parse_student_id(html: &str) -> Result<String, FieldError> {
    student_id_in(&Html::parse_document(html))
}

fn student_id_in(document: &Html) -> Result<String, FieldError> {
    let id = text_by_id(document, STUDENT_ID_ID)?;
    if id.is_empty() {
        return Err(FieldError::Missing(format!("#{STUDENT_ID_ID} text")));
    }
    Ok(id)
}
