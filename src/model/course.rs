use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CourseRecord {
    pub name: String,
    pub grade: String,
    pub last_updated: String,
    pub assignments: Vec<Assignment>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub name: String,
    pub category: String,
    pub date_assigned: String,
    pub date_due: String,
    pub score: String,
    pub total_points: String,
}

/// Grading period selector for `/api/classes`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Term {
    /// Whatever the assignments page shows without a form post.
    Current,
    /// A report card run, e.g. `"2"` or `"2-2025"`.
    Past(String),
}

impl Term {
    pub fn parse(quarter: &str) -> Self {
        let quarter = quarter.trim();
        if quarter.is_empty() || quarter.eq_ignore_ascii_case("current") {
            Term::Current
        } else {
            Term::Past(quarter.to_string())
        }
    }
}
