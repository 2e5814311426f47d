use serde::{Deserialize, Serialize};

/// One row of the class schedule table.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry {
    pub course_code: String,
    pub course_name: String,
    pub periods: String,
    pub days: String,
    pub room: String,
    pub teacher: String,
    /// Empty when the teacher cell carries no mail link.
    pub teacher_email: String,
    pub marking_periods: String,
    pub building: String,
    pub status: String,
}
