use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TranscriptYear {
    pub years_attended: String,
    pub grade_level: String,
    pub building: String,
    pub total_credits: String,
    pub courses: Vec<TranscriptCourse>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TranscriptCourse {
    pub course_code: String,
    pub course_name: String,
    pub sem1_grade: String,
    pub sem2_grade: String,
    pub final_grade: String,
    pub course_credits: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct GpaInfo {
    #[serde(rename = "unweightedGPA")]
    pub unweighted_gpa: String,
    #[serde(rename = "weightedGPA")]
    pub weighted_gpa: String,
    pub rank: Option<String>,
}
