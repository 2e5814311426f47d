use serde::Serialize;

use crate::model::course::CourseRecord;
use crate::model::schedule::ScheduleEntry;
use crate::model::student_info::StudentInfo;
use crate::model::transcript::TranscriptYear;

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleResponse {
    pub student_schedule: Vec<ScheduleEntry>,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CurrentClassesResponse {
    pub current_classes: Vec<CourseRecord>,
}

/// `/api/classes` answers under a key that names the period it fetched.
#[derive(Serialize, Debug)]
#[serde(untagged)]
pub enum ClassesResponse {
    Current {
        #[serde(rename = "currentClasses")]
        current_classes: Vec<CourseRecord>,
    },
    Past {
        #[serde(rename = "pastClasses")]
        past_classes: Vec<CourseRecord>,
    },
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TranscriptResponse {
    pub student_transcript: Vec<TranscriptYear>,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AllDataResponse {
    pub student_info: StudentInfo,
    pub student_schedule: Vec<ScheduleEntry>,
    pub current_classes: Vec<CourseRecord>,
}
