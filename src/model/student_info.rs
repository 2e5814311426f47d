use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentInfo {
    pub id: String,
    pub name: String,
    pub birthdate: String,
    pub campus: String,
    pub grade: String,
    pub counselor: String,
}
