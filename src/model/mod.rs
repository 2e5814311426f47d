pub mod course;
pub mod credentials;
pub mod responses;
pub mod schedule;
pub mod student_info;
pub mod transcript;

pub use course::{Assignment, CourseRecord, Term};
pub use credentials::{ClassesRequest, Credentials};
pub use schedule::ScheduleEntry;
pub use student_info::StudentInfo;
pub use transcript::{GpaInfo, TranscriptCourse, TranscriptYear};
