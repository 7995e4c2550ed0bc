//! Data models for `registrar`

pub mod admin;
pub mod course;
pub mod student;
pub mod transcript;

pub use admin::Admin;
pub use course::Course;
pub use student::{Semester, Student};
pub use transcript::TranscriptRow;
