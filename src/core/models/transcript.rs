//! Transcript row model

use crate::core::models::{Course, Semester, Student};

/// Column names of the transcript CSV, in order
pub const TRANSCRIPT_HEADER: [&str; 6] = [
    "Student_Name",
    "Student_ID",
    "Courses_List",
    "Year",
    "Semester",
    "Credits",
];

/// One committed schedule for a student in a given term
#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptRow {
    /// Student display name
    pub student_name: String,
    /// Student identifier
    pub student_id: String,
    /// Course names in schedule order
    pub courses: Vec<String>,
    /// Academic year (e.g., 2026)
    pub year: u16,
    /// Term within the year
    pub semester: Semester,
    /// Sum of credit hours across `courses`
    pub credits: f32,
}

impl TranscriptRow {
    /// Summarize a set of courses for a student and term
    #[must_use]
    pub fn for_courses(student: &Student, courses: &[Course], year: u16, semester: Semester) -> Self {
        Self {
            student_name: student.name.clone(),
            student_id: student.id.clone(),
            courses: courses.iter().map(|c| c.name.clone()).collect(),
            year,
            semester,
            credits: courses.iter().map(Course::credits).sum(),
        }
    }

    /// Course names joined with `", "` as stored in the `Courses_List` column
    #[must_use]
    pub fn courses_list(&self) -> String {
        self.courses.join(", ")
    }

    /// Field values in [`TRANSCRIPT_HEADER`] order
    #[must_use]
    pub fn fields(&self) -> [String; 6] {
        [
            self.student_name.clone(),
            self.student_id.clone(),
            self.courses_list(),
            self.year.to_string(),
            self.semester.to_string(),
            self.credits.to_string(),
        ]
    }
}
