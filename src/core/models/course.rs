//! Course model

use crate::core::error::CourseError;
use std::fmt;

/// A single course offering and its enrollment list
#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    /// Course Record Number; fixed at creation
    crn: String,

    /// Course name (e.g., "CPSC 101"); not guaranteed unique
    pub name: String,

    /// Meeting pattern (e.g., "MWF 10-11AM"); kept verbatim
    pub time: String,

    /// Credit hours (positive, can be fractional)
    credits: f32,

    /// Instructor of record
    pub professor: String,

    /// Enrolled student identifiers, in enrollment order, without duplicates
    students: Vec<String>,
}

impl Course {
    /// Create a course with an empty enrollment list
    ///
    /// # Arguments
    /// * `crn` - Course Record Number
    /// * `name` - Course name
    /// * `time` - Meeting pattern
    /// * `credits` - Credit hours (must be positive)
    /// * `professor` - Instructor of record
    ///
    /// # Errors
    /// Returns [`CourseError::MissingField`] for a blank CRN, name, time or
    /// professor and [`CourseError::NonPositiveCredits`] unless `credits > 0`.
    pub fn new(
        crn: impl Into<String>,
        name: impl Into<String>,
        time: impl Into<String>,
        credits: f32,
        professor: impl Into<String>,
    ) -> Result<Self, CourseError> {
        let crn = required(crn.into(), "crn")?;
        let name = required(name.into(), "course_name")?;
        let time = required(time.into(), "time")?;
        let professor = required(professor.into(), "professor")?;
        // Rejects NaN as well
        if !(credits > 0.0 && credits.is_finite()) {
            return Err(CourseError::NonPositiveCredits(credits));
        }

        Ok(Self {
            crn,
            name,
            time,
            credits,
            professor,
            students: Vec::new(),
        })
    }

    /// Course Record Number
    #[must_use]
    pub fn crn(&self) -> &str {
        &self.crn
    }

    /// Credit hours
    #[must_use]
    pub const fn credits(&self) -> f32 {
        self.credits
    }

    /// Enrolled student identifiers in enrollment order
    #[must_use]
    pub fn students(&self) -> &[String] {
        &self.students
    }

    /// Whether `student_id` is enrolled (surrounding whitespace ignored)
    #[must_use]
    pub fn is_enrolled(&self, student_id: &str) -> bool {
        let student_id = student_id.trim();
        self.students.iter().any(|s| s == student_id)
    }

    /// Enroll a student, stored trimmed
    ///
    /// Returns `false` if the student is already enrolled or the id is blank.
    pub fn enroll(&mut self, student_id: impl Into<String>) -> bool {
        let student_id = student_id.into();
        let student_id = student_id.trim();
        if student_id.is_empty() || self.is_enrolled(student_id) {
            return false;
        }
        self.students.push(student_id.to_string());
        true
    }

    /// Remove a student; returns `false` if they were not enrolled
    pub fn unenroll(&mut self, student_id: &str) -> bool {
        let student_id = student_id.trim();
        let before = self.students.len();
        self.students.retain(|s| s != student_id);
        self.students.len() != before
    }
}

/// Blank values count as missing, as in `parse_course_file`
fn required(value: String, field: &'static str) -> Result<String, CourseError> {
    if value.trim().is_empty() {
        Err(CourseError::MissingField(field))
    } else {
        Ok(value)
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<8} {:<24} {:<16} {} cr",
            self.crn, self.name, self.time, self.credits
        )
    }
}
