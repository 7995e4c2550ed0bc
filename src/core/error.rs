//! Error types for record storage and schedule building

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// A course record that cannot be built or parsed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CourseError {
    /// A required `key: value` line is absent or empty
    #[error("missing required field '{0}'")]
    MissingField(&'static str),
    /// The credits value is not a number
    #[error("invalid credits value '{0}'")]
    InvalidCredits(String),
    /// The credits value is zero, negative, or not finite
    #[error("credits must be positive, got {0}")]
    NonPositiveCredits(f32),
}

/// Failures of the course repository.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The configured courses directory does not exist
    #[error("course directory {} does not exist", .0.display())]
    MissingDirectory(PathBuf),

    /// Reading or writing a course file failed
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// File or directory being accessed
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// A course file could not be parsed
    #[error("malformed course record {}: {source}", path.display())]
    Malformed {
        /// Offending file
        path: PathBuf,
        /// Parse failure
        source: CourseError,
    },

    /// A new course reuses an existing CRN
    #[error("a course with CRN {0} already exists")]
    DuplicateCrn(String),
}

impl RepositoryError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// One course whose enrollment update could not be persisted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("CRN {crn}: {message}")]
pub struct SaveFailure {
    /// Identifier of the course that failed to save
    pub crn: String,
    /// Human-readable cause
    pub message: String,
}

/// Terminal failure of a scheduling attempt.
#[derive(Debug, Error)]
pub enum ScheduleError {
    /// Loading produced no courses (missing directory, I/O error, or empty)
    #[error("no courses available: {reason}")]
    NoCoursesAvailable {
        /// Why nothing could be loaded
        reason: String,
    },

    /// The final selection is empty, so there is nothing to commit
    #[error("no courses selected within the {max_credits} credit cap")]
    EmptySelection {
        /// Cap the selection was built against
        max_credits: f32,
    },

    /// Every course save failed; nothing was committed
    #[error("failed to save every selected course: {}", join_crns(.failures))]
    CommitFailed {
        /// All per-course failures, in commit order
        failures: Vec<SaveFailure>,
    },

    /// Enrollment was saved but the transcript row could not be appended
    #[error(
        "enrollment saved for {} but transcript {} could not be written: {source}",
        committed.join(", "),
        path.display()
    )]
    Transcript {
        /// Transcript CSV path
        path: PathBuf,
        /// CRNs whose enrollment was persisted before the append failed
        committed: Vec<String>,
        /// Courses whose save failed, in commit order
        failures: Vec<SaveFailure>,
        /// Underlying I/O error
        source: io::Error,
    },

    /// Reading or writing the interactive review prompt failed
    #[error("schedule review failed: {0}")]
    Review(#[source] io::Error),
}

/// Failures of admin record operations.
#[derive(Debug, Error)]
pub enum AdminError {
    /// Appending to the admin CSV failed
    #[error("failed to append admin record to {}: {source}", path.display())]
    Io {
        /// Admin CSV path
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },
}

fn join_crns(failures: &[SaveFailure]) -> String {
    failures
        .iter()
        .map(|f| f.crn.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
