//! Schedule builder: load, select, review, commit
//!
//! A scheduling attempt moves through [`ScheduleState`]:
//!
//! ```text
//! Loading -> Selecting -> Reviewing -> Committing -> Done
//!    \______________\____________\___________\____> Failed
//! ```
//!
//! Committing attempts every course even when some saves fail. The
//! transcript row then records only the courses whose enrollment was
//! actually persisted, and no row is written if none were.

use crate::core::config::StorePaths;
use crate::core::error::{SaveFailure, ScheduleError};
use crate::core::models::{Course, Semester, Student, TranscriptRow};
use crate::core::repository::{CourseStore, FileCourseRepository};
use crate::core::review::Reviewer;
use crate::core::selector::Selection;
use crate::core::transcript_log::TranscriptLog;
use logger::{debug, error, info};

/// Who is being scheduled, for which term, under which cap
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleRequest {
    /// Student to enroll
    pub student: Student,
    /// Academic year recorded on the transcript
    pub year: u16,
    /// Term recorded on the transcript
    pub semester: Semester,
    /// Maximum total credit hours
    pub max_credits: f32,
}

/// Courses that were committed during one scheduling attempt
#[derive(Debug, Clone, PartialEq)]
pub struct CommitReport {
    committed: Vec<Course>,
    failures: Vec<SaveFailure>,
    transcript: TranscriptRow,
}

impl CommitReport {
    /// Courses whose enrollment update was persisted, in schedule order
    #[must_use]
    pub fn committed(&self) -> &[Course] {
        &self.committed
    }

    /// Courses whose save failed, in schedule order
    #[must_use]
    pub fn failures(&self) -> &[SaveFailure] {
        &self.failures
    }

    /// CRNs of the failed courses
    #[must_use]
    pub fn failed_crns(&self) -> Vec<&str> {
        self.failures.iter().map(|f| f.crn.as_str()).collect()
    }

    /// Credit hours actually committed
    #[must_use]
    pub fn total_credits(&self) -> f32 {
        self.transcript.credits
    }

    /// The transcript row that was appended
    #[must_use]
    pub const fn transcript(&self) -> &TranscriptRow {
        &self.transcript
    }
}

/// Successful end of a scheduling attempt
#[derive(Debug, Clone, PartialEq)]
pub enum ScheduleOutcome {
    /// Every selected course was committed
    Complete(CommitReport),
    /// Some courses were committed and some failed to save
    Partial(CommitReport),
}

impl ScheduleOutcome {
    /// The commit report, whichever way the attempt ended
    #[must_use]
    pub const fn report(&self) -> &CommitReport {
        match self {
            Self::Complete(report) | Self::Partial(report) => report,
        }
    }

    /// Whether every selected course was committed
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        matches!(self, Self::Complete(_))
    }
}

/// Stage of a scheduling attempt
#[derive(Debug)]
pub enum ScheduleState {
    /// Reading courses from the store
    Loading,
    /// Running the automatic selection
    Selecting {
        /// Every loaded course
        available: Vec<Course>,
    },
    /// Waiting for the reviewer
    Reviewing {
        /// Every loaded course
        available: Vec<Course>,
        /// Proposed selection
        selection: Selection,
    },
    /// Enrolling the student and persisting
    Committing {
        /// Final selection
        selection: Selection,
    },
    /// Finished successfully
    Done(ScheduleOutcome),
    /// Finished with an error
    Failed(ScheduleError),
}

impl ScheduleState {
    /// Short stage name for logs
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Selecting { .. } => "selecting",
            Self::Reviewing { .. } => "reviewing",
            Self::Committing { .. } => "committing",
            Self::Done(_) => "done",
            Self::Failed(_) => "failed",
        }
    }
}

/// Drives one student's schedule from loading to a persisted commit
#[derive(Debug)]
pub struct ScheduleBuilder<S> {
    store: S,
    transcripts: TranscriptLog,
}

impl ScheduleBuilder<FileCourseRepository> {
    /// Builder over the file repository and transcript log in `paths`
    #[must_use]
    pub fn from_paths(paths: &StorePaths) -> Self {
        Self::new(FileCourseRepository::new(paths), TranscriptLog::new(paths))
    }
}

impl<S: CourseStore> ScheduleBuilder<S> {
    /// Create a builder over a course store and transcript log
    pub const fn new(store: S, transcripts: TranscriptLog) -> Self {
        Self { store, transcripts }
    }

    /// The underlying course store
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Run a full scheduling attempt
    ///
    /// # Errors
    /// Returns the [`ScheduleError`] of the `Failed` state; see its variants
    pub fn run(
        &mut self,
        request: &ScheduleRequest,
        reviewer: &mut dyn Reviewer,
    ) -> Result<ScheduleOutcome, ScheduleError> {
        let mut state = ScheduleState::Loading;
        loop {
            debug!("Schedule for {}: {}", request.student.id, state.name());
            state = match state {
                ScheduleState::Loading => self.load(),
                ScheduleState::Selecting { available } => select(available, request.max_credits),
                ScheduleState::Reviewing {
                    available,
                    selection,
                } => review(reviewer, &available, selection, request.max_credits),
                ScheduleState::Committing { selection } => self.commit(selection, request),
                ScheduleState::Done(outcome) => return Ok(outcome),
                ScheduleState::Failed(err) => return Err(err),
            };
        }
    }

    fn load(&mut self) -> ScheduleState {
        match self.store.load_all() {
            Ok(available) if !available.is_empty() => ScheduleState::Selecting { available },
            Ok(_) => ScheduleState::Failed(ScheduleError::NoCoursesAvailable {
                reason: "no readable course records".to_string(),
            }),
            Err(err) => ScheduleState::Failed(ScheduleError::NoCoursesAvailable {
                reason: err.to_string(),
            }),
        }
    }

    fn commit(&mut self, selection: Selection, request: &ScheduleRequest) -> ScheduleState {
        let student_id = &request.student.id;
        let mut committed = Vec::new();
        let mut failures = Vec::new();

        for mut course in selection.into_courses() {
            if !course.enroll(student_id.as_str()) {
                debug!("{student_id} already enrolled in {}", course.crn());
            }
            match self.store.save(&course) {
                Ok(()) => committed.push(course),
                Err(err) => {
                    error!("Failed to save enrollment for {}: {err}", course.crn());
                    failures.push(SaveFailure {
                        crn: course.crn().to_string(),
                        message: err.to_string(),
                    });
                }
            }
        }

        if committed.is_empty() {
            return ScheduleState::Failed(ScheduleError::CommitFailed { failures });
        }

        let transcript = TranscriptRow::for_courses(
            &request.student,
            &committed,
            request.year,
            request.semester,
        );
        if let Err(source) = self.transcripts.append(&transcript) {
            error!(
                "Failed to write transcript to {}: {source}",
                self.transcripts.path().display()
            );
            return ScheduleState::Failed(ScheduleError::Transcript {
                path: self.transcripts.path().to_path_buf(),
                committed: committed.iter().map(|c| c.crn().to_string()).collect(),
                failures,
                source,
            });
        }

        let report = CommitReport {
            committed,
            failures,
            transcript,
        };
        if report.failures.is_empty() {
            ScheduleState::Done(ScheduleOutcome::Complete(report))
        } else {
            ScheduleState::Done(ScheduleOutcome::Partial(report))
        }
    }
}

fn select(available: Vec<Course>, max_credits: f32) -> ScheduleState {
    let selection = Selection::auto(&available, max_credits);
    info!(
        "Selected {} of {} course(s) for {} credits (cap {max_credits})",
        selection.len(),
        available.len(),
        selection.total_credits()
    );
    ScheduleState::Reviewing {
        available,
        selection,
    }
}

fn review(
    reviewer: &mut dyn Reviewer,
    available: &[Course],
    selection: Selection,
    max_credits: f32,
) -> ScheduleState {
    match reviewer.review(selection, available, max_credits) {
        Ok(selection) if selection.is_empty() => {
            ScheduleState::Failed(ScheduleError::EmptySelection { max_credits })
        }
        Ok(selection) => ScheduleState::Committing { selection },
        Err(err) => ScheduleState::Failed(ScheduleError::Review(err)),
    }
}
