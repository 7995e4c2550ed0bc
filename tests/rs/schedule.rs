//! End-to-end scheduling against course files in a temp directory

use registrar::config::StorePaths;
use registrar::core::error::{RepositoryError, ScheduleError};
use registrar::core::models::{Course, Semester, Student};
use registrar::core::repository::{render_course_file, CourseStore, FileCourseRepository};
use registrar::core::review::AcceptAll;
use registrar::core::schedule::{ScheduleBuilder, ScheduleRequest};
use registrar::core::transcript_log::TranscriptLog;
use std::fs;
use tempfile::TempDir;

/// File store that refuses to save one CRN
struct ReadOnlyCourse {
    inner: FileCourseRepository,
    crn: &'static str,
}

impl CourseStore for ReadOnlyCourse {
    fn load_all(&mut self) -> Result<Vec<Course>, RepositoryError> {
        self.inner.load_all()
    }

    fn save(&mut self, course: &Course) -> Result<(), RepositoryError> {
        if course.crn() == self.crn {
            return Err(RepositoryError::DuplicateCrn(course.crn().to_string()));
        }
        self.inner.save(course)
    }
}

fn seed(credits: &[f32]) -> (TempDir, StorePaths) {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let paths = StorePaths::under(temp.path().join("Database"));
    fs::create_dir_all(&paths.courses_dir).unwrap();

    for (i, &c) in credits.iter().enumerate() {
        let course = Course::new(
            format!("{}", 40001 + i),
            format!("Course {}", i + 1),
            "MWF 10-11AM",
            c,
            "none",
        )
        .unwrap();
        fs::write(
            paths.courses_dir.join(format!("course{}.txt", i + 1)),
            render_course_file(&course),
        )
        .unwrap();
    }
    (temp, paths)
}

fn request(max_credits: f32) -> ScheduleRequest {
    ScheduleRequest {
        student: Student::new("900555000", "Katherine Johnson"),
        year: 2026,
        semester: Semester::Spring,
        max_credits,
    }
}

#[test]
fn five_courses_under_cap_are_all_committed() {
    let (_temp, paths) = seed(&[3.0, 4.0, 3.0, 4.0, 3.0]);

    let outcome = ScheduleBuilder::from_paths(&paths)
        .run(&request(19.0), &mut AcceptAll)
        .unwrap();

    assert!(outcome.is_complete());
    assert_eq!(outcome.report().committed().len(), 5);

    let courses = FileCourseRepository::new(&paths).load_all().unwrap();
    assert!(courses.iter().all(|c| c.is_enrolled("900555000")));

    let rows = TranscriptLog::new(&paths).read_all().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].student_id, "900555000");
    assert_eq!(rows[0].semester, Semester::Spring);
    assert!((rows[0].credits - 17.0).abs() < f32::EPSILON);
    assert_eq!(
        rows[0].courses_list(),
        "Course 2, Course 4, Course 1, Course 3, Course 5"
    );

    let csv = fs::read_to_string(&paths.transcripts_file).unwrap();
    assert!(csv.starts_with("Student_Name,Student_ID,Courses_List,Year,Semester,Credits\r\n"));
}

#[test]
fn cap_leaves_out_the_course_that_does_not_fit() {
    let (_temp, paths) = seed(&[4.0, 4.0, 4.0, 4.0, 4.0]);

    let outcome = ScheduleBuilder::from_paths(&paths)
        .run(&request(19.0), &mut AcceptAll)
        .unwrap();

    assert!((outcome.report().total_credits() - 16.0).abs() < f32::EPSILON);
    let left_out = FileCourseRepository::new(&paths)
        .find("40005")
        .unwrap()
        .unwrap();
    assert!(!left_out.is_enrolled("900555000"));
}

#[test]
fn partial_commit_records_only_saved_courses() {
    let (_temp, paths) = seed(&[3.0, 4.0, 3.0]);
    let store = ReadOnlyCourse {
        inner: FileCourseRepository::new(&paths),
        crn: "40002",
    };
    let mut builder = ScheduleBuilder::new(store, TranscriptLog::new(&paths));

    let outcome = builder.run(&request(19.0), &mut AcceptAll).unwrap();

    assert!(!outcome.is_complete());
    assert_eq!(outcome.report().failed_crns(), vec!["40002"]);

    let rows = TranscriptLog::new(&paths).read_all().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].courses, vec!["Course 1", "Course 3"]);
    assert!((rows[0].credits - 6.0).abs() < f32::EPSILON);

    let skipped = FileCourseRepository::new(&paths)
        .find("40002")
        .unwrap()
        .unwrap();
    assert!(!skipped.is_enrolled("900555000"));
}

#[test]
fn scheduling_twice_keeps_one_enrollment_and_appends_rows() {
    let (_temp, paths) = seed(&[3.0, 3.0]);

    for _ in 0..2 {
        ScheduleBuilder::from_paths(&paths)
            .run(&request(19.0), &mut AcceptAll)
            .unwrap();
    }

    let course = FileCourseRepository::new(&paths)
        .find("40001")
        .unwrap()
        .unwrap();
    assert_eq!(course.students(), ["900555000"]);
    assert_eq!(TranscriptLog::new(&paths).read_all().unwrap().len(), 2);
}

#[test]
fn empty_course_directory_fails_without_transcript() {
    let (_temp, paths) = seed(&[]);

    let err = ScheduleBuilder::from_paths(&paths)
        .run(&request(19.0), &mut AcceptAll)
        .unwrap_err();

    assert!(matches!(err, ScheduleError::NoCoursesAvailable { .. }));
    assert!(!paths.transcripts_file.exists());
}
