//! Integration tests for the file-backed course repository

use registrar::config::StorePaths;
use registrar::core::error::RepositoryError;
use registrar::core::models::Course;
use registrar::core::repository::{CourseStore, FileCourseRepository};
use std::fs;
use tempfile::TempDir;

fn setup() -> (TempDir, StorePaths) {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let paths = StorePaths::under(temp.path().join("Database"));
    fs::create_dir_all(&paths.courses_dir).expect("Failed to create courses dir");
    (temp, paths)
}

fn write_course(paths: &StorePaths, file: &str, content: &str) {
    fs::write(paths.courses_dir.join(file), content).expect("Failed to write course file");
}

const CALCULUS: &str = "crn: 20001
course_name: MATH 201
time: TR 10:00-11:15
credits: 4
professor: Noether

students:
900000001
";

#[test]
fn load_all_reads_every_course_in_file_name_order() {
    let (_temp, paths) = setup();
    write_course(&paths, "b_calculus.txt", CALCULUS);
    write_course(
        &paths,
        "a_intro.txt",
        "crn: 10001\ncourse_name: CPSC 101\ntime: MWF 9-10AM\ncredits: 3\nprofessor: none\n\nstudents:\n",
    );
    write_course(&paths, "notes.md", "not a course");

    let mut repo = FileCourseRepository::new(&paths);
    let courses = repo.load_all().unwrap();

    let crns: Vec<&str> = courses.iter().map(Course::crn).collect();
    assert_eq!(crns, vec!["10001", "20001"]);
    assert_eq!(courses[1].time, "TR 10:00-11:15");
    assert_eq!(courses[1].students(), ["900000001"]);
    assert!(courses[0].students().is_empty());
}

#[test]
fn malformed_and_duplicate_files_are_skipped() {
    let (_temp, paths) = setup();
    write_course(&paths, "a.txt", CALCULUS);
    write_course(
        &paths,
        "b.txt",
        "crn: 30001\ncourse_name: Broken\ntime: TBA\nprofessor: none\n",
    );
    write_course(
        &paths,
        "c.txt",
        "crn: 30002\ncourse_name: Zero\ntime: TBA\ncredits: 0\nprofessor: none\n",
    );
    write_course(&paths, "d.txt", &CALCULUS.replace("MATH 201", "MATH 201 copy"));

    let courses = FileCourseRepository::new(&paths).load_all().unwrap();
    assert_eq!(courses.len(), 1);
    assert_eq!(courses[0].name, "MATH 201");
}

#[test]
fn missing_directory_is_an_error() {
    let temp = TempDir::new().unwrap();
    let paths = StorePaths::under(temp.path().join("nowhere"));

    let err = FileCourseRepository::new(&paths).load_all().unwrap_err();
    assert!(matches!(err, RepositoryError::MissingDirectory(_)));
}

#[test]
fn save_rewrites_the_file_the_course_came_from() {
    let (_temp, paths) = setup();
    write_course(&paths, "calculus.txt", CALCULUS);

    let mut repo = FileCourseRepository::new(&paths);
    let mut course = repo.find("20001").unwrap().expect("course should exist");
    assert!(course.enroll("900000002"));
    repo.save(&course).unwrap();

    let reloaded = FileCourseRepository::load_file(&paths.courses_dir.join("calculus.txt")).unwrap();
    assert_eq!(reloaded.students(), ["900000001", "900000002"]);
    assert_eq!(reloaded.professor, "Noether");
    assert_eq!(fs::read_dir(&paths.courses_dir).unwrap().count(), 1);
}

#[test]
fn create_refuses_duplicate_crn_and_avoids_name_clash() {
    let (_temp, paths) = setup();
    write_course(&paths, "MATH 201.txt", CALCULUS);
    let mut repo = FileCourseRepository::new(&paths);

    let duplicate = Course::new("20001", "Other", "TBA", 3.0, "none").unwrap();
    let err = repo.create(&duplicate).unwrap_err();
    assert!(matches!(err, RepositoryError::DuplicateCrn(crn) if crn == "20001"));

    let same_name = Course::new("20002", "MATH 201", "MWF 1-2PM", 4.0, "Hilbert").unwrap();
    let path = repo.create(&same_name).unwrap();
    assert_eq!(path, paths.courses_dir.join("MATH 201-20002.txt"));

    let crns: Vec<String> = repo
        .load_all()
        .unwrap()
        .iter()
        .map(|c| c.crn().to_string())
        .collect();
    assert_eq!(crns, vec!["20002", "20001"]);
}

#[test]
fn created_course_reloads_with_every_field() {
    let temp = TempDir::new().unwrap();
    let paths = StorePaths::under(temp.path().join("Database"));
    let mut repo = FileCourseRepository::new(&paths);
    let mut course = Course::new("20003", "PHYS 150", "MWF 8:00-8:50", 3.5, "Meitner").unwrap();
    course.enroll(" 900000003 ");

    repo.create(&course).unwrap();

    let reloaded = FileCourseRepository::new(&paths)
        .find("20003")
        .unwrap()
        .expect("registered course should load back");
    assert_eq!(reloaded, course);
    assert_eq!(reloaded.students(), ["900000003"]);
}

#[test]
fn blank_course_fields_are_rejected_before_any_file_is_written() {
    let (_temp, paths) = setup();

    for (crn, name, time, professor) in [
        ("1", " ", "TBA", "none"),
        ("2", "Lab", "", "none"),
        ("3", "Sem", "T", ""),
    ] {
        assert!(Course::new(crn, name, time, 3.0, professor).is_err());
    }
    assert_eq!(fs::read_dir(&paths.courses_dir).unwrap().count(), 0);
}
