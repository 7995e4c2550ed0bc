//! Integration tests for admin record operations

use registrar::config::StorePaths;
use registrar::core::admin::AdminRecords;
use registrar::core::csv::parse_records;
use registrar::core::error::RepositoryError;
use registrar::core::models::{Admin, Course};
use std::fs;
use tempfile::TempDir;

fn setup() -> (TempDir, StorePaths, AdminRecords) {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let paths = StorePaths::under(temp.path().join("Database"));
    let records = AdminRecords::new(&paths);
    (temp, paths, records)
}

#[test]
fn appended_admins_read_back_as_csv_rows() {
    let (_temp, paths, records) = setup();

    records.append_admin(&Admin::new("1001", "Grace Hopper")).unwrap();
    records
        .append_admin(&Admin::new("1002", "O'Neil, \"Cathy\""))
        .unwrap();

    let content = fs::read_to_string(&paths.admin_file).unwrap();
    assert_eq!(
        parse_records(&content),
        vec![
            vec!["ADMIN", "1001", "Grace Hopper"],
            vec!["ADMIN", "1002", "O'Neil, \"Cathy\""],
        ]
    );
}

#[test]
fn admin_display_matches_record_layout() {
    let admin = Admin::new("1001", "Grace Hopper");
    assert_eq!(admin.to_string(), "Admin ID: 1001\nName: Grace Hopper");
}

#[test]
fn registered_course_is_found_by_crn() {
    let (_temp, _paths, records) = setup();
    let course = Course::new("70001", "HIST 110", "TR 2-3:15PM", 3.0, "Tuchman").unwrap();

    assert!(!records.record_exists("70001"));
    records.register_course(&course).unwrap();
    assert!(records.record_exists("70001"));
    assert!(!records.record_exists("70002"));

    let err = records.register_course(&course).unwrap_err();
    assert!(matches!(err, RepositoryError::DuplicateCrn(_)));
}
