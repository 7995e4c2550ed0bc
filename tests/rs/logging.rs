//! Logging as configured and emitted by the registrar library

use logger::Level;
use registrar::config::Config;

#[test]
fn default_config_level_is_a_known_level() {
    let config = Config::from_defaults();
    assert!(config.logging.level.parse::<Level>().is_ok());
}

#[cfg(feature = "file-logging")]
#[test]
fn skipped_course_file_warning_reaches_log_file() {
    use logger::{close_file_logging, init_file_logging};
    use registrar::config::StorePaths;
    use registrar::core::repository::{CourseStore, FileCourseRepository};
    use std::fs;

    let temp = tempfile::TempDir::new().expect("Failed to create temp dir");
    let paths = StorePaths::under(temp.path().join("Database"));
    fs::create_dir_all(&paths.courses_dir).unwrap();
    fs::write(
        paths.courses_dir.join("broken.txt"),
        "crn: 10001\ncourse_name: CPSC 101\n",
    )
    .unwrap();
    let log_path = temp.path().join("logs").join("registrar.log");

    assert!(init_file_logging(&log_path));
    let courses = FileCourseRepository::new(&paths).load_all();
    close_file_logging();

    assert!(courses.unwrap().is_empty());
    let contents = fs::read_to_string(&log_path).expect("Failed to read log file");
    assert!(contents.contains("[WARN] Skipping course file"));
    assert!(contents.contains("broken.txt"));
}
