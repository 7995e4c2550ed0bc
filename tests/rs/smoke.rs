//! Integration smoke tests for `registrar`

use registrar::config::Config;
use registrar::get_version;

#[test]
fn version_is_not_empty() {
    let v = get_version();
    assert!(!v.trim().is_empty());
}

#[test]
fn default_store_paths_are_relative_database_files() {
    let paths = Config::from_defaults().store_paths();
    assert!(paths.courses_dir.ends_with("courses"));
    assert!(paths.transcripts_file.ends_with("Transcripts.csv"));
    assert!(paths.admin_file.ends_with("Database.csv"));
}
