//! Admin record operations over the flat-file store

use crate::core::config::StorePaths;
use crate::core::error::{AdminError, RepositoryError};
use crate::core::models::{Admin, Course};
use crate::core::repository::{CourseStore, FileCourseRepository};
use logger::{debug, info};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

/// Entry point for admin-side record maintenance
#[derive(Debug, Clone)]
pub struct AdminRecords {
    paths: StorePaths,
}

impl AdminRecords {
    /// Create admin operations over the configured store
    #[must_use]
    pub fn new(paths: &StorePaths) -> Self {
        Self {
            paths: paths.clone(),
        }
    }

    /// Whether a course with `crn` exists in the course repository
    ///
    /// An unreadable repository counts as "does not exist".
    #[must_use]
    pub fn record_exists(&self, crn: &str) -> bool {
        let mut repo = FileCourseRepository::new(&self.paths);
        match repo.find(crn) {
            Ok(found) => found.is_some(),
            Err(err) => {
                debug!("Course lookup for {crn} failed: {err}");
                false
            }
        }
    }

    /// Append one admin row to the admin/database CSV
    ///
    /// # Errors
    /// Returns [`AdminError::Io`] if the file or its directory cannot be written
    pub fn append_admin(&self, admin: &Admin) -> Result<(), AdminError> {
        let path = &self.paths.admin_file;
        let io_err = |source: std::io::Error| AdminError::Io {
            path: path.clone(),
            source,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(io_err)?;
        writeln!(file, "{}", admin.to_csv_record()).map_err(io_err)?;

        info!("Admin {} appended to {}", admin.admin_num, path.display());
        Ok(())
    }

    /// Register a new course in the repository
    ///
    /// # Errors
    /// Returns [`RepositoryError::DuplicateCrn`] if the CRN is taken, or an
    /// I/O error if the course file cannot be written
    pub fn register_course(&self, course: &Course) -> Result<PathBuf, RepositoryError> {
        FileCourseRepository::new(&self.paths).create(course)
    }
}
