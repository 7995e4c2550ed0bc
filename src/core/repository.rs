//! Course repository backed by a directory of per-course text files
//!
//! Each course file holds `key: value` lines followed by a `students:`
//! section with one enrolled student identifier per line:
//!
//! ```text
//! crn: 12345
//! course_name: CPSC 101
//! time: MWF 10-11AM
//! credits: 3
//! professor: none
//!
//! students:
//! 900123456
//! ```

use crate::core::config::StorePaths;
use crate::core::error::{CourseError, RepositoryError};
use crate::core::models::Course;
use logger::{debug, info, warn};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Extension of course files inside the courses directory
const COURSE_FILE_EXTENSION: &str = "txt";

/// Key that opens the enrolled-students section
const STUDENTS_KEY: &str = "students";

/// The `key: value` fields every course file must carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CourseField {
    /// `crn` - course identifier
    Crn,
    /// `course_name` - display name
    CourseName,
    /// `time` - meeting pattern
    Time,
    /// `credits` - positive number of credit hours
    Credits,
    /// `professor` - instructor of record
    Professor,
}

impl CourseField {
    /// Required fields in the order they are written
    pub const REQUIRED: [Self; 5] = [
        Self::Crn,
        Self::CourseName,
        Self::Time,
        Self::Credits,
        Self::Professor,
    ];

    /// Key as it appears in the file
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Crn => "crn",
            Self::CourseName => "course_name",
            Self::Time => "time",
            Self::Credits => "credits",
            Self::Professor => "professor",
        }
    }

    fn from_key(key: &str) -> Option<Self> {
        Self::REQUIRED
            .into_iter()
            .find(|field| field.key().eq_ignore_ascii_case(key))
    }
}

/// Parse the contents of one course file
///
/// Blank lines are ignored anywhere, values are split on the first `:` only,
/// and repeated student identifiers are collapsed.
///
/// # Errors
/// Returns a [`CourseError`] if a required field is missing or empty, or the
/// credits value is not a positive number.
pub fn parse_course_file(content: &str) -> Result<Course, CourseError> {
    let mut fields: HashMap<CourseField, &str> = HashMap::new();
    let mut students: Vec<&str> = Vec::new();
    let mut in_students = false;

    for line in content.lines().map(str::trim) {
        if line.is_empty() {
            continue;
        }
        if in_students {
            students.push(line);
            continue;
        }

        let Some((key, value)) = line.split_once(':') else {
            debug!("Ignoring course file line without a key: '{line}'");
            continue;
        };
        let (key, value) = (key.trim(), value.trim());

        if key.eq_ignore_ascii_case(STUDENTS_KEY) {
            in_students = true;
            if !value.is_empty() {
                students.push(value);
            }
        } else if let Some(field) = CourseField::from_key(key) {
            fields.insert(field, value);
        } else {
            debug!("Ignoring unknown course file key '{key}'");
        }
    }

    let require = |field: CourseField| {
        fields
            .get(&field)
            .copied()
            .filter(|v| !v.is_empty())
            .ok_or(CourseError::MissingField(field.key()))
    };

    let credits_raw = require(CourseField::Credits)?;
    let credits = credits_raw
        .parse::<f32>()
        .map_err(|_| CourseError::InvalidCredits(credits_raw.to_string()))?;

    let mut course = Course::new(
        require(CourseField::Crn)?,
        require(CourseField::CourseName)?,
        require(CourseField::Time)?,
        credits,
        require(CourseField::Professor)?,
    )?;

    for student in students {
        if !course.enroll(student) {
            debug!(
                "Collapsed duplicate student '{student}' in course {}",
                course.crn()
            );
        }
    }

    Ok(course)
}

/// Render a course in the course file format
#[must_use]
pub fn render_course_file(course: &Course) -> String {
    let mut out = String::new();
    for field in CourseField::REQUIRED {
        let value = match field {
            CourseField::Crn => course.crn().to_string(),
            CourseField::CourseName => course.name.clone(),
            CourseField::Time => course.time.clone(),
            CourseField::Credits => course.credits().to_string(),
            CourseField::Professor => course.professor.clone(),
        };
        out.push_str(&format!("{}: {value}\n", field.key()));
    }
    out.push_str(&format!("\n{STUDENTS_KEY}:\n"));
    for student in course.students() {
        out.push_str(student);
        out.push('\n');
    }
    out
}

/// Storage seam used by the schedule builder
pub trait CourseStore {
    /// Load every available course
    ///
    /// # Errors
    /// Returns an error if the store as a whole cannot be read
    fn load_all(&mut self) -> Result<Vec<Course>, RepositoryError>;

    /// Persist one course, replacing its previous enrollment list
    ///
    /// # Errors
    /// Returns an error if the course cannot be written
    fn save(&mut self, course: &Course) -> Result<(), RepositoryError>;

    /// Resolve a course by CRN
    ///
    /// # Errors
    /// Returns an error if the store cannot be read
    fn find(&mut self, crn: &str) -> Result<Option<Course>, RepositoryError> {
        Ok(self.load_all()?.into_iter().find(|c| c.crn() == crn))
    }
}

/// Course store reading and writing `<courses_dir>/*.txt`
#[derive(Debug, Clone)]
pub struct FileCourseRepository {
    courses_dir: PathBuf,
    /// File each loaded CRN came from, so saves rewrite the same file
    files: HashMap<String, PathBuf>,
}

impl FileCourseRepository {
    /// Create a repository over the configured courses directory
    #[must_use]
    pub fn new(paths: &StorePaths) -> Self {
        Self {
            courses_dir: paths.courses_dir.clone(),
            files: HashMap::new(),
        }
    }

    /// Directory this repository reads from
    #[must_use]
    pub fn courses_dir(&self) -> &Path {
        &self.courses_dir
    }

    /// Parse a single course file
    ///
    /// # Errors
    /// Returns [`RepositoryError::Io`] if the file cannot be read and
    /// [`RepositoryError::Malformed`] if it cannot be parsed
    pub fn load_file(path: &Path) -> Result<Course, RepositoryError> {
        let content = fs::read_to_string(path).map_err(|e| RepositoryError::io(path, e))?;
        parse_course_file(&content).map_err(|source| RepositoryError::Malformed {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Write a new course file, refusing a CRN that is already on disk
    ///
    /// # Errors
    /// Returns [`RepositoryError::DuplicateCrn`] if the CRN exists, or an I/O
    /// error if the directory or file cannot be written
    pub fn create(&mut self, course: &Course) -> Result<PathBuf, RepositoryError> {
        fs::create_dir_all(&self.courses_dir)
            .map_err(|e| RepositoryError::io(&self.courses_dir, e))?;
        self.load_all()?;

        if self.files.contains_key(course.crn()) {
            return Err(RepositoryError::DuplicateCrn(course.crn().to_string()));
        }

        let path = self.new_file_path(course);
        let rendered = render_course_file(course);
        // Public fields may have been blanked after construction
        parse_course_file(&rendered).map_err(|source| RepositoryError::Malformed {
            path: path.clone(),
            source,
        })?;
        write_replacing(&path, &rendered)?;
        self.files.insert(course.crn().to_string(), path.clone());
        info!("Registered course {} at {}", course.crn(), path.display());
        Ok(path)
    }

    /// Pick `<name>.txt`, or `<name>-<crn>.txt` when the name is taken
    fn new_file_path(&self, course: &Course) -> PathBuf {
        let stem: String = course
            .name
            .chars()
            .map(|c| if matches!(c, '/' | '\\') { '-' } else { c })
            .collect();
        let by_name = self
            .courses_dir
            .join(format!("{stem}.{COURSE_FILE_EXTENSION}"));
        if by_name.exists() || self.files.values().any(|p| p == &by_name) {
            self.courses_dir
                .join(format!("{stem}-{}.{COURSE_FILE_EXTENSION}", course.crn()))
        } else {
            by_name
        }
    }

    fn course_files(&self) -> Result<Vec<PathBuf>, RepositoryError> {
        let entries =
            fs::read_dir(&self.courses_dir).map_err(|e| RepositoryError::io(&self.courses_dir, e))?;

        let mut paths: Vec<PathBuf> = entries
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file()
                    && path
                        .extension()
                        .is_some_and(|ext| ext.eq_ignore_ascii_case(COURSE_FILE_EXTENSION))
            })
            .collect();
        paths.sort();
        Ok(paths)
    }
}

impl CourseStore for FileCourseRepository {
    fn load_all(&mut self) -> Result<Vec<Course>, RepositoryError> {
        if !self.courses_dir.is_dir() {
            return Err(RepositoryError::MissingDirectory(self.courses_dir.clone()));
        }

        self.files.clear();
        let mut courses = Vec::new();

        for path in self.course_files()? {
            let course = match Self::load_file(&path) {
                Ok(course) => course,
                Err(err) => {
                    warn!("Skipping course file: {err}");
                    continue;
                }
            };

            if let Some(first) = self.files.get(course.crn()) {
                warn!(
                    "Skipping {}: CRN {} already loaded from {}",
                    path.display(),
                    course.crn(),
                    first.display()
                );
                continue;
            }

            self.files.insert(course.crn().to_string(), path);
            courses.push(course);
        }

        debug!(
            "Loaded {} course(s) from {}",
            courses.len(),
            self.courses_dir.display()
        );
        Ok(courses)
    }

    fn save(&mut self, course: &Course) -> Result<(), RepositoryError> {
        let path = match self.files.get(course.crn()) {
            Some(path) => path.clone(),
            None => {
                let path = self.new_file_path(course);
                self.files.insert(course.crn().to_string(), path.clone());
                path
            }
        };

        write_replacing(&path, &render_course_file(course))?;
        debug!("Saved course {} to {}", course.crn(), path.display());
        Ok(())
    }
}

/// Write through a sibling temp file then rename over the target
fn write_replacing(path: &Path, content: &str) -> Result<(), RepositoryError> {
    let mut tmp_name = path.as_os_str().to_os_string();
    tmp_name.push(".tmp");
    let tmp = PathBuf::from(tmp_name);

    if let Err(e) = fs::write(&tmp, content).and_then(|()| fs::rename(&tmp, path)) {
        let _ = fs::remove_file(&tmp);
        return Err(RepositoryError::io(path, e));
    }
    Ok(())
}
