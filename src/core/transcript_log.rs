//! Append-only transcript CSV

use crate::core::config::StorePaths;
use crate::core::csv::{join_record, parse_records};
use crate::core::models::transcript::TRANSCRIPT_HEADER;
use crate::core::models::TranscriptRow;
use logger::{info, warn};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Transcript CSV with a header row followed by one row per committed schedule
#[derive(Debug, Clone)]
pub struct TranscriptLog {
    path: PathBuf,
}

impl TranscriptLog {
    /// Transcript log at the configured location
    #[must_use]
    pub fn new(paths: &StorePaths) -> Self {
        Self::at(&paths.transcripts_file)
    }

    /// Transcript log at an explicit path
    #[must_use]
    pub fn at(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Location of the CSV file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one row, writing the header first if the file is new or empty
    ///
    /// # Errors
    /// Returns an error if the parent directory or file cannot be written
    pub fn append(&self, row: &TranscriptRow) -> io::Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let needs_header = fs::metadata(&self.path).map_or(true, |m| m.len() == 0);
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        let mut out = String::new();
        if needs_header {
            out.push_str(&join_record(&TRANSCRIPT_HEADER));
            out.push_str("\r\n");
        }
        out.push_str(&join_record(&row.fields()));
        out.push_str("\r\n");
        file.write_all(out.as_bytes())?;

        info!(
            "Transcript row for {} ({} credits) saved to {}",
            row.student_id,
            row.credits,
            self.path.display()
        );
        Ok(())
    }

    /// Read every row back, skipping the header and rows that do not parse
    ///
    /// A missing file yields no rows.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read
    pub fn read_all(&self) -> io::Result<Vec<TranscriptRow>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e),
        };

        let mut records = parse_records(&content).into_iter().peekable();
        if records.peek().is_some_and(|first| first.as_slice() == TRANSCRIPT_HEADER) {
            records.next();
        }

        let rows = records
            .filter_map(|record| {
                let row = row_from_record(&record);
                if row.is_none() {
                    warn!("Skipping unreadable transcript row: {}", record.join(","));
                }
                row
            })
            .collect();
        Ok(rows)
    }
}

fn row_from_record(record: &[String]) -> Option<TranscriptRow> {
    let [name, id, courses, year, semester, credits] = record else {
        return None;
    };
    let courses = if courses.is_empty() {
        Vec::new()
    } else {
        courses.split(", ").map(str::to_string).collect()
    };

    Some(TranscriptRow {
        student_name: name.clone(),
        student_id: id.clone(),
        courses,
        year: year.parse().ok()?,
        semester: semester.parse().ok()?,
        credits: credits.parse().ok()?,
    })
}
