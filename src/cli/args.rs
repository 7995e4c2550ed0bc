//! CLI argument definitions for `registrar`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use logger::Level;
use registrar::config::ConfigOverrides;
use registrar::core::models::Semester;

/// CLI log level argument
///
/// Converts to lowercase strings for config storage and to `logger::Level`
/// for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Level::from(*self))
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `courses_dir`, `max_credits`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum CoursesSubcommand {
    /// List every readable course record.
    List,
    /// Show one course record, including enrolled students.
    Show {
        /// Course Record Number
        #[arg(value_name = "CRN")]
        crn: String,
    },
    /// Register a new course record.
    Add {
        /// Course Record Number (must be unused)
        #[arg(long)]
        crn: String,
        /// Course name
        #[arg(long)]
        name: String,
        /// Meeting time, stored as written
        #[arg(long)]
        time: String,
        /// Credit hours (positive)
        #[arg(long)]
        credits: f32,
        /// Instructor
        #[arg(long)]
        professor: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum AdminSubcommand {
    /// Append an admin row to the admin CSV.
    Add {
        /// Admin number
        #[arg(value_name = "ADMIN_NUM")]
        admin_num: String,
        /// Full name
        #[arg(value_name = "FULL_NAME")]
        full_name: String,
    },
    /// Print an admin record.
    Show {
        /// Admin number
        #[arg(value_name = "ADMIN_NUM")]
        admin_num: String,
        /// Full name
        #[arg(value_name = "FULL_NAME")]
        full_name: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Build and commit a schedule for one student.
    ///
    /// Courses are chosen largest-credit first under the credit cap, then
    /// offered for review before enrollment is saved.
    Schedule {
        /// Student identifier
        #[arg(long, value_name = "ID")]
        student_id: String,

        /// Student full name, as written on the transcript
        #[arg(long, value_name = "NAME")]
        student_name: String,

        /// Academic year
        #[arg(long)]
        year: u16,

        /// Term (spring, summer, fall, winter)
        #[arg(long)]
        semester: Semester,

        /// Credit cap for this run (defaults to config `max_credits`)
        #[arg(long, value_name = "CREDITS")]
        max_credits: Option<f32>,

        /// Accept the automatic selection without prompting
        #[arg(short, long)]
        yes: bool,
    },
    /// Inspect and register course records.
    Courses {
        #[command(subcommand)]
        subcommand: CoursesSubcommand,
    },
    /// Maintain admin records.
    Admin {
        #[command(subcommand)]
        subcommand: AdminSubcommand,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "registrar",
    about = "Registrar records and course scheduling",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override the course records directory
    #[arg(long = "courses-dir", value_name = "DIR")]
    pub courses_dir: Option<PathBuf>,

    /// Override the transcript CSV path
    #[arg(long = "transcripts-file", value_name = "PATH")]
    pub transcripts_file: Option<PathBuf>,

    /// Override the admin CSV path
    #[arg(long = "admin-file", value_name = "PATH")]
    pub admin_file: Option<PathBuf>,

    /// Override the configured credit cap
    #[arg(long = "max-credits", value_name = "CREDITS")]
    pub max_credits: Option<f32>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// # Returns
    /// A `ConfigOverrides` struct with values from CLI flags, where `None` means no override.
    ///
    /// # Examples
    /// ```ignore
    /// let args = Cli::parse();
    /// let overrides = args.to_config_overrides();
    /// config.apply_overrides(&overrides);
    /// ```
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        let path_string = |p: &PathBuf| p.to_string_lossy().to_string();
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: self.config_log_file.as_ref().map(path_string),
            verbose: self.config_verbose,
            courses_dir: self.courses_dir.as_ref().map(path_string),
            transcripts_file: self.transcripts_file.as_ref().map(path_string),
            admin_file: self.admin_file.as_ref().map(path_string),
            max_credits: self.max_credits,
        }
    }
}
