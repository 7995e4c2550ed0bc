//! Configuration module for `registrar`

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

/// Default CLI configuration loaded based on build profile.
/// Uses release defaults in release mode, debug defaults in debug mode.
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../../assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../../assets/DefaultCLIConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

/// Placeholder expanded to the registrar config directory
const DIR_VARIABLE: &str = "$REGISTRAR";

/// Credit cap used when neither config nor CLI provide one
pub const DEFAULT_MAX_CREDITS: f32 = 19.0;

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug)
    #[serde(default)]
    pub level: String,
    /// Log file path
    #[serde(default)]
    pub file: String,
    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,
}

/// Paths configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory holding one `<name>.txt` file per course
    #[serde(default)]
    pub courses_dir: String,
    /// Transcript CSV file
    #[serde(default)]
    pub transcripts_file: String,
    /// Admin/database CSV file
    #[serde(default)]
    pub admin_file: String,
}

/// Scheduling configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulingConfig {
    /// Maximum credit hours per schedule
    #[serde(default = "default_max_credits")]
    pub max_credits: f32,
}

impl Default for SchedulingConfig {
    fn default() -> Self {
        Self {
            max_credits: DEFAULT_MAX_CREDITS,
        }
    }
}

const fn default_max_credits() -> f32 {
    DEFAULT_MAX_CREDITS
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    pub logging: LoggingConfig,
    /// Path settings
    #[serde(default)]
    pub paths: PathsConfig,
    /// Scheduling settings
    #[serde(default)]
    pub scheduling: SchedulingConfig,
}

/// Optional CLI overrides for configuration values
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Override logging level
    pub level: Option<String>,
    /// Override log file path
    pub file: Option<String>,
    /// Override verbose flag
    pub verbose: Option<bool>,
    /// Override courses directory
    pub courses_dir: Option<String>,
    /// Override transcript CSV path
    pub transcripts_file: Option<String>,
    /// Override admin CSV path
    pub admin_file: Option<String>,
    /// Override credit cap
    pub max_credits: Option<f32>,
}

/// Resolved storage locations handed to the repository, admin records, and
/// transcript log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorePaths {
    /// Directory of course files
    pub courses_dir: PathBuf,
    /// Transcript CSV file
    pub transcripts_file: PathBuf,
    /// Admin/database CSV file
    pub admin_file: PathBuf,
}

impl StorePaths {
    /// Lay out the conventional `courses/`, `Transcripts.csv`, `Database.csv`
    /// under a single database directory
    #[must_use]
    pub fn under(database_dir: impl Into<PathBuf>) -> Self {
        let root = database_dir.into();
        Self {
            courses_dir: root.join("courses"),
            transcripts_file: root.join("Transcripts.csv"),
            admin_file: root.join("Database.csv"),
        }
    }
}

impl Config {
    /// Get the `$REGISTRAR` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/registrar`
    /// - macOS: `~/Library/Application Support/registrar`
    /// - Windows: `%APPDATA%\registrar`
    #[must_use]
    pub fn get_registrar_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("registrar")
    }

    /// Merge missing fields from defaults into this config
    ///
    /// Only fields that are empty here and non-empty in `defaults` are
    /// updated, so upgrades pick up new keys without clobbering user values.
    ///
    /// # Returns
    ///
    /// `true` if any fields were added/changed, `false` otherwise
    #[allow(clippy::useless_let_if_seq)]
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let mut changed = false;

        if self.logging.level.is_empty() && !defaults.logging.level.is_empty() {
            self.logging.level.clone_from(&defaults.logging.level);
            changed = true;
        }
        if self.logging.file.is_empty() && !defaults.logging.file.is_empty() {
            self.logging.file.clone_from(&defaults.logging.file);
            changed = true;
        }

        if self.paths.courses_dir.is_empty() && !defaults.paths.courses_dir.is_empty() {
            self.paths
                .courses_dir
                .clone_from(&defaults.paths.courses_dir);
            changed = true;
        }
        if self.paths.transcripts_file.is_empty() && !defaults.paths.transcripts_file.is_empty() {
            self.paths
                .transcripts_file
                .clone_from(&defaults.paths.transcripts_file);
            changed = true;
        }
        if self.paths.admin_file.is_empty() && !defaults.paths.admin_file.is_empty() {
            self.paths.admin_file.clone_from(&defaults.paths.admin_file);
            changed = true;
        }

        changed
    }

    /// Apply CLI-provided overrides onto the loaded configuration
    ///
    /// Only non-`None` values replace config values; the config file is not
    /// modified.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(level) = &overrides.level {
            self.logging.level.clone_from(level);
        }
        if let Some(file) = &overrides.file {
            self.logging.file.clone_from(file);
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }

        if let Some(courses_dir) = &overrides.courses_dir {
            self.paths.courses_dir.clone_from(courses_dir);
        }
        if let Some(transcripts_file) = &overrides.transcripts_file {
            self.paths.transcripts_file.clone_from(transcripts_file);
        }
        if let Some(admin_file) = &overrides.admin_file {
            self.paths.admin_file.clone_from(admin_file);
        }

        if let Some(max_credits) = overrides.max_credits {
            self.scheduling.max_credits = max_credits;
        }
    }

    /// Storage locations described by this config
    #[must_use]
    pub fn store_paths(&self) -> StorePaths {
        StorePaths {
            courses_dir: PathBuf::from(&self.paths.courses_dir),
            transcripts_file: PathBuf::from(&self.paths.transcripts_file),
            admin_file: PathBuf::from(&self.paths.admin_file),
        }
    }

    /// Get the user config file path
    ///
    /// - `config.toml` for release builds
    /// - `dconfig.toml` for debug builds (allows separate debug config)
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_registrar_dir().join(CONFIG_FILE_NAME)
    }

    /// Expand `$REGISTRAR` in a string to the registrar config directory
    #[must_use]
    fn expand_variables(value: &str) -> String {
        if value.contains(DIR_VARIABLE) {
            let registrar_dir = Self::get_registrar_dir();
            value.replace(DIR_VARIABLE, registrar_dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string
    ///
    /// Missing fields use their serde defaults and `$REGISTRAR` is expanded
    /// in every path value.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML cannot be parsed or doesn't match the expected schema
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        config.logging.file = Self::expand_variables(&config.logging.file);
        config.paths.courses_dir = Self::expand_variables(&config.paths.courses_dir);
        config.paths.transcripts_file = Self::expand_variables(&config.paths.transcripts_file);
        config.paths.admin_file = Self::expand_variables(&config.paths.admin_file);

        Ok(config)
    }

    /// Load configuration from embedded defaults
    ///
    /// # Panics
    /// Panics if the embedded default configuration is invalid TOML.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load configuration from file, or create from defaults if not found
    ///
    /// - If the config file exists: loads it, merges missing fields from
    ///   defaults and saves the merged result.
    /// - On first run: creates the config directory and writes the defaults.
    ///
    /// Falls back to defaults if the file cannot be read or parsed.
    #[must_use]
    pub fn load() -> Self {
        let config_file = Self::get_config_file_path();
        let defaults = Self::from_defaults();

        if config_file.exists() {
            if let Ok(content) = fs::read_to_string(&config_file) {
                if let Ok(mut config) = Self::from_toml(&content) {
                    if config.merge_defaults(&defaults) {
                        let _ = config.save();
                    }
                    return config;
                }
            }
        } else {
            if let Some(parent) = config_file.parent() {
                let _ = fs::create_dir_all(parent);
            }
            let _ = defaults.save();
            return defaults;
        }

        defaults
    }

    /// Save configuration to the user config file
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be created or the
    /// file cannot be written
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let config_file = Self::get_config_file_path();
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(&config_file, toml_str)?;
        Ok(())
    }

    /// Get a configuration value by key
    ///
    /// Supported keys: `level`, `file`, `verbose`, `courses_dir`,
    /// `transcripts_file`, `admin_file`, `max_credits` (dashes are accepted
    /// in place of underscores).
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            "courses_dir" | "courses-dir" => Some(self.paths.courses_dir.clone()),
            "transcripts_file" | "transcripts-file" => Some(self.paths.transcripts_file.clone()),
            "admin_file" | "admin-file" => Some(self.paths.admin_file.clone()),
            "max_credits" | "max-credits" => Some(self.scheduling.max_credits.to_string()),
            _ => None,
        }
    }

    /// Set a configuration value by key
    ///
    /// Updates the in-memory config only. Call [`save()`](Config::save) to persist.
    ///
    /// # Errors
    /// Returns an error if the key is unknown or the value cannot be parsed
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "level" => self.logging.level = value.to_string(),
            "file" => self.logging.file = value.to_string(),
            "verbose" => {
                self.logging.verbose = value
                    .parse::<bool>()
                    .map_err(|_| format!("Invalid boolean value for 'verbose': '{value}'"))?;
            }
            "courses_dir" | "courses-dir" => self.paths.courses_dir = value.to_string(),
            "transcripts_file" | "transcripts-file" => {
                self.paths.transcripts_file = value.to_string();
            }
            "admin_file" | "admin-file" => self.paths.admin_file = value.to_string(),
            "max_credits" | "max-credits" => {
                let credits = value
                    .parse::<f32>()
                    .ok()
                    .filter(|c| *c >= 0.0 && c.is_finite())
                    .ok_or_else(|| format!("Invalid credit cap for 'max_credits': '{value}'"))?;
                self.scheduling.max_credits = credits;
            }
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Unset a configuration value by key (reset to default)
    ///
    /// # Errors
    /// Returns an error if the key is not recognized.
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        match key {
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "file" => self.logging.file.clone_from(&defaults.logging.file),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            "courses_dir" | "courses-dir" => self
                .paths
                .courses_dir
                .clone_from(&defaults.paths.courses_dir),
            "transcripts_file" | "transcripts-file" => self
                .paths
                .transcripts_file
                .clone_from(&defaults.paths.transcripts_file),
            "admin_file" | "admin-file" => {
                self.paths.admin_file.clone_from(&defaults.paths.admin_file);
            }
            "max_credits" | "max-credits" => {
                self.scheduling.max_credits = defaults.scheduling.max_credits;
            }
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Reset all configuration to defaults by deleting the config file
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be deleted
    pub fn reset() -> Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[paths]")?;
        writeln!(f, "  courses_dir = \"{}\"", self.paths.courses_dir)?;
        writeln!(f, "  transcripts_file = \"{}\"", self.paths.transcripts_file)?;
        writeln!(f, "  admin_file = \"{}\"", self.paths.admin_file)?;

        writeln!(f, "\n[scheduling]")?;
        writeln!(f, "  max_credits = {}", self.scheduling.max_credits)?;

        Ok(())
    }
}
