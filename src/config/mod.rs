use crate::core::normalizer::{DEFAULT_END_TIME, DEFAULT_START_TIME, ScheduleDefaults};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Schedule table: calendar date column
    pub day_column: String,
    /// Schedule table: working-hours start column
    pub start_time_column: String,
    /// Schedule table: working-hours end column
    pub end_time_column: String,
    /// Schedule table: working flag column
    pub is_work_column: String,
    /// Schedule table: optional row label column
    pub label_column: String,

    pub default_start_time: String,
    pub default_end_time: String,

    /// Cases table columns
    pub case_id_column: String,
    pub case_start_column: String,
    pub case_end_column: String,

    pub delimiter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            day_column: "day".to_string(),
            start_time_column: "start_time".to_string(),
            end_time_column: "end_time".to_string(),
            is_work_column: "is_work".to_string(),
            label_column: "label".to_string(),
            default_start_time: DEFAULT_START_TIME.format("%H:%M:%S").to_string(),
            default_end_time: DEFAULT_END_TIME.format("%H:%M:%S").to_string(),
            case_id_column: "id".to_string(),
            case_start_column: "start".to_string(),
            case_end_column: "end".to_string(),
            delimiter: ",".to_string(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".rworktime")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rworktime.conf")
    }

    /// Load configuration from `path` (or the standard file), falling back
    /// to defaults when the file does not exist.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(Self::config_file);

        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| AppError::ConfigLoad(format!("{}: {}", path.display(), e)))?;
        let cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::ConfigLoad(format!("{}: {}", path.display(), e)))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Write the default configuration to `path` (or the standard file).
    /// Returns the path actually written.
    pub fn init_all(path: Option<&Path>) -> AppResult<PathBuf> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(Self::config_file);

        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }

        let yaml = serde_yaml::to_string(&Config::default())?;
        let mut file = fs::File::create(&path)?;
        file.write_all(yaml.as_bytes())?;

        Ok(path)
    }

    /// Defaults used to fill blank times of working days.
    pub fn schedule_defaults(&self) -> AppResult<ScheduleDefaults> {
        ScheduleDefaults::parse(&self.default_start_time, &self.default_end_time)
    }

    /// Single-byte CSV delimiter.
    pub fn delimiter_byte(&self) -> AppResult<u8> {
        match self.delimiter.as_bytes() {
            [b] => Ok(*b),
            _ => Err(AppError::Config(format!(
                "delimiter must be a single ASCII character, got {:?}",
                self.delimiter
            ))),
        }
    }

    fn validate(&self) -> AppResult<()> {
        self.delimiter_byte()?;
        self.schedule_defaults()?;
        Ok(())
    }
}
