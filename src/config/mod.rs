use crate::errors::{AppError, AppResult};
use crate::report::{DateOrder, HolidayCalendar, time_to_minutes};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Runtime configuration.
///
/// Every field has a serde default, so a partial YAML file is valid and a
/// missing file yields `Config::default()`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Time of day (H:MM) after which work is paid at the elevated rate.
    #[serde(default = "default_night_cutoff")]
    pub night_cutoff: String,
    /// Non-working days (DD.MM.YYYY, two-digit years accepted).
    #[serde(default = "default_holidays")]
    pub holidays: Vec<String>,

    #[serde(default = "default_compensation_normal")]
    pub compensation_normal: String,
    #[serde(default = "default_compensation_elevated")]
    pub compensation_elevated: String,

    #[serde(default = "default_column_employee")]
    pub column_employee: String,
    #[serde(default = "default_column_method")]
    pub column_method: String,
    #[serde(default = "default_column_period")]
    pub column_period: String,
    #[serde(default = "default_column_task")]
    pub column_task: String,

    /// Zero-based index of the shift table inside the document.
    #[serde(default = "default_table_index")]
    pub table_index: usize,
    #[serde(default = "default_input_dir")]
    pub input_dir: String,
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// RGB hex of the header row fill.
    #[serde(default = "default_header_color")]
    pub header_color: String,
    #[serde(default)]
    pub zero_pad_minutes: bool,
    #[serde(default)]
    pub date_order: DateOrder,
}

fn default_night_cutoff() -> String {
    "22:00".to_string()
}
fn default_holidays() -> Vec<String> {
    [
        "01.01.2023",
        "02.01.2023",
        "03.01.2023",
        "04.01.2023",
        "05.01.2023",
        "06.01.2023",
        "07.01.2023",
        "08.01.2023",
        "22.02.2023",
        "23.02.2023",
        "24.02.2023",
        "07.03.2023",
        "08.03.2023",
        "01.05.2023",
        "08.05.2023",
        "09.05.2023",
        "12.06.2023",
        "03.11.2023",
        "04.11.2023",
        "06.11.2023",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}
fn default_compensation_normal() -> String {
    "Обычная".to_string()
}
fn default_compensation_elevated() -> String {
    "Повышенная".to_string()
}
fn default_column_employee() -> String {
    "Сотрудник".to_string()
}
fn default_column_method() -> String {
    "Способ компенсации".to_string()
}
fn default_column_period() -> String {
    "Период работы".to_string()
}
fn default_column_task() -> String {
    "Задача JIRA".to_string()
}
fn default_table_index() -> usize {
    1
}
fn default_input_dir() -> String {
    "src".to_string()
}
fn default_output_dir() -> String {
    "dist".to_string()
}
fn default_header_color() -> String {
    "FFC7CE".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            night_cutoff: default_night_cutoff(),
            holidays: default_holidays(),
            compensation_normal: default_compensation_normal(),
            compensation_elevated: default_compensation_elevated(),
            column_employee: default_column_employee(),
            column_method: default_column_method(),
            column_period: default_column_period(),
            column_task: default_column_task(),
            table_index: default_table_index(),
            input_dir: default_input_dir(),
            output_dir: default_output_dir(),
            header_color: default_header_color(),
            zero_pad_minutes: false,
            date_order: DateOrder::default(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("shiftsheet")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".shiftsheet")
        }
    }

    /// Return the full path of the default config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("shiftsheet.conf")
    }

    /// Load configuration from `path`, or return defaults if the file does not exist.
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Write this configuration as YAML, creating the parent directory if needed.
    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }

    /// Check the fields that the builder and the writer parse at run time.
    /// Returns every problem found, not only the first.
    pub fn validate(&self) -> Vec<String> {
        let mut problems = Vec::new();

        if let Err(e) = time_to_minutes(&self.night_cutoff) {
            problems.push(format!("night_cutoff: {e}"));
        }

        if let Err(e) = HolidayCalendar::from_strings(&self.holidays) {
            problems.push(format!("holidays: {e}"));
        }

        if parse_rgb(&self.header_color).is_none() {
            problems.push(format!(
                "header_color: '{}' is not a 6-digit hex RGB value",
                self.header_color
            ));
        }

        let labels = [
            &self.column_employee,
            &self.column_method,
            &self.column_period,
            &self.column_task,
        ];
        for (i, a) in labels.iter().enumerate() {
            if labels[i + 1..].contains(a) {
                problems.push(format!("column label '{a}' is used more than once"));
            }
        }

        problems
    }

    /// `validate` as an error, for commands that must not run on a bad config.
    pub fn ensure_valid(&self) -> AppResult<()> {
        let problems = self.validate();
        if problems.is_empty() {
            Ok(())
        } else {
            Err(AppError::Config(problems.join("; ")))
        }
    }

    /// Header fill as a 0xRRGGBB integer.
    pub fn header_rgb(&self) -> AppResult<u32> {
        parse_rgb(&self.header_color).ok_or_else(|| {
            AppError::Config(format!("invalid header_color '{}'", self.header_color))
        })
    }
}

fn parse_rgb(s: &str) -> Option<u32> {
    let hex = s.trim().trim_start_matches('#');
    if hex.len() != 6 {
        return None;
    }
    u32::from_str_radix(hex, 16).ok()
}
