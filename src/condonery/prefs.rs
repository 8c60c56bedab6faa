use crate::error::StorageError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const PREFS_FILENAME: &str = "preferences.json";
const DEFAULT_DIRECTORY_FILE: &str = "data/condonery.json";
const DEFAULT_WINDOW_WIDTH: f64 = 740.0;
const DEFAULT_WINDOW_HEIGHT: f64 = 600.0;

/// Window geometry, kept so a graphical front end can restore it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuiSettings {
    pub window_width: f64,
    pub window_height: f64,
    pub window_coordinates: Option<(i32, i32)>,
}

impl GuiSettings {
    pub fn new(window_width: f64, window_height: f64, window_coordinates: Option<(i32, i32)>) -> Self {
        Self {
            window_width,
            window_height,
            window_coordinates,
        }
    }
}

impl Default for GuiSettings {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT, None)
    }
}

/// User preferences, stored in `preferences.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPrefs {
    #[serde(default)]
    pub gui_settings: GuiSettings,

    /// Where the directory JSON file lives
    #[serde(default = "default_directory_file_path")]
    pub directory_file_path: PathBuf,
}

fn default_directory_file_path() -> PathBuf {
    PathBuf::from(DEFAULT_DIRECTORY_FILE)
}

impl Default for UserPrefs {
    fn default() -> Self {
        Self {
            gui_settings: GuiSettings::default(),
            directory_file_path: default_directory_file_path(),
        }
    }
}

impl UserPrefs {
    /// Load preferences from `path`, or return defaults if the file does not exist.
    /// A file that exists but does not parse is an error.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, StorageError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let prefs: UserPrefs = serde_json::from_str(&content)?;
        Ok(prefs)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), StorageError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
