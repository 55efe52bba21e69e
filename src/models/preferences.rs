use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::service::translation::Locale;

const PREFERENCES_FILE: &str = "preferences.json";

// Returns the directory where preferences live.
// Defaults to a relative "./data" directory.
pub fn get_preferences_location() -> String {
    env::var("PREFERENCES_LOCATION").unwrap_or("./data".to_string())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("unknown theme {other}")),
        }
    }
}

/// What the browser kept in local storage: theme, language and the last
/// patient email.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub language: Locale,
    #[serde(default)]
    pub patient_email: Option<String>,
}

fn preferences_path(dir: &str) -> PathBuf {
    Path::new(dir).join(PREFERENCES_FILE)
}

/// Missing file means first run and yields defaults.
pub fn load_preferences(dir: &str) -> io::Result<Preferences> {
    let path = preferences_path(dir);
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no preferences file, using defaults");
            return Ok(Preferences::default());
        }
        Err(err) => return Err(err),
    };
    serde_json::from_str(&content).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

pub fn save_preferences(dir: &str, preferences: &Preferences) -> io::Result<()> {
    fs::create_dir_all(dir)?;
    let body = serde_json::to_string_pretty(preferences)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(preferences_path(dir), body)
}
