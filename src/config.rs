// Each key is looked up in the CONFIG_FILE first, then in the environment.
use std::collections::HashMap;
use std::env;
use std::fs;
use std::time::Duration;

use chrono::{Local, NaiveDate, Utc};
use chrono_tz::Tz;

use crate::clients::api_client::DEFAULT_BASE_URL;
use crate::models::preferences::get_preferences_location;

const DEFAULT_TIMEOUT_SECS: u64 = 15;
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Default, Clone)]
pub struct AppConfig {
    values: HashMap<String, String>,
}

impl AppConfig {
    pub fn from_file(path: &str) -> Result<Self, String> {
        let content = fs::read_to_string(path).map_err(|e| e.to_string())?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, String> {
        let mut values = HashMap::new();
        for (idx, line) in content.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let trimmed = trimmed.strip_prefix("export ").unwrap_or(trimmed);
            let Some((key, value)) = trimmed.split_once('=') else {
                return Err(format!("Invalid config line {}: {}", idx + 1, line));
            };
            let key = key.trim();
            let mut value = value.trim().to_string();
            if value.len() >= 2
                && ((value.starts_with('"') && value.ends_with('"'))
                    || (value.starts_with('\'') && value.ends_with('\'')))
            {
                value = value[1..value.len() - 1].to_string();
            }
            values.insert(key.to_string(), value);
        }
        Ok(Self { values })
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    /// File value, else environment value.
    pub fn prop(&self, key: &str) -> Option<String> {
        self.get(key).or_else(|| env::var(key).ok())
    }

    pub fn settings(&self) -> Result<Settings, String> {
        let timezone = match self.prop("TIMEZONE") {
            Some(name) => Some(
                name.parse::<Tz>()
                    .map_err(|_| format!("Unknown TIMEZONE {name}"))?,
            ),
            None => None,
        };
        let request_timeout = match self.prop("REQUEST_TIMEOUT_SECS") {
            Some(secs) => secs
                .parse::<u64>()
                .map_err(|_| format!("Invalid REQUEST_TIMEOUT_SECS {secs}"))?,
            None => DEFAULT_TIMEOUT_SECS,
        };
        Ok(Settings {
            api_base_url: self
                .prop("API_BASE_URL")
                .unwrap_or(DEFAULT_BASE_URL.to_string()),
            preferences_location: self
                .prop("PREFERENCES_LOCATION")
                .unwrap_or_else(get_preferences_location),
            timezone,
            request_timeout: Duration::from_secs(request_timeout),
            log_level: self
                .prop("LOG_LEVEL")
                .unwrap_or(DEFAULT_LOG_LEVEL.to_string()),
        })
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub api_base_url: String,
    pub preferences_location: String,
    pub timezone: Option<Tz>,
    pub request_timeout: Duration,
    pub log_level: String,
}

impl Settings {
    /// Calendar "today" in the configured zone, or local time.
    pub fn today(&self) -> NaiveDate {
        match self.timezone {
            Some(tz) => Utc::now().with_timezone(&tz).date_naive(),
            None => Local::now().date_naive(),
        }
    }
}
