use serde::{Deserialize, Serialize};

/// A bookable time returned by `available-slots`, kept exactly as received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    #[serde(rename = "datetime")]
    pub iso_date_time: String,
    #[serde(rename = "time")]
    pub display_time: String,
    #[serde(default = "default_available")]
    pub available: bool,
}

fn default_available() -> bool {
    true
}

impl TimeSlot {
    pub fn new(iso_date_time: &str, display_time: &str) -> Self {
        Self {
            iso_date_time: iso_date_time.to_string(),
            display_time: display_time.to_string(),
            available: true,
        }
    }
}
