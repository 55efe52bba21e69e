use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One entry of the doctor directory. The detail endpoint omits
/// `specialty_id` and `is_favorite`, so both default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: i64,
    #[serde(rename = "full_name")]
    pub name: String,
    #[serde(default)]
    pub specialty_id: Option<i64>,
    #[serde(rename = "specialty")]
    pub specialty_name: String,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub review_count: u32,
    #[serde(rename = "estimated_wait_time", default)]
    pub wait_minutes: u32,
    #[serde(default)]
    pub years_experience: u32,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub is_favorite: bool,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub consultation_types: Vec<String>,
    #[serde(default)]
    pub is_verified: bool,
}

/// Row of `GET favorites?email=`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavoriteDoctor {
    pub id: i64,
    pub full_name: String,
    pub specialty: String,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub review_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavoriteToggle {
    pub email: String,
    pub doctor_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavoriteToggleResult {
    pub favorited: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailabilityWindow {
    pub start: String,
    pub end: String,
    pub available: bool,
}

/// Weekly schedule keyed by weekday name ("Monday" ... "Sunday").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoctorAvailability {
    pub doctor_id: i64,
    pub doctor_name: String,
    #[serde(default)]
    pub availability: BTreeMap<String, Vec<AvailabilityWindow>>,
}

/// Up to two upper-case initials, "DR" when the name is blank.
pub fn initials(name: &str) -> String {
    let letters: String = name
        .split_whitespace()
        .filter_map(|part| part.chars().next())
        .flat_map(|c| c.to_uppercase())
        .take(2)
        .collect();
    if letters.is_empty() {
        "DR".to_string()
    } else {
        letters
    }
}
