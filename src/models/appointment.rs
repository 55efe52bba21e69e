use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Scheduled,
    Completed,
    Cancelled,
    Rescheduled,
}

impl AppointmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Scheduled => "scheduled",
            AppointmentStatus::Completed => "completed",
            AppointmentStatus::Cancelled => "cancelled",
            AppointmentStatus::Rescheduled => "rescheduled",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AppointmentType {
    #[default]
    #[serde(rename = "in-person")]
    InPerson,
    #[serde(rename = "video")]
    Video,
    #[serde(rename = "phone")]
    Phone,
}

impl AppointmentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentType::InPerson => "in-person",
            AppointmentType::Video => "video",
            AppointmentType::Phone => "phone",
        }
    }

    /// Translation key of the short label, e.g. `modal.type.inperson`.
    pub fn label_key(&self) -> String {
        format!("modal.type.{}", self.as_str().replace('-', ""))
    }
}

impl fmt::Display for AppointmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppointmentType {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "in-person" | "inperson" => Ok(AppointmentType::InPerson),
            "video" => Ok(AppointmentType::Video),
            "phone" => Ok(AppointmentType::Phone),
            other => Err(format!("unknown appointment type {other}")),
        }
    }
}

/// Appointment as listed for a patient. `GET appointments/{id}` returns a
/// subset, so the capability flags default to false.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: i64,
    pub doctor_id: i64,
    pub doctor_name: String,
    pub specialty: String,
    #[serde(rename = "date")]
    pub date_time: NaiveDateTime,
    pub status: AppointmentStatus,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub appointment_type: AppointmentType,
    #[serde(default)]
    pub reschedule_count: u32,
    #[serde(default)]
    pub can_reschedule: bool,
    #[serde(default)]
    pub can_cancel: bool,
    #[serde(default)]
    pub can_review: bool,
    #[serde(default)]
    pub is_upcoming: bool,
    #[serde(default)]
    pub patient_email: Option<String>,
    #[serde(default)]
    pub patient_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpcomingAppointment {
    pub id: i64,
    pub doctor_name: String,
    pub date: NaiveDateTime,
    pub hours_until: f64,
}

/// Body of `POST appointments`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAppointment {
    pub doctor_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub date_time: String,
    pub reason: String,
    pub appointment_type: AppointmentType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingConfirmation {
    pub id: i64,
    #[serde(default)]
    pub message: Option<String>,
    pub doctor_name: String,
    pub date: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RescheduleRequest {
    pub new_date_time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RescheduleConfirmation {
    #[serde(default)]
    pub message: Option<String>,
    pub new_date: NaiveDateTime,
    pub reschedule_count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_row_parses_naive_iso_dates() {
        let body = r#"{
            "id": 7,
            "doctor_id": 2,
            "doctor_name": "Michael Chen",
            "specialty": "Dermatology",
            "date": "2026-11-02T09:30:00",
            "status": "scheduled",
            "reason": null,
            "appointment_type": "video",
            "reschedule_count": 1,
            "can_review": false,
            "can_reschedule": true,
            "can_cancel": true,
            "is_upcoming": true
        }"#;
        let appointment: Appointment = serde_json::from_str(body).unwrap();
        assert_eq!(appointment.appointment_type, AppointmentType::Video);
        assert_eq!(appointment.status, AppointmentStatus::Scheduled);
        assert_eq!(appointment.date_time.to_string(), "2026-11-02 09:30:00");
        assert!(appointment.can_cancel);
    }

    #[test]
    fn booking_body_uses_camel_case() {
        let body = NewAppointment {
            doctor_id: 1,
            first_name: "Ana".to_string(),
            last_name: "Pop".to_string(),
            email: "ana@example.com".to_string(),
            phone: String::new(),
            date_time: "2026-11-02T09:30:00".to_string(),
            reason: String::new(),
            appointment_type: AppointmentType::InPerson,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["doctorId"], 1);
        assert_eq!(json["dateTime"], "2026-11-02T09:30:00");
        assert_eq!(json["appointmentType"], "in-person");
    }

    #[test]
    fn type_label_keys_drop_the_dash() {
        assert_eq!(AppointmentType::InPerson.label_key(), "modal.type.inperson");
        assert_eq!("Video".parse::<AppointmentType>(), Ok(AppointmentType::Video));
    }
}
