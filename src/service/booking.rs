use tracing::info;

use crate::errors::{BookingResult, ValidationError};
use crate::models::appointment::{AppointmentType, BookingConfirmation, NewAppointment};
use crate::service::api_service::BookingApi;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatientDetails {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingForm {
    pub doctor_id: i64,
    pub patient: PatientDetails,
    pub date_time: Option<String>,
    pub appointment_type: AppointmentType,
}

impl BookingForm {
    /// Checks run in the order the form reports them: slot, name, email.
    pub fn validate(&self) -> Result<NewAppointment, ValidationError> {
        let date_time = self
            .date_time
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .ok_or(ValidationError::MissingSlot)?;

        let first_name = self.patient.first_name.trim();
        let last_name = self.patient.last_name.trim();
        if first_name.is_empty() || last_name.is_empty() {
            return Err(ValidationError::MissingName);
        }

        let email = self.patient.email.trim();
        if email.is_empty() {
            return Err(ValidationError::MissingEmail);
        }

        Ok(NewAppointment {
            doctor_id: self.doctor_id,
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: email.to_string(),
            phone: self.patient.phone.trim().to_string(),
            date_time: date_time.to_string(),
            reason: self.patient.reason.trim().to_string(),
            appointment_type: self.appointment_type,
        })
    }
}

/// What the confirmation e-mail preview shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingSummary {
    pub doctor_name: String,
    pub patient_name: String,
    pub date: String,
    pub time: String,
    pub appointment_type: AppointmentType,
}

impl BookingSummary {
    pub fn from_confirmation(confirmation: &BookingConfirmation, request: &NewAppointment) -> Self {
        Self {
            doctor_name: confirmation.doctor_name.clone(),
            patient_name: format!("{} {}", request.first_name, request.last_name),
            date: confirmation.date.format("%A, %B %-d, %Y").to_string(),
            time: confirmation.date.format("%-I:%M %p").to_string(),
            appointment_type: request.appointment_type,
        }
    }
}

pub struct BookingService;

impl BookingService {
    /// Nothing is sent unless the form validates.
    pub async fn submit(api: &dyn BookingApi, form: &BookingForm) -> BookingResult<BookingSummary> {
        let request = form.validate()?;
        let confirmation = api.book(&request).await?;
        info!(appointment_id = confirmation.id, doctor_id = request.doctor_id, "appointment booked");
        Ok(BookingSummary::from_confirmation(&confirmation, &request))
    }
}
