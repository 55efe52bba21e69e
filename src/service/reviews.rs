use tracing::info;

use crate::errors::{BookingError, BookingResult, ValidationError};
use crate::models::review::NewReview;
use crate::service::api_service::BookingApi;

pub const MAX_RATING: u8 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewForm {
    pub appointment_id: i64,
    pub doctor_id: i64,
    pub rating: u8,
    pub comment: String,
}

impl ReviewForm {
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self.rating {
            0 => Err(ValidationError::MissingRating),
            rating if rating > MAX_RATING => Err(ValidationError::InvalidRating(rating)),
            _ => Ok(()),
        }
    }
}

/// `★★★☆☆` style rendering, rounded to the nearest whole star.
pub fn stars(rating: f64) -> String {
    let filled = rating.round().clamp(0.0, f64::from(MAX_RATING)) as usize;
    let mut out = "★".repeat(filled);
    out.push_str(&"☆".repeat(usize::from(MAX_RATING) - filled));
    out
}

pub struct ReviewService;

impl ReviewService {
    /// The patient id is taken from the patient's own appointment list.
    pub async fn submit(
        api: &dyn BookingApi,
        email: Option<&str>,
        form: &ReviewForm,
    ) -> BookingResult<()> {
        form.validate()?;
        let email = email.ok_or(BookingError::NotSignedIn)?;
        let appointments = api.appointments(email).await?;
        let appointment = appointments
            .iter()
            .find(|appointment| appointment.id == form.appointment_id)
            .ok_or_else(|| BookingError::NotFound(format!("appointment {}", form.appointment_id)))?;

        let review = NewReview {
            appointment_id: form.appointment_id,
            doctor_id: form.doctor_id,
            patient_id: appointment.patient_id,
            rating: form.rating,
            comment: form.comment.trim().to_string(),
        };
        api.submit_review(&review).await?;
        info!(appointment_id = form.appointment_id, rating = form.rating, "review submitted");
        Ok(())
    }
}
