use tracing::info;

use crate::errors::{BookingResult, ValidationError};
use crate::models::appointment::{Appointment, RescheduleConfirmation, UpcomingAppointment};
use crate::service::api_service::BookingApi;
use crate::service::translation::Translator;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RescheduleForm {
    pub appointment_id: i64,
    pub date: Option<String>,
    pub date_time: Option<String>,
}

impl RescheduleForm {
    pub fn validate(&self) -> Result<String, ValidationError> {
        match (self.date.as_deref(), self.date_time.as_deref()) {
            (Some(date), Some(date_time)) if !date.is_empty() && !date_time.is_empty() => {
                Ok(date_time.to_string())
            }
            _ => Err(ValidationError::MissingDateAndTime),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBanner {
    pub title: String,
    pub message: String,
}

/// Banner for the soonest upcoming appointment, in minutes when it is less
/// than an hour away.
pub fn upcoming_banner(
    translator: &Translator,
    upcoming: &[UpcomingAppointment],
) -> Option<UpcomingBanner> {
    let next = upcoming.first()?;
    let lead = translator.t_with(
        "appointments.upcoming_desc_doctor",
        &[("doctor", &next.doctor_name)],
    );
    let remaining = if next.hours_until < 1.0 {
        format!("{} {}", (next.hours_until * 60.0).round() as i64, translator.t_or("minutes", "minutes"))
    } else {
        format!("{} {}", next.hours_until.round() as i64, translator.t_or("hours", "hours"))
    };
    Some(UpcomingBanner {
        title: translator.t("appointments.upcoming"),
        message: format!("{lead} {remaining}"),
    })
}

pub struct AppointmentService;

impl AppointmentService {
    pub async fn list(api: &dyn BookingApi, email: &str) -> BookingResult<Vec<Appointment>> {
        api.appointments(email).await
    }

    pub async fn cancel(api: &dyn BookingApi, appointment_id: i64) -> BookingResult<()> {
        api.cancel(appointment_id).await?;
        info!(appointment_id, "appointment cancelled");
        Ok(())
    }

    pub async fn reschedule(
        api: &dyn BookingApi,
        form: &RescheduleForm,
    ) -> BookingResult<RescheduleConfirmation> {
        let date_time = form.validate()?;
        let confirmation = api.reschedule(form.appointment_id, &date_time).await?;
        info!(
            appointment_id = form.appointment_id,
            reschedule_count = confirmation.reschedule_count,
            "appointment rescheduled"
        );
        Ok(confirmation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::translation::Locale;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn upcoming(hours_until: f64) -> UpcomingAppointment {
        UpcomingAppointment {
            id: 1,
            doctor_name: "Sarah Johnson".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 10, 20)
                .unwrap()
                .and_hms_opt(9, 0, 0)
                .unwrap(),
            hours_until,
        }
    }

    #[test]
    fn banner_uses_minutes_under_an_hour() {
        let translator = Translator::new(Locale::En);
        let banner = upcoming_banner(&translator, &[upcoming(0.5)]).unwrap();
        assert_eq!(banner.title, "Upcoming Appointment");
        assert_eq!(
            banner.message,
            "You have an appointment with Sarah Johnson in 30 minutes"
        );
    }

    #[test]
    fn banner_rounds_hours() {
        let translator = Translator::new(Locale::Ro);
        let banner = upcoming_banner(&translator, &[upcoming(5.6)]).unwrap();
        assert_eq!(banner.message, "Ai o programare cu Sarah Johnson în 6 ore");
    }

    #[test]
    fn no_upcoming_means_no_banner() {
        assert_eq!(upcoming_banner(&Translator::default(), &[]), None);
    }

    #[test]
    fn reschedule_needs_date_and_time() {
        let form = RescheduleForm {
            appointment_id: 3,
            date: Some("2026-10-21".to_string()),
            date_time: None,
        };
        assert_eq!(form.validate(), Err(ValidationError::MissingDateAndTime));
    }
}
