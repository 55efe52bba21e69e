use async_trait::async_trait;

use crate::clients::api_client::ApiClient;
use crate::errors::BookingResult;
use crate::models::appointment::{
    Appointment, BookingConfirmation, NewAppointment, RescheduleConfirmation, UpcomingAppointment,
};
use crate::models::doctor::{Doctor, DoctorAvailability, FavoriteDoctor, FavoriteToggleResult};
use crate::models::review::{NewReview, Review};
use crate::models::slot::TimeSlot;
use crate::models::specialty::Specialty;

/// Everything the client asks of the booking backend.
#[async_trait]
pub trait BookingApi: Send + Sync {
    async fn specialties(&self) -> BookingResult<Vec<Specialty>>;
    async fn doctors(
        &self,
        specialty_id: Option<i64>,
        patient_email: Option<&str>,
    ) -> BookingResult<Vec<Doctor>>;
    async fn doctor(&self, doctor_id: i64) -> BookingResult<Doctor>;
    async fn doctor_reviews(&self, doctor_id: i64) -> BookingResult<Vec<Review>>;
    async fn doctor_availability(&self, doctor_id: i64) -> BookingResult<DoctorAvailability>;
    async fn favorites(&self, email: &str) -> BookingResult<Vec<FavoriteDoctor>>;
    async fn toggle_favorite(&self, email: &str, doctor_id: i64)
        -> BookingResult<FavoriteToggleResult>;
    async fn appointments(&self, email: &str) -> BookingResult<Vec<Appointment>>;
    async fn appointment(&self, appointment_id: i64) -> BookingResult<Appointment>;
    async fn book(&self, appointment: &NewAppointment) -> BookingResult<BookingConfirmation>;
    async fn cancel(&self, appointment_id: i64) -> BookingResult<()>;
    async fn reschedule(
        &self,
        appointment_id: i64,
        new_date_time: &str,
    ) -> BookingResult<RescheduleConfirmation>;
    async fn upcoming(&self, email: &str) -> BookingResult<Vec<UpcomingAppointment>>;
    async fn available_slots(&self, doctor_id: i64, date: &str) -> BookingResult<Vec<TimeSlot>>;
    async fn submit_review(&self, review: &NewReview) -> BookingResult<()>;
}

pub struct BackendService {
    client: ApiClient,
}

impl BackendService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl BookingApi for BackendService {
    async fn specialties(&self) -> BookingResult<Vec<Specialty>> {
        self.client.get_json("specialties", &[]).await
    }

    async fn doctors(
        &self,
        specialty_id: Option<i64>,
        patient_email: Option<&str>,
    ) -> BookingResult<Vec<Doctor>> {
        let mut query = Vec::new();
        if let Some(id) = specialty_id {
            query.push(("specialty_id", id.to_string()));
        }
        if let Some(email) = patient_email {
            query.push(("patient_email", email.to_string()));
        }
        self.client.get_json("doctors", &query).await
    }

    async fn doctor(&self, doctor_id: i64) -> BookingResult<Doctor> {
        self.client.get_json(&format!("doctors/{doctor_id}"), &[]).await
    }

    async fn doctor_reviews(&self, doctor_id: i64) -> BookingResult<Vec<Review>> {
        self.client
            .get_json(&format!("doctors/{doctor_id}/reviews"), &[])
            .await
    }

    async fn doctor_availability(&self, doctor_id: i64) -> BookingResult<DoctorAvailability> {
        self.client
            .get_json(&format!("doctors/{doctor_id}/availability"), &[])
            .await
    }

    async fn favorites(&self, email: &str) -> BookingResult<Vec<FavoriteDoctor>> {
        self.client
            .get_json("favorites", &[("email", email.to_string())])
            .await
    }

    async fn toggle_favorite(
        &self,
        email: &str,
        doctor_id: i64,
    ) -> BookingResult<FavoriteToggleResult> {
        let body = crate::models::doctor::FavoriteToggle {
            email: email.to_string(),
            doctor_id,
        };
        self.client.post_json("favorites", &body).await
    }

    async fn appointments(&self, email: &str) -> BookingResult<Vec<Appointment>> {
        self.client
            .get_json("appointments", &[("email", email.to_string())])
            .await
    }

    async fn appointment(&self, appointment_id: i64) -> BookingResult<Appointment> {
        self.client
            .get_json(&format!("appointments/{appointment_id}"), &[])
            .await
    }

    async fn book(&self, appointment: &NewAppointment) -> BookingResult<BookingConfirmation> {
        self.client.post_json("appointments", appointment).await
    }

    async fn cancel(&self, appointment_id: i64) -> BookingResult<()> {
        let _: serde_json::Value = self
            .client
            .post_json(
                &format!("appointments/{appointment_id}/cancel"),
                &serde_json::json!({}),
            )
            .await?;
        Ok(())
    }

    async fn reschedule(
        &self,
        appointment_id: i64,
        new_date_time: &str,
    ) -> BookingResult<RescheduleConfirmation> {
        let body = crate::models::appointment::RescheduleRequest {
            new_date_time: new_date_time.to_string(),
        };
        self.client
            .post_json(&format!("appointments/{appointment_id}/reschedule"), &body)
            .await
    }

    async fn upcoming(&self, email: &str) -> BookingResult<Vec<UpcomingAppointment>> {
        self.client
            .get_json("appointments/upcoming", &[("email", email.to_string())])
            .await
    }

    async fn available_slots(&self, doctor_id: i64, date: &str) -> BookingResult<Vec<TimeSlot>> {
        self.client
            .get_json(
                "available-slots",
                &[("doctor_id", doctor_id.to_string()), ("date", date.to_string())],
            )
            .await
    }

    async fn submit_review(&self, review: &NewReview) -> BookingResult<()> {
        let _: serde_json::Value = self.client.post_json("reviews", review).await?;
        Ok(())
    }
}
