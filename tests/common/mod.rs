#![allow(dead_code)]

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use medSchedule::errors::{BookingError, BookingResult};
use medSchedule::handlers::session::SessionEngine;
use medSchedule::models::appointment::{
    Appointment, AppointmentStatus, AppointmentType, BookingConfirmation, NewAppointment,
    RescheduleConfirmation, UpcomingAppointment,
};
use medSchedule::models::doctor::{
    Doctor, DoctorAvailability, FavoriteDoctor, FavoriteToggleResult,
};
use medSchedule::models::review::{NewReview, Review};
use medSchedule::models::slot::TimeSlot;
use medSchedule::models::specialty::Specialty;
use medSchedule::service::api_service::BookingApi;
use medSchedule::service::notifier::{Notifier, ToastLevel};
use medSchedule::state::AppState;
use tokio::sync::Mutex;
use tokio::time::{Duration, sleep};

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

pub fn doctor(id: i64, name: &str, specialty_id: i64, specialty: &str) -> Doctor {
    Doctor {
        id,
        name: name.to_string(),
        specialty_id: Some(specialty_id),
        specialty_name: specialty.to_string(),
        rating: 4.5,
        review_count: 8,
        wait_minutes: 15,
        years_experience: 12,
        bio: None,
        is_favorite: false,
        email: None,
        phone: None,
        consultation_types: vec![],
        is_verified: true,
    }
}

pub fn appointment(id: i64, doctor_id: i64) -> Appointment {
    Appointment {
        id,
        doctor_id,
        doctor_name: "Sarah Johnson".to_string(),
        specialty: "Cardiology".to_string(),
        date_time: NaiveDate::from_ymd_opt(2026, 10, 23)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap(),
        status: AppointmentStatus::Completed,
        reason: None,
        appointment_type: AppointmentType::InPerson,
        reschedule_count: 0,
        can_reschedule: true,
        can_cancel: true,
        can_review: true,
        is_upcoming: false,
        patient_email: Some("ana@example.com".to_string()),
        patient_id: Some(77),
    }
}

/// In-memory backend. Records every call by name.
#[derive(Default)]
pub struct FakeApi {
    pub calls: Mutex<Vec<String>>,
    pub doctors: Vec<Doctor>,
    pub appointments: Vec<Appointment>,
    pub upcoming: Vec<UpcomingAppointment>,
    pub favorites: Mutex<BTreeSet<i64>>,
    pub slots: HashMap<String, Vec<TimeSlot>>,
    pub slot_delays: HashMap<String, Duration>,
    pub failing_slots: BTreeSet<String>,
    pub failing_toggle: bool,
    pub booked: Mutex<Vec<NewAppointment>>,
    pub reviews: Mutex<Vec<NewReview>>,
    pub rescheduled: Mutex<Vec<(i64, String)>>,
}

impl FakeApi {
    pub fn with_doctors(doctors: Vec<Doctor>) -> Self {
        Self {
            doctors,
            ..Self::default()
        }
    }

    pub async fn calls(&self) -> Vec<String> {
        self.calls.lock().await.clone()
    }

    pub async fn called(&self, name: &str) -> bool {
        self.calls.lock().await.iter().any(|call| call == name)
    }

    async fn record(&self, name: &str) {
        self.calls.lock().await.push(name.to_string());
    }

    fn find_doctor(&self, doctor_id: i64) -> BookingResult<Doctor> {
        self.doctors
            .iter()
            .find(|doctor| doctor.id == doctor_id)
            .cloned()
            .ok_or_else(|| BookingError::Api {
                status: 404,
                message: "Doctor not found".to_string(),
            })
    }
}

#[async_trait]
impl BookingApi for FakeApi {
    async fn specialties(&self) -> BookingResult<Vec<Specialty>> {
        self.record("specialties").await;
        Ok(vec![
            Specialty {
                id: 1,
                name: "Cardiology".to_string(),
                description: None,
            },
            Specialty {
                id: 2,
                name: "Dermatology".to_string(),
                description: None,
            },
        ])
    }

    async fn doctors(
        &self,
        specialty_id: Option<i64>,
        _patient_email: Option<&str>,
    ) -> BookingResult<Vec<Doctor>> {
        self.record("doctors").await;
        Ok(self
            .doctors
            .iter()
            .filter(|doctor| specialty_id.is_none() || doctor.specialty_id == specialty_id)
            .cloned()
            .collect())
    }

    async fn doctor(&self, doctor_id: i64) -> BookingResult<Doctor> {
        self.record("doctor").await;
        self.find_doctor(doctor_id)
    }

    async fn doctor_reviews(&self, doctor_id: i64) -> BookingResult<Vec<Review>> {
        self.record("doctor_reviews").await;
        self.find_doctor(doctor_id)?;
        Ok(vec![Review {
            id: 1,
            rating: 5,
            comment: Some("Great".to_string()),
            date: "2026-09-30".to_string(),
            patient_name: "Ana P.".to_string(),
        }])
    }

    async fn doctor_availability(&self, _doctor_id: i64) -> BookingResult<DoctorAvailability> {
        self.record("doctor_availability").await;
        Err(BookingError::Api {
            status: 500,
            message: "HTTP 500".to_string(),
        })
    }

    async fn favorites(&self, _email: &str) -> BookingResult<Vec<FavoriteDoctor>> {
        self.record("favorites").await;
        let favorites = self.favorites.lock().await.clone();
        Ok(self
            .doctors
            .iter()
            .filter(|doctor| favorites.contains(&doctor.id))
            .map(|doctor| FavoriteDoctor {
                id: doctor.id,
                full_name: doctor.name.clone(),
                specialty: doctor.specialty_name.clone(),
                rating: doctor.rating,
                review_count: doctor.review_count,
            })
            .collect())
    }

    async fn toggle_favorite(
        &self,
        _email: &str,
        doctor_id: i64,
    ) -> BookingResult<FavoriteToggleResult> {
        self.record("toggle_favorite").await;
        if self.failing_toggle {
            return Err(BookingError::Api {
                status: 500,
                message: "Failed to update favorites".to_string(),
            });
        }
        let mut favorites = self.favorites.lock().await;
        let favorited = if favorites.remove(&doctor_id) {
            false
        } else {
            favorites.insert(doctor_id);
            true
        };
        Ok(FavoriteToggleResult {
            favorited,
            message: None,
        })
    }

    async fn appointments(&self, _email: &str) -> BookingResult<Vec<Appointment>> {
        self.record("appointments").await;
        Ok(self.appointments.clone())
    }

    async fn appointment(&self, appointment_id: i64) -> BookingResult<Appointment> {
        self.record("appointment").await;
        self.appointments
            .iter()
            .find(|appointment| appointment.id == appointment_id)
            .cloned()
            .ok_or_else(|| BookingError::Api {
                status: 404,
                message: "Appointment not found".to_string(),
            })
    }

    async fn book(&self, appointment: &NewAppointment) -> BookingResult<BookingConfirmation> {
        self.record("book").await;
        self.booked.lock().await.push(appointment.clone());
        let doctor = self.find_doctor(appointment.doctor_id)?;
        let date = chrono::NaiveDateTime::parse_from_str(&appointment.date_time, "%Y-%m-%dT%H:%M:%S")
            .map_err(|e| BookingError::Api {
                status: 400,
                message: e.to_string(),
            })?;
        Ok(BookingConfirmation {
            id: 100,
            message: Some("Appointment booked successfully".to_string()),
            doctor_name: doctor.name,
            date,
        })
    }

    async fn cancel(&self, _appointment_id: i64) -> BookingResult<()> {
        self.record("cancel").await;
        Ok(())
    }

    async fn reschedule(
        &self,
        appointment_id: i64,
        new_date_time: &str,
    ) -> BookingResult<RescheduleConfirmation> {
        self.record("reschedule").await;
        self.rescheduled
            .lock()
            .await
            .push((appointment_id, new_date_time.to_string()));
        let new_date = chrono::NaiveDateTime::parse_from_str(new_date_time, "%Y-%m-%dT%H:%M:%S")
            .map_err(|e| BookingError::Api {
                status: 400,
                message: e.to_string(),
            })?;
        Ok(RescheduleConfirmation {
            message: None,
            new_date,
            reschedule_count: 1,
        })
    }

    async fn upcoming(&self, _email: &str) -> BookingResult<Vec<UpcomingAppointment>> {
        self.record("upcoming").await;
        Ok(self.upcoming.clone())
    }

    async fn available_slots(&self, _doctor_id: i64, date: &str) -> BookingResult<Vec<TimeSlot>> {
        self.record("available_slots").await;
        if let Some(delay) = self.slot_delays.get(date) {
            sleep(*delay).await;
        }
        if self.failing_slots.contains(date) {
            return Err(BookingError::Api {
                status: 500,
                message: "HTTP 500".to_string(),
            });
        }
        Ok(self.slots.get(date).cloned().unwrap_or_default())
    }

    async fn submit_review(&self, review: &NewReview) -> BookingResult<()> {
        self.record("submit_review").await;
        self.reviews.lock().await.push(review.clone());
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub toasts: Mutex<Vec<(ToastLevel, String)>>,
    pub banners: Mutex<Vec<(String, String)>>,
}

impl RecordingNotifier {
    pub async fn messages(&self) -> Vec<String> {
        self.toasts
            .lock()
            .await
            .iter()
            .map(|(_, message)| message.clone())
            .collect()
    }

    pub async fn errors(&self) -> Vec<String> {
        self.toasts
            .lock()
            .await
            .iter()
            .filter(|(level, _)| *level == ToastLevel::Error)
            .map(|(_, message)| message.clone())
            .collect()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn toast(&self, level: ToastLevel, message: &str) {
        self.toasts.lock().await.push((level, message.to_string()));
    }

    async fn banner(&self, title: &str, message: &str) {
        self.banners
            .lock()
            .await
            .push((title.to_string(), message.to_string()));
    }
}

pub fn engine(api: Arc<FakeApi>, notifier: Arc<RecordingNotifier>) -> SessionEngine {
    engine_with_state(api, notifier, AppState::default())
}

pub fn engine_with_state(
    api: Arc<FakeApi>,
    notifier: Arc<RecordingNotifier>,
    state: AppState,
) -> SessionEngine {
    SessionEngine::new(Arc::new(Mutex::new(state)), api, notifier, today())
}
