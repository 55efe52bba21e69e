use std::sync::Arc;

use chrono::NaiveDate;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use crate::errors::{BookingError, ValidationError};
use crate::models::appointment::AppointmentType;
use crate::models::preferences::{Preferences, Theme, save_preferences};
use crate::service::api_service::BookingApi;
use crate::service::appointments::{AppointmentService, RescheduleForm, upcoming_banner};
use crate::service::booking::{BookingForm, BookingService, PatientDetails};
use crate::service::calendar::{date_key, parse_date_key};
use crate::service::doctor_filter::DoctorFilter;
use crate::service::favorites::FavoritesService;
use crate::service::notifier::{Notifier, ToastLevel};
use crate::service::reviews::{ReviewForm, ReviewService};
use crate::service::slots::{RequestToken, SlotTarget, lookup_slots};
use crate::service::translation::Locale;
use crate::state::{AppState, DoctorDetail};

/// Everything a user can do. Handlers are bound to the engine instead of
/// being looked up by name.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    SignIn { email: String },
    SignOut,
    SetLanguage(Locale),
    SetTheme(Option<Theme>),
    LoadSpecialties,
    LoadDoctors { specialty_id: Option<i64> },
    FilterChanged { specialty_id: Option<i64>, search: Option<String> },
    LoadFavorites,
    ToggleFavorite { doctor_id: i64 },
    ShowDoctor { doctor_id: i64 },
    OpenBooking { doctor_id: i64 },
    SelectDate { target: SlotTarget, date: String },
    SelectTime { target: SlotTarget, date_time: String },
    SelectAppointmentType(AppointmentType),
    SubmitBooking(PatientDetails),
    LoadAppointments,
    CancelAppointment { appointment_id: i64 },
    OpenReschedule { appointment_id: i64 },
    ChangeRescheduleMonth { delta: i32 },
    SubmitReschedule,
    SubmitReview(ReviewForm),
    CheckUpcoming,
    /// Waits for every slot lookup in flight.
    Settle,
}

#[derive(Clone)]
pub struct SessionEngine {
    store: Arc<Mutex<AppState>>,
    api: Arc<dyn BookingApi>,
    notifier: Arc<dyn Notifier>,
    today: NaiveDate,
    preferences_dir: Option<String>,
    lookups: Arc<Mutex<Vec<JoinHandle<()>>>>,
}

impl SessionEngine {
    pub fn new(
        store: Arc<Mutex<AppState>>,
        api: Arc<dyn BookingApi>,
        notifier: Arc<dyn Notifier>,
        today: NaiveDate,
    ) -> Self {
        Self {
            store,
            api,
            notifier,
            today,
            preferences_dir: None,
            lookups: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Preference changes are written to `dir` from then on.
    pub fn persist_preferences_to(mut self, dir: &str) -> Self {
        self.preferences_dir = Some(dir.to_string());
        self
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub async fn snapshot(&self) -> AppState {
        self.store.lock().await.clone()
    }

    async fn update<F>(&self, change: F)
    where
        F: FnOnce(&AppState) -> AppState,
    {
        let mut state = self.store.lock().await;
        *state = change(&state);
    }

    async fn toast_key(&self, level: ToastLevel, key: &str, params: &[(&str, &str)]) {
        let message = self.snapshot().await.translator().t_with(key, params);
        self.notifier.toast(level, &message).await;
    }

    async fn report(&self, action: &str, err: &BookingError) {
        match err {
            BookingError::Validation(_) | BookingError::NotSignedIn => {
                warn!(action, error = %err, "action blocked");
            }
            _ => error!(action, error = %err, "action failed"),
        }
        self.notifier.toast(ToastLevel::Error, &err.to_string()).await;
    }

    fn persist(&self, preferences: &Preferences) {
        let Some(dir) = &self.preferences_dir else {
            return;
        };
        if let Err(err) = save_preferences(dir, preferences) {
            warn!(error = %err, "failed to save preferences");
        }
    }

    pub async fn settle(&self) {
        let pending = std::mem::take(&mut *self.lookups.lock().await);
        for handle in pending {
            if let Err(err) = handle.await {
                error!(error = %err, "slot lookup task failed");
            }
        }
    }

    pub async fn handle_event(&self, event: UiEvent) {
        debug!(?event, "handling event");
        match event {
            UiEvent::SignIn { email } => {
                let email = email.trim().to_string();
                if email.is_empty() {
                    self.report("sign_in", &ValidationError::MissingEmail.into()).await;
                    return;
                }
                self.update(|s| s.signed_in(&email)).await;
                self.persist(&self.snapshot().await.preferences);
                info!(%email, "patient signed in");
                self.toast_key(ToastLevel::Success, "login.signed_in", &[("email", &email)])
                    .await;
                self.refresh_appointments().await;
                self.refresh_favorites().await;
            }
            UiEvent::SignOut => {
                self.update(AppState::signed_out).await;
                self.persist(&self.snapshot().await.preferences);
                self.toast_key(ToastLevel::Info, "login.signed_out", &[]).await;
            }
            UiEvent::SetLanguage(language) => {
                self.update(|s| s.with_language(language)).await;
                self.persist(&self.snapshot().await.preferences);
                self.toast_key(
                    ToastLevel::Info,
                    "toast.language.switched",
                    &[("language", language.code())],
                )
                .await;
            }
            UiEvent::SetTheme(theme) => {
                self.update(|s| {
                    let theme = theme.unwrap_or_else(|| s.preferences.theme.toggled());
                    s.with_theme(theme)
                })
                .await;
                let preferences = self.snapshot().await.preferences;
                self.persist(&preferences);
                self.toast_key(
                    ToastLevel::Info,
                    "toast.theme.switched",
                    &[("theme", preferences.theme.as_str())],
                )
                .await;
            }
            UiEvent::LoadSpecialties => match self.api.specialties().await {
                Ok(specialties) => self.update(|s| s.with_specialties(specialties)).await,
                Err(err) => {
                    error!(error = %err, "failed to load specialties");
                    self.toast_key(ToastLevel::Error, "toast.load.error", &[("item", "specialties")])
                        .await;
                }
            },
            UiEvent::LoadDoctors { specialty_id } => {
                self.refresh_doctors(specialty_id).await;
            }
            UiEvent::FilterChanged { specialty_id, search } => {
                self.update(|s| s.with_filter(DoctorFilter { specialty_id, search }))
                    .await;
            }
            UiEvent::LoadFavorites => self.refresh_favorites().await,
            UiEvent::ToggleFavorite { doctor_id } => self.toggle_favorite(doctor_id).await,
            UiEvent::ShowDoctor { doctor_id } => self.show_doctor(doctor_id).await,
            UiEvent::OpenBooking { doctor_id } => match self.api.doctor(doctor_id).await {
                Ok(doctor) => self.update(|s| s.open_booking(doctor)).await,
                Err(err) => self.report("open_booking", &err).await,
            },
            UiEvent::SelectDate { target, date } => self.request_slots(target, &date).await,
            UiEvent::SelectTime { target, date_time } => {
                let chosen = self.snapshot().await.choose_slot(target, &date_time);
                match chosen {
                    Ok(next) => self.update(|_| next).await,
                    Err(err) => self.report("select_time", &err.into()).await,
                }
            }
            UiEvent::SelectAppointmentType(appointment_type) => {
                self.update(|s| s.with_appointment_type(appointment_type)).await;
            }
            UiEvent::SubmitBooking(patient) => self.submit_booking(patient).await,
            UiEvent::LoadAppointments => {
                if self.snapshot().await.patient_email().is_none() {
                    self.report("load_appointments", &ValidationError::MissingEmail.into())
                        .await;
                    return;
                }
                self.refresh_appointments().await;
            }
            UiEvent::CancelAppointment { appointment_id } => {
                match AppointmentService::cancel(self.api.as_ref(), appointment_id).await {
                    Ok(()) => {
                        self.toast_key(ToastLevel::Success, "toast.cancel.success", &[]).await;
                        self.refresh_appointments().await;
                    }
                    Err(err) => self.report("cancel", &err).await,
                }
            }
            UiEvent::OpenReschedule { appointment_id } => {
                match self.api.appointment(appointment_id).await {
                    Ok(appointment) => {
                        let today = self.today;
                        self.update(|s| s.open_reschedule(appointment, today)).await;
                    }
                    Err(err) => self.report("open_reschedule", &err).await,
                }
            }
            UiEvent::ChangeRescheduleMonth { delta } => {
                self.update(|s| s.reschedule_month(delta)).await;
            }
            UiEvent::SubmitReschedule => self.submit_reschedule().await,
            UiEvent::SubmitReview(form) => {
                let email = self.snapshot().await.preferences.patient_email;
                match ReviewService::submit(self.api.as_ref(), email.as_deref(), &form).await {
                    Ok(()) => {
                        self.toast_key(ToastLevel::Success, "toast.review.success", &[]).await;
                        self.refresh_appointments().await;
                        self.refresh_doctors(None).await;
                    }
                    Err(err) => self.report("review", &err).await,
                }
            }
            UiEvent::CheckUpcoming => self.check_upcoming().await,
            UiEvent::Settle => self.settle().await,
        }
    }

    async fn refresh_doctors(&self, specialty_id: Option<i64>) {
        let email = self.snapshot().await.preferences.patient_email;
        match self.api.doctors(specialty_id, email.as_deref()).await {
            Ok(doctors) => {
                debug!(count = doctors.len(), "doctors loaded");
                self.update(|s| s.with_doctors(doctors)).await;
            }
            Err(err) => {
                error!(error = %err, "failed to load doctors");
                self.toast_key(ToastLevel::Error, "toast.load.error", &[("item", "doctors")])
                    .await;
            }
        }
    }

    async fn refresh_appointments(&self) {
        let Some(email) = self.snapshot().await.preferences.patient_email else {
            return;
        };
        match AppointmentService::list(self.api.as_ref(), &email).await {
            Ok(appointments) => self.update(|s| s.with_appointments(appointments)).await,
            Err(err) => {
                error!(error = %err, "failed to load appointments");
                self.toast_key(ToastLevel::Error, "toast.load.error", &[("item", "appointments")])
                    .await;
            }
        }
    }

    async fn refresh_favorites(&self) {
        let Some(email) = self.snapshot().await.preferences.patient_email else {
            return;
        };
        match FavoritesService::load(self.api.as_ref(), &email).await {
            Ok(favorites) => self.update(|s| s.with_favorites(favorites)).await,
            Err(err) => error!(error = %err, "failed to load favorites"),
        }
    }

    async fn toggle_favorite(&self, doctor_id: i64) {
        let state = self.snapshot().await;
        let Some(email) = state.patient_email() else {
            self.toast_key(ToastLevel::Info, "favorites.signin", &[]).await;
            return;
        };
        match FavoritesService::toggle(self.api.as_ref(), Some(email), doctor_id, &state.favorites)
            .await
        {
            Ok(outcome) => {
                self.update(|s| s.with_favorites(outcome.favorites)).await;
                let key = if outcome.favorited {
                    "toast.favorite.added"
                } else {
                    "toast.favorite.removed"
                };
                let level = if outcome.favorited {
                    ToastLevel::Success
                } else {
                    ToastLevel::Info
                };
                self.toast_key(level, key, &[]).await;
            }
            Err(err) => self.report("toggle_favorite", &err).await,
        }
    }

    async fn show_doctor(&self, doctor_id: i64) {
        let (doctor, reviews, availability) = tokio::join!(
            self.api.doctor(doctor_id),
            self.api.doctor_reviews(doctor_id),
            self.api.doctor_availability(doctor_id),
        );
        let doctor = match doctor {
            Ok(doctor) => doctor,
            Err(err) => {
                self.report("show_doctor", &err).await;
                return;
            }
        };
        let reviews = reviews.unwrap_or_else(|err| {
            warn!(doctor_id, error = %err, "failed to load reviews");
            Vec::new()
        });
        let availability = availability
            .map_err(|err| warn!(doctor_id, error = %err, "failed to load availability"))
            .ok();
        self.update(|s| {
            s.with_doctor_detail(DoctorDetail {
                doctor,
                reviews,
                availability,
            })
        })
        .await;
    }

    async fn request_slots(&self, target: SlotTarget, date: &str) {
        let Some(parsed) = parse_date_key(date) else {
            self.report("select_date", &ValidationError::InvalidDate(date.to_string()).into())
                .await;
            return;
        };
        if parsed < self.today {
            self.report("select_date", &ValidationError::InvalidDate(date.to_string()).into())
                .await;
            return;
        }
        let date = date_key(parsed);

        let issued = {
            let mut state = self.store.lock().await;
            match state.request_slots(target, &date) {
                Some((next, token)) => {
                    let doctor_id = next.picker(target).map(|p| p.doctor_id);
                    *state = next;
                    doctor_id.map(|doctor_id| (doctor_id, token))
                }
                None => None,
            }
        };
        let Some((doctor_id, token)) = issued else {
            self.report("select_date", &ValidationError::MissingSlot.into()).await;
            return;
        };

        let engine = self.clone();
        let handle = tokio::spawn(async move {
            let result = lookup_slots(engine.api.as_ref(), doctor_id, &date).await;
            engine
                .finish_lookup(target, token, doctor_id, &date, result)
                .await;
        });
        self.lookups.lock().await.push(handle);
    }

    async fn finish_lookup(
        &self,
        target: SlotTarget,
        token: RequestToken,
        doctor_id: i64,
        date: &str,
        result: Result<Vec<crate::models::slot::TimeSlot>, BookingError>,
    ) {
        let failed = result.is_err();
        if let Err(err) = &result {
            error!(?target, token = token.value(), error = %err, "slot lookup failed");
        }
        let applied = {
            let mut state = self.store.lock().await;
            match state.apply_slots(target, token, doctor_id, date, result.ok()) {
                Some(next) => {
                    *state = next;
                    true
                }
                None => false,
            }
        };
        if !applied {
            debug!(?target, token = token.value(), "discarding stale slot response");
            return;
        }
        if failed {
            self.toast_key(ToastLevel::Error, "slots.error", &[]).await;
        }
    }

    async fn submit_booking(&self, patient: PatientDetails) {
        let state = self.snapshot().await;
        let Some(draft) = state.booking.as_ref() else {
            self.report("book", &ValidationError::MissingSlot.into()).await;
            return;
        };
        let form = BookingForm {
            doctor_id: draft.doctor.id,
            patient,
            date_time: draft.picker.chosen.clone(),
            appointment_type: draft.appointment_type,
        };
        match BookingService::submit(self.api.as_ref(), &form).await {
            Ok(summary) => {
                self.update(|s| s.booked(summary)).await;
                self.toast_key(ToastLevel::Success, "toast.booking.success", &[]).await;
                self.refresh_appointments().await;
            }
            Err(err) => self.report("book", &err).await,
        }
    }

    async fn submit_reschedule(&self) {
        let state = self.snapshot().await;
        let Some(draft) = state.reschedule.as_ref() else {
            self.report("reschedule", &ValidationError::MissingDateAndTime.into()).await;
            return;
        };
        let form = RescheduleForm {
            appointment_id: draft.appointment.id,
            date: draft.picker.date.clone(),
            date_time: draft.picker.chosen.clone(),
        };
        match AppointmentService::reschedule(self.api.as_ref(), &form).await {
            Ok(_) => {
                self.update(AppState::close_reschedule).await;
                self.toast_key(ToastLevel::Success, "toast.reschedule.success", &[]).await;
                self.refresh_appointments().await;
            }
            Err(err) => self.report("reschedule", &err).await,
        }
    }

    async fn check_upcoming(&self) {
        let state = self.snapshot().await;
        let Some(email) = state.patient_email() else {
            return;
        };
        match self.api.upcoming(email).await {
            Ok(upcoming) => {
                if let Some(banner) = upcoming_banner(&state.translator(), &upcoming) {
                    self.notifier.banner(&banner.title, &banner.message).await;
                }
            }
            Err(err) => error!(error = %err, "failed to check upcoming appointments"),
        }
    }
}
