use chrono::NaiveDate;

use crate::errors::ValidationError;
use crate::models::appointment::{Appointment, AppointmentType};
use crate::models::doctor::{Doctor, DoctorAvailability};
use crate::models::preferences::{Preferences, Theme};
use crate::models::review::Review;
use crate::models::slot::TimeSlot;
use crate::models::specialty::Specialty;
use crate::service::booking::BookingSummary;
use crate::service::calendar::{MonthCursor, MonthGrid, build_month_grid};
use crate::service::doctor_filter::DoctorFilter;
use crate::service::favorites::{FavoriteSet, mark_favorites};
use crate::service::slots::{RequestToken, RequestTokens, SlotPicker, SlotTarget};
use crate::service::translation::{Locale, Translator};

#[derive(Debug, Clone, PartialEq)]
pub struct BookingDraft {
    pub doctor: Doctor,
    pub picker: SlotPicker,
    pub appointment_type: AppointmentType,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RescheduleDraft {
    pub appointment: Appointment,
    pub cursor: MonthCursor,
    pub picker: SlotPicker,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DoctorDetail {
    pub doctor: Doctor,
    pub reviews: Vec<Review>,
    pub availability: Option<DoctorAvailability>,
}

/// Everything the views render. Each change produces a new snapshot; nothing
/// is edited in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub preferences: Preferences,
    pub specialties: Vec<Specialty>,
    pub doctors: Vec<Doctor>,
    pub filter: DoctorFilter,
    pub favorites: FavoriteSet,
    pub appointments: Vec<Appointment>,
    pub doctor_detail: Option<DoctorDetail>,
    pub booking: Option<BookingDraft>,
    pub reschedule: Option<RescheduleDraft>,
    pub last_booking: Option<BookingSummary>,
    pub slot_tokens: RequestTokens,
}

impl AppState {
    pub fn new(preferences: Preferences) -> Self {
        Self {
            preferences,
            ..Self::default()
        }
    }

    pub fn translator(&self) -> Translator {
        Translator::new(self.preferences.language)
    }

    pub fn patient_email(&self) -> Option<&str> {
        self.preferences.patient_email.as_deref()
    }

    pub fn visible_doctors(&self) -> Vec<&Doctor> {
        self.filter.apply(&self.doctors)
    }

    pub fn signed_in(&self, email: &str) -> Self {
        Self {
            preferences: Preferences {
                patient_email: Some(email.to_string()),
                ..self.preferences.clone()
            },
            ..self.clone()
        }
    }

    /// Forgets the patient along with everything loaded for them.
    pub fn signed_out(&self) -> Self {
        Self {
            preferences: Preferences {
                patient_email: None,
                ..self.preferences.clone()
            },
            favorites: FavoriteSet::new(),
            doctors: mark_favorites(&self.doctors, &FavoriteSet::new()),
            appointments: Vec::new(),
            ..self.clone()
        }
    }

    pub fn with_language(&self, language: Locale) -> Self {
        Self {
            preferences: Preferences {
                language,
                ..self.preferences.clone()
            },
            ..self.clone()
        }
    }

    pub fn with_theme(&self, theme: Theme) -> Self {
        Self {
            preferences: Preferences {
                theme,
                ..self.preferences.clone()
            },
            ..self.clone()
        }
    }

    pub fn with_specialties(&self, specialties: Vec<Specialty>) -> Self {
        Self {
            specialties,
            ..self.clone()
        }
    }

    /// Replaces the list wholesale. Doctors flagged by the backend join the
    /// favorite set so both stay in agreement.
    pub fn with_doctors(&self, doctors: Vec<Doctor>) -> Self {
        let mut favorites = self.favorites.clone();
        favorites.extend(doctors.iter().filter(|d| d.is_favorite).map(|d| d.id));
        Self {
            doctors: mark_favorites(&doctors, &favorites),
            favorites,
            ..self.clone()
        }
    }

    pub fn with_filter(&self, filter: DoctorFilter) -> Self {
        Self {
            filter,
            ..self.clone()
        }
    }

    pub fn with_favorites(&self, favorites: FavoriteSet) -> Self {
        Self {
            doctors: mark_favorites(&self.doctors, &favorites),
            favorites,
            ..self.clone()
        }
    }

    pub fn with_appointments(&self, appointments: Vec<Appointment>) -> Self {
        Self {
            appointments,
            ..self.clone()
        }
    }

    pub fn with_doctor_detail(&self, detail: DoctorDetail) -> Self {
        Self {
            doctor_detail: Some(detail),
            ..self.clone()
        }
    }

    /// Opening a form retires any lookup still in flight for the previous one.
    pub fn open_booking(&self, doctor: Doctor) -> Self {
        let (slot_tokens, _) = self.slot_tokens.issue(SlotTarget::Booking);
        Self {
            booking: Some(BookingDraft {
                picker: SlotPicker::new(doctor.id),
                doctor,
                appointment_type: AppointmentType::default(),
            }),
            last_booking: None,
            slot_tokens,
            ..self.clone()
        }
    }

    pub fn with_appointment_type(&self, appointment_type: AppointmentType) -> Self {
        Self {
            booking: self.booking.clone().map(|draft| BookingDraft {
                appointment_type,
                ..draft
            }),
            ..self.clone()
        }
    }

    pub fn booked(&self, summary: BookingSummary) -> Self {
        let (slot_tokens, _) = self.slot_tokens.issue(SlotTarget::Booking);
        Self {
            booking: None,
            last_booking: Some(summary),
            slot_tokens,
            ..self.clone()
        }
    }

    pub fn open_reschedule(&self, appointment: Appointment, today: NaiveDate) -> Self {
        let (slot_tokens, _) = self.slot_tokens.issue(SlotTarget::Reschedule);
        Self {
            slot_tokens,
            reschedule: Some(RescheduleDraft {
                picker: SlotPicker::new(appointment.doctor_id),
                appointment,
                cursor: MonthCursor::containing(today),
            }),
            ..self.clone()
        }
    }

    pub fn reschedule_month(&self, delta: i32) -> Self {
        Self {
            reschedule: self.reschedule.clone().map(|draft| RescheduleDraft {
                cursor: draft.cursor.advance(delta),
                ..draft
            }),
            ..self.clone()
        }
    }

    pub fn close_reschedule(&self) -> Self {
        let (slot_tokens, _) = self.slot_tokens.issue(SlotTarget::Reschedule);
        Self {
            reschedule: None,
            slot_tokens,
            ..self.clone()
        }
    }

    pub fn reschedule_grid(&self, today: NaiveDate) -> Option<MonthGrid> {
        let draft = self.reschedule.as_ref()?;
        Some(build_month_grid(draft.cursor, today, draft.picker.date.as_deref()))
    }

    pub fn picker(&self, target: SlotTarget) -> Option<&SlotPicker> {
        match target {
            SlotTarget::Booking => self.booking.as_ref().map(|draft| &draft.picker),
            SlotTarget::Reschedule => self.reschedule.as_ref().map(|draft| &draft.picker),
        }
    }

    fn with_picker(&self, target: SlotTarget, picker: SlotPicker) -> Self {
        match target {
            SlotTarget::Booking => Self {
                booking: self
                    .booking
                    .clone()
                    .map(|draft| BookingDraft { picker, ..draft }),
                ..self.clone()
            },
            SlotTarget::Reschedule => Self {
                reschedule: self
                    .reschedule
                    .clone()
                    .map(|draft| RescheduleDraft { picker, ..draft }),
                ..self.clone()
            },
        }
    }

    /// Starts a lookup for `date` and returns the token its response must
    /// carry. `None` when no booking/reschedule is open for the target.
    pub fn request_slots(&self, target: SlotTarget, date: &str) -> Option<(Self, RequestToken)> {
        let picker = self.picker(target)?.for_date(date);
        let (slot_tokens, token) = self.slot_tokens.issue(target);
        let next = Self {
            slot_tokens,
            ..self.with_picker(target, picker)
        };
        Some((next, token))
    }

    /// Applies a finished lookup for `doctor_id` on `date`. A response whose
    /// token is no longer the latest for its target, or whose doctor and date
    /// no longer match the open picker, leaves the state untouched.
    pub fn apply_slots(
        &self,
        target: SlotTarget,
        token: RequestToken,
        doctor_id: i64,
        date: &str,
        slots: Option<Vec<TimeSlot>>,
    ) -> Option<Self> {
        if !self.slot_tokens.is_current(target, token) {
            return None;
        }
        let picker = self.picker(target)?;
        if picker.doctor_id != doctor_id || picker.date.as_deref() != Some(date) {
            return None;
        }
        let picker = match slots {
            Some(slots) => picker.with_slots(slots),
            None => picker.failed(),
        };
        Some(self.with_picker(target, picker))
    }

    pub fn choose_slot(&self, target: SlotTarget, iso_date_time: &str) -> Result<Self, ValidationError> {
        let picker = self.picker(target).ok_or(ValidationError::MissingSlot)?;
        let picker = picker.choose(iso_date_time)?;
        Ok(self.with_picker(target, picker))
    }
}
