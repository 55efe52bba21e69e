use crate::errors::{BookingResult, ValidationError};
use crate::models::slot::TimeSlot;
use crate::service::api_service::BookingApi;
use crate::service::calendar::{date_key, parse_date_key};

/// The two places that look up slots. Each keeps its own token sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotTarget {
    Booking,
    Reschedule,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Last token issued per target. Only a response carrying the latest token
/// may be applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestTokens {
    booking: u64,
    reschedule: u64,
}

impl RequestTokens {
    pub fn issue(self, target: SlotTarget) -> (Self, RequestToken) {
        let mut next = self;
        let counter = match target {
            SlotTarget::Booking => &mut next.booking,
            SlotTarget::Reschedule => &mut next.reschedule,
        };
        *counter += 1;
        let token = RequestToken(*counter);
        (next, token)
    }

    pub fn latest(&self, target: SlotTarget) -> RequestToken {
        match target {
            SlotTarget::Booking => RequestToken(self.booking),
            SlotTarget::Reschedule => RequestToken(self.reschedule),
        }
    }

    pub fn is_current(&self, target: SlotTarget, token: RequestToken) -> bool {
        self.latest(target) == token
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotOptions {
    /// No date picked yet.
    Idle,
    Loading,
    /// The doctor has nothing free that day.
    Unavailable,
    Available(Vec<TimeSlot>),
    Failed,
}

/// Date and time choice for one doctor. Every change returns a new picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotPicker {
    pub doctor_id: i64,
    pub date: Option<String>,
    pub options: SlotOptions,
    pub chosen: Option<String>,
}

impl SlotPicker {
    pub fn new(doctor_id: i64) -> Self {
        Self {
            doctor_id,
            date: None,
            options: SlotOptions::Idle,
            chosen: None,
        }
    }

    /// A new date drops the previous time choice and starts loading.
    pub fn for_date(&self, date: &str) -> Self {
        Self {
            doctor_id: self.doctor_id,
            date: Some(date.to_string()),
            options: SlotOptions::Loading,
            chosen: None,
        }
    }

    pub fn with_slots(&self, slots: Vec<TimeSlot>) -> Self {
        let options = if slots.is_empty() {
            SlotOptions::Unavailable
        } else {
            SlotOptions::Available(slots)
        };
        Self {
            options,
            chosen: None,
            ..self.clone()
        }
    }

    pub fn failed(&self) -> Self {
        Self {
            options: SlotOptions::Failed,
            chosen: None,
            ..self.clone()
        }
    }

    pub fn slots(&self) -> &[TimeSlot] {
        match &self.options {
            SlotOptions::Available(slots) => slots,
            _ => &[],
        }
    }

    /// Single selection: choosing replaces any earlier choice.
    pub fn choose(&self, iso_date_time: &str) -> Result<Self, ValidationError> {
        if !self.slots().iter().any(|slot| slot.iso_date_time == iso_date_time) {
            return Err(ValidationError::UnknownSlot(iso_date_time.to_string()));
        }
        Ok(Self {
            chosen: Some(iso_date_time.to_string()),
            ..self.clone()
        })
    }

    pub fn chosen_slot(&self) -> Option<&TimeSlot> {
        let chosen = self.chosen.as_deref()?;
        self.slots().iter().find(|slot| slot.iso_date_time == chosen)
    }

    pub fn is_chosen(&self, slot: &TimeSlot) -> bool {
        self.chosen.as_deref() == Some(slot.iso_date_time.as_str())
    }
}

/// Normalises the date before asking the backend, so a malformed date never
/// reaches the network.
pub async fn lookup_slots(
    api: &dyn BookingApi,
    doctor_id: i64,
    date: &str,
) -> BookingResult<Vec<TimeSlot>> {
    let parsed = parse_date_key(date).ok_or_else(|| ValidationError::InvalidDate(date.to_string()))?;
    api.available_slots(doctor_id, &date_key(parsed)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn slots() -> Vec<TimeSlot> {
        vec![
            TimeSlot::new("2026-10-21T09:00:00", "09:00 AM"),
            TimeSlot::new("2026-10-21T09:30:00", "09:30 AM"),
        ]
    }

    #[test]
    fn tokens_increase_per_target() {
        let tokens = RequestTokens::default();
        let (tokens, first) = tokens.issue(SlotTarget::Booking);
        let (tokens, second) = tokens.issue(SlotTarget::Booking);
        let (tokens, other) = tokens.issue(SlotTarget::Reschedule);
        assert!(second > first);
        assert!(!tokens.is_current(SlotTarget::Booking, first));
        assert!(tokens.is_current(SlotTarget::Booking, second));
        assert!(tokens.is_current(SlotTarget::Reschedule, other));
    }

    #[test]
    fn empty_result_is_unavailable() {
        let picker = SlotPicker::new(1).for_date("2026-10-21").with_slots(vec![]);
        assert_eq!(picker.options, SlotOptions::Unavailable);
    }

    #[test]
    fn choosing_replaces_previous_choice() {
        let picker = SlotPicker::new(1).for_date("2026-10-21").with_slots(slots());
        let picker = picker.choose("2026-10-21T09:00:00").unwrap();
        let picker = picker.choose("2026-10-21T09:30:00").unwrap();
        assert_eq!(picker.chosen.as_deref(), Some("2026-10-21T09:30:00"));
        assert_eq!(picker.slots().iter().filter(|s| picker.is_chosen(s)).count(), 1);
        assert_eq!(picker.chosen_slot().map(|s| s.display_time.as_str()), Some("09:30 AM"));
    }

    #[test]
    fn unknown_slot_is_rejected() {
        let picker = SlotPicker::new(1).for_date("2026-10-21").with_slots(slots());
        assert_eq!(
            picker.choose("2026-10-21T17:00:00"),
            Err(ValidationError::UnknownSlot("2026-10-21T17:00:00".to_string()))
        );
    }

    #[test]
    fn new_date_clears_choice() {
        let picker = SlotPicker::new(1)
            .for_date("2026-10-21")
            .with_slots(slots())
            .choose("2026-10-21T09:00:00")
            .unwrap();
        let moved = picker.for_date("2026-10-22");
        assert_eq!(moved.chosen, None);
        assert_eq!(moved.options, SlotOptions::Loading);
    }
}
