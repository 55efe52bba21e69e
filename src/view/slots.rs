use crate::service::slots::{SlotOptions, SlotPicker};
use crate::service::translation::Translator;

pub fn render_slots(picker: &SlotPicker, translator: &Translator) -> String {
    match &picker.options {
        SlotOptions::Idle => translator.t("slots.pick_date"),
        SlotOptions::Loading => translator.t("slots.loading"),
        SlotOptions::Unavailable => translator.t("slots.empty"),
        SlotOptions::Failed => translator.t("slots.error"),
        SlotOptions::Available(slots) => slots
            .iter()
            .map(|slot| {
                let marker = if picker.is_chosen(slot) { "(x)" } else { "( )" };
                format!("{marker} {}  {}", slot.display_time, slot.iso_date_time)
            })
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::slot::TimeSlot;

    #[test]
    fn empty_day_has_its_own_message() {
        let picker = SlotPicker::new(1).for_date("2026-10-21").with_slots(vec![]);
        assert_eq!(
            render_slots(&picker, &Translator::default()),
            "No available slots for this date"
        );
    }

    #[test]
    fn chosen_slot_is_marked() {
        let picker = SlotPicker::new(1)
            .for_date("2026-10-21")
            .with_slots(vec![
                TimeSlot::new("2026-10-21T09:00:00", "09:00 AM"),
                TimeSlot::new("2026-10-21T09:30:00", "09:30 AM"),
            ])
            .choose("2026-10-21T09:30:00")
            .unwrap();
        let text = render_slots(&picker, &Translator::default());
        assert_eq!(
            text,
            "( ) 09:00 AM  2026-10-21T09:00:00\n(x) 09:30 AM  2026-10-21T09:30:00"
        );
    }
}
