use crate::models::appointment::Appointment;
use crate::service::appointments::UpcomingBanner;
use crate::service::booking::BookingSummary;
use crate::service::translation::Translator;

fn actions(appointment: &Appointment, translator: &Translator) -> Vec<String> {
    let mut actions = Vec::new();
    if appointment.can_reschedule {
        actions.push(translator.t("appointments.action.reschedule"));
    }
    if appointment.can_cancel {
        actions.push(translator.t("appointments.action.cancel"));
    }
    if appointment.can_review {
        actions.push(translator.t("appointments.action.review"));
    }
    actions
}

pub fn render_appointments(appointments: &[Appointment], translator: &Translator) -> String {
    if appointments.is_empty() {
        return format!(
            "{}\n{}",
            translator.t("appointments.empty.title"),
            translator.t("appointments.empty.desc")
        );
    }
    appointments
        .iter()
        .map(|appointment| {
            let mut row = format!(
                "#{} {} {} ({}) {} [{}]",
                appointment.id,
                appointment.date_time.format("%Y-%m-%d %H:%M"),
                appointment.doctor_name,
                appointment.specialty,
                translator.t(&appointment.appointment_type.label_key()),
                translator.t(&format!("appointments.status.{}", appointment.status.as_str())),
            );
            let actions = actions(appointment, translator);
            if !actions.is_empty() {
                row.push_str(&format!(" -> {}", actions.join(" / ")));
            }
            row
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_banner(banner: &UpcomingBanner) -> String {
    format!("{}\n{}", banner.title, banner.message)
}

pub fn render_booking_summary(summary: &BookingSummary, translator: &Translator) -> String {
    [
        translator.t("modal.preview.title"),
        format!("{}: {}", translator.t("booking.summary.patient"), summary.patient_name),
        format!("{}: {}", translator.t("booking.summary.doctor"), summary.doctor_name),
        format!("{}: {}", translator.t("booking.summary.date"), summary.date),
        format!("{}: {}", translator.t("booking.summary.time"), summary.time),
        format!(
            "{}: {}",
            translator.t("booking.summary.type"),
            translator.t(&summary.appointment_type.label_key())
        ),
        translator.t("modal.preview.desc"),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::appointment::{AppointmentStatus, AppointmentType};
    use crate::service::translation::Locale;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn appointment() -> Appointment {
        Appointment {
            id: 3,
            doctor_id: 5,
            doctor_name: "Sarah Johnson".to_string(),
            specialty: "Cardiology".to_string(),
            date_time: NaiveDate::from_ymd_opt(2026, 10, 21)
                .unwrap()
                .and_hms_opt(9, 30, 0)
                .unwrap(),
            status: AppointmentStatus::Scheduled,
            reason: None,
            appointment_type: AppointmentType::Video,
            reschedule_count: 0,
            can_reschedule: true,
            can_cancel: true,
            can_review: false,
            is_upcoming: true,
            patient_email: None,
            patient_id: None,
        }
    }

    #[test]
    fn row_lists_type_status_and_actions() {
        let text = render_appointments(&[appointment()], &Translator::default());
        assert_eq!(
            text,
            "#3 2026-10-21 09:30 Sarah Johnson (Cardiology) Video Call [Scheduled] -> Reschedule / Cancel"
        );
    }

    #[test]
    fn empty_list_uses_romanian_when_selected() {
        let en = render_appointments(&[], &Translator::new(Locale::En));
        let ro = render_appointments(&[], &Translator::new(Locale::Ro));
        assert!(en.starts_with("No appointments yet"));
        assert_ne!(en, ro);
    }
}
