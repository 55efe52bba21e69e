use crate::models::doctor::{Doctor, initials};
use crate::models::specialty::Specialty;
use crate::service::reviews::stars;
use crate::service::translation::Translator;
use crate::state::DoctorDetail;

const FAVORITE_MARK: &str = "♥";

pub fn render_specialties(specialties: &[Specialty], translator: &Translator) -> String {
    let mut lines = vec![format!("   {}", translator.t("doctors.filter.all"))];
    lines.extend(
        specialties
            .iter()
            .map(|specialty| format!("{:>2} {}", specialty.id, specialty.name)),
    );
    lines.join("\n")
}

fn doctor_row(doctor: &Doctor, translator: &Translator) -> String {
    let mark = if doctor.is_favorite { FAVORITE_MARK } else { " " };
    format!(
        "{mark} #{} {} ({}) {} {:.1} ({} {}) | {} {} | {} {}",
        doctor.id,
        doctor.name,
        doctor.specialty_name,
        stars(doctor.rating),
        doctor.rating,
        doctor.review_count,
        translator.t("doctor.reviews"),
        doctor.wait_minutes,
        translator.t("doctor.wait"),
        doctor.years_experience,
        translator.t("doctor.experience"),
    )
}

/// One row per doctor, or the empty-state text.
pub fn render_doctors(doctors: &[&Doctor], translator: &Translator) -> String {
    if doctors.is_empty() {
        return format!(
            "{}\n{}",
            translator.t("doctors.empty.title"),
            translator.t("doctors.empty.desc")
        );
    }
    doctors
        .iter()
        .map(|doctor| doctor_row(doctor, translator))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Doctors whose favorite flag is set, in list order.
pub fn render_favorites(doctors: &[Doctor], translator: &Translator) -> String {
    let favorites: Vec<&Doctor> = doctors.iter().filter(|doctor| doctor.is_favorite).collect();
    if favorites.is_empty() {
        return translator.t("favorites.empty");
    }
    favorites
        .iter()
        .map(|doctor| doctor_row(doctor, translator))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_doctor_detail(detail: &DoctorDetail, translator: &Translator) -> String {
    let doctor = &detail.doctor;
    let mut lines = vec![
        format!("[{}] {}", initials(&doctor.name), doctor.name),
        doctor.specialty_name.clone(),
        format!(
            "{} {:.1} ({} {})",
            stars(doctor.rating),
            doctor.rating,
            doctor.review_count,
            translator.t("doctor.reviews")
        ),
        String::new(),
        format!("{}:", translator.t("detail.about")),
        doctor
            .bio
            .clone()
            .unwrap_or_else(|| translator.t("doctor.no_bio")),
        format!(
            "{}: {} {}",
            translator.t("detail.experience"),
            doctor.years_experience,
            translator.t("doctor.experience")
        ),
        format!(
            "{}: {} {}",
            translator.t("detail.wait"),
            doctor.wait_minutes,
            translator.t("doctor.wait")
        ),
    ];
    if let Some(phone) = &doctor.phone {
        lines.push(format!("{}: {phone}", translator.t("detail.phone")));
    }

    if let Some(availability) = &detail.availability {
        lines.push(String::new());
        lines.push(format!("{}:", translator.t("detail.availability")));
        for (day, windows) in &availability.availability {
            let label = translator.t_or(&format!("day.{}", day.to_lowercase()), day);
            let open: Vec<String> = windows
                .iter()
                .filter(|window| window.available)
                .map(|window| format!("{}-{}", window.start, window.end))
                .collect();
            let hours = if open.is_empty() {
                translator.t("detail.unavailable")
            } else {
                open.join(", ")
            };
            lines.push(format!("  {label}: {hours}"));
        }
    }

    lines.push(String::new());
    lines.push(format!("{}:", translator.t("detail.reviews")));
    if detail.reviews.is_empty() {
        lines.push(format!("  {}", translator.t("detail.reviews.empty")));
    }
    for review in &detail.reviews {
        lines.push(format!(
            "  {} {} ({})",
            stars(f64::from(review.rating)),
            review.patient_name,
            review.date
        ));
        if let Some(comment) = review.comment.as_deref().filter(|c| !c.is_empty()) {
            lines.push(format!("    {comment}"));
        }
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::review::Review;
    use crate::service::translation::Locale;
    use pretty_assertions::assert_eq;

    fn doctor(favorite: bool) -> Doctor {
        Doctor {
            id: 5,
            name: "Sarah Johnson".to_string(),
            specialty_id: Some(1),
            specialty_name: "Cardiology".to_string(),
            rating: 4.6,
            review_count: 12,
            wait_minutes: 15,
            years_experience: 10,
            bio: None,
            is_favorite: favorite,
            email: None,
            phone: None,
            consultation_types: vec![],
            is_verified: true,
        }
    }

    #[test]
    fn doctor_row_shows_favorite_and_stars() {
        let doctor = doctor(true);
        let text = render_doctors(&[&doctor], &Translator::default());
        assert_eq!(
            text,
            "♥ #5 Sarah Johnson (Cardiology) ★★★★★ 4.6 (12 reviews) | 15 min wait | 10 years"
        );
    }

    #[test]
    fn empty_list_is_translated() {
        let text = render_doctors(&[], &Translator::new(Locale::En));
        assert!(text.starts_with("No doctors found"));
    }

    #[test]
    fn favorites_only_lists_flagged_doctors() {
        let translator = Translator::default();
        assert_eq!(render_favorites(&[doctor(false)], &translator), "No favorite doctors yet");
        assert!(render_favorites(&[doctor(true)], &translator).contains("Sarah Johnson"));
    }

    #[test]
    fn detail_falls_back_for_bio_and_reviews() {
        let detail = DoctorDetail {
            doctor: doctor(false),
            reviews: vec![],
            availability: None,
        };
        let text = render_doctor_detail(&detail, &Translator::default());
        assert!(text.starts_with("[SJ] Sarah Johnson"));
        assert!(text.contains("No bio available"));
        assert!(text.contains("No reviews yet."));
    }

    #[test]
    fn detail_lists_reviews() {
        let detail = DoctorDetail {
            doctor: doctor(false),
            reviews: vec![Review {
                id: 1,
                rating: 4,
                comment: Some("Very thorough".to_string()),
                date: "2026-09-01".to_string(),
                patient_name: "Ana P.".to_string(),
            }],
            availability: None,
        };
        let text = render_doctor_detail(&detail, &Translator::default());
        assert!(text.contains("  ★★★★☆ Ana P. (2026-09-01)\n    Very thorough"));
    }
}
